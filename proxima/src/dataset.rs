// BSD 3-Clause License
//
// Copyright (c) 2025, BlackPortal ○
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use ndarray::{Array2, ArrayView1};

use crate::errors::DatasetError;

/// A labeled collection of feature vectors used to classify new points.
///
/// Rows of `vectors` are the feature vectors; `labels[i]` is the label of
/// row `i`. The pairing is validated once at construction and the set is
/// read-only afterwards, so concurrent queries never race.
///
/// Insertion order is preserved: the row index is the tie-breaker for
/// neighbor searches, so two points at the same distance resolve to the
/// first-inserted one.
///
/// # Generics
/// - `L`: The label type. Categorical, with no ordering semantics; integers,
///   strings, and enums all work.
pub struct ReferenceSet<L> {
    vectors: Array2<f64>,
    labels: Vec<L>,
}

impl<L> ReferenceSet<L> {
    /// Builds a reference set from a feature matrix and its labels.
    ///
    /// # Parameters
    /// - `vectors`: Feature matrix of shape `(n_points, n_dims)`.
    /// - `labels`: One label per row of `vectors`.
    ///
    /// # Returns
    /// The validated set, or `DatasetError::NoFeatures` when the matrix has
    /// zero columns, or `DatasetError::LengthMismatch` when row and label
    /// counts disagree. A zero-row set is valid; querying it yields no
    /// neighbors.
    pub fn from_parts(vectors: Array2<f64>, labels: Vec<L>) -> Result<Self, DatasetError> {
        if vectors.ncols() == 0 {
            return Err(DatasetError::NoFeatures);
        }
        if vectors.nrows() != labels.len() {
            return Err(DatasetError::LengthMismatch {
                expected: vectors.nrows(),
                actual: labels.len(),
            });
        }
        Ok(ReferenceSet { vectors, labels })
    }

    /// Number of labeled points in the set.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Dimensionality shared by every vector in the set.
    pub fn dim(&self) -> usize {
        self.vectors.ncols()
    }

    /// The feature vector stored at `index`.
    pub fn vector(&self, index: usize) -> ArrayView1<'_, f64> {
        self.vectors.row(index)
    }

    /// The label stored at `index`.
    pub fn label(&self, index: usize) -> &L {
        &self.labels[index]
    }

    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    pub fn vectors(&self) -> &Array2<f64> {
        &self.vectors
    }

    /// Iterates points in insertion order as `(vector, label)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (ArrayView1<'_, f64>, &L)> {
        self.vectors.outer_iter().zip(self.labels.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DatasetError;
    use ndarray::{array, Array2};

    #[test]
    fn from_parts_valid() {
        let vectors = array![[1.0, 2.0], [3.0, 4.0]];
        let set = ReferenceSet::from_parts(vectors, vec!["a", "b"]).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.dim(), 2);
        assert_eq!(*set.label(1), "b");
        assert_eq!(set.vector(0), array![1.0, 2.0]);
    }

    #[test]
    fn from_parts_length_mismatch() {
        let vectors = array![[1.0, 2.0], [3.0, 4.0]];
        let result = ReferenceSet::from_parts(vectors, vec![0]);
        assert!(matches!(
            result,
            Err(DatasetError::LengthMismatch { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn from_parts_no_features() {
        let vectors: Array2<f64> = Array2::zeros((2, 0));
        let result = ReferenceSet::from_parts(vectors, vec![0, 1]);
        assert!(matches!(result, Err(DatasetError::NoFeatures)));
    }

    #[test]
    fn from_parts_empty_set_is_valid() {
        let vectors: Array2<f64> = Array2::zeros((0, 3));
        let set = ReferenceSet::<u8>::from_parts(vectors, Vec::new()).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.dim(), 3);
    }

    #[test]
    fn iter_preserves_insertion_order() {
        let vectors = array![[1.0], [2.0], [3.0]];
        let set = ReferenceSet::from_parts(vectors, vec![10, 20, 30]).unwrap();
        let labels: Vec<i32> = set.iter().map(|(_, &label)| label).collect();
        assert_eq!(labels, vec![10, 20, 30]);
    }
}
