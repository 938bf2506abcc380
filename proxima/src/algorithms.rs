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

use std::hash::Hash;
use std::marker::PhantomData;

use ndarray::{Array2, ArrayView1, Axis};

use crate::dataset::ReferenceSet;
use crate::errors::{DatasetError, ModelError, NeighborError, ScoreError};
use crate::metrics::accuracy;
use crate::neighbors::find_neighbors;
use crate::scalers::{Scaler, StandardScaler};
use crate::vote::plurality;

/// Predicts the label of a single query point by plurality vote over its
/// `k` nearest reference points.
///
/// An empty reference set yields `VoteError::EmptyNeighborSet`, wrapped in
/// `ModelError::Vote`.
pub fn classify<L: Eq + Hash + Clone>(
    reference: &ReferenceSet<L>,
    query: ArrayView1<f64>,
    k: usize,
) -> Result<L, ModelError> {
    let neighbors = find_neighbors(reference, query, k)?;
    let labels: Vec<L> = neighbors.into_iter().map(|n| n.label).collect();
    Ok(plurality(&labels)?)
}

/// Classifies every row of `queries` independently against `reference`.
///
/// Queries do not interact; the scan runs sequentially, row by row.
pub fn batch_classify<L: Eq + Hash + Clone>(
    reference: &ReferenceSet<L>,
    queries: &Array2<f64>,
    k: usize,
) -> Result<Vec<L>, ModelError> {
    let mut predictions = Vec::with_capacity(queries.nrows());
    for row in queries.axis_iter(Axis(0)) {
        predictions.push(classify(reference, row, k)?);
    }
    Ok(predictions)
}

pub struct KnnClassifierBuilder<L> {
    k: usize,
    normalize: bool,
    x_scaler: StandardScaler<f64>,
    marker: PhantomData<L>,
}

impl<L> KnnClassifierBuilder<L> {
    pub fn k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn scaler(mut self, scaler: StandardScaler<f64>) -> Self {
        self.x_scaler = scaler;
        self
    }

    pub fn build(self) -> KnnClassifier<L> {
        KnnClassifier {
            reference: None,
            k: self.k,
            normalize: self.normalize,
            x_scaler: self.x_scaler,
        }
    }
}

/// A k-nearest-neighbor classifier over a labeled reference set.
///
/// Distances are Euclidean; predictions are plurality votes with ties
/// resolved toward the closest neighbor. Feature standardization is applied
/// when `normalize` is enabled and is fitted on the training data only.
///
/// # Generics
/// - `L`: The label type, categorical (`Eq + Hash + Clone`).
pub struct KnnClassifier<L> {
    reference: Option<ReferenceSet<L>>,
    k: usize,
    normalize: bool,
    x_scaler: StandardScaler<f64>,
}

impl<L: Eq + Hash + Clone> KnnClassifier<L> {
    pub fn new() -> KnnClassifierBuilder<L> {
        KnnClassifierBuilder {
            k: 3,
            normalize: true,
            x_scaler: StandardScaler::new(),
            marker: PhantomData,
        }
    }

    /// Stores the training data as the reference set for later queries.
    ///
    /// `k` larger than the number of training rows is accepted; queries then
    /// consult every stored point.
    ///
    /// # Parameters
    /// - `x`: Feature matrix of shape `(n_samples, n_features)`.
    /// - `y`: One label per row of `x`.
    pub fn fit(&mut self, x: &Array2<f64>, y: &[L]) -> Result<(), ModelError> {
        if x.ncols() == 0 {
            return Err(DatasetError::NoFeatures.into());
        }
        if x.nrows() == 0 || y.is_empty() {
            return Err(DatasetError::EmptyInput.into());
        }
        if x.nrows() != y.len() {
            return Err(DatasetError::LengthMismatch {
                expected: x.nrows(),
                actual: y.len(),
            }
            .into());
        }
        if self.k == 0 {
            return Err(NeighborError::ZeroNeighborCount.into());
        }

        let x_scaled = if self.normalize { self.x_scaler.fit_transform(x)? } else { x.clone() };

        self.reference = Some(ReferenceSet::from_parts(x_scaled, y.to_vec())?);
        Ok(())
    }

    /// Predicts one label per row of `x`.
    ///
    /// # Parameters
    /// - `x`: Query matrix of shape `(n_queries, n_features)`, with the same
    ///   feature count the model was fitted with.
    ///
    /// # Returns
    /// The predicted labels in row order.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Vec<L>, ModelError> {
        let reference = self.reference.as_ref().ok_or(ModelError::NotFitted)?;
        if x.nrows() == 0 {
            return Err(DatasetError::EmptyInput.into());
        }

        let x_scaled = if self.normalize { self.x_scaler.transform(x)? } else { x.clone() };
        batch_classify(reference, &x_scaled, self.k)
    }

    /// Predicts the label of a single query point.
    pub fn classify(&self, query: ArrayView1<f64>) -> Result<L, ModelError> {
        let x = query.to_owned().insert_axis(Axis(0));
        let mut predictions = self.predict(&x)?;
        Ok(predictions.pop().expect("predict returns one label per query row"))
    }

    /// Fraction of predictions matching the true labels.
    pub fn calculate_accuracy(&self, truth: &[L], predicted: &[L]) -> Result<f64, ScoreError> {
        accuracy(truth, predicted)
    }

    /// The fitted reference set, if any.
    pub fn reference(&self) -> Option<&ReferenceSet<L>> {
        self.reference.as_ref()
    }
}
