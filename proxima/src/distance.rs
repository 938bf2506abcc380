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

use ndarray::ArrayView1;

use crate::errors::DistanceError;

/// Computes the Euclidean distance between two feature vectors.
///
/// Both vectors must have the same dimensionality; comparing vectors of
/// unequal length is a data-preparation bug and fails with
/// `DistanceError::DimensionMismatch` rather than truncating.
///
/// # Parameters
/// - `a`: The first feature vector.
/// - `b`: The second feature vector.
///
/// # Returns
/// The non-negative distance between `a` and `b`.
pub fn euclidean(a: ArrayView1<f64>, b: ArrayView1<f64>) -> Result<f64, DistanceError> {
    if a.len() != b.len() {
        return Err(DistanceError::DimensionMismatch { expected: a.len(), actual: b.len() });
    }

    let squared_sum = ndarray::Zip::from(a).and(b).fold(0.0, |acc, &a_i, &b_i| {
        let diff = a_i - b_i;
        acc + diff * diff
    });
    Ok(squared_sum.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DistanceError;
    use ndarray::array;

    #[test]
    fn euclidean_identical_vectors() {
        let a = array![3.2, 0.5, 11.0];
        let d = euclidean(a.view(), a.view()).unwrap();
        assert_eq!(d, 0.0);
    }

    #[test]
    fn euclidean_is_symmetric() {
        let a = array![1.0, 2.0, 3.0];
        let b = array![4.0, 6.0, 8.0];
        let d_ab = euclidean(a.view(), b.view()).unwrap();
        let d_ba = euclidean(b.view(), a.view()).unwrap();
        assert_eq!(d_ab, d_ba);
    }

    #[test]
    fn euclidean_known_value() {
        let a = array![0.0, 1.0, 2.0];
        let b = array![0.0, 2.0, 4.0];
        let d = euclidean(a.view(), b.view()).unwrap();
        assert!((d - 5.0_f64.sqrt()).abs() < 1e-12, "Expected sqrt(5), got {}", d);
    }

    #[test]
    fn euclidean_dimension_mismatch() {
        let a = array![1.0, 2.0];
        let b = array![1.0, 2.0, 3.0];
        let result = euclidean(a.view(), b.view());
        assert!(matches!(
            result,
            Err(DistanceError::DimensionMismatch { expected: 2, actual: 3 })
        ));
    }
}
