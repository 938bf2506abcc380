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

use ndarray::{Array1, Array2, Axis};
use num_traits::{Float, FromPrimitive};

use crate::errors::ScalerError;

pub trait Scaler<T: Float> {
    fn fit(&mut self, x: &Array2<T>) -> Result<(), ScalerError>;

    fn transform(&self, x: &Array2<T>) -> Result<Array2<T>, ScalerError>;

    fn inverse_transform(&self, x: &Array2<T>) -> Result<Array2<T>, ScalerError>;

    fn fit_transform(&mut self, x: &Array2<T>) -> Result<Array2<T>, ScalerError> {
        self.fit(x)?;
        self.transform(x)
    }
}

/// Standardizes features to zero mean and unit variance per column.
///
/// Zero-variance columns fall back to a standard deviation of one so they
/// pass through unchanged instead of dividing by zero.
#[derive(Clone)]
pub struct StandardScaler<T: Float> {
    mean: Option<Array1<T>>,
    std: Option<Array1<T>>,
}

impl<T: Float + FromPrimitive> StandardScaler<T> {
    pub fn new() -> Self {
        StandardScaler { mean: None, std: None }
    }

    fn fitted(&self) -> Result<(&Array1<T>, &Array1<T>), ScalerError> {
        match (self.mean.as_ref(), self.std.as_ref()) {
            (Some(mean), Some(std)) => Ok((mean, std)),
            _ => Err(ScalerError::NotFitted),
        }
    }
}

impl<T: Float + FromPrimitive> Default for StandardScaler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + FromPrimitive> Scaler<T> for StandardScaler<T> {
    fn fit(&mut self, x: &Array2<T>) -> Result<(), ScalerError> {
        if x.ncols() == 0 {
            return Err(ScalerError::NoFeatures);
        }
        if x.nrows() == 0 {
            return Err(ScalerError::EmptyInput);
        }

        let mean = x.mean_axis(Axis(0)).ok_or(ScalerError::EmptyInput)?;
        let std = x.var_axis(Axis(0), T::one()).mapv(|v| v.sqrt());
        self.mean = Some(mean);
        self.std = Some(std.mapv(|s| if s == T::zero() { T::one() } else { s }));
        Ok(())
    }

    fn transform(&self, x: &Array2<T>) -> Result<Array2<T>, ScalerError> {
        let (mean, std) = self.fitted()?;
        if x.ncols() != mean.len() {
            return Err(ScalerError::DimensionMismatch {
                expected: mean.len(),
                actual: x.ncols(),
            });
        }
        Ok((x - mean) / std)
    }

    fn inverse_transform(&self, x: &Array2<T>) -> Result<Array2<T>, ScalerError> {
        let (mean, std) = self.fitted()?;
        if x.ncols() != mean.len() {
            return Err(ScalerError::DimensionMismatch {
                expected: mean.len(),
                actual: x.ncols(),
            });
        }
        Ok(x * std + mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2};

    #[test]
    fn test_standard_scaler_fit_transform() {
        let x = Array2::from_shape_vec((3, 2), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let mut scaler = StandardScaler::new();
        let x_scaled = scaler.fit_transform(&x).unwrap();

        // Check mean ~ 0 and std ~ 1 per column
        let mean = x_scaled.mean_axis(Axis(0)).unwrap();
        let std = x_scaled.var_axis(Axis(0), 1.0).mapv(|v| v.sqrt());
        for &m in mean.iter() {
            assert!((m.abs() < 1e-10), "Mean should be ~0, got {}", m);
        }
        for &s in std.iter() {
            assert!((s - 1.0).abs() < 1e-10, "Std should be ~1, got {}", s);
        }
    }

    #[test]
    fn test_standard_scaler_inverse_transform() {
        let x = Array2::from_shape_vec((3, 2), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let mut scaler = StandardScaler::new();
        let x_scaled = scaler.fit_transform(&x).unwrap();
        let x_restored = scaler.inverse_transform(&x_scaled).unwrap();

        // Check restored data matches original
        for (orig, restored) in x.iter().zip(x_restored.iter()) {
            assert!((orig - restored).abs() < 1e-10, "Restored value differs");
        }
    }

    #[test]
    fn test_standard_scaler_zero_variance() {
        let x = Array2::from_shape_vec((3, 2), vec![1.0, 2.0, 1.0, 2.0, 1.0, 2.0]).unwrap();
        let mut scaler = StandardScaler::new();
        let x_scaled = scaler.fit_transform(&x).unwrap();

        // Check constant columns are unchanged (std=1 fallback)
        assert_eq!(x_scaled.column(0), Array1::from_vec(vec![0.0, 0.0, 0.0]));
        assert_eq!(x_scaled.column(1), Array1::from_vec(vec![0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_standard_scaler_not_fitted() {
        let scaler: StandardScaler<f64> = StandardScaler::new();
        let x = Array2::from_shape_vec((1, 2), vec![1.0, 2.0]).unwrap();
        let result = scaler.transform(&x);
        assert!(matches!(result, Err(ScalerError::NotFitted)));
    }

    #[test]
    fn test_standard_scaler_empty_input() {
        let mut scaler: StandardScaler<f64> = StandardScaler::new();
        let x: Array2<f64> = Array2::zeros((0, 2));
        let result = scaler.fit(&x);
        assert!(matches!(result, Err(ScalerError::EmptyInput)));
    }

    #[test]
    fn test_standard_scaler_transform_dimension_mismatch() {
        let x = Array2::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let mut scaler = StandardScaler::new();
        scaler.fit(&x).unwrap();
        let other = Array2::from_shape_vec((1, 3), vec![1.0, 2.0, 3.0]).unwrap();
        let result = scaler.transform(&other);
        assert!(matches!(
            result,
            Err(ScalerError::DimensionMismatch { expected: 2, actual: 3 })
        ));
    }
}
