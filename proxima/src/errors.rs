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

use thiserror::Error;

/// Errors raised when comparing feature vectors.
#[derive(Error, Debug)]
pub enum DistanceError {
    #[error("Dimension mismatch: expected {expected} dimensions, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Errors raised while searching a reference set for nearest neighbors.
#[derive(Error, Debug)]
pub enum NeighborError {
    #[error("Neighbor count must be at least 1")]
    ZeroNeighborCount,

    #[error(transparent)]
    Distance(#[from] DistanceError),
}

/// Errors raised by plurality voting.
#[derive(Error, Debug)]
pub enum VoteError {
    #[error("Cannot vote on an empty neighbor set")]
    EmptyNeighborSet,
}

/// Errors raised while scoring predictions against ground truth.
#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Truth and prediction sequences must be non-empty")]
    EmptyInput,

    #[error("Length mismatch: truth has {expected} entries, predictions have {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Errors raised when assembling a labeled reference set.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Input data is empty")]
    EmptyInput,

    #[error("Feature vectors must have at least one dimension")]
    NoFeatures,

    #[error("Length mismatch: {expected} vectors, {actual} labels")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Errors raised by feature scalers.
#[derive(Error, Debug)]
pub enum ScalerError {
    #[error("Input data is empty")]
    EmptyInput,

    #[error("Input data has no feature columns")]
    NoFeatures,

    #[error("Scaler has not been fitted")]
    NotFitted,

    #[error("Dimension mismatch: expected {expected} columns, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Umbrella error for classifier operations.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Model has not been fitted")]
    NotFitted,

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Scaler(#[from] ScalerError),

    #[error(transparent)]
    Neighbor(#[from] NeighborError),

    #[error(transparent)]
    Vote(#[from] VoteError),
}
