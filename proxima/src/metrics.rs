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

use crate::errors::ScoreError;

/// Computes the fraction of predictions that match the ground truth.
///
/// # Parameters
/// - `truth`: The true labels.
/// - `predicted`: The predicted labels, aligned position by position with
///   `truth`.
///
/// # Returns
/// A value in `[0, 1]`, or `ScoreError::EmptyInput` when either sequence is
/// empty, or `ScoreError::LengthMismatch` when the lengths disagree.
pub fn accuracy<L: PartialEq>(truth: &[L], predicted: &[L]) -> Result<f64, ScoreError> {
    if truth.is_empty() || predicted.is_empty() {
        return Err(ScoreError::EmptyInput);
    }
    if truth.len() != predicted.len() {
        return Err(ScoreError::LengthMismatch {
            expected: truth.len(),
            actual: predicted.len(),
        });
    }

    let correct = truth.iter().zip(predicted.iter()).filter(|(t, p)| t == p).count();
    Ok(correct as f64 / truth.len() as f64)
}
