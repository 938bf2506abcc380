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

use std::collections::HashMap;
use std::hash::Hash;

use crate::errors::VoteError;

/// Returns the plurality label of a non-empty label sequence.
///
/// Counts are tallied per distinct label. On a count tie the label first
/// encountered while scanning the input wins; callers passing neighbor
/// labels in ascending-distance order therefore resolve ties toward the
/// closest neighbor.
///
/// # Parameters
/// - `labels`: The labels to tally, e.g. from a neighbor search.
///
/// # Returns
/// The winning label, or `VoteError::EmptyNeighborSet` for empty input.
pub fn plurality<L: Eq + Hash + Clone>(labels: &[L]) -> Result<L, VoteError> {
    if labels.is_empty() {
        return Err(VoteError::EmptyNeighborSet);
    }

    let mut counts: HashMap<&L, usize> = HashMap::new();
    let mut first_seen: Vec<&L> = Vec::new();
    for label in labels {
        let count = counts.entry(label).or_insert(0);
        if *count == 0 {
            first_seen.push(label);
        }
        *count += 1;
    }

    let mut winner = first_seen[0];
    for &label in &first_seen[1..] {
        if counts[label] > counts[winner] {
            winner = label;
        }
    }
    Ok(winner.clone())
}
