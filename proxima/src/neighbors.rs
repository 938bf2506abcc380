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

use crate::dataset::ReferenceSet;
use crate::distance::euclidean;
use crate::errors::NeighborError;

/// One entry of a nearest-neighbor search result.
///
/// `index` is the row in the reference set the neighbor came from; the full
/// vector is available through `ReferenceSet::vector(index)`.
#[derive(Debug, Clone)]
pub struct Neighbor<L> {
    pub index: usize,
    pub distance: f64,
    pub label: L,
}

/// Finds the `k` reference points closest to `query`, ordered by ascending
/// distance.
///
/// Every reference vector is scanned (brute force, O(n·d)). The sort is
/// stable, so points at exactly equal distance keep their insertion order
/// and the first-inserted one wins. When `k` exceeds the size of the
/// reference set the result simply contains all available points.
///
/// # Parameters
/// - `reference`: The labeled reference set to search.
/// - `query`: The query vector; must match the reference dimensionality.
/// - `k`: Number of neighbors to return, at least 1.
///
/// # Returns
/// Up to `k` neighbors sorted ascending by distance, or
/// `NeighborError::ZeroNeighborCount` when `k == 0`, or a propagated
/// `DimensionMismatch` when the query dimensionality differs from the
/// reference vectors.
pub fn find_neighbors<L: Clone>(
    reference: &ReferenceSet<L>,
    query: ArrayView1<f64>,
    k: usize,
) -> Result<Vec<Neighbor<L>>, NeighborError> {
    if k == 0 {
        return Err(NeighborError::ZeroNeighborCount);
    }

    let mut distances: Vec<(usize, f64)> = Vec::with_capacity(reference.len());
    for (index, (vector, _)) in reference.iter().enumerate() {
        let distance = euclidean(vector, query)?;
        distances.push((index, distance));
    }

    distances.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    distances.truncate(k.min(reference.len()));

    Ok(distances
        .into_iter()
        .map(|(index, distance)| Neighbor {
            index,
            distance,
            label: reference.label(index).clone(),
        })
        .collect())
}
