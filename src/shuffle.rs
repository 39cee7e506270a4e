// SPDX-License-Identifier: MIT

//! In-place Fisher-Yates shuffle.
use crate::{entropy::Entropy, error::Result, sampler::Sampler};

/// Permute `items` uniformly at random.
///
/// Walks from the last element down to the second, swapping each
/// with an element at or before it. Every permutation is equally
/// likely as long as the sampler is uniform. The multiset of
/// elements is never changed.
pub fn shuffle<T, E>(sampler: &mut Sampler<E>, items: &mut [T]) -> Result<()>
where
    E: Entropy,
{
    for i in (1..items.len()).rev() {
        let j = sampler.index(i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}
