// Copyright 2026-Present sdm-core contributors
// SPDX-License-Identifier: Apache-2.0

//! The immutable population of `N` random `A`-bit hard-location addresses.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of `u64` words needed to hold `bits` bits.
fn words_for_bits(bits: usize) -> usize {
    bits.div_ceil(64)
}

/// Packs a sequence of `{0, 1}` values into little-endian `u64` words, one
/// bit per position. Bits beyond `bits.len()` within the final word are
/// left zero.
///
/// The caller is responsible for validating that every element of `bits`
/// is `0` or `1`; this function does not re-validate.
pub(crate) fn pack_bits(bits: &[u8]) -> Vec<u64> {
    let mut words = vec![0u64; words_for_bits(bits.len())];
    for (i, &bit) in bits.iter().enumerate() {
        if bit != 0 {
            words[i / 64] |= 1u64 << (i % 64);
        }
    }
    words
}

/// `N` frozen, uniformly random `A`-bit addresses.
///
/// Built once at engine construction from a seeded [`StdRng`]; the RNG is
/// not retained afterward, so every later `distance` query is a pure
/// function of the stored table.
#[derive(Debug, Clone)]
pub(crate) struct HardLocationTable {
    address_dimension: usize,
    words_per_row: usize,
    num_locations: usize,
    /// Row-major: `words[row * words_per_row .. (row + 1) * words_per_row]`.
    words: Vec<u64>,
}

impl HardLocationTable {
    /// Allocates and fills an `N x A` bit population.
    ///
    /// Assumes `address_dimension > 0` and `num_locations > 0`; the engine
    /// validates both via [`crate::config::SdmConfig::validate`] before
    /// this is ever called.
    pub(crate) fn build(address_dimension: usize, num_locations: usize, seed: Option<u64>) -> Self {
        debug_assert!(address_dimension > 0);
        debug_assert!(num_locations > 0);

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let words_per_row = words_for_bits(address_dimension);
        let tail_bits = address_dimension % 64;
        let tail_mask = if tail_bits == 0 {
            u64::MAX
        } else {
            (1u64 << tail_bits) - 1
        };

        let mut words = vec![0u64; num_locations * words_per_row];
        for row in words.chunks_mut(words_per_row) {
            for (i, word) in row.iter_mut().enumerate() {
                *word = rng.gen::<u64>();
                if i == words_per_row - 1 {
                    *word &= tail_mask;
                }
            }
        }

        tracing::debug!(
            address_dimension,
            num_locations,
            words_per_row,
            "built hard-location table"
        );

        Self {
            address_dimension,
            words_per_row,
            num_locations,
            words,
        }
    }

    pub(crate) fn num_locations(&self) -> usize {
        self.num_locations
    }

    /// Hamming distance between hard location `row` and a packed query
    /// address of the same bit width.
    pub(crate) fn distance(&self, row: usize, query: &[u64]) -> u32 {
        debug_assert_eq!(query.len(), self.words_per_row);
        let start = row * self.words_per_row;
        let location = &self.words[start..start + self.words_per_row];
        location
            .iter()
            .zip(query)
            .map(|(a, b)| (a ^ b).count_ones())
            .sum()
    }
}
