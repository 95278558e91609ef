// Copyright 2026-Present sdm-core contributors
// SPDX-License-Identifier: Apache-2.0

//! The public façade: construction, `write`, `read`, `erase_memory`, and
//! the read-only attribute surface.

use std::fmt;

use crate::config::SdmConfig;
use crate::counters::CounterMatrix;
use crate::error::{ArgumentError, SdmError};
use crate::locations::{pack_bits, HardLocationTable};

/// A Kanerva Sparse Distributed Memory.
///
/// Stores and recalls fixed-length binary patterns indexed by fixed-length
/// binary addresses, using a population of `num_locations` randomly placed
/// hard locations and a Hamming-radius activation rule: a hard location
/// participates in a `write` or `read` iff its address lies within
/// `hamming_threshold` bits of the query address.
///
/// `SdmEngine` owns its hard-location table and counter matrix outright;
/// callers only ever see scalar attributes and `read` results, never a
/// reference into the matrix itself.
#[derive(Clone)]
pub struct SdmEngine {
    config: SdmConfig,
    locations: HardLocationTable,
    counters: CounterMatrix,
    memory_count: u64,
}

impl SdmEngine {
    /// Constructs an engine from a [`SdmConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`SdmError::Config`] if any field of `config` is out of its
    /// documented domain.
    pub fn new(config: SdmConfig) -> Result<Self, SdmError> {
        config.validate()?;

        let locations = HardLocationTable::build(
            config.address_dimension,
            config.num_locations,
            config.random_seed,
        );
        let counters = CounterMatrix::new(config.num_locations, config.memory_dimension);

        tracing::debug!(?config, "constructed SdmEngine");

        Ok(Self {
            config,
            locations,
            counters,
            memory_count: 0,
        })
    }

    /// Convenience constructor taking the five configuration parameters
    /// positionally, matching the engine's external constructor order.
    ///
    /// # Errors
    ///
    /// Returns [`SdmError::Config`] under the same conditions as [`SdmEngine::new`].
    pub fn with_params(
        address_dimension: usize,
        memory_dimension: usize,
        num_locations: usize,
        hamming_threshold: usize,
        random_seed: Option<u64>,
    ) -> Result<Self, SdmError> {
        Self::new(SdmConfig::new(
            address_dimension,
            memory_dimension,
            num_locations,
            hamming_threshold,
            random_seed,
        ))
    }

    /// Length, in bits, of every address word (`A`).
    pub fn address_dimension(&self) -> usize {
        self.config.address_dimension
    }

    /// Length, in bits, of every data word (`M`).
    pub fn memory_dimension(&self) -> usize {
        self.config.memory_dimension
    }

    /// Number of hard locations in the population (`N`).
    pub fn num_locations(&self) -> usize {
        self.config.num_locations
    }

    /// Hamming-distance activation radius (`T`).
    pub fn hamming_threshold(&self) -> usize {
        self.config.hamming_threshold
    }

    /// Number of successful `write` calls since construction or the last
    /// `erase_memory`.
    pub fn memory_count(&self) -> u64 {
        self.memory_count
    }

    /// Superposes `data` onto every hard location within `hamming_threshold`
    /// bits of `address`.
    ///
    /// `memory_count` is incremented exactly once, even if the active set
    /// is empty — a write always counts, whether or not it touched any
    /// counters.
    ///
    /// # Errors
    ///
    /// Returns [`SdmError::Argument`] if `address` or `data` has the wrong
    /// length or contains a value other than `0` or `1`. A failed
    /// validation leaves the engine's state unchanged.
    pub fn write(&mut self, address: &[u8], data: &[u8]) -> Result<(), SdmError> {
        validate_binary_word(address, self.config.address_dimension, "address")?;
        validate_binary_word(data, self.config.memory_dimension, "data")?;

        let query = pack_bits(address);
        let active = self.active_set(&query);

        for &row in &active {
            self.counters.accumulate(row, data);
        }
        self.memory_count += 1;

        tracing::trace!(
            active_locations = active.len(),
            memory_count = self.memory_count,
            "write"
        );

        Ok(())
    }

    /// Recalls the data word associated with `address`.
    ///
    /// Thresholds, per column, the sum of counters across the active set:
    /// `1` if the sum is strictly positive, `0` otherwise. Both an empty
    /// active set and a zero column sum resolve to `0`, so `read` is a
    /// total function with no hidden state.
    ///
    /// # Errors
    ///
    /// Returns [`SdmError::Argument`] if `address` has the wrong length or
    /// contains a value other than `0` or `1`.
    pub fn read(&self, address: &[u8]) -> Result<Vec<u8>, SdmError> {
        validate_binary_word(address, self.config.address_dimension, "address")?;

        let query = pack_bits(address);
        let active = self.active_set(&query);
        let sums = self.counters.column_sum(&active);

        tracing::trace!(active_locations = active.len(), "read");

        Ok(sums.into_iter().map(|s| if s > 0 { 1 } else { 0 }).collect())
    }

    /// Zeros the counter matrix and resets `memory_count` to `0`.
    ///
    /// The hard-location table and configuration are preserved: afterward
    /// the engine behaves exactly like a freshly constructed one with the
    /// same configuration and seed.
    pub fn erase_memory(&mut self) {
        self.counters.reset();
        self.memory_count = 0;
        tracing::debug!("erased memory");
    }

    /// Scans every hard location and returns the indices within
    /// `hamming_threshold` bits of `query`.
    fn active_set(&self, query: &[u64]) -> Vec<usize> {
        let threshold = self.config.hamming_threshold as u32;
        (0..self.locations.num_locations())
            .filter(|&row| self.locations.distance(row, query) <= threshold)
            .collect()
    }
}

impl fmt::Display for SdmEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SdmEngine {{ a: {}, m: {}, n: {}, t: {} }}",
            self.config.address_dimension,
            self.config.memory_dimension,
            self.config.num_locations,
            self.config.hamming_threshold,
        )
    }
}

impl fmt::Debug for SdmEngine {
    // Field names deliberately match the `Display` tokens (`a`, `m`, `n`,
    // `t`) rather than the getter names: a field literally named
    // `num_locations` would still print the substring "locations" and
    // defeat the point of hiding per-location state from `{:?}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SdmEngine")
            .field("a", &self.config.address_dimension)
            .field("m", &self.config.memory_dimension)
            .field("n", &self.config.num_locations)
            .field("t", &self.config.hamming_threshold)
            .field("memory_count", &self.memory_count)
            .finish()
    }
}

/// Validates that `word` has length `expected` and every element is `0`
/// or `1`.
fn validate_binary_word(
    word: &[u8],
    expected: usize,
    parameter: &'static str,
) -> Result<(), ArgumentError> {
    if word.len() != expected {
        return Err(ArgumentError::LengthMismatch {
            parameter,
            expected,
            actual: word.len(),
        });
    }
    if let Some((index, &value)) = word.iter().enumerate().find(|(_, &b)| b > 1) {
        return Err(ArgumentError::NonBinaryValue {
            parameter,
            index,
            value: value as i64,
        });
    }
    Ok(())
}
