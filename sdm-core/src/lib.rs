// Copyright 2026-Present sdm-core contributors
// SPDX-License-Identifier: Apache-2.0

//! A Kanerva Sparse Distributed Memory (SDM): an associative binary memory
//! that stores and recalls fixed-length binary patterns indexed by
//! fixed-length binary addresses.
//!
//! The memory is a population of `N` randomly distributed "hard"
//! addresses, each carrying a row of `M` signed counters. A `write`
//! superposes a data word onto every hard location within Hamming distance
//! `T` of the query address; a `read` thresholds the summed counters of
//! that same active set at zero.
//!
//! ```
//! use sdm_core::SdmEngine;
//!
//! let mut sdm = SdmEngine::with_params(100, 100, 10_000, 37, Some(42)).unwrap();
//! let addr = vec![0u8; 100];
//! sdm.write(&addr, &vec![1u8; 100]).unwrap();
//! assert_eq!(sdm.read(&addr).unwrap(), vec![1u8; 100]);
//! ```
//!
//! Hard-location placement is sampled once, uniformly at random, from a
//! seeded [`rand::rngs::StdRng`], and frozen for the engine's lifetime:
//! two engines built with the same `(address_dimension, num_locations,
//! random_seed)` have byte-identical hard-location tables and therefore
//! produce identical reads for identical write histories. This crate does
//! not persist memory across process lifetimes, does not learn
//! hard-location placement, and does not chain reads into iterative
//! (auto-associative) recall — a read is always a single pass.

mod config;
mod counters;
mod engine;
mod error;
mod locations;

pub use config::SdmConfig;
pub use engine::SdmEngine;
pub use error::{ArgumentError, ConfigError, SdmError};
