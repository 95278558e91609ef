// Copyright 2026-Present sdm-core contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for [`crate::SdmEngine`] construction and I/O.

/// A constructor parameter fell outside its documented domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `address_dimension` or `memory_dimension` was not a positive integer.
    #[error("{parameter} must be a positive integer, got {value}")]
    InvalidDimension {
        parameter: &'static str,
        value: i64,
    },

    /// `num_locations` was not a positive integer.
    #[error("num_locations must be a positive integer, got {value}")]
    InvalidLocationCount { value: i64 },

    /// `hamming_threshold` was negative or exceeded `address_dimension`.
    #[error(
        "hamming_threshold must satisfy 0 <= threshold <= address_dimension \
         ({address_dimension}), got {threshold}"
    )]
    InvalidThreshold {
        threshold: i64,
        address_dimension: usize,
    },
}

/// A per-call argument violated its length or binary-value constraint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    /// `address` or `data` did not have the expected length.
    #[error("{parameter} has length {actual}, expected {expected}")]
    LengthMismatch {
        parameter: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An element of `address` or `data` was not 0 or 1.
    #[error("{parameter}[{index}] = {value}, expected 0 or 1")]
    NonBinaryValue {
        parameter: &'static str,
        index: usize,
        value: i64,
    },
}

/// The unified error type returned by every fallible operation on
/// [`crate::SdmEngine`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SdmError {
    /// Raised by construction when a configuration parameter is out of domain.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Raised by `write`/`read` when an argument is malformed.
    #[error(transparent)]
    Argument(#[from] ArgumentError),
}
