// Copyright 2026-Present sdm-core contributors
// SPDX-License-Identifier: Apache-2.0

use crate::error::ConfigError;

/// The five parameters that fix an [`crate::SdmEngine`]'s shape for its
/// entire lifetime.
///
/// `SdmConfig` is a plain value type: constructing one performs no
/// allocation and no validation. Validation happens once, in
/// [`SdmEngine::new`](crate::SdmEngine::new), so that a config can be built
/// up incrementally (e.g. from a deserialized source) before it is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SdmConfig {
    /// Length, in bits, of every address word (`A` in the design docs).
    pub address_dimension: usize,
    /// Length, in bits, of every data word (`M`).
    pub memory_dimension: usize,
    /// Number of hard locations in the population (`N`).
    pub num_locations: usize,
    /// Hamming-distance activation radius (`T`).
    pub hamming_threshold: usize,
    /// Seed for the deterministic bit source. `None` picks a
    /// non-reproducible seed at construction time.
    pub random_seed: Option<u64>,
}

impl Default for SdmConfig {
    /// Only `random_seed` has a genuinely sane default: `None`, i.e. "pick
    /// a non-reproducible seed." `address_dimension`, `memory_dimension`,
    /// and `num_locations` have no sane default at all — every value is
    /// either wrong for the caller's data or rejected outright by
    /// `validate()` — so they default to `0` purely so struct-update
    /// syntax (`SdmConfig { num_locations: 10_000, ..Default::default() }`)
    /// is available. `hamming_threshold` is likewise `0` here, but that is
    /// not a recommended radius; callers must still choose one
    /// deliberately rather than lean on this default.
    fn default() -> Self {
        Self {
            address_dimension: 0,
            memory_dimension: 0,
            num_locations: 0,
            hamming_threshold: 0,
            random_seed: None,
        }
    }
}

impl SdmConfig {
    /// Builds a config from the engine constructor's positional parameters.
    pub fn new(
        address_dimension: usize,
        memory_dimension: usize,
        num_locations: usize,
        hamming_threshold: usize,
        random_seed: Option<u64>,
    ) -> Self {
        Self {
            address_dimension,
            memory_dimension,
            num_locations,
            hamming_threshold,
            random_seed,
        }
    }

    /// Checks every field against its documented domain.
    ///
    /// `address_dimension`, `memory_dimension`, and `num_locations` are
    /// `usize` already, so only the zero case needs rejecting; the sentinel
    /// `i64` value reported in [`ConfigError`] exists so a `0` can be
    /// distinguished from "parameter absent" in the message.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.address_dimension == 0 {
            return Err(ConfigError::InvalidDimension {
                parameter: "address_dimension",
                value: 0,
            });
        }
        if self.memory_dimension == 0 {
            return Err(ConfigError::InvalidDimension {
                parameter: "memory_dimension",
                value: 0,
            });
        }
        if self.num_locations == 0 {
            return Err(ConfigError::InvalidLocationCount { value: 0 });
        }
        if self.hamming_threshold > self.address_dimension {
            return Err(ConfigError::InvalidThreshold {
                threshold: self.hamming_threshold as i64,
                address_dimension: self.address_dimension,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        let cfg = SdmConfig::new(0, 100, 100, 1, None);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidDimension {
                parameter: "address_dimension",
                value: 0,
            })
        );
    }

    #[test]
    fn rejects_zero_locations() {
        let cfg = SdmConfig::new(10, 10, 0, 1, None);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidLocationCount { value: 0 })
        );
    }

    #[test]
    fn rejects_threshold_above_address_dimension() {
        let cfg = SdmConfig::new(10, 10, 5, 11, None);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidThreshold {
                threshold: 11,
                address_dimension: 10,
            })
        );
    }

    #[test]
    fn accepts_threshold_equal_to_address_dimension() {
        let cfg = SdmConfig::new(10, 10, 5, 10, None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn accepts_zero_threshold() {
        let cfg = SdmConfig::new(10, 10, 5, 0, Some(7));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn default_has_no_seed_but_is_not_itself_valid() {
        let cfg = SdmConfig::default();
        assert_eq!(cfg.random_seed, None);
        // Zeroed dimensions/locations are placeholders, not a usable config.
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn default_supports_struct_update_syntax() {
        let cfg = SdmConfig {
            address_dimension: 16,
            memory_dimension: 16,
            num_locations: 500,
            hamming_threshold: 4,
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.random_seed, None);
    }
}
