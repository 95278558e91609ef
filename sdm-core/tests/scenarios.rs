// Copyright 2026-Present sdm-core contributors
// SPDX-License-Identifier: Apache-2.0

//! End-to-end scenarios mirrored directly from the engine's behavioral
//! specification, kept separate from the per-module unit tests in `src/`.

use sdm_core::{ArgumentError, SdmEngine, SdmError};

#[test]
fn scenario_fresh_read_is_zero() {
    let sdm = SdmEngine::with_params(100, 100, 10_000, 37, Some(42)).unwrap();
    let out = sdm.read(&[0u8; 100]).unwrap();
    assert_eq!(out, vec![0u8; 100]);
}

#[test]
fn scenario_self_recall_after_one_write() {
    let mut sdm = SdmEngine::with_params(100, 100, 10_000, 37, Some(42)).unwrap();
    let address = vec![0u8; 100];
    let data = vec![1u8; 100];
    sdm.write(&address, &data).unwrap();
    assert_eq!(sdm.read(&address).unwrap(), data);
}

#[test]
fn scenario_seed_reproducibility() {
    let mut a = SdmEngine::with_params(64, 64, 2_000, 22, Some(42)).unwrap();
    let mut b = SdmEngine::with_params(64, 64, 2_000, 22, Some(42)).unwrap();

    let address: Vec<u8> = (0..64).map(|i| (i % 2) as u8).collect();
    let data: Vec<u8> = (0..64).map(|i| ((i + 1) % 2) as u8).collect();

    a.write(&address, &data).unwrap();
    b.write(&address, &data).unwrap();

    assert_eq!(a.read(&address).unwrap(), b.read(&address).unwrap());
}

#[test]
fn scenario_counter_increments_per_write() {
    let mut sdm = SdmEngine::with_params(40, 40, 500, 10, Some(5)).unwrap();
    let address = vec![0u8; 40];
    let data = vec![1u8; 40];
    for _ in 0..5 {
        sdm.write(&address, &data).unwrap();
    }
    assert_eq!(sdm.memory_count(), 5);
}

#[test]
fn scenario_erase_restores_initial_state() {
    let mut sdm = SdmEngine::with_params(80, 80, 3_000, 18, Some(11)).unwrap();
    let address = vec![1u8; 80];
    for _ in 0..3 {
        sdm.write(&address, &vec![0u8; 80]).unwrap();
    }

    sdm.erase_memory();

    assert_eq!(sdm.memory_count(), 0);
    for probe in [vec![0u8; 80], vec![1u8; 80], address] {
        assert_eq!(sdm.read(&probe).unwrap(), vec![0u8; 80]);
    }
}

#[test]
fn scenario_validation_rejects_size_mismatch() {
    let mut sdm = SdmEngine::with_params(256, 128, 100, 30, Some(1)).unwrap();

    let short_address = vec![0u8; 100];
    let full_data = vec![1u8; 128];

    let write_err = sdm.write(&short_address, &full_data).unwrap_err();
    assert_eq!(
        write_err,
        SdmError::Argument(ArgumentError::LengthMismatch {
            parameter: "address",
            expected: 256,
            actual: 100,
        })
    );

    let read_err = sdm.read(&short_address).unwrap_err();
    assert_eq!(
        read_err,
        SdmError::Argument(ArgumentError::LengthMismatch {
            parameter: "address",
            expected: 256,
            actual: 100,
        })
    );

    assert_eq!(sdm.memory_count(), 0);
}
