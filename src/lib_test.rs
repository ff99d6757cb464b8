// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for crate-level exports.

use super::{MAX_LINE_LEN, MockBus, PARITY_NONE, Serial};

#[test]
fn driver_constructs_on_mock_bus() {
    let mut serial = Serial::new(MockBus::new());
    assert!(serial.init(0, 9600, 8, PARITY_NONE, 1).is_ok());
}

#[test]
fn line_capacity_matches_contract() {
    assert_eq!(MAX_LINE_LEN, 128);
}
