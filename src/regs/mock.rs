// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Mock register bus for testing.
//!
//! Models just enough USART behavior to exercise the driver without
//! hardware: plain registers are a flat byte file, each channel's status
//! register is computed (transmit always ready, receive ready while the
//! scripted input queue is non-empty), and the data registers feed a
//! per-channel transmit log and receive queue.

#![allow(clippy::panic)] // Test infrastructure - panicking on invalid input is correct

use std::collections::VecDeque;
use std::vec::Vec;

use super::{CHANNELS, RegisterBus, STATUS_RXC, STATUS_UDRE};

/// One past the highest register address in [`CHANNELS`].
const REGISTER_SPACE: usize = 0x200;

/// Register bus backed by an in-memory device model.
pub struct MockBus {
    file: [u8; REGISTER_SPACE],
    rx: [VecDeque<u8>; CHANNELS.len()],
    tx: [Vec<u8>; CHANNELS.len()],
}

impl MockBus {
    /// Create a mock bus with all registers zeroed and no pending input.
    #[must_use]
    pub fn new() -> Self {
        Self {
            file: [0; REGISTER_SPACE],
            rx: [const { VecDeque::new() }; CHANNELS.len()],
            tx: [const { Vec::new() }; CHANNELS.len()],
        }
    }

    /// Create a mock bus with `input` queued for reception on `channel`.
    #[must_use]
    pub fn with_input(channel: u8, input: &[u8]) -> Self {
        let mut bus = Self::new();
        bus.push_input(channel, input);
        bus
    }

    /// Queue further bytes for reception on `channel`.
    pub fn push_input(&mut self, channel: u8, input: &[u8]) {
        self.rx[Self::index(channel)].extend(input.iter().copied());
    }

    /// Everything transmitted on `channel` so far.
    #[must_use]
    pub fn output(&self, channel: u8) -> &[u8] {
        &self.tx[Self::index(channel)]
    }

    /// Peek at the stored value of a plain register (no device side effects).
    #[must_use]
    pub fn register(&self, addr: u16) -> u8 {
        self.file[usize::from(addr)]
    }

    /// Seed a plain register with a value, e.g. a sentinel for no-write tests.
    pub fn seed_register(&mut self, addr: u16, value: u8) {
        self.file[usize::from(addr)] = value;
    }

    fn index(channel: u8) -> usize {
        let index = usize::from(channel);
        assert!(index < CHANNELS.len(), "mock channel {channel} out of range");
        index
    }

    fn channel_of(addr: u16, field: fn(&super::ChannelRegs) -> u16) -> Option<usize> {
        CHANNELS.iter().position(|regs| field(regs) == addr)
    }
}

impl Default for MockBus {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterBus for MockBus {
    fn read(&mut self, addr: u16) -> u8 {
        if let Some(channel) = Self::channel_of(addr, |regs| regs.ucsr_a) {
            let mut status = STATUS_UDRE;
            if !self.rx[channel].is_empty() {
                status |= STATUS_RXC;
            }
            return status;
        }
        if let Some(channel) = Self::channel_of(addr, |regs| regs.udr) {
            return self.rx[channel].pop_front().unwrap_or(0);
        }
        self.file[usize::from(addr)]
    }

    fn write(&mut self, addr: u16, value: u8) {
        if let Some(channel) = Self::channel_of(addr, |regs| regs.udr) {
            self.tx[channel].push(value);
            return;
        }
        self.file[usize::from(addr)] = value;
    }
}
