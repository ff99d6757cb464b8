// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! # quad-uart
//!
//! Polling driver for the four USART peripherals of the ATmega2560.
//!
//! The driver covers peripheral initialization (baud rate and frame
//! format), blocking byte transmit/receive, line-buffered input with
//! backspace editing and local echo, ANSI terminal control sequences, and
//! small numeric-string helpers. All I/O busy-waits on status bits;
//! interrupts, DMA and flow control are deliberately out of scope.
//!
//! Hardware access goes through the [`RegisterBus`] trait, so the whole
//! driver runs against an in-memory mock on the host and against volatile
//! MMIO on the target.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` by default for running on the target MCU. The
//! `std` feature is automatically enabled during testing to allow use of
//! standard library testing infrastructure.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(test)]
mod lib_test;

pub mod ansi;
pub mod fmt;
pub mod line;
pub mod regs;
pub mod serial;

pub use fmt::{FORMAT_BUF_LEN, format_u16, parse_u16};
pub use line::MAX_LINE_LEN;
#[cfg(all(target_arch = "avr", not(any(test, feature = "std"))))]
pub use regs::MmioBus;
#[cfg(any(test, feature = "std"))]
pub use regs::MockBus;
pub use regs::{CHANNEL_COUNT, RegisterBus};
pub use serial::{CLOCK_HZ, ConfigError, PARITY_EVEN, PARITY_NONE, PARITY_ODD, Serial};
