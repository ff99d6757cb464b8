// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Volatile register access to the AVR data space.
//!
//! On AVR the USART registers live directly in the data address space, so a
//! register address converts straight into a pointer. No mapping step is
//! needed.

#![allow(unsafe_code)] // Register I/O requires raw volatile access

use core::ptr::{read_volatile, write_volatile};

use super::RegisterBus;

/// Register bus backed by real MMIO.
///
/// Zero-sized handle; all state is the hardware itself.
pub struct MmioBus {
    _private: (),
}

impl MmioBus {
    /// Create the MMIO register bus.
    ///
    /// # Safety
    ///
    /// - Must only be used on an ATmega2560 (or a device with an identical
    ///   USART register map), where the addresses in [`super::CHANNELS`]
    ///   designate live peripheral registers.
    /// - The caller must ensure a single execution context accesses a given
    ///   channel's registers; the driver assumes interrupt-free, polling-only
    ///   operation.
    #[must_use]
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl RegisterBus for MmioBus {
    fn read(&mut self, addr: u16) -> u8 {
        // SAFETY: Constructor contract guarantees `addr` designates a live
        // peripheral register on this device.
        unsafe { read_volatile(addr as usize as *const u8) }
    }

    fn write(&mut self, addr: u16, value: u8) {
        // SAFETY: Constructor contract guarantees `addr` designates a live
        // peripheral register on this device.
        unsafe { write_volatile(addr as usize as *mut u8, value) }
    }
}
