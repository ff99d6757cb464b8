// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! ATmega2560 USART register map and register access abstraction.
//!
//! The four USART peripherals are controlled through memory-mapped 8-bit
//! registers in the AVR data space. This module provides the per-channel
//! descriptor table, the relevant bit positions, and the [`RegisterBus`]
//! trait that the driver uses to touch those registers. Platform-specific
//! implementations live in separate modules:
//! - `mock` - Testing mock backed by a register file plus scripted queues
//! - `mmio` - Real volatile access to the AVR data space


#[cfg(all(target_arch = "avr", not(any(test, feature = "std"))))]
mod mmio;
#[cfg(any(test, feature = "std"))]
mod mock;

#[cfg(all(target_arch = "avr", not(any(test, feature = "std"))))]
pub use mmio::MmioBus;
#[cfg(any(test, feature = "std"))]
pub use mock::MockBus;

/// Number of USART channels on the ATmega2560.
pub const CHANNEL_COUNT: u8 = 4;

/// UCSRnA bit: receive complete (unread data in the receive buffer).
pub const STATUS_RXC: u8 = 1 << 7;

/// UCSRnA bit: transmit data register empty.
pub const STATUS_UDRE: u8 = 1 << 5;

/// UCSRnB bit: receiver enable.
pub const CTRL_B_RXEN: u8 = 1 << 4;

/// UCSRnB bit: transmitter enable.
pub const CTRL_B_TXEN: u8 = 1 << 3;

/// UCSRnC bit: parity mode, high bit.
pub const CTRL_C_UPM1: u8 = 1 << 5;

/// UCSRnC bit: parity mode, low bit.
pub const CTRL_C_UPM0: u8 = 1 << 4;

/// UCSRnC bit: two stop bits.
pub const CTRL_C_USBS: u8 = 1 << 3;

/// UCSRnC shift for the two-bit character size field.
pub const CTRL_C_UCSZ_SHIFT: u8 = 1;

/// Data-space addresses of the six registers owned by one USART channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelRegs {
    /// UCSRnA - status register.
    pub ucsr_a: u16,
    /// UCSRnB - control register B (enable bits).
    pub ucsr_b: u16,
    /// UCSRnC - control register C (frame format).
    pub ucsr_c: u16,
    /// UBRRnL - baud rate divisor, low byte.
    pub ubrr_l: u16,
    /// UBRRnH - baud rate divisor, high byte.
    pub ubrr_h: u16,
    /// UDRn - data register (transmit buffer on write, receive buffer on read).
    pub udr: u16,
}

/// Descriptor table mapping channel index to register addresses.
///
/// Addresses are from the ATmega2560 datasheet register summary. The table
/// is built at compile time and never mutated; channels own disjoint
/// register sets, so operations on different channels never interfere.
pub const CHANNELS: [ChannelRegs; CHANNEL_COUNT as usize] = [
    ChannelRegs {
        ucsr_a: 0xC0,
        ucsr_b: 0xC1,
        ucsr_c: 0xC2,
        ubrr_l: 0xC4,
        ubrr_h: 0xC5,
        udr: 0xC6,
    },
    ChannelRegs {
        ucsr_a: 0xC8,
        ucsr_b: 0xC9,
        ucsr_c: 0xCA,
        ubrr_l: 0xCC,
        ubrr_h: 0xCD,
        udr: 0xCE,
    },
    ChannelRegs {
        ucsr_a: 0xD0,
        ucsr_b: 0xD1,
        ucsr_c: 0xD2,
        ubrr_l: 0xD4,
        ubrr_h: 0xD5,
        udr: 0xD6,
    },
    ChannelRegs {
        ucsr_a: 0x130,
        ucsr_b: 0x131,
        ucsr_c: 0x132,
        ubrr_l: 0x134,
        ubrr_h: 0x135,
        udr: 0x136,
    },
];

/// 8-bit register access at a data-space address.
///
/// Reads may have side effects on real hardware (reading `UDRn` pops the
/// receive buffer), so both operations take `&mut self`. The driver only
/// ever passes addresses from [`CHANNELS`].
pub trait RegisterBus {
    /// Read the register at `addr`.
    fn read(&mut self, addr: u16) -> u8;

    /// Write `value` to the register at `addr`.
    fn write(&mut self, addr: u16, value: u8);
}
