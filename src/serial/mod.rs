// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! USART initialization and blocking byte I/O.
//!
//! All operations poll status bits; interrupts are never enabled. A blocked
//! operation spins until the hardware becomes ready, which on a free-running
//! UART clock always happens eventually.


use crate::regs::{
    CHANNEL_COUNT, CHANNELS, CTRL_B_RXEN, CTRL_B_TXEN, CTRL_C_UCSZ_SHIFT, CTRL_C_UPM0,
    CTRL_C_UPM1, CTRL_C_USBS, RegisterBus, STATUS_RXC, STATUS_UDRE,
};

/// System clock frequency the baud divisor is derived from (16 MHz crystal).
pub const CLOCK_HZ: u32 = 16_000_000;

/// Parity code: no parity bit.
pub const PARITY_NONE: u8 = 0;

/// Parity code: odd parity.
pub const PARITY_ODD: u8 = 1;

/// Parity code: even parity.
pub const PARITY_EVEN: u8 = 2;

/// Errors rejected by [`Serial::init`].
///
/// A failed `init` writes no registers at all, so ignoring the result
/// degrades to the silent no-op the hardware contract expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Channel index above 3.
    Channel,
    /// Word size outside 5..=8 bits.
    WordSize,
    /// Parity code above [`PARITY_EVEN`].
    Parity,
    /// Stop bit count outside 1..=2.
    StopBits,
    /// Baud rate outside the divisor range (zero, or above [`CLOCK_HZ`]/16
    /// where no divisor value can represent it).
    BaudRate,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Channel => write!(f, "channel index out of range"),
            Self::WordSize => write!(f, "word size outside 5..=8 bits"),
            Self::Parity => write!(f, "unknown parity code"),
            Self::StopBits => write!(f, "stop bit count outside 1..=2"),
            Self::BaudRate => write!(f, "baud rate outside the divisor range"),
        }
    }
}

/// Driver for the four USART channels, generic over register access.
///
/// Taking `&mut self` for every operation makes the borrow checker enforce
/// the single-writer protocol the register set requires; there is no locking
/// because there is no preemption in this model.
pub struct Serial<B: RegisterBus> {
    bus: B,
}

impl<B: RegisterBus> Serial<B> {
    /// Create a driver on top of the given register bus.
    #[must_use]
    pub const fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Borrow the underlying bus (mock inspection in tests).
    #[must_use]
    pub const fn bus(&self) -> &B {
        &self.bus
    }

    /// Mutably borrow the underlying bus.
    pub const fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Configure a channel's baud rate and frame format, then enable its
    /// transmitter and receiver.
    ///
    /// `word_bits` is the character size in 5..=8, `parity` one of
    /// [`PARITY_NONE`]/[`PARITY_ODD`]/[`PARITY_EVEN`], `stop_bits` 1 or 2,
    /// `baud_rate` in 1..=[`CLOCK_HZ`]/16 (the representable divisor range).
    /// On any invalid parameter the call returns an error before touching a
    /// single register; either the full configuration is applied or none of
    /// it. Interrupt enable bits are never set.
    pub fn init(
        &mut self,
        channel: u8,
        baud_rate: u32,
        word_bits: u8,
        parity: u8,
        stop_bits: u8,
    ) -> Result<(), ConfigError> {
        if channel >= CHANNEL_COUNT {
            return Err(ConfigError::Channel);
        }
        if !(5..=8).contains(&word_bits) {
            return Err(ConfigError::WordSize);
        }
        if parity > PARITY_EVEN {
            return Err(ConfigError::Parity);
        }
        if !(1..=2).contains(&stop_bits) {
            return Err(ConfigError::StopBits);
        }
        if baud_rate == 0 || baud_rate > CLOCK_HZ / 16 {
            return Err(ConfigError::BaudRate);
        }

        let regs = &CHANNELS[usize::from(channel)];

        // Baud divisor, truncated to 16 bits like the hardware register pair.
        // The range check above keeps the quotient at least 1, so the
        // subtraction cannot underflow.
        let divisor = CLOCK_HZ / 16 / baud_rate - 1;
        self.bus.write(regs.ubrr_h, (divisor >> 8) as u8);
        self.bus.write(regs.ubrr_l, divisor as u8);

        // Frame format is accumulated and written in one go so the fields
        // cannot clobber each other.
        let mut frame = (word_bits - 5) << CTRL_C_UCSZ_SHIFT;
        if parity == PARITY_ODD {
            frame |= CTRL_C_UPM1 | CTRL_C_UPM0;
        } else if parity == PARITY_EVEN {
            frame |= CTRL_C_UPM1;
        }
        if stop_bits == 2 {
            frame |= CTRL_C_USBS;
        }
        self.bus.write(regs.ucsr_c, frame);

        self.bus.write(regs.ucsr_b, CTRL_B_RXEN | CTRL_B_TXEN);
        Ok(())
    }

    /// Transmit one byte. Blocks until the transmit buffer is empty.
    ///
    /// Precondition: `channel` must be below [`CHANNEL_COUNT`]; the table
    /// lookup panics otherwise.
    pub fn put_byte(&mut self, channel: u8, byte: u8) {
        let regs = &CHANNELS[usize::from(channel)];
        while self.bus.read(regs.ucsr_a) & STATUS_UDRE == 0 {
            core::hint::spin_loop();
        }
        self.bus.write(regs.udr, byte);
    }

    /// Transmit every byte of `text` in order. No newline translation.
    ///
    /// Same channel precondition as [`Serial::put_byte`].
    pub fn put_str(&mut self, channel: u8, text: &str) {
        for byte in text.bytes() {
            self.put_byte(channel, byte);
        }
    }

    /// Whether a received byte is waiting (non-blocking).
    ///
    /// Returns `false` for an out-of-range channel; callers commonly poll
    /// this in a loop before deciding whether to block.
    pub fn is_available(&mut self, channel: u8) -> bool {
        if channel >= CHANNEL_COUNT {
            return false;
        }
        let regs = &CHANNELS[usize::from(channel)];
        self.bus.read(regs.ucsr_a) & STATUS_RXC != 0
    }

    /// Receive one byte. Blocks until data is available.
    ///
    /// Same channel precondition as [`Serial::put_byte`].
    pub fn get_byte(&mut self, channel: u8) -> u8 {
        while !self.is_available(channel) {
            core::hint::spin_loop();
        }
        let regs = &CHANNELS[usize::from(channel)];
        self.bus.read(regs.udr)
    }
}
