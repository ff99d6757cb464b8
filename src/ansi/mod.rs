// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! ANSI escape sequence emission.
//!
//! Fire-and-forget terminal control: nothing is read back, correctness is
//! defined purely by the byte sequence put on the wire. Numeric fields are
//! emitted as one or two decimal digits, never with a leading zero.


use crate::regs::RegisterBus;
use crate::serial::Serial;

const ESC: u8 = 0x1B;

/// SGR color codes understood by [`Serial::set_color`].
pub mod color {
    /// Reset all attributes.
    pub const RESET: u8 = 0;
    /// Red foreground.
    pub const RED: u8 = 31;
    /// Green foreground.
    pub const GREEN: u8 = 32;
    /// Yellow foreground.
    pub const YELLOW: u8 = 33;
    /// Blue foreground.
    pub const BLUE: u8 = 34;
    /// Magenta foreground.
    pub const MAGENTA: u8 = 35;
    /// Cyan foreground.
    pub const CYAN: u8 = 36;
}

impl<B: RegisterBus> Serial<B> {
    /// Clear the whole screen and move the cursor to the home position.
    ///
    /// Emits `ESC [2J` followed by `ESC [H`. Same channel precondition as
    /// [`Serial::put_byte`].
    pub fn clear_screen(&mut self, channel: u8) {
        self.put_str(channel, "\x1b[2J");
        self.put_str(channel, "\x1b[H");
    }

    /// Select a display attribute, typically one of [`color`]'s codes.
    ///
    /// Emits `ESC [<code>m`. Codes are expected in 0..=99.
    pub fn set_color(&mut self, channel: u8, code: u8) {
        self.put_byte(channel, ESC);
        self.put_byte(channel, b'[');
        self.put_decimal(channel, code);
        self.put_byte(channel, b'm');
    }

    /// Move the cursor to column `x`, row `y` (both 1-based).
    ///
    /// Emits `ESC [<y>;<x>H`. Coordinates are expected in 0..=99.
    pub fn goto_xy(&mut self, channel: u8, x: u8, y: u8) {
        self.put_byte(channel, ESC);
        self.put_byte(channel, b'[');
        self.put_decimal(channel, y);
        self.put_byte(channel, b';');
        self.put_decimal(channel, x);
        self.put_byte(channel, b'H');
    }

    /// Emit `value` in decimal, tens digit only when `value >= 10`.
    fn put_decimal(&mut self, channel: u8, value: u8) {
        if value >= 10 {
            self.put_byte(channel, b'0' + value / 10);
        }
        self.put_byte(channel, b'0' + value % 10);
    }
}
