// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Line-buffered input with backspace editing and local echo.


use crate::regs::RegisterBus;
use crate::serial::Serial;

/// Maximum number of printable characters accepted per line.
pub const MAX_LINE_LEN: usize = 128;

const CR: u8 = 13;
const BACKSPACE: u8 = 8;

impl<B: RegisterBus> Serial<B> {
    /// Read one line of input into `buf`, editing with backspace and echoing
    /// accepted characters back to the sender.
    ///
    /// The loop terminates on carriage return (13), which is echoed as a
    /// line feed. Backspace (8) retracts the last accepted character and
    /// echoes backspace, space, backspace to erase it on the remote
    /// terminal; at the start of the line it does nothing. Printable ASCII
    /// (32..=126) is stored and echoed while there is room; once the line is
    /// full further printables are dropped without echo until a backspace
    /// frees space. Every other byte is discarded silently.
    ///
    /// At most [`MAX_LINE_LEN`] characters are accepted, and never more than
    /// `buf.len() - 1`: the final position holds a NUL terminator for
    /// callers that scan for one. Returns the number of bytes stored.
    ///
    /// `buf` must be non-empty; same channel precondition as
    /// [`Serial::put_byte`].
    pub fn read_line(&mut self, channel: u8, buf: &mut [u8]) -> usize {
        let capacity = MAX_LINE_LEN.min(buf.len().saturating_sub(1));
        let mut count = 0;
        loop {
            let byte = self.get_byte(channel);
            match byte {
                CR => {
                    self.put_byte(channel, b'\n');
                    break;
                }
                BACKSPACE => {
                    if count > 0 {
                        count -= 1;
                        self.put_byte(channel, BACKSPACE);
                        self.put_byte(channel, b' ');
                        self.put_byte(channel, BACKSPACE);
                    }
                }
                32..=126 if count < capacity => {
                    buf[count] = byte;
                    count += 1;
                    self.put_byte(channel, byte);
                }
                _ => {}
            }
        }
        buf[count] = 0;
        count
    }
}
