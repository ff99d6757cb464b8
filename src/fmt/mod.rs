// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Integer/string conversion helpers.
//!
//! Standalone, no dependency on the driver; callers use these to format
//! values before transmission and to parse received lines.


/// Buffer size sufficient for any [`format_u16`] output (16 binary digits).
pub const FORMAT_BUF_LEN: usize = 16;

/// Format `value` in the given base, most significant digit first.
///
/// Digits above 9 use 'A'-'Z'. Zero formats as `"0"`. Returns the filled
/// prefix of `buf` as a string slice.
///
/// The base is not validated (caller responsibility, debug-asserted to be
/// at least 2); `buf` must hold the full representation, and
/// [`FORMAT_BUF_LEN`] bytes always suffice.
#[must_use]
pub fn format_u16(value: u16, base: u8, buf: &mut [u8]) -> &str {
    debug_assert!(base >= 2, "base {base} cannot represent digits");

    let mut digits = [0u8; FORMAT_BUF_LEN];
    let mut len = 0;
    let mut rest = value;
    while rest > 0 {
        let digit = (rest % u16::from(base)) as u8;
        digits[len] = if digit < 10 {
            b'0' + digit
        } else {
            b'A' + digit - 10
        };
        len += 1;
        rest /= u16::from(base);
    }
    if len == 0 {
        digits[0] = b'0';
        len = 1;
    }

    for (slot, digit) in buf[..len].iter_mut().zip(digits[..len].iter().rev()) {
        *slot = *digit;
    }
    // Digits are plain ASCII, so the slice is always valid UTF-8.
    core::str::from_utf8(&buf[..len]).unwrap_or("")
}

/// Accumulate the leading decimal digits of `text` into a `u16`.
///
/// Stops at the first non-digit. No digits at all yields 0; overflow wraps
/// without detection.
#[must_use]
pub fn parse_u16(text: &str) -> u16 {
    let mut value: u16 = 0;
    for byte in text.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        value = value
            .wrapping_mul(10)
            .wrapping_add(u16::from(byte - b'0'));
    }
    value
}
