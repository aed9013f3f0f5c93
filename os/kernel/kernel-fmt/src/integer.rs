//! Integer to text conversion without allocation.

use core::fmt;

/// Enough room for `-9223372036854775808` and for `0x` + 16 hex digits.
pub const MAX_DIGITS: usize = 24;

/// Width of the integer argument a specifier reads.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum IntWidth {
    Bits32,
    Bits64,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HexCase {
    Lower,
    Upper,
}

/// The text of one converted number, stored right-aligned in a fixed buffer.
#[derive(Copy, Clone)]
pub struct Digits {
    buf: [u8; MAX_DIGITS],
    start: usize,
}

impl Digits {
    const fn empty() -> Self {
        Self {
            buf: [0; MAX_DIGITS],
            start: MAX_DIGITS,
        }
    }

    #[inline]
    const fn push_front(&mut self, b: u8) {
        // Callers never exceed MAX_DIGITS: 20 decimal digits + sign, or 16 nibbles + prefix.
        self.start -= 1;
        self.buf[self.start] = b;
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[self.start..]
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        MAX_DIGITS - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only ASCII digits, letters, 'x' and '-' are ever stored.
        for &b in self.as_bytes() {
            fmt::Write::write_char(f, char::from(b))?;
        }
        Ok(())
    }
}

impl AsRef<[u8]> for Digits {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<[u8]> for Digits {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&str> for Digits {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

#[inline]
const fn hex_digit(n: u8, case: HexCase) -> u8 {
    match (n, case) {
        (0..=9, _) => b'0' + n,
        (_, HexCase::Upper) => b'A' + (n - 10),
        (_, HexCase::Lower) => b'a' + (n - 10),
    }
}

/// Drop the bits a 32-bit specifier does not read.
#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn narrow(value: u64, width: IntWidth) -> u64 {
    match width {
        IntWidth::Bits32 => value as u32 as u64,
        IntWidth::Bits64 => value,
    }
}

/// Render `value` in base 10.
///
/// With `signed`, the low `width` bits are read as a two's-complement number.
/// The magnitude of the most negative value is taken in the unsigned domain,
/// so `i32::MIN` and `i64::MIN` need no special case.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const fn to_decimal(value: u64, signed: bool, width: IntWidth) -> Digits {
    let (negative, mut magnitude) = match (signed, width) {
        (false, _) => (false, narrow(value, width)),
        (true, IntWidth::Bits32) => {
            let v = value as u32 as i32;
            (v < 0, v.unsigned_abs() as u64)
        }
        (true, IntWidth::Bits64) => {
            let v = value as i64;
            (v < 0, v.unsigned_abs())
        }
    };

    let mut out = Digits::empty();
    loop {
        out.push_front(b'0' + (magnitude % 10) as u8);
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }
    if negative {
        out.push_front(b'-');
    }
    out
}

/// Render `value` in base 16 without leading zero nibbles; zero is `0`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn to_hex(value: u64, case: HexCase, prefix: bool, width: IntWidth) -> Digits {
    let mut rest = narrow(value, width);
    let mut out = Digits::empty();
    loop {
        out.push_front(hex_digit((rest & 0xF) as u8, case));
        rest >>= 4;
        if rest == 0 {
            break;
        }
    }
    if prefix {
        out.push_front(b'x');
        out.push_front(b'0');
    }
    out
}

/// Render an address the way `%p` does: `0x` and upper-case 64-bit hex.
#[must_use]
pub const fn to_pointer(address: u64) -> Digits {
    to_hex(address, HexCase::Upper, true, IntWidth::Bits64)
}
