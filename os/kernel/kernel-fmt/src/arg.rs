/// One formatting argument, tagged with its type.
///
/// Integers keep their own width; the specifier decides how many bits are
/// read (see [`Arg::int_bits`]).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Arg<'a> {
    /// A byte string for `%s`; `None` stands for a null pointer.
    Str(Option<&'a [u8]>),
    /// A single byte for `%c`.
    Char(u8),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    /// An address for `%p`.
    Ptr(usize),
}

impl Arg<'_> {
    /// The integer value as 64 raw bits, sign-extended for signed variants.
    ///
    /// `None` for strings.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn int_bits(&self) -> Option<u64> {
        match *self {
            Self::Str(_) => None,
            Self::Char(c) => Some(c as u64),
            Self::I32(v) => Some(v as i64 as u64),
            Self::U32(v) => Some(v as u64),
            Self::I64(v) => Some(v as u64),
            Self::U64(v) => Some(v),
            Self::Ptr(p) => Some(p as u64),
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Self::Str(Some(s.as_bytes()))
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(s: &'a [u8]) -> Self {
        Self::Str(Some(s))
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Arg<'a> {
    fn from(s: &'a [u8; N]) -> Self {
        Self::Str(Some(s))
    }
}

impl<'a> From<Option<&'a str>> for Arg<'a> {
    fn from(s: Option<&'a str>) -> Self {
        Self::Str(s.map(str::as_bytes))
    }
}

impl From<char> for Arg<'_> {
    fn from(c: char) -> Self {
        Self::Char(u8::try_from(c).ok().filter(u8::is_ascii).unwrap_or(b'?'))
    }
}

impl From<u8> for Arg<'_> {
    fn from(v: u8) -> Self {
        Self::U32(u32::from(v))
    }
}

impl From<i8> for Arg<'_> {
    fn from(v: i8) -> Self {
        Self::I32(i32::from(v))
    }
}

impl From<u16> for Arg<'_> {
    fn from(v: u16) -> Self {
        Self::U32(u32::from(v))
    }
}

impl From<i16> for Arg<'_> {
    fn from(v: i16) -> Self {
        Self::I32(i32::from(v))
    }
}

impl From<u32> for Arg<'_> {
    fn from(v: u32) -> Self {
        Self::U32(v)
    }
}

impl From<i32> for Arg<'_> {
    fn from(v: i32) -> Self {
        Self::I32(v)
    }
}

impl From<u64> for Arg<'_> {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

impl From<i64> for Arg<'_> {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<usize> for Arg<'_> {
    fn from(v: usize) -> Self {
        Self::U64(v as u64)
    }
}

impl From<isize> for Arg<'_> {
    fn from(v: isize) -> Self {
        Self::I64(v as i64)
    }
}

impl<T> From<*const T> for Arg<'_> {
    fn from(p: *const T) -> Self {
        Self::Ptr(p.addr())
    }
}

impl<T> From<*mut T> for Arg<'_> {
    fn from(p: *mut T) -> Self {
        Self::Ptr(p.addr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_variants_sign_extend() {
        assert_eq!(Arg::I32(-1).int_bits(), Some(u64::MAX));
        assert_eq!(Arg::I64(-2).int_bits(), Some(u64::MAX - 1));
        assert_eq!(Arg::U32(u32::MAX).int_bits(), Some(0xFFFF_FFFF));
    }

    #[test]
    fn strings_have_no_integer_value() {
        assert_eq!(Arg::from("x").int_bits(), None);
        assert_eq!(Arg::Str(None).int_bits(), None);
    }

    #[test]
    fn conversions_pick_the_matching_tag() {
        assert_eq!(Arg::from(5u8), Arg::U32(5));
        assert_eq!(Arg::from(-5i16), Arg::I32(-5));
        assert_eq!(Arg::from('A'), Arg::Char(b'A'));
        assert_eq!(Arg::from('é'), Arg::Char(b'?'));
        assert_eq!(Arg::from(None::<&str>), Arg::Str(None));
        assert_eq!(Arg::from(b"ab"), Arg::Str(Some(b"ab".as_slice())));
    }
}
