use crate::arg::Arg;
use crate::integer::{HexCase, IntWidth, to_decimal, to_hex, to_pointer};
use crate::writer::BoundedWriter;
use core::fmt;

/// Rendered for `%s` when the argument is a null string.
pub const NULL_STR: &[u8] = b"(null)";

/// Rendered for a specifier whose argument is missing or of the wrong kind.
pub const MISMATCH: &[u8] = b"(?)";

/// Render `format` with `args` into `dest`.
///
/// Returns the number of content bytes written. `dest` always ends up
/// NUL-terminated unless it is empty.
pub fn render(dest: &mut [u8], format: &[u8], args: &[Arg<'_>]) -> usize {
    let mut out = BoundedWriter::new(dest);
    render_into(&mut out, format, args);
    out.finish()
}

/// Render `format` with `args`, appending to `out`.
///
/// The format ends at its last byte or at the first NUL, whichever comes first.
pub fn render_into(out: &mut BoundedWriter<'_>, format: &[u8], args: &[Arg<'_>]) {
    let mut args = args.iter();
    let mut bytes = format.iter().copied().take_while(|&b| b != 0).peekable();

    while let Some(b) = bytes.next() {
        if b != b'%' {
            out.push(b);
            continue;
        }

        let mut width = IntWidth::Bits32;
        while bytes.next_if_eq(&b'l').is_some() {
            width = IntWidth::Bits64;
        }

        let Some(spec) = bytes.next() else {
            // A lone trailing '%'.
            out.push(b'%');
            break;
        };

        match spec {
            b's' => match args.next() {
                Some(Arg::Str(Some(s))) => out.push_bytes(until_nul(s)),
                Some(Arg::Str(None)) => out.push_bytes(NULL_STR),
                _ => out.push_bytes(MISMATCH),
            },
            b'c' => match next_int(&mut args) {
                #[allow(clippy::cast_possible_truncation)]
                Some(v) => out.push(v as u8),
                None => out.push_bytes(MISMATCH),
            },
            b'd' | b'i' => emit_int(out, &mut args, |v| to_decimal(v, true, width)),
            b'u' => emit_int(out, &mut args, |v| to_decimal(v, false, width)),
            b'x' => emit_int(out, &mut args, |v| to_hex(v, HexCase::Lower, false, width)),
            b'X' => emit_int(out, &mut args, |v| to_hex(v, HexCase::Upper, false, width)),
            b'p' => emit_int(out, &mut args, to_pointer),
            b'%' => out.push(b'%'),
            other => {
                out.push(b'%');
                out.push(other);
            }
        }
    }
}

fn until_nul(s: &[u8]) -> &[u8] {
    s.iter().position(|&b| b == 0).map_or(s, |end| &s[..end])
}

fn next_int<'a, 'b: 'a>(args: &mut impl Iterator<Item = &'a Arg<'b>>) -> Option<u64> {
    args.next().and_then(Arg::int_bits)
}

fn emit_int<'a, 'b: 'a, D: AsRef<[u8]>>(
    out: &mut BoundedWriter<'_>,
    args: &mut impl Iterator<Item = &'a Arg<'b>>,
    convert: impl FnOnce(u64) -> D,
) {
    match next_int(args) {
        Some(v) => out.push_bytes(convert(v).as_ref()),
        None => out.push_bytes(MISMATCH),
    }
}

/// A message rendered into its own fixed buffer.
pub struct RenderedMessage<const N: usize> {
    buf: [u8; N],
    len: usize,
    truncated: bool,
}

impl<const N: usize> RenderedMessage<N> {
    #[must_use]
    pub fn render(format: &[u8], args: &[Arg<'_>]) -> Self {
        let mut buf = [0u8; N];
        let mut out = BoundedWriter::new(&mut buf);
        render_into(&mut out, format, args);
        let truncated = out.is_truncated();
        let len = out.finish();
        Self {
            buf,
            len,
            truncated,
        }
    }

    /// Content bytes, terminator excluded.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// The whole buffer, terminator and unused tail included.
    #[must_use]
    pub const fn buffer(&self) -> &[u8; N] {
        &self.buf
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the logical output was longer than what was stored.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl<const N: usize> fmt::Debug for RenderedMessage<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderedMessage")
            .field("text", &self.as_bytes().escape_ascii())
            .field("len", &self.len)
            .field("truncated", &self.truncated)
            .finish()
    }
}
