use core::fmt;

/// Appends bytes to a fixed buffer, dropping what does not fit.
///
/// Keeps the last byte of the buffer for a NUL terminator, which is kept
/// behind the content after every write. A zero-length buffer is never
/// touched.
///
/// Besides the bytes actually stored, the writer counts the bytes it was
/// asked to store so truncation can be detected afterwards.
pub struct BoundedWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
    required: usize,
}

impl<'a> BoundedWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        if let Some(first) = buf.first_mut() {
            *first = 0;
        }
        Self {
            buf,
            len: 0,
            required: 0,
        }
    }

    /// Content capacity: the buffer length minus the terminator.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buf.len().saturating_sub(1)
    }

    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    /// Bytes stored so far, terminator excluded.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bytes that would have been stored with unlimited capacity.
    #[must_use]
    pub const fn required(&self) -> usize {
        self.required
    }

    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.required > self.len
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    #[inline]
    pub fn push(&mut self, b: u8) {
        self.push_bytes(&[b]);
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.required = self.required.saturating_add(bytes.len());
        let n = bytes.len().min(self.remaining());
        if n == 0 {
            return;
        }
        self.buf[self.len..self.len + n].copy_from_slice(&bytes[..n]);
        self.len += n;
        self.buf[self.len] = 0;
    }

    /// End the write and hand back the content length.
    #[must_use]
    pub fn finish(self) -> usize {
        self.len
    }
}

impl fmt::Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        // Truncation is not an error; the caller checks `is_truncated`.
        self.push_bytes(s.as_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    #[test]
    fn zero_capacity_writes_nothing() {
        let mut buf: [u8; 0] = [];
        let mut w = BoundedWriter::new(&mut buf);
        w.push_bytes(b"abc");
        assert_eq!(w.len(), 0);
        assert_eq!(w.required(), 3);
        assert!(w.is_truncated());
    }

    #[test]
    fn one_byte_buffer_holds_only_the_terminator() {
        let mut buf = [0xAAu8; 1];
        let mut w = BoundedWriter::new(&mut buf);
        w.push(b'x');
        assert_eq!(w.finish(), 0);
        assert_eq!(buf, [0]);
    }

    #[test]
    fn terminator_follows_content() {
        let mut buf = [0xAAu8; 8];
        let mut w = BoundedWriter::new(&mut buf);
        w.push_bytes(b"abc");
        assert_eq!(w.as_bytes(), b"abc");
        assert_eq!(w.finish(), 3);
        assert_eq!(&buf[..4], b"abc\0");
        assert_eq!(buf[4], 0xAA);
    }

    #[test]
    fn overflow_is_cut_and_counted() {
        let mut buf = [0xAAu8; 4];
        let mut w = BoundedWriter::new(&mut buf);
        write!(w, "{}-{}", 12, 345).unwrap();
        assert_eq!(w.as_bytes(), b"12-");
        assert_eq!(w.required(), 6);
        assert!(w.is_truncated());
        assert_eq!(w.finish(), 3);
        assert_eq!(buf, *b"12-\0");
    }
}
