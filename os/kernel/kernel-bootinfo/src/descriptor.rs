use crate::display::{self, DisplayMode};
use crate::framebuffer::FramebufferTag;
use crate::tag::{TagCursor, TagWalker};
use crate::{TagError, read_u32_le};

/// Size of the fixed `total_size` + `reserved` header preceding the tags.
pub const DESCRIPTOR_HEADER_SIZE: usize = 8;

/// Bounds-checked view over the Multiboot2 boot information structure.
///
/// The view is cut to exactly `total_size` bytes, so nothing reachable through
/// it lies outside `[base, base + total_size)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BootDescriptor<'a> {
    bytes: &'a [u8],
    reserved: u32,
}

impl<'a> BootDescriptor<'a> {
    /// Validate the header of `blob` and cut the view to its declared size.
    ///
    /// `blob` may be longer than the descriptor; the excess is not reachable.
    ///
    /// # Errors
    /// [`TagError::DescriptorTooShort`] if the header does not fit or declares
    /// less than 8 bytes, [`TagError::DescriptorTruncated`] if `blob` ends
    /// before `total_size`.
    pub fn new(blob: &'a [u8]) -> Result<Self, TagError> {
        let too_short = TagError::DescriptorTooShort { len: blob.len() };
        let total_size = read_u32_le(blob, 0).ok_or(too_short)?;
        let reserved = read_u32_le(blob, 4).ok_or(too_short)?;

        let declared = total_size as usize;
        if declared < DESCRIPTOR_HEADER_SIZE {
            return Err(TagError::DescriptorTooShort { len: declared });
        }

        let bytes = blob.get(..declared).ok_or(TagError::DescriptorTruncated {
            declared: total_size,
            available: blob.len(),
        })?;

        Ok(Self { bytes, reserved })
    }

    /// Build the view from the physical address the loader passed in `EBX`.
    ///
    /// Only the `total_size` field is read before the view is bounded.
    ///
    /// # Errors
    /// [`TagError::Null`] for a null pointer, otherwise as [`BootDescriptor::new`].
    ///
    /// # Safety
    /// `base` must point to a Multiboot2 information structure that is mapped,
    /// readable for its declared `total_size`, and not written to for as long
    /// as the returned view is used.
    #[allow(unsafe_code)]
    pub unsafe fn from_ptr(base: *const u8) -> Result<BootDescriptor<'static>, TagError> {
        if base.is_null() {
            return Err(TagError::Null);
        }

        let total_size = u32::from_le(unsafe { core::ptr::read_unaligned(base.cast::<u32>()) });
        let declared = total_size as usize;
        if declared < DESCRIPTOR_HEADER_SIZE {
            return Err(TagError::DescriptorTooShort { len: declared });
        }

        let blob = unsafe { core::slice::from_raw_parts(base, declared) };
        BootDescriptor::new(blob)
    }

    /// Declared size of the whole structure, header included.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn total_size(&self) -> u32 {
        // The view was cut from a u32 length.
        self.bytes.len() as u32
    }

    #[must_use]
    pub const fn reserved(&self) -> u32 {
        self.reserved
    }

    /// The raw bytes of the structure, header included.
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Walk the tag list from the first tag.
    #[must_use]
    pub const fn tags(&self) -> TagWalker<'a> {
        TagWalker::new(*self, TagCursor::START)
    }

    /// First framebuffer tag, if any.
    ///
    /// # Errors
    /// Any [`TagError`] hit before the framebuffer tag is found.
    pub fn framebuffer(&self) -> Result<Option<FramebufferTag>, TagError> {
        display::find_framebuffer(self)
    }

    /// Resolve what kind of display the loader left us with.
    ///
    /// # Errors
    /// Any [`TagError`] hit before the framebuffer tag is found.
    pub fn display_mode(&self) -> Result<DisplayMode, TagError> {
        display::resolve(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_must_fit() {
        assert_eq!(
            BootDescriptor::new(&[8, 0, 0]),
            Err(TagError::DescriptorTooShort { len: 3 })
        );
    }

    #[test]
    fn declared_size_below_header_is_rejected() {
        let raw = [4, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(
            BootDescriptor::new(&raw),
            Err(TagError::DescriptorTooShort { len: 4 })
        );
    }

    #[test]
    fn declared_size_beyond_blob_is_rejected() {
        let raw = [64, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 0, 0, 0];
        assert_eq!(
            BootDescriptor::new(&raw),
            Err(TagError::DescriptorTruncated {
                declared: 64,
                available: 16
            })
        );
    }

    #[test]
    fn view_is_cut_to_total_size() {
        let mut raw = [0u8; 32];
        raw[0] = 16;
        raw[4] = 0xAA;
        raw[12] = 8;
        let d = BootDescriptor::new(&raw).unwrap();
        assert_eq!(d.total_size(), 16);
        assert_eq!(d.reserved(), 0xAA);
        assert_eq!(d.as_bytes().len(), 16);
    }

    #[test]
    fn from_ptr_rejects_null() {
        #[allow(unsafe_code)]
        let res = unsafe { BootDescriptor::from_ptr(core::ptr::null()) };
        assert_eq!(res, Err(TagError::Null));
    }

    #[test]
    fn from_ptr_reads_declared_size_only() {
        let raw: &'static [u8] = &[16, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 0, 0, 0, 0xFF];
        #[allow(unsafe_code)]
        let d = unsafe { BootDescriptor::from_ptr(raw.as_ptr()) }.unwrap();
        assert_eq!(d.as_bytes(), &raw[..16]);
    }
}
