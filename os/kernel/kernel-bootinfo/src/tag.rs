use crate::descriptor::{BootDescriptor, DESCRIPTOR_HEADER_SIZE};
use crate::{TagError, read_u32_le};
use core::iter::FusedIterator;

/// Size of the `type` + `size` header in front of every tag.
pub const TAG_HEADER_SIZE: usize = 8;

/// Tags start on this boundary; up to `TAG_ALIGN - 1` bytes of padding follow each tag.
pub const TAG_ALIGN: usize = 8;

/// Position of a tag header, as a byte offset from the descriptor base.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct TagCursor(usize);

impl TagCursor {
    /// The first tag directly follows the descriptor header.
    pub const START: Self = Self(DESCRIPTOR_HEADER_SIZE);

    #[must_use]
    pub const fn new(offset: usize) -> Self {
        Self(offset)
    }

    #[must_use]
    pub const fn offset(self) -> usize {
        self.0
    }
}

/// Well-known Multiboot2 tag types.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TagType {
    End,
    CommandLine,
    BootLoaderName,
    Module,
    BasicMemoryInfo,
    BootDevice,
    MemoryMap,
    Vbe,
    Framebuffer,
    ElfSections,
    Apm,
    Efi32,
    Efi64,
    Smbios,
    AcpiOld,
    AcpiNew,
    Network,
    EfiMemoryMap,
    EfiBootServices,
    Efi32ImageHandle,
    Efi64ImageHandle,
    LoadBaseAddress,
    Unknown(u32),
}

impl TagType {
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::End,
            1 => Self::CommandLine,
            2 => Self::BootLoaderName,
            3 => Self::Module,
            4 => Self::BasicMemoryInfo,
            5 => Self::BootDevice,
            6 => Self::MemoryMap,
            7 => Self::Vbe,
            8 => Self::Framebuffer,
            9 => Self::ElfSections,
            10 => Self::Apm,
            11 => Self::Efi32,
            12 => Self::Efi64,
            13 => Self::Smbios,
            14 => Self::AcpiOld,
            15 => Self::AcpiNew,
            16 => Self::Network,
            17 => Self::EfiMemoryMap,
            18 => Self::EfiBootServices,
            19 => Self::Efi32ImageHandle,
            20 => Self::Efi64ImageHandle,
            21 => Self::LoadBaseAddress,
            other => Self::Unknown(other),
        }
    }

    /// Short name for diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::End => "end",
            Self::CommandLine => "cmdline",
            Self::BootLoaderName => "bootloader",
            Self::Module => "module",
            Self::BasicMemoryInfo => "meminfo",
            Self::BootDevice => "bootdev",
            Self::MemoryMap => "mmap",
            Self::Vbe => "vbe",
            Self::Framebuffer => "framebuffer",
            Self::ElfSections => "elf-sections",
            Self::Apm => "apm",
            Self::Efi32 => "efi32",
            Self::Efi64 => "efi64",
            Self::Smbios => "smbios",
            Self::AcpiOld => "acpi-old",
            Self::AcpiNew => "acpi-new",
            Self::Network => "network",
            Self::EfiMemoryMap => "efi-mmap",
            Self::EfiBootServices => "efi-bs",
            Self::Efi32ImageHandle => "efi32-ih",
            Self::Efi64ImageHandle => "efi64-ih",
            Self::LoadBaseAddress => "load-base",
            Self::Unknown(_) => "unknown",
        }
    }
}

/// One tag of the list, borrowed from the descriptor.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Tag<'a> {
    offset: usize,
    raw_type: u32,
    size: u32,
    payload: &'a [u8],
}

impl<'a> Tag<'a> {
    /// Offset of the tag header from the descriptor base.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub const fn raw_type(&self) -> u32 {
        self.raw_type
    }

    #[must_use]
    pub const fn tag_type(&self) -> TagType {
        TagType::from_raw(self.raw_type)
    }

    /// Declared size, header included.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// The `size - 8` bytes following the header.
    #[must_use]
    pub const fn payload(&self) -> &'a [u8] {
        self.payload
    }

    /// Offset one past the last byte of this tag (padding excluded).
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.size as usize
    }

    /// Where the following tag starts: [`Tag::end`] rounded up to [`TAG_ALIGN`].
    #[must_use]
    pub const fn next_cursor(&self) -> TagCursor {
        TagCursor(self.end().next_multiple_of(TAG_ALIGN))
    }
}

/// Outcome of reading one tag header.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TagStep<'a> {
    Tag(Tag<'a>),
    EndOfList,
}

impl<'a> BootDescriptor<'a> {
    /// Read the tag at `cursor`.
    ///
    /// Pure: the result depends only on the view and the cursor.
    ///
    /// # Errors
    /// [`TagError::HeaderOutOfBounds`] if the header does not fit,
    /// [`TagError::SizeTooSmall`] for `size < 8`,
    /// [`TagError::EndOutOfBounds`] if the tag extends past `total_size`.
    pub fn tag_at(&self, cursor: TagCursor) -> Result<TagStep<'a>, TagError> {
        let bytes = self.as_bytes();
        let offset = cursor.offset();
        let out_of_bounds = TagError::HeaderOutOfBounds { offset };

        let header_end = offset.checked_add(TAG_HEADER_SIZE).ok_or(out_of_bounds)?;
        if header_end > bytes.len() {
            return Err(out_of_bounds);
        }

        let raw_type = read_u32_le(bytes, offset).ok_or(out_of_bounds)?;
        let size = read_u32_le(bytes, offset + 4).ok_or(out_of_bounds)?;

        if (size as usize) < TAG_HEADER_SIZE {
            return Err(TagError::SizeTooSmall { offset, size });
        }

        let past_end = TagError::EndOutOfBounds {
            offset,
            size,
            total_size: self.total_size(),
        };
        let end = offset.checked_add(size as usize).ok_or(past_end)?;
        let payload = bytes.get(header_end..end).ok_or(past_end)?;

        if raw_type == 0 {
            return Ok(TagStep::EndOfList);
        }

        Ok(TagStep::Tag(Tag {
            offset,
            raw_type,
            size,
            payload,
        }))
    }
}

/// Iterator over the tags of a descriptor.
///
/// Yields each tag in order, stops silently at the end tag, and yields a
/// single `Err` before stopping if the list is malformed.
#[derive(Debug, Clone)]
pub struct TagWalker<'a> {
    descriptor: BootDescriptor<'a>,
    cursor: Option<TagCursor>,
}

impl<'a> TagWalker<'a> {
    #[must_use]
    pub const fn new(descriptor: BootDescriptor<'a>, cursor: TagCursor) -> Self {
        Self {
            descriptor,
            cursor: Some(cursor),
        }
    }

    /// Cursor of the next tag to be read, or `None` once the walk is over.
    #[must_use]
    pub const fn cursor(&self) -> Option<TagCursor> {
        self.cursor
    }
}

impl<'a> Iterator for TagWalker<'a> {
    type Item = Result<Tag<'a>, TagError>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.take()?;
        match self.descriptor.tag_at(cursor) {
            Ok(TagStep::Tag(tag)) => {
                self.cursor = Some(tag.next_cursor());
                Some(Ok(tag))
            }
            Ok(TagStep::EndOfList) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

impl FusedIterator for TagWalker<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(raw: &[u8]) -> BootDescriptor<'_> {
        BootDescriptor::new(raw).unwrap()
    }

    #[test]
    fn next_cursor_rounds_up_to_eight() {
        let tag = Tag {
            offset: 8,
            raw_type: 1,
            size: 13,
            payload: &[],
        };
        assert_eq!(tag.end(), 21);
        assert_eq!(tag.next_cursor(), TagCursor::new(24));

        let aligned = Tag { size: 16, ..tag };
        assert_eq!(aligned.next_cursor(), TagCursor::new(24));
    }

    #[test]
    fn end_tag_is_reported() {
        let raw = [16, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 0, 0, 0];
        assert_eq!(descriptor(&raw).tag_at(TagCursor::START), Ok(TagStep::EndOfList));
    }

    #[test]
    fn header_past_total_size_is_malformed() {
        let raw = [16, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 0, 0, 0];
        assert_eq!(
            descriptor(&raw).tag_at(TagCursor::new(12)),
            Err(TagError::HeaderOutOfBounds { offset: 12 })
        );
    }

    #[test]
    fn zero_size_is_malformed_even_for_end_tag() {
        let raw = [16, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(
            descriptor(&raw).tag_at(TagCursor::START),
            Err(TagError::SizeTooSmall { offset: 8, size: 0 })
        );
    }

    #[test]
    fn tag_type_names() {
        assert_eq!(TagType::from_raw(8), TagType::Framebuffer);
        assert_eq!(TagType::from_raw(8).name(), "framebuffer");
        assert_eq!(TagType::from_raw(99), TagType::Unknown(99));
    }
}
