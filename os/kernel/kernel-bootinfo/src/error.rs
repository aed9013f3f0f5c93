/// A malformed boot descriptor.
///
/// Every variant means the walk stopped at the reported offset; nothing past
/// it was interpreted. Offsets are relative to the descriptor base.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum TagError {
    #[error("boot descriptor pointer is null")]
    Null,

    #[error("boot descriptor of {len} bytes is shorter than its 8-byte header")]
    DescriptorTooShort { len: usize },

    #[error("boot descriptor declares {declared} bytes but only {available} are readable")]
    DescriptorTruncated { declared: u32, available: usize },

    #[error("tag header at offset {offset:#x} runs past the end of the descriptor")]
    HeaderOutOfBounds { offset: usize },

    #[error("tag at offset {offset:#x} declares size {size}, smaller than its header")]
    SizeTooSmall { offset: usize, size: u32 },

    #[error("tag at offset {offset:#x} with size {size} ends past total size {total_size}")]
    EndOutOfBounds {
        offset: usize,
        size: u32,
        total_size: u32,
    },

    #[error("framebuffer tag at offset {offset:#x} has size {size}, too short for its fields")]
    FramebufferTooShort { offset: usize, size: u32 },
}

impl TagError {
    /// Offset of the offending tag, if the error is tied to one.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match *self {
            Self::Null | Self::DescriptorTooShort { .. } | Self::DescriptorTruncated { .. } => None,
            Self::HeaderOutOfBounds { offset }
            | Self::SizeTooSmall { offset, .. }
            | Self::EndOutOfBounds { offset, .. }
            | Self::FramebufferTooShort { offset, .. } => Some(offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_names_the_offending_tag() {
        assert_eq!(TagError::Null.offset(), None);
        assert_eq!(TagError::DescriptorTooShort { len: 3 }.offset(), None);
        assert_eq!(TagError::HeaderOutOfBounds { offset: 40 }.offset(), Some(40));
        let past_end = TagError::EndOutOfBounds {
            offset: 8,
            size: 64,
            total_size: 48,
        };
        assert_eq!(past_end.offset(), Some(8));
        assert_eq!(
            past_end.to_string(),
            "tag at offset 0x8 with size 64 ends past total size 48"
        );
    }
}
