use crate::descriptor::BootDescriptor;
use crate::framebuffer::FramebufferTag;
use crate::tag::TagType;
use crate::TagError;
use core::fmt;

/// Widest framebuffer still treated as a text console.
pub const TEXT_MAX_COLUMNS: u32 = 80;

/// Tallest framebuffer still treated as a text console.
pub const TEXT_MAX_ROWS: u32 = 25;

/// Deepest framebuffer still treated as a text console.
pub const TEXT_MAX_BPP: u8 = 16;

/// What the kernel can draw to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DisplayMode {
    /// The loader reported no framebuffer.
    None,
    /// A character-cell console of at most 80×25.
    Text,
    /// A linear pixel framebuffer.
    Graphics {
        address: u64,
        width: u32,
        height: u32,
        pitch: u32,
        bpp: u8,
    },
}

impl DisplayMode {
    /// Classify a framebuffer tag.
    ///
    /// Text only if width, height and depth all fit a text console; any
    /// depth above 16 bits is graphics whatever the geometry.
    #[must_use]
    pub const fn classify(fb: &FramebufferTag) -> Self {
        if fb.width <= TEXT_MAX_COLUMNS && fb.height <= TEXT_MAX_ROWS && fb.bpp <= TEXT_MAX_BPP {
            Self::Text
        } else {
            Self::Graphics {
                address: fb.address,
                width: fb.width,
                height: fb.height,
                pitch: fb.pitch,
                bpp: fb.bpp,
            }
        }
    }

    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }

    #[must_use]
    pub const fn is_graphics(&self) -> bool {
        matches!(self, Self::Graphics { .. })
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::None => f.write_str("none"),
            Self::Text => f.write_str("text"),
            Self::Graphics {
                address,
                width,
                height,
                pitch,
                bpp,
            } => write!(
                f,
                "graphics {width}x{height}x{bpp} pitch={pitch} at {address:#018x}"
            ),
        }
    }
}

/// Find the first framebuffer tag; later ones are ignored.
///
/// # Errors
/// The first [`TagError`] met before a framebuffer tag, or the framebuffer
/// tag's own decoding error.
pub fn find_framebuffer(descriptor: &BootDescriptor<'_>) -> Result<Option<FramebufferTag>, TagError> {
    for tag in descriptor.tags() {
        let tag = tag?;
        if tag.tag_type() == TagType::Framebuffer {
            return FramebufferTag::parse(&tag).map(Some);
        }
    }
    Ok(None)
}

/// Resolve the display mode of a boot.
///
/// A list without framebuffer tag is [`DisplayMode::None`], not an error.
///
/// # Errors
/// A malformed list is reported as is; no geometry is guessed.
pub fn resolve(descriptor: &BootDescriptor<'_>) -> Result<DisplayMode, TagError> {
    Ok(find_framebuffer(descriptor)?.map_or(DisplayMode::None, |fb| DisplayMode::classify(&fb)))
}
