use crate::tag::Tag;
use crate::{TagError, read_u8, read_u32_le, read_u64_le};

/// Header (8) + address (8) + pitch, width, height (3 × 4) + bpp, type, reserved (3 × 1).
pub const FRAMEBUFFER_TAG_MIN_SIZE: u32 = 31;

// Payload offsets (the payload starts after the 8-byte tag header).
const ADDRESS: usize = 0;
const PITCH: usize = 8;
const WIDTH: usize = 12;
const HEIGHT: usize = 16;
const BPP: usize = 20;
const FB_TYPE: usize = 21;

/// Geometry of the framebuffer the loader set up (tag type 8).
///
/// For EGA text mode `width`/`height` are in characters, otherwise in pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FramebufferTag {
    /// Physical address of the framebuffer.
    pub address: u64,
    /// Bytes per row.
    pub pitch: u32,
    pub width: u32,
    pub height: u32,
    /// Bits per pixel.
    pub bpp: u8,
    /// 0 = indexed, 1 = direct RGB, 2 = EGA text.
    pub fb_type: u8,
}

impl FramebufferTag {
    /// Decode the fixed fields of a framebuffer tag.
    ///
    /// The tag type is not checked; callers select the tag first.
    ///
    /// # Errors
    /// [`TagError::FramebufferTooShort`] if the tag cannot hold the fields.
    pub fn parse(tag: &Tag<'_>) -> Result<Self, TagError> {
        let too_short = TagError::FramebufferTooShort {
            offset: tag.offset(),
            size: tag.size(),
        };
        if tag.size() < FRAMEBUFFER_TAG_MIN_SIZE {
            return Err(too_short);
        }

        let p = tag.payload();
        Ok(Self {
            address: read_u64_le(p, ADDRESS).ok_or(too_short)?,
            pitch: read_u32_le(p, PITCH).ok_or(too_short)?,
            width: read_u32_le(p, WIDTH).ok_or(too_short)?,
            height: read_u32_le(p, HEIGHT).ok_or(too_short)?,
            bpp: read_u8(p, BPP).ok_or(too_short)?,
            fb_type: read_u8(p, FB_TYPE).ok_or(too_short)?,
        })
    }
}
