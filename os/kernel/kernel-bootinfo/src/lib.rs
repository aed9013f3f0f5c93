//! # Multiboot2 Boot Information
//!
//! Read-only access to the boot information structure the firmware (GRUB or
//! any other Multiboot2 loader) hands to the kernel, and the discovery of the
//! display the kernel may print to.
//!
//! ## Layout
//!
//! ```text
//! offset 0  ┌──────────────────────────────┐
//!           │ total_size (u32, LE)         │
//! offset 4  ├──────────────────────────────┤
//!           │ reserved   (u32)             │
//! offset 8  ├──────────────────────────────┤
//!           │ tag[0]: type, size, payload  │
//!           │ 0-7 bytes padding            │
//!           ├──────────────────────────────┤
//!           │ tag[1] ...                   │
//!           ├──────────────────────────────┤
//!           │ end tag (type = 0)           │
//!           └──────────────────────────────┘
//! ```
//!
//! Every tag header is `type: u32` followed by `size: u32`, where `size`
//! includes the 8-byte header itself. Tags start on 8-byte boundaries.
//!
//! ## Trust
//!
//! The structure lives in memory the kernel did not write and cannot validate
//! up front. All reads go through [`BootDescriptor`], a slice view cut to the
//! declared `total_size`; a tag whose header or body would leave that view is
//! reported as a [`TagError`] at the point of access and the walk stops there.
//!
//! ## Usage
//!
//! ```
//! use kernel_bootinfo::{BootDescriptor, DisplayMode};
//!
//! // total_size = 16, reserved = 0, end tag { type = 0, size = 8 }
//! let raw = [16, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 0, 0, 0];
//! let descriptor = BootDescriptor::new(&raw).unwrap();
//! assert_eq!(descriptor.display_mode(), Ok(DisplayMode::None));
//! ```

#![cfg_attr(not(any(test, doctest)), no_std)]
#![deny(unsafe_code)]

mod descriptor;
mod display;
mod error;
mod framebuffer;
mod tag;

pub use descriptor::{BootDescriptor, DESCRIPTOR_HEADER_SIZE};
pub use display::{DisplayMode, TEXT_MAX_BPP, TEXT_MAX_COLUMNS, TEXT_MAX_ROWS, find_framebuffer, resolve};
pub use error::TagError;
pub use framebuffer::{FRAMEBUFFER_TAG_MIN_SIZE, FramebufferTag};
pub use tag::{TAG_ALIGN, TAG_HEADER_SIZE, Tag, TagCursor, TagStep, TagType, TagWalker};

#[inline]
fn read_u8(buf: &[u8], off: usize) -> Option<u8> {
    buf.get(off).copied()
}

#[inline]
fn read_u32_le(buf: &[u8], off: usize) -> Option<u32> {
    let end = off.checked_add(4)?;
    let s = buf.get(off..end)?;
    Some(u32::from_le_bytes([s[0], s[1], s[2], s[3]]))
}

#[inline]
fn read_u64_le(buf: &[u8], off: usize) -> Option<u64> {
    let end = off.checked_add(8)?;
    let s = buf.get(off..end)?;
    Some(u64::from_le_bytes([
        s[0], s[1], s[2], s[3], s[4], s[5], s[6], s[7],
    ]))
}
