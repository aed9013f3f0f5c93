//! # Heap-free `printf` for the kernel
//!
//! A small formatting engine usable before the kernel has a heap, a console
//! driver or even a stack of any real size. It renders C-style format strings
//! into a caller-supplied byte buffer and never writes past it.
//!
//! ## Format language
//!
//! | Specifier | Argument                  | Output                          |
//! |-----------|---------------------------|---------------------------------|
//! | `%s`      | [`Arg::Str`]              | bytes up to the first NUL, `(null)` if absent |
//! | `%c`      | any integer               | its low byte                    |
//! | `%d` `%i` | any integer               | signed decimal                  |
//! | `%u`      | any integer               | unsigned decimal                |
//! | `%x` `%X` | any integer               | hex, lower/upper case, no prefix |
//! | `%p`      | any integer / pointer     | `0x` + upper-case 64-bit hex     |
//! | `%%`      | none                      | `%`                             |
//!
//! Integer specifiers read 32 bits of their argument unless preceded by `l`
//! or `ll`, which select 64 bits. An unknown specifier is copied through as
//! `%` and the character. A missing argument or one of the wrong kind renders
//! as `(?)` and the engine moves on.
//!
//! Arguments are an explicit slice of [`Arg`] values consumed left to right;
//! there is no variadic ABI involved.
//!
//! ## Truncation
//!
//! The destination holds at most `capacity - 1` content bytes followed by a
//! NUL. Output that does not fit is dropped, possibly in the middle of a
//! number. The returned length is what was written, which callers compare
//! with the logical length (see [`RenderedMessage::is_truncated`]) if they
//! care.
//!
//! ```
//! use kernel_fmt::{Arg, render};
//!
//! let mut buf = [0u8; 32];
//! let n = render(&mut buf, b"irq %u at %p", &[Arg::from(14u32), Arg::Ptr(0xdead_b000)]);
//! assert_eq!(&buf[..n], b"irq 14 at 0xDEADB000");
//! assert_eq!(buf[n], 0);
//! ```

#![cfg_attr(not(any(test, doctest)), no_std)]
#![forbid(unsafe_code)]

mod arg;
mod engine;
mod integer;
mod writer;

pub use arg::Arg;
pub use engine::{MISMATCH, NULL_STR, RenderedMessage, render, render_into};
pub use integer::{Digits, HexCase, IntWidth, MAX_DIGITS, to_decimal, to_hex, to_pointer};
pub use writer::BoundedWriter;
