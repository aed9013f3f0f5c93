//! # Early boot console
//!
//! Output devices that work before the kernel has interrupts, memory
//! management or a framebuffer driver:
//!
//! * [`TextScreen`]: the 80x25 VGA text buffer, with wrapping and scrolling,
//!   plus the CRT controller's hardware cursor ([`VgaCursor`]);
//! * [`SerialPort`]: COM1, busy-wait transmit;
//! * [`DebugPort`]: QEMU's `isa-debugcon` at port `0x402`.
//!
//! All of them implement [`ConsoleSink`], and [`Console`] fans a single write
//! out to whichever of them were configured.
//!
//! Port I/O goes through the [`PortIo`] trait. With the default `port-io`
//! feature on `x86_64`, [`X86Ports`] issues the actual `in`/`out`
//! instructions; tests supply their own implementation.

#![cfg_attr(not(any(test, doctest)), no_std)]

mod color;
mod config;
mod console;
mod cursor;
mod debug_port;
mod ports;
mod screen;
mod serial;
mod sink;

pub use color::{Attribute, Color};
pub use config::*;
pub use console::Console;
pub use cursor::VgaCursor;
pub use debug_port::DebugPort;
pub use ports::PortIo;
#[cfg(all(feature = "port-io", target_arch = "x86_64"))]
pub use ports::X86Ports;
pub use screen::{BLANK_CELL, Position, ScreenError, TextScreen};
pub use serial::SerialPort;
pub use sink::ConsoleSink;
