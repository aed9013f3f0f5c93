//! # Leveled kernel logging
//!
//! `printk` renders a C-style format string (see [`kernel_fmt`]) behind a
//! severity tag and hands the result to the console in the severity's color:
//!
//! ```text
//! printk!("<3>disk %u: timeout", 2)   →   "[ERR] disk 2: timeout"  (light red on black)
//! ```
//!
//! | Level | Tag        | Color       |
//! |-------|------------|-------------|
//! | 0-3   | `[EMERG] ` `[ALERT] ` `[CRIT] ` `[ERR] ` | light red |
//! | 4     | `[WARN] `  | yellow      |
//! | 5     | `[NOTICE] `| light green |
//! | 6     | `[INFO] `  | light grey  |
//! | 7     | `[DEBUG] ` | light cyan  |
//!
//! A message without a `<N>` prefix is INFO. Tag and body share one
//! [`SCRATCH_CAPACITY`]-byte buffer; longer output is truncated.
//!
//! The [`log`] facade is bridged through [`PrintkLogger`], so
//! `log::warn!("...")` comes out as `[WARN] target: ...`.
//!
//! Nothing is printed until a sink has been [`install`]ed.

#![cfg_attr(not(any(test, doctest)), no_std)]
#![forbid(unsafe_code)]

mod global;
mod level;
mod logger;
mod printk;

pub use global::{SharedSink, install, is_installed, printk, printk_args, uninstall};
pub use kernel_fmt::Arg;
pub use level::{LogLevel, split_level};
pub use logger::PrintkLogger;
pub use printk::Printk;

/// Size of the scratch buffer a message, tag included, is rendered into.
pub const SCRATCH_CAPACITY: usize = 1024;

/// Level of messages without a `<N>` prefix.
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Info;

// Room for the longest tag and at least one byte of text.
const _: () = assert!(SCRATCH_CAPACITY > b"[NOTICE] ".len() + 1);

/// Log a C-style format string through the installed console.
///
/// Arguments are converted with [`Arg::from`]:
///
/// ```ignore
/// printk!("<4>irq %u unhandled at %p\n", vector, rip as *const u8);
/// ```
#[macro_export]
macro_rules! printk {
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::printk(
            ::core::convert::AsRef::<[u8]>::as_ref($fmt),
            &[$($crate::Arg::from($arg)),*],
        )
    };
}
