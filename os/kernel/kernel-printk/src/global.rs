//! The kernel-wide printk instance.
//!
//! One scratch buffer and one sink, shared by `printk!` and the `log`
//! bridge, behind a spin lock taken with interrupts masked.

use crate::{LogLevel, Printk, SCRATCH_CAPACITY};
use core::fmt;
use kernel_console::ConsoleSink;
use kernel_fmt::Arg;
use kernel_sync::SpinLock;

/// A console shared between the kernel and printk.
pub type SharedSink = SpinLock<dyn ConsoleSink + Send>;

struct Global {
    printk: Printk<SCRATCH_CAPACITY>,
    sink: Option<&'static SharedSink>,
}

static GLOBAL: SpinLock<Global> = SpinLock::new(Global {
    printk: Printk::new(),
    sink: None,
});

/// Route all further output to `sink`.
///
/// Returns the previously installed sink, if any.
pub fn install(sink: &'static SharedSink) -> Option<&'static SharedSink> {
    GLOBAL.lock_irq().sink.replace(sink)
}

/// Stop producing output. Messages logged afterwards are dropped.
pub fn uninstall() -> Option<&'static SharedSink> {
    GLOBAL.lock_irq().sink.take()
}

#[must_use]
pub fn is_installed() -> bool {
    GLOBAL.lock_irq().sink.is_some()
}

/// Log through the installed sink; see [`Printk::log`].
///
/// Returns 0 when no sink is installed.
pub fn printk(format: &[u8], args: &[Arg<'_>]) -> usize {
    with_sink(|printk, sink| printk.log(sink, format, args))
}

/// Log Rust-formatted text through the installed sink.
pub fn printk_args(level: LogLevel, args: fmt::Arguments<'_>) -> usize {
    with_sink(|printk, sink| printk.log_args(sink, level, args))
}

fn with_sink(
    f: impl FnOnce(&mut Printk<SCRATCH_CAPACITY>, &mut dyn ConsoleSink) -> usize,
) -> usize {
    let mut global = GLOBAL.lock_irq();
    let Global { printk, sink } = &mut *global;
    let Some(sink) = *sink else {
        return 0;
    };
    let mut sink = sink.lock_irq();
    f(printk, &mut *sink)
}
