//! # Early boot
//!
//! The first thing the kernel does after the boot stub hands over is to work
//! out where it can print to and start printing:
//!
//! 1. Resolve the [`DisplayMode`] from the boot descriptor, exactly once.
//! 2. Pick console sinks: the VGA text screen only when the loader left the
//!    adapter in text mode, COM1 always, the QEMU debug port when the `qemu`
//!    feature is on.
//! 3. Install the console as the printk sink and bridge the `log` facade.
//! 4. Print the banner and the display mode.
//!
//! A malformed descriptor does not stop the boot. It is treated like "no
//! usable display": output goes to serial (and the debug port), and the
//! error is logged once the console is up.

use kernel_bootinfo::{BootDescriptor, DisplayMode, TagError};
use kernel_console::{
    COM1, Console, DebugPort, PortIo, SCREEN_WIDTH, SerialPort, TextScreen, VgaCursor,
};
use kernel_printk::{PrintkLogger, SharedSink, printk};
use kernel_sync::{SpinLock, SyncOnceCell};
use log::LevelFilter;

/// Lines printed once the console is up.
pub const BANNER: [&str; 3] = [
    "Welcome to Solum OS!\n",
    "Version (a0.01)\n",
    "By Roy - 2025\n",
];

/// Outcome of looking for a display in the boot descriptor.
pub type Resolution = Result<DisplayMode, TagError>;

/// Which console sinks to bring up.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SinkPlan {
    pub text_screen: bool,
    pub serial: bool,
    pub debug_port: bool,
}

impl SinkPlan {
    /// The sinks to use for `resolution`.
    ///
    /// Only a text-mode display gets the VGA text screen; a graphics
    /// framebuffer would be corrupted by writes to `0xB8000`.
    #[must_use]
    pub const fn for_resolution(resolution: &Resolution) -> Self {
        Self {
            text_screen: matches!(resolution, Ok(DisplayMode::Text)),
            serial: true,
            debug_port: cfg!(feature = "qemu"),
        }
    }
}

/// Build a console from `plan`.
///
/// `screen` is only called when the plan wants a text screen; the returned
/// screen is cleared. The serial port is initialized.
pub fn build_console<'a, P: PortIo + Clone>(
    plan: SinkPlan,
    ports: &P,
    screen: impl FnOnce() -> TextScreen<'a>,
) -> Console<'a, P> {
    let mut console = Console::new();
    if plan.text_screen {
        console = console
            .with_screen(screen())
            .with_cursor(VgaCursor::new(ports.clone(), SCREEN_WIDTH));
    }
    if plan.serial {
        let mut serial = SerialPort::new(ports.clone(), COM1);
        serial.init();
        console = console.with_serial(serial);
    }
    if plan.debug_port {
        console = console.with_debug_port(DebugPort::new(ports.clone()));
    }
    console.clear_screen();
    console
}

/// Boot-time state that is decided once and read afterwards.
pub struct EarlyBoot<P> {
    resolution: SyncOnceCell<Resolution>,
    console: SyncOnceCell<SpinLock<Console<'static, P>>>,
}

impl<P> Default for EarlyBoot<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> EarlyBoot<P> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            resolution: SyncOnceCell::new(),
            console: SyncOnceCell::new(),
        }
    }

    /// The display mode, once resolved.
    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution.get().copied()
    }

    /// Resolve the display mode from `descriptor` unless already done.
    ///
    /// Later calls return the first answer, whatever descriptor they pass.
    pub fn resolve(&self, descriptor: Result<BootDescriptor<'_>, TagError>) -> Resolution {
        *self
            .resolution
            .get_or_init(|| descriptor.and_then(|d| d.display_mode()))
    }

    /// Run `f` on the console, once initialized, with interrupts masked.
    ///
    /// The console is also the printk sink and stays locked while `f` runs:
    /// `f` must not log, or it spins on its own lock.
    pub fn with_console<R>(&self, f: impl FnOnce(&mut Console<'static, P>) -> R) -> Option<R> {
        let console = self.console.get()?;
        let mut guard = console.lock_irq();
        Some(f(&mut guard))
    }
}

impl<P: PortIo + Clone + Send + 'static> EarlyBoot<P> {
    /// Bring up console output and logging.
    ///
    /// Safe to call more than once; only the first call configures anything.
    pub fn init(
        &'static self,
        descriptor: Result<BootDescriptor<'_>, TagError>,
        ports: &P,
        screen: impl FnOnce() -> TextScreen<'static>,
    ) -> Resolution {
        let resolution = self.resolve(descriptor);
        let plan = SinkPlan::for_resolution(&resolution);

        let mut first = false;
        let console = self.console.get_or_init(|| {
            first = true;
            SpinLock::new(build_console(plan, ports, screen))
        });
        if !first {
            return resolution;
        }

        let sink: &'static SharedSink = console;
        kernel_printk::install(sink);
        if PrintkLogger::new(LevelFilter::Debug).init().is_err() {
            printk!("<4>log facade already taken; log records will not reach the console\n");
        }

        announce(&resolution);
        resolution
    }
}

/// Print the banner and report the display mode.
pub fn announce(resolution: &Resolution) {
    for line in BANNER {
        printk(line.as_bytes(), &[]);
    }
    match resolution {
        Ok(mode) => log::info!("display: {mode}"),
        Err(e) => log::error!("boot descriptor rejected: {e}; continuing on serial only"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_follows_the_display_mode() {
        let text = SinkPlan::for_resolution(&Ok(DisplayMode::Text));
        assert!(text.text_screen && text.serial);

        let graphics = SinkPlan::for_resolution(&Ok(DisplayMode::Graphics {
            address: 0xFD00_0000,
            width: 1024,
            height: 768,
            pitch: 4096,
            bpp: 32,
        }));
        assert!(!graphics.text_screen && graphics.serial);

        let none = SinkPlan::for_resolution(&Ok(DisplayMode::None));
        assert!(!none.text_screen);

        let broken = SinkPlan::for_resolution(&Err(TagError::HeaderOutOfBounds { offset: 24 }));
        assert!(!broken.text_screen && broken.serial);
        assert_eq!(broken.debug_port, cfg!(feature = "qemu"));
    }

    #[test]
    fn resolution_is_sticky() {
        let boot = EarlyBoot::<()>::new();
        assert_eq!(boot.resolution(), None);

        let end_only = [16u8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 8, 0, 0, 0];
        assert_eq!(boot.resolve(BootDescriptor::new(&end_only)), Ok(DisplayMode::None));
        assert_eq!(boot.resolve(Err(TagError::Null)), Ok(DisplayMode::None));
        assert_eq!(boot.resolution(), Some(Ok(DisplayMode::None)));
    }

    #[test]
    fn no_console_before_init() {
        let boot = EarlyBoot::<()>::new();
        let mut called = false;
        assert_eq!(boot.with_console(|_| called = true), None);
        assert!(!called);
    }

    #[test]
    fn malformed_descriptor_is_remembered() {
        let boot = EarlyBoot::<()>::new();
        assert_eq!(boot.resolve(Err(TagError::Null)), Err(TagError::Null));
        assert_eq!(boot.resolution(), Some(Err(TagError::Null)));
    }
}
