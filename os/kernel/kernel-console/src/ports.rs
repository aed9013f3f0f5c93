//! # Port-mapped I/O
//!
//! The legacy devices behind the early console (UART, CRT controller, QEMU
//! debug console) live in the x86 I/O port space and are driven with the
//! `in`/`out` instructions. Device drivers in this crate do not issue those
//! instructions themselves; they go through [`PortIo`] so they can be
//! exercised on the host against a recording implementation.
//!
//! [`X86Ports`] is the real thing. Constructing it is `unsafe` because every
//! access it performs afterwards assumes CPL0 (or a permissive IOPL / I/O
//! bitmap) and that the addressed devices exist.

/// Byte-wide access to the I/O port space.
pub trait PortIo {
    /// Write `value` to `port`.
    fn outb(&mut self, port: u16, value: u8);

    /// Read one byte from `port`.
    fn inb(&mut self, port: u16) -> u8;
}

impl<P: PortIo + ?Sized> PortIo for &mut P {
    #[inline]
    fn outb(&mut self, port: u16, value: u8) {
        (**self).outb(port, value);
    }

    #[inline]
    fn inb(&mut self, port: u16) -> u8 {
        (**self).inb(port)
    }
}

/// Port access through `out dx, al` / `in al, dx`.
#[cfg(all(feature = "port-io", target_arch = "x86_64"))]
#[derive(Debug, Copy, Clone)]
pub struct X86Ports {
    _private: (),
}

#[cfg(all(feature = "port-io", target_arch = "x86_64"))]
impl X86Ports {
    /// # Safety
    /// The caller must run with I/O privilege (CPL0, or IOPL/I/O bitmap
    /// granting every port the drivers will touch), and the legacy devices
    /// addressed through this handle must be present and not concurrently
    /// driven by someone else.
    #[must_use]
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

#[cfg(all(feature = "port-io", target_arch = "x86_64"))]
impl PortIo for X86Ports {
    #[inline]
    fn outb(&mut self, port: u16, value: u8) {
        // SAFETY: I/O privilege and device presence were promised in `X86Ports::new`.
        unsafe {
            core::arch::asm!("out dx, al", in("dx") port, in("al") value, options(nomem, nostack, preserves_flags));
        }
    }

    #[inline]
    fn inb(&mut self, port: u16) -> u8 {
        let value: u8;
        // SAFETY: see `outb`.
        unsafe {
            core::arch::asm!("in al, dx", in("dx") port, out("al") value, options(nomem, nostack, preserves_flags));
        }
        value
    }
}
