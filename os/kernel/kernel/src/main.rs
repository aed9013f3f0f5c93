//! # Kernel entry point

#![no_std]
#![no_main]
#![allow(unsafe_code)]

use core::fmt::Write;
use kernel::EarlyBoot;
use kernel_bootinfo::BootDescriptor;
use kernel_console::{COM1, ConsoleSink, SerialPort, TextScreen, X86Ports};
use kernel_printk::LogLevel;

static BOOT: EarlyBoot<X86Ports> = EarlyBoot::new();

/// Rust entry, called by the boot stub once it is in long mode.
///
/// # ABI
/// System V: the physical address of the Multiboot2 boot descriptor arrives
/// in `RDI`. The stub must have identity-mapped the descriptor and the VGA
/// text buffer, set up a stack and left interrupts disabled.
#[unsafe(no_mangle)]
pub extern "C" fn kernel_main(descriptor: *const u8) -> ! {
    // SAFETY: the boot stub runs us at CPL0 on a PC with the legacy devices present.
    let ports = unsafe { X86Ports::new() };

    // SAFETY: the loader guarantees the descriptor stays intact and mapped during early boot.
    let descriptor = unsafe { BootDescriptor::from_ptr(descriptor) };

    // SAFETY: only called for a text-mode display, in which case the VGA
    // buffer is mapped and nothing else writes to it.
    let resolution = BOOT.init(descriptor, &ports, || unsafe { TextScreen::vga() });

    if resolution.is_ok() {
        log::debug!("early console up");
    }

    halt()
}

fn halt() -> ! {
    loop {
        // SAFETY: `hlt` only waits for the next interrupt.
        unsafe { core::arch::asm!("hlt", options(nomem, nostack, preserves_flags)) };
    }
}

/// Reports straight to COM1: the panic may have struck while printk or the
/// console was locked.
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    // SAFETY: as in `kernel_main`.
    let mut serial = SerialPort::new(unsafe { X86Ports::new() }, COM1);
    serial.write_plain(LogLevel::Emergency.tag());
    let _ = writeln!(serial, "kernel panic: {info}");
    halt()
}
