//! Fixed hardware layout of the early console.

/// Columns of the VGA text screen.
pub const SCREEN_WIDTH: usize = 80;

/// Rows of the VGA text screen.
pub const SCREEN_HEIGHT: usize = 25;

/// Number of spaces a `\t` expands to.
pub const TAB_WIDTH: usize = 4;

/// Physical address of the VGA text buffer (identity-mapped during early boot).
pub const VGA_TEXT_BUFFER: usize = 0xB8000;

/// I/O base of the first serial port.
pub const COM1: u16 = 0x3F8;

/// QEMU's `isa-debugcon` port.
pub const QEMU_DEBUG_PORT: u16 = 0x402;

/// CRT controller index register.
pub const CRTC_INDEX: u16 = 0x3D4;

/// CRT controller data register.
pub const CRTC_DATA: u16 = 0x3D5;

const _: () = {
    assert!(SCREEN_WIDTH > 0 && SCREEN_HEIGHT > 0);
    // The hardware cursor location register is 16 bits wide.
    assert!(SCREEN_WIDTH * SCREEN_HEIGHT <= u16::MAX as usize);
    assert!(TAB_WIDTH > 0 && TAB_WIDTH < SCREEN_WIDTH);
    assert!(VGA_TEXT_BUFFER % 2 == 0);
    // A UART occupies eight consecutive ports.
    assert!(COM1 as u32 + 7 <= u16::MAX as u32);
};
