//! # 16550 UART, transmit side
//!
//! Only what an early console needs: a fixed line setup and busy-waiting
//! transmission. Nothing is ever read back except the line status.
//!
//! Register offsets from the port base:
//!
//! ```text
//! +0  THR / divisor low (DLAB=1)
//! +1  IER / divisor high (DLAB=1)
//! +2  FCR
//! +3  LCR (bit 7 = DLAB)
//! +4  MCR
//! +5  LSR (bit 5 = transmit holding register empty)
//! ```

use crate::{Color, ConsoleSink, PortIo};

const DATA: u16 = 0;
const INTERRUPT_ENABLE: u16 = 1;
const FIFO_CONTROL: u16 = 2;
const LINE_CONTROL: u16 = 3;
const MODEM_CONTROL: u16 = 4;
const LINE_STATUS: u16 = 5;

/// LCR: divisor latch access.
const DLAB: u8 = 0x80;
/// LCR: 8 data bits, no parity, one stop bit.
const EIGHT_N_ONE: u8 = 0x03;
/// 115200 / 3 = 38400 baud.
const DIVISOR: u16 = 3;
/// FCR: enable, clear both FIFOs, 14-byte threshold.
const FIFO_SETUP: u8 = 0xC7;
/// MCR: DTR, RTS and OUT2.
const MODEM_SETUP: u8 = 0x0B;
/// LSR: transmit holding register empty.
const THR_EMPTY: u8 = 0x20;

#[derive(Debug, Clone)]
pub struct SerialPort<P> {
    base: u16,
    ports: P,
}

impl<P: PortIo> SerialPort<P> {
    /// A UART at `base`. The device is not touched until [`init`](Self::init).
    pub const fn new(ports: P, base: u16) -> Self {
        Self { base, ports }
    }

    #[must_use]
    pub const fn base(&self) -> u16 {
        self.base
    }

    /// Program 38400 baud 8N1 with FIFOs on and interrupts off.
    pub fn init(&mut self) {
        let [divisor_low, divisor_high] = DIVISOR.to_le_bytes();
        self.out(INTERRUPT_ENABLE, 0x00);
        self.out(LINE_CONTROL, DLAB);
        self.out(DATA, divisor_low);
        self.out(INTERRUPT_ENABLE, divisor_high);
        self.out(LINE_CONTROL, EIGHT_N_ONE);
        self.out(FIFO_CONTROL, FIFO_SETUP);
        self.out(MODEM_CONTROL, MODEM_SETUP);
    }

    /// Send one byte as is, waiting for room in the transmitter.
    pub fn send(&mut self, byte: u8) {
        while self.ports.inb(self.base + LINE_STATUS) & THR_EMPTY == 0 {
            core::hint::spin_loop();
        }
        self.out(DATA, byte);
    }

    /// Send one byte, turning `\n` into `\r\n`.
    pub fn put_byte(&mut self, byte: u8) {
        if byte == b'\n' {
            self.send(b'\r');
        }
        self.send(byte);
    }

    fn out(&mut self, register: u16, value: u8) {
        self.ports.outb(self.base + register, value);
    }
}

impl<P: PortIo> ConsoleSink for SerialPort<P> {
    fn write(&mut self, bytes: &[u8], _foreground: Color, _background: Color) {
        for &b in bytes {
            self.put_byte(b);
        }
    }
}

impl<P: PortIo> core::fmt::Write for SerialPort<P> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.write_plain(s.as_bytes());
        Ok(())
    }
}
