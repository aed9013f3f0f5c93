use crate::{Color, ConsoleSink, PortIo, QEMU_DEBUG_PORT};

/// QEMU's `isa-debugcon` device: every byte written to the port shows up on
/// the host (`-debugcon stdio` or `-debugcon file:...`).
///
/// On real hardware the port is unclaimed and writes are simply lost.
#[derive(Debug, Clone)]
pub struct DebugPort<P> {
    port: u16,
    ports: P,
}

impl<P: PortIo> DebugPort<P> {
    pub const fn new(ports: P) -> Self {
        Self::at(ports, QEMU_DEBUG_PORT)
    }

    pub const fn at(ports: P, port: u16) -> Self {
        Self { port, ports }
    }
}

impl<P: PortIo> ConsoleSink for DebugPort<P> {
    fn write(&mut self, bytes: &[u8], _foreground: Color, _background: Color) {
        for &b in bytes {
            self.ports.outb(self.port, b);
        }
    }
}

impl<P: PortIo> core::fmt::Write for DebugPort<P> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.write_plain(s.as_bytes());
        Ok(())
    }
}
