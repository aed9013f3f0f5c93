use crate::{Color, ConsoleSink, DebugPort, PortIo, SerialPort, TextScreen, VgaCursor};

/// The early console: one run of bytes goes to every sink that is present.
///
/// Which sinks exist is decided once, when the console is built. The text
/// screen only makes sense while the adapter is in a text mode; serial and
/// the debug port work regardless.
pub struct Console<'a, P> {
    screen: Option<TextScreen<'a>>,
    cursor: Option<VgaCursor<P>>,
    serial: Option<SerialPort<P>>,
    debug: Option<DebugPort<P>>,
}

impl<P> Default for Console<'_, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, P> Console<'a, P> {
    /// A console without any sink; writes go nowhere.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            screen: None,
            cursor: None,
            serial: None,
            debug: None,
        }
    }

    #[must_use]
    pub fn with_screen(mut self, screen: TextScreen<'a>) -> Self {
        self.screen = Some(screen);
        self
    }

    /// Keep the hardware cursor in step with the screen.
    #[must_use]
    pub fn with_cursor(mut self, cursor: VgaCursor<P>) -> Self {
        self.cursor = Some(cursor);
        self
    }

    #[must_use]
    pub fn with_serial(mut self, serial: SerialPort<P>) -> Self {
        self.serial = Some(serial);
        self
    }

    #[must_use]
    pub fn with_debug_port(mut self, debug: DebugPort<P>) -> Self {
        self.debug = Some(debug);
        self
    }

    #[must_use]
    pub const fn screen(&self) -> Option<&TextScreen<'a>> {
        self.screen.as_ref()
    }

    #[must_use]
    pub const fn has_serial(&self) -> bool {
        self.serial.is_some()
    }

    #[must_use]
    pub const fn has_debug_port(&self) -> bool {
        self.debug.is_some()
    }
}

impl<P: PortIo> Console<'_, P> {
    /// Blank the screen, if there is one, and home both cursors.
    pub fn clear_screen(&mut self) {
        if let Some(screen) = self.screen.as_mut() {
            screen.clear();
            if let Some(cursor) = self.cursor.as_mut() {
                cursor.move_to(screen.cursor());
            }
        }
    }
}

impl<P: PortIo> ConsoleSink for Console<'_, P> {
    fn write(&mut self, bytes: &[u8], foreground: Color, background: Color) {
        if let Some(screen) = self.screen.as_mut() {
            screen.write(bytes, foreground, background);
            if let Some(cursor) = self.cursor.as_mut() {
                cursor.move_to(screen.cursor());
            }
        }
        if let Some(serial) = self.serial.as_mut() {
            serial.write(bytes, foreground, background);
        }
        if let Some(debug) = self.debug.as_mut() {
            debug.write(bytes, foreground, background);
        }
    }
}

impl<P> core::fmt::Debug for Console<'_, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Console")
            .field("screen", &self.screen)
            .field("cursor", &self.cursor.is_some())
            .field("serial", &self.serial.is_some())
            .field("debug", &self.debug.is_some())
            .finish()
    }
}
