use crate::Color;

/// Something that displays runs of console bytes.
///
/// Sinks never fail; a device that cannot keep up drops or blocks, it does
/// not report back. Colors are a hint and may be ignored.
pub trait ConsoleSink {
    fn write(&mut self, bytes: &[u8], foreground: Color, background: Color);

    /// Write with the default light-grey-on-black colors.
    fn write_plain(&mut self, bytes: &[u8]) {
        self.write(bytes, Color::LightGrey, Color::Black);
    }
}

impl<S: ConsoleSink + ?Sized> ConsoleSink for &mut S {
    fn write(&mut self, bytes: &[u8], foreground: Color, background: Color) {
        (**self).write(bytes, foreground, background);
    }
}
