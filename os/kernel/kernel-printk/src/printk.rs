use crate::{LogLevel, SCRATCH_CAPACITY, split_level};
use core::fmt::{self, Write};
use kernel_console::{Color, ConsoleSink};
use kernel_fmt::{Arg, BoundedWriter, MISMATCH, render_into};

/// A leveled logger with its own scratch buffer.
///
/// Every message is rendered as `tag + body` into the scratch buffer and then
/// handed to the sink in one piece, in the level's color on black. Output
/// longer than the buffer is cut short.
pub struct Printk<const N: usize = SCRATCH_CAPACITY> {
    scratch: [u8; N],
}

impl<const N: usize> Default for Printk<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Printk<N> {
    #[must_use]
    pub const fn new() -> Self {
        Self { scratch: [0; N] }
    }

    /// Log `format` with `args`; a leading `<N>` picks the level.
    ///
    /// Returns the number of bytes handed to the sink, tag included.
    pub fn log(&mut self, sink: &mut dyn ConsoleSink, format: &[u8], args: &[Arg<'_>]) -> usize {
        let (level, body) = split_level(format);
        self.emit(sink, level, |out| render_into(out, body, args))
    }

    /// Log Rust-formatted text at `level`.
    ///
    /// If an argument's formatting fails, what it produced so far is kept and
    /// the line ends in `(?)`.
    pub fn log_args(
        &mut self,
        sink: &mut dyn ConsoleSink,
        level: LogLevel,
        args: fmt::Arguments<'_>,
    ) -> usize {
        self.emit(sink, level, |out| {
            // `BoundedWriter` itself never fails, so an error came from an argument.
            if out.write_fmt(args).is_err() {
                out.push_bytes(MISMATCH);
            }
        })
    }

    fn emit(
        &mut self,
        sink: &mut dyn ConsoleSink,
        level: LogLevel,
        body: impl FnOnce(&mut BoundedWriter<'_>),
    ) -> usize {
        let mut out = BoundedWriter::new(&mut self.scratch);
        out.push_bytes(level.tag());
        body(&mut out);
        let len = out.finish();
        sink.write(&self.scratch[..len], level.color(), Color::Black);
        len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Capture {
        runs: Vec<(Vec<u8>, Color, Color)>,
    }

    impl ConsoleSink for Capture {
        fn write(&mut self, bytes: &[u8], foreground: Color, background: Color) {
            self.runs.push((bytes.to_vec(), foreground, background));
        }
    }

    #[test]
    fn embedded_level_picks_tag_and_color() {
        let mut printk = Printk::<64>::new();
        let mut sink = Capture::default();
        let n = printk.log(&mut sink, b"<3>disk error", &[]);
        assert_eq!(n, 16);
        assert_eq!(
            sink.runs,
            [(b"[ERR] disk error".to_vec(), Color::LightRed, Color::Black)]
        );
    }

    #[test]
    fn default_level_is_info() {
        let mut printk = Printk::<64>::new();
        let mut sink = Capture::default();
        printk.log(&mut sink, b"cpu %u online", &[Arg::from(0u32)]);
        assert_eq!(sink.runs[0].0, b"[INFO] cpu 0 online");
        assert_eq!(sink.runs[0].1, Color::LightGrey);
    }

    #[test]
    fn unterminated_prefix_is_printed() {
        let mut printk = Printk::<64>::new();
        let mut sink = Capture::default();
        printk.log(&mut sink, b"<4 oops", &[]);
        assert_eq!(sink.runs[0].0, b"[INFO] <4 oops");
    }

    #[test]
    fn long_messages_are_truncated() {
        let mut printk = Printk::<16>::new();
        let mut sink = Capture::default();
        let n = printk.log(&mut sink, b"<7>%s", &["0123456789abcdef".into()]);
        assert_eq!(n, 15);
        assert_eq!(sink.runs[0].0, b"[DEBUG] 0123456");
        assert_eq!(sink.runs[0].1, Color::LightCyan);
    }

    #[test]
    fn failing_display_marks_the_line() {
        struct Half;
        impl fmt::Display for Half {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("par")?;
                Err(fmt::Error)
            }
        }

        let mut printk = Printk::<64>::new();
        let mut sink = Capture::default();
        let n = printk.log_args(&mut sink, LogLevel::Info, format_args!("{Half}"));
        assert_eq!(sink.runs[0].0, b"[INFO] par(?)");
        assert_eq!(n, 13);
    }

    #[test]
    fn rust_formatting() {
        let mut printk = Printk::<64>::new();
        let mut sink = Capture::default();
        let n = printk.log_args(&mut sink, LogLevel::Warning, format_args!("{} left", 3));
        assert_eq!(n, 13);
        assert_eq!(
            sink.runs,
            [(b"[WARN] 3 left".to_vec(), Color::Yellow, Color::Black)]
        );
    }
}
