use crate::{LogLevel, printk_args};
use kernel_sync::SyncOnceCell;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Bridges the `log` facade onto printk.
///
/// Records come out as `[TAG] target: message`, colored by level, through
/// the same scratch buffer and sink as `printk!`.
pub struct PrintkLogger {
    max_level: LevelFilter,
}

static LOGGER: SyncOnceCell<PrintkLogger> = SyncOnceCell::new();

impl PrintkLogger {
    #[must_use]
    pub const fn new(max_level: LevelFilter) -> Self {
        Self { max_level }
    }

    #[must_use]
    pub const fn max_level(&self) -> LevelFilter {
        self.max_level
    }

    /// Install as the global `log` logger. Call this once during early init.
    ///
    /// # Errors
    /// Fails if a logger (this one or any other) is already installed.
    pub fn init(self) -> Result<(), SetLoggerError> {
        let max_level = self.max_level;
        let logger: &'static Self = LOGGER.get_or_init(|| self);
        log::set_logger(logger)?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl Log for PrintkLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        printk_args(
            LogLevel::from(record.level()),
            format_args!("{}: {}\n", record.target(), record.args()),
        );
    }

    fn flush(&self) {
        // Output is written through synchronously.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn filters_by_max_level() {
        let logger = PrintkLogger::new(LevelFilter::Info);
        assert_eq!(logger.max_level(), LevelFilter::Info);

        let at = |level| Metadata::builder().level(level).target("t").build();
        assert!(logger.enabled(&at(Level::Error)));
        assert!(logger.enabled(&at(Level::Info)));
        assert!(!logger.enabled(&at(Level::Debug)));
    }
}
