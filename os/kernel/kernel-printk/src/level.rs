use crate::DEFAULT_LEVEL;
use kernel_console::Color;

/// Severity of a kernel message, most severe first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(u8)]
pub enum LogLevel {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    #[default]
    Info = 6,
    Debug = 7,
}

impl LogLevel {
    /// Level for a numeric `<N>` prefix; anything above 7 is treated as INFO.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            0 => Self::Emergency,
            1 => Self::Alert,
            2 => Self::Critical,
            3 => Self::Error,
            4 => Self::Warning,
            5 => Self::Notice,
            7 => Self::Debug,
            _ => Self::Info,
        }
    }

    /// The bracketed tag, trailing space included, that starts each line.
    #[must_use]
    pub const fn tag(self) -> &'static [u8] {
        match self {
            Self::Emergency => b"[EMERG] ",
            Self::Alert => b"[ALERT] ",
            Self::Critical => b"[CRIT] ",
            Self::Error => b"[ERR] ",
            Self::Warning => b"[WARN] ",
            Self::Notice => b"[NOTICE] ",
            Self::Info => b"[INFO] ",
            Self::Debug => b"[DEBUG] ",
        }
    }

    /// Foreground color of the whole message; the background is always black.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Emergency | Self::Alert | Self::Critical | Self::Error => Color::LightRed,
            Self::Warning => Color::Yellow,
            Self::Notice => Color::LightGreen,
            Self::Info => Color::LightGrey,
            Self::Debug => Color::LightCyan,
        }
    }
}

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warning,
            log::Level::Info => Self::Info,
            log::Level::Debug | log::Level::Trace => Self::Debug,
        }
    }
}

/// Strip a leading `<N>` level marker.
///
/// The marker needs at least one digit and the closing `>`; otherwise the
/// text is returned untouched with the default level. Values too large for
/// `u32` saturate, which makes them INFO like any other out-of-range level.
#[must_use]
pub fn split_level(text: &[u8]) -> (LogLevel, &[u8]) {
    let Some(rest) = text.strip_prefix(b"<") else {
        return (DEFAULT_LEVEL, text);
    };
    let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    match rest[digits..].strip_prefix(b">") {
        Some(body) if digits > 0 => {
            let raw = rest[..digits].iter().fold(0u32, |acc, &d| {
                acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
            });
            (LogLevel::from_raw(raw), body)
        }
        _ => (DEFAULT_LEVEL, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_selects_the_level() {
        assert_eq!(split_level(b"<3>disk error"), (LogLevel::Error, &b"disk error"[..]));
        assert_eq!(split_level(b"<0>"), (LogLevel::Emergency, &b""[..]));
        assert_eq!(split_level(b"<07>x"), (LogLevel::Debug, &b"x"[..]));
    }

    #[test]
    fn malformed_prefix_is_left_alone() {
        for text in [&b"<3 disk"[..], b"<>x", b"<", b"<a>x", b"plain", b""] {
            assert_eq!(split_level(text), (LogLevel::Info, text));
        }
    }

    #[test]
    fn out_of_range_levels_collapse_to_info() {
        assert_eq!(split_level(b"<8>x"), (LogLevel::Info, &b"x"[..]));
        assert_eq!(
            split_level(b"<99999999999999999999>x"),
            (LogLevel::Info, &b"x"[..])
        );
    }

    #[test]
    fn tags_and_colors() {
        assert_eq!(LogLevel::Critical.tag(), b"[CRIT] ");
        assert_eq!(LogLevel::Critical.color(), Color::LightRed);
        assert_eq!(LogLevel::Warning.color(), Color::Yellow);
        assert_eq!(LogLevel::Notice.color(), Color::LightGreen);
        assert_eq!(LogLevel::Info.color(), Color::LightGrey);
        assert_eq!(LogLevel::Debug.color(), Color::LightCyan);
        assert_eq!(LogLevel::from_raw(42), LogLevel::Info);
    }

    #[test]
    fn log_crate_levels() {
        assert_eq!(LogLevel::from(log::Level::Error), LogLevel::Error);
        assert_eq!(LogLevel::from(log::Level::Warn), LogLevel::Warning);
        assert_eq!(LogLevel::from(log::Level::Trace), LogLevel::Debug);
    }
}
