use std::fmt;

/// The closed set of levels a logger may be set to.
///
/// The order only matters for iteration; validation and comparison carry no
/// severity semantics.
pub const LOG_LEVELS: [LogLevel; 7] = [
    LogLevel::Off,
    LogLevel::Trace,
    LogLevel::Debug,
    LogLevel::Info,
    LogLevel::Warn,
    LogLevel::Error,
    LogLevel::Fatal,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    /// Case-insensitive lookup against the closed level set.
    pub fn parse(value: &str) -> Option<Self> {
        LOG_LEVELS
            .iter()
            .copied()
            .find(|level| level.as_str().eq_ignore_ascii_case(value))
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }

    /// Directive form understood by `EnvFilter`. `Fatal` has no tracing
    /// counterpart and collapses to `error`.
    #[must_use]
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error | Self::Fatal => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `value` case-insensitively names one of the seven levels.
#[must_use]
pub fn is_valid_level(value: &str) -> bool {
    LogLevel::parse(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_accepts_canonical_levels() {
        for level in LOG_LEVELS {
            assert_eq!(LogLevel::parse(level.as_str()), Some(level));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(LogLevel::parse("info"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("Warn"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("fAtAl"), Some(LogLevel::Fatal));
        assert_eq!(LogLevel::parse("off"), Some(LogLevel::Off));
    }

    #[test]
    fn test_parse_rejects_non_levels() {
        assert_eq!(LogLevel::parse(""), None);
        assert_eq!(LogLevel::parse("bogus"), None);
        assert_eq!(LogLevel::parse("INFOO"), None);
        assert_eq!(LogLevel::parse(" INFO"), None);
    }

    #[test]
    fn test_fatal_and_error_share_a_directive() {
        assert_eq!(LogLevel::Fatal.as_directive(), "error");
        assert_eq!(LogLevel::Error.as_directive(), "error");
        assert_eq!(LogLevel::Off.as_directive(), "off");
    }

    fn scramble_case(word: &str, mask: &[bool]) -> String {
        word.chars()
            .zip(mask.iter().copied().chain(std::iter::repeat(false)))
            .map(|(c, upper)| {
                if upper {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect()
    }

    proptest! {
        #[test]
        fn validator_accepts_any_casing(
            idx in 0..LOG_LEVELS.len(),
            mask in prop::collection::vec(any::<bool>(), 0..8),
        ) {
            let level = LOG_LEVELS[idx];
            let scrambled = scramble_case(level.as_str(), &mask);
            prop_assert!(is_valid_level(&scrambled));
            prop_assert_eq!(LogLevel::parse(&scrambled), Some(level));
        }

        // No level name ends in 'x', so these can never match.
        #[test]
        fn validator_rejects_non_members(value in "[A-Za-z]{0,9}x") {
            prop_assert!(!is_valid_level(&value));
        }
    }
}
