use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Severity of a log record, also used as a handler's minimum threshold.
///
/// Variants are declared in ascending severity, so the derived `Ord` is the
/// filtering order. Numeric codes follow RFC 5424 as commonly mapped by
/// leveled loggers (DEBUG = 100 ... EMERGENCY = 600).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Level {
    Debug,
    Info,
    Notice,
    Warning,
    Error,
    Critical,
    Alert,
    Emergency,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid log level: '{input}' (expected one of debug, info, notice, warning, error, critical, alert, emergency)")]
pub struct LevelParseError {
    pub input: String,
}

impl Level {
    /// Every level, lowest severity first.
    pub const ALL: [Level; 8] = [
        Level::Debug,
        Level::Info,
        Level::Notice,
        Level::Warning,
        Level::Error,
        Level::Critical,
        Level::Alert,
        Level::Emergency,
    ];

    /// Whether a record at this level passes a handler whose minimum is `min`.
    pub fn meets_threshold(self, min: Level) -> bool {
        self >= min
    }

    /// Upper-case name used in the canonical line format.
    pub fn name(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Notice => "NOTICE",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
            Level::Alert => "ALERT",
            Level::Emergency => "EMERGENCY",
        }
    }

    pub fn code(self) -> u16 {
        match self {
            Level::Debug => 100,
            Level::Info => 200,
            Level::Notice => 250,
            Level::Warning => 300,
            Level::Error => 400,
            Level::Critical => 500,
            Level::Alert => 550,
            Level::Emergency => 600,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "notice" => Ok(Level::Notice),
            "warning" | "warn" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            "critical" => Ok(Level::Critical),
            "alert" => Ok(Level::Alert),
            "emergency" => Ok(Level::Emergency),
            _ => Err(LevelParseError {
                input: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Level {
    type Error = LevelParseError;

    fn try_from(value: String) -> Result<Self, LevelParseError> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_totally_ordered() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
        assert!(Level::Notice > Level::Info && Level::Notice < Level::Warning);
        assert!(Level::Emergency > Level::Alert);
    }

    #[test]
    fn test_all_is_ascending() {
        assert!(Level::ALL.windows(2).all(|w| w[0] < w[1]));
        assert!(Level::ALL.windows(2).all(|w| w[0].code() < w[1].code()));
    }

    #[test]
    fn test_meets_threshold_is_inclusive() {
        assert!(Level::Warning.meets_threshold(Level::Warning));
        assert!(Level::Error.meets_threshold(Level::Warning));
        assert!(!Level::Info.meets_threshold(Level::Warning));
    }

    #[test]
    fn test_names_are_upper_case() {
        for level in Level::ALL {
            assert_eq!(level.name(), level.name().to_uppercase());
            assert_eq!(level.to_string(), level.name());
        }
    }

    #[test]
    fn test_parse_case_insensitive_with_alias() {
        assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!(" critical ".parse::<Level>().unwrap(), Level::Critical);

        let err = "verbose".parse::<Level>().unwrap_err();
        assert_eq!(err.input, "verbose");
        assert!(err.to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_serde_uses_level_names() {
        let json = serde_json::to_string(&Level::Warning).unwrap();
        assert_eq!(json, "\"WARNING\"");
        let level: Level = serde_json::from_str("\"CRITICAL\"").unwrap();
        assert_eq!(level, Level::Critical);
        let level: Level = serde_json::from_str("\"warn\"").unwrap();
        assert_eq!(level, Level::Warning);
        assert!(serde_json::from_str::<Level>("\"loud\"").is_err());
    }

    #[test]
    fn test_try_from_string() {
        assert_eq!(Level::try_from("notice".to_string()).unwrap(), Level::Notice);
        let err = Level::try_from("loud".to_string()).unwrap_err();
        assert_eq!(err.input, "loud");
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn threshold_agrees_with_ordering(a in 0usize..8, b in 0usize..8) {
                let record = Level::ALL[a];
                let min = Level::ALL[b];
                prop_assert_eq!(record.meets_threshold(min), a >= b);
            }

            #[test]
            fn name_parses_back(i in 0usize..8) {
                let level = Level::ALL[i];
                prop_assert_eq!(level.name().parse::<Level>().unwrap(), level);
            }
        }
    }
}
