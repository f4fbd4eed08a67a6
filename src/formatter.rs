//! Record formatters.
//!
//! A formatter turns an admitted record into the exact bytes a handler
//! writes. `LineFormatter` produces the canonical text line; `JsonFormatter`
//! produces one JSON object per line. Both render timestamps the same way.

use crate::domain::{HandlerError, LogRecord};
use chrono::SecondsFormat;
use serde::Serialize;

pub trait Formatter: Send + Sync {
    fn format(&self, record: &LogRecord) -> Result<String, HandlerError>;
}

/// `{timestamp} {channel}.{LEVEL}: {message}\n`
///
/// The timestamp is RFC 3339 with microseconds and a numeric offset, e.g.
/// `2024-01-02T03:04:05.000006+00:00`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormatter;

impl Formatter for LineFormatter {
    fn format(&self, record: &LogRecord) -> Result<String, HandlerError> {
        Ok(format!(
            "{} {}.{}: {}\n",
            format_timestamp(record),
            record.channel(),
            record.level().name(),
            record.message()
        ))
    }
}

fn format_timestamp(record: &LogRecord) -> String {
    record
        .timestamp()
        .to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// `{"timestamp":…,"channel":…,"level":"INFO","level_code":200,"message":…}\n`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonLine<'a> {
    timestamp: String,
    channel: &'a str,
    level: &'static str,
    level_code: u16,
    message: &'a str,
}

impl Formatter for JsonFormatter {
    fn format(&self, record: &LogRecord) -> Result<String, HandlerError> {
        let line = JsonLine {
            timestamp: format_timestamp(record),
            channel: record.channel(),
            level: record.level().name(),
            level_code: record.level().code(),
            message: record.message(),
        };
        let mut line =
            serde_json::to_string(&line).map_err(|e| HandlerError::FormatFailed(e.to_string()))?;
        line.push('\n');
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Level;
    use chrono::{TimeZone, Utc};

    fn sample() -> LogRecord {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        LogRecord::with_timestamp("my-app", Level::Warning, "disk almost full", ts)
    }

    #[test]
    fn test_line_format_is_canonical() {
        let line = LineFormatter.format(&sample()).unwrap();
        assert_eq!(
            line,
            "2024-01-02T03:04:05.000000+00:00 my-app.WARNING: disk almost full\n"
        );
    }

    #[test]
    fn test_json_format() {
        let line = JsonFormatter.format(&sample()).unwrap();
        assert!(line.ends_with('\n'));

        let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(value["channel"], "my-app");
        assert_eq!(value["level"], "WARNING");
        assert_eq!(value["message"], "disk almost full");
        assert_eq!(value["level_code"], 300);
        assert_eq!(value["timestamp"], "2024-01-02T03:04:05.000000+00:00");
    }

    #[test]
    fn test_line_and_json_agree_on_timestamp() {
        let record = sample();
        let line = LineFormatter.format(&record).unwrap();
        let json = JsonFormatter.format(&record).unwrap();

        let value: serde_json::Value = serde_json::from_str(json.trim_end()).unwrap();
        let timestamp = value["timestamp"].as_str().unwrap();
        assert!(line.starts_with(&format!("{timestamp} ")));
    }
}
