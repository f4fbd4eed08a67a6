use std::fmt::Write as _;
use thiserror::Error;

/// Failure of a single handler while emitting one record.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Write failed: {0}")]
    WriteFailed(#[source] std::io::Error),

    #[error("Format failed: {0}")]
    FormatFailed(String),
}

/// Outcome of a `Logger::log` call in which at least one handler failed.
///
/// Indices are one-based positions in the logger's registration order: the
/// first handler pushed is #1. Handlers not listed either succeeded or
/// skipped the record.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("{} handler(s) failed: {}", .0.len(), describe(.0))]
    PartialFailure(Vec<(usize, HandlerError)>),
}

impl DispatchError {
    pub fn failures(&self) -> &[(usize, HandlerError)] {
        match self {
            DispatchError::PartialFailure(failures) => failures,
        }
    }

    pub fn failed_indices(&self) -> Vec<usize> {
        self.failures().iter().map(|(index, _)| *index).collect()
    }
}

fn describe(failures: &[(usize, HandlerError)]) -> String {
    let mut out = String::new();
    for (i, (index, error)) in failures.iter().enumerate() {
        if i > 0 {
            out.push_str("; ");
        }
        let _ = write!(out, "#{index}: {error}");
    }
    out
}
