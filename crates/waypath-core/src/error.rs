//! Error types and exit codes for waypath
//!
//! Exit codes follow the CLI convention:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown node, malformed edge list, bad config)

use thiserror::Error;

/// Exit codes for the waypath CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

#[derive(Debug, Error)]
pub enum Error {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("node not found: {name}")]
    UnknownNode { name: String },

    #[error("node already exists: {name}")]
    AlreadyExists { name: String },

    #[error("invalid edge weight: {value} (weights must be non-negative and finite)")]
    InvalidWeight { value: f64 },

    #[error("invalid length bound: {value} (must be a positive integer)")]
    InvalidBound { value: i64 },

    #[error("malformed edge list at line {line}: {reason}")]
    ParseEdge { line: usize, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Map this error to its CLI exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::UsageError(_) => ExitCode::Usage,
            Error::UnknownNode { .. }
            | Error::AlreadyExists { .. }
            | Error::InvalidWeight { .. }
            | Error::InvalidBound { .. }
            | Error::ParseEdge { .. } => ExitCode::Data,
            Error::Io(_) | Error::Toml(_) | Error::Json(_) => ExitCode::Failure,
        }
    }

    /// Render as a structured JSON error envelope for `--format json`.
    pub fn to_json(&self) -> String {
        let type_name = match self {
            Error::UsageError(_) => "usage_error",
            Error::UnknownNode { .. } => "unknown_node",
            Error::AlreadyExists { .. } => "already_exists",
            Error::InvalidWeight { .. } => "invalid_weight",
            Error::InvalidBound { .. } => "invalid_bound",
            Error::ParseEdge { .. } => "parse_edge",
            Error::Io(_) => "io_error",
            Error::Toml(_) => "toml_error",
            Error::Json(_) => "json_error",
        };
        serde_json::json!({
            "error": true,
            "type": type_name,
            "message": self.to_string(),
        })
        .to_string()
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_map_by_class() {
        assert_eq!(
            Error::UsageError("bad flag".into()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            Error::UnknownNode { name: "a".into() }.exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            Error::Io(std::io::Error::other("boom")).exit_code(),
            ExitCode::Failure
        );
        assert_eq!(i32::from(ExitCode::Data), 3);
    }

    #[test]
    fn json_envelope_carries_type_and_message() {
        let err = Error::UnknownNode {
            name: "missing".into(),
        };
        let json = err.to_json();
        assert!(json.contains("\"type\":\"unknown_node\""));
        assert!(json.contains("missing"));
    }
}
