//! Error types for termfolio.
//!
//! Command handlers never fail -- rejected input is reported as data through
//! [`crate::outcome::OutcomeKind::Error`]. These errors cover construction
//! and load paths only: config parsing and content loading.

use std::io;

/// Errors produced while building the terminal (config and content loading).
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    #[error("config error: {0}")]
    Config(String),

    #[error("content error: {0}")]
    Content(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TermError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let e = TermError::Config("unknown theme 'neon'".into());
        assert_eq!(format!("{e}"), "config error: unknown theme 'neon'");
    }

    #[test]
    fn content_error_display() {
        let e = TermError::Content("topic 'bio' is empty".into());
        assert_eq!(format!("{e}"), "content error: topic 'bio' is empty");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: TermError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let bad_toml = "this is [[[not valid toml";
        let toml_err = toml::from_str::<toml::Value>(bad_toml).unwrap_err();
        let e: TermError = toml_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("TOML parse error"));
    }

    #[test]
    fn result_alias_ok() {
        let r: Result<i32> = Ok(42);
        assert_eq!(r.unwrap(), 42);
    }
}
