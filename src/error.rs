//! Application error types
//!
//! Markup problems are not errors at this level: a bad command line is
//! reported by the interpreter and skipped (see [`crate::markup::MarkupError`]).
//! [`Error`] covers what stops the program from starting or keeps running.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read deck {path}: {source}")]
    Deck {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Logging error: {message}")]
    Logging { message: String },
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Error::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn terminal(message: impl Into<String>) -> Self {
        Error::Terminal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::invalid("fps must be positive").to_string(),
            "Invalid configuration: fps must be positive"
        );
        let err = Error::Deck {
            path: PathBuf::from("talk.deck"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "Failed to read deck talk.deck: gone");
    }

    #[test]
    fn test_io_conversion() {
        fn open() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "boom"))?;
            Ok(())
        }
        assert!(matches!(open(), Err(Error::Io(_))));
    }
}
