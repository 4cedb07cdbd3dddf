//! Errors raised while defining or composing styles.
//!
//! All of these are programmer errors: a mis-composed style is a defect in
//! the calling code, so they are surfaced immediately and never retried.

use thiserror::Error;

/// Error returned by registry, parameter and style-sheet operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    /// A modifier name was referenced that was never registered
    #[error("unknown modifier '{name}'")]
    UnknownModifier { name: String },

    /// A modifier name was registered twice
    #[error("modifier '{name}' is already registered")]
    DuplicateName { name: String },

    /// A modifier parameter was missing or had the wrong type
    #[error("modifier '{modifier}' expects parameter '{param}' to be {expected}")]
    InvalidParam {
        modifier: String,
        param: String,
        expected: &'static str,
    },

    /// A style sheet could not be parsed or holds an invalid value
    #[error("invalid style sheet: {0}")]
    Config(String),

    #[error("a global modifier registry is already installed")]
    AlreadyInstalled,

    #[error("no global modifier registry has been installed")]
    RegistryNotInstalled,
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, StyleError>;
