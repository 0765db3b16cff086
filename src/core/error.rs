//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

/// Invalid chart construction parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("height must be a positive integer")]
    NonPositiveHeight,
    #[error("values must be non-empty")]
    EmptyValues,
    #[error("value at index {index} is not a finite number")]
    NonFiniteValue { index: usize },
}

/// Value ingest failure with the offending line.
#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct ParseValuesError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("I/O error: {0}")]
    Io(#[source] io::Error),
    #[error("invalid number '{text}'")]
    BadNumber { text: String },
    #[error("number '{text}' is not finite")]
    NonFinite { text: String },
    #[error("no values found")]
    NoValues,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex colour digit")]
    InvalidHexDigit,
    #[error("hex colour must be exactly 6 digits")]
    InvalidHexLength,
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseValuesError),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
