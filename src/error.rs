//! Build- and parse-phase errors.

use thiserror::Error;

/// Errors raised while registering commands and options.
/// These are independent of any later parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("invalid command or option name: {0:?}")]
    InvalidName(String),

    #[error("duplicate name among siblings: {0:?}")]
    DuplicateName(String),
}

/// Result type for builder operations.
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors raised while matching a token sequence against a frozen [`Cli`].
///
/// Each `parse` call either fully succeeds or fails with exactly one of
/// these; there is no partial-failure state to recover.
///
/// [`Cli`]: crate::Cli
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("missing value for option: --{0}")]
    MissingOptionValue(String),

    #[error("option --{0} does not take a value")]
    UnexpectedOptionValue(String),

    #[error("missing required options: {}", .0.join(", "))]
    MissingRequiredOption(Vec<String>),
}
