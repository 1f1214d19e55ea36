use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Whether the error was raised while scanning, as opposed to loading.
    pub fn is_lexical(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::InvalidCharacter { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
            ErrorImpl::FileNotFound { .. } => "FileNotFound",
            ErrorImpl::EmptyFile { .. } => "EmptyFile",
            ErrorImpl::ReadFailed { .. } => "ReadFailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { character: '.' } => ErrorTip::Suggestion(String::from(
                "`.` is not part of the language, fractional numbers are not supported",
            )),
            ErrorImpl::InvalidCharacter { character } => ErrorTip::Suggestion(format!(
                "Character `{}` is not a letter, digit, operator, delimiter or quote",
                character.escape_debug()
            )),
            ErrorImpl::FileNotFound { path } => {
                ErrorTip::Suggestion(format!("No source file at `{}`", path))
            }
            ErrorImpl::EmptyFile { .. } => {
                ErrorTip::Suggestion(String::from("The file contains only whitespace"))
            }
            ErrorImpl::ReadFailed { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid character {character:?}")]
    InvalidCharacter { character: char },
    #[error("file {path:?} not found")]
    FileNotFound { path: String },
    #[error("file {path:?} is empty")]
    EmptyFile { path: String },
    #[error("failed to read {path:?}: {reason}")]
    ReadFailed { path: String, reason: String },
}
