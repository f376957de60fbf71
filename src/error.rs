//! Public error type for the numseq front ends.
//!
//! Library crates keep their own error enums ([`SequenceError`],
//! [`ScriptError`], [`SynonymError`]); this type gathers them at the API
//! boundary, together with the source text needed to render script errors.

use numseq_core::SequenceError;
use numseq_core::script::ScriptError;
use numseq_synonyms::SynonymError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A script or number list failed to parse.
    #[error("{error}")]
    Script {
        error: ScriptError,
        /// The text that was being parsed.
        text: String,
        filename: Option<String>,
    },

    /// A sequence operation failed.
    #[error(transparent)]
    Sequence(#[from] SequenceError),

    /// A synonym file could not be read, changed or written.
    #[error(transparent)]
    Synonym(#[from] SynonymError),

    /// Input could not be read (e.g. a missing script file).
    #[error("{0}")]
    Input(String),
}

impl Error {
    /// Wraps a parse error together with the text it refers to.
    pub fn script(error: ScriptError, text: impl Into<String>) -> Self {
        Error::Script {
            error,
            text: text.into(),
            filename: None,
        }
    }

    /// Set the filename for this error. Only script errors carry one.
    pub fn with_filename(self, filename: impl Into<String>) -> Self {
        match self {
            Error::Script { error, text, .. } => Error::Script {
                error,
                text,
                filename: Some(filename.into()),
            },
            other => other,
        }
    }

    /// Set the filename if provided, otherwise return self unchanged.
    pub fn with_filename_opt(self, filename: Option<&str>) -> Self {
        match filename {
            Some(f) => self.with_filename(f),
            None => self,
        }
    }

    pub fn filename(&self) -> Option<&str> {
        match self {
            Error::Script { filename, .. } => filename.as_deref(),
            _ => None,
        }
    }

    /// Stable error code, if this kind of error has one.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Error::Script { error, .. } => Some(error.code),
            Error::Sequence(error) => Some(error.code()),
            Error::Synonym(_) | Error::Input(_) => None,
        }
    }
}
