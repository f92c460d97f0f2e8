//! Error types for conversion.

use thiserror::Error;

/// Errors that can abort a single conversion call.
///
/// All of them indicate either unusable input (too deeply nested markup) or a
/// defect in a serializer set; none are retryable. Paths are rendered from the
/// root, e.g. `body > div > #block`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("markup nested {depth} levels deep exceeds the limit of {limit}")]
    NestingTooDeep { depth: usize, limit: usize },

    #[error("inline node survived top-level wrapping at index {index} ({path})")]
    UnresolvedTopLevelInline { index: usize, path: String },

    #[error("serializer `{serializer}` needs a source element, but {path} is synthetic")]
    MissingElement {
        serializer: &'static str,
        path: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
