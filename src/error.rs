//! Error handling types and utilities.

use crate::model::{Id, ItemKind};
use std::fmt;
use std::path::PathBuf;

/// A specialized Result type for the command-line host.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods.
pub type Result<T> = anyhow::Result<T>;

/// Everything that can go wrong while turning a JSON document into a [`Crate`](crate::Crate).
///
/// `path` fields are JSON locations such as `$.index.0:3.inner.fields`.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("input is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("{path}: missing required field `{field}`")]
    MissingField { path: String, field: &'static str },

    #[error("{path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{path}: unknown {union} variant `{tag}`")]
    UnknownVariant {
        path: String,
        union: &'static str,
        tag: String,
    },

    #[error(
        "the document uses format version {found}, but only version {expected} is supported"
    )]
    UnsupportedVersion {
        found: serde_json::Number,
        expected: u32,
    },

    #[error("item `{referrer}` refers to `{id}`, which is in neither `index` nor `paths`")]
    DanglingReference { id: Id, referrer: Id },

    #[error("invalid crate root `{root}`: {reason}")]
    InvalidRoot { root: Id, reason: RootProblem },

    #[error("index entry `{key}` describes an item with id `{id}`")]
    KeyMismatch { key: Id, id: Id },
}

impl DecodeError {
    /// Whether this error always aborts a decode, regardless of strictness.
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Malformed(_) | Self::UnsupportedVersion { .. } | Self::InvalidRoot { .. }
        )
    }
}

/// Why the `root` id does not designate a usable top-level module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootProblem {
    /// The id is not a key of `index` (possibly because its item failed to decode).
    NotInIndex,
    /// The id names an item that is not a module.
    NotAModule(ItemKind),
}

impl fmt::Display for RootProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInIndex => f.write_str("no such item in the index"),
            Self::NotAModule(kind) => write!(f, "expected a Module, found a {}", kind),
        }
    }
}

/// Error returned when reading a documentation file from disk fails.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Documentation file not found at the expected path.
    #[error("documentation not found at {}", path.display())]
    NotFound { path: PathBuf },
    /// The file exceeds the configured input limit.
    #[error("{} is {size} bytes, over the {limit} byte limit", path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
