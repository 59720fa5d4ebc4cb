//! Error types for mesh loading.

use std::fmt;

use thiserror::Error;

/// Result type for mesh loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Which vertex list a face index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexList {
    Vertex,
    Texture,
    Normal,
}

impl fmt::Display for IndexList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Vertex => "v",
            Self::Texture => "vt",
            Self::Normal => "vn",
        };
        f.write_str(name)
    }
}

/// What went wrong on a mesh line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("{0}: not enough fields")]
    NotEnoughFields(&'static str),

    #[error("{0}: too many fields")]
    TooManyFields(&'static str),

    #[error("{0}: wrong number of fields")]
    WrongFieldCount(&'static str),

    #[error("cannot parse float {0:?}")]
    BadFloat(String),

    /// A face corner component that is not a positive integer.
    #[error("bad face {list} index {token:?}")]
    BadIndex { list: IndexList, token: String },

    /// A face corner that is not `v`, `v/vt` or `v/vt/vn`.
    #[error("bad face indices {0:?}")]
    BadFaceCorner(String),

    #[error("{list} index {index} out of range (have {len})")]
    IndexOutOfRange {
        list: IndexList,
        index: usize,
        len: usize,
    },

    #[error("unrecognized element {0:?}")]
    UnrecognizedElement(String),
}

/// A malformed mesh line, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {line}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

/// Errors that can occur while loading a mesh.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The mesh text is malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The input could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
