//! Contains the Error and Result type used by the SNBT parser and the path
//! parser.
use std::fmt::Display;

pub use treenbt::error::Category;

/// Errors from parsing SNBT or path text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The text does not follow the grammar.
    Syntax {
        message: String,
        /// Number of characters consumed when the error was found.
        position: usize,
        /// The last few characters consumed, for locating the error.
        context: String,
    },

    /// A [`Root`][crate::Node::Root] node can only start a path, it cannot
    /// follow another node.
    RootAsSuccessor,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn category(&self) -> Category {
        match self {
            Error::Syntax { .. } => Category::Syntax,
            Error::RootAsSuccessor => Category::SchemaMismatch,
        }
    }

    /// The position in the input, for syntax errors.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Syntax { position, .. } => Some(*position),
            _ => None,
        }
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Syntax {
                message,
                position,
                context,
            } => write!(f, "{} at position {}: »{}«", message, position, context),
            Error::RootAsSuccessor => {
                f.write_str("cannot specify root compound path node as child")
            }
        }
    }
}
