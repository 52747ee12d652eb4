//! Crate-wide error type.
//!
//! Errors are surfaced at the operation boundary and structural operations
//! are atomic: an operation that fails leaves its receiver unchanged. There
//! is no local recovery; the caller decides what to do.

use core::fmt;

/// A specialized `Result` for fallible container and graph operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error returned by container and graph operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An argument did not satisfy an operation's precondition, e.g. a start
    /// vertex that is not part of the graph. The payload names the violated
    /// precondition.
    InvalidArgument(&'static str),
    /// The requested key or element is not present.
    NotFound,
    /// Extraction from an empty container.
    Empty,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(reason) => write!(f, "invalid argument: {reason}"),
            Self::NotFound => f.write_str("element not found"),
            Self::Empty => f.write_str("container is empty"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::InvalidArgument("start vertex is not in the graph").to_string(),
            "invalid argument: start vertex is not in the graph"
        );
        assert_eq!(Error::NotFound.to_string(), "element not found");
        assert_eq!(Error::Empty.to_string(), "container is empty");
    }
}
