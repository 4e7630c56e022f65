use std::fmt;

use gridstar_core::Cell;

/// Which endpoint of a search a fault refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

/// Why an endpoint was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EndpointFault {
    OutOfBounds,
    Blocked,
}

impl fmt::Display for EndpointFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointFault::OutOfBounds => write!(f, "is out of bounds"),
            EndpointFault::Blocked => write!(f, "is blocked"),
        }
    }
}

/// Errors returned by [`SearchEngine`](crate::SearchEngine).
///
/// An unreachable goal is not an error; it is a [`SearchResult`](crate::SearchResult)
/// without a path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// Start or goal is outside the grid or on a blocked cell.
    InvalidEndpoint {
        role: Endpoint,
        cell: Cell,
        reason: EndpointFault,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoint { role, cell, reason } => {
                write!(f, "invalid endpoint: {role} {cell} {reason}")
            }
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = SearchError::InvalidEndpoint {
            role: Endpoint::Goal,
            cell: Cell::new(3, -1),
            reason: EndpointFault::OutOfBounds,
        };
        assert_eq!(e.to_string(), "invalid endpoint: goal (3, -1) is out of bounds");
    }
}
