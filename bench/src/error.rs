use std::fmt;

use gridstar_gen::GenError;
use gridstar_paths::SearchError;

/// Failures of a benchmark session.
#[derive(Debug, Clone, PartialEq)]
pub enum BenchError {
    Generate(GenError),
    Search(SearchError),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generate(e) => write!(f, "scenario generation failed: {e}"),
            Self::Search(e) => write!(f, "search failed: {e}"),
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Generate(e) => Some(e),
            Self::Search(e) => Some(e),
        }
    }
}

impl From<GenError> for BenchError {
    fn from(e: GenError) -> Self {
        Self::Generate(e)
    }
}

impl From<SearchError> for BenchError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}
