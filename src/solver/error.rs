//! Search failures

use crate::dictionary::DictionaryError;
use std::fmt;
use std::time::Duration;

/// Error type for a search that could not run to completion
///
/// A search that simply finds nothing is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The dictionary failed to answer a lookup
    Dictionary(DictionaryError),
    /// The configured time limit ran out
    DeadlineExceeded { elapsed: Duration },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dictionary(err) => write!(f, "Search aborted: {err}"),
            Self::DeadlineExceeded { elapsed } => {
                write!(f, "Search aborted after {:.1}ms", elapsed.as_secs_f64() * 1000.0)
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Dictionary(err) => Some(err),
            Self::DeadlineExceeded { .. } => None,
        }
    }
}

impl From<DictionaryError> for SearchError {
    fn from(err: DictionaryError) -> Self {
        Self::Dictionary(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn dictionary_error_is_source() {
        let err = SearchError::from(DictionaryError::Unavailable("down".to_string()));
        assert_eq!(err.to_string(), "Search aborted: Dictionary unavailable: down");
        assert!(err.source().is_some());
    }

    #[test]
    fn deadline_message() {
        let err = SearchError::DeadlineExceeded {
            elapsed: Duration::from_millis(12),
        };
        assert_eq!(err.to_string(), "Search aborted after 12.0ms");
        assert!(err.source().is_none());
    }
}
