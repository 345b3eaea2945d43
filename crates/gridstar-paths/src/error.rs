//! Search outcomes other than a found path.

use thiserror::Error;

/// Why [`search`](crate::search) did not return a path.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchFailure {
    /// Source or destination lies outside the grid.
    #[error("source or destination is invalid")]
    InvalidCoordinate,

    /// Source or destination cell is not passable.
    #[error("source or the destination is blocked")]
    BlockedEndpoint,

    /// Source and destination are the same cell; no path is computed.
    #[error("we are already at the destination")]
    AlreadyAtDestination,

    /// The frontier ran dry without reaching the destination.
    #[error("failed to find the destination cell")]
    NoPathFound,
}

impl SearchFailure {
    /// Whether the search ran and the destination is simply unreachable,
    /// as opposed to the inputs being rejected up front.
    #[inline]
    pub fn is_no_path(self) -> bool {
        self == SearchFailure::NoPathFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            SearchFailure::InvalidCoordinate.to_string(),
            "source or destination is invalid"
        );
        assert_eq!(
            SearchFailure::NoPathFound.to_string(),
            "failed to find the destination cell"
        );
    }

    #[test]
    fn only_exhaustion_is_no_path() {
        assert!(SearchFailure::NoPathFound.is_no_path());
        assert!(!SearchFailure::BlockedEndpoint.is_no_path());
        assert!(!SearchFailure::AlreadyAtDestination.is_no_path());
    }
}
