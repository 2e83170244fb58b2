// Dashboard error types
//
// The particle animator cannot fail; these cover the chart model's
// contract and startup configuration.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DashboardError {
    /// A chart was asked to replace a series it does not have
    #[error("chart has {len} series, cannot replace series {index}")]
    SeriesOutOfRange { index: usize, len: usize },

    /// Replacement data does not match the chart's label count
    #[error("series {index} expects {expected} points, got {actual}")]
    SeriesLength {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// PULSEBOARD_SEED is set but is not a u64
    #[error("invalid seed {0:?}: expected an unsigned 64-bit integer")]
    InvalidSeed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DashboardError::SeriesOutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "chart has 2 series, cannot replace series 3");

        let err = DashboardError::SeriesLength {
            index: 0,
            expected: 7,
            actual: 6,
        };
        assert_eq!(err.to_string(), "series 0 expects 7 points, got 6");

        let err = DashboardError::InvalidSeed("abc".to_string());
        assert_eq!(
            err.to_string(),
            "invalid seed \"abc\": expected an unsigned 64-bit integer"
        );
    }
}
