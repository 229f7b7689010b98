//! Error types for the approximate matcher

use serde::Serialize;
use thiserror::Error;

/// Precondition violations reported by the matcher.
///
/// A search that finds nothing is not an error; absence comes back as
/// `Ok(None)`. These variants cover inputs the scan cannot run on at all,
/// and stay distinguishable from absence on the caller's side.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum MatchError {
    #[error("Pattern too long: {length} characters, limit is {limit}")]
    PatternTooLong { length: usize, limit: usize },
    #[error("Fuzziness ratio out of range: {0} (expected 0.0..=1.0)")]
    RatioOutOfRange(f64),
}

impl MatchError {
    /// Get the error code for machine-readable output
    pub fn error_code(&self) -> &'static str {
        match self {
            MatchError::PatternTooLong { .. } => "pattern_too_long",
            MatchError::RatioOutOfRange(_) => "ratio_out_of_range",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_error_display() {
        let error = MatchError::PatternTooLong {
            length: 40,
            limit: 31,
        };
        assert_eq!(
            error.to_string(),
            "Pattern too long: 40 characters, limit is 31"
        );

        let error = MatchError::RatioOutOfRange(1.5);
        assert_eq!(
            error.to_string(),
            "Fuzziness ratio out of range: 1.5 (expected 0.0..=1.0)"
        );
    }

    #[test]
    fn test_error_codes() {
        let error = MatchError::PatternTooLong {
            length: 40,
            limit: 31,
        };
        assert_eq!(error.error_code(), "pattern_too_long");

        let error = MatchError::RatioOutOfRange(-0.2);
        assert_eq!(error.error_code(), "ratio_out_of_range");
    }

    #[test]
    fn test_match_error_serializes() {
        let error = MatchError::PatternTooLong {
            length: 32,
            limit: 31,
        };
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("PatternTooLong"));
        assert!(json.contains("32"));
    }
}
