// Error types for the mimicry scoring engine
//
// This module defines the scoring error taxonomy. Every failure is a local,
// deterministic computation failure over a single player's data; there is no
// transient I/O here and therefore nothing to retry. Callers isolate failures
// per player rather than aborting the whole leaderboard.

use crate::analysis::features::FeatureKind;
use log::warn;
use std::fmt;

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types, enabling consistent handling by callers that
/// report failures numerically (e.g., a UI collaborator).
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}

/// Log a scoring error with structured context
///
/// Logs with the error code, the component, and the context in which the
/// failure occurred (typically the player name being scored).
pub fn log_scoring_error(err: &ScoringError, context: &str) {
    warn!(
        "Scoring error in {}: code={}, component=ScoringPipeline, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Scoring pipeline errors
///
/// These cover preprocessing, feature extraction, alignment, and score
/// normalization. All variants are deterministic outcomes of the input audio.
///
/// Error code range: 1001-1004
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringError {
    /// Silence trimming removed the entire signal (silence-only input)
    EmptySignal,

    /// Trimmed signal is too short for a single analysis frame
    InsufficientSamples { required: usize, actual: usize },

    /// A zero-length feature track reached the aligner
    EmptyTrack { kind: FeatureKind },

    /// Cost matrix maximum is zero (both derivative tracks are constant),
    /// so the similarity denominator is undefined
    DegenerateAlignment { kind: FeatureKind },
}

impl ErrorCode for ScoringError {
    fn code(&self) -> i32 {
        match self {
            ScoringError::EmptySignal => 1001,
            ScoringError::InsufficientSamples { .. } => 1002,
            ScoringError::EmptyTrack { .. } => 1003,
            ScoringError::DegenerateAlignment { .. } => 1004,
        }
    }

    fn message(&self) -> String {
        match self {
            ScoringError::EmptySignal => {
                "Signal is empty after silence trimming (silence-only input)".to_string()
            }
            ScoringError::InsufficientSamples { required, actual } => {
                format!(
                    "Insufficient samples for one analysis frame: need {}, got {}",
                    required, actual
                )
            }
            ScoringError::EmptyTrack { kind } => {
                format!("Feature track '{}' is empty", kind.name())
            }
            ScoringError::DegenerateAlignment { kind } => {
                format!(
                    "Degenerate alignment for '{}': both derivative tracks are constant",
                    kind.name()
                )
            }
        }
    }
}

impl fmt::Display for ScoringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScoringError (code {}): {}", self.code(), self.message())
    }
}

impl std::error::Error for ScoringError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_error_codes() {
        assert_eq!(ScoringError::EmptySignal.code(), 1001);
        assert_eq!(
            ScoringError::InsufficientSamples {
                required: 2048,
                actual: 100
            }
            .code(),
            1002
        );
        assert_eq!(
            ScoringError::EmptyTrack {
                kind: FeatureKind::ZeroCrossingRate
            }
            .code(),
            1003
        );
        assert_eq!(
            ScoringError::DegenerateAlignment {
                kind: FeatureKind::HarmonicProfile
            }
            .code(),
            1004
        );
    }

    #[test]
    fn test_scoring_error_messages() {
        let err = ScoringError::InsufficientSamples {
            required: 2048,
            actual: 100,
        };
        assert!(err.message().contains("need 2048"));
        assert!(err.message().contains("got 100"));

        let err = ScoringError::EmptyTrack {
            kind: FeatureKind::HarmonicProfile,
        };
        assert!(err.message().contains("harmonic_profile"));

        let err = ScoringError::DegenerateAlignment {
            kind: FeatureKind::ZeroCrossingRate,
        };
        assert!(err.message().contains("zero_crossing_rate"));
    }

    #[test]
    fn test_error_propagation() {
        fn may_fail() -> Result<(), ScoringError> {
            Err(ScoringError::EmptySignal)
        }

        fn caller() -> Result<(), ScoringError> {
            may_fail()?;
            Ok(())
        }

        assert!(caller().is_err());
    }
}
