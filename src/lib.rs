// Mimic Score - vocal mimicry scoring engine
// Feature extraction + derivative DTW alignment + weighted leaderboard ranking

// Module declarations
pub mod analysis;
pub mod api;
pub mod audio;
pub mod config;
pub mod error;

// Re-exports for convenience
pub use api::{compute_leaderboard, PlayerSubmission};
pub use audio::AudioSignal;
pub use config::ScoringConfig;
pub use error::ScoringError;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        // Verify all modules are accessible
        // This ensures the crate compiles with proper module hierarchy
    }
}
