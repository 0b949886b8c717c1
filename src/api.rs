// Public API for the mimicry scoring engine
//
// The collaborator (a UI or CLI) supplies decoded audio and display names
// and receives a ranked leaderboard. One player's failure never aborts the
// others: failed players are recorded in `Leaderboard::skipped` with their
// typed error so the collaborator can render a visible marker.

use crate::analysis::ranking::{self, Leaderboard, SkippedPlayer};
use crate::analysis::ScoringPipeline;
use crate::audio::AudioSignal;
use crate::config::ScoringConfig;
use crate::error::{log_scoring_error, ScoringError};
use log::info;

/// One player's recording and display name
#[derive(Debug, Clone)]
pub struct PlayerSubmission {
    pub name: String,
    pub audio: AudioSignal,
}

impl PlayerSubmission {
    pub fn new(name: impl Into<String>, audio: AudioSignal) -> Self {
        Self {
            name: name.into(),
            audio,
        }
    }
}

/// Score every player against the theme and rank them
///
/// The theme's features are extracted once and reused for every player.
/// A failure to extract the theme fails the whole call (nothing can be
/// scored without the reference); per-player failures are logged, recorded
/// in `skipped`, and scoring continues with the remaining players.
///
/// # Errors
/// Only theme-side failures: `EmptySignal` or `InsufficientSamples` for the
/// theme audio itself.
pub fn compute_leaderboard(
    config: &ScoringConfig,
    theme: &AudioSignal,
    players: &[PlayerSubmission],
) -> Result<Leaderboard, ScoringError> {
    let pipeline = ScoringPipeline::new(config);
    let theme_features = pipeline.extract(theme)?;

    let mut results = Vec::with_capacity(players.len());
    let mut skipped = Vec::new();
    for player in players {
        match pipeline.score_player(&player.name, &player.audio, &theme_features) {
            Ok(result) => {
                info!(
                    "Scored player '{}': total={:.4}",
                    result.name, result.total
                );
                results.push(result);
            }
            Err(err) => {
                log_scoring_error(&err, &player.name);
                skipped.push(SkippedPlayer {
                    name: player.name.clone(),
                    error: err,
                });
            }
        }
    }

    Ok(Leaderboard {
        entries: ranking::rank(results),
        skipped,
    })
}
