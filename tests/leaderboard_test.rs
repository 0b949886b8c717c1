//! Integration tests for the end-to-end scoring pipeline
//!
//! These exercise the public API over synthesized audio:
//! - perfect mimicry ranks first with total 1.0
//! - dissimilar performances score strictly lower
//! - per-player failures land in `skipped` without aborting the run
//! - theme-side failures fail the whole call

use mimic_score::analysis::features::FeatureKind;
use mimic_score::{compute_leaderboard, AudioSignal, PlayerSubmission, ScoringConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLE_RATE: u32 = 22050;

fn sine(frequency: f32, duration_samples: usize) -> AudioSignal {
    let samples = (0..duration_samples)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            (2.0 * std::f32::consts::PI * frequency * t).sin()
        })
        .collect();
    AudioSignal::new(samples, SAMPLE_RATE)
}

/// Seeded noise so runs are reproducible
fn noise(duration_samples: usize) -> AudioSignal {
    let mut rng = StdRng::seed_from_u64(42);
    let samples = (0..duration_samples).map(|_| rng.gen_range(-1.0..1.0)).collect();
    AudioSignal::new(samples, SAMPLE_RATE)
}

fn silence(duration_samples: usize) -> AudioSignal {
    AudioSignal::new(vec![0.0; duration_samples], SAMPLE_RATE)
}

#[test]
fn test_perfect_mimic_ranks_first_with_total_one() {
    let theme = sine(440.0, 22050);
    let players = vec![
        PlayerSubmission::new("noisy", noise(22050)),
        PlayerSubmission::new("perfect", theme.clone()),
    ];

    let leaderboard = compute_leaderboard(&ScoringConfig::default(), &theme, &players).unwrap();

    assert_eq!(leaderboard.entries.len(), 2);
    assert!(leaderboard.skipped.is_empty());

    let top = &leaderboard.entries[0];
    assert_eq!(top.name, "perfect");
    assert_eq!(top.total, 1.0);
    for kind in FeatureKind::ALL {
        assert_eq!(top.similarities[&kind], 1.0);
    }

    let runner_up = &leaderboard.entries[1];
    assert!(
        runner_up.total < top.total,
        "Noise should score below a perfect mimic: {} vs {}",
        runner_up.total,
        top.total
    );
}

#[test]
fn test_similarities_bounded_above_by_one() {
    let theme = sine(440.0, 22050);
    let players = vec![
        PlayerSubmission::new("octave", sine(880.0, 22050)),
        PlayerSubmission::new("fifth", sine(660.0, 16384)),
        PlayerSubmission::new("noisy", noise(22050)),
    ];

    let leaderboard = compute_leaderboard(&ScoringConfig::default(), &theme, &players).unwrap();

    for entry in &leaderboard.entries {
        for kind in FeatureKind::ALL {
            let score = entry.similarities[&kind];
            assert!(
                score <= 1.0 && score.is_finite(),
                "Player '{}' '{}' similarity out of range: {}",
                entry.name,
                kind,
                score
            );
        }
        assert!(entry.total <= 1.0 && entry.total.is_finite());
    }
}

#[test]
fn test_silent_player_is_skipped_not_fatal() {
    let theme = sine(440.0, 22050);
    let players = vec![
        PlayerSubmission::new("mute", silence(22050)),
        PlayerSubmission::new("present", sine(550.0, 22050)),
    ];

    let leaderboard = compute_leaderboard(&ScoringConfig::default(), &theme, &players).unwrap();

    assert_eq!(leaderboard.entries.len(), 1);
    assert_eq!(leaderboard.entries[0].name, "present");

    assert_eq!(leaderboard.skipped.len(), 1);
    assert_eq!(leaderboard.skipped[0].name, "mute");
    assert_eq!(
        leaderboard.skipped[0].error,
        mimic_score::ScoringError::EmptySignal
    );
}

#[test]
fn test_too_short_player_is_skipped() {
    let theme = sine(440.0, 22050);
    let players = vec![PlayerSubmission::new("clipped", sine(440.0, 512))];

    let leaderboard = compute_leaderboard(&ScoringConfig::default(), &theme, &players).unwrap();

    assert!(leaderboard.entries.is_empty());
    assert_eq!(leaderboard.skipped.len(), 1);
    match &leaderboard.skipped[0].error {
        mimic_score::ScoringError::InsufficientSamples { required, actual } => {
            assert!(actual < required);
        }
        other => panic!("Expected InsufficientSamples, got {:?}", other),
    }
}

#[test]
fn test_silent_theme_fails_whole_call() {
    let theme = silence(22050);
    let players = vec![PlayerSubmission::new("anyone", sine(440.0, 22050))];

    let err = compute_leaderboard(&ScoringConfig::default(), &theme, &players).unwrap_err();
    assert_eq!(err, mimic_score::ScoringError::EmptySignal);
}

#[test]
fn test_identical_players_tie_in_submission_order() {
    let theme = sine(440.0, 22050);
    let performance = sine(660.0, 22050);
    let players = vec![
        PlayerSubmission::new("alpha", performance.clone()),
        PlayerSubmission::new("beta", performance),
    ];

    let leaderboard = compute_leaderboard(&ScoringConfig::default(), &theme, &players).unwrap();

    assert_eq!(leaderboard.entries.len(), 2);
    assert_eq!(leaderboard.entries[0].total, leaderboard.entries[1].total);
    assert_eq!(leaderboard.entries[0].name, "alpha");
    assert_eq!(leaderboard.entries[1].name, "beta");
}

#[test]
fn test_no_players_yields_empty_leaderboard() {
    let theme = sine(440.0, 22050);
    let leaderboard = compute_leaderboard(&ScoringConfig::default(), &theme, &[]).unwrap();
    assert!(leaderboard.entries.is_empty());
    assert!(leaderboard.skipped.is_empty());
}
