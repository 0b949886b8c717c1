// mimic_cli - score WAV recordings against a theme and print the leaderboard
//
// This is the collaborator side of the engine: it decodes WAV files to mono
// f32 signals (averaging channels), runs compute_leaderboard, and renders
// the result table. The library itself never touches files.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use mimic_score::analysis::features::FeatureKind;
use mimic_score::error::ErrorCode;
use mimic_score::{compute_leaderboard, AudioSignal, PlayerSubmission, ScoringConfig};

#[derive(Parser, Debug)]
#[command(
    name = "mimic_cli",
    about = "Rank vocal performances by similarity to a reference theme clip"
)]
struct Cli {
    /// Reference theme WAV file
    #[arg(long)]
    theme: PathBuf,

    /// Player entries as name=path/to/recording.wav (repeatable)
    #[arg(value_name = "NAME=WAV", required = true)]
    players: Vec<String>,

    /// Optional scoring config JSON (defaults used otherwise)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ScoringConfig::load_from_file(path),
        None => ScoringConfig::default(),
    };

    let theme = load_wav(&cli.theme)
        .with_context(|| format!("failed to load theme {}", cli.theme.display()))?;

    let mut submissions = Vec::with_capacity(cli.players.len());
    for entry in &cli.players {
        let (name, path) = parse_player_entry(entry)?;
        let audio =
            load_wav(Path::new(path)).with_context(|| format!("failed to load player {}", path))?;
        submissions.push(PlayerSubmission::new(name, audio));
    }

    let leaderboard = compute_leaderboard(&config, &theme, &submissions)
        .context("failed to score against the theme")?;

    println!(
        "{:<4} {:<20} {:>16} {:>19} {:>8}",
        "rank",
        "player",
        FeatureKind::HarmonicProfile.name(),
        FeatureKind::ZeroCrossingRate.name(),
        "total"
    );
    for (rank, entry) in leaderboard.entries.iter().enumerate() {
        println!(
            "{:<4} {:<20} {:>16.4} {:>19.4} {:>8.4}",
            rank + 1,
            entry.name,
            entry.similarities[&FeatureKind::HarmonicProfile],
            entry.similarities[&FeatureKind::ZeroCrossingRate],
            entry.total
        );
    }
    for skipped in &leaderboard.skipped {
        println!(
            "--   {:<20} could not be scored: {} (code {})",
            skipped.name,
            skipped.error.message(),
            skipped.error.code()
        );
    }

    Ok(())
}

fn parse_player_entry(entry: &str) -> Result<(&str, &str)> {
    match entry.split_once('=') {
        Some((name, path)) if !name.is_empty() && !path.is_empty() => Ok((name, path)),
        _ => bail!("invalid player entry '{}', expected name=path.wav", entry),
    }
}

/// Decode a WAV file to a mono f32 signal, averaging channels
fn load_wav(path: &Path) -> Result<AudioSignal> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let channels = spec.channels as usize;
    if channels == 0 {
        bail!("WAV has zero channels");
    }

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader.samples::<f32>().collect::<Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let scale = (1_i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<Result<_, _>>()?
        }
    };

    let mono: Vec<f32> = interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect();

    Ok(AudioSignal::new(mono, spec.sample_rate))
}
