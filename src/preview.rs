//! The sequential previewer.
//!
//! Drives every catalog entry, in order, through the playback boundary with
//! a fixed gap between plays and per-entry progress on the injected writer.

use std::io::Write;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crate::catalog::SoundEntry;
use crate::config::PreviewConfig;
use crate::error::Result;
use crate::player::Player;

/// Counters from a completed audition run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries handed to the playback utility
    pub played: usize,
    /// Gaps slept between consecutive entries
    pub pauses: usize,
}

/// Plays a catalog of sounds back to back, pacing and reporting as it goes.
pub struct Previewer<P> {
    player: P,
    base_dir: PathBuf,
    gap: Duration,
}

impl<P: Player> Previewer<P> {
    pub fn new(player: P, base_dir: impl Into<PathBuf>, gap: Duration) -> Self {
        Self {
            player,
            base_dir: base_dir.into(),
            gap,
        }
    }

    /// Wire a previewer from config.
    pub fn from_config(config: &PreviewConfig, player: P) -> Self {
        Self::new(
            player,
            config.base_dir.clone(),
            Duration::from_secs_f32(config.gap_secs),
        )
    }

    /// The wrapped playback boundary
    pub fn player(&self) -> &P {
        &self.player
    }

    /// Play every entry in `catalog`, in order.
    ///
    /// Each entry gets a `{i}/{N}: {filename}` progress line and its
    /// description before the blocking play; the gap is slept between
    /// consecutive entries only. A playback launch failure aborts the run,
    /// leaving the remaining entries unplayed and the completion block
    /// unwritten. The utility's exit status never fails the run.
    pub fn run<W: Write>(&mut self, catalog: &[SoundEntry], out: &mut W) -> Result<RunSummary> {
        let total = catalog.len();
        tracing::info!(total, base_dir = %self.base_dir.display(), "starting audition run");

        writeln!(out, "=== Auditioning {total} notification sounds ===")?;
        writeln!(out)?;
        writeln!(
            out,
            "Each sound plays automatically with a {} second gap",
            self.gap.as_secs_f32()
        )?;
        writeln!(out)?;

        let mut summary = RunSummary {
            played: 0,
            pauses: 0,
        };

        for (index, entry) in catalog.iter().enumerate() {
            let position = index + 1;
            writeln!(out, "{position}/{total}: {}", entry.filename)?;
            writeln!(out, "      {}", entry.description)?;

            let path = self.base_dir.join(entry.filename);
            self.player.play(&path)?;
            summary.played += 1;

            if position < total {
                thread::sleep(self.gap);
                summary.pauses += 1;
            }

            writeln!(out)?;
        }

        writeln!(out)?;
        writeln!(
            out,
            "All sounds played! These {total} sounds offer a good variety for different notification types."
        )?;

        tracing::info!(played = summary.played, "audition run complete");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::RecordingPlayer;

    fn entry(filename: &'static str, description: &'static str) -> SoundEntry {
        SoundEntry {
            filename,
            description,
        }
    }

    #[test]
    fn test_paths_resolve_under_base_dir_in_order() {
        let catalog = [entry("a.wav", "A"), entry("b.wav", "B")];
        let mut previewer = Previewer::new(RecordingPlayer::default(), "/snd", Duration::ZERO);
        let mut out = Vec::new();

        previewer.run(&catalog, &mut out).unwrap();

        assert_eq!(
            previewer.player().plays,
            vec![PathBuf::from("/snd/a.wav"), PathBuf::from("/snd/b.wav")]
        );
    }

    #[test]
    fn test_single_entry_has_no_pause() {
        let catalog = [entry("a.wav", "A")];
        let mut previewer = Previewer::new(RecordingPlayer::default(), "/snd", Duration::ZERO);
        let mut out = Vec::new();

        let summary = previewer.run(&catalog, &mut out).unwrap();

        assert_eq!(summary.played, 1);
        assert_eq!(summary.pauses, 0);
    }

    #[test]
    fn test_from_config_takes_gap_and_base_dir() {
        let mut config = PreviewConfig::default();
        config.base_dir = PathBuf::from("/tones");
        config.gap_secs = 0.5;

        let previewer = Previewer::from_config(&config, RecordingPlayer::default());

        assert_eq!(previewer.base_dir, PathBuf::from("/tones"));
        assert_eq!(previewer.gap, Duration::from_millis(500));
    }
}
