use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tonedeck::catalog::{find_entry, CATALOG};
use tonedeck::config::PreviewConfig;
use tonedeck::player::CommandPlayer;
use tonedeck::preview::Previewer;

/// Audition the bundled notification sound catalog through the system audio
/// utility.
#[derive(Debug, Parser)]
#[command(name = "tonedeck", version, about)]
struct Cli {
    /// Config file (defaults to the per-user config location)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory containing the sound files
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Seconds of silence between sounds
    #[arg(long)]
    gap: Option<f32>,

    /// Playback program to use instead of the platform default
    #[arg(long)]
    player: Option<String>,

    /// Play a single catalog entry by file name
    #[arg(long, value_name = "FILENAME", conflicts_with = "list")]
    only: Option<String>,

    /// Print the catalog without playing anything
    #[arg(long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PreviewConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => PreviewConfig::load_or_default(PreviewConfig::default_path()),
    };

    if let Some(base_dir) = cli.base_dir {
        config.base_dir = base_dir;
    }
    if let Some(gap) = cli.gap {
        config.gap_secs = gap;
    }
    if let Some(player) = cli.player {
        config.player.program = player;
        config.player.args.clear();
    }
    config.validate().context("Invalid configuration")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        return list_catalog(&mut out).context("Failed to print catalog");
    }

    let catalog = match &cli.only {
        Some(filename) => {
            let entry = find_entry(filename).with_context(|| {
                format!("'{filename}' is not in the catalog (see --list for names)")
            })?;
            std::slice::from_ref(entry)
        }
        None => CATALOG,
    };

    let player = CommandPlayer::from_config(&config.player);
    let mut previewer = Previewer::from_config(&config, player);
    previewer
        .run(catalog, &mut out)
        .context("Audition run failed")?;

    Ok(())
}

fn list_catalog(out: &mut impl Write) -> io::Result<()> {
    for (index, entry) in CATALOG.iter().enumerate() {
        writeln!(
            out,
            "{:2}  {:<28} {}",
            index + 1,
            entry.filename,
            entry.description
        )?;
    }
    Ok(())
}
