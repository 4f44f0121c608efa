use anyhow::Result;
use audiotitle::config::{self, RenameConfig};
use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;

mod commands;

/// Heuristic batch renamer for audio files.
/// Default is a dry run that prints the proposed renames and writes rename_map.csv.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing files
    #[arg(default_value = ".")]
    dir: String,
    /// Actually perform the renames (default is dry-run)
    #[arg(long)]
    apply: bool,
    /// Process files in subdirectories recursively
    #[arg(long)]
    recursive: bool,
}

fn init_tracing() {
    let level = config::parse_log_level(std::env::var(config::LOG_LEVEL_ENV).ok().as_deref());
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Load environment variables from a .env file if present
    dotenv().ok();
    init_tracing();
    let cli = Cli::parse();

    let directory = PathBuf::from(shellexpand::tilde(&cli.dir).into_owned());
    let config = RenameConfig::new(directory)
        .apply(cli.apply)
        .recursive(cli.recursive);

    commands::rename::rename_audio_titles(&config)?;

    Ok(())
}
