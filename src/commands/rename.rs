use anyhow::Result;
use audiotitle::config::RenameConfig;
use audiotitle::directory::{self, ApplyOutcome};
use audiotitle::mapping;
use audiotitle::plan::{self, RenamePlan};
use audiotitle::progress::{self, RenameMessage};
use audiotitle::utils;
use tracing::info;

/// What a run planned and, in apply mode, what it did
pub struct RunSummary {
    pub plan: RenamePlan,
    pub outcome: Option<ApplyOutcome>,
}

/// Clean the titles of every audio file in the configured directory.
///
/// Always previews the plan and writes the mapping CSV before touching any
/// file. Renames only happen when `config.apply` is set.
pub fn rename_audio_titles(config: &RenameConfig) -> Result<RunSummary> {
    info!("🔍 Scanning directory: {}", config.directory.display());
    let scan = utils::scan_directory_for_audio_files(&config.directory, config.recursive)?;
    if scan.files_skipped > 0 {
        info!(
            "ℹ️  Found {} non-audio files (will be left in place)",
            scan.files_skipped
        );
    }

    let plan = plan::plan_renames(&scan.audio_files);
    info!(
        "📊 {} files to rename, {} already clean",
        plan.renames().count(),
        plan.noop_count()
    );

    println!("{}", RenameMessage::Found { count: plan.len() }.format());
    println!();
    for line in progress::preview_lines(&plan) {
        println!("{}", line);
    }

    mapping::write_mapping_csv(&config.map_csv, &plan)?;
    println!();
    println!(
        "{}",
        RenameMessage::MappingSaved {
            path: config.map_csv.clone()
        }
        .format()
    );

    if !config.apply {
        println!();
        println!("{}", RenameMessage::DryRunComplete.format());
        return Ok(RunSummary {
            plan,
            outcome: None,
        });
    }

    let outcome = directory::apply_plan(&plan);
    println!();
    println!(
        "{}",
        RenameMessage::RenameComplete {
            renamed: outcome.renamed
        }
        .format()
    );
    if !outcome.failures.is_empty() {
        info!("⚠️  {} files could not be renamed", outcome.failures.len());
    }

    Ok(RunSummary {
        plan,
        outcome: Some(outcome),
    })
}
