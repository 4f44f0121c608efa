use crate::plan::{RenameEntry, RenamePlan};
use crate::progress::RenameMessage;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};

/// A rename that could not be carried out
#[derive(Debug, Clone)]
pub struct RenameFailure {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub error: String,
}

/// Outcome of applying a plan
#[derive(Debug, Default)]
pub struct ApplyOutcome {
    pub renamed: usize,
    pub skipped: usize,
    pub failures: Vec<RenameFailure>,
}

/// Rename one entry in place
pub fn rename_entry(entry: &RenameEntry) -> Result<()> {
    fs::rename(&entry.source, &entry.destination).with_context(|| {
        format!(
            "Failed to rename '{}' to '{}'",
            entry.source.display(),
            entry.destination.display()
        )
    })
}

/// Apply every non-noop entry of a plan.
///
/// A failing rename is reported and recorded, then the batch moves on to the
/// next entry. Nothing is retried.
pub fn apply_plan(plan: &RenamePlan) -> ApplyOutcome {
    let mut outcome = ApplyOutcome::default();

    for entry in &plan.entries {
        if entry.is_noop() {
            outcome.skipped += 1;
            continue;
        }

        match rename_entry(entry) {
            Ok(()) => {
                outcome.renamed += 1;
                info!(
                    "Renamed: {} -> {}",
                    entry.source.display(),
                    entry.destination.display()
                );
            }
            Err(e) => {
                let failure = RenameFailure {
                    source: entry.source.clone(),
                    destination: entry.destination.clone(),
                    error: e.root_cause().to_string(),
                };
                let message = RenameMessage::RenameFailed {
                    source: failure.source.clone(),
                    destination: failure.destination.clone(),
                    error: failure.error.clone(),
                }
                .format();
                error!("{}", message);
                println!("{}", message);
                outcome.failures.push(failure);
            }
        }
    }

    outcome
}
