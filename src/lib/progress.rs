use crate::plan::{RenameEntry, RenamePlan};
use std::path::PathBuf;

/// Report lines printed during a run.
/// Keeps preview, persistence and apply wording in one place.
#[derive(Debug, Clone)]
pub enum RenameMessage {
    /// Header before the preview
    Found { count: usize },
    /// Entry whose cleaned name equals the current one
    Skip { name: String },
    /// Entry that will be renamed
    Rename { from: String, to: String },
    /// The mapping CSV was written
    MappingSaved { path: PathBuf },
    /// Final line of a dry run
    DryRunComplete,
    /// A single rename failed during apply
    RenameFailed {
        source: PathBuf,
        destination: PathBuf,
        error: String,
    },
    /// Final line of an applied run
    RenameComplete { renamed: usize },
}

impl RenameMessage {
    pub fn format(&self) -> String {
        match self {
            RenameMessage::Found { count } => {
                format!("Found {} audio files. Preview of renames:", count)
            }
            RenameMessage::Skip { name } => format!("SKIP (same): {}", name),
            RenameMessage::Rename { from, to } => format!("{}  ->  {}", from, to),
            RenameMessage::MappingSaved { path } => {
                format!("Mapping saved to {}", path.display())
            }
            RenameMessage::DryRunComplete => {
                "Dry-run complete. No files were changed. Re-run with --apply to rename files."
                    .to_string()
            }
            RenameMessage::RenameFailed {
                source,
                destination,
                error,
            } => format!(
                "FAILED to rename {} -> {}: {}",
                source.display(),
                destination.display(),
                error
            ),
            RenameMessage::RenameComplete { renamed } => {
                format!("Rename complete. {} files renamed.", renamed)
            }
        }
    }
}

impl From<&RenameEntry> for RenameMessage {
    fn from(entry: &RenameEntry) -> Self {
        if entry.is_noop() {
            RenameMessage::Skip {
                name: entry.source_name(),
            }
        } else {
            RenameMessage::Rename {
                from: entry.source_name(),
                to: entry.destination_name(),
            }
        }
    }
}

/// One preview line per plan entry, in plan order
pub fn preview_lines(plan: &RenamePlan) -> Vec<String> {
    plan.entries
        .iter()
        .map(|entry| RenameMessage::from(entry).format())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_message_formatting() {
        assert_eq!(
            RenameMessage::Found { count: 3 }.format(),
            "Found 3 audio files. Preview of renames:"
        );
        assert_eq!(
            RenameMessage::Skip {
                name: "Episode.mp3".to_string()
            }
            .format(),
            "SKIP (same): Episode.mp3"
        );
        assert_eq!(
            RenameMessage::Rename {
                from: "Episode [HD].mp3".to_string(),
                to: "Episode.mp3".to_string(),
            }
            .format(),
            "Episode [HD].mp3  ->  Episode.mp3"
        );
        assert_eq!(
            RenameMessage::MappingSaved {
                path: PathBuf::from("rename_map.csv")
            }
            .format(),
            "Mapping saved to rename_map.csv"
        );
        assert_eq!(
            RenameMessage::RenameFailed {
                source: PathBuf::from("a/x.mp3"),
                destination: PathBuf::from("a/y.mp3"),
                error: "No such file or directory (os error 2)".to_string(),
            }
            .format(),
            "FAILED to rename a/x.mp3 -> a/y.mp3: No such file or directory (os error 2)"
        );
        assert_eq!(
            RenameMessage::RenameComplete { renamed: 2 }.format(),
            "Rename complete. 2 files renamed."
        );
        assert!(RenameMessage::DryRunComplete.format().contains("--apply"));
    }

    #[test]
    fn test_preview_lines() {
        let plan = RenamePlan {
            entries: vec![
                RenameEntry {
                    source: PathBuf::from("dir/🎧 Intro.mp3"),
                    destination: PathBuf::from("dir/Intro.mp3"),
                },
                RenameEntry {
                    source: PathBuf::from("dir/Outro.mp3"),
                    destination: PathBuf::from("dir/Outro.mp3"),
                },
            ],
        };

        assert_eq!(
            preview_lines(&plan),
            vec!["🎧 Intro.mp3  ->  Intro.mp3", "SKIP (same): Outro.mp3"]
        );
    }
}
