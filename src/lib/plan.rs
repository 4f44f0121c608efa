use crate::audio;
use crate::title::extract_title;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One planned rename. The destination always sits in the source's directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl RenameEntry {
    /// True when the cleaned name is the current name
    pub fn is_noop(&self) -> bool {
        self.source == self.destination
    }

    pub fn source_name(&self) -> String {
        file_name_lossy(&self.source)
    }

    pub fn destination_name(&self) -> String {
        file_name_lossy(&self.destination)
    }
}

fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Ordered rename plan for one run
#[derive(Debug, Clone, Default)]
pub struct RenamePlan {
    pub entries: Vec<RenameEntry>,
}

impl RenamePlan {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries that actually change a filename
    pub fn renames(&self) -> impl Iterator<Item = &RenameEntry> {
        self.entries.iter().filter(|e| !e.is_noop())
    }

    pub fn noop_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_noop()).count()
    }

    /// Whether `candidate` is already the destination of another source in `dir`
    fn is_planned_destination(&self, candidate: &Path, source: &Path) -> bool {
        let dir = source.parent();
        self.entries.iter().any(|e| {
            e.destination.parent() == dir && e.destination != source && e.destination == candidate
        })
    }
}

/// Build a conflict-free rename plan for `files`.
///
/// Files are processed in sorted path order. Each gets `title + .ext` with the
/// extension lowercased. When that name is taken on disk by another file, or
/// already planned for another source in the same directory, it becomes
/// `title (n).ext`. The counter is shared by every file with the same base
/// name during the run.
pub fn plan_renames(files: &[PathBuf]) -> RenamePlan {
    let mut sorted = files.to_vec();
    sorted.sort();

    let mut plan = RenamePlan::default();
    let mut seen_names: FxHashMap<String, usize> = FxHashMap::default();

    for source in sorted {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let suffix = audio::lowercase_suffix(&source);
        let title = extract_title(&stem);
        let base_name = format!("{}{}", title, suffix);

        let mut count = seen_names.get(&base_name).copied().unwrap_or(0);
        let mut candidate_name = base_name.clone();
        loop {
            let candidate = source.with_file_name(&candidate_name);
            let taken_on_disk = candidate.exists() && candidate != source;
            if !taken_on_disk && !plan.is_planned_destination(&candidate, &source) {
                break;
            }
            count += 1;
            candidate_name = format!("{} ({}){}", title, count, suffix);
        }
        seen_names.insert(base_name, count);

        let destination = source.with_file_name(&candidate_name);
        debug!("Planned {} -> {}", source.display(), destination.display());
        plan.entries.push(RenameEntry {
            source,
            destination,
        });
    }

    plan
}
