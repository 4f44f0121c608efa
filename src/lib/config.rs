use std::path::{Path, PathBuf};

/// Name of the old/new path log written on every run
pub const MAP_CSV: &str = "rename_map.csv";

/// Environment variable holding the maximum log level
pub const LOG_LEVEL_ENV: &str = "AUDIOTITLE_LOG";

/// Settings for one batch run
#[derive(Debug, Clone)]
pub struct RenameConfig {
    pub directory: PathBuf,
    pub apply: bool,
    pub recursive: bool,
    pub map_csv: PathBuf,
}

impl RenameConfig {
    /// Dry-run, top-level only, logging to `rename_map.csv` in the working directory
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            apply: false,
            recursive: false,
            map_csv: PathBuf::from(MAP_CSV),
        }
    }

    pub fn apply(mut self, apply: bool) -> Self {
        self.apply = apply;
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn map_csv<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.map_csv = path.as_ref().to_path_buf();
        self
    }
}

/// Parse a log level name, falling back to `INFO` for anything unrecognised.
pub fn parse_log_level(value: Option<&str>) -> tracing::Level {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(tracing::Level::INFO)
}
