use crate::plan::RenamePlan;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct MappingRow {
    old_path: String,
    new_path: String,
}

/// Write the plan as an `old_path,new_path` CSV, replacing any previous file.
/// No-op entries are included so the log mirrors the whole plan.
pub fn write_mapping_csv(path: &Path, plan: &RenamePlan) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_path(path)
        .with_context(|| format!("Failed to create mapping file '{}'", path.display()))?;

    writer.write_record(["old_path", "new_path"])?;
    for entry in &plan.entries {
        writer.serialize(MappingRow {
            old_path: entry.source.to_string_lossy().into_owned(),
            new_path: entry.destination.to_string_lossy().into_owned(),
        })?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write mapping file '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::RenameEntry;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn entry(source: &str, destination: &str) -> RenameEntry {
        RenameEntry {
            source: PathBuf::from(source),
            destination: PathBuf::from(destination),
        }
    }

    #[test]
    fn test_write_mapping_csv() -> Result<()> {
        let tmp_dir = tempdir()?;
        let csv_path = tmp_dir.path().join("rename_map.csv");
        let plan = RenamePlan {
            entries: vec![
                entry("dir/Episode [HD].mp3", "dir/Episode.mp3"),
                entry("dir/Clean.mp3", "dir/Clean.mp3"),
                entry("dir/Uno, Dos.mp3", "dir/Uno, \"Dos\".mp3"),
            ],
        };

        write_mapping_csv(&csv_path, &plan)?;

        let content = fs::read_to_string(&csv_path)?;
        assert!(content.starts_with("old_path,new_path\r\n"));
        assert!(content.contains("dir/Clean.mp3,dir/Clean.mp3\r\n"));
        assert!(content.contains("\"dir/Uno, Dos.mp3\",\"dir/Uno, \"\"Dos\"\".mp3\""));

        let mut reader = csv::Reader::from_path(&csv_path)?;
        let rows: Vec<(String, String)> = reader
            .records()
            .map(|r| r.map(|r| (r[0].to_string(), r[1].to_string())))
            .collect::<std::result::Result<_, _>>()?;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].1, "dir/Uno, \"Dos\".mp3");

        Ok(())
    }

    #[test]
    fn test_empty_plan_still_gets_header() -> Result<()> {
        let tmp_dir = tempdir()?;
        let csv_path = tmp_dir.path().join("rename_map.csv");

        write_mapping_csv(&csv_path, &RenamePlan::default())?;

        assert_eq!(fs::read_to_string(&csv_path)?, "old_path,new_path\r\n");

        Ok(())
    }

    #[test]
    fn test_previous_log_is_replaced() -> Result<()> {
        let tmp_dir = tempdir()?;
        let csv_path = tmp_dir.path().join("rename_map.csv");
        fs::write(&csv_path, "stale contents that are much longer than the new file\n")?;

        write_mapping_csv(&csv_path, &RenamePlan::default())?;

        assert_eq!(fs::read_to_string(&csv_path)?, "old_path,new_path\r\n");

        Ok(())
    }
}
