use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// Expected file stem of the conversion table.
pub const CONVERSION_FILE: &str = "conversion";
/// Expected file stem of the primary inventory.
pub const PRIMARY_FILE: &str = "primary";
/// Expected file stem of the secondary inventory.
pub const SECONDARY_FILE: &str = "secondary";
/// Expected file stem of the optional serialization table.
pub const SERIALIZATION_FILE: &str = "serialization";

/// The input CSV files located in a data folder.
#[derive(Debug, Clone)]
pub struct InputFiles {
    pub conversion: PathBuf,
    pub primary: PathBuf,
    pub secondary: PathBuf,
    /// Absent when no serialization table is provided; every item is then
    /// treated as serialized.
    pub serialization: Option<PathBuf>,
}

/// Locate the input files in `dir` by case-insensitive file stem.
///
/// `conversion.csv`, `primary.csv`, and `secondary.csv` are required;
/// `serialization.csv` is optional. The error names every missing file at
/// once rather than the first.
pub fn discover_input_files(dir: &Path) -> Result<InputFiles> {
    let mut found: BTreeMap<String, PathBuf> = BTreeMap::new();
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read data folder: {}", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("read data folder: {}", dir.display()))?;
        let path = entry.path();
        let is_csv = path
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if !is_csv {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(OsStr::to_str) else {
            continue;
        };
        found.entry(stem.to_lowercase()).or_insert(path);
    }

    let conversion = found.remove(CONVERSION_FILE);
    let primary = found.remove(PRIMARY_FILE);
    let secondary = found.remove(SECONDARY_FILE);
    let serialization = found.remove(SERIALIZATION_FILE);

    match (conversion, primary, secondary) {
        (Some(conversion), Some(primary), Some(secondary)) => Ok(InputFiles {
            conversion,
            primary,
            secondary,
            serialization,
        }),
        (conversion, primary, secondary) => {
            let mut missing = Vec::new();
            for (name, path) in [
                (CONVERSION_FILE, conversion),
                (PRIMARY_FILE, primary),
                (SECONDARY_FILE, secondary),
            ] {
                if path.is_none() {
                    missing.push(format!("{name}.csv"));
                }
            }
            bail!(
                "missing input files in {}: {}",
                dir.display(),
                missing.join(", ")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("recon-ingest-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn finds_required_and_optional_files() {
        let dir = scratch_dir("discover");
        for name in ["Conversion.CSV", "primary.csv", "SECONDARY.csv", "serialization.csv"] {
            std::fs::write(dir.join(name), "a,b\n").expect("write input file");
        }

        let files = discover_input_files(&dir).expect("discover");
        assert!(files.serialization.is_some());
        assert!(
            files
                .conversion
                .file_name()
                .and_then(OsStr::to_str)
                .is_some_and(|n| n.eq_ignore_ascii_case("conversion.csv"))
        );

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_files_are_all_named() {
        let dir = scratch_dir("missing");
        std::fs::write(dir.join("primary.csv"), "a,b\n").expect("write input file");

        let error = discover_input_files(&dir).expect_err("must be missing files");
        let message = error.to_string();
        assert!(message.contains("conversion.csv"));
        assert!(message.contains("secondary.csv"));
        assert!(!message.contains("primary.csv"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn non_csv_files_are_ignored() {
        let dir = scratch_dir("noncsv");
        std::fs::write(dir.join("conversion.txt"), "a,b\n").expect("write input file");

        assert!(discover_input_files(&dir).is_err());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
