//! The artifact sink.
//!
//! The generation service returns in-memory artifacts; persisting them is
//! the caller's concern. This module writes a [`GenerationResult`] to disk,
//! one subdirectory per output kind.

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

use crate::GenerationResult;

/// What a [`write_result`] call put on disk.
#[derive(Debug, Default)]
pub struct WriteSummary {
    /// Paths of all written files, in write order.
    pub written: Vec<PathBuf>,
}

/// Write every artifact in the result under `base`, one subdirectory per
/// output kind. Directories are created as needed; existing files are
/// overwritten.
pub fn write_result(result: &GenerationResult, base: &Path) -> Result<WriteSummary> {
    let mut summary = WriteSummary::default();

    for (kind, files) in result {
        let dir = base.join(kind.directory());
        for file in files {
            let path = dir.join(&file.file_name);
            write_file(&path, &file.contents)?;
            summary.written.push(path);
        }
    }

    Ok(summary)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, contents).wrap_err_with(|| format!("failed to write '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use tabula_ir::{GeneratedFile, OutputKind};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_kind_subdirectories() {
        let temp = TempDir::new().unwrap();
        let mut result = GenerationResult::new();
        result.insert(
            OutputKind::CsharpModel,
            vec![GeneratedFile::new(
                OutputKind::CsharpModel,
                "Customer.cs",
                "class Customer {}",
            )],
        );
        result.insert(
            OutputKind::TsqlQuery,
            vec![GeneratedFile::new(
                OutputKind::TsqlQuery,
                "Customer.sql",
                "SELECT 1;",
            )],
        );

        let summary = write_result(&result, temp.path()).unwrap();

        assert_eq!(summary.written.len(), 2);
        let model = temp.path().join("csharp").join("Customer.cs");
        let query = temp.path().join("tsql").join("Customer.sql");
        assert_eq!(fs::read_to_string(model).unwrap(), "class Customer {}");
        assert_eq!(fs::read_to_string(query).unwrap(), "SELECT 1;");
    }

    #[test]
    fn test_write_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let mut result = GenerationResult::new();
        result.insert(
            OutputKind::TsqlQuery,
            vec![GeneratedFile::new(OutputKind::TsqlQuery, "A.sql", "first")],
        );
        write_result(&result, temp.path()).unwrap();

        result[&OutputKind::TsqlQuery][0].contents = "second".to_string();
        write_result(&result, temp.path()).unwrap();

        let path = temp.path().join("tsql").join("A.sql");
        assert_eq!(fs::read_to_string(path).unwrap(), "second");
    }

    #[test]
    fn test_empty_result_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let summary = write_result(&GenerationResult::new(), temp.path()).unwrap();
        assert!(summary.written.is_empty());
        assert!(fs::read_dir(temp.path()).unwrap().next().is_none());
    }
}
