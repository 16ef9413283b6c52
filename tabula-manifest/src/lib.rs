//! `tabula.toml` parsing, validation, and lowering.
//!
//! The manifest declares the output directory, the generator configurations,
//! and the table specifications themselves: the bundled specification
//! provider reads the same table/column shape the original data source
//! (`sys.tables` / `sys.columns`) would return, declared as TOML instead of
//! pulled from a live connection.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod lower;

use std::{fs, path::Path};

pub use error::{Error, Result};
use serde::Deserialize;
use tabula_ir::SqlServerType;

/// Root schema for tabula.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Manifest {
    /// Where generated artifacts are written
    pub output: OutputConfig,

    /// C# model generator configuration
    #[serde(default)]
    pub model: ModelConfig,

    /// T-SQL query generator configuration
    #[serde(default)]
    pub queries: QueryConfig,

    /// Table specifications, in generation order
    #[serde(default)]
    pub tables: Vec<TableDef>,
}

impl Manifest {
    /// Read and validate a manifest from disk.
    pub fn open(path: &Path) -> Result<Self> {
        let src = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("tabula.toml");
        Self::from_source(&src, filename)
    }

    /// Parse and validate a manifest from TOML source.
    pub fn from_source(src: &str, filename: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(src).map_err(|e| Error::parse(e, src, filename))?;
        manifest.validate(src, filename)?;
        Ok(manifest)
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        if self.output.directory.trim().is_empty() {
            return Err(Error::validation(
                "output.directory must not be empty",
                src,
                filename,
            ));
        }

        let namespace_missing = self
            .model
            .namespace
            .as_deref()
            .is_none_or(|ns| ns.trim().is_empty());
        if self.model.active && namespace_missing && !self.model.prompt_namespace {
            return Err(Error::validation(
                "the model generator is active but no namespace is configured; set model.namespace or model.prompt-namespace",
                src,
                filename,
            ));
        }

        for table in &self.tables {
            for column in &table.columns {
                if SqlServerType::from_name(&column.ty).is_none() {
                    return Err(Error::unknown_column_type(
                        format!("{}.{}", table.schema, table.name),
                        &column.name,
                        &column.ty,
                        src,
                        filename,
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Output location for generated artifacts
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Base directory; each output kind gets its own subdirectory
    pub directory: String,
}

/// Configuration for the C# model generator
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ModelConfig {
    #[serde(default)]
    pub active: bool,

    /// Namespace emitted into every model file
    #[serde(default)]
    pub namespace: Option<String>,

    /// Whether to emit data annotations above each property
    #[serde(default)]
    pub annotations: bool,

    /// Whether annotation name matching requires full equality rather than
    /// substring containment
    #[serde(default = "default_true")]
    pub exact_match_only: bool,

    /// Ask for the namespace interactively when none is configured
    #[serde(default)]
    pub prompt_namespace: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            active: false,
            namespace: None,
            annotations: false,
            exact_match_only: true,
            prompt_namespace: false,
        }
    }
}

/// Configuration for the T-SQL query generator
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct QueryConfig {
    #[serde(default)]
    pub active: bool,

    /// Whether to wrap every schema/table/column reference in brackets
    #[serde(default = "default_true")]
    pub quote_identifiers: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            active: false,
            quote_identifiers: true,
        }
    }
}

/// One declared table
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TableDef {
    /// Owning schema; defaults to dbo
    #[serde(default = "default_schema")]
    pub schema: String,

    pub name: String,

    #[serde(default)]
    pub columns: Vec<ColumnDef>,
}

/// One declared column
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ColumnDef {
    pub name: String,

    /// SQL Server system type name (case-insensitive), e.g. `nvarchar`
    #[serde(rename = "type")]
    pub ty: String,

    /// Declared length; 0 when not applicable
    #[serde(default)]
    pub length: u32,

    #[serde(default = "default_true")]
    pub nullable: bool,

    #[serde(default)]
    pub identity: bool,

    #[serde(default)]
    pub computed: bool,
}

fn default_true() -> bool {
    true
}

fn default_schema() -> String {
    "dbo".to_string()
}
