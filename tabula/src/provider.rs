//! The manifest-backed specification provider.

use eyre::Result;
use tabula_codegen::SpecificationProvider;
use tabula_ir::TableSpec;

/// Serves table specifications lowered from the manifest.
pub struct ManifestTables {
    tables: Vec<TableSpec>,
}

impl ManifestTables {
    pub fn new(tables: Vec<TableSpec>) -> Self {
        Self { tables }
    }
}

impl SpecificationProvider for ManifestTables {
    fn all_tables(&self) -> Result<Vec<TableSpec>> {
        Ok(self.tables.clone())
    }
}
