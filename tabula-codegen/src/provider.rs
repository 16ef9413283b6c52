//! The specification provider seam.

use eyre::Result;
use tabula_ir::TableSpec;

/// Trait for specification providers.
///
/// A provider returns the full table list in one synchronous call, with
/// columns already populated and ordered. A provider failure aborts the
/// generation run; there is no partial-result contract at this boundary.
pub trait SpecificationProvider {
    /// All table specifications from the provider's data source.
    fn all_tables(&self) -> Result<Vec<TableSpec>>;
}
