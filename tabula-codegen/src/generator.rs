//! The generator seam.

use eyre::Result;
use tabula_ir::{GeneratedFile, OutputKind, TableSpec};

/// Trait for artifact generators.
///
/// Implement this trait to emit a new kind of per-table artifact. Generators
/// are configured at construction and stateless with respect to a single
/// invocation: all specification data flows in as a parameter.
pub trait FileGenerator {
    /// The kind of artifact this generator produces.
    fn output_kind(&self) -> OutputKind;

    /// Generate one artifact for the given table specification.
    fn generate(&self, table: &TableSpec) -> Result<GeneratedFile>;
}
