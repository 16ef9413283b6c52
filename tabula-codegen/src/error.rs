use tabula_ir::OutputKind;
use thiserror::Error;

/// Errors raised by the generation service registry.
///
/// Registry errors always surface to the caller; they are never absorbed by
/// the per-artifact failure boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("a generator producing {0} output is already registered")]
    DuplicateGenerator(OutputKind),
}
