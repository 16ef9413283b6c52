//! Specification types for the tabula code generators.
//!
//! This crate provides the unified type definitions used across the tabula
//! generation pipeline. A specification describes one database table and its
//! columns independently of the data source it came from; generators consume
//! specifications and produce [`GeneratedFile`] artifacts.
//!
//! # Architecture
//!
//! ```text
//! tabula.toml → tabula-manifest (parsing) → tabula-ir (specifications) → codegen
//! ```
//!
//! The IR types are designed to be:
//! - Target-language agnostic (no C#/T-SQL-specific concerns)
//! - Provider agnostic (the provider tag is data, not a type parameter)
//! - Self-contained (no dependencies beyond serde)

mod artifact;
mod spec;
mod types;

pub use artifact::{GeneratedFile, OutputKind};
pub use spec::{ColumnSpec, TableSpec};
pub use types::{SpecSource, SqlServerType};
