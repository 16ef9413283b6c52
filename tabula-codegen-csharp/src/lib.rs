//! C# model generation.
//!
//! Turns one table specification into one C# class file: SQL Server type
//! codes map to C# property types through a descriptor table, and column
//! metadata optionally maps to `System.ComponentModel.DataAnnotations`
//! attributes.

mod annotations;
mod generator;
mod model_file;
mod type_mapper;

pub use annotations::{Annotation, MatchMode, infer_annotations};
pub use generator::CsharpModelGenerator;
pub use model_file::ModelFile;
pub use type_mapper::{ImportFlags, MappedType, SemanticKind, map_type};
