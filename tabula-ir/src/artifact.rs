//! Generated output artifacts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of artifact a generator produces.
///
/// Exactly one generator per kind may be registered with the generation
/// service; the kind also selects the sink subdirectory artifacts are
/// written into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputKind {
    CsharpModel,
    TsqlQuery,
}

impl OutputKind {
    /// File extension for artifacts of this kind, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::CsharpModel => "cs",
            Self::TsqlQuery => "sql",
        }
    }

    /// Sink subdirectory artifacts of this kind are written into.
    pub fn directory(self) -> &'static str {
        match self {
            Self::CsharpModel => "csharp",
            Self::TsqlQuery => "tsql",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CsharpModel => "csharp-model",
            Self::TsqlQuery => "tsql-query",
        };
        f.write_str(name)
    }
}

/// One generated artifact, immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// File name including extension, relative to the kind's sink directory.
    pub file_name: String,
    /// The kind of generator that produced this artifact.
    pub kind: OutputKind,
    /// Full text contents.
    pub contents: String,
}

impl GeneratedFile {
    pub fn new(kind: OutputKind, file_name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            kind,
            contents: contents.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_extension() {
        assert_eq!(OutputKind::CsharpModel.extension(), "cs");
        assert_eq!(OutputKind::TsqlQuery.extension(), "sql");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(OutputKind::CsharpModel.to_string(), "csharp-model");
        assert_eq!(OutputKind::TsqlQuery.to_string(), "tsql-query");
    }
}
