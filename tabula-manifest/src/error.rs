use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'tabula init' to create a starter tabula.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tabula.toml")]
    #[diagnostic(code(tabula::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown column type '{ty}' on {table}.{column}")]
    #[diagnostic(
        code(tabula::unknown_type),
        help(
            "use a SQL Server system type name, e.g. int, bigint, bit, nvarchar, varchar, datetime2, uniqueidentifier"
        )
    )]
    UnknownColumnType {
        #[source_code]
        src: NamedSource<String>,
        table: String,
        column: String,
        ty: String,
    },

    #[error("{message}")]
    #[diagnostic(code(tabula::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        message: String,
    },
}

impl Error {
    /// Create an io error for a manifest path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error with source context
    pub fn validation(message: impl Into<String>, src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            message: message.into(),
        })
    }

    /// Create an unknown-column-type error with source context
    pub fn unknown_column_type(
        table: impl Into<String>,
        column: impl Into<String>,
        ty: impl Into<String>,
        src: &str,
        filename: &str,
    ) -> Box<Self> {
        Box::new(Error::UnknownColumnType {
            src: NamedSource::new(filename, src.to_string()),
            table: table.into(),
            column: column.into(),
            ty: ty.into(),
        })
    }
}
