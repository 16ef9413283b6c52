//! Table and column specifications.

use serde::{Deserialize, Serialize};

use crate::{SpecSource, SqlServerType};

/// One database column, as observed by a specification provider.
///
/// Generators treat specifications as read-only: sanitized copies of names
/// are made where needed, the specification itself is never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Correlation key of the owning table.
    #[serde(default)]
    pub table_id: i32,
    /// Raw column name, pre-sanitization.
    pub name: String,
    /// Provider-specific type code (`sys.columns.user_type_id` for SQL Server).
    pub type_code: i32,
    /// Declared length; 0 when not applicable.
    #[serde(default)]
    pub length: u32,
    /// Whether the column accepts NULL.
    #[serde(default = "default_true")]
    pub is_nullable: bool,
    /// Whether the column is database-generated (auto-incrementing).
    #[serde(default)]
    pub is_identity: bool,
    /// Whether the column is server-computed and not user-writable.
    #[serde(default)]
    pub is_computed: bool,
}

fn default_true() -> bool {
    true
}

impl ColumnSpec {
    /// Create a nullable, non-identity, non-computed column of the given type.
    pub fn new(name: impl Into<String>, ty: SqlServerType) -> Self {
        Self {
            table_id: 0,
            name: name.into(),
            type_code: ty.code(),
            length: 0,
            is_nullable: true,
            is_identity: false,
            is_computed: false,
        }
    }

    pub fn with_length(mut self, length: u32) -> Self {
        self.length = length;
        self
    }

    pub fn not_nullable(mut self) -> Self {
        self.is_nullable = false;
        self
    }

    pub fn identity(mut self) -> Self {
        self.is_identity = true;
        self
    }

    pub fn computed(mut self) -> Self {
        self.is_computed = true;
        self
    }

    /// Whether the column may appear in INSERT/UPDATE column lists.
    pub fn is_writable(&self) -> bool {
        !self.is_identity && !self.is_computed
    }
}

/// One database table, with columns in declaration order.
///
/// Column order is significant: it is the order used in every emitted
/// artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSpec {
    /// Correlation key assigned by the specification provider.
    #[serde(default)]
    pub object_id: i32,
    /// Owning schema name (e.g. `dbo`).
    pub schema: String,
    /// Raw table name, pre-sanitization.
    pub name: String,
    /// Columns in declaration order.
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
    /// The provider this specification came from.
    #[serde(default)]
    pub source: SpecSource,
}

impl TableSpec {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            object_id: 0,
            schema: schema.into(),
            name: name.into(),
            columns: Vec::new(),
            source: SpecSource::SqlServer,
        }
    }

    pub fn with_columns(mut self, columns: Vec<ColumnSpec>) -> Self {
        self.columns = columns;
        self
    }

    /// Schema-qualified name, used as failure context in logs.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_defaults() {
        let col = ColumnSpec::new("Name", SqlServerType::NVarChar);
        assert!(col.is_nullable);
        assert!(!col.is_identity);
        assert!(!col.is_computed);
        assert_eq!(col.length, 0);
        assert!(col.is_writable());
    }

    #[test]
    fn test_identity_and_computed_are_not_writable() {
        let id = ColumnSpec::new("Id", SqlServerType::Int).identity();
        let total = ColumnSpec::new("Total", SqlServerType::Decimal).computed();
        assert!(!id.is_writable());
        assert!(!total.is_writable());
    }

    #[test]
    fn test_qualified_name() {
        let table = TableSpec::new("dbo", "Customer");
        assert_eq!(table.qualified_name(), "dbo.Customer");
    }
}
