//! Mapping between SQL Server column types and C# property types.

use tabula_ir::SqlServerType;

/// Coarse classification of a mapped type, consumed only by annotation
/// inference. `Extension` covers the SQL Server CLR types (hierarchyid,
/// geometry, geography) that have no framework type behind them; annotation
/// logic skips everything that is not [`SemanticKind::Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticKind {
    Text,
    Numeric,
    DateTime,
    Boolean,
    Binary,
    Guid,
    Xml,
    Unknown,
    Extension,
}

/// Namespaces a mapped type pulls into the generated file, unioned across
/// all columns before imports are rendered. Kept out of the type name so
/// each import appears at most once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportFlags {
    /// `using System.Linq.Xml;`
    pub linq_xml: bool,
    /// `using Microsoft.SqlServer.Types;`
    pub sql_server_types: bool,
}

impl ImportFlags {
    pub fn union(self, other: Self) -> Self {
        Self {
            linq_xml: self.linq_xml || other.linq_xml,
            sql_server_types: self.sql_server_types || other.sql_server_types,
        }
    }
}

/// A provider type code mapped to its C# rendition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    /// C# type name, nullable marker included where applicable.
    pub name: String,
    pub kind: SemanticKind,
    pub imports: ImportFlags,
}

/// One row of the type table.
struct TypeDescriptor {
    base: &'static str,
    kind: SemanticKind,
    /// Value types take a `?` suffix when the column is nullable; reference
    /// types are nullable by C#'s own semantics and take no marker.
    value_type: bool,
    imports: ImportFlags,
}

const NO_IMPORTS: ImportFlags = ImportFlags {
    linq_xml: false,
    sql_server_types: false,
};

const LINQ_XML: ImportFlags = ImportFlags {
    linq_xml: true,
    sql_server_types: false,
};

const SQL_SERVER_TYPES: ImportFlags = ImportFlags {
    linq_xml: false,
    sql_server_types: true,
};

/// The untyped fallback used for codes without a defined mapping.
const OBJECT: TypeDescriptor = TypeDescriptor {
    base: "object",
    kind: SemanticKind::Unknown,
    value_type: false,
    imports: NO_IMPORTS,
};

fn descriptor(ty: SqlServerType) -> TypeDescriptor {
    use SemanticKind::*;
    use SqlServerType as T;

    let (base, kind, value_type, imports) = match ty {
        T::Char | T::VarChar | T::Text | T::NText | T::NVarChar | T::NChar | T::SysName => {
            ("string", Text, false, NO_IMPORTS)
        }
        T::UniqueIdentifier => ("Guid", Guid, true, NO_IMPORTS),
        T::Date | T::Time | T::DateTime | T::DateTime2 | T::DateTimeOffset | T::SmallDateTime => {
            ("DateTime", DateTime, true, NO_IMPORTS)
        }
        T::TinyInt => ("sbyte", Numeric, true, NO_IMPORTS),
        T::SmallInt => ("short", Numeric, true, NO_IMPORTS),
        T::Int => ("int", Numeric, true, NO_IMPORTS),
        T::BigInt | T::Timestamp => ("long", Numeric, true, NO_IMPORTS),
        T::Real | T::Float => ("double", Numeric, true, NO_IMPORTS),
        T::Decimal | T::Numeric | T::Money | T::SmallMoney => ("decimal", Numeric, true, NO_IMPORTS),
        T::Bit => ("bool", Boolean, true, NO_IMPORTS),
        T::SqlVariant => ("object", Unknown, false, NO_IMPORTS),
        T::VarBinary | T::Binary | T::Image => ("byte[]", Binary, false, NO_IMPORTS),
        T::Xml => ("XElement", Xml, false, LINQ_XML),
        T::HierarchyId => ("SqlHierarchyId", Extension, true, SQL_SERVER_TYPES),
        T::Geometry => ("SqlGeometry", Extension, false, SQL_SERVER_TYPES),
        T::Geography => ("SqlGeography", Extension, false, SQL_SERVER_TYPES),
    };

    TypeDescriptor {
        base,
        kind,
        value_type,
        imports,
    }
}

/// Map a provider type code and nullability to a C# type.
///
/// Pure and total: unknown codes map to `object` rather than failing.
pub fn map_type(code: i32, nullable: bool) -> MappedType {
    let desc = SqlServerType::from_code(code).map_or(OBJECT, descriptor);

    let name = if desc.value_type && nullable {
        format!("{}?", desc.base)
    } else {
        desc.base.to_string()
    };

    MappedType {
        name,
        kind: desc.kind,
        imports: desc.imports,
    }
}
