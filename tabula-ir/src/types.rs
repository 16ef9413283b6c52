//! Provider type codes and provider tags.

use serde::{Deserialize, Serialize};

/// The data source a table specification originated from.
///
/// Currently only SQL Server exists; carrying the tag on every table keeps
/// multi-provider type mapping a data change rather than a redesign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecSource {
    #[default]
    SqlServer,
}

/// SQL Server system column types, by `sys.columns.user_type_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum SqlServerType {
    Image = 34,
    Text = 35,
    UniqueIdentifier = 36,
    Date = 40,
    Time = 41,
    DateTime2 = 42,
    DateTimeOffset = 43,
    TinyInt = 48,
    SmallInt = 52,
    Int = 56,
    SmallDateTime = 58,
    Real = 59,
    Money = 60,
    DateTime = 61,
    Float = 62,
    SqlVariant = 98,
    NText = 99,
    Bit = 104,
    Decimal = 106,
    Numeric = 108,
    SmallMoney = 122,
    BigInt = 127,
    HierarchyId = 128,
    Geometry = 129,
    Geography = 130,
    VarBinary = 165,
    VarChar = 167,
    Binary = 173,
    Char = 175,
    Timestamp = 189,
    NVarChar = 231,
    NChar = 239,
    Xml = 241,
    SysName = 256,
}

impl SqlServerType {
    /// Look up a type by its `user_type_id` code. Unknown codes return `None`;
    /// callers are expected to degrade to an untyped fallback rather than fail.
    pub fn from_code(code: i32) -> Option<Self> {
        let ty = match code {
            34 => Self::Image,
            35 => Self::Text,
            36 => Self::UniqueIdentifier,
            40 => Self::Date,
            41 => Self::Time,
            42 => Self::DateTime2,
            43 => Self::DateTimeOffset,
            48 => Self::TinyInt,
            52 => Self::SmallInt,
            56 => Self::Int,
            58 => Self::SmallDateTime,
            59 => Self::Real,
            60 => Self::Money,
            61 => Self::DateTime,
            62 => Self::Float,
            98 => Self::SqlVariant,
            99 => Self::NText,
            104 => Self::Bit,
            106 => Self::Decimal,
            108 => Self::Numeric,
            122 => Self::SmallMoney,
            127 => Self::BigInt,
            128 => Self::HierarchyId,
            129 => Self::Geometry,
            130 => Self::Geography,
            165 => Self::VarBinary,
            167 => Self::VarChar,
            173 => Self::Binary,
            175 => Self::Char,
            189 => Self::Timestamp,
            231 => Self::NVarChar,
            239 => Self::NChar,
            241 => Self::Xml,
            256 => Self::SysName,
            _ => return None,
        };
        Some(ty)
    }

    /// The `user_type_id` code for this type.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Look up a type by its T-SQL name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let ty = match name.to_ascii_lowercase().as_str() {
            "image" => Self::Image,
            "text" => Self::Text,
            "uniqueidentifier" => Self::UniqueIdentifier,
            "date" => Self::Date,
            "time" => Self::Time,
            "datetime2" => Self::DateTime2,
            "datetimeoffset" => Self::DateTimeOffset,
            "tinyint" => Self::TinyInt,
            "smallint" => Self::SmallInt,
            "int" => Self::Int,
            "smalldatetime" => Self::SmallDateTime,
            "real" => Self::Real,
            "money" => Self::Money,
            "datetime" => Self::DateTime,
            "float" => Self::Float,
            "sql_variant" => Self::SqlVariant,
            "ntext" => Self::NText,
            "bit" => Self::Bit,
            "decimal" => Self::Decimal,
            "numeric" => Self::Numeric,
            "smallmoney" => Self::SmallMoney,
            "bigint" => Self::BigInt,
            "hierarchyid" => Self::HierarchyId,
            "geometry" => Self::Geometry,
            "geography" => Self::Geography,
            "varbinary" => Self::VarBinary,
            "varchar" => Self::VarChar,
            "binary" => Self::Binary,
            "char" => Self::Char,
            "timestamp" | "rowversion" => Self::Timestamp,
            "nvarchar" => Self::NVarChar,
            "nchar" => Self::NChar,
            "xml" => Self::Xml,
            "sysname" => Self::SysName,
            _ => return None,
        };
        Some(ty)
    }

    /// The T-SQL name of this type.
    pub fn name(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Text => "text",
            Self::UniqueIdentifier => "uniqueidentifier",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime2 => "datetime2",
            Self::DateTimeOffset => "datetimeoffset",
            Self::TinyInt => "tinyint",
            Self::SmallInt => "smallint",
            Self::Int => "int",
            Self::SmallDateTime => "smalldatetime",
            Self::Real => "real",
            Self::Money => "money",
            Self::DateTime => "datetime",
            Self::Float => "float",
            Self::SqlVariant => "sql_variant",
            Self::NText => "ntext",
            Self::Bit => "bit",
            Self::Decimal => "decimal",
            Self::Numeric => "numeric",
            Self::SmallMoney => "smallmoney",
            Self::BigInt => "bigint",
            Self::HierarchyId => "hierarchyid",
            Self::Geometry => "geometry",
            Self::Geography => "geography",
            Self::VarBinary => "varbinary",
            Self::VarChar => "varchar",
            Self::Binary => "binary",
            Self::Char => "char",
            Self::Timestamp => "timestamp",
            Self::NVarChar => "nvarchar",
            Self::NChar => "nchar",
            Self::Xml => "xml",
            Self::SysName => "sysname",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for code in [34, 36, 56, 104, 128, 167, 231, 256] {
            let ty = SqlServerType::from_code(code).unwrap();
            assert_eq!(ty.code(), code);
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(SqlServerType::from_code(0), None);
        assert_eq!(SqlServerType::from_code(999), None);
    }

    #[test]
    fn test_name_round_trip() {
        for ty in [
            SqlServerType::Int,
            SqlServerType::NVarChar,
            SqlServerType::UniqueIdentifier,
            SqlServerType::SqlVariant,
            SqlServerType::HierarchyId,
        ] {
            assert_eq!(SqlServerType::from_name(ty.name()), Some(ty));
        }
    }

    #[test]
    fn test_name_case_insensitive() {
        assert_eq!(
            SqlServerType::from_name("NVarChar"),
            Some(SqlServerType::NVarChar)
        );
        assert_eq!(SqlServerType::from_name("INT"), Some(SqlServerType::Int));
    }

    #[test]
    fn test_rowversion_alias() {
        assert_eq!(
            SqlServerType::from_name("rowversion"),
            Some(SqlServerType::Timestamp)
        );
    }
}
