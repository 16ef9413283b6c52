//! The C# model generator.

use eyre::Result;
use tabula_codegen::{FileGenerator, sanitize_identifier};
use tabula_ir::{GeneratedFile, OutputKind, TableSpec};

use crate::{ImportFlags, MatchMode, ModelFile, infer_annotations, map_type};

/// Generates one C# class file per table specification.
///
/// Table and column names are sanitized (alphanumeric plus underscore)
/// before emission; the sanitized table name doubles as the class name and
/// the file name. Generation never fails: a table with zero columns yields
/// a class with no properties, and unmapped type codes fall back to
/// `object` silently.
pub struct CsharpModelGenerator {
    namespace: String,
    /// `Some` enables annotation emission in the given match mode.
    annotations: Option<MatchMode>,
}

impl CsharpModelGenerator {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            annotations: None,
        }
    }

    pub fn with_annotations(mut self, mode: MatchMode) -> Self {
        self.annotations = Some(mode);
        self
    }
}

impl FileGenerator for CsharpModelGenerator {
    fn output_kind(&self) -> OutputKind {
        OutputKind::CsharpModel
    }

    fn generate(&self, table: &TableSpec) -> Result<GeneratedFile> {
        let class_name = sanitize_identifier(&table.name);

        let mut imports = ImportFlags::default();
        let mut properties = Vec::with_capacity(table.columns.len());

        for column in &table.columns {
            let mapped = map_type(column.type_code, column.is_nullable);
            imports = imports.union(mapped.imports);

            let property = format!(
                "public {} {} {{ get; set; }}",
                mapped.name,
                sanitize_identifier(&column.name)
            );

            let block = match self.annotations {
                Some(mode) => {
                    let mut prefix = String::new();
                    for annotation in infer_annotations(column, mapped.kind, mode) {
                        prefix.push_str(&annotation.to_string());
                        prefix.push_str("\n\t\t");
                    }
                    prefix + &property
                }
                None => property,
            };

            properties.push(block);
        }

        let contents = ModelFile {
            namespace: self.namespace.clone(),
            class_name: class_name.clone(),
            properties,
            imports,
            data_annotations: self.annotations.is_some(),
        }
        .render();

        Ok(GeneratedFile::new(
            OutputKind::CsharpModel,
            format!("{class_name}.cs"),
            contents,
        ))
    }
}

#[cfg(test)]
mod tests {
    use tabula_ir::{ColumnSpec, SqlServerType};

    use super::*;

    fn customer() -> TableSpec {
        TableSpec::new("dbo", "Customer").with_columns(vec![
            ColumnSpec::new("Id", SqlServerType::Int)
                .not_nullable()
                .identity(),
            ColumnSpec::new("FirstName", SqlServerType::VarChar)
                .with_length(50)
                .not_nullable(),
            ColumnSpec::new("LastName", SqlServerType::VarChar)
                .with_length(50)
                .not_nullable(),
        ])
    }

    #[test]
    fn test_output_kind() {
        assert_eq!(
            CsharpModelGenerator::new("Acme.Models").output_kind(),
            OutputKind::CsharpModel
        );
    }

    #[test]
    fn test_file_name_uses_sanitized_table_name() {
        let generator = CsharpModelGenerator::new("Acme.Models");
        let table = TableSpec::new("dbo", "Order Details");
        let file = generator.generate(&table).unwrap();
        assert_eq!(file.file_name, "OrderDetails.cs");
        assert!(file.contents.contains("public class OrderDetails"));
    }

    #[test]
    fn test_plain_model_text() {
        let generator = CsharpModelGenerator::new("Acme.Models");
        let file = generator.generate(&customer()).unwrap();

        let expected = "using System;\n\
            using System.Collections.Generic;\n\
            using System.Text;\n\
            \n\
            namespace Acme.Models\n\
            {\n\
            \tpublic class Customer\n\
            \t{\n\
            \t\tpublic int Id { get; set; }\n\
            \n\
            \t\tpublic string FirstName { get; set; }\n\
            \n\
            \t\tpublic string LastName { get; set; }\n\
            \t}\n\
            }";
        assert_eq!(file.contents, expected);
    }

    #[test]
    fn test_annotated_model_has_required_and_length_pairs() {
        let generator =
            CsharpModelGenerator::new("Acme.Models").with_annotations(MatchMode::Exact);
        let file = generator.generate(&customer()).unwrap();

        // FirstName and LastName each get exactly required + string-length,
        // in that order, and no category annotation.
        assert!(file.contents.contains(
            "[Required]\n\t\t[StringLength(50)]\n\t\tpublic string FirstName { get; set; }"
        ));
        assert!(file.contents.contains(
            "[Required]\n\t\t[StringLength(50)]\n\t\tpublic string LastName { get; set; }"
        ));
        assert!(!file.contents.contains("DataType"));
        assert!(
            file.contents
                .contains("using System.ComponentModel.DataAnnotations;")
        );
    }

    #[test]
    fn test_zero_columns_yield_empty_class() {
        let generator = CsharpModelGenerator::new("Acme.Models");
        let file = generator.generate(&TableSpec::new("dbo", "Empty")).unwrap();
        assert!(file.contents.contains("public class Empty"));
        assert_eq!(
            file.contents.matches('{').count(),
            file.contents.matches('}').count()
        );
        assert!(!file.contents.contains("get; set;"));
    }

    #[test]
    fn test_extension_types_pull_import_once() {
        let generator = CsharpModelGenerator::new("Acme.Gis");
        let table = TableSpec::new("dbo", "Place").with_columns(vec![
            ColumnSpec::new("Area", SqlServerType::Geometry),
            ColumnSpec::new("Border", SqlServerType::Geography),
        ]);
        let file = generator.generate(&table).unwrap();
        assert_eq!(
            file.contents
                .matches("using Microsoft.SqlServer.Types;")
                .count(),
            1
        );
        assert!(file.contents.contains("public SqlGeometry Area { get; set; }"));
    }
}
