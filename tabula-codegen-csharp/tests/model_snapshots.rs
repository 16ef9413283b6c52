//! Snapshot tests for generated C# model files.
//!
//! The file layout is a byte-exact contract; run `cargo insta review` to
//! update snapshots after intentional template changes.

use tabula_codegen::FileGenerator;
use tabula_codegen_csharp::{CsharpModelGenerator, MatchMode};
use tabula_ir::{ColumnSpec, SqlServerType, TableSpec};

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
fn customer_model() {
    let generator = CsharpModelGenerator::new("Acme.Models");
    let file = generator.generate(&customer()).unwrap();
    insta::assert_snapshot!("customer_model", file.contents);
}

#[test]
fn customer_model_annotated() {
    let generator = CsharpModelGenerator::new("Acme.Models").with_annotations(MatchMode::Exact);
    let file = generator.generate(&customer()).unwrap();
    insta::assert_snapshot!("customer_model_annotated", file.contents);
}

#[test]
fn document_model() {
    let table = TableSpec::new("dbo", "Document").with_columns(vec![
        ColumnSpec::new("Id", SqlServerType::Int)
            .not_nullable()
            .identity(),
        ColumnSpec::new("Body", SqlServerType::Xml),
        ColumnSpec::new("Location", SqlServerType::Geography),
        ColumnSpec::new("Revision", SqlServerType::HierarchyId),
        ColumnSpec::new("Price", SqlServerType::Decimal),
        ColumnSpec::new("IsActive", SqlServerType::Bit).not_nullable(),
    ]);
    let generator = CsharpModelGenerator::new("Acme.Models");
    let file = generator.generate(&table).unwrap();
    insta::assert_snapshot!("document_model", file.contents);
}
