//! The T-SQL query generator.

use eyre::Result;
use tabula_codegen::{FileGenerator, infer_key_column};
use tabula_ir::{GeneratedFile, OutputKind, TableSpec};

use crate::{
    KEY_NOT_FOUND, QueryFile, delete_statement, get_all_statement, get_by_key_statement,
    insert_statement, update_statement,
};

/// Generates one CRUD query file per table specification.
///
/// The query file name keeps the raw table name; unlike the model file name
/// it is not sanitized.
pub struct TsqlQueryGenerator {
    quote_identifiers: bool,
}

impl TsqlQueryGenerator {
    pub fn new(quote_identifiers: bool) -> Self {
        Self { quote_identifiers }
    }
}

impl Default for TsqlQueryGenerator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl FileGenerator for TsqlQueryGenerator {
    fn output_kind(&self) -> OutputKind {
        OutputKind::TsqlQuery
    }

    fn generate(&self, table: &TableSpec) -> Result<GeneratedFile> {
        let quote = self.quote_identifiers;
        let key = infer_key_column(table);

        let file = QueryFile {
            get_by_key: key.map_or_else(
                || KEY_NOT_FOUND.to_string(),
                |k| get_by_key_statement(table, k, quote),
            ),
            get_all: get_all_statement(table, quote),
            insert: insert_statement(table, quote),
            update: key.map_or_else(
                || KEY_NOT_FOUND.to_string(),
                |k| update_statement(table, k, quote),
            ),
            delete: key.map_or_else(
                || KEY_NOT_FOUND.to_string(),
                |k| delete_statement(table, k, quote),
            ),
        };

        Ok(GeneratedFile::new(
            OutputKind::TsqlQuery,
            format!("{}.sql", table.name),
            file.render(),
        ))
    }
}
