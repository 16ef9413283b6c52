//! The five CRUD statement builders.
//!
//! Each builder is a pure function from a specification (and, for the keyed
//! statements, a key column) to one statement string. Identifier quoting is
//! bracket-style and controlled by a single flag; parameter placeholders
//! (`@ColumnName`) are never quoted.

use tabula_ir::{ColumnSpec, TableSpec};

/// Emitted in place of get-by-key/update/delete when no key column could be
/// inferred for the table.
pub const KEY_NOT_FOUND: &str = "--A T-SQL statement was not generated because the application was unable to identify the table key column.";

fn quoted(name: &str, quote: bool) -> String {
    if quote {
        format!("[{name}]")
    } else {
        name.to_string()
    }
}

fn qualified_table(table: &TableSpec, quote: bool) -> String {
    format!(
        "{}.{}",
        quoted(&table.schema, quote),
        quoted(&table.name, quote)
    )
}

fn column_list(table: &TableSpec, quote: bool) -> String {
    table
        .columns
        .iter()
        .map(|c| quoted(&c.name, quote))
        .collect::<Vec<_>>()
        .join(", ")
}

fn writable_columns(table: &TableSpec) -> impl Iterator<Item = &ColumnSpec> {
    table.columns.iter().filter(|c| c.is_writable())
}

/// `SELECT {columns} FROM {schema}.{table} WHERE {key} = @{key};`
pub fn get_by_key_statement(table: &TableSpec, key: &ColumnSpec, quote: bool) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = @{};",
        column_list(table, quote),
        qualified_table(table, quote),
        quoted(&key.name, quote),
        key.name
    )
}

/// `SELECT {columns} FROM {schema}.{table};`
pub fn get_all_statement(table: &TableSpec, quote: bool) -> String {
    format!(
        "SELECT {} FROM {};",
        column_list(table, quote),
        qualified_table(table, quote)
    )
}

/// `INSERT {schema}.{table}({columns}) VALUES ({parameters});`
///
/// Identity and computed columns are omitted from both lists. A table with
/// only identity/computed columns yields empty lists rather than failing.
pub fn insert_statement(table: &TableSpec, quote: bool) -> String {
    let columns = writable_columns(table)
        .map(|c| quoted(&c.name, quote))
        .collect::<Vec<_>>()
        .join(", ");
    let parameters = writable_columns(table)
        .map(|c| format!("@{}", c.name))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT {}({}) VALUES ({});",
        qualified_table(table, quote),
        columns,
        parameters
    )
}

/// `UPDATE {schema}.{table} SET {assignments} WHERE {key} = @{key};`
///
/// Identity and computed columns are omitted from the SET list.
pub fn update_statement(table: &TableSpec, key: &ColumnSpec, quote: bool) -> String {
    let assignments = writable_columns(table)
        .map(|c| format!("{} = @{}", quoted(&c.name, quote), c.name))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "UPDATE {} SET {} WHERE {} = @{};",
        qualified_table(table, quote),
        assignments,
        quoted(&key.name, quote),
        key.name
    )
}

/// `DELETE {schema}.{table} WHERE {key} = @{key};`
pub fn delete_statement(table: &TableSpec, key: &ColumnSpec, quote: bool) -> String {
    format!(
        "DELETE {} WHERE {} = @{};",
        qualified_table(table, quote),
        quoted(&key.name, quote),
        key.name
    )
}

#[cfg(test)]
mod tests {
    use tabula_ir::SqlServerType;

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

    fn key(table: &TableSpec) -> &ColumnSpec {
        &table.columns[0]
    }

    #[test]
    fn test_get_by_key_quoted_and_unquoted() {
        let table = customer();
        assert_eq!(
            get_by_key_statement(&table, key(&table), true),
            "SELECT [Id], [FirstName], [LastName] FROM [dbo].[Customer] WHERE [Id] = @Id;"
        );
        assert_eq!(
            get_by_key_statement(&table, key(&table), false),
            "SELECT Id, FirstName, LastName FROM dbo.Customer WHERE Id = @Id;"
        );
    }

    #[test]
    fn test_get_all() {
        assert_eq!(
            get_all_statement(&customer(), true),
            "SELECT [Id], [FirstName], [LastName] FROM [dbo].[Customer];"
        );
    }

    #[test]
    fn test_insert_excludes_identity_and_computed() {
        let mut table = customer();
        table
            .columns
            .push(ColumnSpec::new("FullName", SqlServerType::NVarChar).computed());

        assert_eq!(
            insert_statement(&table, true),
            "INSERT [dbo].[Customer]([FirstName], [LastName]) VALUES (@FirstName, @LastName);"
        );
    }

    #[test]
    fn test_insert_with_only_unwritable_columns() {
        let table = TableSpec::new("dbo", "Ledger").with_columns(vec![
            ColumnSpec::new("Id", SqlServerType::Int).identity(),
            ColumnSpec::new("Version", SqlServerType::Timestamp).computed(),
        ]);
        assert_eq!(
            insert_statement(&table, true),
            "INSERT [dbo].[Ledger]() VALUES ();"
        );
    }

    #[test]
    fn test_update_excludes_identity_and_computed() {
        let table = customer();
        assert_eq!(
            update_statement(&table, key(&table), true),
            "UPDATE [dbo].[Customer] SET [FirstName] = @FirstName, [LastName] = @LastName WHERE [Id] = @Id;"
        );
    }

    #[test]
    fn test_delete() {
        let table = customer();
        assert_eq!(
            delete_statement(&table, key(&table), true),
            "DELETE [dbo].[Customer] WHERE [Id] = @Id;"
        );
        assert_eq!(
            delete_statement(&table, key(&table), false),
            "DELETE dbo.Customer WHERE Id = @Id;"
        );
    }

    #[test]
    fn test_parameters_are_never_quoted() {
        let table = customer();
        let update = update_statement(&table, key(&table), true);
        assert!(update.contains("@FirstName"));
        assert!(!update.contains("@[FirstName]"));
        assert!(!update.contains("[@FirstName]"));
    }
}
