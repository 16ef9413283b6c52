//! Lowering manifest tables into IR specifications.

use tabula_ir::{ColumnSpec, SpecSource, SqlServerType, TableSpec};

use crate::Manifest;

impl Manifest {
    /// Lower the declared tables into table specifications, in declaration
    /// order, with synthetic correlation ids.
    pub fn table_specs(&self) -> Vec<TableSpec> {
        self.tables
            .iter()
            .enumerate()
            .map(|(index, table)| {
                let object_id = (index + 1) as i32;
                let columns = table
                    .columns
                    .iter()
                    .map(|column| ColumnSpec {
                        table_id: object_id,
                        name: column.name.clone(),
                        // Validation has already rejected unknown names; a
                        // stray one degrades to the untyped fallback code.
                        type_code: SqlServerType::from_name(&column.ty)
                            .map_or(-1, SqlServerType::code),
                        length: column.length,
                        is_nullable: column.nullable,
                        is_identity: column.identity,
                        is_computed: column.computed,
                    })
                    .collect();

                TableSpec {
                    object_id,
                    schema: table.schema.clone(),
                    name: table.name.clone(),
                    columns,
                    source: SpecSource::SqlServer,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowering_preserves_order_and_assigns_ids() {
        let manifest = Manifest::from_source(
            r#"
            [output]
            directory = "generated"

            [[tables]]
            schema = "sales"
            name = "Order"

            [[tables.columns]]
            name = "Id"
            type = "int"
            nullable = false
            identity = true

            [[tables.columns]]
            name = "Total"
            type = "decimal"
            computed = true

            [[tables]]
            name = "Customer"
            "#,
            "tabula.toml",
        )
        .unwrap();

        let specs = manifest.table_specs();
        assert_eq!(specs.len(), 2);

        let order = &specs[0];
        assert_eq!(order.object_id, 1);
        assert_eq!(order.qualified_name(), "sales.Order");
        assert_eq!(order.columns.len(), 2);
        assert_eq!(order.columns[0].table_id, 1);
        assert_eq!(order.columns[0].type_code, SqlServerType::Int.code());
        assert!(order.columns[0].is_identity);
        assert!(!order.columns[0].is_nullable);
        assert!(order.columns[1].is_computed);
        assert!(order.columns[1].is_nullable);

        let customer = &specs[1];
        assert_eq!(customer.object_id, 2);
        assert_eq!(customer.schema, "dbo");
        assert!(customer.columns.is_empty());
    }
}
