//! Key-column inference.

use tabula_ir::{ColumnSpec, TableSpec};

/// Select the single column used as the row identifier for CRUD statements.
///
/// Deterministic priority search with case-insensitive exact name matching:
/// `id`, `<table>id`, `<table>_id`, `key`, `<table>key`, `<table>_key`, then
/// the unique identity column. Each step is uniqueness-checked: when more
/// than one column matches a step's pattern, that step is a non-match and
/// the search moves on. Ambiguity is never resolved to an arbitrary column.
pub fn infer_key_column(table: &TableSpec) -> Option<&ColumnSpec> {
    let patterns = [
        "id".to_string(),
        format!("{}id", table.name),
        format!("{}_id", table.name),
        "key".to_string(),
        format!("{}key", table.name),
        format!("{}_key", table.name),
    ];

    for pattern in &patterns {
        if let Some(col) = unique_match(&table.columns, |c| c.name.eq_ignore_ascii_case(pattern)) {
            return Some(col);
        }
    }

    unique_match(&table.columns, |c| c.is_identity)
}

/// The single column satisfying the predicate, or `None` when there are zero
/// or several.
fn unique_match<'a>(
    columns: &'a [ColumnSpec],
    pred: impl Fn(&ColumnSpec) -> bool,
) -> Option<&'a ColumnSpec> {
    let mut matches = columns.iter().filter(|c| pred(c));
    match (matches.next(), matches.next()) {
        (Some(col), None) => Some(col),
        _ => None,
    }
}
