use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use serde::Serialize;
use tabula_codegen::infer_key_column;
use tabula_manifest::Manifest;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to tabula.toml (defaults to ./tabula.toml)
    #[arg(short, long, default_value = "tabula.toml")]
    pub config: PathBuf,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct CheckReport {
    tables: Vec<TableReport>,
    generators: Vec<String>,
}

#[derive(Serialize)]
struct TableReport {
    schema: String,
    name: String,
    columns: usize,
    /// The inferred key column, when one exists; tables without one still
    /// generate, with the keyed statements degraded.
    key_column: Option<String>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::open(&self.config).unwrap_or_exit();
        let specs = manifest.table_specs();

        let mut generators = Vec::new();
        if manifest.model.active {
            generators.push("csharp-model".to_string());
        }
        if manifest.queries.active {
            generators.push("tsql-query".to_string());
        }

        let report = CheckReport {
            tables: specs
                .iter()
                .map(|table| TableReport {
                    schema: table.schema.clone(),
                    name: table.name.clone(),
                    columns: table.columns.len(),
                    key_column: infer_key_column(table).map(|c| c.name.clone()),
                })
                .collect(),
            generators,
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("✓ {} is valid\n", self.config.display());

        println!(
            "  {} table{}:",
            report.tables.len(),
            if report.tables.len() == 1 { "" } else { "s" }
        );
        for table in &report.tables {
            let key = table.key_column.as_deref().unwrap_or("none");
            println!(
                "    {}.{} ({} column{}, key: {})",
                table.schema,
                table.name,
                table.columns,
                if table.columns == 1 { "" } else { "s" },
                key
            );
        }

        println!();
        if report.generators.is_empty() {
            println!("  no active generators");
        } else {
            println!("  active generators: {}", report.generators.join(", "));
        }

        Ok(())
    }
}
