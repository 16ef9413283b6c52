use std::path::PathBuf;

use clap::Args;
use dialoguer::Input;
use eyre::{Context, Result};
use tabula_codegen::{GenerationService, write_result};
use tabula_codegen_csharp::{CsharpModelGenerator, MatchMode};
use tabula_codegen_tsql::TsqlQueryGenerator;
use tabula_manifest::Manifest;

use super::UnwrapOrExit;
use crate::provider::ManifestTables;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to tabula.toml (defaults to ./tabula.toml)
    #[arg(short, long, default_value = "tabula.toml")]
    pub config: PathBuf,

    /// Output directory (overrides output.directory from the manifest)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print generated artifacts to stdout without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::open(&self.config).unwrap_or_exit();

        let provider = ManifestTables::new(manifest.table_specs());
        let mut service = GenerationService::new(provider);

        if manifest.model.active {
            let namespace = Self::resolve_namespace(&manifest)?;
            let mut generator = CsharpModelGenerator::new(namespace);
            if manifest.model.annotations {
                let mode = if manifest.model.exact_match_only {
                    MatchMode::Exact
                } else {
                    MatchMode::Contains
                };
                generator = generator.with_annotations(mode);
            }
            service.register(Box::new(generator))?;
        }

        if manifest.queries.active {
            service.register(Box::new(TsqlQueryGenerator::new(
                manifest.queries.quote_identifiers,
            )))?;
        }

        if service.is_empty() {
            println!(
                "No active generators; enable [model] or [queries] in {}",
                self.config.display()
            );
            return Ok(());
        }

        let result = service.generate_all()?;

        if self.dry_run {
            let mut total = 0;
            for (kind, files) in &result {
                for file in files {
                    total += 1;
                    println!("── {}/{} ──", kind.directory(), file.file_name);
                    println!("{}", file.contents);
                    println!();
                }
            }
            println!("── Summary ──");
            println!("{total} files would be generated");
            return Ok(());
        }

        let base = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&manifest.output.directory));
        let summary = write_result(&result, &base)
            .wrap_err("failed to write generated artifacts")?;

        println!(
            "Generated {} file{} into {}",
            summary.written.len(),
            if summary.written.len() == 1 { "" } else { "s" },
            base.display()
        );
        for (kind, files) in &result {
            println!(
                "  {}/: {} file{}",
                kind.directory(),
                files.len(),
                if files.len() == 1 { "" } else { "s" }
            );
        }

        Ok(())
    }

    fn resolve_namespace(manifest: &Manifest) -> Result<String> {
        if let Some(namespace) = manifest.model.namespace.as_deref() {
            if !namespace.trim().is_empty() {
                return Ok(namespace.to_string());
            }
        }

        // Manifest validation guarantees prompt-namespace is set here.
        Input::new()
            .with_prompt("C# model namespace")
            .interact_text()
            .wrap_err("failed to read the model namespace")
    }
}
