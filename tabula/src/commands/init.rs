use std::{fs, path::PathBuf};

use clap::Args;
use eyre::{Context, Result, bail};

const STARTER: &str = r#"[output]
directory = "generated"

[model]
active = true
namespace = "App.Models"
annotations = false
exact-match-only = true

[queries]
active = true
quote-identifiers = true

[[tables]]
schema = "dbo"
name = "Customer"

[[tables.columns]]
name = "Id"
type = "int"
nullable = false
identity = true

[[tables.columns]]
name = "FirstName"
type = "varchar"
length = 50
nullable = false

[[tables.columns]]
name = "LastName"
type = "varchar"
length = 50
nullable = false
"#;

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create tabula.toml in (defaults to the current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

impl InitCommand {
    /// Run the init command
    pub fn run(&self) -> Result<()> {
        let manifest_path = self.path.join("tabula.toml");
        if manifest_path.exists() {
            bail!("'{}' already exists", manifest_path.display());
        }

        fs::create_dir_all(&self.path)
            .wrap_err_with(|| format!("failed to create '{}'", self.path.display()))?;
        fs::write(&manifest_path, STARTER)
            .wrap_err_with(|| format!("failed to write '{}'", manifest_path.display()))?;

        println!("Created {}", manifest_path.display());
        println!("Declare your tables, then run 'tabula generate'");

        Ok(())
    }
}
