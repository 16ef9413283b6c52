//! The generation service: registry and orchestration loop.

use eyre::{Result, WrapErr};
use indexmap::IndexMap;
use tabula_ir::{GeneratedFile, OutputKind};

use crate::{Error, FileGenerator, SpecificationProvider};

/// Generated artifacts keyed by output kind, one list entry per table
/// specification that generated successfully, in specification order.
pub type GenerationResult = IndexMap<OutputKind, Vec<GeneratedFile>>;

/// Drives artifact generation: owns the generator registry, pulls the
/// specification list once from the provider, and runs every registered
/// generator over every specification.
///
/// Failure handling is two-tiered and deliberate:
///
/// - a provider failure aborts the run and surfaces to the caller;
/// - a failure generating one artifact for one specification is logged with
///   the schema-qualified table name and absorbed — the artifact is simply
///   absent from the result.
pub struct GenerationService<P> {
    provider: P,
    generators: Vec<Box<dyn FileGenerator>>,
}

impl<P: SpecificationProvider> GenerationService<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            generators: Vec::new(),
        }
    }

    /// Register a generator. At most one generator per output kind may be
    /// registered.
    pub fn register(&mut self, generator: Box<dyn FileGenerator>) -> Result<(), Error> {
        let kind = generator.output_kind();
        if self.generators.iter().any(|g| g.output_kind() == kind) {
            return Err(Error::DuplicateGenerator(kind));
        }
        self.generators.push(generator);
        Ok(())
    }

    /// Remove the generator with the given output kind, if present.
    pub fn unregister(&mut self, kind: OutputKind) {
        self.generators.retain(|g| g.output_kind() != kind);
    }

    /// The output kinds currently registered, in registration order.
    pub fn registered_kinds(&self) -> Vec<OutputKind> {
        self.generators.iter().map(|g| g.output_kind()).collect()
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Pull the specification list and run every registered generator over
    /// every specification.
    ///
    /// A run with zero registered generators returns an empty result; a run
    /// where every specification fails per-artifact generation still returns
    /// successfully with empty lists per output kind.
    pub fn generate_all(&self) -> Result<GenerationResult> {
        let tables = self
            .provider
            .all_tables()
            .wrap_err("failed to pull table specifications from the provider")?;

        let mut result = GenerationResult::new();

        for generator in &self.generators {
            let kind = generator.output_kind();
            let mut files = Vec::with_capacity(tables.len());

            for table in &tables {
                match generator.generate(table) {
                    Ok(file) => files.push(file),
                    Err(error) => {
                        tracing::error!(
                            table = %table.qualified_name(),
                            kind = %kind,
                            error = %error,
                            "artifact generation failed; artifact skipped"
                        );
                    }
                }
            }

            result.insert(kind, files);
        }

        Ok(result)
    }
}
