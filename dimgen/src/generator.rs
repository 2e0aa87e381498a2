use crate::emitter::{aliases, combination, formatter, header, scalar};
use crate::operators::{CombinationOp, ScalarOp};
use crate::system::{UnitSystemDefinition, UnitSystemSpec};
use crate::validator::Validator;
use crate::{DimgenError, DimgenResult, GeneratorLimits};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Crate the generated code imports its runtime traits and `Dim` from
pub const DEFAULT_RUNTIME_CRATE: &str = "dimensioned";

/// Knobs that change the generated text without changing its algebra
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Path of the consumer runtime, as written in the `use` line
    pub runtime_crate: String,

    /// Document the base units in a table at the top of the file
    pub emit_unit_table: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            runtime_crate: DEFAULT_RUNTIME_CRATE.to_string(),
            emit_unit_table: false,
        }
    }
}

/// The unit-system compiler.
///
/// Validation and rendering are pure; only [`Generator::write`] and
/// [`Generator::generate_to_dir`] touch the filesystem, and they do so once,
/// after the full text exists in memory.
pub struct Generator {
    validator: Validator,
    options: GeneratorOptions,
    limits: GeneratorLimits,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            validator: Validator,
            options: GeneratorOptions::default(),
            limits: GeneratorLimits::default(),
        }
    }
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GeneratorOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Create a generator with custom limits
    pub fn with_limits(mut self, limits: GeneratorLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    pub fn limits(&self) -> &GeneratorLimits {
        &self.limits
    }

    /// Check a definition; a mismatch between the parallel unit lists, or any
    /// other defect, is fatal and produces no output
    pub fn validate(&self, definition: &UnitSystemDefinition) -> DimgenResult<UnitSystemSpec> {
        self.validator.validate(definition, &self.limits)
    }

    /// Render the complete generated file for a validated system
    pub fn render(&self, spec: &UnitSystemSpec) -> DimgenResult<String> {
        let system = spec.system_name();
        let mut out = String::new();

        header::emit(spec, &self.options, &mut out)?;
        debug!(system, section = "header", arity = spec.arity(), "emitted section");

        combination::emit(spec, &CombinationOp::ALL, &mut out)?;
        debug!(
            system,
            section = "combination",
            operators = ?CombinationOp::ALL.map(|op| op.name()),
            "emitted section"
        );

        scalar::emit(spec, &ScalarOp::ALL, &mut out)?;
        debug!(
            system,
            section = "scalar",
            operators = ?ScalarOp::ALL.map(|op| op.name()),
            "emitted section"
        );

        formatter::emit(spec, &mut out)?;
        debug!(system, section = "formatter", "emitted section");

        aliases::emit_aliases(spec, &mut out)?;
        debug!(system, section = "aliases", "emitted section");

        aliases::emit_constants(spec, &mut out)?;
        debug!(
            system,
            section = "constants",
            skipped_extra = spec.extra_constants().len(),
            "emitted section"
        );

        Ok(out)
    }

    /// Validate and render in one step
    pub fn generate(&self, definition: &UnitSystemDefinition) -> DimgenResult<String> {
        let spec = self.validate(definition)?;
        self.render(&spec)
    }

    /// Render `spec` and write it to its output target under `out_dir`.
    /// An absolute output target ignores `out_dir`.
    pub fn write(&self, spec: &UnitSystemSpec, out_dir: &Path) -> DimgenResult<PathBuf> {
        let text = self.render(spec)?;
        let path = out_dir.join(spec.output_target());

        let io_error = |err: std::io::Error| DimgenError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        {
            let mut file = File::create(&path).map_err(io_error)?;
            file.write_all(text.as_bytes()).map_err(io_error)?;
            file.flush().map_err(io_error)?;
        }

        info!(
            system = spec.system_name(),
            path = %path.display(),
            bytes = text.len(),
            "wrote unit system"
        );
        Ok(path)
    }

    /// Validate `definition`, then render and write it. Nothing is written
    /// when validation fails.
    pub fn generate_to_dir(
        &self,
        definition: &UnitSystemDefinition,
        out_dir: &Path,
    ) -> DimgenResult<PathBuf> {
        let spec = self.validate(definition)?;
        self.write(&spec, out_dir)
    }
}
