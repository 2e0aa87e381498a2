mod error_formatter;
mod formatter;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dimgen::{
    catalog, evaluate_dimension, format_dimension, DimgenError, Generator, GeneratorOptions,
    UnitSystemDefinition,
};
use formatter::Formatter;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "dimgen")]
#[command(about = "Generates compile-time dimensional analysis for systems of physical units.")]
#[command(
    long_about = "dimgen compiles unit-system definitions (.units files) into Rust source that encodes every physical dimension as type-level exponents.\nCode built on the generated types rejects adding meters to seconds at compile time."
)]
#[command(version)]
struct Cli {
    /// Log each emitted section to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Rust source for every unit system in a .units file
    ///
    /// All systems in the file are validated before anything is written;
    /// a single invalid system leaves the output directory untouched.
    Generate {
        /// The .units file to compile
        file: PathBuf,
        /// Directory the output targets are resolved against (default: the file's directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Path the generated code imports its runtime traits from
        #[arg(long, value_name = "PATH")]
        runtime: Option<String>,
        /// Document the base units in a table at the top of each file
        #[arg(long)]
        docs: bool,
    },
    /// Generate Rust source for a built-in unit system
    ///
    /// Built-in systems: SI, CGS, MKS, FPS, UCUM, U
    Builtin {
        /// Name of the built-in system (case-insensitive)
        name: String,
        /// Directory to write the generated file into
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
        /// Path the generated code imports its runtime traits from
        #[arg(long, value_name = "PATH")]
        runtime: Option<String>,
        /// Document the base units in a table at the top of the file
        #[arg(long)]
        docs: bool,
    },
    /// List all unit systems with their base unit counts
    ///
    /// Scans the workspace for .units files and displays every system they
    /// declare, followed by the built-in systems.
    List {
        /// Workspace root directory containing .units files
        #[arg(default_value = ".")]
        root: PathBuf,
    },
    /// Show the base units of a unit system
    Show {
        /// Name of the system, from the workspace or the built-ins
        name: String,
        /// Workspace root directory containing .units files
        #[arg(short = 'd', long = "dir", default_value = ".")]
        workdir: PathBuf,
        /// Print the definition as JSON
        #[arg(long)]
        json: bool,
    },
    /// Evaluate a dimension expression such as "Kilogram * Meter / Second^2"
    Dim {
        /// Name of the system, from the workspace or the built-ins
        name: String,
        /// Product of powers of base units; fractional powers as Unit^1/2
        expression: String,
        /// Workspace root directory containing .units files
        #[arg(short = 'd', long = "dir", default_value = ".")]
        workdir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Generate {
            file,
            out,
            runtime,
            docs,
        } => generate_command(file, out.as_deref(), runtime.as_deref(), *docs),
        Commands::Builtin {
            name,
            out,
            runtime,
            docs,
        } => builtin_command(name, out, runtime.as_deref(), *docs),
        Commands::List { root } => list_command(root),
        Commands::Show {
            name,
            workdir,
            json,
        } => show_command(workdir, name, *json),
        Commands::Dim {
            name,
            expression,
            workdir,
        } => dim_command(workdir, name, expression),
    };

    if let Err(e) = result {
        if let Some(dimgen_err) = e.downcast_ref::<DimgenError>() {
            eprintln!("{}", error_formatter::format_error(dimgen_err));
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "dimgen=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn generator(runtime: Option<&str>, docs: bool) -> Generator {
    let mut options = GeneratorOptions {
        emit_unit_table: docs,
        ..GeneratorOptions::default()
    };
    if let Some(runtime) = runtime {
        options.runtime_crate = runtime.to_string();
    }
    Generator::with_options(options)
}

fn generate_command(
    file: &Path,
    out: Option<&Path>,
    runtime: Option<&str>,
    docs: bool,
) -> Result<()> {
    let definitions = load_file(file)?;
    if definitions.is_empty() {
        anyhow::bail!("no unit systems found in {}", file.display());
    }

    let out_dir = match out {
        Some(dir) => dir.to_path_buf(),
        None => file.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    let generator = generator(runtime, docs);
    let mut specs = Vec::new();
    let mut errors = Vec::new();
    let mut names = HashSet::new();
    let mut targets = HashMap::new();
    for definition in &definitions {
        if !names.insert(definition.name.as_str()) {
            errors.push(DimgenError::Specification(format!(
                "system '{}' is declared more than once in {}",
                definition.name,
                file.display()
            )));
        }
        match generator.validate(definition) {
            Ok(spec) => {
                let target = out_dir.join(spec.output_target());
                if let Some(previous) = targets.insert(target.clone(), definition.name.as_str()) {
                    errors.push(DimgenError::Specification(format!(
                        "systems '{}' and '{}' both write {}",
                        previous,
                        definition.name,
                        target.display()
                    )));
                }
                specs.push(spec);
            }
            Err(err) => errors.push(err),
        }
    }
    if let Some(error) = DimgenError::collect(errors) {
        return Err(error.into());
    }

    let mut written = Vec::new();
    for spec in &specs {
        let path = generator.write(spec, &out_dir)?;
        written.push((spec.system_name().to_string(), path));
    }

    print!("{}", Formatter::default().format_generated(&written));
    Ok(())
}

fn builtin_command(name: &str, out: &Path, runtime: Option<&str>, docs: bool) -> Result<()> {
    let definition =
        catalog::builtin(name).ok_or_else(|| DimgenError::UnknownSystem(name.to_string()))?;

    let path = generator(runtime, docs).generate_to_dir(&definition, out)?;

    print!(
        "{}",
        Formatter::default().format_generated(&[(definition.name.clone(), path)])
    );
    Ok(())
}

fn list_command(root: &Path) -> Result<()> {
    println!("Loading workspace from {}...", root.display());

    let (file_count, systems) = load_workspace(root)?;
    let builtins = catalog::all();

    println!();
    print!(
        "{}",
        Formatter::default().format_workspace_summary(file_count, &systems, &builtins)
    );
    Ok(())
}

fn show_command(workdir: &Path, name: &str, json: bool) -> Result<()> {
    let definition = find_system(workdir, name)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&definition)?);
    } else {
        print!("{}", Formatter::default().format_system(&definition));
    }
    Ok(())
}

fn dim_command(workdir: &Path, name: &str, expression: &str) -> Result<()> {
    let definition = find_system(workdir, name)?;
    let spec = Generator::new().validate(&definition)?;

    let dimension = evaluate_dimension(&spec, expression)?;
    let display = format_dimension(&spec, &dimension)?;

    print!(
        "{}",
        Formatter::default().format_dimension(&spec, expression, &dimension, &display)
    );
    Ok(())
}

/// Parse a single .units file
fn load_file(path: &Path) -> Result<Vec<UnitSystemDefinition>> {
    let source_id = path.to_string_lossy().to_string();
    let content = fs::read_to_string(path).map_err(|err| DimgenError::Io {
        path: source_id.clone(),
        message: err.to_string(),
    })?;

    let definitions = dimgen::parse(&content, Some(source_id), &Default::default())?;
    debug!(file = %path.display(), systems = definitions.len(), "parsed definitions");
    Ok(definitions)
}

/// Load all .units files from the workspace directory
fn load_workspace(workdir: &Path) -> Result<(usize, Vec<UnitSystemDefinition>)> {
    let mut file_count = 0;
    let mut systems = Vec::new();

    for entry in WalkDir::new(workdir).sort_by_file_name() {
        let entry = entry?;
        if entry.path().extension().and_then(|s| s.to_str()) == Some("units") {
            file_count += 1;
            systems.extend(load_file(entry.path())?);
        }
    }

    info!(files = file_count, systems = systems.len(), "loaded workspace");
    Ok((file_count, systems))
}

/// Look a system up in the workspace first, then among the built-ins
fn find_system(workdir: &Path, name: &str) -> Result<UnitSystemDefinition> {
    let (_, systems) = load_workspace(workdir)?;
    if let Some(definition) = systems.into_iter().find(|system| system.name == name) {
        return Ok(definition);
    }

    catalog::builtin(name).ok_or_else(|| DimgenError::UnknownSystem(name.to_string()).into())
}
