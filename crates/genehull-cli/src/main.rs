//! GeneHull command-line front end.
//!
//! Computes parametric hull offset tables from the bundled parameter
//! catalog (or an external schema document) and exports them as a
//! structured JSON document or a flat CSV table. Runs entirely
//! in-process — no GUI, no CAD host.
//!
//! Usage:
//!   genehull schema
//!   genehull compute --set Lwl=10.0 --set Tc=0.45
//!   genehull export --json hull.json --csv hull.csv
//!
//! Set `RUST_LOG=info` for progress logging.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;

use genehull_logic::engine;
use genehull_logic::export;
use genehull_logic::params::ParameterSet;
use genehull_logic::report;
use genehull_logic::schema;

/// Parametric small-craft hull offset generator.
#[derive(Parser)]
#[command(name = "genehull", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the input parameter catalog with defaults and units
    Schema {
        /// Read the catalog from an external schema document
        #[arg(long, value_name = "PATH")]
        schema: Option<PathBuf>,
    },
    /// Compute the offset table and print a summary
    Compute {
        #[command(flatten)]
        inputs: InputArgs,
        /// Rows to preview from each end of the table
        #[arg(long, default_value_t = 10)]
        preview: usize,
    },
    /// Compute the offset table and write it to disk
    Export {
        #[command(flatten)]
        inputs: InputArgs,
        /// Structured JSON document target
        #[arg(long, value_name = "PATH")]
        json: Option<PathBuf>,
        /// Flat CSV table target
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,
    },
}

/// Parameter sourcing shared by `compute` and `export`.
#[derive(Args)]
struct InputArgs {
    /// Read defaults from an external schema document
    #[arg(long, value_name = "PATH")]
    schema: Option<PathBuf>,
    /// Override a parameter, e.g. --set Lwl=10.0 (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE")]
    set: Vec<String>,
}

impl InputArgs {
    /// Build the parameter set: schema defaults plus overrides.
    ///
    /// Override values that parse as numbers are stored numerically;
    /// anything else is kept as text so the engine rejects it loudly
    /// instead of silently substituting a default.
    fn parameter_set(&self) -> Result<ParameterSet> {
        let mut params = match &self.schema {
            Some(path) => schema::defaults_from(&schema::catalog_from_path(path)?),
            None => schema::load_defaults()?,
        };
        for entry in &self.set {
            let (name, value) = entry
                .split_once('=')
                .with_context(|| format!("--set expects NAME=VALUE, got `{entry}`"))?;
            match value.trim().parse::<f64>() {
                Ok(n) => params.set(name, n),
                Err(_) => params.set(name, value),
            }
        }
        Ok(params)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Schema { schema: path } => print_schema(path.as_deref()),
        Commands::Compute { inputs, preview } => run_compute(&inputs, preview),
        Commands::Export { inputs, json, csv } => run_export(&inputs, json, csv),
    }
}

fn print_schema(path: Option<&std::path::Path>) -> Result<()> {
    let catalog = match path {
        Some(p) => schema::catalog_from_path(p)?,
        None => schema::catalog()?,
    };

    // Spreadsheet row order where known; BTreeMap name order breaks ties.
    let mut entries: Vec<_> = catalog.iter().collect();
    entries.sort_by_key(|(_, spec)| spec.row.unwrap_or(u32::MAX));

    println!("{:<14} {:>10}  {:<7} {}", "Parameter", "Default", "Unit", "Description");
    for (name, spec) in entries {
        println!(
            "{:<14} {:>10}  {:<7} {}",
            name,
            spec.value,
            spec.unit.as_deref().unwrap_or(""),
            spec.comment
        );
    }
    println!("\n{} parameters", catalog.len());
    Ok(())
}

fn run_compute(inputs: &InputArgs, preview: usize) -> Result<()> {
    let params = inputs.parameter_set()?;
    let hull = engine::compute(&params)?;
    info!("computed {} offset points", hull.table.len());
    print!("{}", report::render(&hull, preview));
    Ok(())
}

fn run_export(inputs: &InputArgs, json: Option<PathBuf>, csv: Option<PathBuf>) -> Result<()> {
    if json.is_none() && csv.is_none() {
        bail!("nothing to do: pass --json and/or --csv");
    }

    let params = inputs.parameter_set()?;
    let hull = engine::compute(&params)?;
    info!("computed {} offset points", hull.table.len());

    if let Some(path) = json {
        export::write_json(&path, &params, &hull)?;
        info!("wrote JSON document to {}", path.display());
        println!("{}", path.display());
    }
    if let Some(path) = csv {
        export::write_csv(&path, &hull.table)?;
        info!("wrote CSV table to {}", path.display());
        println!("{}", path.display());
    }
    Ok(())
}
