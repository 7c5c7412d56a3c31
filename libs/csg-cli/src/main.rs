//! CSG command-line interface.
//!
//! Build geometry trees from parameter files:
//! ```sh
//! csg build phantom.txt
//! csg build phantom.txt --grid 200 --json
//! csg check phantom.txt
//! ```
//!
//! Logging goes to stderr and honors `RUST_LOG` (default `info`).

mod report;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use config::constants::DEFAULT_VOLUME_GRID;
use csg_geometry::{GeometryBuilder, VolumeStore};
use csg_params::ParameterStore;
use tracing_subscriber::EnvFilter;

use report::BuildReport;

#[derive(Parser)]
#[command(name = "csg")]
#[command(about = "Build two-primitive CSG geometry from parameter files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the volume tree and report every placed volume.
    Build {
        /// Path to the parameter file.
        file: PathBuf,
        /// Cells per axis for sampled volumes of composite solids.
        #[arg(long, default_value_t = DEFAULT_VOLUME_GRID)]
        grid: u32,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Build the volume tree and report only success or the failure.
    Check {
        /// Path to the parameter file.
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "Geometry construction failed");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Build { file, grid, json } => {
            let volumes = build(&file)?;
            let report = BuildReport::new(&volumes, grid);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.render_text());
            }
            Ok(())
        }
        Commands::Check { file } => {
            let volumes = build(&file)?;
            println!(
                "{}: {} volumes built",
                file.display(),
                volumes.physical_count()
            );
            Ok(())
        }
    }
}

fn build(path: &Path) -> anyhow::Result<VolumeStore> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let params = ParameterStore::parse(&source)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    tracing::info!(file = %path.display(), parameters = params.len(), "Parameters loaded");
    let volumes = GeometryBuilder::new().build(&params)?;
    Ok(volumes)
}
