// src/main.rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use depscan::{
    Dependency, Dispatcher, EnvironmentListingHeuristic, Executable, Heuristic, PipLister,
    StandardHeuristics, TracingSink, UnavailableHeuristic,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "depscan")]
#[command(author, version, about = "Dependency version detection for provenance tracking", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the dependencies of a script
    Scan {
        /// Path to the script to analyze
        script: PathBuf,

        /// Name of the executable that will run the script (e.g. "Python")
        #[arg(short, long)]
        executable: String,

        /// pip program to use for environment listing
        #[arg(long, default_value = "pip")]
        pip: String,

        /// python program to query for the site-packages directory
        #[arg(long, default_value = "python")]
        python: String,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List every package installed in the Python environment
    Packages {
        /// pip program to use
        #[arg(long, default_value = "pip")]
        pip: String,

        /// python program to query for the site-packages directory
        #[arg(long, default_value = "python")]
        python: String,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn print_dependencies(dependencies: &[Dependency], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(dependencies)?);
        return Ok(());
    }

    if dependencies.is_empty() {
        println!("No dependencies found");
        return Ok(());
    }

    println!("{:<30} {:<15} Source", "Package", "Version");
    for dep in dependencies {
        println!("{:<30} {:<15} {}", dep.name, dep.version, dep.source);
    }
    Ok(())
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            script,
            executable,
            pip,
            python,
            json,
        } => {
            info!("Scanning {} for {} dependencies", script.display(), executable);

            let lister = Arc::new(PipLister::with_programs(pip, python));
            // Environment listing stands in for the Python walker until a
            // real import walker is wired in; the other languages fail
            // loudly rather than report an empty dependency list.
            let heuristics = StandardHeuristics {
                matlab: Arc::new(UnavailableHeuristic::new("MATLAB")),
                python: Arc::new(EnvironmentListingHeuristic::new(lister.clone())),
                neuron: Arc::new(UnavailableHeuristic::new("NEURON")),
                genesis: Arc::new(UnavailableHeuristic::new("GENESIS")),
                r: Arc::new(UnavailableHeuristic::new("R")),
            };
            let dispatcher =
                Dispatcher::standard(heuristics, lister, Arc::new(TracingSink::new()));

            let dependencies =
                dispatcher.find_dependencies(&script, &Executable::new(executable))?;
            print_dependencies(&dependencies, json)
        }
        Commands::Packages { pip, python, json } => {
            let lister = Arc::new(PipLister::with_programs(pip, python));
            let heuristic = EnvironmentListingHeuristic::new(lister);

            let dependencies = heuristic
                .find_dependencies(std::path::Path::new(""), &Executable::new("Python"))?;
            print_dependencies(&dependencies, json)
        }
    }
}
