//! CLI module for twa-shell
//!
//! Loads the manifest and runs one generation step per invocation.

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::constants::{DEFAULT_MANIFEST_FILE, ENV_MANIFEST};

/// twa-shell - Trusted Web Activity resource generator
#[derive(Parser)]
#[command(name = "twa-shell", version, about = "Generate Android resources for a Trusted Web Activity shell")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Manifest file (.json or .toml)
    #[arg(long, short, global = true, env = ENV_MANIFEST, default_value = DEFAULT_MANIFEST_FILE)]
    pub manifest: PathBuf,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also append logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the values resources and the shortcuts file into an Android project
    Generate {
        /// Android app module directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
        /// Do not write the values resource file
        #[arg(long)]
        skip_values: bool,
    },
    /// Print the resources derived from the manifest
    Resources {
        #[arg(long, value_enum, default_value_t = ResourceFormat::Text)]
        format: ResourceFormat,
    },
    /// Generate only the shortcuts file
    Shortcuts {
        /// Android app module directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
        /// Output path, overriding the project layout location
        #[arg(long, short, conflicts_with = "stdout")]
        output: Option<PathBuf>,
        /// Print the document instead of writing it
        #[arg(long)]
        stdout: bool,
    },
    /// Check the manifest and report every problem found
    Validate {
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceFormat {
    Text,
    Json,
    Gradle,
    Xml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Run the CLI
pub fn run() {
    let cli = Cli::parse();
    let _log_guard = crate::logging::init_logging(cli.verbose, cli.log_file.as_deref());

    let result = match cli.command {
        Commands::Generate { project_dir, skip_values } => {
            commands::generate(&cli.manifest, &project_dir, skip_values)
        }
        Commands::Resources { format } => commands::resources(&cli.manifest, format),
        Commands::Shortcuts { project_dir, output, stdout } => {
            commands::shortcuts(&cli.manifest, &project_dir, output.as_deref(), stdout)
        }
        Commands::Validate { format } => commands::validate(&cli.manifest, format),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "generation failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
