use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

/// Top-level CLI argument parser for the `rp` command
#[derive(Parser)]
#[command(
    name = "rp",
    about = "refpress — structured API reference entries to HTML pages",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the `rp` CLI
#[derive(Subcommand)]
enum Commands {
    /// Validate a YAML module file
    Validate {
        /// Path to the module YAML file
        module: PathBuf,
    },
    /// Render one module page to stdout
    Render {
        /// Path to the module YAML file
        module: PathBuf,
        /// Path to the site chrome YAML (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print a module's table of contents (entry names and anchors)
    Toc {
        /// Path to the module YAML file
        module: PathBuf,
    },
    /// Show module status (title, entry and parameter counts)
    Status {
        /// Path to the module YAML file
        module: PathBuf,
    },
    /// Assemble the whole site and write one page per module
    Build {
        /// Directory containing module YAML files
        #[arg(default_value = "modules")]
        content_dir: PathBuf,
        /// Output directory for generated pages
        #[arg(short, long, default_value = "site")]
        output: PathBuf,
        /// Path to the site chrome YAML
        #[arg(long)]
        config: Option<PathBuf>,
        /// Also update the module list in an index page
        #[arg(long)]
        update_index: bool,
        /// Path to the index page (default: <output>/index.html)
        #[arg(long)]
        index_path: Option<PathBuf>,
    },
}

/// Dispatch a parsed CLI subcommand to its handler
fn run_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Validate { module } => commands::validate::run(&module),
        Commands::Render { module, config } => {
            commands::render::run(&module, config.as_deref())
        }
        Commands::Toc { module } => commands::toc::run(&module),
        Commands::Status { module } => commands::status::run(&module),
        Commands::Build {
            content_dir,
            output,
            config,
            update_index,
            index_path,
        } => commands::build::run(
            &content_dir,
            &output,
            config.as_deref(),
            update_index,
            index_path.as_deref(),
        ),
    }
}

/// Entry point: parse CLI arguments and run the selected subcommand
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run_command(cli.command) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
