mod commands;
mod demo;
mod script;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use sift_core::Catalog;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Sift incremental filter-expression builder.
#[derive(Parser)]
#[command(
    name = "sift",
    version,
    about = "Sift incremental filter-expression builder"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Catalog JSON file (defaults to the built-in demo catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the loaded catalog
    Catalog,

    /// Execute an event script and print the resulting session state
    Run {
        /// Path to the event script, or '-' for stdin
        script: PathBuf,
        /// Print the serialized text and suggestions after every event
        #[arg(long)]
        trace: bool,
    },

    /// Execute an event script and print only the resulting suggestions
    Suggest {
        /// Path to the event script, or '-' for stdin
        script: PathBuf,
    },

    /// Start an interactive session (one event per line)
    Repl,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let catalog = load_catalog(cli.catalog.as_deref(), cli.output);

    match cli.command {
        Commands::Catalog => {
            commands::catalog::cmd_catalog(&catalog, cli.output);
        }
        Commands::Run { script, trace } => {
            commands::run::cmd_run(catalog, &script, trace, cli.output);
        }
        Commands::Suggest { script } => {
            commands::suggest::cmd_suggest(catalog, &script, cli.output);
        }
        Commands::Repl => {
            commands::repl::cmd_repl(catalog);
        }
    }
}

/// Load the catalog file, or fall back to the built-in demo catalog.
fn load_catalog(path: Option<&Path>, output: OutputFormat) -> Catalog {
    let Some(path) = path else {
        return demo::demo_catalog();
    };
    let json = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            report_error(
                &format!("error reading catalog '{}': {}", path.display(), e),
                output,
            );
            process::exit(1);
        }
    };
    match Catalog::from_json(&json) {
        Ok(catalog) => catalog,
        Err(e) => {
            report_error(
                &format!("error loading catalog '{}': {}", path.display(), e),
                output,
            );
            process::exit(1);
        }
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat) {
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{{\"error\": \"{}\"}}", msg.replace('"', "\\\""));
        }
    }
}
