//! # command-template CLI
//!
//! A command-line front end for the command template engine: loads a
//! TOML configuration of command templates and lists, describes,
//! validates, or resolves them against caller-supplied parameters.
//!
//! This plays the role the out-of-scope HTTP execution server would
//! play in production, giving the core a real, testable caller.
//!
//! ## Usage
//!
//! ```bash
//! command-template --config templates.toml list
//! command-template --config templates.toml show list_dir
//! command-template --config templates.toml resolve list_dir --param path=/tmp/work
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use command_template_cli::commands::{list_cmd, resolve_cmd, show_cmd, validate_cmd};
use command_template_cli::errors::Error;

/// command-template: load, inspect, and resolve declarative command templates
#[derive(Parser)]
#[command(name = "command-template")]
#[command(about = "Load, inspect, and resolve declarative command templates", long_about = None)]
struct Cli {
    /// Path to the TOML command template configuration document.
    #[arg(long)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// List the templates in the configuration, optionally filtered by category.
    List {
        #[arg(long)]
        category: Option<String>,
    },

    /// Show one template's command pattern, parameters, and execution policy.
    Show { name: String },

    /// Validate a parameter map against a template without resolving it.
    Validate {
        name: String,

        /// A parameter binding in KEY=VALUE form; may be repeated.
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },

    /// Validate and resolve a template into a vetted command string.
    Resolve {
        name: String,

        /// A parameter binding in KEY=VALUE form; may be repeated.
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },
}

fn run(cli: &Cli) -> Result<String, Error> {
    match &cli.command {
        Commands::List { category } => list_cmd::execute(&cli.config, category.as_deref()),
        Commands::Show { name } => show_cmd::execute(&cli.config, name),
        Commands::Validate { name, params } => validate_cmd::execute(&cli.config, name, params),
        Commands::Resolve { name, params } => resolve_cmd::execute(&cli.config, name, params),
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("COMMAND_TEMPLATE_LOG"))
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            e.log();
            std::process::exit(e.exit_code());
        }
    }
}
