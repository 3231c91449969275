//! Command-line interface implementation for plugsmith.
//! Provides argument parsing and help text formatting using clap.

use crate::constants::DEFAULT_CONFIG_CLASS;
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for plugsmith.
#[derive(Parser, Debug)]
#[command(author, version, about = "plugsmith: Bukkit plugin scaffolding and zLib configuration class generator", long_about = None)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand, Debug)]
pub enum Action {
    /// Print a zLib configuration class for a YAML configuration file
    Schema {
        /// Path to the YAML configuration file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Package declared by the generated class
        #[arg(short, long)]
        package: Option<String>,

        /// Name of the generated class
        #[arg(short, long, default_value = DEFAULT_CONFIG_CLASS)]
        class_name: String,
    },

    /// Create a new Bukkit plugin project
    New {
        /// Read the answers as a JSON or YAML document from stdin
        /// instead of asking for them.
        #[arg(short, long)]
        stdin: bool,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 after printing the help if arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::MissingRequiredArgument
            | ErrorKind::MissingSubcommand
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            }
            _ => e.exit(),
        },
    }
}
