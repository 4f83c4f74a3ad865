//! CLI definitions and entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use super::commands;
use docval::DocumentType;
use docval::config::GlobalConfig;
use docval::output::OutputMode;

/// docval - Dominican identity document validation
#[derive(Parser, Debug)]
#[command(
    name = "docval",
    version,
    about = "Validate Dominican DNI, passport and RNC numbers",
    long_about = "Validate Dominican Republic identity document numbers.\n\n\
                  DNI and RNC numbers are checked for length, digits and check digit.\n\
                  Passport numbers are checked against the two letters + seven digits pattern.\n\
                  Numbers are checked exactly as given: strip dashes and spaces first."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a single document number
    Validate {
        /// Document type: dni, passport, rnc
        document_type: DocumentType,

        /// Document number, exactly as written on the document
        #[arg(allow_hyphen_values = true)]
        number: String,
    },

    /// Validate one document per line of a file ("-" reads stdin)
    Batch {
        /// Input file
        file: PathBuf,

        /// Treat every line as a number of this type
        #[arg(short = 't', long = "type")]
        document_type: Option<DocumentType>,
    },

    /// Compute the check digit for a DNI or RNC payload
    CheckDigit {
        /// Document type: dni, rnc
        document_type: DocumentType,

        /// Payload without its check digit (10 digits for DNI, 8 for RNC)
        payload: String,
    },

    /// List supported document types
    Types,

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigAction {
    /// Show the configuration file path and effective settings
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let (config_path, config) = match cli.config.clone() {
        Some(path) => {
            let config = GlobalConfig::load_from(&path);
            (path, config)
        },
        None => (GlobalConfig::config_path(), GlobalConfig::load()),
    };
    let config = config.context("failed to load configuration")?;

    let output_mode = if cli.json || config.output.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    if output_mode == OutputMode::Json || !config.output.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Some(Command::Validate {
            document_type,
            number,
        }) => {
            commands::validate(document_type, &number, output_mode);
            Ok(())
        },
        Some(Command::Batch {
            file,
            document_type,
        }) => commands::batch(&file, document_type.or(config.default_type), output_mode),
        Some(Command::CheckDigit {
            document_type,
            payload,
        }) => commands::check_digit(document_type, &payload, output_mode),
        Some(Command::Types) => {
            commands::types(output_mode);
            Ok(())
        },
        Some(Command::Config { action }) => {
            commands::config(action, &config_path, config, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": docval::VERSION
                    })
                );
            } else {
                println!("docval v{}", docval::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": docval::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("docval v{}", docval::VERSION);
                println!("\nRun 'docval --help' for usage");
                println!("Run 'docval validate dni 00113918205' to try it");
            }
            Ok(())
        },
    }
}
