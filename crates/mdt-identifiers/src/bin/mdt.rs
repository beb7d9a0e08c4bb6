//! # mdt
//!
//! Command line front end: normalize, validate, verify or fetch the record
//! for one identifier.

use clap::{Parser, Subcommand};
use mdt_identifiers::{MdtConfig, SchemeKind, Verifier, VerifyError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Scholarly identifier tools.
#[derive(Parser, Debug)]
#[command(name = "mdt", version, about)]
struct Cli {
    /// Config file (defaults to $MDT_CONFIG, then ~/.mdt/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the canonical form.
    Normalize(IdArgs),
    /// Check format and checksum.
    Validate(IdArgs),
    /// Confirm the identifier with its registry.
    Verify(IdArgs),
    /// Fetch the registry's JSON record (DOI, ISBN, ISSN).
    Object(IdArgs),
    /// List supported identifier types.
    Types,
}

#[derive(clap::Args, Debug)]
struct IdArgs {
    /// Identifier type, e.g. doi, orcid, isbn
    #[arg(value_name = "TYPE")]
    kind: SchemeKind,
    identifier: String,
}

const UNSUPPORTED: u8 = 3;

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("mdt_identifiers=debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<MdtConfig, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => MdtConfig::from_file(path)?,
        None => MdtConfig::load_standard()?,
    };
    Ok(config)
}

fn flag(ok: bool) -> ExitCode {
    println!("{ok}");
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match cli.command {
        Commands::Types => {
            for kind in SchemeKind::all() {
                println!("{}", kind.name());
            }
            ExitCode::SUCCESS
        }
        Commands::Normalize(args) => {
            println!("{}", args.kind.scheme().normalize(&args.identifier));
            ExitCode::SUCCESS
        }
        Commands::Validate(args) => flag(args.kind.scheme().validate(&args.identifier)),
        Commands::Verify(args) => {
            let verifier = Verifier::new(&load_config(cli.config.as_ref())?)?;
            match verifier.verify(args.kind.scheme(), &args.identifier).await {
                Ok(found) => flag(found),
                Err(VerifyError::Unsupported { .. }) => {
                    println!("undefined");
                    ExitCode::from(UNSUPPORTED)
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Object(args) => {
            let verifier = Verifier::new(&load_config(cli.config.as_ref())?)?;
            match verifier.get_object(args.kind.scheme(), &args.identifier).await {
                Ok(Some(record)) => {
                    println!("{}", serde_json::to_string_pretty(&record)?);
                    ExitCode::SUCCESS
                }
                Ok(None) => {
                    println!("undefined");
                    ExitCode::FAILURE
                }
                Err(VerifyError::Unsupported { .. }) => {
                    println!("undefined");
                    ExitCode::from(UNSUPPORTED)
                }
                Err(e) => return Err(e.into()),
            }
        }
    };

    Ok(code)
}
