//! envschema CLI: check the current environment against a TOML schema.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use envschema_rs::Schema;
use envschema_rs::telemetry::{TelemetryConfig, init_logging};

#[derive(Parser)]
#[command(name = "envschema", about = "Validate environment variables against a schema")]
struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the process environment; exit non-zero on the first failure
    Check {
        /// TOML schema file
        #[arg(long, short)]
        schema: PathBuf,
        /// Print validated values as JSON
        #[arg(long)]
        print: bool,
    },
    /// List the fields a schema declares
    Fields {
        /// TOML schema file
        #[arg(long, short)]
        schema: PathBuf,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(TelemetryConfig {
        default_level: cli.log_level,
        compact: true,
    });

    match cli.command {
        Command::Check { schema, print } => cmd_check(schema, print),
        Command::Fields { schema } => cmd_fields(schema),
    }
}

fn load_schema(path: &Path) -> anyhow::Result<Schema> {
    Schema::from_toml_file(path).with_context(|| format!("cannot load schema {}", path.display()))
}

fn cmd_check(path: PathBuf, print: bool) -> anyhow::Result<ExitCode> {
    let schema = load_schema(&path)?;

    match envschema_rs::validate_env(&schema) {
        Ok(env) => {
            if print {
                println!("{}", serde_json::to_string_pretty(&env)?);
            } else {
                println!("ok: {} variables valid", env.len());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::debug!(key = e.key(), reason = e.kind(), "environment check failed");
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn cmd_fields(path: PathBuf) -> anyhow::Result<ExitCode> {
    let schema = load_schema(&path)?;

    println!("{:<32} {:<10} DEFAULT", "NAME", "TYPE");
    for (name, rule) in schema.iter() {
        let default = rule
            .default_value()
            .map(ToString::to_string)
            .unwrap_or_else(|| "-".to_string());
        println!("{:<32} {:<10} {}", name, describe(rule.tag()), default);
    }
    Ok(ExitCode::SUCCESS)
}

fn describe(tag: &envschema_rs::TypeTag) -> String {
    match tag {
        envschema_rs::TypeTag::Base(ty) => ty.to_string(),
        envschema_rs::TypeTag::Enum(allowed) => allowed.join("|"),
    }
}
