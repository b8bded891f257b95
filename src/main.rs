//! servicepack CLI - compiles per-service YAML definitions into one JSON bundle
//!
//! Usage: servicepack <COMMAND>
//!
//! Commands:
//!   build   Aggregate sources and rewrite the output file
//!   check   Verify the output file is up to date without writing

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;

use servicepack::config::{Config, ConfigWarning};
use servicepack::domain::entities::ParsedEntity;
use servicepack::{
    discover_entity_names, ContentValidator, ContentViolation, EntityName, Freshness, LocalFs,
    PackError, RewriteUseCase,
};

/// servicepack - compiles per-service YAML definitions into one JSON bundle
#[derive(Parser, Debug)]
#[command(name = "servicepack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Emit one JSON event per line instead of human-readable output
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (defaults to ./servicepack.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate sources and rewrite the output file
    Build(RunArgs),

    /// Verify the output file is up to date without writing (exit 1 if stale)
    Check(RunArgs),
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    /// Directory holding one source file per service
    #[arg(short, long, value_name = "DIR")]
    source: Option<PathBuf>,

    /// Output file to rewrite
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Key wrapping the service list in the output document
    #[arg(long)]
    key: Option<String>,

    /// Skip SVG icon validation
    #[arg(long)]
    no_validate: bool,

    /// Services to include (default: every source file in the directory)
    names: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    servicepack::logging::init(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            print_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let (mut config, warnings) = Config::load_or_default(cli.config.as_deref())?;
    print_warnings(&warnings, cli.json);

    match &cli.command {
        Commands::Build(args) => {
            apply_args(&mut config, args);
            cmd_build(&config, args, cli.json)
        }
        Commands::Check(args) => {
            apply_args(&mut config, args);
            cmd_check(&config, args, cli.json)
        }
    }
}

/// CLI flags override config file and environment
fn apply_args(config: &mut Config, args: &RunArgs) {
    if let Some(source) = &args.source {
        config.sources.dir = source.clone();
    }
    if let Some(output) = &args.output {
        config.output.path = output.clone();
    }
    if let Some(key) = &args.key {
        config.output.key = key.clone();
    }
    if args.no_validate {
        config.validation.svg_icons = false;
    }
}

fn resolve_names(config: &Config, args: &RunArgs) -> Result<Vec<EntityName>> {
    if args.names.is_empty() {
        let names = discover_entity_names(&config.sources.dir, &config.sources.extension)?;
        Ok(names)
    } else {
        Ok(EntityName::parse_all(args.names.iter().cloned())?)
    }
}

fn validator(config: &Config) -> impl ContentValidator {
    let icons = config.validation.svg_icons.then(|| config.icon_validator());
    move |entities: &[ParsedEntity]| -> Result<(), Vec<ContentViolation>> {
        match &icons {
            Some(icons) => icons.validate(entities),
            None => Ok(()),
        }
    }
}

fn cmd_build(config: &Config, args: &RunArgs, json: bool) -> Result<ExitCode> {
    let names = resolve_names(config, args)?;
    let options = config.rewrite_options();
    if json {
        emit_start("build", names.len())?;
    }
    let report = RewriteUseCase::new(LocalFs::new(), validator(config)).execute(&names, &options)?;

    if json {
        emit(json!({
            "event": "complete",
            "command": "build",
            "output": report.output.display().to_string(),
            "entities": report.entity_count,
            "bytes": report.bytes,
            "digest": report.digest.as_str(),
        }))?;
    } else {
        println!(
            "Wrote {} services to {} ({} bytes, {})",
            report.entity_count,
            report.output.display(),
            report.bytes,
            report.digest
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_check(config: &Config, args: &RunArgs, json: bool) -> Result<ExitCode> {
    let names = resolve_names(config, args)?;
    let options = config.rewrite_options();
    if json {
        emit_start("check", names.len())?;
    }
    let freshness = RewriteUseCase::new(LocalFs::new(), validator(config)).check(&names, &options)?;

    if json {
        let status = match &freshness {
            Freshness::UpToDate => "up_to_date",
            Freshness::Missing => "missing",
            Freshness::Stale { .. } => "stale",
        };
        emit(json!({
            "event": "check",
            "status": status,
            "output": options.output.display().to_string(),
        }))?;
        emit(json!({
            "event": "complete",
            "command": "check",
            "up_to_date": freshness.is_up_to_date(),
        }))?;
    } else {
        match &freshness {
            Freshness::UpToDate => println!("{} is up to date", options.output.display()),
            Freshness::Missing => println!(
                "{} does not exist; run `servicepack build`",
                options.output.display()
            ),
            Freshness::Stale { diff } => {
                println!(
                    "{} is stale; run `servicepack build`",
                    options.output.display()
                );
                print!("{}", diff);
            }
        }
    }

    Ok(if freshness.is_up_to_date() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn emit_start(command: &str, services: usize) -> Result<()> {
    emit(json!({
        "event": "start",
        "command": command,
        "services": services,
    }))
}

/// Write a single NDJSON event to stdout
fn emit(event: serde_json::Value) -> Result<()> {
    let line = serde_json::to_string(&event).context("serialize event")?;
    let mut out = io::stdout().lock();
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

fn print_warnings(warnings: &[ConfigWarning], json: bool) {
    for warning in warnings {
        if json {
            let _ = emit(json!({
                "event": "warning",
                "message": warning.to_string(),
            }));
        } else {
            eprintln!("[WARN] {}", warning);
        }
    }
}

fn print_error(err: &anyhow::Error, json: bool) {
    let pack = err.downcast_ref::<PackError>();

    if json {
        let mut event = json!({
            "event": "error",
            "message": err.to_string(),
        });
        if let Some(pack) = pack {
            event["kind"] = json!(error_kind(pack));
            match pack {
                PackError::InvalidSources { failures } => {
                    event["failed"] = json!(failures
                        .iter()
                        .map(|f| f.name.as_str())
                        .collect::<Vec<_>>());
                }
                PackError::InvalidContent { violations } => {
                    event["violations"] = json!(violations
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>());
                }
                _ => {}
            }
        }
        let _ = emit(event);
        return;
    }

    match pack {
        Some(PackError::InvalidSources { failures }) => {
            eprintln!("[ERROR] {} source file(s) could not be loaded:", failures.len());
            for failure in failures {
                eprintln!("  - {}", failure);
            }
        }
        Some(PackError::InvalidContent { violations }) => {
            eprintln!("[ERROR] content validation failed:");
            for violation in violations {
                eprintln!("  - {}", violation);
            }
        }
        _ => eprintln!("[ERROR] {:#}", err),
    }
}

fn error_kind(err: &PackError) -> &'static str {
    match err {
        PackError::InvalidSources { .. } => "invalid_sources",
        PackError::InvalidContent { .. } => "invalid_content",
        PackError::Write { .. } => "write_failure",
        PackError::InvalidEntityName { .. } => "invalid_entity_name",
        PackError::DirectoryNotFound { .. } => "directory_not_found",
        PackError::Config { .. } => "config",
        PackError::Serialize(_) => "serialize",
        PackError::Io(_) => "io",
    }
}
