mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::json;

use armid_core::{IdKind, Identifier, ParseMode, Registry};
use armid_network::schemas;
use armid_state::{
    BackendConfig, CheckConfig, CheckReport, Checker, Rewrite, StateFile, create_backend,
};

use crate::config::OutputConfig;

#[derive(Parser)]
#[command(name = "armid")]
#[command(about = "Parse, check and normalize resource-manager identifiers", long_about = None)]
struct Cli {
    /// Print debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List identifier kinds
    Kinds {
        /// Only list kinds whose name contains this text
        filter: Option<String>,
    },
    /// Parse an identifier as a given kind
    Parse {
        /// Kind name (see `armid kinds`)
        kind: String,
        id: String,

        /// Ignore the casing of fixed segments
        #[arg(long, short)]
        insensitive: bool,
    },
    /// List every kind an identifier parses as
    Detect {
        id: String,

        /// Ignore the casing of fixed segments
        #[arg(long, short)]
        insensitive: bool,
    },
    /// Build an identifier from its values
    Format {
        kind: String,
        /// Variable values in declared order
        values: Vec<String>,
    },
    /// State file commands
    State {
        #[command(subcommand)]
        command: StateCommands,
    },
}

#[derive(Subcommand)]
enum StateCommands {
    /// Check stored identifiers and attributes against resource schemas
    Check {
        #[arg(long, default_value = "armid.state.json")]
        path: PathBuf,

        /// Accept identifiers with API casing
        #[arg(long, short)]
        insensitive: bool,
    },
    /// Rewrite API-cased identifiers to canonical casing
    Normalize {
        #[arg(long, default_value = "armid.state.json")]
        path: PathBuf,

        /// Report rewrites without writing the state
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let output = OutputConfig::from_flags(
        cli.json,
        cli.no_color,
        std::env::var("NO_COLOR").ok().as_deref(),
    );
    output.apply();

    let registry = armid_network::registry();
    let result = match cli.command {
        Commands::Kinds { filter } => run_kinds(&registry, filter.as_deref(), &output),
        Commands::Parse {
            kind,
            id,
            insensitive,
        } => run_parse(&registry, &kind, &id, parse_mode(insensitive), &output),
        Commands::Detect { id, insensitive } => {
            run_detect(&registry, &id, parse_mode(insensitive), &output)
        }
        Commands::Format { kind, values } => run_format(&registry, &kind, &values, &output),
        Commands::State { command } => run_state_command(registry, command, &output).await,
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_mode(insensitive: bool) -> ParseMode {
    if insensitive {
        ParseMode::Insensitive
    } else {
        ParseMode::Strict
    }
}

fn identifier_json(id: &dyn Identifier) -> serde_json::Value {
    let fields: serde_json::Map<String, serde_json::Value> = id
        .fields()
        .into_iter()
        .map(|(label, value)| (label.to_string(), json!(value)))
        .collect();
    json!({ "kind": id.kind(), "id": id.id(), "fields": fields })
}

fn kind_line(kind: &IdKind) -> String {
    let case = if kind.insensitive {
        "insensitive"
    } else {
        "strict"
    };
    match kind.template() {
        Some(template) => format!("{} ({}, {})\n    {}", kind.name.bold(), kind.label, case, template),
        None => format!("{} ({}, {})", kind.name.bold(), kind.label, case),
    }
}

fn run_kinds(registry: &Registry, filter: Option<&str>, output: &OutputConfig) -> Result<(), String> {
    let kinds: Vec<&IdKind> = registry
        .iter()
        .filter(|k| filter.is_none_or(|f| k.name.contains(f)))
        .collect();

    if output.is_json() {
        let list: Vec<serde_json::Value> = kinds
            .iter()
            .map(|k| {
                json!({
                    "name": k.name,
                    "label": k.label,
                    "insensitive": k.insensitive,
                    "template": k.template(),
                })
            })
            .collect();
        println!("{}", serde_json::Value::Array(list));
        return Ok(());
    }

    for kind in kinds {
        println!("{}", kind_line(kind));
    }
    Ok(())
}

fn run_parse(
    registry: &Registry,
    kind: &str,
    input: &str,
    mode: ParseMode,
    output: &OutputConfig,
) -> Result<(), String> {
    let id = registry
        .parse(kind, input, mode)
        .map_err(|e| format!("Failed to parse {:?} as {}: {}", input, kind, e))?;

    if output.is_json() {
        println!("{}", identifier_json(id.as_ref()));
    } else {
        println!("{}", id.describe());
        if id.id() != input {
            println!("{} {}", "Canonical:".yellow(), id.id());
        }
    }
    Ok(())
}

fn run_detect(
    registry: &Registry,
    input: &str,
    mode: ParseMode,
    output: &OutputConfig,
) -> Result<(), String> {
    let found = registry.detect(input, mode);
    if found.is_empty() {
        return Err(format!("{:?} does not parse as any known kind", input));
    }

    if output.is_json() {
        let list: Vec<serde_json::Value> =
            found.iter().map(|id| identifier_json(id.as_ref())).collect();
        println!("{}", serde_json::Value::Array(list));
    } else {
        for id in &found {
            println!("{} {}", "•".green(), id.kind().bold());
        }
    }
    Ok(())
}

fn run_format(
    registry: &Registry,
    kind: &str,
    values: &[String],
    output: &OutputConfig,
) -> Result<(), String> {
    let entry = registry.get(kind).map_err(|e| e.to_string())?;
    let id = entry
        .build(values)
        .ok_or_else(|| format!("{} cannot be built from values; parse an existing ID instead", kind))?
        .map_err(|e| e.to_string())?;

    if output.is_json() {
        println!("{}", identifier_json(id.as_ref()));
    } else {
        println!("{}", id.id());
    }
    Ok(())
}

async fn run_state_command(
    registry: Registry,
    command: StateCommands,
    output: &OutputConfig,
) -> Result<(), String> {
    match command {
        StateCommands::Check { path, insensitive } => {
            let config = CheckConfig {
                mode: parse_mode(insensitive),
                rewrite: false,
            };
            run_state_check(registry, &path, config, output).await
        }
        StateCommands::Normalize { path, dry_run } => {
            let config = CheckConfig {
                mode: ParseMode::Strict,
                rewrite: !dry_run,
            };
            run_state_normalize(registry, &path, config, output).await
        }
    }
}

async fn read_state(path: &std::path::Path) -> Result<(BackendConfig, StateFile), String> {
    let config = BackendConfig::local(path.display().to_string());
    let backend = create_backend(&config).map_err(|e| e.to_string())?;
    let state = backend
        .read_state()
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("No state file at {}", path.display()))?;
    Ok((config, state))
}

async fn run_state_check(
    registry: Registry,
    path: &std::path::Path,
    config: CheckConfig,
    output: &OutputConfig,
) -> Result<(), String> {
    let (_, state) = read_state(path).await?;
    let checker = Checker::new(registry, schemas::all_schemas()).with_config(config);
    let report = checker.check(&state);

    if output.is_json() {
        println!("{}", report_json(&report));
    } else {
        print_report(&report);
    }

    if report.has_errors() {
        Err(format!("{} problem(s) found in state", report.error_count()))
    } else {
        Ok(())
    }
}

fn report_json(report: &CheckReport) -> serde_json::Value {
    let findings: Vec<serde_json::Value> = report
        .findings
        .iter()
        .map(|f| json!({ "error": f.is_error(), "message": f.to_string() }))
        .collect();
    json!({ "checked": report.checked, "findings": findings })
}

fn print_report(report: &CheckReport) {
    for finding in &report.findings {
        if finding.is_error() {
            println!("  {} {}", "✗".red(), finding);
        } else {
            println!("  {} {}", "!".yellow(), finding);
        }
    }
    if !report.has_errors() {
        println!(
            "{}",
            format!("✓ {} resources checked.", report.checked)
                .green()
                .bold()
        );
    }
}

async fn run_state_normalize(
    registry: Registry,
    path: &std::path::Path,
    config: CheckConfig,
    output: &OutputConfig,
) -> Result<(), String> {
    let (backend_config, mut state) = read_state(path).await?;
    let checker = Checker::new(registry, schemas::all_schemas()).with_config(config);
    let rewrites = checker.normalize(&mut state);

    if config.rewrite && !rewrites.is_empty() {
        let backend = create_backend(&backend_config).map_err(|e| e.to_string())?;
        backend
            .write_state(&state)
            .await
            .map_err(|e| e.to_string())?;
    }

    if output.is_json() {
        println!(
            "{}",
            json!({ "written": config.rewrite, "rewrites": rewrites })
        );
    } else {
        print_rewrites(&rewrites, config.rewrite);
    }
    Ok(())
}

fn print_rewrites(rewrites: &[Rewrite], written: bool) {
    if rewrites.is_empty() {
        println!("{}", "No identifiers need normalizing.".green());
        return;
    }
    for rewrite in rewrites {
        println!("  {} {}", "~".yellow(), rewrite.address.bold());
        println!("    {} {}", "-".red(), rewrite.from);
        println!("    {} {}", "+".green(), rewrite.to);
    }
    if written {
        println!("{}", format!("✓ {} identifier(s) normalized.", rewrites.len()).green().bold());
    } else {
        println!("{}", "Dry run: state not written.".cyan());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_json_lists_fields() {
        let registry = armid_network::registry();
        let id = registry
            .parse(
                "nat_gateway",
                "/subscriptions/s/resourceGroups/rg/providers/Microsoft.Network/natGateways/gw",
                ParseMode::Strict,
            )
            .unwrap();
        let value = identifier_json(id.as_ref());
        assert_eq!(value["kind"], "nat_gateway");
        assert_eq!(value["fields"]["NAT Gateway Name"], "gw");
    }

    #[test]
    fn format_command_rejects_wrong_value_count() {
        let registry = armid_network::registry();
        let output = OutputConfig::default();
        let err = run_format(&registry, "nat_gateway", &["s".to_string()], &output).unwrap_err();
        assert!(err.contains("takes 3 value(s)"), "{}", err);
        assert!(run_format(&registry, "flow_log", &[], &output).is_err());
    }

    #[test]
    fn report_json_counts() {
        let report = CheckReport {
            checked: 2,
            findings: vec![armid_state::Finding::UnknownResourceType {
                address: "x.y".to_string(),
            }],
        };
        let value = report_json(&report);
        assert_eq!(value["checked"], 2);
        assert_eq!(value["findings"][0]["error"], false);
    }
}
