//! routemap CLI
//!
//! Command-line tool for inspecting a routing table described by a manifest.

use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use routemap::{Handler, Manifest, Route, Router};

/// Inspect and query a URL routing table.
#[derive(Parser)]
#[command(name = "routemap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Route manifest (JSON).
    #[arg(short, long, env = "ROUTEMAP_MANIFEST", default_value = "routes.json")]
    manifest: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the manifest and report the number of routes.
    Check,

    /// List registered routes.
    List {
        /// Only routes registered for this method.
        #[arg(short, long)]
        method: Option<String>,
    },

    /// Match a method and path against the table.
    Match {
        /// Method token (case-sensitive).
        method: String,
        /// Request path, already percent-decoded.
        path: String,
    },

    /// Build the URL of a named route.
    Url {
        /// Route name.
        name: String,
        /// Parameters as KEY=VALUE.
        params: Vec<String>,
    },
}

/// Splits `KEY=VALUE` arguments. Values may contain `=`.
fn parse_params(raw: &[String]) -> anyhow::Result<Vec<(&str, &str)>> {
    raw.iter()
        .map(|param| match param.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key, value)),
            _ => bail!("invalid parameter '{param}', expected KEY=VALUE"),
        })
        .collect()
}

fn describe<R>(route: &Route<R>) -> String {
    let handler = match route.handler() {
        Handler::Controller { target, action } => format!("{target}::{action}"),
        Handler::Callable(_) => "<callable>".to_string(),
    };
    format!(
        "{:<20} {:<30} {:<16} {}",
        route.name(),
        route.url(),
        route.methods().join(","),
        handler
    )
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let manifest = Manifest::from_path(&cli.manifest)
        .with_context(|| format!("failed to load manifest {}", cli.manifest.display()))?;
    let router: Router<()> = manifest
        .into_router()
        .with_context(|| format!("invalid route table in {}", cli.manifest.display()))?;

    match cli.command {
        Commands::Check => {
            info!(
                "{} routes across {} methods",
                router.len(),
                router.methods().len()
            );
        }

        Commands::List { method } => {
            let routes: Vec<&Route<()>> = match &method {
                Some(method) => router.routes(method).collect(),
                None => router.iter().collect(),
            };
            if routes.is_empty() {
                info!("No routes registered.");
            }
            for route in routes {
                println!("{}", describe(route));
            }
        }

        Commands::Match { method, path } => {
            let Some(matched) = router.match_route(&method, &path) else {
                info!("No route matches {method} {path}");
                return Ok(ExitCode::FAILURE);
            };
            let route = matched.route();
            let parameters: serde_json::Map<String, serde_json::Value> = matched
                .parameters()
                .iter()
                .map(|(k, v)| (k.to_string(), json!(v)))
                .collect();
            let output = json!({
                "name": route.name(),
                "url": route.url(),
                "handler": route.controller().map(|(target, action)| json!([target, action])),
                "parameters": parameters,
                "catch_all": matched.catch_all(),
                "metadata": route.metadata(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Commands::Url { name, params } => {
            let pairs = parse_params(&params)?;
            let display: Vec<(&str, &dyn Display)> = pairs
                .iter()
                .map(|(key, value)| (*key, value as &dyn Display))
                .collect();
            println!("{}", router.build_url(&name, &display)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
