//! panelkit: drive a docking workspace from the command line.
//!
//! Replays scripted host sessions (pointer events and host messages) against
//! a headless workspace and prints the resulting layout as JSON.

mod demo;
mod replay;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use panelkit_bridge::{HostBridge, MemoryParamHost};
use panelkit_common::PanelKitError;
use panelkit_config::PanelKitConfig;

#[derive(Parser)]
#[command(name = "panelkit", about = "Headless docking workspace driver")]
struct Args {
    /// Config file to use instead of the platform default.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter directive, e.g. `panelkit=debug`. Overrides the config.
    #[arg(long)]
    log_level: Option<String>,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply a JSON script of pointer events and host messages, then print
    /// the workspace.
    Replay {
        script: PathBuf,
        /// Initial host parameters as a JSON object.
        #[arg(long)]
        params: Option<String>,
    },
    /// Build a sample layout and node graph and print them.
    Demo,
}

fn load_config(path: Option<&Path>) -> Result<PanelKitConfig, PanelKitError> {
    match path {
        Some(path) => Ok(panelkit_config::load_from_path(path)?),
        None => Ok(panelkit_config::load_config().unwrap_or_else(|e| {
            eprintln!("panelkit: using default config ({e})");
            PanelKitConfig::default()
        })),
    }
}

fn init_logging(args: &Args, config: &PanelKitConfig) {
    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.filter_directive());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&directive).unwrap_or_else(|_| "panelkit=info".into()))
        .with_writer(std::io::stderr)
        .init();
}

fn memory_host(params: Option<&str>) -> Result<MemoryParamHost, PanelKitError> {
    let mut host = MemoryParamHost::new();
    if let Some(raw) = params {
        let values: serde_json::Map<String, serde_json::Value> = serde_json::from_str(raw)
            .map_err(|e| PanelKitError::Other(format!("invalid --params: {e}")))?;
        for (id, value) in values {
            host.insert(id, value);
        }
    }
    Ok(host)
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String, PanelKitError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    text.map_err(|e| PanelKitError::Other(e.to_string()))
}

fn run(args: &Args, config: &PanelKitConfig) -> Result<(), PanelKitError> {
    match &args.command {
        Command::Replay { script, params } => {
            let steps = replay::load_script(script)?;
            let host = memory_host(params.as_deref())?;
            let mut bridge = HostBridge::from_config(config, host)?;
            let report = replay::replay(&mut bridge, steps);
            tracing::info!(
                steps = report.steps,
                replies = report.replies.len(),
                alerts = report.alerts.len(),
                "replay finished"
            );
            for alert in &report.alerts {
                eprintln!("alert: {}: {}", alert.title, alert.body);
            }
            let state = bridge.workspace().workspace_state()?;
            println!("{}", to_json(&state, args.pretty)?);
        }
        Command::Demo => {
            let mut bridge = HostBridge::from_config(config, MemoryParamHost::new())?;
            let output = demo::run(&mut bridge, config.nodes.clone())?;
            println!("{}", to_json(&output, args.pretty)?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("panelkit: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&args, &config);

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "panelkit failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn params_seed_the_host() {
        let host = memory_host(Some(r#"{"gain": 4, "mute": false}"#)).unwrap();
        assert_eq!(host.value("gain"), Some(&json!(4)));
        assert_eq!(host.value("mute"), Some(&json!(false)));
        assert!(memory_host(Some("[1, 2]")).is_err());
    }

    #[test]
    fn args_parse() {
        let args = Args::try_parse_from(["panelkit", "--log-level", "panelkit=debug", "replay", "s.json"]).unwrap();
        assert_eq!(args.log_level.as_deref(), Some("panelkit=debug"));
        assert!(matches!(args.command, Command::Replay { ref script, .. } if script == Path::new("s.json")));
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("nope.toml"))).is_err());
    }
}
