//! Game panel terminal client
//! 
//! Runs the same action cycle as the browser panel: the current state is
//! loaded first, then the requested action is sent and the resulting log and
//! state panel are printed.

mod config;
mod http_client;
mod surface;

use clap::{Parser, Subcommand};
use game_panel_core::{Action, ActionOutcome, Dispatcher, PanelError, KNOWN_ENEMIES, KNOWN_THEMES};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{Config, DEFAULT_CONFIG_PATH};
use http_client::ReqwestBackend;
use surface::TerminalSurface;

#[derive(Parser, Debug)]
#[command(name = "game-panel", version, about = "Drive the game dashboard backend from a terminal")]
struct Cli {
    /// Path to config.toml
    #[arg(long, env = "GAME_PANEL_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
enum Command {
    /// Show the current state
    State,
    /// Switch theme (stock backend: fantasy, scifi)
    Theme { name: String },
    /// Clear all enemies
    Reset,
    /// Build the next level
    Build,
    /// Spawn an enemy (stock backend: orc, dragon, goblin, drone, android, alien)
    Spawn { kind: String },
    /// Write a default config file and exit
    Init,
}

impl Command {
    /// Action to run after the initial state load
    fn action(&self) -> Option<Action> {
        match self {
            Command::State | Command::Init => None,
            Command::Theme { name } => Some(Action::set_theme(name.clone())),
            Command::Reset => Some(Action::Reset),
            Command::Build => Some(Action::BuildLevel),
            Command::Spawn { kind } => Some(Action::spawn(kind.clone())),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();
    
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "game_panel=info,game_panel_core=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    
    let cli = Cli::parse();
    
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> game_panel_core::Result<ExitCode> {
    if cli.command == Command::Init {
        return init_config(&cli.config);
    }
    
    let config = Config::load(&cli.config)?.with_env_overrides();
    let panel = config.panel();
    panel.validate()?;
    
    let timeout = (config.timeout_secs > 0).then(|| Duration::from_secs(config.timeout_secs));
    tracing::info!("Using backend {}", panel.endpoint("/"));
    let backend = ReqwestBackend::new(panel, timeout)?;
    let dispatcher = Dispatcher::new(backend, TerminalSurface::new());
    
    let mut outcome = dispatcher.load_state().await;
    if let Some(action) = cli.command.action() {
        warn_if_unknown(&action);
        outcome = dispatcher.dispatch(action).await;
    }
    
    dispatcher.surface().print();
    
    Ok(match outcome {
        ActionOutcome::Failed(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

fn init_config(path: &Path) -> game_panel_core::Result<ExitCode> {
    if path.exists() {
        eprintln!("{} already exists, leaving it untouched", path.display());
        return Ok(ExitCode::FAILURE);
    }
    Config::default()
        .save(path)
        .map_err(|e| PanelError::Config(format!("Error writing {}: {}", path.display(), e)))?;
    println!("Wrote {}", path.display());
    Ok(ExitCode::SUCCESS)
}

/// The backend decides what is valid; this only hints at likely typos
fn warn_if_unknown(action: &Action) {
    match action {
        Action::SetTheme { theme } if !KNOWN_THEMES.contains(&theme.as_str()) => {
            tracing::warn!("'{}' is not a stock theme, sending anyway", theme);
        }
        Action::Spawn { kind } if !KNOWN_ENEMIES.contains(&kind.as_str()) => {
            tracing::warn!("'{}' is not a stock enemy kind, sending anyway", kind);
        }
        _ => {}
    }
}
