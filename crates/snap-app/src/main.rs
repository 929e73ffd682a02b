use std::sync::Arc;

use clap::Parser;
use snap_config::Config;
use tokio::signal;
use tokio::task::JoinError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub mod cli;
pub mod commands;
pub mod controller;
pub mod events;
pub mod oneshot;
pub mod profile;
pub mod render;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests {
    mod event_flow_tests;
    mod profile_tests;
}

use self::cli::{Cli, Command, LogFormat, ProfileAction};
use self::controller::AppController;
use self::oneshot::{OneShot, build_view, format_view, parse_table_input};
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut cli = Cli::parse();
    init_tracing(cli.log_format);

    let request = match cli.command.take().unwrap_or(Command::Interactive) {
        Command::Profile { action } => return run_profile(&action),
        Command::Parse { file } => {
            let fields = parse_table_input(file.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&fields)?);
            return Ok(());
        }
        Command::Interactive => return run_interactive(load_state(&cli)?).await,
        Command::Quote => OneShot::Quote,
        Command::Knowledge => OneShot::Knowledge,
        Command::Book => OneShot::Book,
        Command::Define { word } => OneShot::Define(word),
        Command::Classify { text } => OneShot::Classify(text.join(" ")),
    };

    let state = load_state(&cli)?;
    let max_words = state.config.read().await.ui.max_words;
    let view = build_view(&state, request).await?;
    println!("{}", format_view(&view, cli.json, max_words)?);
    Ok(())
}

fn load_state(cli: &Cli) -> anyhow::Result<Arc<AppState>> {
    let config = resolve_config(cli)?;
    Ok(Arc::new(AppState::new(config)?))
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

/// Profile (or environment) settings with command line overrides on top
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.profile {
        Some(name) => profile::load_user_profile(name)?,
        None => Config::new(),
    };

    if let Some(api_key) = &cli.api_key {
        config.generator.api_key = api_key.clone();
    }
    if let Some(model) = &cli.model {
        config.generator.model = model.clone();
    }

    Ok(config)
}

fn run_profile(action: &ProfileAction) -> anyhow::Result<()> {
    let path = match action {
        ProfileAction::Init => profile::init_user_config()?,
        ProfileAction::Add { name } => profile::add_profile_from_default(name)?,
    };
    println!("{}", path.display());
    Ok(())
}

async fn run_interactive(state: Arc<AppState>) -> anyhow::Result<()> {
    let controller = AppController::new(state).await;
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        result = &mut tasks.event_loop => log_exit("Event loop", result),
        result = &mut tasks.ui => log_exit("UI", result),
    }

    // The UI drains replies already queued before it stops
    controller.shutdown();
    if !tasks.ui.is_finished() {
        log_exit("UI", tasks.ui.await);
    }
    tasks.event_loop.abort();
    Ok(())
}

fn log_exit(task: &str, result: Result<anyhow::Result<()>, JoinError>) {
    match result {
        Ok(Ok(())) => tracing::info!("{task} exited"),
        Ok(Err(e)) => tracing::error!("{task} failed: {e}"),
        Err(e) if e.is_cancelled() => tracing::debug!("{task} aborted"),
        Err(e) => tracing::error!("{task} panicked: {e}"),
    }
}
