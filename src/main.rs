use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use gtavatar::application::services::{AvatarAssembler, IdentityResolver};
use gtavatar::application::{LookupAvatarsUseCase, RecentSearchesUseCase};
use gtavatar::domain::PlayerToken;
use gtavatar::domain::ports::KeyValueStorePort;
use gtavatar::infrastructure::{
    AppConfig, CliArgs, Command, ConfigManager, ConfigSource, DirectoryClient,
    FileKeyValueStore, HttpImageProbe, LoadedConfig,
};
use gtavatar::presentation::build_router;
use gtavatar::presentation::cli::{render_history, render_lookup};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<LoadedConfig> {
    let mut loaded = match ConfigManager::new() {
        Ok(manager) => manager
            .load_config(args.config.as_deref())
            .wrap_err("Failed to load configuration")?,
        Err(e) => LoadedConfig::unavailable(e.to_string()),
    };
    loaded.config.merge_with_args(args);
    Ok(loaded)
}

fn report_config_source(source: &ConfigSource) {
    match source {
        ConfigSource::File(path) => debug!(path = %path.display(), "Configuration loaded"),
        ConfigSource::Created(path) => {
            info!(path = %path.display(), "Configuration file not found, wrote defaults");
        }
        ConfigSource::Invalid { path, reason } => warn!(
            path = %path.display(),
            error = %reason,
            "Configuration file is invalid, using defaults"
        ),
        ConfigSource::Unavailable(reason) => {
            warn!(error = %reason, "No configuration directory, using defaults");
        }
    }
}

fn build_lookup(config: &AppConfig) -> Result<LookupAvatarsUseCase> {
    let directory = DirectoryClient::new(&config.directory)
        .wrap_err("Failed to create directory client")?;
    let probe = HttpImageProbe::new(&config.probe).wrap_err("Failed to create image probe")?;

    Ok(LookupAvatarsUseCase::with_components(
        IdentityResolver::new(Arc::new(directory)),
        AvatarAssembler::new(Arc::new(probe)).with_deadline(config.probe.deadline()),
    ))
}

async fn open_history(config: &AppConfig) -> Result<RecentSearchesUseCase> {
    let path = config
        .effective_history_path()
        .ok_or_else(|| eyre!("Cannot determine history location; pass --history-path"))?;
    let store: Arc<dyn KeyValueStorePort> = Arc::new(FileKeyValueStore::new(path));

    Ok(RecentSearchesUseCase::load(store, config.history.capacity()).await)
}

async fn serve(config: &AppConfig, bind: Option<String>) -> Result<()> {
    let lookup = Arc::new(build_lookup(config)?);
    let bind = bind.unwrap_or_else(|| config.server.bind.clone());

    let listener = TcpListener::bind(&bind)
        .await
        .wrap_err_with(|| format!("Failed to bind {bind}"))?;
    info!(address = %bind, "Serving avatar lookups");

    axum::serve(listener, build_router(lookup))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await
        .wrap_err("Server error")
}

async fn lookup(config: &AppConfig, player: &str, json: bool, no_history: bool) -> Result<()> {
    if player.trim().is_empty() {
        return Err(eyre!("No player specified"));
    }
    let token = PlayerToken::parse(player).ok_or_else(|| eyre!("No player specified"))?;
    let result = build_lookup(config)?.execute(&token).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render_lookup(&token, &result));
    }

    if config.history.enabled && !no_history {
        let mut searches = open_history(config).await?;
        if let Err(e) = searches.record(token.as_str(), result).await {
            warn!(error = %e, "Failed to save search history");
        }
    }

    Ok(())
}

async fn history(config: &AppConfig, clear: bool, json: bool) -> Result<()> {
    let mut searches = open_history(config).await?;

    if clear {
        searches
            .clear()
            .await
            .wrap_err("Failed to clear search history")?;
        println!("Search history cleared");
        return Ok(());
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(searches.history().entries())?
        );
    } else {
        println!("{}", render_history(searches.history()));
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse();
    let LoadedConfig { config, source } = load_config(&args)?;
    init_logging(&config)?;
    report_config_source(&source);

    info!(version = gtavatar::VERSION, "Starting {}", gtavatar::NAME);

    match args.command {
        Command::Serve { bind } => serve(&config, bind).await,
        Command::Lookup {
            player,
            json,
            no_history,
        } => lookup(&config, &player, json, no_history).await,
        Command::History { clear, json } => history(&config, clear, json).await,
    }
}
