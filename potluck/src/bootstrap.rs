use crate::{routes, state::AppState};
use axum::Router;
use potluck_application::SplitService;
use potluck_domain::{SplitContext, SplitError};
use potluck_infrastructure::{JsonEventStore, StoreError};
use std::{env, net::SocketAddr, num::ParseIntError, path::PathBuf};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_LOG_FILTER: &str = "potluck=info,tower_http=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingVar(&'static str),
    #[error("POTLUCK_BIND_ADDR '{value}' is not a socket address: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("POTLUCK_CURRENCY_SCALE '{value}' is not a number: {source}")]
    InvalidScaleValue {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error(transparent)]
    UnsupportedScale(#[from] SplitError),
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Application configuration read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub events_path: PathBuf,
    pub context: SplitContext,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("POTLUCK_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_addr.clone(),
                source,
            })?;

        let events_path = lookup("POTLUCK_EVENTS_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingVar("POTLUCK_EVENTS_PATH"))?;

        let context = match lookup("POTLUCK_CURRENCY_SCALE") {
            Some(value) => {
                let scale = value
                    .trim()
                    .parse::<u32>()
                    .map_err(|source| ConfigError::InvalidScaleValue {
                        value: value.clone(),
                        source,
                    })?;
                SplitContext::with_scale(scale)?
            }
            None => SplitContext::currency_default(),
        };

        Ok(Self {
            bind_addr,
            events_path,
            context,
        })
    }
}

/// Wires the event store into the HTTP router.
pub struct AppBuilder;

impl AppBuilder {
    pub fn build(config: &AppConfig) -> Result<Router, StartupError> {
        let store = JsonEventStore::from_path(&config.events_path)?;
        let store: &'static JsonEventStore = Box::leak(Box::new(store));
        let splits = SplitService::with_context(store, config.context);
        Ok(routes::create_router(AppState::new(splits)))
    }
}

pub fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub async fn run() {
    // Loads .env before the subscriber reads RUST_LOG.
    let config = AppConfig::from_env();
    init_logging();

    if let Err(err) = serve(config).await {
        tracing::error!(error = %err, "potluck exited with an error");
        std::process::exit(1);
    }
}

async fn serve(config: Result<AppConfig, ConfigError>) -> Result<(), StartupError> {
    let config = config?;
    let app = AppBuilder::build(&config)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: config.bind_addr,
            source,
        })?;
    tracing::info!(
        addr = %config.bind_addr,
        scale = config.context.scale,
        "Listening for split requests"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
