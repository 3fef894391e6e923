mod config;

use clap::{Parser, Subcommand};
use config::ReadilyConfig;
use readily_catalog::GoodreadsClient;
use readily_chat::Interpreter;
use readily_gateway::GatewayServer;
use readily_session::{spawn_sweeper, InMemorySessionStore, SessionStore};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "readily.toml";

#[derive(Parser)]
#[command(name = "readily", about = "Readily - a chatbot for books and authors")]
struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP gateway
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let cli = Cli::parse();

    // an explicit --config must exist; the default one may be absent
    let required = cli.config.as_os_str() != DEFAULT_CONFIG;
    let mut config = ReadilyConfig::load(&cli.config, required)?;
    config.apply_env(|name| std::env::var(name).ok())?;

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);

            if config.catalog.api_key.is_empty() {
                warn!("No Goodreads API key configured; catalog requests will be rejected");
            }

            let catalog = Arc::new(GoodreadsClient::new(config.catalog)?);
            let mut interpreter = Interpreter::new(catalog);
            if let Some(welcome) = config.welcome_message {
                interpreter = interpreter.with_welcome_message(welcome);
            }

            let policy = config.sessions.to_policy();
            let sessions: Arc<dyn SessionStore> =
                Arc::new(InMemorySessionStore::with_policy(policy));
            if policy.max_idle.is_some() {
                let every = config.sessions.sweep_interval();
                spawn_sweeper(sessions.clone(), every);
                info!(every_secs = every.as_secs(), "Idle session sweeper started");
            }

            let app = GatewayServer::build(Arc::new(interpreter), sessions);

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            info!("Readily gateway listening on {}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
