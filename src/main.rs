use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dorm_client::api::TracingNotifier;
use dorm_client::cli::{self, Cli, Commands};
use dorm_client::config::{Config, LogFormat};
use dorm_client::navigation::TracingNavigator;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // the route table is static, no API settings needed
    if let Commands::Routes { role } = cli.command {
        init_tracing(LogFormat::default());
        return cli::handle_routes(role);
    }

    let config = Config::from_env()?;
    init_tracing(config.log_format);

    if let Commands::Config = cli.command {
        return cli::handle_config_validate(&config);
    }

    let state = dorm_client::create_client(
        config.clone(),
        Arc::new(TracingNavigator::new()),
        Arc::new(TracingNotifier),
    )?;
    let poller = state.broadcaster.start(config.session_poll_interval());
    tracing::info!(api_url = %config.api_url, "Client initialized");

    let result = match &cli.command {
        Commands::Profile(credentials) => cli::handle_profile(&state, credentials).await,
        Commands::Bids(credentials) => cli::handle_bids(&state, credentials).await,
        Commands::Notifications(credentials) => {
            cli::handle_notifications(&state, credentials).await
        }
        Commands::Visit { credentials, path } => {
            cli::handle_visit(&state, credentials, path).await
        }
        Commands::Config | Commands::Routes { .. } => Ok(()),
    };

    poller.abort();
    state.auth.logout();
    result
}
