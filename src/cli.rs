use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::guard::GuardDecision;
use crate::navigation::{self, View};
use crate::session::Role;
use crate::ClientState;

#[derive(Parser)]
#[command(name = "dorm-client")]
#[command(about = "Dormitory management API client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configuration validation
    Config,

    /// Show the route table, or what a role may enter
    Routes {
        /// NON_RESIDENT, RESIDENT, GUARD or MANAGER
        #[arg(short, long)]
        role: Option<Role>,
    },

    /// Sign in and print the profile
    Profile(Credentials),

    /// Sign in and list the user's bids
    Bids(Credentials),

    /// Sign in and list unread notifications
    Notifications(Credentials),

    /// Sign in and try to open a view by path
    Visit {
        #[command(flatten)]
        credentials: Credentials,

        /// View path, e.g. `bids` or `room`
        #[arg(value_name = "PATH")]
        path: String,
    },
}

#[derive(Args, Clone)]
pub struct Credentials {
    #[arg(short, long, env = "DORM_LOGIN")]
    pub login: String,

    #[arg(short, long, env = "DORM_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub fn handle_config_validate(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Validating configuration...");

    println!("Configuration:");
    println!("  API URL: {}", config.api_url);
    println!("  Request timeout: {}s", config.request_timeout_secs);
    println!("  Session poll interval: {}s", config.session_poll_secs);
    println!("  Log format: {:?}", config.log_format);

    config.validate()?;
    tracing::info!("Configuration is valid");
    println!("✓ Configuration is valid");
    Ok(())
}

pub fn handle_routes(role: Option<Role>) -> anyhow::Result<()> {
    match role {
        None => {
            for route in navigation::routes() {
                let roles = match (route.guarded, route.roles) {
                    (false, _) => "public".to_string(),
                    (true, None) => "any role".to_string(),
                    (true, Some(roles)) => roles
                        .iter()
                        .map(Role::as_str)
                        .collect::<Vec<_>>()
                        .join(", "),
                };
                let path = route.view.to_string();
                println!("{:<14} {:<16} {}", path, route.view.label(), roles);
            }
        }
        Some(role) => {
            println!("Menu for {}:", role);
            for view in navigation::menu_for(Some(role)) {
                println!("  {:<14} {}", view.to_string(), view.label());
            }
        }
    }
    Ok(())
}

async fn sign_in(state: &ClientState, credentials: &Credentials) -> anyhow::Result<()> {
    let authorized = state
        .auth
        .login(&credentials.login, &credentials.password)
        .await?;
    if !authorized {
        anyhow::bail!("Signed in as {} but the session is not usable", credentials.login);
    }
    tracing::info!(login = %credentials.login, "Signed in");
    Ok(())
}

pub async fn handle_profile(state: &ClientState, credentials: &Credentials) -> anyhow::Result<()> {
    sign_in(state, credentials).await?;
    let profile = state.auth.profile().await?;

    println!("{} {} ({})", profile.name, profile.surname, profile.role);
    if let Some(university) = &profile.university {
        println!("  University: {}", university);
    }
    if let Some(dormitory) = &profile.dormitory {
        println!("  Dormitory: {}", dormitory);
    }
    if let Some(room) = profile.room_number {
        println!("  Room: {}", room);
    }
    if let Some(secs) = state.evaluator.expires_in() {
        println!("  Session expires in {}s", secs);
    }
    Ok(())
}

pub async fn handle_bids(state: &ClientState, credentials: &Credentials) -> anyhow::Result<()> {
    sign_in(state, credentials).await?;
    let bids = state.repos.bids.my().await?;

    if bids.is_empty() {
        println!("No bids");
        return Ok(());
    }
    for bid in bids {
        let editable = if bid.status.is_editable() { " (editable)" } else { "" };
        let kind = format!("{:?}", bid.bid_type);
        let status = format!("{:?}", bid.status);
        println!("#{:<6} {:<12} {:<18}{} {}", bid.number, kind, status, editable, bid.text);
    }
    Ok(())
}

pub async fn handle_notifications(
    state: &ClientState,
    credentials: &Credentials,
) -> anyhow::Result<()> {
    sign_in(state, credentials).await?;
    let notices = state.repos.notifications.unread().await?;

    println!("{} unread", notices.len());
    for notice in notices {
        println!("  [bid #{}] {}", notice.bid_id, notice.text);
    }
    Ok(())
}

pub async fn handle_visit(
    state: &ClientState,
    credentials: &Credentials,
    path: &str,
) -> anyhow::Result<()> {
    sign_in(state, credentials).await?;

    let requested = View::resolve(path);
    let decision = state.guard.decide(&requested.route());
    let landed = state.guard.navigate(path);

    match decision {
        GuardDecision::Allow => println!("✓ Entered {}", landed),
        GuardDecision::RedirectToSignIn => println!("✗ Not signed in, sent to {}", landed),
        GuardDecision::RedirectToForbidden => {
            println!("✗ {} not permitted, sent to {}", requested, landed)
        }
    }
    Ok(())
}
