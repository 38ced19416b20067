//! Command-line client for the storefront auth backend.
//!
//! Signs in (or restores a token) through the same `SessionStore` the browser
//! uses, then prints which pages that session may reach.

mod auth;
mod report;

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use storefront::config::ClientConfig;
use storefront::{AuthService, AuthenticationError, InvalidationError, SessionStore};
use tracing_subscriber::EnvFilter;

use crate::auth::ReqwestAuthService;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing credentials; pass --email and --password or set STOREFRONT_EMAIL/STOREFRONT_PASSWORD")]
    MissingCredentials,
    #[error("missing token; pass --token or set STOREFRONT_TOKEN")]
    MissingToken,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("login failed: {0}")]
    Login(#[from] AuthenticationError),
    #[error(transparent)]
    Logout(#[from] InvalidationError),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "storefront-cli", about = "Textbook storefront auth and route checks")]
struct Cli {
    #[arg(long, env = "STOREFRONT_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, env = "STOREFRONT_EMAIL")]
    email: Option<String>,

    #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[arg(long, env = "STOREFRONT_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[arg(long, default_value_t = 15_000)]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the server health endpoint.
    Ping,
    /// Print the route table.
    Routes,
    /// Resolve a session (credentials, token, or none) and print route access.
    Check,
    /// Sign in and print the identity and access token.
    Login,
    /// Invalidate a token on the backend.
    Logout,
}

#[derive(Debug, Clone)]
struct CliContext {
    config: ClientConfig,
    email: Option<String>,
    password: Option<String>,
    token: Option<String>,
}

impl CliContext {
    fn credentials(&self) -> Option<(&str, &str)> {
        Some((self.email.as_deref()?, self.password.as_deref()?))
    }

    fn service(&self, token: Option<String>) -> Result<Arc<ReqwestAuthService>, CliError> {
        Ok(Arc::new(ReqwestAuthService::new(self.config.clone())?.with_token(token)))
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let ctx = CliContext {
        config: ClientConfig {
            api_base: cli.base_url.trim_end_matches('/').to_owned(),
            request_timeout: Duration::from_millis(cli.timeout_ms),
            ..ClientConfig::default()
        },
        email: cli.email,
        password: cli.password,
        token: cli.token,
    };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Routes => {
            report::route_table().iter().for_each(|line| println!("{line}"));
            Ok(())
        }
        Command::Check => run_check(&ctx).await,
        Command::Login => run_login(&ctx).await,
        Command::Logout => run_logout(&ctx).await,
    }
}

async fn run_ping(ctx: &CliContext) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let url = format!("{}/healthz", ctx.config.api_base);
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: "health check failed".to_owned() });
    }
    println!("ok");
    Ok(())
}

async fn run_check(ctx: &CliContext) -> Result<(), CliError> {
    let service = ctx.service(ctx.token.clone())?;
    let store = SessionStore::new(service);

    if let Some((email, password)) = ctx.credentials() {
        store.login(email, password).await?;
    } else {
        store.initialize().await;
    }

    let state = store.state();
    println!("{}", report::session_summary(&state));
    report::access_report(&state).iter().for_each(|line| println!("{line}"));
    Ok(())
}

async fn run_login(ctx: &CliContext) -> Result<(), CliError> {
    let (email, password) = ctx.credentials().ok_or(CliError::MissingCredentials)?;
    let service = ctx.service(None)?;
    let store = SessionStore::new(service.clone());

    let identity = store.login(email, password).await?;
    let json = serde_json::json!({
        "user": identity,
        "access_token": service.token(),
    });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

async fn run_logout(ctx: &CliContext) -> Result<(), CliError> {
    let token = ctx.token.clone().ok_or(CliError::MissingToken)?;
    let service = ctx.service(Some(token))?;
    service.invalidate_session().await?;
    println!("signed out");
    Ok(())
}
