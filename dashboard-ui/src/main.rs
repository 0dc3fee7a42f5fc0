//! Dashboard server - renders the Acme dashboard pages and a small JSON API.

mod demo;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dashboard::io::config::{DashboardConfig, load_config};
use tracing::{info, warn};

use crate::state::AppState;

#[derive(Parser)]
#[command(name = "dashboard-ui")]
#[command(about = "Web dashboard with side navigation and invoice status badges")]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long, default_value = "3000")]
    port: u16,

    /// Dashboard config file (TOML); built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory containing static assets (images, icons)
    #[arg(long, default_value = "public")]
    public_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dashboard::logging::init("dashboard_ui=info,dashboard=info");

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            info!(config = %path.display(), "loading dashboard config");
            load_config(path)?
        }
        None => DashboardConfig::default(),
    };
    for warning in config.duplicate_warnings() {
        warn!(warning = %warning, "suspicious dashboard config");
    }
    info!(
        nav_entries = config.navigation.len(),
        statuses = config.statuses.len(),
        "dashboard config ready"
    );

    let state = AppState::new(config).context("build page renderer")?;
    let app = routes::app_router(state, Some(args.public_dir.as_path()));

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
