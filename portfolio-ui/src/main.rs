//! Portfolio UI server - read-only project listing API plus the site bundle.

mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use portfolio::io::catalog_store;
use portfolio::io::config::{DEFAULT_CONFIG_FILE, load_config};

use crate::state::AppState;

#[derive(Parser)]
#[command(name = "portfolio-ui")]
#[command(about = "Read-only web server for the portfolio project listing")]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long, default_value = "3001")]
    port: u16,

    /// Path to the TOML config file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Directory containing the built site (defaults to ./dist)
    #[arg(long)]
    ui_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_ui=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let cfg = load_config(&args.config)?;

    let projects = catalog_store::mount(cfg.projects.data_path.as_deref());
    info!(count = projects.len(), "projects mounted");

    let state = AppState::new(projects);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        .nest("/api", routes::api_router())
        .layer(cors)
        .with_state(state);

    let ui_dir = args.ui_dir.unwrap_or_else(|| PathBuf::from("dist"));
    if ui_dir.exists() {
        info!(ui_dir = %ui_dir.display(), "serving static site files");
        app = app.fallback_service(ServeDir::new(ui_dir).append_index_html_on_directories(true));
    } else {
        info!(ui_dir = %ui_dir.display(), "site directory not found, API-only mode");
    }

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
