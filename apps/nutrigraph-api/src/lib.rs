pub mod assets;
pub mod routes;
pub mod state;

use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(
	version = nutrigraph_cli::VERSION,
	rename_all = "kebab",
	styles = nutrigraph_cli::styles(),
)]
pub struct Args {
	/// Optional TOML config; defaults plus environment overrides apply
	/// either way.
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: Option<PathBuf>,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = nutrigraph_config::load(args.config.as_deref())?;

	init_tracing(&config);

	let http_addr: SocketAddr = config.service.http_bind.parse()?;
	let state = AppState::new(config);
	let app = routes::router(state);
	let listener = TcpListener::bind(http_addr).await?;

	tracing::info!(%http_addr, "HTTP server listening.");

	axum::serve(listener, app).await?;

	Ok(())
}

fn init_tracing(config: &nutrigraph_config::Config) {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();
}
