//! Operator-triggered full rebuild of the secondary index. This binary is
//! the single control point for rebuilds: run it once, let it finish, and
//! do not run two at a time.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre;
use tracing_subscriber::EnvFilter;

use nutrigraph_service::KgService;

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
	let filter = EnvFilter::try_new(&config.service.log_level)
		.unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();

	let service = KgService::new(config);
	let report = service.rebuild_index().await;

	tracing::info!(
		foods = report.foods.indexed,
		diseases = report.diseases.indexed,
		indexed_at = %report.indexed_at,
		"Index rebuild finished.",
	);

	if let Some(error) = &report.foods.error {
		tracing::error!(%error, "Food collection rebuild failed.");
	}
	if let Some(error) = &report.diseases.error {
		tracing::error!(%error, "Disease collection rebuild failed.");
	}
	if !report.succeeded() {
		return Err(eyre::eyre!("Index rebuild did not complete cleanly."));
	}

	Ok(())
}
