use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = nutrigraph_indexer::Args::parse();
	nutrigraph_indexer::run(args).await
}
