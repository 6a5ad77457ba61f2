use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = nutrigraph_api::Args::parse();
	nutrigraph_api::run(args).await
}
