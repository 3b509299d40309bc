use std::path::PathBuf;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use pinbot_for_discord::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| "info,pinbot_for_discord=debug".into()),
		)
		.with(tracing_subscriber::fmt::layer())
		.init();

	let config_path = std::env::args()
		.nth(1)
		.map(PathBuf::from)
		.unwrap_or_else(|| PathBuf::from("config.toml"));
	info!("Loading configuration from {}", config_path.display());
	let config = Config::load(&config_path)?;

	pinbot_for_discord::run(config).await
}
