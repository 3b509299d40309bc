use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub discord: DiscordConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DiscordConfig {
	/// Bot token. The `DISCORD_TOKEN` environment variable takes precedence,
	/// so the file value may be left empty.
	#[serde(default)]
	pub token: String,
	/// Guild to register the slash commands in. When unset, commands are
	/// registered globally (which Discord propagates slowly).
	#[serde(default)]
	pub guild_id: Option<u64>,
	#[serde(default = "default_prefix")]
	pub prefix: String,
}

fn default_prefix() -> String {
	"?".to_owned()
}

impl Config {
	pub fn load(path: &Path) -> Result<Self> {
		let raw = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read {}", path.display()))?;
		let mut config: Config = toml::from_str(&raw)
			.with_context(|| format!("Failed to parse {}", path.display()))?;

		if let Ok(token) = std::env::var("DISCORD_TOKEN") {
			config.discord.token = token;
		}
		if config.discord.token.is_empty() {
			anyhow::bail!(
				"No bot token: set discord.token in {} or the DISCORD_TOKEN environment variable",
				path.display()
			);
		}

		Ok(config)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn minimal_config() {
		let config: Config = toml::from_str(
			r#"
			[discord]
			token = "abc"
			"#,
		)
		.unwrap();
		assert_eq!(config.discord.token, "abc");
		assert_eq!(config.discord.guild_id, None);
		assert_eq!(config.discord.prefix, "?");
	}

	#[test]
	fn full_config() {
		let config: Config = toml::from_str(
			r#"
			[discord]
			token = "abc"
			guild_id = 432708847304704010
			prefix = "-"
			"#,
		)
		.unwrap();
		assert_eq!(config.discord.guild_id, Some(432708847304704010));
		assert_eq!(config.discord.prefix, "-");
	}
}
