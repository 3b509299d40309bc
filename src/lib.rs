#![warn(rust_2018_idioms, clippy::pedantic)]
#![allow(
	clippy::missing_errors_doc,
	clippy::missing_panics_doc,
	clippy::module_name_repetitions
)]

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Error};
use poise::serenity_prelude as serenity;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::types::Data;

pub mod commands;
pub mod config;
pub mod helpers;
pub mod locator;
pub mod types;

/// Builds the poise framework and runs the bot until the gateway connection
/// dies.
pub async fn run(config: Config) -> Result<(), Error> {
	// A zero guild id can't be a real guild; treat it like "not configured".
	let discord_guild_id = config
		.discord
		.guild_id
		.filter(|&id| id != 0)
		.map(serenity::GuildId::new);

	let framework = poise::Framework::builder()
		.setup(move |ctx, ready, framework| {
			Box::pin(async move {
				let data = Data::new(discord_guild_id);

				match data.discord_guild_id {
					Some(guild_id) => {
						info!(
							"Registering {} commands in guild {}",
							framework.options().commands.len(),
							guild_id
						);
						poise::builtins::register_in_guild(
							ctx,
							&framework.options().commands,
							guild_id,
						)
						.await?;
					}
					None => {
						info!(
							"Registering {} commands globally",
							framework.options().commands.len()
						);
						poise::builtins::register_globally(ctx, &framework.options().commands)
							.await?;
					}
				}

				debug!("Setting activity text");
				ctx.set_activity(Some(serenity::ActivityData::listening("/help")));

				info!("pinbot logged in as {}", ready.user.name);
				Ok(data)
			})
		})
		.options(poise::FrameworkOptions {
			commands: vec![
				commands::pins::pin(),
				commands::pins::unpin(),
				commands::utilities::help(),
				commands::utilities::register(),
				commands::utilities::uptime(),
				commands::utilities::source(),
			],
			prefix_options: poise::PrefixFrameworkOptions {
				prefix: Some(config.discord.prefix.clone()),
				edit_tracker: Some(Arc::new(poise::EditTracker::for_timespan(
					Duration::from_secs(60 * 5), // 5 minutes
				))),
				..Default::default()
			},
			// The global error handler for all error cases that may occur
			on_error: |error| {
				Box::pin(async move {
					warn!("Encountered error: {:?}", error);
					if let poise::FrameworkError::ArgumentParse { error, ctx, .. } = &error {
						let response = if let Some(multiline_help) = &ctx.command().help_text {
							format!("**{error}**\n{multiline_help}")
						} else {
							error.to_string()
						};
						helpers::try_say(ctx, response).await;
					} else if let poise::FrameworkError::Command { ctx, error, .. } = &error {
						helpers::try_say(ctx, error.to_string()).await;
					}
				})
			},
			// This code is run before every command
			pre_command: |ctx| {
				Box::pin(async move {
					let channel_name = &ctx
						.channel_id()
						.name(&ctx)
						.await
						.unwrap_or_else(|_| "<unknown>".to_owned());
					let author = &ctx.author().name;

					info!(
						"{} in {} used command '{}'",
						author,
						channel_name,
						&ctx.invoked_command_name()
					);
				})
			},
			// This code is run after a command if it was successful (returned Ok)
			post_command: |ctx| {
				Box::pin(async move {
					info!("Executed command {}!", ctx.command().qualified_name);
				})
			},
			// Disallow all mentions (except those to the replied user) by default
			allowed_mentions: Some(serenity::CreateAllowedMentions::new().replied_user(true)),
			..Default::default()
		})
		.build();

	// Presence and member list updates aren't needed to handle commands.
	let intents =
		serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

	let mut client = serenity::ClientBuilder::new(&config.discord.token, intents)
		.framework(framework)
		.await
		.map_err(|e| anyhow!(e))?;

	client.start().await.map_err(|e| anyhow!(e))
}
