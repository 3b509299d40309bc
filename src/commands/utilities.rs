use anyhow::Error;

use crate::types::Context;

/// Show this menu
#[poise::command(prefix_command, slash_command, category = "Utilities", track_edits)]
pub async fn help(
	ctx: Context<'_>,
	#[description = "Specific command to show help about"]
	#[autocomplete = "poise::builtins::autocomplete_command"]
	command: Option<String>,
) -> Result<(), Error> {
	let extra_text_at_bottom = "\
You can also use every command with the message prefix, e.g. `?pin <link>`.
Type ?help command for more info on a command.";

	poise::builtins::help(
		ctx,
		command.as_deref(),
		poise::builtins::HelpConfiguration {
			extra_text_at_bottom,
			ephemeral: true,
			..Default::default()
		},
	)
	.await?;
	Ok(())
}

/// Register slash commands in this guild or globally
#[poise::command(
	prefix_command,
	slash_command,
	category = "Utilities",
	hide_in_help,
	owners_only
)]
pub async fn register(ctx: Context<'_>) -> Result<(), Error> {
	poise::builtins::register_application_commands_buttons(ctx).await?;

	Ok(())
}

/// Tells you how long the bot has been up for
#[poise::command(prefix_command, slash_command, category = "Utilities")]
pub async fn uptime(ctx: Context<'_>) -> Result<(), Error> {
	let uptime = std::time::Instant::now() - ctx.data().bot_start_time;

	let div_mod = |a, b| (a / b, a % b);

	let seconds = uptime.as_secs();
	let (minutes, seconds) = div_mod(seconds, 60);
	let (hours, minutes) = div_mod(minutes, 60);
	let (days, hours) = div_mod(hours, 24);

	ctx.say(format!("Uptime: {days}d {hours}h {minutes}m {seconds}s"))
		.await?;

	Ok(())
}

/// Links to the bot's source code
#[poise::command(
	prefix_command,
	slash_command,
	category = "Utilities",
	discard_spare_arguments
)]
pub async fn source(ctx: Context<'_>) -> Result<(), Error> {
	ctx.say("https://github.com/pinbot-discord/pinbot-for-discord")
		.await?;
	Ok(())
}
