use anyhow::Error;
use poise::serenity_prelude as serenity;
use tracing::warn;

use crate::locator::{parse_message_link, MessageLocator};
use crate::types::Context;

#[derive(Debug, Clone, Copy)]
enum PinAction {
	Pin,
	Unpin,
}

impl PinAction {
	fn verb(self) -> &'static str {
		match self {
			Self::Pin => "pin",
			Self::Unpin => "unpin",
		}
	}
}

enum ResolveError {
	ForeignGuild,
	ChannelNotFound,
	WrongChannelType,
	MessageNotFound,
}

/// Turns a parsed message link into the actual message, checking along the
/// way that it points into the invoking guild and at something pinnable.
async fn resolve_message(
	ctx: Context<'_>,
	locator: MessageLocator,
) -> Result<serenity::Message, ResolveError> {
	// guild_only on the commands guarantees this, but don't panic if poise
	// ever hands us a DM context anyway.
	let Some(invoking_guild) = ctx.guild_id() else {
		return Err(ResolveError::ForeignGuild);
	};

	if invoking_guild.get() != locator.guild_id {
		return Err(ResolveError::ForeignGuild);
	}

	// Snowflake ids are non-zero; id 0 can never resolve and would panic
	// ChannelId::new.
	if locator.channel_id == 0 {
		return Err(ResolveError::ChannelNotFound);
	}
	if locator.message_id == 0 {
		return Err(ResolveError::MessageNotFound);
	}

	// Fetch via HTTP rather than the cache so links into archived threads
	// still resolve.
	let channel = ctx
		.http()
		.get_channel(serenity::ChannelId::new(locator.channel_id))
		.await
		.map_err(|_| ResolveError::ChannelNotFound)?;

	let Some(channel) = channel.guild() else {
		return Err(ResolveError::WrongChannelType);
	};
	if channel.guild_id != invoking_guild {
		return Err(ResolveError::ForeignGuild);
	}

	match channel.kind {
		serenity::ChannelType::Text
		| serenity::ChannelType::News
		| serenity::ChannelType::PublicThread
		| serenity::ChannelType::PrivateThread
		| serenity::ChannelType::NewsThread => {}
		_ => return Err(ResolveError::WrongChannelType),
	}

	channel
		.id
		.message(ctx.http(), serenity::MessageId::new(locator.message_id))
		.await
		.map_err(|_| ResolveError::MessageNotFound)
}

async fn pin_or_unpin(ctx: Context<'_>, url: &str, action: PinAction) -> Result<(), Error> {
	let locator = match parse_message_link(url) {
		Ok(locator) => locator,
		Err(error) => {
			let reply = poise::CreateReply::default()
				.content(error.to_string())
				.ephemeral(true);
			ctx.send(reply).await?;
			return Ok(());
		}
	};

	let message = match resolve_message(ctx, locator).await {
		Ok(message) => message,
		Err(error) => {
			let reply = match error {
				ResolveError::ForeignGuild => "That message link points to a different server.",
				ResolveError::ChannelNotFound => {
					"Couldn't find a channel or thread with that id in this server."
				}
				ResolveError::WrongChannelType => {
					"That link doesn't point to a text channel or thread."
				}
				ResolveError::MessageNotFound => {
					"Couldn't find that message. It may have been deleted."
				}
			};
			let reply = poise::CreateReply::default().content(reply).ephemeral(true);
			ctx.send(reply).await?;
			return Ok(());
		}
	};

	let reason = format!(
		"{} requested by {}",
		match action {
			PinAction::Pin => "Pin",
			PinAction::Unpin => "Unpin",
		},
		ctx.author().name
	);
	let result = match action {
		PinAction::Pin => {
			ctx.http()
				.pin_message(message.channel_id, message.id, Some(&reason))
				.await
		}
		PinAction::Unpin => {
			ctx.http()
				.unpin_message(message.channel_id, message.id, Some(&reason))
				.await
		}
	};

	if let Err(error) = result {
		warn!(
			"Failed to {} message {} in {}: {}",
			action.verb(),
			message.id,
			message.channel_id,
			error
		);
		let reply = poise::CreateReply::default()
			.content(format!(
				"I'm not allowed to {} messages in that channel.",
				action.verb()
			))
			.ephemeral(true);
		ctx.send(reply).await?;
		return Ok(());
	}

	let confirmation = match action {
		PinAction::Pin => "Pinned the message.",
		PinAction::Unpin => "Unpinned the message.",
	};
	crate::helpers::acknowledge_success(ctx, '📌', confirmation).await
}

/// Pins a message by its link
///
/// ?pin <message link>
///
/// Right-click (or long-press) a message, pick "Copy Message Link" and paste
/// the link here. Works across channels and threads of this server.
#[poise::command(prefix_command, slash_command, guild_only, category = "Pins")]
pub async fn pin(
	ctx: Context<'_>,
	#[description = "Link to the message to pin"]
	#[rest]
	url: String,
) -> Result<(), Error> {
	pin_or_unpin(ctx, &url, PinAction::Pin).await
}

/// Unpins a message by its link
///
/// ?unpin <message link>
///
/// The counterpart to ?pin. Paste the link of a pinned message to remove it
/// from the channel's pins.
#[poise::command(prefix_command, slash_command, guild_only, category = "Pins")]
pub async fn unpin(
	ctx: Context<'_>,
	#[description = "Link to the message to unpin"]
	#[rest]
	url: String,
) -> Result<(), Error> {
	pin_or_unpin(ctx, &url, PinAction::Unpin).await
}
