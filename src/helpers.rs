use anyhow::Error;
use poise::serenity_prelude as serenity;
use tracing::warn;

use crate::types::{Context, Data};

/// Attempts to send a message, logging any failure.
/// Used in error handling paths where a failed reply shouldn't abort the
/// surrounding operation.
pub async fn try_say(ctx: &poise::Context<'_, Data, Error>, message: impl Into<String>) {
	let msg = message.into();
	if let Err(e) = ctx.say(&msg).await {
		let preview: String = msg.chars().take(50).collect();
		warn!("Failed to send message '{preview}...': {e}");
	}
}

/// In prefix invocations, react to the invoking message. Slash invocations
/// have nothing to react to, so send a short reply instead.
pub async fn acknowledge_success(
	ctx: Context<'_>,
	reaction: char,
	slash_reply: &str,
) -> Result<(), Error> {
	match ctx {
		Context::Prefix(prefix_context) => {
			prefix_context
				.msg
				.react(&ctx, serenity::ReactionType::from(reaction))
				.await?;
		}
		Context::Application(_) => {
			ctx.say(slash_reply).await?;
		}
	}
	Ok(())
}
