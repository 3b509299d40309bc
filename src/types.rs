use poise::serenity_prelude as serenity;

#[derive(Debug)]
pub struct Data {
	/// Guild the slash commands are registered in, if any.
	pub discord_guild_id: Option<serenity::GuildId>,
	pub bot_start_time: std::time::Instant,
}

impl Data {
	#[must_use]
	pub fn new(discord_guild_id: Option<serenity::GuildId>) -> Self {
		Self {
			discord_guild_id,
			bot_start_time: std::time::Instant::now(),
		}
	}
}

pub type Context<'a> = poise::Context<'a, Data, anyhow::Error>;
