//! Parsing of Discord message links into their id triple.

use std::fmt;

/// The fixed prefix every guild message link carries.
pub const MESSAGE_LINK_PREFIX: &str = "https://discord.com/channels/";

/// The (guild, channel, message) id triple encoded in a message link.
///
/// The channel id may name a regular text channel or a thread; the two are
/// not distinguishable from the link alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageLocator {
	pub guild_id: u64,
	pub channel_id: u64,
	pub message_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocatorError {
	/// The input doesn't contain the message link prefix at all.
	MalformedPrefix,
	/// Fewer than two `/` separators after the prefix.
	InsufficientSegments,
	/// One of the first three segments isn't all decimal digits.
	NonNumericSegment,
}

impl fmt::Display for LocatorError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let text = match self {
			Self::MalformedPrefix => {
				"That doesn't look like a message link. Right-click a message and \
				pick \"Copy Message Link\" to get one (`https://discord.com/channels/...`)."
			}
			Self::InsufficientSegments => {
				"Incomplete message link: expected server, channel and message ids \
				after `channels/`."
			}
			Self::NonNumericSegment => {
				"Broken message link: the server, channel and message ids must all \
				be numbers."
			}
		};
		f.write_str(text)
	}
}

impl std::error::Error for LocatorError {}

/// Extracts the id triple from a message link of the form
/// `https://discord.com/channels/{guild}/{channel}/{message}`.
///
/// Text before the prefix is tolerated (people paste links mid-sentence) and
/// segments beyond the third are ignored, but trailing text runs into the
/// message id segment and fails the digit check.
pub fn parse_message_link(input: &str) -> Result<MessageLocator, LocatorError> {
	let start = input
		.find(MESSAGE_LINK_PREFIX)
		.ok_or(LocatorError::MalformedPrefix)?;
	let rest = &input[start + MESSAGE_LINK_PREFIX.len()..];

	let mut segments = rest.split('/');
	let (Some(guild), Some(channel), Some(message)) =
		(segments.next(), segments.next(), segments.next())
	else {
		return Err(LocatorError::InsufficientSegments);
	};

	Ok(MessageLocator {
		guild_id: parse_id(guild)?,
		channel_id: parse_id(channel)?,
		message_id: parse_id(message)?,
	})
}

fn parse_id(segment: &str) -> Result<u64, LocatorError> {
	if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
		return Err(LocatorError::NonNumericSegment);
	}
	// All-digit strings longer than a snowflake still overflow u64; there is
	// no separate error kind for that.
	segment
		.parse()
		.map_err(|_| LocatorError::NonNumericSegment)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ok(guild_id: u64, channel_id: u64, message_id: u64) -> Result<MessageLocator, LocatorError> {
		Ok(MessageLocator {
			guild_id,
			channel_id,
			message_id,
		})
	}

	#[test]
	fn full_link() {
		assert_eq!(
			parse_message_link(
				"https://discord.com/channels/432708847304704010/432708847304704013/1008041568613191813"
			),
			ok(432708847304704010, 432708847304704013, 1008041568613191813)
		);
	}

	#[test]
	fn leading_text_before_link() {
		assert_eq!(
			parse_message_link("please pin https://discord.com/channels/5/6/7"),
			ok(5, 6, 7)
		);
	}

	#[test]
	fn trailing_text_after_link() {
		// Text after the link runs into the message id segment; the digit
		// check rejects it rather than guessing where the link ends.
		assert_eq!(
			parse_message_link("https://discord.com/channels/5/6/7 thanks!"),
			Err(LocatorError::NonNumericSegment)
		);
	}

	#[test]
	fn extra_segments_are_ignored() {
		assert_eq!(
			parse_message_link("https://discord.com/channels/5/6/7/8/9"),
			ok(5, 6, 7)
		);
	}

	#[test]
	fn leading_zeros_are_accepted() {
		assert_eq!(
			parse_message_link("https://discord.com/channels/039/06/007"),
			ok(39, 6, 7)
		);
	}

	#[test]
	fn missing_prefix() {
		assert_eq!(
			parse_message_link("not a url at all"),
			Err(LocatorError::MalformedPrefix)
		);
		assert_eq!(parse_message_link(""), Err(LocatorError::MalformedPrefix));
		assert_eq!(
			parse_message_link("https://discord.com/nonsense/5/6/7"),
			Err(LocatorError::MalformedPrefix)
		);
	}

	#[test]
	fn prefix_with_no_segments() {
		assert_eq!(
			parse_message_link("https://discord.com/channels/"),
			Err(LocatorError::InsufficientSegments)
		);
	}

	#[test]
	fn one_segment() {
		assert_eq!(
			parse_message_link("https://discord.com/channels/5"),
			Err(LocatorError::InsufficientSegments)
		);
	}

	#[test]
	fn two_segments() {
		assert_eq!(
			parse_message_link("https://discord.com/channels/5/6"),
			Err(LocatorError::InsufficientSegments)
		);
	}

	#[test]
	fn non_numeric_segment() {
		assert_eq!(
			parse_message_link("https://discord.com/channels/5/6/abc"),
			Err(LocatorError::NonNumericSegment)
		);
		assert_eq!(
			parse_message_link("https://discord.com/channels/5/-6/7"),
			Err(LocatorError::NonNumericSegment)
		);
		assert_eq!(
			parse_message_link("https://discord.com/channels/5.0/6/7"),
			Err(LocatorError::NonNumericSegment)
		);
	}

	#[test]
	fn empty_segments() {
		assert_eq!(
			parse_message_link("https://discord.com/channels///"),
			Err(LocatorError::NonNumericSegment)
		);
	}

	#[test]
	fn trailing_garbage_on_message_id() {
		assert_eq!(
			parse_message_link("https://discord.com/channels/5/6/7suffix"),
			Err(LocatorError::NonNumericSegment)
		);
	}

	#[test]
	fn overflowing_id() {
		assert_eq!(
			parse_message_link("https://discord.com/channels/99999999999999999999999999/6/7"),
			Err(LocatorError::NonNumericSegment)
		);
	}

	#[test]
	fn parsing_is_idempotent() {
		let input = "https://discord.com/channels/5/6/7";
		assert_eq!(parse_message_link(input), parse_message_link(input));
	}
}
