//! Platform-specific bot implementations

pub mod console;
pub mod discord;

pub use console::{ConsoleChannels, ConsoleSink};
pub use discord::{ChannelSink, DiscordChannels};
