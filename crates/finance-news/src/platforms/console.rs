//! Console bot
//!
//! Reads commands from stdin and prints replies and cards to stdout. The
//! console user is treated as an administrator and the automatic updates
//! print inline.

use crate::bot::{Invocation, NewsBot};
use crate::error::Result;
use crate::interface::{BotPlatform, NewsCard, NewsSink, render_plain};
use crate::scheduler::{ChannelResolver, PeriodicPoster};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Channel id the console session runs in
pub const CONSOLE_CHANNEL_ID: u64 = 1;

/// Prints to stdout, optionally tagged with a channel
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    channel_id: Option<u64>,
}

impl ConsoleSink {
    /// Replies to the console user
    pub fn reply() -> Self {
        Self::default()
    }

    /// Posts tagged with a channel id
    pub fn channel(channel_id: u64) -> Self {
        Self {
            channel_id: Some(channel_id),
        }
    }

    fn tag(&self) -> String {
        self.channel_id
            .map(|id| format!("[#{id}] "))
            .unwrap_or_default()
    }
}

#[async_trait]
impl NewsSink for ConsoleSink {
    fn platform(&self) -> BotPlatform {
        BotPlatform::Console
    }

    async fn send_text(&self, text: &str) -> Result<()> {
        println!("{}{text}", self.tag());
        Ok(())
    }

    async fn send_card(&self, card: &NewsCard) -> Result<()> {
        println!("{}\n{}", self.tag(), render_plain(card));
        Ok(())
    }
}

/// Every channel id resolves to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleChannels;

#[async_trait]
impl ChannelResolver for ConsoleChannels {
    async fn resolve(&self, channel_id: u64) -> Option<Box<dyn NewsSink>> {
        Some(Box::new(ConsoleSink::channel(channel_id)))
    }
}

fn print_banner(prefix: &str) {
    println!(
        r"
╔══════════════════════════════════════════════════════╗
║               Finance News Bot (console)             ║
╚══════════════════════════════════════════════════════╝
  {prefix}crypto  {prefix}saham  {prefix}keuangan  {prefix}semua
  {prefix}set_channel [<#id>]  {prefix}help_finance
  exit - keluar
"
    );
}

/// Run the console REPL until EOF or `exit`
pub async fn run(bot: Arc<NewsBot>) -> Result<()> {
    print_banner(&bot.config().command_prefix);

    let poster = PeriodicPoster::new(&bot, Arc::new(ConsoleChannels)).spawn();
    let invocation = Invocation::admin(CONSOLE_CHANNEL_ID);
    let sink = ConsoleSink::reply();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "exit" | "quit") {
            break;
        }

        bot.dispatch(line, &invocation, &sink).await;
    }

    poster.abort();
    println!("Sampai jumpa!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_every_channel_resolves() {
        let sink = ConsoleChannels.resolve(42).await;
        assert_eq!(sink.map(|s| s.platform()), Some(BotPlatform::Console));
    }

    #[test]
    fn test_channel_tag() {
        assert_eq!(ConsoleSink::channel(7).tag(), "[#7] ");
        assert_eq!(ConsoleSink::reply().tag(), "");
    }
}
