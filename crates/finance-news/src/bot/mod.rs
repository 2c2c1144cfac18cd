//! Command dispatcher
//!
//! [`NewsBot`] turns a parsed [`Command`] into a fetch + format + send
//! sequence against any [`NewsSink`]. Platform adapters only translate their
//! native events into a `Command` and an [`Invocation`].
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_news::bot::{Command, Invocation, NewsBot};
//!
//! let bot = NewsBot::new(fetcher, settings, config);
//! bot.execute(&Command::Crypto, &Invocation::member(channel_id), &sink).await?;
//! ```

pub mod commands;
pub mod settings;

use crate::api::NewsFetcher;
use crate::config::NewsConfig;
use crate::error::{NewsError, Result};
use crate::interface::{NewsSink, help_card, news_card};
use crate::news::NewsItem;
use std::sync::Arc;

pub use commands::Command;
pub use settings::{ChannelSettings, Invocation};

/// Routes commands to the news sources and back to the chat
pub struct NewsBot {
    fetcher: Arc<dyn NewsFetcher>,
    settings: Arc<ChannelSettings>,
    config: Arc<NewsConfig>,
}

impl NewsBot {
    /// Create a dispatcher over shared sources and settings
    pub fn new(
        fetcher: Arc<dyn NewsFetcher>,
        settings: Arc<ChannelSettings>,
        config: Arc<NewsConfig>,
    ) -> Self {
        Self {
            fetcher,
            settings,
            config,
        }
    }

    /// Shared news sources
    pub fn fetcher(&self) -> Arc<dyn NewsFetcher> {
        Arc::clone(&self.fetcher)
    }

    /// Shared channel settings
    pub fn settings(&self) -> Arc<ChannelSettings> {
        Arc::clone(&self.settings)
    }

    /// Bot configuration
    pub fn config(&self) -> &NewsConfig {
        &self.config
    }

    /// Parse and run one line of chat input, reporting any failure to the
    /// sink. Lines without the command prefix are ignored.
    pub async fn dispatch(&self, input: &str, invocation: &Invocation, sink: &dyn NewsSink) {
        let result = match Command::parse(input, &self.config.command_prefix) {
            Ok(Some(command)) => self.execute(&command, invocation, sink).await,
            Ok(None) => Ok(()),
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            report_error(&e, sink).await;
        }
    }

    /// Run a parsed command
    pub async fn execute(
        &self,
        command: &Command,
        invocation: &Invocation,
        sink: &dyn NewsSink,
    ) -> Result<()> {
        tracing::debug!(
            command = command.name(),
            channel_id = invocation.channel_id,
            platform = %sink.platform(),
            "Executing command"
        );

        match command {
            Command::Crypto | Command::Stocks | Command::Finance | Command::All => {
                self.post_news(command, sink).await
            }
            Command::SetChannel { channel } => {
                let channel_id = self.settings.assign(invocation, *channel).await?;
                sink.send_text(&format!(
                    "✅ Channel berita otomatis telah diset ke <#{channel_id}>"
                ))
                .await
            }
            Command::Help => sink.send_card(&help_card(&self.config.command_prefix)).await,
        }
    }

    async fn post_news(&self, command: &Command, sink: &dyn NewsSink) -> Result<()> {
        if let Some(notice) = command.searching_notice() {
            sink.send_text(notice).await?;
        }

        let items = self.collect(command).await;

        if items.is_empty() {
            if let Some(notice) = command.failure_notice() {
                sink.send_text(notice).await?;
            }
            return Ok(());
        }

        for item in &items {
            sink.send_card(&news_card(item)).await?;
        }

        Ok(())
    }

    /// Fetch every category of `command` in order. Multi-source commands are
    /// capped at `max_items_combined`.
    async fn collect(&self, command: &Command) -> Vec<NewsItem> {
        let categories = command.categories();
        let mut items = Vec::new();

        for category in categories {
            items.extend(self.fetcher.fetch(*category).await);
        }

        if categories.len() > 1 {
            items.truncate(self.config.max_items_combined);
        }

        items
    }
}

/// Send the localized message for `error` and log it.
///
/// Unknown commands and missing permissions are expected and logged at
/// info; everything else is logged as an error.
pub async fn report_error(error: &NewsError, sink: &dyn NewsSink) {
    if error.is_user_error() {
        tracing::info!(error = %error, "Command rejected");
    } else {
        tracing::error!(error = %error, "Command failed");
    }

    if let Err(e) = sink.send_text(error.user_message()).await {
        tracing::warn!(error = %e, "Failed to deliver error message");
    }
}
