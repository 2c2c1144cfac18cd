//! Periodic crypto update poster
//!
//! Started once the platform reports ready. Every interval it posts the
//! latest crypto items to the configured channel; a failed cycle is logged
//! and the next one runs on schedule.

use crate::api::NewsFetcher;
use crate::bot::{ChannelSettings, NewsBot};
use crate::error::Result;
use crate::interface::{NewsSink, news_card};
use crate::news::Category;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// First message of every automatic update
pub const ANNOUNCEMENT: &str = "🚨 **Update Berita Crypto Terbaru!**";

/// Looks up a postable channel by id
#[async_trait]
pub trait ChannelResolver: Send + Sync {
    /// `None` when the channel does not exist or is not reachable
    async fn resolve(&self, channel_id: u64) -> Option<Box<dyn NewsSink>>;
}

/// What one cycle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// No channel configured, nothing fetched
    NoChannel,
    /// Channel configured but could not be resolved
    Unresolved { channel_id: u64 },
    /// Source returned nothing
    NoNews { channel_id: u64 },
    /// Announcement plus `count` cards posted
    Posted { channel_id: u64, count: usize },
}

/// The recurring fetch-and-post job
pub struct PeriodicPoster {
    fetcher: Arc<dyn NewsFetcher>,
    settings: Arc<ChannelSettings>,
    resolver: Arc<dyn ChannelResolver>,
    interval: Duration,
    max_items: usize,
}

impl PeriodicPoster {
    /// Share the bot's sources and settings
    pub fn new(bot: &NewsBot, resolver: Arc<dyn ChannelResolver>) -> Self {
        Self {
            fetcher: bot.fetcher(),
            settings: bot.settings(),
            resolver,
            interval: bot.config().update_interval,
            max_items: bot.config().max_items_auto,
        }
    }

    /// Time between cycles
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run one cycle
    pub async fn run_cycle(&self) -> Result<CycleOutcome> {
        let Some(channel_id) = self.settings.news_channel().await else {
            return Ok(CycleOutcome::NoChannel);
        };

        let Some(sink) = self.resolver.resolve(channel_id).await else {
            return Ok(CycleOutcome::Unresolved { channel_id });
        };

        let items = self.fetcher.fetch(Category::Crypto).await;
        if items.is_empty() {
            return Ok(CycleOutcome::NoNews { channel_id });
        }

        sink.send_text(ANNOUNCEMENT).await?;

        let mut count = 0;
        for item in items.iter().take(self.max_items) {
            sink.send_card(&news_card(item)).await?;
            count += 1;
        }

        Ok(CycleOutcome::Posted { channel_id, count })
    }

    /// Fire immediately, then every interval, until the task is dropped
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::info!(interval_secs = self.interval.as_secs(), "Automatic news updates started");

        loop {
            ticker.tick().await;

            match self.run_cycle().await {
                Ok(outcome) => tracing::debug!(?outcome, "Automatic update cycle finished"),
                Err(e) => tracing::warn!(error = %e, "Error in automatic update"),
            }
        }
    }

    /// Run on the current runtime
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }
}
