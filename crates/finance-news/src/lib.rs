//! Finance news bot
//!
//! This crate fetches cryptocurrency, stock and general finance news from
//! public HTTP APIs and posts them as rich cards into a chat channel. It
//! includes:
//!
//! - One fetch routine over data-driven news sources (CoinDesk, Financial
//!   Modeling Prep, a curated or configurable finance feed)
//! - Platform-neutral cards and a help overview
//! - A command dispatcher with a central, localized error reporter
//! - A periodic poster for automatic crypto updates
//! - A liveness HTTP server for hosting platforms
//! - Discord (poise) and console front ends
//!
//! # Architecture
//!
//! Every source failure is contained: a fetch returns an empty list rather
//! than an error. The dispatcher and the poster share one [`NewsFeeds`]
//! (and therefore one HTTP client) and one [`ChannelSettings`].
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_news::{ChannelSettings, NewsBot, NewsConfig, NewsFeeds, NewsHttpClient};
//! use std::sync::Arc;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(NewsConfig::from_env()?);
//!     let feeds = NewsFeeds::from_config(&config, NewsHttpClient::new(&config)?);
//!     let bot = Arc::new(NewsBot::new(
//!         Arc::new(feeds),
//!         Arc::new(ChannelSettings::new()),
//!         Arc::clone(&config),
//!     ));
//!
//!     finance_news::platforms::discord::run(&config, bot).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod bot;
pub mod config;
pub mod error;
pub mod interface;
pub mod keepalive;
pub mod news;
pub mod platforms;
pub mod scheduler;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types for convenience
pub use api::{NewsFeeds, NewsFetcher, NewsHttpClient, NewsSource};
pub use bot::{ChannelSettings, Command, Invocation, NewsBot};
pub use config::NewsConfig;
pub use error::{NewsError, Result};
pub use interface::{NewsCard, NewsSink};
pub use news::{Category, NewsItem};
pub use scheduler::{CycleOutcome, PeriodicPoster};
