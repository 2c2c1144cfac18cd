//! Where messages go

use crate::error::Result;
use crate::interface::card::NewsCard;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Platform identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BotPlatform {
    /// Discord gateway
    Discord,

    /// Local console
    Console,
}

impl std::fmt::Display for BotPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BotPlatform::Discord => write!(f, "Discord"),
            BotPlatform::Console => write!(f, "Console"),
        }
    }
}

/// A destination for bot output: a command reply or a channel
#[async_trait]
pub trait NewsSink: Send + Sync {
    /// Get the platform identifier
    fn platform(&self) -> BotPlatform;

    /// Send a plain text message
    async fn send_text(&self, text: &str) -> Result<()>;

    /// Send a rich card
    async fn send_card(&self, card: &NewsCard) -> Result<()>;
}
