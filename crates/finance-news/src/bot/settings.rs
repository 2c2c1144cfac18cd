//! Runtime channel configuration
//!
//! Lives in memory only; a restart forgets the channel.

use crate::error::{NewsError, Result};
use tokio::sync::RwLock;

/// Who invoked a command, and where
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation {
    /// Channel the command was typed in
    pub channel_id: u64,
    /// Caller holds the administrator capability
    pub is_admin: bool,
}

impl Invocation {
    /// An ordinary member
    pub fn member(channel_id: u64) -> Self {
        Self {
            channel_id,
            is_admin: false,
        }
    }

    /// A caller with administrator rights
    pub fn admin(channel_id: u64) -> Self {
        Self {
            channel_id,
            is_admin: true,
        }
    }
}

/// Target channel for automatic updates
#[derive(Debug, Default)]
pub struct ChannelSettings {
    news_channel: RwLock<Option<u64>>,
}

impl ChannelSettings {
    /// Start with no channel configured
    pub fn new() -> Self {
        Self::default()
    }

    /// The configured channel, if any
    pub async fn news_channel(&self) -> Option<u64> {
        *self.news_channel.read().await
    }

    /// Store `channel`, or the invoking channel when `None`.
    ///
    /// Only administrators may write; anyone else gets
    /// [`NewsError::MissingPermission`] and the setting is left untouched.
    pub async fn assign(&self, invocation: &Invocation, channel: Option<u64>) -> Result<u64> {
        if !invocation.is_admin {
            return Err(NewsError::MissingPermission("ADMINISTRATOR".to_string()));
        }

        let channel_id = channel.unwrap_or(invocation.channel_id);
        *self.news_channel.write().await = Some(channel_id);

        tracing::info!(channel_id, "News channel updated");
        Ok(channel_id)
    }
}
