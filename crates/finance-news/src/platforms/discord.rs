//! Discord bot implementation
//!
//! Prefix commands are registered with poise; each one hands its parsed
//! [`Command`] to the shared [`NewsBot`]. Framework errors (unknown command,
//! missing permission, anything else) all end up in [`report_error`].

use crate::bot::{Command, Invocation, NewsBot, report_error};
use crate::config::NewsConfig;
use crate::error::{NewsError, Result};
use crate::interface::{BotPlatform, NewsCard, NewsSink};
use crate::scheduler::{ChannelResolver, PeriodicPoster};
use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use std::sync::Arc;

/// Data shared by every command invocation
pub struct Data {
    pub bot: Arc<NewsBot>,
}

pub type Error = NewsError;
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Convert a card into a Discord embed
pub fn to_embed(card: &NewsCard) -> serenity::CreateEmbed {
    let mut embed = serenity::CreateEmbed::new()
        .title(&card.title)
        .description(&card.description)
        .colour(card.color);

    if let Some(url) = &card.url {
        embed = embed.url(url);
    }
    for field in &card.fields {
        embed = embed.field(&field.name, &field.value, field.inline);
    }
    if let Some(footer) = &card.footer {
        embed = embed.footer(serenity::CreateEmbedFooter::new(footer));
    }
    if let Some(timestamp) = card
        .timestamp
        .and_then(|ts| serenity::Timestamp::from_unix_timestamp(ts.timestamp()).ok())
    {
        embed = embed.timestamp(timestamp);
    }

    embed
}

/// Replies in the channel a command was invoked from
struct ReplySink<'a> {
    ctx: Context<'a>,
}

#[async_trait]
impl NewsSink for ReplySink<'_> {
    fn platform(&self) -> BotPlatform {
        BotPlatform::Discord
    }

    async fn send_text(&self, text: &str) -> Result<()> {
        self.ctx.say(text).await?;
        Ok(())
    }

    async fn send_card(&self, card: &NewsCard) -> Result<()> {
        self.ctx
            .send(poise::CreateReply::default().embed(to_embed(card)))
            .await?;
        Ok(())
    }
}

/// Posts into a channel outside any command context
pub struct ChannelSink {
    http: Arc<serenity::Http>,
    channel_id: serenity::ChannelId,
}

impl ChannelSink {
    pub fn new(http: Arc<serenity::Http>, channel_id: serenity::ChannelId) -> Self {
        Self { http, channel_id }
    }
}

#[async_trait]
impl NewsSink for ChannelSink {
    fn platform(&self) -> BotPlatform {
        BotPlatform::Discord
    }

    async fn send_text(&self, text: &str) -> Result<()> {
        self.channel_id.say(&*self.http, text).await?;
        Ok(())
    }

    async fn send_card(&self, card: &NewsCard) -> Result<()> {
        self.channel_id
            .send_message(
                &*self.http,
                serenity::CreateMessage::new().embed(to_embed(card)),
            )
            .await?;
        Ok(())
    }
}

/// Resolves channel ids through the Discord HTTP API
pub struct DiscordChannels {
    http: Arc<serenity::Http>,
}

impl DiscordChannels {
    pub fn new(http: Arc<serenity::Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ChannelResolver for DiscordChannels {
    async fn resolve(&self, channel_id: u64) -> Option<Box<dyn NewsSink>> {
        if channel_id == 0 {
            return None;
        }

        let channel_id = serenity::ChannelId::new(channel_id);
        match channel_id.to_channel(&*self.http).await {
            Ok(_) => Some(Box::new(ChannelSink::new(Arc::clone(&self.http), channel_id))),
            Err(e) => {
                tracing::debug!(%channel_id, error = %e, "News channel not reachable");
                None
            }
        }
    }
}

/// Text and announcement channels accept posts; voice, category and forum
/// channels do not.
fn postable_channel(id: serenity::ChannelId, kind: serenity::ChannelType) -> Result<u64> {
    match kind {
        serenity::ChannelType::Text | serenity::ChannelType::News => Ok(id.get()),
        other => Err(NewsError::InvalidArgument(format!(
            "channel {id} cannot receive news ({other:?})"
        ))),
    }
}

async fn run_command(ctx: Context<'_>, command: Command, invocation: Invocation) -> Result<()> {
    let sink = ReplySink { ctx };
    ctx.data().bot.execute(&command, &invocation, &sink).await
}

fn member(ctx: Context<'_>) -> Invocation {
    Invocation::member(ctx.channel_id().get())
}

/// Berita cryptocurrency terbaru
#[poise::command(prefix_command)]
async fn crypto(ctx: Context<'_>) -> std::result::Result<(), Error> {
    run_command(ctx, Command::Crypto, member(ctx)).await
}

/// Berita saham terbaru
#[poise::command(prefix_command)]
async fn saham(ctx: Context<'_>) -> std::result::Result<(), Error> {
    run_command(ctx, Command::Stocks, member(ctx)).await
}

/// Berita keuangan umum
#[poise::command(prefix_command)]
async fn keuangan(ctx: Context<'_>) -> std::result::Result<(), Error> {
    run_command(ctx, Command::Finance, member(ctx)).await
}

/// Semua berita keuangan
#[poise::command(prefix_command)]
async fn semua(ctx: Context<'_>) -> std::result::Result<(), Error> {
    run_command(ctx, Command::All, member(ctx)).await
}

/// Set channel untuk update otomatis
///
/// poise checks ADMINISTRATOR before this body runs.
#[poise::command(prefix_command, guild_only, required_permissions = "ADMINISTRATOR")]
async fn set_channel(
    ctx: Context<'_>,
    #[description = "Channel tujuan (default: channel ini)"] channel: Option<
        serenity::GuildChannel,
    >,
) -> std::result::Result<(), Error> {
    let command = Command::SetChannel {
        channel: channel
            .map(|c| postable_channel(c.id, c.kind))
            .transpose()?,
    };
    run_command(ctx, command, Invocation::admin(ctx.channel_id().get())).await
}

/// Panduan perintah
#[poise::command(prefix_command)]
async fn help_finance(ctx: Context<'_>) -> std::result::Result<(), Error> {
    run_command(ctx, Command::Help, member(ctx)).await
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::UnknownCommand {
            ctx,
            msg,
            msg_content,
            ..
        } => {
            let name = msg_content.split_whitespace().next().unwrap_or_default();
            let sink = ChannelSink::new(Arc::clone(&ctx.http), msg.channel_id);
            report_error(&NewsError::UnknownCommand(name.to_string()), &sink).await;
        }
        poise::FrameworkError::MissingUserPermissions {
            missing_permissions,
            ctx,
            ..
        } => {
            let missing = missing_permissions
                .map(|p| p.get_permission_names().join(", "))
                .unwrap_or_else(|| "unknown".to_string());
            report_error(&NewsError::MissingPermission(missing), &ReplySink { ctx }).await;
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            report_error(&error, &ReplySink { ctx }).await;
        }
        other => {
            if let Some(ctx) = other.ctx() {
                report_error(&NewsError::Other(other.to_string()), &ReplySink { ctx }).await;
            } else {
                tracing::error!(error = %other, "Framework error");
            }
        }
    }
}

/// Connect to Discord and serve commands until shutdown.
///
/// The periodic poster starts once the gateway reports ready.
pub async fn run(config: &NewsConfig, bot: Arc<NewsBot>) -> Result<()> {
    let token = config.require_token()?.to_string();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                crypto(),
                saham(),
                keuangan(),
                semua(),
                set_channel(),
                help_finance(),
            ],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(config.command_prefix.clone()),
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, _framework| {
            Box::pin(async move {
                tracing::info!(user = %ready.user.name, "Bot is online");

                let resolver = Arc::new(DiscordChannels::new(Arc::clone(&ctx.http)));
                PeriodicPoster::new(&bot, resolver).spawn();

                Ok(Data { bot })
            })
        })
        .build();

    let intents =
        serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

    tracing::info!("Connecting to Discord");
    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;

    let shard_manager = Arc::clone(&client.shard_manager);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutting down");
            shard_manager.shutdown_all().await;
        }
    });

    client.start().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::{news_card, news_card_at};
    use crate::news::{Category, RawArticle};
    use crate::testing::item;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_to_embed_serializes_card() {
        let now = Utc.with_ymd_and_hms(2024, 3, 11, 9, 30, 0).unwrap();
        let card = news_card_at(&item("Halving", Category::Crypto), now);

        let embed = serde_json::to_value(to_embed(&card)).unwrap();

        assert_eq!(embed["title"], "Halving");
        assert_eq!(embed["url"], "https://news.test/Halving");
        assert_eq!(embed["color"], 0xF7931A);
        assert_eq!(embed["fields"][0]["name"], "Kategori");
        assert_eq!(embed["fields"][1]["value"], "2024-01-01");
        assert_eq!(embed["footer"]["text"], "📈 Finance News Bot | Edukasi Gratis");
        assert!(embed["timestamp"].as_str().unwrap().starts_with("2024-03-11T09:30:00"));
    }

    #[test]
    fn test_to_embed_article_without_fields() {
        let item = RawArticle::default().into_item(Category::Stock);
        let embed = serde_json::to_value(to_embed(&news_card(&item))).unwrap();

        let fields = embed["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 2);
        assert!(
            fields
                .iter()
                .all(|f| !f["value"].as_str().unwrap().trim().is_empty())
        );
        assert!(embed["url"].is_null());
    }

    #[test]
    fn test_only_text_channels_are_postable() {
        let id = serenity::ChannelId::new(42);

        assert_eq!(postable_channel(id, serenity::ChannelType::Text).unwrap(), 42);
        assert_eq!(postable_channel(id, serenity::ChannelType::News).unwrap(), 42);

        let err = postable_channel(id, serenity::ChannelType::Voice).unwrap_err();
        assert!(matches!(err, NewsError::InvalidArgument(_)));
        tokio_test::assert_err!(postable_channel(id, serenity::ChannelType::Category));
    }

    #[test]
    fn test_to_embed_without_url() {
        let card = NewsCard::new("Plain", "Body", 0x0099FF);
        let embed = serde_json::to_value(to_embed(&card)).unwrap();
        assert!(embed["url"].is_null());
    }
}
