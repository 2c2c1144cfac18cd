//! Finance News Bot
//!
//! Posts crypto, stock and finance news into Discord on command and every
//! 30 minutes.
//!
//! # Usage
//!
//! ```bash
//! # Connect to Discord
//! export DISCORD_BOT_TOKEN="..."
//! cargo run --bin finance-news-bot -p finance-news
//!
//! # Try the commands locally, no token needed
//! cargo run --bin finance-news-bot -p finance-news -- --console --no-keepalive
//! ```

use clap::Parser;
use finance_news::platforms::{console, discord};
use finance_news::{ChannelSettings, NewsBot, NewsConfig, NewsFeeds, NewsHttpClient, keepalive};
use finance_utils::{AppConfig, init_tracing_with};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "finance-news-bot")]
#[command(about = "Discord bot for crypto, stock and finance news", long_about = None)]
struct Args {
    /// Read commands from stdin instead of connecting to Discord
    #[arg(long)]
    console: bool,

    /// Liveness server port (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Do not start the liveness server
    #[arg(long)]
    no_keepalive: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let app = AppConfig::from_env()?;
    init_tracing_with(app.log_format);

    tracing::info!(
        app = %app.app_name,
        environment = %app.environment,
        "🚀 Memulai Discord Finance News Bot..."
    );

    let mut config = NewsConfig::from_env()?;
    if let Some(port) = args.port {
        config.keepalive_port = port;
    }

    if !args.console {
        if config.require_token().is_err() {
            eprintln!("❌ ERROR: DISCORD_BOT_TOKEN tidak ditemukan!");
            eprintln!("Silakan set environment variable DISCORD_BOT_TOKEN");
            std::process::exit(1);
        }
        tracing::info!("✅ Bot token ditemukan");
    }

    if !args.no_keepalive {
        keepalive::spawn(config.keepalive_port)?;
    }

    let config = Arc::new(config);
    let feeds = NewsFeeds::from_config(&config, NewsHttpClient::new(&config)?);
    let bot = Arc::new(NewsBot::new(
        Arc::new(feeds),
        Arc::new(ChannelSettings::new()),
        Arc::clone(&config),
    ));

    let result = if args.console {
        console::run(bot).await
    } else {
        discord::run(&config, bot).await
    };

    if let Err(e) = result {
        eprintln!("❌ Error starting bot: {e}");
        std::process::exit(1);
    }

    Ok(())
}
