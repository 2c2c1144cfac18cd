//! Test doubles shared by the unit tests

use crate::error::{NewsError, Result};
use crate::interface::{BotPlatform, NewsCard, NewsSink};
use crate::news::{Category, NewsItem};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// One message delivered to a [`RecordingSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text(String),
    Card(NewsCard),
}

/// Sink that remembers everything sent to it
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    sent: Arc<Mutex<Vec<Sent>>>,
    fail: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every send fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text(text) => Some(text),
                Sent::Card(_) => None,
            })
            .collect()
    }

    pub fn card_titles(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Card(card) => Some(card.title),
                Sent::Text(_) => None,
            })
            .collect()
    }

    fn record(&self, sent: Sent) -> Result<()> {
        if self.fail {
            return Err(NewsError::Other("send refused".to_string()));
        }
        self.sent.lock().unwrap().push(sent);
        Ok(())
    }
}

#[async_trait]
impl NewsSink for RecordingSink {
    fn platform(&self) -> BotPlatform {
        BotPlatform::Console
    }

    async fn send_text(&self, text: &str) -> Result<()> {
        self.record(Sent::Text(text.to_string()))
    }

    async fn send_card(&self, card: &NewsCard) -> Result<()> {
        self.record(Sent::Card(card.clone()))
    }
}

pub fn item(title: &str, category: Category) -> NewsItem {
    NewsItem {
        title: title.to_string(),
        url: format!("https://news.test/{title}"),
        summary: format!("{title} summary..."),
        category,
        published: "2024-01-01".to_string(),
    }
}

pub fn items(titles: &[&str], category: Category) -> Vec<NewsItem> {
    titles.iter().map(|title| item(title, category)).collect()
}

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn serve(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A URL nothing is listening on
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/news")
}
