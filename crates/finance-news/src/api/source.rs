//! One fetch routine shared by every news source
//!
//! A source is data: where to fetch from, how to read the payload, and which
//! category the items belong to. [`NewsSource::fetch`] owns the HTTP and
//! error handling so individual sources never duplicate it.

use crate::api::client::NewsHttpClient;
use crate::api::{coindesk, finance, fmp};
use crate::config::NewsConfig;
use crate::error::Result;
use crate::news::{Category, NewsItem, RawArticle};
use async_trait::async_trait;

/// Reads at most `limit` articles out of a decoded payload
pub type ArticleParser = fn(&serde_json::Value, usize) -> Result<Vec<RawArticle>>;

/// Where a source gets its items from
#[derive(Debug, Clone)]
pub enum Endpoint {
    /// JSON over HTTP GET
    Remote { url: String, parser: ArticleParser },
    /// Items assembled locally, no network involved
    Curated(fn() -> Vec<NewsItem>),
}

/// A news source descriptor
#[derive(Debug, Clone)]
pub struct NewsSource {
    /// Name used in logs
    pub name: &'static str,
    /// Category stamped on every item
    pub category: Category,
    pub endpoint: Endpoint,
}

impl NewsSource {
    /// Create a remote source
    pub fn remote(
        name: &'static str,
        category: Category,
        url: impl Into<String>,
        parser: ArticleParser,
    ) -> Self {
        Self {
            name,
            category,
            endpoint: Endpoint::Remote {
                url: url.into(),
                parser,
            },
        }
    }

    /// Fetch up to `limit` items. Every failure is logged and becomes an
    /// empty result.
    pub async fn fetch(&self, client: &NewsHttpClient, limit: usize) -> Vec<NewsItem> {
        match self.try_fetch(client, limit).await {
            Ok(items) => {
                tracing::debug!(source = self.name, count = items.len(), "Fetched news");
                items
            }
            Err(e) => {
                tracing::warn!(source = self.name, error = %e, "Error fetching news");
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self, client: &NewsHttpClient, limit: usize) -> Result<Vec<NewsItem>> {
        match &self.endpoint {
            Endpoint::Remote { url, parser } => {
                let payload = client.get_json(url).await?;
                let articles = parser(&payload, limit)?;
                Ok(articles
                    .into_iter()
                    .take(limit)
                    .map(|article| article.into_item(self.category))
                    .collect())
            }
            Endpoint::Curated(build) => Ok(build().into_iter().take(limit).collect()),
        }
    }
}

/// Anything that can produce the latest items for a category
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsFetcher: Send + Sync {
    /// Latest items, possibly empty. Never fails.
    async fn fetch(&self, category: Category) -> Vec<NewsItem>;
}

/// The configured sources sharing one HTTP client
#[derive(Debug, Clone)]
pub struct NewsFeeds {
    client: NewsHttpClient,
    sources: Vec<NewsSource>,
    limit: usize,
}

impl NewsFeeds {
    /// Crypto, stock and finance sources as configured
    pub fn from_config(config: &NewsConfig, client: NewsHttpClient) -> Self {
        let finance = match &config.finance_url {
            Some(url) => NewsSource::remote(
                "finance",
                Category::Finance,
                url.clone(),
                finance::parse_articles,
            ),
            None => NewsSource {
                name: "finance",
                category: Category::Finance,
                endpoint: Endpoint::Curated(finance::curated_digest),
            },
        };

        let sources = vec![
            NewsSource::remote(
                "coindesk",
                Category::Crypto,
                config.crypto_url.clone(),
                coindesk::parse_articles,
            ),
            NewsSource::remote(
                "financialmodelingprep",
                Category::Stock,
                config.stock_url.clone(),
                fmp::parse_articles,
            ),
            finance,
        ];

        Self::new(client, sources, config.max_items_per_update)
    }

    /// Build from explicit sources
    pub fn new(client: NewsHttpClient, sources: Vec<NewsSource>, limit: usize) -> Self {
        Self {
            client,
            sources,
            limit,
        }
    }
}

#[async_trait]
impl NewsFetcher for NewsFeeds {
    async fn fetch(&self, category: Category) -> Vec<NewsItem> {
        let Some(source) = self.sources.iter().find(|s| s.category == category) else {
            tracing::warn!(%category, "No news source registered");
            return Vec::new();
        };

        source.fetch(&self.client, self.limit).await
    }
}
