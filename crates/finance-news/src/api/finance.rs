//! General finance news
//!
//! Without a configured endpoint this source serves a curated market
//! digest dated today. With `FINANCE_NEWS_URL` set it reads a generic feed.

use crate::error::{NewsError, Result};
use crate::news::{Category, NewsItem, RawArticle};
use chrono::Local;
use serde_json::Value;

const DIGEST_TITLE: &str = "Market Update: Global Financial Markets Show Mixed Signals";
const DIGEST_URL: &str = "https://example.com";
const DIGEST_SUMMARY: &str =
    "Recent market analysis shows mixed signals across global financial markets...";

/// The curated digest. Its summary is already written as a teaser, so it is
/// not run through truncation.
pub fn curated_digest() -> Vec<NewsItem> {
    vec![NewsItem {
        title: DIGEST_TITLE.to_string(),
        url: DIGEST_URL.to_string(),
        summary: DIGEST_SUMMARY.to_string(),
        category: Category::Finance,
        published: Local::now().format("%Y-%m-%d").to_string(),
    }]
}

/// Read up to `limit` articles from a bare array or an `articles` object
pub fn parse_articles(payload: &Value, limit: usize) -> Result<Vec<RawArticle>> {
    let articles = match payload {
        Value::Array(articles) => articles,
        Value::Object(object) => match object.get("articles") {
            Some(Value::Array(articles)) => articles,
            None => return Ok(Vec::new()),
            Some(_) => return Err(malformed("`articles` is not an array")),
        },
        _ => return Err(malformed("payload is neither an array nor an object")),
    };

    articles
        .iter()
        .take(limit)
        .map(|article| {
            if article.is_object() {
                Ok(RawArticle::from_json(
                    article,
                    &["summary", "text", "description"],
                    &["published_date", "publishedDate", "publishedAt"],
                ))
            } else {
                Err(malformed("article is not an object"))
            }
        })
        .collect()
}

fn malformed(reason: &str) -> NewsError {
    NewsError::MalformedPayload {
        source_name: "finance".to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_curated_digest() {
        let digest = curated_digest();
        assert_eq!(digest.len(), 1);
        assert_eq!(digest[0].category, Category::Finance);
        assert_eq!(digest[0].url, "https://example.com");
        assert!(digest[0].summary.ends_with("..."));
        assert!(chrono::NaiveDate::parse_from_str(&digest[0].published, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_parse_news_api_shape() {
        let payload = json!({
            "status": "ok",
            "articles": [
                {"title": "Bond yields climb", "description": "Yields rose", "url": "https://n/1", "publishedAt": "2024-06-01T08:00:00Z"}
            ]
        });

        let articles = parse_articles(&payload, 3).unwrap();
        assert_eq!(articles[0].summary.as_deref(), Some("Yields rose"));
        assert_eq!(articles[0].published.as_deref(), Some("2024-06-01T08:00:00Z"));
    }

    #[test]
    fn test_parse_bare_array() {
        let payload = json!([{"title": "One", "text": "Body"}]);
        let articles = parse_articles(&payload, 3).unwrap();
        assert_eq!(articles[0].summary.as_deref(), Some("Body"));
    }

    #[test]
    fn test_rejects_scalar_payload() {
        assert!(parse_articles(&json!("nope"), 3).is_err());
    }
}
