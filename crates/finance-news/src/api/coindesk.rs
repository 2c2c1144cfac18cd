//! CoinDesk article feed
//!
//! Payload shape: `{"articles": [{"title", "url", "summary", "published_date"}]}`.

use crate::error::{NewsError, Result};
use crate::news::RawArticle;
use serde_json::Value;

const SOURCE: &str = "coindesk";

/// Read up to `limit` articles. A payload without `articles` has no news.
pub fn parse_articles(payload: &Value, limit: usize) -> Result<Vec<RawArticle>> {
    let Some(object) = payload.as_object() else {
        return Err(malformed("payload is not an object"));
    };

    let articles = match object.get("articles") {
        None => return Ok(Vec::new()),
        Some(Value::Array(articles)) => articles,
        Some(_) => return Err(malformed("`articles` is not an array")),
    };

    articles
        .iter()
        .take(limit)
        .map(|article| {
            if article.is_object() {
                Ok(RawArticle::from_json(article, &["summary"], &["published_date"]))
            } else {
                Err(malformed("article is not an object"))
            }
        })
        .collect()
}

fn malformed(reason: &str) -> NewsError {
    NewsError::MalformedPayload {
        source_name: SOURCE.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_articles() {
        let payload = json!({
            "articles": [
                {"title": "BTC tops 70k", "url": "https://cd/1", "summary": "Rally", "published_date": "2024-03-11"},
                {"title": "ETH upgrade", "url": "https://cd/2"}
            ]
        });

        let articles = parse_articles(&payload, 3).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title.as_deref(), Some("BTC tops 70k"));
        assert_eq!(articles[0].published.as_deref(), Some("2024-03-11"));
        assert_eq!(articles[1].summary, None);
    }

    #[test]
    fn test_missing_articles_key_is_empty() {
        assert!(parse_articles(&json!({"status": "ok"}), 3).unwrap().is_empty());
    }

    #[test]
    fn test_only_inspects_up_to_limit() {
        let payload = json!({"articles": [{"title": "ok"}, "garbage"]});
        assert_eq!(parse_articles(&payload, 1).unwrap().len(), 1);
        assert!(parse_articles(&payload, 2).is_err());
    }

    #[test]
    fn test_rejects_wrong_shapes() {
        assert!(parse_articles(&json!([]), 3).is_err());
        assert!(parse_articles(&json!({"articles": {"title": "x"}}), 3).is_err());
    }
}
