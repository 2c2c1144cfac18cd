//! Financial Modeling Prep stock news
//!
//! Payload shape: `[{"title", "url", "text", "publishedDate", ...}]`.

use crate::error::{NewsError, Result};
use crate::news::RawArticle;
use serde_json::Value;

/// Read up to `limit` articles. Anything but an array (the API answers
/// with an object on errors and exhausted demo quotas) has no news.
pub fn parse_articles(payload: &Value, limit: usize) -> Result<Vec<RawArticle>> {
    let Some(articles) = payload.as_array() else {
        return Ok(Vec::new());
    };

    articles
        .iter()
        .take(limit)
        .map(|article| {
            if article.is_object() {
                Ok(RawArticle::from_json(article, &["text"], &["publishedDate"]))
            } else {
                Err(NewsError::MalformedPayload {
                    source_name: "financialmodelingprep".to_string(),
                    reason: "article is not an object".to_string(),
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_articles() {
        let payload = json!([
            {
                "symbol": "AAPL",
                "publishedDate": "2024-05-02 16:30:00",
                "title": "Apple beats estimates",
                "image": "https://img",
                "site": "reuters.com",
                "text": "Apple reported...",
                "url": "https://fmp/1"
            },
            {"title": "Second"},
            {"title": "Third"},
            {"title": "Fourth"}
        ]);

        let articles = parse_articles(&payload, 3).unwrap();
        assert_eq!(articles.len(), 3);
        assert_eq!(articles[0].summary.as_deref(), Some("Apple reported..."));
        assert_eq!(articles[0].published.as_deref(), Some("2024-05-02 16:30:00"));
        assert_eq!(articles[2].title.as_deref(), Some("Third"));
    }

    #[test]
    fn test_non_array_is_empty() {
        let payload = json!({"Error Message": "Limit Reach"});
        assert!(parse_articles(&payload, 3).unwrap().is_empty());
    }

    #[test]
    fn test_non_object_article_is_malformed() {
        assert!(parse_articles(&json!([1, 2]), 3).is_err());
    }
}
