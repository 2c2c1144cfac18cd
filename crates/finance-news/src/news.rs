//! News item model shared by every source

use serde::{Deserialize, Serialize};
use std::fmt;

/// Summaries are cut to this many characters
pub const SUMMARY_LIMIT: usize = 200;

/// Appended to every remote summary, truncated or not
pub const ELLIPSIS: &str = "...";

/// Title used when the source omits one
pub const NO_TITLE: &str = "No Title";

/// Summary used when the source omits one
pub const NO_SUMMARY: &str = "No summary available";

/// News category, also used to pick the card color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Cryptocurrency news
    Crypto,
    /// Stock market news
    Stock,
    /// General finance news
    Finance,
}

impl Category {
    /// All categories, in the order the combined command fetches them
    pub const ALL: [Category; 3] = [Category::Crypto, Category::Stock, Category::Finance];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Category::Crypto => "Crypto",
            Category::Stock => "Stock",
            Category::Finance => "Finance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One normalized article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    pub summary: String,
    pub category: Category,
    /// Publish date as the source reported it
    pub published: String,
}

/// Article fields as extracted from a payload, before defaults are applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArticle {
    pub title: Option<String>,
    pub url: Option<String>,
    pub summary: Option<String>,
    pub published: Option<String>,
}

impl RawArticle {
    /// Extract string fields from a JSON object. The first key present with a
    /// string value wins; anything else counts as missing.
    pub fn from_json(
        value: &serde_json::Value,
        summary_keys: &[&str],
        published_keys: &[&str],
    ) -> Self {
        let field = |keys: &[&str]| {
            keys.iter()
                .find_map(|key| value.get(*key).and_then(serde_json::Value::as_str))
                .map(str::to_string)
        };

        Self {
            title: field(&["title"]),
            url: field(&["url"]),
            summary: field(summary_keys),
            published: field(published_keys),
        }
    }

    /// Apply defaults and summary truncation
    pub fn into_item(self, category: Category) -> NewsItem {
        let summary = self.summary.as_deref().unwrap_or(NO_SUMMARY);

        NewsItem {
            title: self.title.unwrap_or_else(|| NO_TITLE.to_string()),
            url: self.url.unwrap_or_default(),
            summary: truncate_summary(summary),
            category,
            published: self.published.unwrap_or_default(),
        }
    }
}

/// Keep the first [`SUMMARY_LIMIT`] characters and append [`ELLIPSIS`].
///
/// The ellipsis is appended even when nothing was cut.
pub fn truncate_summary(summary: &str) -> String {
    let mut truncated: String = summary.chars().take(SUMMARY_LIMIT).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truncate_long_summary() {
        let long = "a".repeat(250);
        let truncated = truncate_summary(&long);
        assert_eq!(truncated, format!("{}...", "a".repeat(200)));
    }

    #[test]
    fn test_short_summary_still_gets_ellipsis() {
        assert_eq!(truncate_summary("Short"), "Short...");
        assert_eq!(truncate_summary(""), "...");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let long = "é".repeat(201);
        let truncated = truncate_summary(&long);
        assert_eq!(truncated.chars().count(), 203);
        assert!(truncated.starts_with(&"é".repeat(200)));
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let item = RawArticle::default().into_item(Category::Crypto);
        assert_eq!(item.title, "No Title");
        assert_eq!(item.url, "");
        assert_eq!(item.summary, "No summary available...");
        assert_eq!(item.published, "");
        assert_eq!(item.category, Category::Crypto);
    }

    #[test]
    fn test_from_json_key_fallbacks() {
        let value = json!({
            "title": "Fed holds rates",
            "url": 42,
            "text": "Body",
            "publishedDate": "2024-05-01 10:00:00"
        });
        let raw = RawArticle::from_json(&value, &["summary", "text"], &["publishedDate"]);

        assert_eq!(raw.title.as_deref(), Some("Fed holds rates"));
        assert_eq!(raw.url, None);
        assert_eq!(raw.summary.as_deref(), Some("Body"));
        assert_eq!(raw.published.as_deref(), Some("2024-05-01 10:00:00"));
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Stock.to_string(), "Stock");
        assert_eq!(Category::ALL.len(), 3);
    }
}
