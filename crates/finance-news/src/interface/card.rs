//! Rich message card

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Labeled value shown inside a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardField {
    pub name: String,
    pub value: String,
    /// Render next to the previous field instead of on its own row
    pub inline: bool,
}

/// A platform-neutral rich message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsCard {
    pub title: String,
    /// Link target for the title
    pub url: Option<String>,
    pub description: String,
    /// Accent color as 0xRRGGBB
    pub color: u32,
    pub fields: Vec<CardField>,
    pub footer: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl NewsCard {
    /// Create a card with a title, description and accent color
    pub fn new(title: impl Into<String>, description: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            url: None,
            description: description.into(),
            color,
            fields: Vec::new(),
            footer: None,
            timestamp: None,
        }
    }

    /// Link the title. Empty URLs leave the title unlinked.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.url = if url.trim().is_empty() { None } else { Some(url) };
        self
    }

    /// Add a field
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(CardField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    /// Set the footer text
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Set the timestamp
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_builder() {
        let card = NewsCard::new("Title", "Body", 0x0099FF)
            .with_url("https://example.com")
            .with_field("A", "1", true)
            .with_field("B", "2", false)
            .with_footer("footer");

        assert_eq!(card.url.as_deref(), Some("https://example.com"));
        assert_eq!(card.fields.len(), 2);
        assert!(!card.fields[1].inline);
        assert_eq!(card.footer.as_deref(), Some("footer"));
        assert!(card.timestamp.is_none());
    }

    #[test]
    fn test_empty_url_is_dropped() {
        let card = NewsCard::new("Title", "Body", 0).with_url("");
        assert!(card.url.is_none());
    }
}
