//! News source clients

pub mod client;
pub mod coindesk;
pub mod finance;
pub mod fmp;
pub mod source;

pub use client::NewsHttpClient;
pub use source::{ArticleParser, Endpoint, NewsFeeds, NewsFetcher, NewsSource};

#[cfg(test)]
pub use source::MockNewsFetcher;
