//! Platform-neutral output: cards, formatting, and the sink trait
//!
//! Platform adapters turn a [`NewsCard`] into whatever their chat service
//! renders (a Discord embed, console text).

pub mod card;
pub mod formatter;
pub mod sink;

pub use card::{CardField, NewsCard};
pub use formatter::{category_color, help_card, news_card, news_card_at, render_plain};
pub use sink::{BotPlatform, NewsSink};
