//! News item and help formatting

use crate::interface::card::NewsCard;
use crate::news::{Category, NewsItem};
use chrono::{DateTime, Utc};

/// Bitcoin orange
pub const CRYPTO_COLOR: u32 = 0xF7931A;
pub const STOCK_COLOR: u32 = 0x00FF00;
pub const FINANCE_COLOR: u32 = 0x0099FF;

const NEWS_FOOTER: &str = "📈 Finance News Bot | Edukasi Gratis";
/// Shown in the date field when the source gave none
const NO_DATE: &str = "-";
const HELP_FOOTER: &str = "💡 Tip: Gunakan perintah di atas untuk mendapatkan berita terkini!";

/// Accent color for a category
pub fn category_color(category: Category) -> u32 {
    match category {
        Category::Crypto => CRYPTO_COLOR,
        Category::Stock => STOCK_COLOR,
        Category::Finance => FINANCE_COLOR,
    }
}

/// Card for one news item, stamped with the current time
pub fn news_card(item: &NewsItem) -> NewsCard {
    news_card_at(item, Utc::now())
}

/// Card for one news item, stamped with `now`
pub fn news_card_at(item: &NewsItem, now: DateTime<Utc>) -> NewsCard {
    let published = match item.published.trim() {
        "" => NO_DATE,
        date => date,
    };

    NewsCard::new(&item.title, &item.summary, category_color(item.category))
        .with_url(&item.url)
        .with_field("Kategori", item.category.label(), true)
        .with_field("Tanggal", published, true)
        .with_footer(NEWS_FOOTER)
        .with_timestamp(now)
}

/// The command overview card
pub fn help_card(prefix: &str) -> NewsCard {
    let commands = format!(
        "`{prefix}crypto` - Berita cryptocurrency terbaru\n\
         `{prefix}saham` - Berita saham terbaru\n\
         `{prefix}keuangan` - Berita keuangan umum\n\
         `{prefix}semua` - Semua berita keuangan"
    );

    NewsCard::new(
        "📈 Finance News Bot - Panduan",
        "Bot edukasi keuangan gratis untuk komunitas",
        FINANCE_COLOR,
    )
    .with_field("🔥 Perintah Utama", commands, false)
    .with_field(
        "⚙️ Admin Commands",
        format!("`{prefix}set_channel` - Set channel untuk update otomatis"),
        false,
    )
    .with_field(
        "ℹ️ Informasi",
        "Bot ini memberikan edukasi keuangan gratis.\n\
         Update otomatis setiap 30 menit.\n\
         Dibuat untuk berbagi pengetahuan finansial.",
        false,
    )
    .with_footer(HELP_FOOTER)
}

/// Render a card as plain text for terminals
pub fn render_plain(card: &NewsCard) -> String {
    let mut output = format!("┃ {}\n", card.title);
    if let Some(url) = &card.url {
        output.push_str(&format!("┃ {url}\n"));
    }
    if !card.description.is_empty() {
        output.push_str(&format!("┃ {}\n", card.description));
    }
    for field in &card.fields {
        let value = field.value.replace('\n', "\n┃   ");
        output.push_str(&format!("┃ {}: {}\n", field.name, value));
    }
    if let Some(footer) = &card.footer {
        output.push_str(&format!("┃ {footer}"));
        if let Some(timestamp) = card.timestamp {
            output.push_str(&format!(" • {}", timestamp.format("%Y-%m-%d %H:%M UTC")));
        }
        output.push('\n');
    }
    output
}
