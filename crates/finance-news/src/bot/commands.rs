//! Command parsing for text-prefixed chat commands

use crate::error::{NewsError, Result};
use crate::news::Category;

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Latest crypto news
    Crypto,
    /// Latest stock news
    Stocks,
    /// Latest general finance news
    Finance,
    /// Every source combined
    All,
    /// Set the automatic update channel (admin only)
    SetChannel { channel: Option<u64> },
    /// Show help
    Help,
}

impl Command {
    /// Parse `input` if it starts with `prefix`.
    ///
    /// Returns `Ok(None)` for ordinary chat lines and a bare prefix.
    pub fn parse(input: &str, prefix: &str) -> Result<Option<Self>> {
        let input = input.trim();

        let Some(body) = input.strip_prefix(prefix) else {
            return Ok(None);
        };

        let mut parts = body.split_whitespace();
        let Some(name) = parts.next() else {
            return Ok(None);
        };

        let command = match name {
            "crypto" => Command::Crypto,
            "saham" => Command::Stocks,
            "keuangan" => Command::Finance,
            "semua" => Command::All,
            "set_channel" => Command::SetChannel {
                channel: parts.next().map(parse_channel).transpose()?,
            },
            "help_finance" => Command::Help,
            _ => return Err(NewsError::UnknownCommand(name.to_string())),
        };

        Ok(Some(command))
    }

    /// Command name as typed after the prefix
    pub fn name(&self) -> &'static str {
        match self {
            Command::Crypto => "crypto",
            Command::Stocks => "saham",
            Command::Finance => "keuangan",
            Command::All => "semua",
            Command::SetChannel { .. } => "set_channel",
            Command::Help => "help_finance",
        }
    }

    /// Categories a read command fetches, in posting order
    pub fn categories(&self) -> &'static [Category] {
        match self {
            Command::Crypto => &[Category::Crypto],
            Command::Stocks => &[Category::Stock],
            Command::Finance => &[Category::Finance],
            Command::All => &Category::ALL,
            Command::SetChannel { .. } | Command::Help => &[],
        }
    }

    /// Acknowledgment sent before fetching
    pub fn searching_notice(&self) -> Option<&'static str> {
        match self {
            Command::Crypto => Some("🔍 Mencari berita crypto terbaru..."),
            Command::Stocks => Some("🔍 Mencari berita saham terbaru..."),
            Command::Finance => Some("🔍 Mencari berita keuangan terbaru..."),
            Command::All => Some("🔍 Mencari semua berita keuangan terbaru..."),
            Command::SetChannel { .. } | Command::Help => None,
        }
    }

    /// Sent instead of cards when nothing could be fetched
    pub fn failure_notice(&self) -> Option<&'static str> {
        match self {
            Command::Crypto => Some("❌ Tidak dapat mengambil berita crypto saat ini."),
            Command::Stocks => Some("❌ Tidak dapat mengambil berita saham saat ini."),
            Command::Finance => Some("❌ Tidak dapat mengambil berita keuangan saat ini."),
            Command::All => Some("❌ Tidak dapat mengambil berita saat ini."),
            Command::SetChannel { .. } | Command::Help => None,
        }
    }
}

/// Accept a channel mention (`<#123>`) or a bare id
fn parse_channel(arg: &str) -> Result<u64> {
    let id = arg
        .strip_prefix("<#")
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(arg);

    match id.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(NewsError::InvalidArgument(format!("not a channel: {arg}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_read_commands() {
        assert_eq!(Command::parse("!crypto", "!").unwrap(), Some(Command::Crypto));
        assert_eq!(Command::parse("  !saham ", "!").unwrap(), Some(Command::Stocks));
        assert_eq!(Command::parse("!keuangan", "!").unwrap(), Some(Command::Finance));
        assert_eq!(Command::parse("!semua", "!").unwrap(), Some(Command::All));
        assert_eq!(Command::parse("!help_finance", "!").unwrap(), Some(Command::Help));
    }

    #[test]
    fn test_parse_set_channel() {
        assert_eq!(
            Command::parse("!set_channel", "!").unwrap(),
            Some(Command::SetChannel { channel: None })
        );
        assert_eq!(
            Command::parse("!set_channel <#987654321>", "!").unwrap(),
            Some(Command::SetChannel {
                channel: Some(987_654_321)
            })
        );
        assert_eq!(
            Command::parse("!set_channel 42", "!").unwrap(),
            Some(Command::SetChannel { channel: Some(42) })
        );
    }

    #[test]
    fn test_parse_bad_channel() {
        let err = Command::parse("!set_channel #general", "!").unwrap_err();
        assert!(matches!(err, NewsError::InvalidArgument(_)));
    }

    #[test]
    fn test_parse_plain_chat() {
        assert_eq!(Command::parse("good morning", "!").unwrap(), None);
    }

    #[test]
    fn test_parse_bare_prefix() {
        assert_eq!(Command::parse("!", "!").unwrap(), None);
        assert_eq!(Command::parse("  !   ", "!").unwrap(), None);
    }

    #[test]
    fn test_parse_unknown() {
        let err = Command::parse("!berita", "!").unwrap_err();
        assert!(matches!(err, NewsError::UnknownCommand(name) if name == "berita"));
        assert!(Command::parse("!CRYPTO", "!").is_err());
    }

    #[test]
    fn test_notices() {
        assert!(Command::All.searching_notice().is_some());
        assert_eq!(
            Command::All.failure_notice(),
            Some("❌ Tidak dapat mengambil berita saat ini.")
        );
        assert!(Command::Help.failure_notice().is_none());
        assert_eq!(Command::All.categories().len(), 3);
    }
}
