//! Telegram bot handlers.

use crate::format;
use cryptobot_market::PriceFetcher;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::utils::command::BotCommands;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Telegram API error: {0}")]
    Api(#[from] teloxide::RequestError),
}

/// Bot commands.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "Start the bot")]
    Start,
    #[command(description = "Look up prices. Usage: /price BTC or /price BTC,ETH,SOL")]
    Price(String),
    #[command(description = "Show the configured price providers")]
    Providers,
    #[command(description = "Show help")]
    Help,
}

/// Telegram bot wrapper.
pub struct PriceBot {
    bot: Bot,
    fetcher: Arc<PriceFetcher>,
}

impl PriceBot {
    /// Create a new bot with the given token.
    pub fn new(token: &str, fetcher: Arc<PriceFetcher>) -> Self {
        let bot = Bot::new(token);
        Self { bot, fetcher }
    }

    /// Run the bot command handler.
    pub async fn run(self: Arc<Self>) {
        let bot = self.bot.clone();
        let handler = Update::filter_message().filter_command::<Command>().endpoint(
            move |bot: Bot, msg: Message, cmd: Command| {
                let this = Arc::clone(&self);
                async move { this.handle_command(bot, msg, cmd).await }
            },
        );

        Dispatcher::builder(bot, handler)
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    }

    async fn handle_command(&self, bot: Bot, msg: Message, cmd: Command) -> Result<(), BotError> {
        match cmd {
            Command::Start => {
                let text = "Welcome to Crypto Price Bot!\n\n\
                     Ask for any coin's current USD price:\n\
                     /price BTC\n\
                     /price BTC,ETH,SOL\n\n\
                     Use /help to see all commands.";
                bot.send_message(msg.chat.id, text).await?;
            }

            Command::Price(value) => {
                let symbols = split_symbols(&value);
                if symbols.is_empty() {
                    bot.send_message(msg.chat.id, "Usage: /price <symbol>\nExample: /price BTC")
                        .await?;
                    return Ok(());
                }

                info!("Price request from {}: {:?}", msg.chat.id, symbols);
                let results = self.fetcher.fetch_prices(&symbols).await;

                for (symbol, result) in results {
                    let text = match result {
                        Some(quote) => format::format_quote(&quote),
                        None => format::suggest_alternatives(&symbol),
                    };
                    bot.send_message(msg.chat.id, text)
                        .parse_mode(ParseMode::Html)
                        .await?;
                }
            }

            Command::Providers => {
                let lines: Vec<String> = self
                    .fetcher
                    .providers()
                    .iter()
                    .map(|config| {
                        format!(
                            "{}. {} ({} req/min)",
                            config.priority,
                            config.provider.display_name(),
                            config.requests_per_minute
                        )
                    })
                    .collect();
                let text = format!("<b>Price providers</b>\n\n{}", lines.join("\n"));
                bot.send_message(msg.chat.id, text)
                    .parse_mode(ParseMode::Html)
                    .await?;
            }

            Command::Help => {
                bot.send_message(msg.chat.id, Command::descriptions().to_string())
                    .await?;
            }
        }

        Ok(())
    }
}

/// Split a /price argument into individual tickers.
///
/// Accepts comma or whitespace separation; normalization and validation
/// happen later in the fetcher.
fn split_symbols(value: &str) -> Vec<String> {
    value
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_symbols_commas_and_spaces() {
        assert_eq!(split_symbols("BTC"), vec!["BTC"]);
        assert_eq!(split_symbols("BTC,ETH,SOL"), vec!["BTC", "ETH", "SOL"]);
        assert_eq!(split_symbols("btc eth"), vec!["btc", "eth"]);
        assert_eq!(split_symbols(" BTC , ETH "), vec!["BTC", "ETH"]);
        assert!(split_symbols("").is_empty());
        assert!(split_symbols("  ,, ").is_empty());
    }

    #[test]
    fn test_command_parsing() {
        let cmd = Command::parse("/price BTC", "testbot").unwrap();
        assert!(matches!(cmd, Command::Price(ref s) if s == "BTC"));

        let cmd = Command::parse("/start", "testbot").unwrap();
        assert!(matches!(cmd, Command::Start));

        let cmd = Command::parse("/providers", "testbot").unwrap();
        assert!(matches!(cmd, Command::Providers));

        assert!(Command::parse("/unknown", "testbot").is_err());
    }
}
