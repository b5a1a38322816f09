//! HTML message formatting for quotes.

use cryptobot_core::PriceQuote;
use teloxide::utils::html;

/// Symbols offered as suggestions when a lookup fails.
pub const POPULAR_SYMBOLS: &[&str] = &[
    "BTC", "ETH", "BNB", "SOL", "XRP", "ADA", "DOGE", "DOT", "LINK", "LTC",
];

/// Format price with appropriate precision based on magnitude.
pub fn format_price(price: f64) -> String {
    if price == 0.0 {
        return "$0".to_string();
    }
    let abs_price = price.abs();
    if abs_price >= 1000.0 {
        format!("${:.2}", price)
    } else if abs_price >= 1.0 {
        format!("${:.4}", price)
    } else if abs_price >= 0.01 {
        format!("${:.6}", price)
    } else if abs_price >= 0.0001 {
        format!("${:.8}", price)
    } else {
        // Very small prices - keep enough decimals to stay meaningful
        format!("${:.10}", price)
    }
}

/// Format a 24h volume with a magnitude suffix.
pub fn format_volume(volume: f64) -> String {
    if volume >= 1_000_000_000.0 {
        format!("{:.2}B", volume / 1_000_000_000.0)
    } else if volume >= 1_000_000.0 {
        format!("{:.2}M", volume / 1_000_000.0)
    } else if volume >= 1_000.0 {
        format!("{:.2}K", volume / 1_000.0)
    } else {
        format!("{:.2}", volume)
    }
}

/// Format a quote as an HTML message.
///
/// The 24h range line only appears when the provider reported both
/// bounds; the volume line only when volume is present and positive.
pub fn format_quote(quote: &PriceQuote) -> String {
    let direction = if quote.is_up() { "📈" } else { "📉" };

    let mut msg = format!(
        "<b>{}</b>\n\n\
         💰 <b>Price:</b> {}\n\
         {} <b>24h Change:</b> {:+.2}%",
        quote.symbol,
        format_price(quote.price),
        direction,
        quote.change_24h
    );

    if let (Some(low), Some(high)) = (quote.low_24h, quote.high_24h) {
        msg.push_str(&format!(
            "\n📊 <b>24h Range:</b> {} - {}",
            format_price(low),
            format_price(high)
        ));
    }

    if let Some(volume) = quote.volume_24h {
        if volume > 0.0 {
            msg.push_str(&format!("\n📦 <b>24h Volume:</b> {}", format_volume(volume)));
        }
    }

    msg.push_str(&format!("\n\n🔗 Source: {}", quote.source.display_name()));

    let now = chrono::Utc::now();
    msg.push_str(&format!("\n⏰ {}", now.format("%Y-%m-%d %H:%M:%S UTC")));

    msg
}

/// Reply for a symbol no provider could resolve.
///
/// The failed symbol is raw user input and must be escaped before it
/// lands in an HTML-mode message.
pub fn suggest_alternatives(failed: &str) -> String {
    let suggestions = POPULAR_SYMBOLS
        .iter()
        .take(6)
        .map(|symbol| format!("/price {}", symbol))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "❌ Could not find a price for <b>{}</b>.\n\n\
         Popular alternatives:\n{}",
        html::escape(failed),
        suggestions
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryptobot_core::{PriceQuote, Provider, Symbol};
    use pretty_assertions::assert_eq;

    fn btc_quote() -> PriceQuote {
        PriceQuote::new(Symbol::parse("BTC").unwrap(), 67000.5, Provider::Binance)
            .with_change_24h(2.3)
            .with_range_24h(Some(65000.0), Some(68000.0))
            .with_volume_24h(Some(28_500_000_000.0))
    }

    #[test]
    fn test_format_price_tiers() {
        assert_eq!(format_price(0.0), "$0");
        assert_eq!(format_price(67000.5), "$67000.50");
        assert_eq!(format_price(3.14159), "$3.1416");
        assert_eq!(format_price(0.123456), "$0.123456");
        assert_eq!(format_price(0.00012345), "$0.00012345");
        assert_eq!(format_price(0.000012345678), "$0.0000123457");
    }

    #[test]
    fn test_format_volume_suffixes() {
        assert_eq!(format_volume(28_500_000_000.0), "28.50B");
        assert_eq!(format_volume(450_000.0), "450.00K");
        assert_eq!(format_volume(1_234_567.0), "1.23M");
        assert_eq!(format_volume(42.5), "42.50");
    }

    #[test]
    fn test_format_quote_full() {
        let msg = format_quote(&btc_quote());
        assert!(msg.contains("<b>BTC</b>"));
        assert!(msg.contains("$67000.50"));
        assert!(msg.contains("📈"));
        assert!(msg.contains("+2.30%"));
        assert!(msg.contains("$65000.00 - $68000.00"));
        assert!(msg.contains("28.50B"));
        assert!(msg.contains("Source: Binance"));
    }

    #[test]
    fn test_format_quote_negative_change() {
        let quote = PriceQuote::new(Symbol::parse("ETH").unwrap(), 3500.0, Provider::CoinGecko)
            .with_change_24h(-1.75);
        let msg = format_quote(&quote);
        assert!(msg.contains("📉"));
        assert!(msg.contains("-1.75%"));
        assert!(msg.contains("Source: CoinGecko"));
    }

    #[test]
    fn test_format_quote_omits_missing_range_and_volume() {
        let quote = PriceQuote::new(Symbol::parse("ETH").unwrap(), 3500.0, Provider::CoinGecko)
            .with_change_24h(0.5);
        let msg = format_quote(&quote);
        assert!(!msg.contains("24h Range"));
        assert!(!msg.contains("24h Volume"));
    }

    #[test]
    fn test_suggest_alternatives_escapes_html() {
        // Input that failed symbol validation can carry HTML metacharacters;
        // sending them raw makes Telegram reject the whole message.
        let msg = suggest_alternatives("BTC<ETH");
        assert!(msg.contains("<b>BTC&lt;ETH</b>"));
        assert!(!msg.contains("<b>BTC<ETH</b>"));

        let msg = suggest_alternatives("A&B");
        assert!(msg.contains("<b>A&amp;B</b>"));
    }

    #[test]
    fn test_suggest_alternatives_lists_popular_symbols() {
        let msg = suggest_alternatives("NOTACOIN");
        assert!(msg.contains("<b>NOTACOIN</b>"));
        assert!(msg.contains("/price BTC"));
        assert!(msg.contains("/price ADA"));
        // Only the first six are offered.
        assert!(!msg.contains("/price DOGE"));
    }
}
