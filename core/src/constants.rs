use crate::types::Holding;
use tracing::Level;

// Compile-time configuration
pub const MAX_LOG_LEVEL: Level = if cfg!(debug_assertions) {
    Level::DEBUG
} else {
    Level::INFO
};

pub const MARKET_ORDER: &str = "market-order";
pub const LIMIT_ORDER: &str = "limit-order";

/// Class the stylesheet uses to take an element out of the layout.
pub const HIDDEN_CLASS: &str = "hidden";

pub const PRICE_INPUT_PLACEHOLDER: &str = "Price to buy or sell at...";

/// Identifies the limit price field in the rendered form.
pub const PRICE_INPUT_NAME: &str = "limit-order-amount";

pub const SELECTED_ASSETS: [&str; 2] = ["ETH", "BTC"];

// Placeholder figures. There is no portfolio source behind them.
pub const PORTFOLIO: [Holding; 2] = [
    Holding {
        ticker: "ETH",
        amount: 10,
    },
    Holding {
        ticker: "BTC",
        amount: 200,
    },
];
