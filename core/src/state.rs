use crate::{
    constants::{HIDDEN_CLASS, LIMIT_ORDER, MARKET_ORDER},
    error::Error,
};
use std::{fmt, str::FromStr};
use tracing::debug;

/// The choices offered by the order type selector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderType {
    #[default]
    Market,
    Limit,
}

impl OrderType {
    /// Every order type, in the order the selector lists them.
    pub const ALL: [OrderType; 2] = [OrderType::Market, OrderType::Limit];

    /// The `value` attribute of the matching `<option>`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderType::Market => MARKET_ORDER,
            OrderType::Limit => LIMIT_ORDER,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            OrderType::Market => "Market Order",
            OrderType::Limit => "Limit Order",
        }
    }

    /// Parses a selector value, treating anything unrecognised as a market order.
    pub fn from_value_or_default(value: &str) -> Self {
        value.parse().unwrap_or_else(|error: Error| {
            debug!("{error}, falling back to {}", OrderType::default());
            OrderType::default()
        })
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            MARKET_ORDER => Ok(OrderType::Market),
            LIMIT_ORDER => Ok(OrderType::Limit),
            other => Err(Error::UnknownOrderType(other.to_string())),
        }
    }
}

/// Local UI state owned by the sidebar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    pub show_limit_order_input: bool,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, order_type: OrderType) {
        self.show_limit_order_input = order_type == OrderType::Limit;
    }

    /// Applies a raw selector value and returns whether the price input is now shown.
    pub fn apply(&mut self, value: &str) -> bool {
        self.select(OrderType::from_value_or_default(value));
        self.show_limit_order_input
    }

    pub fn price_input_class(&self) -> &'static str {
        if self.show_limit_order_input {
            ""
        } else {
            HIDDEN_CLASS
        }
    }
}
