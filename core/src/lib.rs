pub mod constants;
mod error;
pub mod state;
pub mod types;

pub use constants::{MAX_LOG_LEVEL, PORTFOLIO, SELECTED_ASSETS};
pub use error::Error;
pub use state::{DisplayState, OrderType};
pub use types::Holding;
