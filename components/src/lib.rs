mod order_form;
mod portfolio_row;
mod sidebar;

pub use order_form::OrderForm;
pub use portfolio_row::PortfolioRow;
pub use sidebar::Sidebar;
