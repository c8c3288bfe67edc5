use leptos::prelude::*;
use trading_sidebar_core::Holding;

#[component]
pub fn PortfolioRow(holding: Holding) -> impl IntoView {
    let Holding { ticker, amount } = holding;

    view! {
        <div class="grid-center">{format!("{ticker}:")}</div>
        <div class="grid-name">{amount}</div>
    }
}
