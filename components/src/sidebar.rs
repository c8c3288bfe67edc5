use crate::{OrderForm, PortfolioRow};
use leptos::prelude::*;
use trading_sidebar_core::{DisplayState, PORTFOLIO, SELECTED_ASSETS};
use tracing::info;

#[component]
pub fn Sidebar() -> impl IntoView {
    info!("rendering <Sidebar/>");

    on_cleanup(move || {
        info!("cleaning up <Sidebar/>");
    });

    let display_state = RwSignal::new(DisplayState::new());

    let [first_asset, second_asset] = SELECTED_ASSETS;

    view! {
        <div class="sidebar">
            <div class="selected-assets-title">"Selected assets:"</div>
            <div class="selected-asset-one">{first_asset}</div>
            <div class="selected-asset-two">{second_asset}</div>
            <div class="your-portfolio">"Your Portfolio:"</div>
            {PORTFOLIO
                .into_iter()
                .map(|holding| view! { <PortfolioRow holding=holding /> })
                .collect_view()}
            <div class="money-management">"Money management:"</div>
            <button class="button-outline">"Deposit"</button>
            <button class="button-outline">"Withdraw"</button>
            <div class="actions">"Actions:"</div>
            <button class="buy">"Buy"</button>
            <button class="sell">"Sell"</button>
            <OrderForm display_state=display_state />
        </div>
    }
}
