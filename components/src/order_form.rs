use leptos::{ev, prelude::*};
use trading_sidebar_core::{
    constants::{PRICE_INPUT_NAME, PRICE_INPUT_PLACEHOLDER},
    DisplayState, OrderType,
};
use tracing::{debug, info};

/// Order type selector, plus the limit price field it reveals.
///
/// The caller owns `display_state`. This component writes it only from the
/// selector's `change` handler.
#[component]
pub fn OrderForm(display_state: RwSignal<DisplayState>) -> impl IntoView {
    info!("rendering <OrderForm/>");

    on_cleanup(move || {
        info!("cleaning up <OrderForm/>");
    });

    let on_order_type_change = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        display_state.update(|state| {
            let shown = state.apply(&value);
            debug!("selected {value:?}, limit price input shown: {shown}");
        });
    };

    let options = OrderType::ALL
        .into_iter()
        .map(|order_type| {
            view! {
                <option value=order_type.as_str() selected=order_type == OrderType::default()>
                    {order_type.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <select on:change=on_order_type_change>{options}</select>
        <input
            name=PRICE_INPUT_NAME
            class=move || display_state.get().price_input_class()
            type="number"
            placeholder=PRICE_INPUT_PLACEHOLDER
        />
    }
}
