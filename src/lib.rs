use leptos::prelude::*;
use leptos_meta::*;
use trading_sidebar_components::Sidebar;
use tracing::info;

pub const TITLE: &str = "Trading Sidebar";

#[component]
pub fn App() -> impl IntoView {
    info!("rendering <App/>");

    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    on_cleanup(move || {
        info!("cleaning up <App/>");
    });

    view! {
        <Title text=TITLE />
        <Main />
    }
}

/// Top-level container. Holds exactly one [`Sidebar`].
#[component]
pub fn Main() -> impl IntoView {
    info!("rendering <Main/>");

    on_cleanup(move || {
        info!("cleaning up <Main/>");
    });

    view! {
        <div>
            <Sidebar />
        </div>
    }
}
