use leptos::prelude::*;
use trading_sidebar::App;
use trading_sidebar_core::MAX_LOG_LEVEL;
use tracing_subscriber::fmt;
use tracing_subscriber_wasm::MakeConsoleWriter;

fn main() {
    fmt()
        .with_writer(MakeConsoleWriter::default().map_trace_level_to(tracing::Level::DEBUG))
        .with_max_level(MAX_LOG_LEVEL)
        // the browser console adds its own timestamps
        .without_time()
        .with_ansi(false)
        .init();
    console_error_panic_hook::set_once();

    mount_to_body(App)
}
