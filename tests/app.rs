//! Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use leptos::{mount::mount_to, prelude::*, task::Executor};
use trading_sidebar::{App, Main};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlSelectElement};

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> HtmlElement {
    let _ = Executor::init_wasm_bindgen();

    let container = document()
        .create_element("div")
        .unwrap()
        .unchecked_into::<HtmlElement>();
    document().body().unwrap().append_child(&container).unwrap();
    container
}

fn find<T: JsCast>(root: &Element, selector: &str) -> T {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {selector}"))
        .unchecked_into::<T>()
}

#[wasm_bindgen_test]
fn main_wraps_a_single_sidebar() {
    let root = container();
    let _handle = mount_to(root.clone(), Main);

    let sidebars = root.query_selector_all(":scope > div > .sidebar").unwrap();
    assert_eq!(sidebars.length(), 1);
    assert_eq!(root.query_selector_all(".sidebar").unwrap().length(), 1);
}

#[wasm_bindgen_test]
async fn toggling_the_selector_keeps_one_sidebar() {
    let root = container();
    let _handle = mount_to(root.clone(), App);

    let select = find::<HtmlSelectElement>(&root, ".sidebar select");

    let init = EventInit::new();
    init.set_bubbles(true);
    for value in ["limit-order", "market-order", "limit-order"] {
        select.set_value(value);
        let event = Event::new_with_event_init_dict("change", &init).unwrap();
        select.dispatch_event(&event).unwrap();
        Executor::tick().await;
        Executor::tick().await;

        assert_eq!(root.query_selector_all(".sidebar").unwrap().length(), 1);
    }
}
