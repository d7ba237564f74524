//! Footer clock.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;

/// Refresh period of the clock, in milliseconds.
const TICK_MS: u32 = 1000;

/// Local date and time, refreshed every second.
///
/// Renders "Loading..." until the first tick.
#[component]
pub fn Clock() -> Element {
    let mut now = use_signal(String::new);

    use_future(move || async move {
        loop {
            now.set(local_time_string());
            TimeoutFuture::new(TICK_MS).await;
        }
    });

    let text = now();
    rsx! {
        span {
            if text.is_empty() { "Loading..." } else { "{text}" }
        }
    }
}

/// The browser's locale-formatted current date and time.
fn local_time_string() -> String {
    js_sys::Date::new_0()
        .to_locale_string("default", &JsValue::UNDEFINED)
        .into()
}
