use leptos::*;
use price_dashboard_wasm::{app::App, initialize};

fn main() {
    initialize();
    mount_to_body(|| view! { <App /> });
}
