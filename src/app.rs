use leptos::*;

use crate::{
    domain::{logging::LogComponent, navigation::Route},
    event_utils::on_history_change,
    infrastructure::browser::{current_path, push_path},
    log_info, log_warn,
    presentation::{HeatmapView, StockView},
};

/// 🦀 Dashboard shell: tab bar plus the view for the current path
#[component]
pub fn App() -> impl IntoView {
    let path = create_rw_signal(current_path());

    // back/forward
    let listener = on_history_change(move || path.set(current_path()));
    on_cleanup(move || drop(listener));

    // Single source of truth for the highlighted tab.
    let route = create_memo(move |_| path.with(|p| Route::from_path(p)));

    let navigate = move |target: Route| {
        if route.get_untracked() == Some(target) {
            return;
        }
        if let Err(e) = push_path(target.path()) {
            log_warn!(LogComponent::Presentation("App"), "history.pushState failed: {:?}", e);
        }
        log_info!(LogComponent::Presentation("App"), "🧭 navigating to {}", target.path());
        path.set(target.path().to_string());
    };

    view! {
        <style>{STYLES}</style>
        <div class="dashboard-app">
            <nav class="tabs">
                {Route::tabs()
                    .map(move |tab| {
                        view! {
                            <button
                                class="tab"
                                class:active=move || route.get() == Some(tab)
                                on:click=move |_| navigate(tab)
                            >
                                {tab.tab_label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <main>
                {move || match route.get() {
                    Some(Route::Stock) => view! { <StockView /> }.into_view(),
                    Some(Route::Heatmap) => view! { <HeatmapView /> }.into_view(),
                    None => view! { <p class="not-found">"Page not found"</p> }.into_view(),
                }}
            </main>
        </div>
    }
}

const STYLES: &str = r#"
.dashboard-app {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    padding: 20px;
    color: #222;
}

.tabs {
    display: flex;
    gap: 4px;
    border-bottom: 2px solid #ddd;
    margin-bottom: 16px;
}

.tab {
    background: none;
    border: none;
    padding: 10px 18px;
    cursor: pointer;
    font-size: 15px;
    border-bottom: 2px solid transparent;
    margin-bottom: -2px;
}

.tab.active {
    border-bottom-color: #8884d8;
    font-weight: 600;
}

.window-select select {
    margin-left: 6px;
    padding: 4px;
}

.loading, .empty, .not-found {
    padding: 40px;
    text-align: center;
    color: #666;
}

.legend {
    display: flex;
    gap: 16px;
    font-size: 13px;
}

.price-point {
    fill: transparent;
    stroke: none;
}

.price-point:hover {
    fill: #8884d8;
}

.heatmap {
    border-collapse: collapse;
    margin-top: 12px;
}

.heatmap-cell {
    width: 56px;
    height: 40px;
    text-align: center;
    font-size: 12px;
    border: 1px solid #eee;
}

.heatmap-label {
    padding: 4px 8px;
    font-size: 12px;
    font-weight: 500;
}
"#;
