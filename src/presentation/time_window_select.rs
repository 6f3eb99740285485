use crate::domain::market_data::TimeWindow;
use leptos::*;

/// `<select>` over the fixed window options. Emits only parseable values.
#[component]
pub fn TimeWindowSelect(
    #[prop(into)] value: Signal<TimeWindow>,
    #[prop(into)] on_change: Callback<TimeWindow>,
) -> impl IntoView {
    view! {
        <label class="window-select">
            "Time Window: "
            <select
                prop:value=move || value.get().to_string()
                on:change=move |ev| {
                    if let Ok(window) = event_target_value(&ev).parse::<TimeWindow>() {
                        on_change.call(window);
                    }
                }
            >
                {TimeWindow::options()
                    .map(|window| {
                        view! {
                            <option value=window.to_string() selected=move || value.get() == window>
                                {window.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
