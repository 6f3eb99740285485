use super::time_window_select::TimeWindowSelect;
use super::view_driver::{FetchFn, ViewDriver};
use crate::application::view_controller::ViewController;
use crate::config::config;
use crate::domain::{
    correlation::HeatmapPayload, market_data::TimeWindow, repositories::DashboardRepository,
    view_state::ViewKind,
};
use crate::infrastructure::http::DashboardHttpClient;
use futures::FutureExt;
use leptos::*;
use std::rc::Rc;

/// 🟦 Correlation matrix, fetched on mount and on window change
#[component]
pub fn HeatmapView() -> impl IntoView {
    let settings = config();
    let controller = create_rw_signal(
        ViewController::<HeatmapPayload>::new(ViewKind::Heatmap, settings.default_window)
            .with_refresh(settings.heatmap_refresh)
            .with_stale_results(settings.stale_results),
    );

    let client = DashboardHttpClient::from_config(settings);
    let fetch: FetchFn<HeatmapPayload> = Rc::new(move |window| {
        let client = client.clone();
        async move { client.heatmap(window).await }.boxed_local()
    });

    let driver = ViewDriver::new(controller, fetch);
    driver.mount();
    on_cleanup({
        let driver = Rc::clone(&driver);
        move || driver.unmount()
    });

    let window = Signal::derive(move || controller.with(|c| c.time_window()));
    let loading = Signal::derive(move || controller.with(|c| c.is_loading()));
    let on_change = Callback::new(move |w: TimeWindow| driver.select_window(w));

    view! {
        <section class="heatmap-view">
            <h2>"Correlation Heatmap"</h2>
            <TimeWindowSelect value=window on_change=on_change />
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading">"Loading..."</div> }
            >
                {move || controller.with(|c| render_heatmap(c.data()))}
            </Show>
        </section>
    }
}

fn render_heatmap(payload: Option<&HeatmapPayload>) -> View {
    let Some(grid) = payload.and_then(HeatmapPayload::grid) else {
        return view! { <p class="empty">"No data available"</p> }.into_view();
    };

    let header = grid
        .labels()
        .iter()
        .map(|label| view! { <th class="heatmap-label">{label.clone()}</th> })
        .collect_view();

    let rows = (0..grid.row_count())
        .map(|row| {
            let cells = grid
                .row(row)
                .map(|cell| {
                    view! {
                        <td class="heatmap-cell" style:background-color=cell.background()>
                            {cell.text()}
                        </td>
                    }
                })
                .collect_view();
            view! {
                <tr>
                    <th class="heatmap-label">{grid.label(row).to_string()}</th>
                    {cells}
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="heatmap">
            <thead>
                <tr>
                    <th></th>
                    {header}
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
    .into_view()
}
