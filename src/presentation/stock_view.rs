use super::time_window_select::TimeWindowSelect;
use super::view_driver::{FetchFn, ViewDriver};
use crate::application::view_controller::ViewController;
use crate::config::config;
use crate::domain::{
    chart::{AVERAGE_STROKE, LineChart, PRICE_STROKE},
    logging::LogComponent,
    market_data::{StockSeries, TimeWindow, services::SeriesAnalysisService},
    repositories::DashboardRepository,
    view_state::ViewKind,
};
use crate::infrastructure::http::DashboardHttpClient;
use crate::log_debug;
use futures::FutureExt;
use leptos::*;
use std::rc::Rc;

const CHART_WIDTH: f64 = 800.0;
const CHART_HEIGHT: f64 = 400.0;

/// 📈 Price line with the average overlay, refreshed on the configured interval
#[component]
pub fn StockView() -> impl IntoView {
    let settings = config();
    let controller = create_rw_signal(
        ViewController::<StockSeries>::new(ViewKind::Stock, settings.default_window)
            .with_refresh(settings.stock_refresh)
            .with_stale_results(settings.stale_results),
    );

    let client = DashboardHttpClient::from_config(settings);
    let fetch: FetchFn<StockSeries> = Rc::new(move |window| {
        let client = client.clone();
        async move { client.stock_series(window).await }.boxed_local()
    });

    let driver = ViewDriver::new(controller, fetch);
    driver.mount();
    on_cleanup({
        let driver = Rc::clone(&driver);
        move || driver.unmount()
    });

    // Series identity is the Arc, so the average only recomputes on a new payload.
    let series = create_memo(move |_| controller.with(|c| c.data().cloned()));
    let average = create_memo(move |_| {
        series.with(|s| SeriesAnalysisService::new().average_price(s.as_ref().map(StockSeries::samples)))
    });
    let chart = create_memo(move |_| {
        let average = average.get();
        series.with(|s| {
            s.as_ref()
                .and_then(|s| LineChart::build(s.samples(), average, CHART_WIDTH, CHART_HEIGHT))
        })
    });
    create_effect(move |_| {
        log_debug!(LogComponent::Presentation("StockView"), "📊 average price {:.4}", average.get());
    });

    let window = Signal::derive(move || controller.with(|c| c.time_window()));
    let loading = Signal::derive(move || controller.with(|c| c.is_loading()));
    let on_change = Callback::new(move |w: TimeWindow| driver.select_window(w));

    view! {
        <section class="stock-view">
            <h2>"Stock Prices"</h2>
            <TimeWindowSelect value=window on_change=on_change />
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading">"Loading..."</div> }
            >
                {move || match chart.get() {
                    Some(chart) => view! { <PriceChart chart=chart /> }.into_view(),
                    None => view! { <p class="empty">"No data available"</p> }.into_view(),
                }}
            </Show>
        </section>
    }
}

#[component]
fn PriceChart(chart: LineChart) -> impl IntoView {
    let ((x1, y1), (x2, y2)) = chart.average_segment();
    let points = chart.price_polyline();
    let plot_bottom = chart.viewport.plot_height();
    let left = chart.viewport.left_gutter;
    let average_label = format!("Average: {:.2}", chart.average);

    view! {
        <svg
            class="price-chart"
            width=chart.viewport.width
            height=chart.viewport.height
            viewBox=format!("0 0 {} {}", chart.viewport.width, chart.viewport.height)
        >
            {chart
                .grid_rows()
                .map(|((x1, y1), (x2, y2))| {
                    view! {
                        <line x1=x1 y1=y1 x2=x2 y2=y2 stroke="#eee" stroke-dasharray="3 3" />
                    }
                })
                .collect_view()}
            <line x1=left y1=0 x2=left y2=plot_bottom stroke="#ccc" />
            <line x1=left y1=plot_bottom x2=chart.viewport.width y2=plot_bottom stroke="#ccc" />
            {chart
                .y_ticks
                .iter()
                .map(|tick| {
                    view! {
                        <text x={left - 6.0} y=tick.position text-anchor="end" font-size="11">
                            {tick.label.clone()}
                        </text>
                    }
                })
                .collect_view()}
            {chart
                .x_ticks
                .iter()
                .map(|tick| {
                    view! {
                        <text x=tick.position y={plot_bottom + 18.0} text-anchor="middle" font-size="11">
                            {tick.label.clone()}
                        </text>
                    }
                })
                .collect_view()}
            <polyline points=points fill="none" stroke=PRICE_STROKE stroke-width="2" />
            <line
                x1=x1
                y1=y1
                x2=x2
                y2=y2
                stroke=AVERAGE_STROKE
                stroke-width="2"
                stroke-dasharray="6 4"
            />
            {chart
                .price_points
                .iter()
                .zip(&chart.point_labels)
                .map(|(&(x, y), label)| {
                    view! {
                        <circle class="price-point" cx=x cy=y r="4">
                            <title>{label.clone()}</title>
                        </circle>
                    }
                })
                .collect_view()}
        </svg>
        <div class="legend">
            <span style=format!("color: {}", PRICE_STROKE)>"■ Price"</span>
            <span style=format!("color: {}", AVERAGE_STROKE)>{format!("■ {}", average_label)}</span>
        </div>
    }
}
