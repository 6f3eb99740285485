use price_dashboard_wasm::application::{SettleOutcome, ViewCommand, ViewController};
use price_dashboard_wasm::domain::{
    errors::FetchError,
    market_data::TimeWindow,
    view_state::{RefreshPolicy, ViewKind},
};
use std::time::Duration;

fn stock_controller() -> ViewController<Vec<f64>> {
    ViewController::new(ViewKind::Stock, TimeWindow::default()).with_refresh(Some(RefreshPolicy::default()))
}

fn failure() -> FetchError {
    FetchError::Network { url: "http://api/stock-data?minutes=15".into(), reason: "offline".into() }
}

#[test]
fn mount_fetches_default_window_and_starts_minute_timer() {
    let mut ctrl = stock_controller();
    let commands = ctrl.mount();

    assert_eq!(commands.len(), 2);
    let ViewCommand::Fetch(ticket) = commands[0] else { panic!("expected fetch first") };
    assert_eq!(ticket.window(), TimeWindow::FifteenMinutes);
    assert!(matches!(
        commands[1],
        ViewCommand::StartRefresh { interval, .. } if interval == Duration::from_secs(60)
    ));
    assert!(ctrl.is_loading());
}

#[test]
fn refresh_tick_refetches_current_window() {
    let mut ctrl = stock_controller();
    ctrl.mount();
    let timer = ctrl.active_timer().unwrap();

    let commands = ctrl.on_refresh_tick(timer, true);
    assert!(matches!(commands.as_slice(), [ViewCommand::Fetch(t)] if t.window() == TimeWindow::FifteenMinutes));
}

#[test]
fn window_change_cancels_timer_before_new_fetch_and_timer() {
    let mut ctrl = stock_controller();
    ctrl.mount();
    let old_timer = ctrl.active_timer().unwrap();

    let commands = ctrl.select_window(TimeWindow::SixtyMinutes);
    assert_eq!(commands.len(), 3);
    assert_eq!(commands[0], ViewCommand::CancelRefresh(old_timer));
    assert!(matches!(commands[1], ViewCommand::Fetch(t) if t.window() == TimeWindow::SixtyMinutes));
    assert!(matches!(commands[2], ViewCommand::StartRefresh { timer, .. } if timer != old_timer));
    assert_eq!(ctrl.time_window(), TimeWindow::SixtyMinutes);
}

#[test]
fn ticks_from_cancelled_timer_are_ignored() {
    let mut ctrl = stock_controller();
    ctrl.mount();
    let old_timer = ctrl.active_timer().unwrap();
    ctrl.select_window(TimeWindow::FiveMinutes);

    assert!(ctrl.on_refresh_tick(old_timer, true).is_empty());
}

#[test]
fn hidden_document_skips_tick_unless_policy_always_polls() {
    let mut gated = stock_controller();
    gated.mount();
    let timer = gated.active_timer().unwrap();
    assert!(gated.on_refresh_tick(timer, false).is_empty());

    let mut eager: ViewController<Vec<f64>> = ViewController::new(ViewKind::Stock, TimeWindow::default())
        .with_refresh(Some(RefreshPolicy::default().always_poll()));
    eager.mount();
    let timer = eager.active_timer().unwrap();
    assert_eq!(eager.on_refresh_tick(timer, false).len(), 1);
}

#[test]
fn heatmap_never_starts_a_timer() {
    let mut ctrl: ViewController<Vec<f64>> = ViewController::new(ViewKind::Heatmap, TimeWindow::default());
    let commands = ctrl.mount();
    assert!(matches!(commands.as_slice(), [ViewCommand::Fetch(_)]));
    assert!(ctrl.active_timer().is_none());

    let commands = ctrl.select_window(TimeWindow::OneMinute);
    assert!(matches!(commands.as_slice(), [ViewCommand::Fetch(t)] if t.window() == TimeWindow::OneMinute));
}

#[test]
fn loading_spans_request_on_success() {
    let mut ctrl = stock_controller();
    let ViewCommand::Fetch(ticket) = ctrl.mount()[0] else { panic!("expected fetch") };
    assert!(ctrl.is_loading());

    assert_eq!(ctrl.settle(ticket, Ok(vec![1.0, 2.0])), SettleOutcome::Applied);
    assert!(!ctrl.is_loading());
    assert_eq!(ctrl.data(), Some(&vec![1.0, 2.0]));
}

#[test]
fn failed_fetch_clears_loading_and_keeps_previous_data() {
    let mut ctrl = stock_controller();
    let ViewCommand::Fetch(first) = ctrl.mount()[0] else { panic!("expected fetch") };
    ctrl.settle(first, Ok(vec![5.0]));

    let timer = ctrl.active_timer().unwrap();
    let ViewCommand::Fetch(second) = ctrl.on_refresh_tick(timer, true)[0] else { panic!("expected fetch") };
    assert!(ctrl.is_loading());

    assert_eq!(ctrl.settle(second, Err(failure())), SettleOutcome::Failed);
    assert!(!ctrl.is_loading());
    assert_eq!(ctrl.data(), Some(&vec![5.0]));
}

#[test]
fn unmount_cancels_refresh_and_discards_late_results() {
    let mut ctrl = stock_controller();
    let ViewCommand::Fetch(ticket) = ctrl.mount()[0] else { panic!("expected fetch") };
    let timer = ctrl.active_timer().unwrap();

    assert_eq!(ctrl.unmount(), vec![ViewCommand::CancelRefresh(timer)]);
    assert!(ctrl.on_refresh_tick(timer, true).is_empty());
    assert_eq!(ctrl.settle(ticket, Ok(vec![1.0])), SettleOutcome::Discarded);
    assert!(ctrl.data().is_none());
}
