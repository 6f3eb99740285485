use futures::channel::oneshot;
use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;
use price_dashboard_wasm::application::{
    FetchTicket, SettleOutcome, ViewCommand, ViewController, fetch_and_store,
};
use price_dashboard_wasm::domain::{
    errors::FetchError,
    market_data::TimeWindow,
    view_state::{StaleResultPolicy, ViewKind},
};
use std::cell::RefCell;
use std::rc::Rc;

type Store = Rc<RefCell<ViewController<String>>>;

fn first_fetch(commands: Vec<ViewCommand>) -> FetchTicket {
    commands
        .into_iter()
        .find_map(|c| match c {
            ViewCommand::Fetch(ticket) => Some(ticket),
            _ => None,
        })
        .expect("no fetch issued")
}

/// Spawn a request whose response is released through the returned sender.
fn spawn_request(
    pool: &LocalPool,
    store: &Store,
    ticket: FetchTicket,
    outcomes: &Rc<RefCell<Vec<(TimeWindow, SettleOutcome)>>>,
) -> oneshot::Sender<String> {
    let (tx, rx) = oneshot::channel::<String>();
    let store = Rc::clone(store);
    let outcomes = Rc::clone(outcomes);
    pool.spawner()
        .spawn_local(async move {
            let outcome = fetch_and_store(&store, ticket, move |window| async move {
                rx.await.map_err(|_| FetchError::Network {
                    url: format!("minutes={}", window),
                    reason: "cancelled".into(),
                })
            })
            .await;
            outcomes.borrow_mut().push((ticket.window(), outcome));
        })
        .unwrap();
    tx
}

/// 15 is requested, the user switches to 60, and the 60 response arrives first.
fn run_race(policy: StaleResultPolicy) -> (Store, Vec<(TimeWindow, SettleOutcome)>) {
    let store: Store = Rc::new(RefCell::new(
        ViewController::new(ViewKind::Stock, TimeWindow::FifteenMinutes).with_stale_results(policy),
    ));
    let outcomes = Rc::new(RefCell::new(Vec::new()));
    let mut pool = LocalPool::new();

    let slow = first_fetch(store.borrow_mut().mount());
    let slow_tx = spawn_request(&pool, &store, slow, &outcomes);
    pool.run_until_stalled();

    let fast = first_fetch(store.borrow_mut().select_window(TimeWindow::SixtyMinutes));
    let fast_tx = spawn_request(&pool, &store, fast, &outcomes);
    pool.run_until_stalled();
    assert!(store.borrow().is_loading());

    fast_tx.send("payload for 60".to_string()).unwrap();
    pool.run_until_stalled();
    assert_eq!(store.borrow().data().map(String::as_str), Some("payload for 60"));

    slow_tx.send("payload for 15".to_string()).unwrap();
    pool.run_until_stalled();

    let outcomes = outcomes.borrow().clone();
    (store, outcomes)
}

#[test]
fn current_window_only_discards_late_result_for_old_window() {
    let (store, outcomes) = run_race(StaleResultPolicy::CurrentWindowOnly);

    let ctrl = store.borrow();
    assert_eq!(ctrl.time_window(), TimeWindow::SixtyMinutes);
    assert_eq!(ctrl.data().map(String::as_str), Some("payload for 60"));
    assert!(!ctrl.is_loading());
    assert_eq!(
        outcomes,
        vec![
            (TimeWindow::SixtyMinutes, SettleOutcome::Applied),
            (TimeWindow::FifteenMinutes, SettleOutcome::Discarded),
        ]
    );
}

#[test]
fn last_settled_wins_shows_the_late_result() {
    let (store, outcomes) = run_race(StaleResultPolicy::LastSettledWins);

    let ctrl = store.borrow();
    assert_eq!(ctrl.time_window(), TimeWindow::SixtyMinutes);
    assert_eq!(ctrl.data().map(String::as_str), Some("payload for 15"));
    assert!(!ctrl.is_loading());
    assert!(outcomes.iter().all(|(_, outcome)| *outcome == SettleOutcome::Applied));
}

#[test]
fn failed_request_keeps_data_under_either_policy() {
    for policy in [StaleResultPolicy::CurrentWindowOnly, StaleResultPolicy::LastSettledWins] {
        let store: Store = Rc::new(RefCell::new(
            ViewController::new(ViewKind::Heatmap, TimeWindow::FiveMinutes).with_stale_results(policy),
        ));
        let outcomes = Rc::new(RefCell::new(Vec::new()));
        let mut pool = LocalPool::new();

        let ticket = first_fetch(store.borrow_mut().mount());
        let tx = spawn_request(&pool, &store, ticket, &outcomes);
        tx.send("first".to_string()).unwrap();
        pool.run_until_stalled();

        store.borrow_mut().unmount();
        let ticket = first_fetch(store.borrow_mut().mount());
        let tx = spawn_request(&pool, &store, ticket, &outcomes);
        drop(tx);
        pool.run_until_stalled();

        let ctrl = store.borrow();
        assert_eq!(ctrl.data().map(String::as_str), Some("first"));
        assert!(!ctrl.is_loading());
        assert_eq!(outcomes.borrow().last(), Some(&(TimeWindow::FiveMinutes, SettleOutcome::Failed)));
    }
}
