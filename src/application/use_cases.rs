use crate::application::view_controller::{FetchTicket, SettleOutcome, ViewController};
use crate::domain::{
    errors::FetchResult,
    logging::{LogComponent, LogLevel, get_logger},
    market_data::TimeWindow,
};
use crate::log_debug;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

/// Where a view's controller lives.
///
/// The browser keeps it in a Leptos signal, tests in an `Rc<RefCell<_>>`.
/// `None` means the store is gone (the owning view was disposed).
pub trait ViewStore<T> {
    fn with_controller<R>(&self, f: impl FnOnce(&mut ViewController<T>) -> R) -> Option<R>;
}

impl<T> ViewStore<T> for Rc<RefCell<ViewController<T>>> {
    fn with_controller<R>(&self, f: impl FnOnce(&mut ViewController<T>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Clears the ticket's share of `loading` if the request future is dropped
/// before it settles.
struct SettleGuard<'a, T, S: ViewStore<T>> {
    store: &'a S,
    ticket: FetchTicket,
    armed: bool,
    _payload: std::marker::PhantomData<fn() -> T>,
}

impl<'a, T, S: ViewStore<T>> SettleGuard<'a, T, S> {
    fn new(store: &'a S, ticket: FetchTicket) -> Self {
        Self { store, ticket, armed: true, _payload: std::marker::PhantomData }
    }

    fn settle(mut self, result: FetchResult<T>) -> SettleOutcome {
        self.armed = false;
        let ticket = self.ticket;
        self.store
            .with_controller(|c| c.settle(ticket, result))
            .unwrap_or(SettleOutcome::Discarded)
    }
}

impl<T, S: ViewStore<T>> Drop for SettleGuard<'_, T, S> {
    fn drop(&mut self) {
        if self.armed {
            let ticket = self.ticket;
            let _ = self.store.with_controller(|c| c.abandon(ticket));
        }
    }
}

/// Fetch-and-store routine: perform the request for `ticket` and hand the result
/// back to the controller.
///
/// `loading` was raised when the ticket was issued; it is lowered here on every
/// exit path. Failures are logged and leave the previous data in place.
pub async fn fetch_and_store<T, S, F, Fut>(store: &S, ticket: FetchTicket, fetch: F) -> SettleOutcome
where
    S: ViewStore<T>,
    F: FnOnce(TimeWindow) -> Fut,
    Fut: Future<Output = FetchResult<T>>,
{
    let guard = SettleGuard::new(store, ticket);
    log_debug!(
        LogComponent::Application("FetchAndStore"),
        "📡 {} for {}m",
        ticket.id(),
        ticket.window()
    );

    let result = fetch(ticket.window()).await;
    if let Err(error) = &result {
        get_logger().log_with_metadata(
            LogLevel::Error,
            LogComponent::Application("FetchAndStore"),
            &format!("❌ {} failed, keeping previous data: {}", ticket.id(), error),
            &format!("minutes={}", ticket.window()),
        );
    }

    let outcome = guard.settle(result);
    log_debug!(
        LogComponent::Application("FetchAndStore"),
        "{} settled: {:?}",
        ticket.id(),
        outcome
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::view_state::ViewKind;
    use crate::application::view_controller::ViewCommand;
    use futures::executor::block_on;
    use futures::future::{self, FutureExt};

    #[test]
    fn dropped_request_lowers_loading() {
        let store = Rc::new(RefCell::new(ViewController::<u32>::new(ViewKind::Heatmap, TimeWindow::default())));
        let commands = store.borrow_mut().mount();
        let ViewCommand::Fetch(ticket) = commands[0] else { panic!("expected fetch") };

        let pending = fetch_and_store(&store, ticket, |_| future::pending::<FetchResult<u32>>());
        // poll once so the guard exists, then drop the future
        assert!(pending.boxed_local().now_or_never().is_none());
        assert!(!store.borrow().is_loading());
    }

    #[test]
    fn successful_fetch_applies_payload() {
        let store = Rc::new(RefCell::new(ViewController::<u32>::new(ViewKind::Heatmap, TimeWindow::default())));
        let commands = store.borrow_mut().mount();
        let ViewCommand::Fetch(ticket) = commands[0] else { panic!("expected fetch") };

        let outcome = block_on(fetch_and_store(&store, ticket, |w| async move { Ok(w.minutes()) }));
        assert_eq!(outcome, SettleOutcome::Applied);
        assert_eq!(store.borrow().data(), Some(&15));
    }
}
