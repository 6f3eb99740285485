use crate::application::{
    use_cases::{ViewStore, fetch_and_store},
    view_controller::{RefreshTimerId, ViewCommand, ViewController},
};
use crate::domain::{errors::FetchResult, logging::LogComponent, market_data::TimeWindow};
use crate::infrastructure::browser::is_document_visible;
use crate::{log_debug, log_info};
use futures::StreamExt;
use futures::future::{AbortHandle, Abortable, LocalBoxFuture};
use gloo_timers::future::IntervalStream;
use leptos::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

impl<T: 'static> ViewStore<T> for RwSignal<ViewController<T>> {
    fn with_controller<R>(&self, f: impl FnOnce(&mut ViewController<T>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Performs one request for a window
pub type FetchFn<T> = Rc<dyn Fn(TimeWindow) -> LocalBoxFuture<'static, FetchResult<T>>>;

/// Executes a view controller's commands in the browser.
///
/// Fetches run on `spawn_local`; refresh timers are `IntervalStream`s wrapped in
/// `Abortable` so a cancel stops them between ticks.
pub struct ViewDriver<T: 'static> {
    controller: RwSignal<ViewController<T>>,
    fetch: FetchFn<T>,
    timers: RefCell<HashMap<RefreshTimerId, AbortHandle>>,
}

impl<T: 'static> ViewDriver<T> {
    pub fn new(controller: RwSignal<ViewController<T>>, fetch: FetchFn<T>) -> Rc<Self> {
        Rc::new(Self { controller, fetch, timers: RefCell::new(HashMap::new()) })
    }

    pub fn mount(self: &Rc<Self>) {
        self.run(|c| c.mount());
    }

    pub fn select_window(self: &Rc<Self>, window: TimeWindow) {
        self.run(|c| c.select_window(window));
    }

    /// Stop polling and drop every timer, including ones the controller no longer tracks.
    pub fn unmount(self: &Rc<Self>) {
        self.run(|c| c.unmount());
        log_debug!(
            LogComponent::Presentation("ViewDriver"),
            "unmounting with {} timer(s) left",
            self.running_timers()
        );
        for (timer, handle) in self.timers.borrow_mut().drain() {
            log_debug!(LogComponent::Presentation("ViewDriver"), "🛑 aborting {}", timer);
            handle.abort();
        }
    }

    pub fn running_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    fn run(self: &Rc<Self>, transition: impl FnOnce(&mut ViewController<T>) -> Vec<ViewCommand>) {
        let commands = self.controller.with_controller(transition).unwrap_or_default();
        self.dispatch(commands);
    }

    /// Perform commands in the order the controller emitted them.
    fn dispatch(self: &Rc<Self>, commands: Vec<ViewCommand>) {
        for command in commands {
            match command {
                ViewCommand::Fetch(ticket) => {
                    let store = self.controller;
                    let fetch = Rc::clone(&self.fetch);
                    spawn_local(async move {
                        fetch_and_store(&store, ticket, move |window| fetch(window)).await;
                    });
                }
                ViewCommand::StartRefresh { timer, interval } => {
                    let period = u32::try_from(interval.as_millis()).unwrap_or(u32::MAX);
                    log_info!(
                        LogComponent::Presentation("ViewDriver"),
                        "⏱️ {} every {} ms",
                        timer,
                        period
                    );
                    let (handle, registration) = AbortHandle::new_pair();
                    let driver = Rc::downgrade(self);
                    let ticks = async move {
                        let mut interval = IntervalStream::new(period);
                        while interval.next().await.is_some() {
                            let Some(driver) = driver.upgrade() else { break };
                            let visible = is_document_visible();
                            driver.run(|c| c.on_refresh_tick(timer, visible));
                        }
                    };
                    spawn_local(async move {
                        let _ = Abortable::new(ticks, registration).await;
                    });
                    self.timers.borrow_mut().insert(timer, handle);
                }
                ViewCommand::CancelRefresh(timer) => {
                    if let Some(handle) = self.timers.borrow_mut().remove(&timer) {
                        log_debug!(LogComponent::Presentation("ViewDriver"), "🛑 cancelling {}", timer);
                        handle.abort();
                    }
                }
            }
        }
    }
}
