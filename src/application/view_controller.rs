use crate::domain::{
    errors::FetchError,
    logging::LogComponent,
    market_data::TimeWindow,
    view_state::{RefreshPolicy, StaleResultPolicy, ViewKind, ViewState},
};
use crate::{log_debug, log_info};
use derive_more::Display;
use std::time::Duration;

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "req#{}", _0)]
pub struct RequestId(u64);

/// Identifies one started refresh timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "timer#{}", _0)]
pub struct RefreshTimerId(u64);

/// A fetch the controller wants performed, tagged with the window it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    id: RequestId,
    window: TimeWindow,
    epoch: u64,
}

impl FetchTicket {
    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }
}

/// Side effect requested by the controller. The caller performs them in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    Fetch(FetchTicket),
    StartRefresh { timer: RefreshTimerId, interval: Duration },
    CancelRefresh(RefreshTimerId),
}

/// Result of handing a settled request back to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// Payload replaced `data`
    Applied,
    /// Request failed, `data` untouched
    Failed,
    /// Request belonged to a window the view has left
    Discarded,
}

/// Fetch/poll state machine for one view.
///
/// The controller never performs I/O. Each transition returns the commands the
/// caller has to execute (issue a request, start or cancel the refresh timer),
/// and settled requests are fed back through [`ViewController::settle`].
#[derive(Debug, Clone)]
pub struct ViewController<T> {
    kind: ViewKind,
    state: ViewState<T>,
    refresh: Option<RefreshPolicy>,
    stale_results: StaleResultPolicy,
    mounted: bool,
    epoch: u64,
    outstanding: usize,
    next_request: u64,
    next_timer: u64,
    active_timer: Option<RefreshTimerId>,
}

impl<T> ViewController<T> {
    pub fn new(kind: ViewKind, time_window: TimeWindow) -> Self {
        Self {
            kind,
            state: ViewState::new(time_window),
            refresh: None,
            stale_results: StaleResultPolicy::default(),
            mounted: false,
            epoch: 0,
            outstanding: 0,
            next_request: 0,
            next_timer: 0,
            active_timer: None,
        }
    }

    pub fn with_refresh(mut self, refresh: Option<RefreshPolicy>) -> Self {
        self.refresh = refresh;
        self
    }

    pub fn with_stale_results(mut self, policy: StaleResultPolicy) -> Self {
        self.stale_results = policy;
        self
    }

    pub fn time_window(&self) -> TimeWindow {
        self.state.time_window
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn active_timer(&self) -> Option<RefreshTimerId> {
        self.active_timer
    }

    /// View appeared: fetch immediately and start polling if configured.
    pub fn mount(&mut self) -> Vec<ViewCommand> {
        if self.mounted {
            return Vec::new();
        }
        self.mounted = true;
        log_info!(
            LogComponent::Application("ViewController"),
            "📺 {} view mounted (window {}m)",
            self.kind,
            self.state.time_window
        );

        let mut commands = vec![self.issue_fetch()];
        commands.extend(self.start_refresh());
        commands
    }

    /// User picked a window. Re-selecting the current one does nothing.
    pub fn select_window(&mut self, window: TimeWindow) -> Vec<ViewCommand> {
        if window == self.state.time_window {
            return Vec::new();
        }
        log_info!(
            LogComponent::Application("ViewController"),
            "🕒 {} window {}m -> {}m",
            self.kind,
            self.state.time_window,
            window
        );

        let mut commands: Vec<ViewCommand> = self.cancel_refresh().into_iter().collect();
        self.state.time_window = window;
        self.begin_epoch();

        if self.mounted {
            commands.push(self.issue_fetch());
            commands.extend(self.start_refresh());
        }
        commands
    }

    /// A refresh timer fired. Ticks from cancelled timers and ticks while the
    /// document is hidden (when the policy pauses) are ignored.
    pub fn on_refresh_tick(&mut self, timer: RefreshTimerId, document_visible: bool) -> Vec<ViewCommand> {
        if !self.mounted || self.active_timer != Some(timer) {
            log_debug!(
                LogComponent::Application("ViewController"),
                "ignoring stale tick {} for {} view",
                timer,
                self.kind
            );
            return Vec::new();
        }
        let pause = self.refresh.is_some_and(|policy| policy.pause_when_hidden);
        if pause && !document_visible {
            log_debug!(
                LogComponent::Application("ViewController"),
                "⏸️ {} refresh skipped, document hidden",
                self.kind
            );
            return Vec::new();
        }
        vec![self.issue_fetch()]
    }

    /// View went away: stop polling. In-flight requests keep running.
    pub fn unmount(&mut self) -> Vec<ViewCommand> {
        if !self.mounted {
            return Vec::new();
        }
        self.mounted = false;
        let commands = self.cancel_refresh().into_iter().collect();
        self.begin_epoch();
        log_info!(LogComponent::Application("ViewController"), "{} view unmounted", self.kind);
        commands
    }

    /// Feed back the outcome of a request issued by this controller.
    pub fn settle(&mut self, ticket: FetchTicket, result: Result<T, FetchError>) -> SettleOutcome {
        match self.stale_results {
            StaleResultPolicy::LastSettledWins => {
                self.release(ticket);
                self.state.loading = false;
                self.store(result)
            }
            StaleResultPolicy::CurrentWindowOnly => {
                if ticket.epoch != self.epoch {
                    log_debug!(
                        LogComponent::Application("ViewController"),
                        "🗑️ dropping {} result for {}m, view is on {}m",
                        ticket.id,
                        ticket.window,
                        self.state.time_window
                    );
                    return SettleOutcome::Discarded;
                }
                self.release(ticket);
                self.state.loading = self.outstanding > 0;
                self.store(result)
            }
        }
    }

    /// The awaiting side gave up on `ticket` without a result. Only the
    /// loading bookkeeping is updated.
    pub fn abandon(&mut self, ticket: FetchTicket) {
        if ticket.epoch == self.epoch {
            self.release(ticket);
            self.state.loading = self.outstanding > 0;
        }
    }

    fn store(&mut self, result: Result<T, FetchError>) -> SettleOutcome {
        match result {
            Ok(payload) => {
                self.state.data = Some(payload);
                SettleOutcome::Applied
            }
            Err(_) => SettleOutcome::Failed,
        }
    }

    fn release(&mut self, ticket: FetchTicket) {
        if ticket.epoch == self.epoch {
            self.outstanding = self.outstanding.saturating_sub(1);
        }
    }

    fn issue_fetch(&mut self) -> ViewCommand {
        let id = RequestId(self.next_request);
        self.next_request += 1;
        self.outstanding += 1;
        self.state.loading = true;
        ViewCommand::Fetch(FetchTicket { id, window: self.state.time_window, epoch: self.epoch })
    }

    fn start_refresh(&mut self) -> Option<ViewCommand> {
        let policy = self.refresh?;
        let timer = RefreshTimerId(self.next_timer);
        self.next_timer += 1;
        self.active_timer = Some(timer);
        Some(ViewCommand::StartRefresh { timer, interval: policy.interval })
    }

    fn cancel_refresh(&mut self) -> Option<ViewCommand> {
        self.active_timer.take().map(ViewCommand::CancelRefresh)
    }

    /// Requests issued before this point no longer count towards `loading`.
    fn begin_epoch(&mut self) {
        self.epoch += 1;
        if self.stale_results == StaleResultPolicy::CurrentWindowOnly {
            self.outstanding = 0;
            self.state.loading = false;
        }
    }
}
