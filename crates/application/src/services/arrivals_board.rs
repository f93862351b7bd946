//! Arrivals board service
//!
//! Holds the selected station and the latest snapshot, polls the arrivals
//! port on a fixed cadence and keeps a wall clock ticking for the display.
//!
//! Every fetch takes a generation number under the state lock. A completed
//! fetch is applied only while its generation is still the latest, so an
//! overlapping older request, or one issued for a previously selected
//! station, can never overwrite newer data.

use std::collections::HashMap;
use std::sync::{Arc, Weak};
use std::time::Duration;

use chrono::{DateTime, Local};
use domain::{Station, StationSnapshot};
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, instrument};

use crate::error::ApplicationError;
use crate::ports::ArrivalsPort;

/// Message shown to the user whenever a fetch fails
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load subway data. Please try again later.";

/// Periods of the two board timers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardTimings {
    /// How often the visible clock is updated
    pub clock_interval: Duration,
    /// How often the station snapshot is refreshed
    pub refresh_interval: Duration,
}

impl Default for BoardTimings {
    fn default() -> Self {
        Self {
            clock_interval: Duration::from_secs(1),
            refresh_interval: Duration::from_secs(30),
        }
    }
}

/// Everything the board displays
#[derive(Debug, Clone)]
pub struct BoardState {
    /// Currently selected station
    pub station: Station,
    /// Last successfully fetched snapshot for `station`
    pub snapshot: Option<Arc<StationSnapshot>>,
    /// Wall-clock time shown in the header
    pub now: DateTime<Local>,
    /// Whether a fetch is in flight
    pub loading: bool,
    /// User-facing error of the last fetch
    pub error: Option<String>,
    /// Expanded flag per line key; missing keys are collapsed
    pub expanded: HashMap<String, bool>,
}

impl BoardState {
    fn new(station: Station) -> Self {
        Self {
            station,
            snapshot: None,
            now: Local::now(),
            loading: false,
            error: None,
            expanded: HashMap::new(),
        }
    }

    /// Whether a line is currently expanded
    #[must_use]
    pub fn is_expanded(&self, line_key: &str) -> bool {
        self.expanded.get(line_key).copied().unwrap_or(false)
    }
}

/// What happened to a single refresh call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The new snapshot replaced the previous one
    Applied,
    /// The fetch failed; the previous snapshot was kept
    Failed,
    /// A newer request or a station change made this response stale
    Superseded,
    /// The board was disposed; nothing was changed
    Disposed,
}

struct Shared {
    state: BoardState,
    generation: u64,
    disposed: bool,
}

#[derive(Default)]
struct Timers {
    clock: Option<JoinHandle<()>>,
    refresh: Option<JoinHandle<()>>,
}

struct Inner {
    port: Arc<dyn ArrivalsPort>,
    timings: BoardTimings,
    shared: Mutex<Shared>,
    timers: Mutex<Timers>,
    changes: watch::Sender<u64>,
}

/// The arrivals board
///
/// Cheap to clone; all clones share the same state and timers.
#[derive(Clone)]
pub struct ArrivalsBoard {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for ArrivalsBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shared = self.inner.shared.lock();
        f.debug_struct("ArrivalsBoard")
            .field("station", &shared.state.station)
            .field("generation", &shared.generation)
            .field("disposed", &shared.disposed)
            .field("timings", &self.inner.timings)
            .finish_non_exhaustive()
    }
}

impl ArrivalsBoard {
    /// Create a board for the default station with the default timings
    #[must_use]
    pub fn new(port: Arc<dyn ArrivalsPort>) -> Self {
        Self::with_timings(port, Station::default(), BoardTimings::default())
    }

    /// Create a board for a given station and timer periods
    #[must_use]
    pub fn with_timings(port: Arc<dyn ArrivalsPort>, station: Station, timings: BoardTimings) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            inner: Arc::new(Inner {
                port,
                timings,
                shared: Mutex::new(Shared {
                    state: BoardState::new(station),
                    generation: 0,
                    disposed: false,
                }),
                timers: Mutex::new(Timers::default()),
                changes,
            }),
        }
    }

    /// Copy of the current state for rendering
    #[must_use]
    pub fn view(&self) -> BoardState {
        self.inner.shared.lock().state.clone()
    }

    /// Subscribe to state changes
    ///
    /// The value is a version counter bumped on every change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.changes.subscribe()
    }

    /// Whether the timers are running
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.inner.timers.lock().refresh.is_some()
    }

    /// Whether [`ArrivalsBoard::dispose`] has been called
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.inner.shared.lock().disposed
    }

    /// Select a station by display name
    ///
    /// Names are matched case-sensitively. Selecting a different station
    /// drops the current snapshot, error and expanded flags, invalidates any
    /// fetch in flight and, when the timers run, restarts the refresh cycle
    /// with an immediate fetch. Selecting the current station changes nothing.
    pub fn select_station(&self, name: &str) -> Result<Station, ApplicationError> {
        let station: Station = name.parse()?;

        {
            let mut shared = self.inner.shared.lock();
            if shared.disposed {
                return Err(ApplicationError::Disposed);
            }
            if shared.state.station == station {
                return Ok(station);
            }
            shared.generation += 1;
            shared.state.station = station;
            shared.state.snapshot = None;
            shared.state.error = None;
            shared.state.loading = false;
            shared.state.expanded.clear();
        }

        info!(%station, "Station selected");
        self.notify();
        self.restart_refresh_timer();
        Ok(station)
    }

    /// Fetch a fresh snapshot for the selected station
    ///
    /// On failure the previous snapshot is kept and the user-facing error is
    /// set. Responses that are no longer the latest request are discarded.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> RefreshOutcome {
        let (generation, station) = {
            let mut shared = self.inner.shared.lock();
            if shared.disposed {
                return RefreshOutcome::Disposed;
            }
            shared.generation += 1;
            shared.state.loading = true;
            shared.state.error = None;
            (shared.generation, shared.state.station)
        };
        self.notify();

        debug!(%station, generation, "Refreshing station arrivals");
        let result = self.inner.port.fetch_station(station).await;

        let outcome = {
            let mut shared = self.inner.shared.lock();
            if shared.disposed {
                return RefreshOutcome::Disposed;
            }
            if shared.generation != generation {
                debug!(
                    %station,
                    generation,
                    latest = shared.generation,
                    "Discarding superseded arrivals response"
                );
                return RefreshOutcome::Superseded;
            }

            shared.state.loading = false;
            match result {
                Ok(snapshot) => {
                    debug!(%station, trains = snapshot.all_trains.len(), "Snapshot applied");
                    shared.state.snapshot = Some(Arc::new(snapshot));
                    shared.state.error = None;
                    RefreshOutcome::Applied
                },
                Err(e) => {
                    error!(error = %e, %station, "Error fetching subway data");
                    shared.state.error = Some(FETCH_ERROR_MESSAGE.to_string());
                    RefreshOutcome::Failed
                },
            }
        };

        self.notify();
        outcome
    }

    /// Flip the expanded flag of a line and return the new value
    pub fn toggle_expanded(&self, line_key: &str) -> bool {
        let expanded = {
            let mut shared = self.inner.shared.lock();
            if shared.disposed {
                return false;
            }
            let flag = shared
                .state
                .expanded
                .entry(line_key.to_string())
                .or_insert(false);
            *flag = !*flag;
            *flag
        };

        debug!(line = line_key, expanded, "Line toggled");
        self.notify();
        expanded
    }

    /// Update the displayed wall-clock time
    pub fn tick_clock(&self) {
        {
            let mut shared = self.inner.shared.lock();
            if shared.disposed {
                return;
            }
            shared.state.now = Local::now();
        }
        self.notify();
    }

    /// Start the clock and refresh timers
    ///
    /// The refresh timer fires immediately, then every refresh interval.
    /// Calling this on a running or disposed board does nothing.
    pub fn start(&self) {
        let mut timers = self.inner.timers.lock();
        if timers.refresh.is_some() || self.is_disposed() {
            return;
        }

        timers.clock = Some(self.spawn_clock_timer());
        timers.refresh = Some(self.spawn_refresh_timer());

        info!(
            clock_secs = self.inner.timings.clock_interval.as_secs_f64(),
            refresh_secs = self.inner.timings.refresh_interval.as_secs(),
            "Arrivals board timers started"
        );
    }

    /// Tear the board down
    ///
    /// Stops both timers and abandons any fetch in flight. After this call
    /// the state never changes again.
    pub fn dispose(&self) {
        {
            let mut shared = self.inner.shared.lock();
            if shared.disposed {
                return;
            }
            shared.disposed = true;
            shared.generation += 1;
        }

        let mut timers = self.inner.timers.lock();
        for handle in [timers.clock.take(), timers.refresh.take()]
            .into_iter()
            .flatten()
        {
            handle.abort();
        }

        info!("Arrivals board disposed");
    }

    fn notify(&self) {
        self.inner.changes.send_modify(|version| *version += 1);
    }

    fn restart_refresh_timer(&self) {
        let mut timers = self.inner.timers.lock();
        if let Some(handle) = timers.refresh.take() {
            handle.abort();
            timers.refresh = Some(self.spawn_refresh_timer());
            debug!("Refresh timer restarted");
        }
    }

    fn spawn_clock_timer(&self) -> JoinHandle<()> {
        let period = self.inner.timings.clock_interval;
        spawn_ticker(Arc::downgrade(&self.inner), period, |board| async move {
            board.tick_clock();
        })
    }

    fn spawn_refresh_timer(&self) -> JoinHandle<()> {
        let period = self.inner.timings.refresh_interval;
        spawn_ticker(Arc::downgrade(&self.inner), period, |board| async move {
            board.refresh().await;
        })
    }
}

/// Run `on_tick` every `period` until the board is gone
///
/// The task holds only a weak reference so a forgotten board is not kept
/// alive by its own timers.
fn spawn_ticker<F, Fut>(inner: Weak<Inner>, period: Duration, on_tick: F) -> JoinHandle<()>
where
    F: Fn(ArrivalsBoard) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let Some(inner) = inner.upgrade() else {
                break;
            };
            on_tick(ArrivalsBoard { inner }).await;
        }
    })
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use domain::TrainArrival;

    use super::*;
    use crate::ports::MockArrivalsPort;

    fn snapshot(station: &str, marker: &str) -> StationSnapshot {
        StationSnapshot {
            station: station.to_string(),
            timestamp: marker.to_string(),
            formatted_time: "08:30:00 AM".to_string(),
            lines: Vec::new(),
            all_trains: vec![TrainArrival {
                route_id: "6".to_string(),
                direction: "Uptown".to_string(),
                arrival_time: 1_792_398_660,
                arrival_time_formatted: "08:31 AM".to_string(),
                minutes_away: 1,
            }],
        }
    }

    fn echo_port() -> MockArrivalsPort {
        let mut port = MockArrivalsPort::new();
        port.expect_fetch_station()
            .returning(|station| Ok(snapshot(station.name(), "echo")));
        port
    }

    /// One scripted response: how long the fetch takes and what it returns
    struct Step {
        delay: Duration,
        result: Result<StationSnapshot, String>,
    }

    /// Port that replays scripted steps, then echoes the requested station
    #[derive(Default)]
    struct ScriptedPort {
        steps: Mutex<VecDeque<Step>>,
        requested: Mutex<Vec<Station>>,
        calls: AtomicUsize,
    }

    impl ScriptedPort {
        fn with_steps(steps: Vec<Step>) -> Self {
            Self {
                steps: Mutex::new(steps.into()),
                ..Self::default()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn last_requested(&self) -> Option<Station> {
            self.requested.lock().last().copied()
        }
    }

    #[async_trait]
    impl ArrivalsPort for ScriptedPort {
        async fn fetch_station(&self, station: Station) -> Result<StationSnapshot, ApplicationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requested.lock().push(station);

            let step = self.steps.lock().pop_front();
            let Some(step) = step else {
                return Ok(snapshot(station.name(), "echo"));
            };

            tokio::time::sleep(step.delay).await;
            step.result.map_err(ApplicationError::ExternalService)
        }
    }

    /// Let spawned refreshes run until the port has seen `calls` requests
    async fn wait_for_calls(port: &ScriptedPort, calls: usize) {
        while port.calls() < calls {
            tokio::task::yield_now().await;
        }
    }

    fn ok_after(secs: u64, station: &str, marker: &str) -> Step {
        Step {
            delay: Duration::from_secs(secs),
            result: Ok(snapshot(station, marker)),
        }
    }

    #[tokio::test]
    async fn refresh_applies_snapshot() {
        let board = ArrivalsBoard::new(Arc::new(echo_port()));

        assert_eq!(board.refresh().await, RefreshOutcome::Applied);

        let state = board.view();
        assert_eq!(state.station, Station::UnionSquare);
        assert_eq!(state.snapshot.unwrap().station, "Union Square");
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn every_station_loads_its_own_snapshot() {
        let board = ArrivalsBoard::new(Arc::new(echo_port()));

        for station in Station::ALL {
            board.select_station(station.name()).unwrap();
            assert_eq!(board.refresh().await, RefreshOutcome::Applied);

            let state = board.view();
            assert_eq!(state.station, station);
            assert_eq!(state.snapshot.unwrap().station, station.name());
        }
    }

    #[tokio::test]
    async fn failed_refresh_keeps_last_good_snapshot() {
        let mut port = MockArrivalsPort::new();
        let mut seq = mockall::Sequence::new();
        port.expect_fetch_station()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|station| Ok(snapshot(station.name(), "good")));
        port.expect_fetch_station()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(ApplicationError::ExternalService("HTTP 503".to_string())));

        let board = ArrivalsBoard::new(Arc::new(port));
        assert_eq!(board.refresh().await, RefreshOutcome::Applied);
        assert_eq!(board.refresh().await, RefreshOutcome::Failed);

        let state = board.view();
        assert_eq!(state.snapshot.unwrap().timestamp, "good");
        assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn failed_first_refresh_leaves_no_snapshot() {
        let mut port = MockArrivalsPort::new();
        port.expect_fetch_station()
            .returning(|_| Err(ApplicationError::ExternalService("connection refused".to_string())));

        let board = ArrivalsBoard::new(Arc::new(port));
        assert_eq!(board.refresh().await, RefreshOutcome::Failed);

        let state = board.view();
        assert!(state.snapshot.is_none());
        assert_eq!(state.error.as_deref(), Some(FETCH_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn successful_refresh_clears_error() {
        let mut port = MockArrivalsPort::new();
        let mut seq = mockall::Sequence::new();
        port.expect_fetch_station()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(ApplicationError::ExternalService("timeout".to_string())));
        port.expect_fetch_station()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|station| Ok(snapshot(station.name(), "recovered")));

        let board = ArrivalsBoard::new(Arc::new(port));
        board.refresh().await;
        assert!(board.view().error.is_some());

        board.refresh().await;
        let state = board.view();
        assert!(state.error.is_none());
        assert_eq!(state.snapshot.unwrap().timestamp, "recovered");
    }

    #[tokio::test]
    async fn unknown_station_is_rejected_without_changes() {
        let board = ArrivalsBoard::new(Arc::new(echo_port()));
        board.refresh().await;

        let err = board.select_station("union square").unwrap_err();
        assert!(matches!(err, ApplicationError::Domain(_)));

        let state = board.view();
        assert_eq!(state.station, Station::UnionSquare);
        assert!(state.snapshot.is_some());
    }

    #[tokio::test]
    async fn selecting_station_resets_display_state() {
        let board = ArrivalsBoard::new(Arc::new(echo_port()));
        board.refresh().await;
        board.toggle_expanded("L");

        let station = board.select_station("Herald Square").unwrap();
        assert_eq!(station, Station::HeraldSquare);

        let state = board.view();
        assert_eq!(state.station, Station::HeraldSquare);
        assert!(state.snapshot.is_none());
        assert!(state.error.is_none());
        assert!(!state.is_expanded("L"));
    }

    #[tokio::test]
    async fn selecting_current_station_keeps_state() {
        let board = ArrivalsBoard::new(Arc::new(echo_port()));
        board.refresh().await;
        board.toggle_expanded("Q");

        board.select_station("Union Square").unwrap();

        let state = board.view();
        assert!(state.snapshot.is_some());
        assert!(state.is_expanded("Q"));
    }

    #[test]
    fn toggle_expanded_is_reversible() {
        let board = ArrivalsBoard::new(Arc::new(MockArrivalsPort::new()));

        assert!(!board.view().is_expanded("L"));
        assert!(board.toggle_expanded("L"));
        assert!(board.view().is_expanded("L"));
        assert!(!board.toggle_expanded("L"));
        assert!(!board.view().is_expanded("L"));
        assert!(!board.view().is_expanded("7"));
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_refreshes_apply_only_the_latest() {
        let port = Arc::new(ScriptedPort::with_steps(vec![
            ok_after(10, "Union Square", "timer"),
            ok_after(1, "Union Square", "manual"),
        ]));
        let board = ArrivalsBoard::new(port.clone());

        let slow = tokio::spawn({
            let board = board.clone();
            async move { board.refresh().await }
        });
        wait_for_calls(&port, 1).await;

        assert_eq!(board.refresh().await, RefreshOutcome::Applied);
        assert_eq!(slow.await.unwrap(), RefreshOutcome::Superseded);

        let state = board.view();
        assert_eq!(state.snapshot.unwrap().timestamp, "manual");
        assert!(!state.loading);
    }

    #[tokio::test(start_paused = true)]
    async fn older_request_finishing_last_does_not_clear_loading() {
        let port = Arc::new(ScriptedPort::with_steps(vec![
            ok_after(1, "Union Square", "first"),
            ok_after(5, "Union Square", "second"),
        ]));
        let board = ArrivalsBoard::new(port.clone());

        let first = tokio::spawn({
            let board = board.clone();
            async move { board.refresh().await }
        });
        wait_for_calls(&port, 1).await;
        let second = tokio::spawn({
            let board = board.clone();
            async move { board.refresh().await }
        });
        wait_for_calls(&port, 2).await;

        assert_eq!(first.await.unwrap(), RefreshOutcome::Superseded);
        assert!(board.view().loading);
        assert!(board.view().snapshot.is_none());

        assert_eq!(second.await.unwrap(), RefreshOutcome::Applied);
        assert_eq!(board.view().snapshot.unwrap().timestamp, "second");
    }

    #[tokio::test(start_paused = true)]
    async fn response_for_previous_station_is_discarded() {
        let port = Arc::new(ScriptedPort::with_steps(vec![
            ok_after(10, "Union Square", "stale"),
            ok_after(1, "Times Square", "fresh"),
        ]));
        let board = ArrivalsBoard::new(port.clone());

        let stale = tokio::spawn({
            let board = board.clone();
            async move { board.refresh().await }
        });
        wait_for_calls(&port, 1).await;

        board.select_station("Times Square").unwrap();
        assert_eq!(board.refresh().await, RefreshOutcome::Applied);
        assert_eq!(stale.await.unwrap(), RefreshOutcome::Superseded);

        let state = board.view();
        assert_eq!(state.station, Station::TimesSquare);
        let snapshot = state.snapshot.unwrap();
        assert_eq!(snapshot.station, "Times Square");
        assert_eq!(snapshot.timestamp, "fresh");
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_timer_fires_immediately_then_every_interval() {
        let port = Arc::new(ScriptedPort::default());
        let board = ArrivalsBoard::new(port.clone());

        board.start();
        assert!(board.is_running());

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(port.calls(), 1);
        assert!(board.view().snapshot.is_some());

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(port.calls(), 2);

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(port.calls(), 4);

        board.dispose();
    }

    #[tokio::test(start_paused = true)]
    async fn clock_timer_updates_state_without_fetching() {
        let port = Arc::new(ScriptedPort::default());
        let board = ArrivalsBoard::new(port.clone());

        board.start();
        tokio::time::sleep(Duration::from_millis(10)).await;

        let mut changes = board.subscribe();
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(changes.has_changed().unwrap());
        changes.mark_unchanged();
        assert_eq!(port.calls(), 1);

        board.dispose();
    }

    #[tokio::test(start_paused = true)]
    async fn selecting_station_restarts_running_cycle() {
        let port = Arc::new(ScriptedPort::default());
        let board = ArrivalsBoard::new(port.clone());

        board.start();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(port.last_requested(), Some(Station::UnionSquare));

        board.select_station("Fulton Street").unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(port.calls(), 2);
        assert_eq!(port.last_requested(), Some(Station::FultonStreet));
        assert_eq!(board.view().snapshot.unwrap().station, "Fulton Street");

        board.dispose();
    }

    #[tokio::test(start_paused = true)]
    async fn dispose_stops_timers_and_mutations() {
        let port = Arc::new(ScriptedPort::default());
        let board = ArrivalsBoard::new(port.clone());

        board.start();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(port.calls(), 1);

        board.dispose();
        assert!(board.is_disposed());
        assert!(!board.is_running());

        let changes = board.subscribe();
        let before = board.view();

        tokio::time::sleep(Duration::from_secs(300)).await;

        assert_eq!(port.calls(), 1);
        assert!(!changes.has_changed().unwrap());

        assert_eq!(board.refresh().await, RefreshOutcome::Disposed);
        assert!(!board.toggle_expanded("L"));
        assert!(matches!(
            board.select_station("Times Square"),
            Err(ApplicationError::Disposed)
        ));
        board.tick_clock();

        let after = board.view();
        assert_eq!(after.now, before.now);
        assert_eq!(after.station, before.station);
        assert!(after.expanded.is_empty());
        assert!(!changes.has_changed().unwrap());
        assert_eq!(port.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn dispose_abandons_in_flight_fetch() {
        let port = Arc::new(ScriptedPort::with_steps(vec![ok_after(
            5,
            "Union Square",
            "late",
        )]));
        let board = ArrivalsBoard::new(port.clone());

        let pending = tokio::spawn({
            let board = board.clone();
            async move { board.refresh().await }
        });
        wait_for_calls(&port, 1).await;

        board.dispose();
        assert_eq!(pending.await.unwrap(), RefreshOutcome::Disposed);
        assert!(board.view().snapshot.is_none());
    }

    #[tokio::test]
    async fn start_is_idempotent() {
        let board = ArrivalsBoard::new(Arc::new(echo_port()));
        board.start();
        board.start();
        assert!(board.is_running());
        board.dispose();
        board.start();
        assert!(!board.is_running());
    }
}
