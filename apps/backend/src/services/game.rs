//! The single quiz session served by this process.
//!
//! Session state and the countdown timer live behind one mutex, so a
//! tick that ends the round and the phase change it causes are observed
//! together. Each started round gets a run id; a timer only ticks the
//! round it was started for, which keeps a timer from a reset round from
//! touching the next one.

use std::num::NonZeroU32;
use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use chrono::{DateTime, Utc};
use geoquiz_core::{
    Catalog, Continent, ContinentBoard, GuessOutcome, Session, SessionEvent, SessionSnapshot,
};
use serde::Serialize;
use tokio::sync::broadcast;
use uuid::Uuid;

use super::timer::CountdownTimer;

/// One countdown step.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

const EVENT_BUFFER: usize = 64;

/// Notification published to subscribers.
#[derive(Debug, Clone, Serialize)]
pub struct GameEvent {
    pub run_id: Uuid,
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub event: SessionEvent,
}

impl GameEvent {
    /// Short name used as the SSE event type.
    pub fn kind(&self) -> &'static str {
        match self.event {
            SessionEvent::Started { .. } => "started",
            SessionEvent::CorrectGuess { .. } => "correct_guess",
            SessionEvent::Ended { .. } => "ended",
            SessionEvent::Reset => "reset",
        }
    }
}

/// Session snapshot plus the id of the round it belongs to.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<Uuid>,
    #[serde(flatten)]
    pub snapshot: SessionSnapshot,
}

struct GameInner {
    session: Session,
    run_id: Option<Uuid>,
    timer: Option<CountdownTimer>,
}

/// Owns the session, its countdown and the event channel.
pub struct GameService {
    inner: Arc<Mutex<GameInner>>,
    events: broadcast::Sender<GameEvent>,
    tick_period: Duration,
}

impl GameService {
    pub fn new(catalog: Arc<Catalog>, duration: NonZeroU32) -> Self {
        Self::with_tick_period(catalog, duration, TICK_PERIOD)
    }

    pub fn with_tick_period(
        catalog: Arc<Catalog>,
        duration: NonZeroU32,
        tick_period: Duration,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_BUFFER);
        Self {
            inner: Arc::new(Mutex::new(GameInner {
                session: Session::with_duration(catalog, duration),
                run_id: None,
                timer: None,
            })),
            events,
            tick_period,
        }
    }

    /// Receive every notification published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<GameEvent> {
        self.events.subscribe()
    }

    /// Start a round and its countdown. Ignored while a round is running.
    pub fn start(&self) -> SessionView {
        let mut inner = lock(&self.inner);
        if let Some(event) = inner.session.start() {
            let run_id = Uuid::new_v4();
            inner.run_id = Some(run_id);
            inner.timer = Some(self.spawn_countdown(run_id));
            tracing::info!(
                %run_id,
                duration_secs = inner.session.duration_secs(),
                "Round started"
            );
            publish(&self.events, run_id, event);
        } else {
            tracing::debug!("Start ignored: round already running");
        }
        view(&inner)
    }

    /// Check a typed guess against the running round.
    pub fn submit_guess(&self, text: &str) -> (GuessOutcome, SessionView) {
        let mut inner = lock(&self.inner);
        let outcome = inner.session.submit_guess(text);
        match (&outcome, inner.run_id) {
            (GuessOutcome::Correct { name }, Some(run_id)) => {
                tracing::info!(
                    %run_id,
                    country = %name,
                    found = inner.session.found().len(),
                    "Correct guess"
                );
                if let Some(event) = outcome.event() {
                    publish(&self.events, run_id, event);
                }
            }
            _ => tracing::debug!(?outcome, "Guess declined"),
        }
        (outcome, view(&inner))
    }

    /// Abandon any round and return to idle. The countdown is stopped
    /// before the lock is released.
    pub fn reset(&self) -> SessionView {
        let mut inner = lock(&self.inner);
        inner.timer = None;
        let run_id = inner.run_id.take();
        if let (Some(event), Some(run_id)) = (inner.session.reset(), run_id) {
            tracing::info!(%run_id, "Round reset");
            publish(&self.events, run_id, event);
        }
        view(&inner)
    }

    pub fn snapshot(&self) -> SessionView {
        view(&lock(&self.inner))
    }

    pub fn board(&self) -> Vec<ContinentBoard> {
        lock(&self.inner).session.board()
    }

    pub fn continent(&self, continent: Continent) -> ContinentBoard {
        lock(&self.inner).session.continent(continent)
    }

    pub fn catalog_size(&self) -> usize {
        lock(&self.inner).session.catalog_size()
    }

    /// Whether a countdown task is currently alive.
    pub fn is_counting_down(&self) -> bool {
        lock(&self.inner)
            .timer
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }

    fn spawn_countdown(&self, run_id: Uuid) -> CountdownTimer {
        let inner = Arc::downgrade(&self.inner);
        let events = self.events.clone();
        CountdownTimer::spawn(self.tick_period, move || tick(&inner, &events, run_id))
    }
}

fn tick(
    inner: &Weak<Mutex<GameInner>>,
    events: &broadcast::Sender<GameEvent>,
    run_id: Uuid,
) -> ControlFlow<()> {
    let Some(inner) = inner.upgrade() else {
        return ControlFlow::Break(());
    };
    let mut inner = lock(&inner);
    if inner.run_id != Some(run_id) {
        return ControlFlow::Break(());
    }
    match inner.session.tick() {
        Some(event) => {
            inner.timer = None;
            if let SessionEvent::Ended { grade, found, total } = &event {
                tracing::info!(%run_id, %grade, found, total, "Round ended");
            }
            publish(events, run_id, event);
            ControlFlow::Break(())
        }
        None => ControlFlow::Continue(()),
    }
}

fn publish(events: &broadcast::Sender<GameEvent>, run_id: Uuid, event: SessionEvent) {
    // No subscribers is fine; notifications are best effort.
    let _ = events.send(GameEvent {
        run_id,
        at: Utc::now(),
        event,
    });
}

fn view(inner: &GameInner) -> SessionView {
    SessionView {
        run_id: inner.run_id,
        snapshot: inner.session.snapshot(),
    }
}

fn lock(inner: &Mutex<GameInner>) -> MutexGuard<'_, GameInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}
