//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, watch};
use tracing::{info, warn};

use crate::timer::{Countdown, Segment, TimerEvent};

use super::TimerSnapshot;

/// Main application state that owns the countdown and its channels
#[derive(Debug)]
pub struct AppState {
    /// The countdown state machine, mutated under one lock
    timer: Mutex<Countdown>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// Run-state channel the ticker task follows; true while ticking
    pub run_tx: watch::Sender<bool>,
    /// Channel for timer events (progress updates, segment transitions)
    pub event_tx: broadcast::Sender<TimerEvent>,
    /// Channel carrying the latest snapshot after every mutation
    pub snapshot_tx: watch::Sender<TimerSnapshot>,
    /// Keep a receiver alive to prevent channel closure
    _event_rx: broadcast::Receiver<TimerEvent>,
}

impl AppState {
    /// Create a new AppState around a freshly constructed countdown
    pub fn new(timer: Countdown, port: u16, host: String) -> Self {
        let (run_tx, _) = watch::channel(false);
        let (event_tx, event_rx) = broadcast::channel(100);
        let (snapshot_tx, _) = watch::channel(TimerSnapshot::of(&timer));

        Self {
            timer: Mutex::new(timer),
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
            run_tx,
            event_tx,
            snapshot_tx,
            _event_rx: event_rx,
        }
    }

    /// Start the countdown. Idempotent when already running or complete.
    pub fn start(&self) -> Result<TimerSnapshot, String> {
        self.mutate("start", |timer| {
            if timer.start() {
                info!("Countdown started at {}s elapsed", timer.elapsed_secs());
            }
        })
    }

    /// Pause the countdown. Idempotent when not running.
    pub fn pause(&self) -> Result<TimerSnapshot, String> {
        self.mutate("pause", |timer| {
            if timer.pause() {
                info!("Countdown paused at {}s elapsed", timer.elapsed_secs());
            }
        })
    }

    /// Reset the countdown to its initial state
    pub fn reset(&self) -> Result<TimerSnapshot, String> {
        self.mutate("reset", |timer| {
            timer.reset();
            info!("Countdown reset");
        })
    }

    /// Apply elapsed seconds from the ticker and publish resulting events
    pub fn advance(&self, secs: u64) -> Result<TimerSnapshot, String> {
        let mut timer = self
            .timer
            .lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        let events = timer.advance(secs);
        let snapshot = TimerSnapshot::of(&timer);
        drop(timer); // Release the lock early

        self.publish(events);
        self.sync_run_state(&snapshot);
        self.snapshot_tx.send_replace(snapshot.clone());

        Ok(snapshot)
    }

    /// Get the current snapshot without mutating anything
    pub fn snapshot(&self) -> Result<TimerSnapshot, String> {
        self.timer
            .lock()
            .map(|timer| TimerSnapshot::of(&timer))
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    /// Read the configured agenda and total duration
    pub fn agenda(&self) -> Result<(Vec<Segment>, u64), String> {
        self.timer
            .lock()
            .map(|timer| (timer.segments().to_vec(), timer.total_secs()))
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    /// Apply a control mutation under the timer lock, then publish the
    /// new snapshot and record the action
    fn mutate<F>(&self, action: &str, mutator: F) -> Result<TimerSnapshot, String>
    where
        F: FnOnce(&mut Countdown),
    {
        let mut timer = self
            .timer
            .lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        mutator(&mut timer);
        let snapshot = TimerSnapshot::of(&timer);
        drop(timer); // Release the lock early

        // Update last action tracking
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        self.sync_run_state(&snapshot);
        self.snapshot_tx.send_replace(snapshot.clone());

        Ok(snapshot)
    }

    /// Broadcast timer events to any listeners
    fn publish(&self, events: Vec<TimerEvent>) {
        for event in events {
            if let TimerEvent::Transition { ref from, ref to } = event {
                info!("Segment transition: {} -> {}", from, to);
            }
            if let Err(e) = self.event_tx.send(event) {
                warn!("Failed to send timer event: {}", e);
            }
        }
    }

    /// Keep the ticker's run-state channel in line with the countdown,
    /// waking it only on a real change
    fn sync_run_state(&self, snapshot: &TimerSnapshot) {
        if *self.run_tx.borrow() != snapshot.running {
            self.run_tx.send_replace(snapshot.running);
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}

/// Build the shared state handle used by main and the tests
pub fn shared_state(timer: Countdown, port: u16, host: String) -> Arc<AppState> {
    Arc::new(AppState::new(timer, port, host))
}
