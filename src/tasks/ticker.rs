//! Countdown ticker background task

use std::{sync::Arc, time::Duration};
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

use crate::state::AppState;

/// Background task that drives the countdown at 1 Hz while it is running.
///
/// Exactly one tick source exists at any time: the interval lives inside
/// the inner loop and is dropped the moment the countdown pauses or
/// finishes, so a stale source can never keep firing. Repeated start
/// calls only flip the run-state watch channel; they never install a
/// second interval.
pub async fn ticker_task(state: Arc<AppState>) {
    info!("Starting countdown ticker task");

    let mut run_rx = state.run_tx.subscribe();

    loop {
        // Park until the countdown is started
        while !*run_rx.borrow_and_update() {
            if run_rx.changed().await.is_err() {
                debug!("Run-state channel closed, ticker exiting");
                return;
            }
        }

        debug!("Countdown running, installing 1 Hz tick source");
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
        // The first tick completes immediately; consume it so the
        // countdown advances one second from now, not at resume time.
        interval.tick().await;

        loop {
            tokio::select! {
                // Timer tick - apply one second to the countdown
                _ = interval.tick() => {
                    match state.advance(1) {
                        Ok(snapshot) => {
                            if !snapshot.running {
                                info!("Countdown reached {} with progress {:.2}, tick source cancelled",
                                      snapshot.current_segment, snapshot.progress);
                                break;
                            }
                        }
                        Err(e) => {
                            error!("Failed to advance countdown: {}", e);
                            break;
                        }
                    }
                }

                // Run-state change - cancel the tick source on pause
                changed = run_rx.changed() => {
                    if changed.is_err() {
                        debug!("Run-state channel closed, ticker exiting");
                        return;
                    }
                    if !*run_rx.borrow_and_update() {
                        debug!("Countdown paused, cancelling tick source");
                        break;
                    }
                }
            }
        }
    }
}
