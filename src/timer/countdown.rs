//! Segmented countdown state machine
//!
//! The countdown is a pure state machine over `{elapsed, running, segment
//! index}` with explicit transition functions. Each tick returns the list
//! of events it produced, so the logic is testable without any scheduler
//! or rendering layer attached. The 1 Hz cadence is supplied externally
//! by the ticker task.

use super::error::InvalidConfiguration;
use super::segment::Segment;

/// Sentinel segment name reported once the countdown has finished.
pub const COMPLETE: &str = "complete";

/// Events emitted by the countdown as ticks are applied.
#[derive(Debug, Clone, PartialEq)]
pub enum TimerEvent {
    /// Overall progress fraction, clamped to [0, 1]. Emitted on every tick.
    Progress { fraction: f64 },
    /// A segment boundary was crossed. `to` is the next segment name, or
    /// [`COMPLETE`] when the countdown finished.
    Transition { from: String, to: String },
}

/// Countdown over an ordered list of named agenda segments.
///
/// Elapsed time and durations are integer seconds. The sum of segment
/// durations need not equal the total meeting duration: the countdown
/// runs against the total, while segment transitions are computed from
/// the prefix sums of segment durations alone.
#[derive(Debug, Clone)]
pub struct Countdown {
    segments: Vec<Segment>,
    total_secs: u64,
    elapsed_secs: u64,
    running: bool,
    /// Index of the active segment, or `segments.len()` once complete.
    position: usize,
}

impl Countdown {
    /// Build a countdown from a total duration and a non-empty agenda.
    pub fn new(total_secs: u64, segments: Vec<Segment>) -> Result<Self, InvalidConfiguration> {
        if total_secs == 0 {
            return Err(InvalidConfiguration::ZeroTotalDuration);
        }
        if segments.is_empty() {
            return Err(InvalidConfiguration::EmptyAgenda);
        }
        for (index, segment) in segments.iter().enumerate() {
            if segment.name.trim().is_empty() {
                return Err(InvalidConfiguration::EmptySegmentName { index });
            }
            if segment.duration_secs == 0 {
                return Err(InvalidConfiguration::ZeroSegmentDuration {
                    name: segment.name.clone(),
                });
            }
        }

        Ok(Self {
            segments,
            total_secs,
            elapsed_secs: 0,
            running: false,
            position: 0,
        })
    }

    /// Start ticking. No-op if already running or out of time.
    pub fn start(&mut self) -> bool {
        if self.running || self.remaining_secs() == 0 {
            return false;
        }
        self.running = true;
        true
    }

    /// Freeze elapsed time. No-op if not running.
    pub fn pause(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        true
    }

    /// Return to the initial state: elapsed zero, paused, first segment.
    pub fn reset(&mut self) {
        self.elapsed_secs = 0;
        self.running = false;
        self.position = 0;
    }

    /// Apply one second of wall-clock time.
    pub fn tick(&mut self) -> Vec<TimerEvent> {
        self.advance(1)
    }

    /// Apply `secs` seconds of wall-clock time, one at a time.
    ///
    /// A delayed scheduler may owe the countdown more than one second; every
    /// skipped segment boundary still gets its own transition event, in
    /// order. Ticking stops at the terminal state, so any excess seconds
    /// are discarded rather than pushing elapsed past the total.
    pub fn advance(&mut self, secs: u64) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        for _ in 0..secs {
            if !self.running {
                break;
            }
            self.step(&mut events);
        }
        events
    }

    /// Advance elapsed time by exactly one second and collect events.
    fn step(&mut self, events: &mut Vec<TimerEvent>) {
        self.elapsed_secs += 1;

        // Walk every boundary crossed by this second. Under normal 1 Hz
        // ticking that is at most one, but the loop keeps the event
        // stream correct no matter how boundaries line up.
        let target = self.position_for(self.elapsed_secs);
        while self.position < target {
            let from = self.segments[self.position].name.clone();
            let to = match self.segments.get(self.position + 1) {
                Some(next) => next.name.clone(),
                None => COMPLETE.to_string(),
            };
            events.push(TimerEvent::Transition { from, to });
            self.position += 1;
        }

        if self.elapsed_secs >= self.total_secs {
            // Remaining hit zero: stop ticking and report completion once,
            // even when the agenda's prefix sums run past the total.
            self.elapsed_secs = self.total_secs;
            self.running = false;
            if self.position < self.segments.len() {
                events.push(TimerEvent::Transition {
                    from: self.segments[self.position].name.clone(),
                    to: COMPLETE.to_string(),
                });
                self.position = self.segments.len();
            }
        }

        events.push(TimerEvent::Progress {
            fraction: self.progress(),
        });
    }

    /// Smallest index whose duration prefix sum exceeds `elapsed`, or
    /// `segments.len()` when every segment has been exhausted.
    fn position_for(&self, elapsed: u64) -> usize {
        let mut cumulative = 0;
        for (index, segment) in self.segments.iter().enumerate() {
            cumulative += segment.duration_secs;
            if cumulative > elapsed {
                return index;
            }
        }
        self.segments.len()
    }

    /// Progress fraction in [0, 1]
    pub fn progress(&self) -> f64 {
        let fraction = self.elapsed_secs as f64 / self.total_secs as f64;
        fraction.clamp(0.0, 1.0)
    }

    /// Name of the active segment, or [`COMPLETE`] once finished
    pub fn current_segment(&self) -> &str {
        match self.segments.get(self.position) {
            Some(segment) => &segment.name,
            None => COMPLETE,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.segments.len() || self.elapsed_secs >= self.total_secs
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn remaining_secs(&self) -> u64 {
        self.total_secs.saturating_sub(self.elapsed_secs)
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Remaining time rendered as zero-padded `MM:SS`
    pub fn format_remaining(&self) -> String {
        format_remaining(self.remaining_secs())
    }
}

/// Format a number of seconds as zero-padded `MM:SS`
pub fn format_remaining(remaining_secs: u64) -> String {
    let minutes = remaining_secs / 60;
    let seconds = remaining_secs % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_phase() -> Countdown {
        let segments = vec![Segment::new("Segue", 5), Segment::new("Review", 5)];
        Countdown::new(10, segments).unwrap()
    }

    fn transitions(events: &[TimerEvent]) -> Vec<(String, String)> {
        events
            .iter()
            .filter_map(|event| match event {
                TimerEvent::Transition { from, to } => Some((from.clone(), to.clone())),
                _ => None,
            })
            .collect()
    }

    fn last_progress(events: &[TimerEvent]) -> Option<f64> {
        events.iter().rev().find_map(|event| match event {
            TimerEvent::Progress { fraction } => Some(*fraction),
            _ => None,
        })
    }

    #[test]
    fn rejects_empty_agenda() {
        assert_eq!(
            Countdown::new(60, Vec::new()).unwrap_err(),
            InvalidConfiguration::EmptyAgenda
        );
    }

    #[test]
    fn rejects_zero_duration_segment() {
        let segments = vec![Segment::new("Segue", 5), Segment::new("Review", 0)];
        assert_eq!(
            Countdown::new(60, segments).unwrap_err(),
            InvalidConfiguration::ZeroSegmentDuration {
                name: "Review".to_string()
            }
        );
    }

    #[test]
    fn rejects_blank_segment_name() {
        let segments = vec![Segment::new("  ", 5)];
        assert_eq!(
            Countdown::new(60, segments).unwrap_err(),
            InvalidConfiguration::EmptySegmentName { index: 0 }
        );
    }

    #[test]
    fn rejects_zero_total() {
        let segments = vec![Segment::new("Segue", 5)];
        assert_eq!(
            Countdown::new(0, segments).unwrap_err(),
            InvalidConfiguration::ZeroTotalDuration
        );
    }

    #[test]
    fn segment_index_matches_prefix_sums() {
        let segments = vec![
            Segment::new("Segue", 3),
            Segment::new("Review", 4),
            Segment::new("IDS", 5),
        ];
        let timer = Countdown::new(12, segments).unwrap();

        for elapsed in 0..=12 {
            let expected = match elapsed {
                0..=2 => 0,
                3..=6 => 1,
                7..=11 => 2,
                _ => 3,
            };
            assert_eq!(
                timer.position_for(elapsed),
                expected,
                "elapsed={}",
                elapsed
            );
        }
    }

    #[test]
    fn no_ticks_while_paused() {
        let mut timer = two_phase();
        assert!(timer.tick().is_empty());
        assert_eq!(timer.elapsed_secs(), 0);
    }

    #[test]
    fn progress_is_monotone_and_clamped() {
        let mut timer = two_phase();
        timer.start();

        let mut previous = 0.0;
        for _ in 0..20 {
            let events = timer.tick();
            if let Some(fraction) = last_progress(&events) {
                assert!(fraction >= previous);
                assert!((0.0..=1.0).contains(&fraction));
                previous = fraction;
            }
        }
        assert_eq!(timer.elapsed_secs(), 10);
        assert_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn transition_fires_once_per_boundary() {
        let mut timer = two_phase();
        timer.start();

        let mut all = Vec::new();
        for _ in 0..5 {
            all.extend(timer.tick());
        }
        assert_eq!(
            transitions(&all),
            vec![("Segue".to_string(), "Review".to_string())]
        );

        all.clear();
        for _ in 0..5 {
            all.extend(timer.tick());
        }
        assert_eq!(
            transitions(&all),
            vec![("Review".to_string(), COMPLETE.to_string())]
        );
        assert_eq!(last_progress(&all), Some(1.0));
        assert!(!timer.is_running());
        assert!(timer.is_complete());

        // Terminal state is sticky: no further events, no restart.
        assert!(timer.tick().is_empty());
        assert!(!timer.start());
        assert_eq!(timer.current_segment(), COMPLETE);
    }

    #[test]
    fn gap_skip_emits_every_boundary_in_order() {
        let segments = vec![
            Segment::new("Segue", 1),
            Segment::new("Review", 1),
            Segment::new("IDS", 8),
        ];
        let mut timer = Countdown::new(10, segments).unwrap();
        timer.start();

        // Two boundary-crossing seconds applied in one invocation, as a
        // delayed scheduler would.
        let events = timer.advance(2);
        assert_eq!(
            transitions(&events),
            vec![
                ("Segue".to_string(), "Review".to_string()),
                ("Review".to_string(), "IDS".to_string()),
            ]
        );
        assert_eq!(timer.current_segment(), "IDS");
    }

    #[test]
    fn pause_freezes_elapsed_exactly() {
        let mut timer = two_phase();
        timer.start();
        timer.advance(3);

        assert!(timer.pause());
        assert!(!timer.pause());
        assert!(timer.advance(7).is_empty());
        assert_eq!(timer.elapsed_secs(), 3);

        assert!(timer.start());
        assert!(!timer.start());
        timer.advance(1);
        assert_eq!(timer.elapsed_secs(), 4);
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut timer = two_phase();
        timer.start();
        timer.advance(7);
        assert_eq!(timer.current_segment(), "Review");

        timer.reset();
        assert_eq!(timer.elapsed_secs(), 0);
        assert!(!timer.is_running());
        assert_eq!(timer.current_segment(), "Segue");
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn completion_fires_when_total_is_shorter_than_agenda() {
        // Total runs out in the middle of "Review": the countdown stops and
        // reports completion from the segment it was in.
        let segments = vec![Segment::new("Segue", 5), Segment::new("Review", 30)];
        let mut timer = Countdown::new(8, segments).unwrap();
        timer.start();

        let events = timer.advance(8);
        assert_eq!(
            transitions(&events),
            vec![
                ("Segue".to_string(), "Review".to_string()),
                ("Review".to_string(), COMPLETE.to_string()),
            ]
        );
        assert!(timer.is_complete());
        assert_eq!(timer.remaining_secs(), 0);
    }

    #[test]
    fn completion_fires_once_when_agenda_is_shorter_than_total() {
        let segments = vec![Segment::new("Segue", 2)];
        let mut timer = Countdown::new(5, segments).unwrap();
        timer.start();

        let events = timer.advance(5);
        assert_eq!(
            transitions(&events),
            vec![("Segue".to_string(), COMPLETE.to_string())]
        );
        // Ticking continued to the total for the progress stream.
        assert_eq!(timer.elapsed_secs(), 5);
        assert_eq!(last_progress(&events), Some(1.0));
        assert!(!timer.is_running());
    }

    #[test]
    fn formats_remaining_as_mm_ss() {
        assert_eq!(format_remaining(0), "00:00");
        assert_eq!(format_remaining(5), "00:05");
        assert_eq!(format_remaining(65), "01:05");
        assert_eq!(format_remaining(5400), "90:00");

        let mut timer = two_phase();
        assert_eq!(timer.format_remaining(), "00:10");
        timer.start();
        timer.advance(4);
        assert_eq!(timer.format_remaining(), "00:06");
    }
}
