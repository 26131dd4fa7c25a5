//! Built-in Level 10 meeting agenda

use super::segment::Segment;

/// The standard 90-minute Level 10 agenda.
///
/// Durations are the usual EOS allotments; the total meeting length is
/// configured separately and defaults to the sum of these.
pub fn level_ten_agenda() -> Vec<Segment> {
    vec![
        Segment::new("Segue", 5 * 60).with_description("Share personal and professional wins"),
        Segment::new("Scorecard Review", 5 * 60).with_description("Review key metrics status"),
        Segment::new("Rock Review", 5 * 60).with_description("Review quarterly goals progress"),
        Segment::new("Headlines", 5 * 60).with_description("Customer and employee updates"),
        Segment::new("ToDos", 5 * 60).with_description("Review previous meeting tasks"),
        Segment::new("IDS", 60 * 60).with_description("Identify, Discuss, Solve issues"),
        Segment::new("Conclusion", 5 * 60)
            .with_description("Rate the meeting and capture cascading messages"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::Countdown;

    #[test]
    fn default_agenda_fills_ninety_minutes() {
        let agenda = level_ten_agenda();
        let total: u64 = agenda.iter().map(|s| s.duration_secs).sum();
        assert_eq!(total, 90 * 60);
    }

    #[test]
    fn default_agenda_builds_a_valid_countdown() {
        let timer = Countdown::new(90 * 60, level_ten_agenda()).unwrap();
        assert_eq!(timer.current_segment(), "Segue");
        assert_eq!(timer.format_remaining(), "90:00");
    }
}
