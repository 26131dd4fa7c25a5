//! Agenda segment structure

use serde::{Deserialize, Serialize};

use super::error::InvalidConfiguration;

/// A named, fixed-duration phase of the meeting agenda.
///
/// Segments are immutable once the countdown is constructed; their order
/// in the agenda defines traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub name: String,
    pub duration_secs: u64,
    /// Short blurb shown alongside the segment in the agenda listing.
    #[serde(default)]
    pub description: String,
}

impl Segment {
    /// Create a segment with no description
    pub fn new(name: impl Into<String>, duration_secs: u64) -> Self {
        Self {
            name: name.into(),
            duration_secs,
            description: String::new(),
        }
    }

    /// Attach a description to the segment
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Parse a comma-separated `NAME:MINUTES` agenda string into segments.
///
/// Durations are given in minutes on the command line and stored in
/// seconds. Validation of the resulting list happens at countdown
/// construction; this only rejects entries that do not parse at all.
pub fn parse_agenda(spec: &str) -> Result<Vec<Segment>, InvalidConfiguration> {
    let mut segments = Vec::new();

    for entry in spec.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let (name, minutes) =
            entry
                .rsplit_once(':')
                .ok_or_else(|| InvalidConfiguration::MalformedAgendaEntry {
                    entry: entry.to_string(),
                })?;

        let minutes: u64 =
            minutes
                .trim()
                .parse()
                .map_err(|_| InvalidConfiguration::MalformedAgendaEntry {
                    entry: entry.to_string(),
                })?;

        // Minutes come from the command line; an absurd value must not
        // wrap when converted to seconds.
        let duration_secs =
            minutes
                .checked_mul(60)
                .ok_or_else(|| InvalidConfiguration::MalformedAgendaEntry {
                    entry: entry.to_string(),
                })?;

        segments.push(Segment::new(name.trim(), duration_secs));
    }

    if segments.is_empty() {
        return Err(InvalidConfiguration::EmptyAgenda);
    }

    Ok(segments)
}
