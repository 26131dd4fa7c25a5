//! Configuration and CLI argument handling

use clap::Parser;

use crate::timer::{level_ten_agenda, parse_agenda, InvalidConfiguration, Segment};

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "meeting-timer")]
#[command(about = "A timer-driven HTTP server for running Level 10 meetings")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "8090")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Meeting length in minutes
    #[arg(short, long, default_value = "90")]
    pub length: u64,

    /// Custom agenda as comma-separated NAME:MINUTES entries,
    /// e.g. "Segue:5,Scorecard Review:5,IDS:60"
    #[arg(short, long)]
    pub agenda: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Total meeting duration in seconds
    pub fn total_secs(&self) -> Result<u64, InvalidConfiguration> {
        self.length
            .checked_mul(60)
            .ok_or(InvalidConfiguration::MeetingTooLong {
                minutes: self.length,
            })
    }

    /// Build the agenda: the custom one when given, otherwise the
    /// standard Level 10 agenda
    pub fn segments(&self) -> Result<Vec<Segment>, InvalidConfiguration> {
        match &self.agenda {
            Some(spec) => parse_agenda(spec),
            None => Ok(level_ten_agenda()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(length: u64) -> Config {
        Config {
            port: 8090,
            host: "0.0.0.0".to_string(),
            length,
            agenda: None,
            verbose: false,
        }
    }

    #[test]
    fn total_converts_minutes_to_seconds() {
        assert_eq!(config(90).total_secs().unwrap(), 90 * 60);
    }

    #[test]
    fn total_rejects_length_that_overflows_seconds() {
        assert_eq!(
            config(u64::MAX).total_secs().unwrap_err(),
            InvalidConfiguration::MeetingTooLong { minutes: u64::MAX }
        );
    }
}
