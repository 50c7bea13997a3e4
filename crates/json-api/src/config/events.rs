//! Events Config

use clap::Args;
use jiff::tz::TimeZone;

/// Event calendar settings.
#[derive(Debug, Args)]
pub struct EventsConfig {
    /// IANA time zone used to decide which day it is at the venue
    #[arg(long, env = "EVENT_TIME_ZONE", default_value = "UTC")]
    pub event_time_zone: String,
}

impl EventsConfig {
    /// Resolve the configured time zone.
    ///
    /// # Errors
    ///
    /// Returns an error when the name is not in the time zone database.
    pub fn time_zone(&self) -> Result<TimeZone, jiff::Error> {
        TimeZone::get(&self.event_time_zone)
    }
}
