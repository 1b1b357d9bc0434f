use chrono::{Days, NaiveDate, SecondsFormat};
use thiserror::Error;

/// One UTC calendar day, `00:00:00Z` through `23:59:59Z`.
///
/// The day is picked from the local calendar and then read as UTC with no
/// offset correction, so near midnight the window may not line up with the
/// user's local "yesterday".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributionWindow {
    day: NaiveDate,
}

#[derive(Debug, Error)]
#[error("Error computing date window: no calendar day before {today}")]
pub struct WindowError {
    pub today: NaiveDate,
}

impl ContributionWindow {
    pub fn for_day(day: NaiveDate) -> Self {
        Self { day }
    }

    pub fn previous_day(today: NaiveDate) -> Result<Self, WindowError> {
        today
            .checked_sub_days(Days::new(1))
            .map(Self::for_day)
            .ok_or(WindowError { today })
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn start(&self) -> String {
        self.day
            .and_hms_opt(0, 0, 0)
            .map(|t| t.and_utc().to_rfc3339_opts(SecondsFormat::Secs, true))
            .unwrap_or_default()
    }

    pub fn end(&self) -> String {
        self.day
            .and_hms_opt(23, 59, 59)
            .map(|t| t.and_utc().to_rfc3339_opts(SecondsFormat::Secs, true))
            .unwrap_or_default()
    }
}
