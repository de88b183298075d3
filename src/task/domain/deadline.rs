//! Calendar-date deadline and its storage and presentation formats.

use super::TaskDomainError;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Format accepted from edit forms and used for pre-filling them.
const ISO_FORMAT: &str = "%Y-%m-%d";

/// Day-first format used by listing views.
const DISPLAY_FORMAT: &str = "%d-%m-%Y";

/// Date by which a task should be completed.
///
/// A deadline has no time-of-day component. It is persisted as midnight UTC
/// and read back by taking the UTC calendar date, so the date is stable
/// whatever timezone the server or database session runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deadline(NaiveDate);

impl Deadline {
    /// Creates a deadline for the given calendar date.
    #[must_use]
    pub const fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses an ISO `YYYY-MM-DD` date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDeadline`] when the value is not a
    /// valid calendar date in ISO format.
    pub fn parse_iso(raw: &str) -> Result<Self, TaskDomainError> {
        NaiveDate::parse_from_str(raw.trim(), ISO_FORMAT)
            .map(Self)
            .map_err(|_| TaskDomainError::InvalidDeadline(raw.to_owned()))
    }

    /// Recovers a deadline from its stored timestamp.
    #[must_use]
    pub fn from_timestamp(timestamp: DateTime<Utc>) -> Self {
        Self(timestamp.date_naive())
    }

    /// Returns the timestamp used to persist this deadline.
    #[must_use]
    pub fn to_timestamp(self) -> DateTime<Utc> {
        self.0.and_time(NaiveTime::MIN).and_utc()
    }

    /// Returns `true` when the deadline falls strictly before `today`.
    #[must_use]
    pub fn is_before(self, today: NaiveDate) -> bool {
        self.0 < today
    }

    /// Formats the deadline for listing views (`DD-MM-YYYY`).
    #[must_use]
    pub fn display_format(self) -> String {
        self.0.format(DISPLAY_FORMAT).to_string()
    }

    /// Formats the deadline for edit forms (`YYYY-MM-DD`).
    #[must_use]
    pub fn edit_format(self) -> String {
        self.0.format(ISO_FORMAT).to_string()
    }
}

impl FromStr for Deadline {
    type Err = TaskDomainError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse_iso(raw)
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}
