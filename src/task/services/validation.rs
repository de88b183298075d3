//! Request-level validation performed before any storage call.

use crate::task::domain::{Deadline, TaskDetails, TaskDomainError};
use chrono::{DateTime, TimeZone};

/// Validates the raw fields of a creation request against the current time.
///
/// The deadline is compared by calendar date in the timezone of `now`: a
/// deadline of today is accepted, anything strictly earlier is rejected.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDeadline`] for an unparseable deadline,
/// [`TaskDomainError::DeadlinePassed`] for a deadline before today, and the
/// field errors of [`TaskDetails::new`] for empty text fields.
pub fn validate_create<Tz: TimeZone>(
    description: &str,
    assignee: &str,
    deadline: &str,
    now: &DateTime<Tz>,
) -> Result<TaskDetails, TaskDomainError> {
    let parsed = Deadline::parse_iso(deadline)?;
    let today = now.date_naive();
    if parsed.is_before(today) {
        return Err(TaskDomainError::DeadlinePassed {
            deadline: parsed,
            today,
        });
    }
    TaskDetails::new(description, assignee, parsed)
}

/// Validates the raw fields of an update request.
///
/// Updates are not checked against the current date, so an overdue task can
/// still be edited.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDeadline`] for an unparseable deadline
/// and the field errors of [`TaskDetails::new`] for empty text fields.
pub fn validate_update(
    description: &str,
    assignee: &str,
    deadline: &str,
) -> Result<TaskDetails, TaskDomainError> {
    let parsed = Deadline::parse_iso(deadline)?;
    TaskDetails::new(description, assignee, parsed)
}
