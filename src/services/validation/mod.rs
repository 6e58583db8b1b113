// Form validation rules
// Small, independent rules composed by the schedule form

use chrono::NaiveTime;
use thiserror::Error;

/// Format accepted for the form's time inputs.
const TIME_FORMAT: &str = "%H:%M";

/// A single failed validation rule.
///
/// All failures here are recoverable: the draft stays open so the user can
/// correct it and resubmit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The {field} field is required.")]
    RequiredFieldMissing { field: &'static str },

    #[error("The end hour must be greater than initial hour.")]
    TimeRange,

    /// Non-empty input that cannot be parsed as its field's type. The
    /// original form used native date/time inputs that made this state
    /// unreachable; free-form inputs need it spelled out.
    #[error("The {field} field must be a valid {expected}.")]
    InvalidFieldFormat {
        field: &'static str,
        expected: &'static str,
    },
}

/// Require a non-empty, non-whitespace value for `field`.
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::RequiredFieldMissing { field });
    }
    Ok(())
}

/// Cross-field check that the end time is strictly after the start time.
///
/// Both inputs are "HH:mm" times of day; no date is involved in the
/// comparison. Equal times are rejected. Empty or unparseable input passes
/// this rule: missing fields are the required-field rules' concern, and a
/// value that does not parse cannot be ordered against the other one.
pub fn validate_time_range(start: &str, end: &str) -> Result<(), ValidationError> {
    let (Ok(start), Ok(end)) = (
        NaiveTime::parse_from_str(start.trim(), TIME_FORMAT),
        NaiveTime::parse_from_str(end.trim(), TIME_FORMAT),
    ) else {
        return Ok(());
    };

    if start >= end {
        return Err(ValidationError::TimeRange);
    }

    Ok(())
}

/// Parse a form time input ("HH:mm").
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).ok()
}

/// Parse a form date input (ISO "YYYY-MM-DD").
pub fn parse_date(value: &str) -> Option<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
