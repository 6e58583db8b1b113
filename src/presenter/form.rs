// Schedule form state
// Transient draft of an event while the creation dialog is open

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::models::event::ScheduleEvent;
use crate::models::settings::Settings;
use crate::services::validation::{
    parse_date, parse_time, require, validate_time_range, ValidationError,
};

/// Pre-filled values handed in from outside the widget, as when it is
/// opened through a link carrying `{date, initTime}` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogPrefill {
    pub date: NaiveDate,
    pub init_time: NaiveTime,
}

/// The in-progress draft behind the creation dialog.
///
/// Fields hold the raw text of the form inputs; nothing is parsed until
/// validation. The draft exists only while the dialog is open and is
/// discarded on submit or cancel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleFormState {
    pub title: String,
    /// ISO date input, "YYYY-MM-DD".
    pub date: String,
    /// Start time input, "HH:mm".
    pub init_time: String,
    /// End time input, "HH:mm".
    pub end_time: String,
    pub description: String,
    /// Messages from the last failed submit, for the dialog to display.
    pub error_messages: Vec<String>,
}

impl ScheduleFormState {
    /// Fresh draft with start and end times pre-filled from settings.
    pub fn new(settings: &Settings) -> Self {
        let start = parse_time(&settings.default_event_start_time)
            .unwrap_or_else(|| NaiveTime::from_hms_opt(9, 0, 0).unwrap());

        Self::with_times(String::new(), start, settings)
    }

    /// Draft pre-filled from external `{date, initTime}` parameters.
    pub fn with_prefill(prefill: DialogPrefill, settings: &Settings) -> Self {
        Self::with_times(
            prefill.date.format("%Y-%m-%d").to_string(),
            prefill.init_time,
            settings,
        )
    }

    fn with_times(date: String, start: NaiveTime, settings: &Settings) -> Self {
        // NaiveTime arithmetic wraps at midnight, matching the old behavior
        // of adding the duration to a datetime and keeping the time part.
        let end = start + Duration::minutes(i64::from(settings.default_event_duration));

        Self {
            title: String::new(),
            date,
            init_time: start.format("%H:%M").to_string(),
            end_time: end.format("%H:%M").to_string(),
            description: String::new(),
            error_messages: Vec::new(),
        }
    }

    /// Run every rule over the draft, collecting all failures.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let rules = [
            require("title", &self.title),
            require("date", &self.date),
            require("start time", &self.init_time),
            require("end time", &self.end_time),
            validate_time_range(&self.init_time, &self.end_time),
        ];
        errors.extend(rules.into_iter().filter_map(Result::err));

        // Non-empty inputs must also parse before the draft can commit
        if !self.date.trim().is_empty() && parse_date(&self.date).is_none() {
            errors.push(ValidationError::InvalidFieldFormat {
                field: "date",
                expected: "YYYY-MM-DD date",
            });
        }
        for (field, value) in [("start time", &self.init_time), ("end time", &self.end_time)] {
            if !value.trim().is_empty() && parse_time(value).is_none() {
                errors.push(ValidationError::InvalidFieldFormat {
                    field,
                    expected: "HH:mm time",
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Parse the validated draft into a committed event.
    pub fn to_event(&self) -> Result<ScheduleEvent, Vec<ValidationError>> {
        self.validate()?;

        // validate() guarantees these parse
        let (Some(date), Some(start_time), Some(end_time)) = (
            parse_date(&self.date),
            parse_time(&self.init_time),
            parse_time(&self.end_time),
        ) else {
            return Err(vec![ValidationError::InvalidFieldFormat {
                field: "date",
                expected: "YYYY-MM-DD date",
            }]);
        };

        let mut builder = ScheduleEvent::builder()
            .title(self.title.trim())
            .date(date)
            .start_time(start_time)
            .end_time(end_time);

        let description = self.description.trim();
        if !description.is_empty() {
            builder = builder.description(description);
        }

        // The rules above subsume the model's own invariants
        builder.build().map_err(|_| vec![ValidationError::TimeRange])
    }
}
