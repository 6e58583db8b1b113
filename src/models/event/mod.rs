// Event module
// Schedule event model held in the presenter's in-memory list

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A committed schedule event.
///
/// Events are timed within a single day: `start_time` must be strictly
/// before `end_time`. They live in the presenter's in-memory list for the
/// lifetime of the widget; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub description: Option<String>,
}

impl ScheduleEvent {
    /// Create a new event with the required fields.
    ///
    /// # Examples
    /// ```
    /// use rust_scheduler::models::event::ScheduleEvent;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let event = ScheduleEvent::new(
    ///     "Team Meeting",
    ///     NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
    ///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    ///     NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
    /// )
    /// .unwrap();
    /// ```
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Self, String> {
        let event = Self {
            title: title.into(),
            date,
            start_time,
            end_time,
            description: None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> ScheduleEventBuilder {
        ScheduleEventBuilder::new()
    }

    /// Validate the event invariants.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        if self.end_time <= self.start_time {
            return Err("Event end time must be after start time".to_string());
        }

        Ok(())
    }

    /// Get the duration of the event
    pub fn duration(&self) -> chrono::Duration {
        self.end_time - self.start_time
    }
}

/// Builder for creating events with optional fields
pub struct ScheduleEventBuilder {
    title: Option<String>,
    date: Option<NaiveDate>,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
    description: Option<String>,
}

impl ScheduleEventBuilder {
    pub fn new() -> Self {
        Self {
            title: None,
            date: None,
            start_time: None,
            end_time: None,
            description: None,
        }
    }

    /// Set the event title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the event date
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the start time
    pub fn start_time(mut self, start_time: NaiveTime) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Set the end time
    pub fn end_time(mut self, end_time: NaiveTime) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Set the event description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build the event
    pub fn build(self) -> Result<ScheduleEvent, String> {
        let title = self.title.ok_or("Event title is required")?;
        let date = self.date.ok_or("Event date is required")?;
        let start_time = self.start_time.ok_or("Event start time is required")?;
        let end_time = self.end_time.ok_or("Event end time is required")?;

        let event = ScheduleEvent {
            title,
            date,
            start_time,
            end_time,
            description: self.description,
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for ScheduleEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
    }

    fn sample_start() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 0, 0).unwrap()
    }

    fn sample_end() -> NaiveTime {
        NaiveTime::from_hms_opt(10, 0, 0).unwrap()
    }

    #[test]
    fn test_new_event_success() {
        let result = ScheduleEvent::new("Meeting", sample_date(), sample_start(), sample_end());

        assert!(result.is_ok());
        let event = result.unwrap();
        assert_eq!(event.title, "Meeting");
        assert_eq!(event.date, sample_date());
        assert_eq!(event.start_time, sample_start());
        assert_eq!(event.end_time, sample_end());
        assert!(event.description.is_none());
    }

    #[test]
    fn test_new_event_empty_title() {
        let result = ScheduleEvent::new("", sample_date(), sample_start(), sample_end());
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Event title cannot be empty");
    }

    #[test]
    fn test_new_event_whitespace_title() {
        let result = ScheduleEvent::new("   ", sample_date(), sample_start(), sample_end());
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Event title cannot be empty");
    }

    #[test]
    fn test_new_event_invalid_times() {
        let result = ScheduleEvent::new("Meeting", sample_date(), sample_end(), sample_start());

        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err(),
            "Event end time must be after start time"
        );
    }

    #[test]
    fn test_new_event_equal_times() {
        let result = ScheduleEvent::new("Meeting", sample_date(), sample_start(), sample_start());
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_basic() {
        let result = ScheduleEvent::builder()
            .title("Team Standup")
            .date(sample_date())
            .start_time(sample_start())
            .end_time(sample_end())
            .build();

        assert!(result.is_ok());
        let event = result.unwrap();
        assert_eq!(event.title, "Team Standup");
        assert_eq!(event.start_time, sample_start());
        assert_eq!(event.end_time, sample_end());
    }

    #[test]
    fn test_builder_with_description() {
        let event = ScheduleEvent::builder()
            .title("Conference")
            .date(sample_date())
            .start_time(sample_start())
            .end_time(sample_end())
            .description("Annual tech conference")
            .build()
            .unwrap();

        assert_eq!(
            event.description,
            Some("Annual tech conference".to_string())
        );
    }

    #[test]
    fn test_builder_missing_title() {
        let result = ScheduleEvent::builder()
            .date(sample_date())
            .start_time(sample_start())
            .end_time(sample_end())
            .build();

        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Event title is required");
    }

    #[test]
    fn test_builder_missing_date() {
        let result = ScheduleEvent::builder()
            .title("Meeting")
            .start_time(sample_start())
            .end_time(sample_end())
            .build();

        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Event date is required");
    }

    #[test]
    fn test_duration() {
        let event = ScheduleEvent::new("Meeting", sample_date(), sample_start(), sample_end())
            .unwrap();

        assert_eq!(event.duration(), chrono::Duration::hours(1));
    }
}
