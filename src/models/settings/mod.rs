// Settings model
// Defaults consumed when pre-filling the event creation form

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Start time pre-filled into a fresh draft, "HH:mm".
    pub default_event_start_time: String,
    /// Minutes added to the start time to pre-fill the end time.
    pub default_event_duration: u32,
    pub notifications_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_event_start_time: "09:00".to_string(),
            default_event_duration: 60,
            notifications_enabled: true,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if chrono::NaiveTime::parse_from_str(&self.default_event_start_time, "%H:%M").is_err() {
            return Err(format!(
                "Default event start time must be HH:mm, got '{}'",
                self.default_event_start_time
            ));
        }

        if self.default_event_duration == 0 {
            return Err("Default event duration must be at least 1 minute".to_string());
        }

        if self.default_event_duration > 24 * 60 {
            return Err("Default event duration cannot exceed 24 hours".to_string());
        }

        Ok(())
    }
}
