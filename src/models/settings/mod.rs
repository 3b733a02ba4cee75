// Settings module
// User defaults consumed by draft seeding and the front end

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Time seeded into a fresh draft when the input carries none.
    #[serde(default = "default_event_time")]
    pub default_event_time: String,
    /// 0 = Sunday, 1 = Monday.
    #[serde(default = "default_first_day")]
    pub first_day_of_week: u8,
}

fn default_event_time() -> String {
    "09:00".to_string()
}

fn default_first_day() -> u8 {
    1 // Monday
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_event_time: default_event_time(),
            first_day_of_week: default_first_day(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 6 {
            return Err("First day of week must be between 0 and 6".to_string());
        }

        let is_hhmm = self.default_event_time.len() == 5
            && self.default_event_time.as_bytes()[2] == b':'
            && chrono::NaiveTime::parse_from_str(&self.default_event_time, "%H:%M").is_ok();
        if !is_hhmm {
            return Err("Default event time must be in HH:MM format".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.default_event_time, "09:00");
        assert_eq!(settings.first_day_of_week, 1);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn rejects_malformed_default_time() {
        let settings = Settings {
            default_event_time: "9am".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_first_day() {
        let settings = Settings {
            first_day_of_week: 7,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }
}
