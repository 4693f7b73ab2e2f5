use chrono::{DateTime, Datelike, Local, Timelike};
use serde::Serialize;

/// Coarse time-of-day buckets used to flavor recommendations
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    LateNight,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::LateNight => "latenight",
        }
    }
}

/// Meteorological season
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

/// Viewing-time context surfaced in responses and consumed by the
/// enrichment generator. Pure: derived entirely from a timestamp.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeContext {
    pub time_of_day: TimeOfDay,
    pub day_of_week: String,
    pub season: Season,
}

impl TimeContext {
    /// Context for the current local time
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    /// Derives the context from an explicit timestamp
    pub fn from_datetime<Tz: chrono::TimeZone>(datetime: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let time_of_day = match datetime.hour() {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=21 => TimeOfDay::Evening,
            _ => TimeOfDay::LateNight,
        };

        let season = match datetime.month() {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        };

        Self {
            time_of_day,
            day_of_week: datetime.format("%A").to_string(),
            season,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, month: u32) -> TimeContext {
        let datetime = chrono::Utc
            .with_ymd_and_hms(2024, month, 14, hour, 30, 0)
            .unwrap();
        TimeContext::from_datetime(&datetime)
    }

    #[test]
    fn test_time_of_day_buckets() {
        assert_eq!(at(5, 6).time_of_day, TimeOfDay::Morning);
        assert_eq!(at(11, 6).time_of_day, TimeOfDay::Morning);
        assert_eq!(at(12, 6).time_of_day, TimeOfDay::Afternoon);
        assert_eq!(at(16, 6).time_of_day, TimeOfDay::Afternoon);
        assert_eq!(at(17, 6).time_of_day, TimeOfDay::Evening);
        assert_eq!(at(21, 6).time_of_day, TimeOfDay::Evening);
        assert_eq!(at(22, 6).time_of_day, TimeOfDay::LateNight);
        assert_eq!(at(3, 6).time_of_day, TimeOfDay::LateNight);
    }

    #[test]
    fn test_seasons() {
        assert_eq!(at(12, 3).season, Season::Spring);
        assert_eq!(at(12, 7).season, Season::Summer);
        assert_eq!(at(12, 10).season, Season::Fall);
        assert_eq!(at(12, 12).season, Season::Winter);
        assert_eq!(at(12, 1).season, Season::Winter);
    }

    #[test]
    fn test_day_of_week_name() {
        // 2024-06-14 was a Friday
        assert_eq!(at(12, 6).day_of_week, "Friday");
    }

    #[test]
    fn test_serializes_camel_case() {
        let context = at(19, 6);
        let value = serde_json::to_value(&context).unwrap();
        assert_eq!(value["timeOfDay"], "evening");
        assert_eq!(value["dayOfWeek"], "Friday");
        assert_eq!(value["season"], "summer");
    }

    #[test]
    fn test_latenight_serializes_as_single_word() {
        let value = serde_json::to_value(TimeOfDay::LateNight).unwrap();
        assert_eq!(value, "latenight");
    }
}
