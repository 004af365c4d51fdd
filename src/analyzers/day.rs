use chrono::Weekday;
use serde::Serialize;
use std::fmt;

/// Days that classify as [`DayType::Weekend`].
pub const WEEKEND: [&str; 2] = ["Saturday", "Sunday"];

/// Monday..Sunday, the order used by day-indexed charts and day numbers.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum DayType {
    Weekday,
    Weekend,
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayType::Weekday => f.write_str("Weekday"),
            DayType::Weekend => f.write_str("Weekend"),
        }
    }
}

/// Classifies a cleaned day name. Anything outside [`WEEKEND`] is a weekday.
pub fn day_type_of(day: &str) -> DayType {
    if WEEKEND.contains(&day) {
        DayType::Weekend
    } else {
        DayType::Weekday
    }
}

/// Capitalized English name of `day`, as it appears in a cleaned table.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parses a cleaned day name. Only exact capitalized names are recognized.
pub fn parse_day(name: &str) -> Option<Weekday> {
    WEEK.iter().copied().find(|d| day_name(*d) == name)
}

/// Monday = 1 .. Sunday = 7; `None` for unrecognized names.
pub fn day_number(name: &str) -> Option<u32> {
    parse_day(name).map(|d| d.number_from_monday())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_type_of() {
        assert_eq!(day_type_of("Saturday"), DayType::Weekend);
        assert_eq!(day_type_of("Sunday"), DayType::Weekend);
        assert_eq!(day_type_of("Monday"), DayType::Weekday);
        assert_eq!(day_type_of("Friday"), DayType::Weekday);
        assert_eq!(day_type_of("Someday"), DayType::Weekday);
    }

    #[test]
    fn test_day_numbers() {
        assert_eq!(day_number("Monday"), Some(1));
        assert_eq!(day_number("Thursday"), Some(4));
        assert_eq!(day_number("Sunday"), Some(7));
        assert_eq!(day_number("monday"), None);
        assert_eq!(day_number("Funday"), None);
    }

    #[test]
    fn test_day_names_round_trip_week_order() {
        let names: Vec<_> = WEEK.iter().map(|d| day_name(*d)).collect();
        assert_eq!(
            names,
            vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
        );
    }
}
