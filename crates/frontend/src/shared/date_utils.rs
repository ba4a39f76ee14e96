/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{Datelike, NaiveDateTime, Timelike};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Short US date, as the admin tables show it
/// Example: 2023-04-07 14:30 -> "4/7/2023"
pub fn format_date(value: &NaiveDateTime) -> String {
    format!("{}/{}/{}", value.month(), value.day(), value.year())
}

/// Date with a 12-hour clock
/// Example: 2023-04-07 14:30 -> "Apr 7, 2023, 2:30 PM"
pub fn format_datetime(value: &NaiveDateTime) -> String {
    let (is_pm, hour) = value.hour12();
    format!(
        "{} {}, {}, {}:{:02} {}",
        MONTHS[value.month0() as usize],
        value.day(),
        value.year(),
        hour,
        value.minute(),
        if is_pm { "PM" } else { "AM" }
    )
}

/// Current calendar year in the browser's clock
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&at(2023, 4, 7, 14, 30)), "4/7/2023");
        assert_eq!(format_date(&at(2023, 12, 31, 0, 0)), "12/31/2023");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime(&at(2023, 4, 7, 14, 30)),
            "Apr 7, 2023, 2:30 PM"
        );
        assert_eq!(
            format_datetime(&at(2023, 4, 4, 9, 0)),
            "Apr 4, 2023, 9:00 AM"
        );
    }

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(format_datetime(&at(2023, 1, 5, 0, 5)), "Jan 5, 2023, 12:05 AM");
        assert_eq!(format_datetime(&at(2023, 1, 5, 12, 0)), "Jan 5, 2023, 12:00 PM");
    }
}
