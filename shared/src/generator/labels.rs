//! Fixed time labels for the forecast sections

use chrono::{Duration, NaiveDate};

/// Clock-hour labels of the 24-hour curve
pub const HOUR_LABELS: [&str; 24] = [
    "12 AM", "1 AM", "2 AM", "3 AM", "4 AM", "5 AM", "6 AM", "7 AM", "8 AM", "9 AM", "10 AM",
    "11 AM", "12 PM", "1 PM", "2 PM", "3 PM", "4 PM", "5 PM", "6 PM", "7 PM", "8 PM", "9 PM",
    "10 PM", "11 PM",
];

pub const OUTLOOK_DAYS: usize = 7;
pub const RAINFALL_DAYS: usize = 30;

/// The date every forecast is generated "as of". Never the wall clock.
pub fn anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).expect("anchor date is a valid calendar date")
}

fn month_day(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// `(day, date)` pairs for the outlook, starting with "Today"
pub fn outlook_labels(anchor: NaiveDate) -> Vec<(String, String)> {
    (0..OUTLOOK_DAYS as i64)
        .map(|offset| {
            let date = anchor + Duration::days(offset);
            let day = if offset == 0 {
                "Today".to_string()
            } else {
                date.format("%a").to_string()
            };
            (day, month_day(date))
        })
        .collect()
}

/// Dates of the `RAINFALL_DAYS` days ending the day before `anchor`, oldest first
pub fn rainfall_labels(anchor: NaiveDate) -> Vec<String> {
    (1..=RAINFALL_DAYS as i64)
        .rev()
        .map(|back| month_day(anchor - Duration::days(back)))
        .collect()
}
