//! Monday-aligned week bucketing.

use chrono::{Datelike, Duration, NaiveDate};

/// The Monday-aligned start of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// True iff `date` is a Monday, i.e. a week-start bucket key.
pub fn is_week_start(date: NaiveDate) -> bool {
    date.weekday().num_days_from_monday() == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_week_start_alignment() {
        // 2025-06-02 is a Monday.
        let monday = d(2025, 6, 2);
        assert_eq!(week_start(monday), monday);
        assert_eq!(week_start(d(2025, 6, 3)), monday); // Tuesday
        assert_eq!(week_start(d(2025, 6, 8)), monday); // Sunday
        assert_eq!(week_start(d(2025, 6, 9)), d(2025, 6, 9)); // next Monday
    }

    #[test]
    fn test_is_week_start() {
        assert!(is_week_start(d(2025, 6, 2)));
        assert!(!is_week_start(d(2025, 6, 4)));
    }
}
