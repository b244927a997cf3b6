//! Month boundary helpers.
//!
//! Day counts come from chrono's date validation, so leap years follow the
//! proleptic Gregorian calendar.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use useful_ext_core::error::CoreResult;

use crate::time::TimeOfDay;

/// Returns the number of days in `month` of `year`, or `None` if the month
/// does not exist in the representable range.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    [31, 30, 29, 28]
        .into_iter()
        .find(|&day| NaiveDate::from_ymd_opt(year, month, day).is_some())
}

/// Moves `value` to day 1 of its month, keeping its time of day.
#[must_use]
pub fn first_day_of_month(value: NaiveDateTime) -> NaiveDateTime {
    value - Days::new(u64::from(value.day0()))
}

/// Moves `value` to the last day of its month, keeping its time of day.
#[must_use]
pub fn last_day_of_month(value: NaiveDateTime) -> NaiveDateTime {
    // A valid date always lies in a month with a known length.
    let last = days_in_month(value.year(), value.month()).unwrap_or(value.day());
    value + Days::new(u64::from(last - value.day()))
}

/// ## Summary
/// First day of the month of `value` at the given time of day.
///
/// ## Errors
/// Returns `CoreError::OutOfRange` if a component of `time` is out of range.
pub fn first_day_of_month_with_time(
    value: NaiveDateTime,
    time: TimeOfDay,
) -> CoreResult<NaiveDateTime> {
    Ok(first_day_of_month_at(value, time.to_naive_time()?))
}

/// ## Summary
/// Last day of the month of `value` at the given time of day.
///
/// ## Errors
/// Returns `CoreError::OutOfRange` if a component of `time` is out of range.
pub fn last_day_of_month_with_time(
    value: NaiveDateTime,
    time: TimeOfDay,
) -> CoreResult<NaiveDateTime> {
    Ok(last_day_of_month_at(value, time.to_naive_time()?))
}

#[must_use]
pub fn first_day_of_month_at(value: NaiveDateTime, time: NaiveTime) -> NaiveDateTime {
    first_day_of_month(value).date().and_time(time)
}

#[must_use]
pub fn last_day_of_month_at(value: NaiveDateTime, time: NaiveTime) -> NaiveDateTime {
    last_day_of_month(value).date().and_time(time)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_milli_opt(h, min, s, ms)
            .unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2018, 4), Some(30));
        assert_eq!(days_in_month(2018, 12), Some(31));
        assert_eq!(days_in_month(2020, 2), Some(29));
        assert_eq!(days_in_month(2021, 2), Some(28));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(2021, 13), None);
    }

    #[test]
    fn test_first_day_keeps_time() {
        let value = at(2018, 4, 23, 15, 15, 15, 15);
        assert_eq!(first_day_of_month(value), at(2018, 4, 1, 15, 15, 15, 15));
    }

    #[test]
    fn test_first_day_on_first_day() {
        let value = at(2018, 4, 1, 0, 0, 0, 0);
        assert_eq!(first_day_of_month(value), value);
    }

    #[test]
    fn test_last_day_keeps_time() {
        let value = at(2018, 4, 23, 15, 15, 15, 15);
        assert_eq!(last_day_of_month(value), at(2018, 4, 30, 15, 15, 15, 15));
    }

    #[test]
    fn test_last_day_leap_years() {
        assert_eq!(last_day_of_month(at(2020, 2, 3, 1, 2, 3, 4)).day(), 29);
        assert_eq!(last_day_of_month(at(2021, 2, 3, 1, 2, 3, 4)).day(), 28);
        assert_eq!(last_day_of_month(at(2021, 12, 31, 0, 0, 0, 0)).day(), 31);
    }

    #[test]
    fn test_with_time_defaults_to_midnight() {
        let value = at(2018, 4, 23, 15, 15, 15, 15);

        assert_eq!(
            first_day_of_month_with_time(value, TimeOfDay::default()),
            Ok(at(2018, 4, 1, 0, 0, 0, 0))
        );
        assert_eq!(
            last_day_of_month_with_time(value, TimeOfDay::default()),
            Ok(at(2018, 4, 30, 0, 0, 0, 0))
        );
    }

    #[test]
    fn test_with_given_time() {
        let value = at(2018, 4, 23, 15, 15, 15, 15);
        let time = TimeOfDay::new(12, 12, 12).with_millisecond(12);

        assert_eq!(
            first_day_of_month_with_time(value, time),
            Ok(at(2018, 4, 1, 12, 12, 12, 12))
        );
        assert_eq!(
            last_day_of_month_with_time(value, time),
            Ok(at(2018, 4, 30, 12, 12, 12, 12))
        );
    }

    #[test]
    fn test_with_invalid_time() {
        let value = at(2018, 4, 23, 15, 15, 15, 15);
        assert!(
            first_day_of_month_with_time(value, TimeOfDay::new(25, 0, 0)).is_err()
        );
        assert!(
            last_day_of_month_with_time(value, TimeOfDay::new(0, 0, 60)).is_err()
        );
    }
}
