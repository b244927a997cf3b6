use chrono::{NaiveDateTime, NaiveTime};
use useful_ext_core::error::CoreResult;

use crate::month;
use crate::range::DayRange;
use crate::time::TimeOfDay;
use crate::working_day;

/// Method syntax for the calendar helpers.
pub trait DateTimeExt: Sized {
    /// Day 1 of the same month, time of day unchanged.
    #[must_use]
    fn first_day_of_month(self) -> Self;

    /// ## Summary
    /// Day 1 of the same month at `time`.
    ///
    /// ## Errors
    /// Returns `CoreError::OutOfRange` if a component of `time` is out of range.
    fn first_day_of_month_with_time(self, time: TimeOfDay) -> CoreResult<Self>;

    /// Day 1 of the same month at an already valid `time`.
    #[must_use]
    fn first_day_of_month_at(self, time: NaiveTime) -> Self;

    /// Last day of the same month, time of day unchanged.
    #[must_use]
    fn last_day_of_month(self) -> Self;

    /// ## Summary
    /// Last day of the same month at `time`.
    ///
    /// ## Errors
    /// Returns `CoreError::OutOfRange` if a component of `time` is out of range.
    fn last_day_of_month_with_time(self, time: TimeOfDay) -> CoreResult<Self>;

    /// Last day of the same month at an already valid `time`.
    #[must_use]
    fn last_day_of_month_at(self, time: NaiveTime) -> Self;

    /// ## Summary
    /// Same calendar date at `time`.
    ///
    /// ## Errors
    /// Returns `CoreError::OutOfRange` if a component of `time` is out of range.
    fn with_time(self, time: TimeOfDay) -> CoreResult<Self>;

    /// Same calendar date at an already valid `time`.
    #[must_use]
    fn with_time_at(self, time: NaiveTime) -> Self;

    /// Inclusive range from `self` to `end`, see [`DayRange::new`].
    #[must_use]
    fn iterate_day_by_day_to(self, end: Self) -> DayRange;

    /// Inclusive range from `self` through `self + num_days` days, see [`DayRange::for_days`].
    #[must_use]
    fn iterate_day_by_day_for(self, num_days: i64) -> DayRange;

    /// True for Monday through Friday, see [`working_day::is_working_day`].
    #[must_use]
    fn is_working_day(self) -> bool;

    /// ## Summary
    /// See [`working_day::is_working_day_with_holiday_checking`].
    ///
    /// ## Errors
    /// Returns an error if `holidays` is absent or empty.
    fn is_working_day_with_holiday_checking(self, holidays: Option<&[Self]>) -> CoreResult<bool>;
}

impl DateTimeExt for NaiveDateTime {
    fn first_day_of_month(self) -> Self {
        month::first_day_of_month(self)
    }

    fn first_day_of_month_with_time(self, time: TimeOfDay) -> CoreResult<Self> {
        month::first_day_of_month_with_time(self, time)
    }

    fn first_day_of_month_at(self, time: NaiveTime) -> Self {
        month::first_day_of_month_at(self, time)
    }

    fn last_day_of_month(self) -> Self {
        month::last_day_of_month(self)
    }

    fn last_day_of_month_with_time(self, time: TimeOfDay) -> CoreResult<Self> {
        month::last_day_of_month_with_time(self, time)
    }

    fn last_day_of_month_at(self, time: NaiveTime) -> Self {
        month::last_day_of_month_at(self, time)
    }

    fn with_time(self, time: TimeOfDay) -> CoreResult<Self> {
        Ok(self.with_time_at(time.to_naive_time()?))
    }

    fn with_time_at(self, time: NaiveTime) -> Self {
        self.date().and_time(time)
    }

    fn iterate_day_by_day_to(self, end: Self) -> DayRange {
        DayRange::new(self, end)
    }

    fn iterate_day_by_day_for(self, num_days: i64) -> DayRange {
        DayRange::for_days(self, num_days)
    }

    fn is_working_day(self) -> bool {
        working_day::is_working_day(self)
    }

    fn is_working_day_with_holiday_checking(self, holidays: Option<&[Self]>) -> CoreResult<bool> {
        working_day::is_working_day_with_holiday_checking(self, holidays)
    }
}
