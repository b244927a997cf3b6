//! Working-day checks.
//!
//! Both checks read the calendar day of the naive value itself: the weekday
//! and the holiday match agree on what "day" means because neither applies a
//! timezone.

use chrono::{Datelike, NaiveDateTime, Weekday};
use useful_ext_core::error::{CoreError, CoreResult};

const HOLIDAYS_PARAM: &str = "holidays";

/// True for Monday through Friday.
#[must_use]
pub fn is_working_day(value: NaiveDateTime) -> bool {
    !matches!(value.weekday(), Weekday::Sat | Weekday::Sun)
}

/// ## Summary
/// Weekday check that also rejects any date listed in `holidays`.
///
/// Holidays match on calendar date only; their time of day is ignored.
///
/// ## Errors
/// Returns [`CoreError::NullArgument`] if `holidays` is `None` and
/// [`CoreError::EmptyArgument`] if it has no elements. Both name the
/// `holidays` parameter.
pub fn is_working_day_with_holiday_checking(
    value: NaiveDateTime,
    holidays: Option<&[NaiveDateTime]>,
) -> CoreResult<bool> {
    let Some(holidays) = holidays else {
        tracing::debug!("Holiday collection is absent");
        return Err(CoreError::NullArgument {
            param: HOLIDAYS_PARAM,
        });
    };
    if holidays.is_empty() {
        tracing::debug!("Holiday collection is empty");
        return Err(CoreError::EmptyArgument {
            param: HOLIDAYS_PARAM,
        });
    }

    let date = value.date();
    let is_holiday = holidays.iter().any(|holiday| holiday.date() == date);
    tracing::trace!(%date, is_holiday, "Checked holiday collection");

    Ok(is_working_day(value) && !is_holiday)
}
