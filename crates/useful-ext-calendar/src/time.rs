//! Explicit time-of-day components.

use chrono::{NaiveTime, Timelike};
use useful_ext_core::error::{CoreError, CoreResult};

/// Time-of-day components used by the `*_with_time` helpers.
///
/// `Default` is midnight; unset components are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self::new(0, 0, 0);

    #[must_use]
    pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond: 0,
        }
    }

    #[must_use]
    pub const fn with_millisecond(self, millisecond: u32) -> Self {
        Self {
            millisecond,
            ..self
        }
    }

    /// ## Summary
    /// Validates the components and converts them to a [`NaiveTime`].
    ///
    /// ## Errors
    /// Returns [`CoreError::OutOfRange`] naming the first component outside
    /// hour `0..=23`, minute `0..=59`, second `0..=59` or millisecond `0..=999`.
    pub fn to_naive_time(self) -> CoreResult<NaiveTime> {
        check_range("hour", self.hour, 23)?;
        check_range("minute", self.minute, 59)?;
        check_range("second", self.second, 59)?;
        check_range("millisecond", self.millisecond, 999)?;

        NaiveTime::from_hms_milli_opt(self.hour, self.minute, self.second, self.millisecond)
            .ok_or_else(|| CoreError::InvalidArgument(format!("invalid time of day {self:?}")))
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
            // Leap-second representation folds into the last millisecond.
            millisecond: (time.nanosecond() / 1_000_000).min(999),
        }
    }
}

fn check_range(param: &'static str, value: u32, max: u32) -> CoreResult<()> {
    if value > max {
        tracing::debug!(param, value, max, "Time component out of range");
        return Err(CoreError::OutOfRange { param, value });
    }
    Ok(())
}
