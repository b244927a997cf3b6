//! Calendar helpers over [`chrono::NaiveDateTime`].
//!
//! ## Summary
//! Month boundaries, time-of-day replacement, inclusive day-by-day ranges and
//! working-day checks. Every helper is a pure function of its arguments; the
//! [`DateTimeExt`] trait exposes them as methods.
//!
//! ```
//! use chrono::NaiveDate;
//! use useful_ext_calendar::DateTimeExt;
//!
//! let date = NaiveDate::from_ymd_opt(2020, 2, 10)
//!     .and_then(|d| d.and_hms_opt(8, 30, 0))
//!     .ok_or("invalid date")?;
//!
//! assert_eq!(date.last_day_of_month().to_string(), "2020-02-29 08:30:00");
//! assert_eq!(date.iterate_day_by_day_for(7).into_iter().count(), 8);
//! # Ok::<(), &'static str>(())
//! ```

mod ext;
pub mod month;
pub mod range;
pub mod time;
pub mod working_day;

pub use ext::DateTimeExt;
pub use range::{DayByDay, DayRange};
pub use time::TimeOfDay;
pub use useful_ext_core::error::{CoreError, CoreResult};
