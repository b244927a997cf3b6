//! Inclusive day-by-day ranges.
//!
//! A [`DayRange`] stores its bounds only and can be iterated any number of
//! times. Every element keeps the start's time of day.

use std::iter::FusedIterator;

use chrono::{Days, NaiveDateTime};

/// Inclusive sequence of values one calendar day apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayRange {
    /// First and last element; `None` when the range is empty.
    bounds: Option<(NaiveDateTime, NaiveDateTime)>,
}

impl DayRange {
    /// ## Summary
    /// Range from `start` up to and including the last day-step not after `end`.
    ///
    /// Empty when `end < start`; a single element when both are equal.
    #[must_use]
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        if end < start {
            tracing::trace!(%start, %end, "End precedes start, range is empty");
            return Self::empty();
        }

        let steps = u64::try_from((end - start).num_days()).unwrap_or(0);
        let last = start.checked_add_days(Days::new(steps)).unwrap_or(start);

        Self {
            bounds: Some((start, last)),
        }
    }

    /// ## Summary
    /// Range from `start` through `start + num_days` days.
    ///
    /// Empty for a negative `num_days`; saturates at the largest representable
    /// date instead of overflowing.
    #[must_use]
    pub fn for_days(start: NaiveDateTime, num_days: i64) -> Self {
        let Ok(steps) = u64::try_from(num_days) else {
            tracing::trace!(%start, num_days, "Negative day count, range is empty");
            return Self::empty();
        };

        let end = start
            .checked_add_days(Days::new(steps))
            .unwrap_or(NaiveDateTime::MAX);
        Self::new(start, end)
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self { bounds: None }
    }

    #[must_use]
    pub fn first(&self) -> Option<NaiveDateTime> {
        self.bounds.map(|(first, _)| first)
    }

    #[must_use]
    pub fn last(&self) -> Option<NaiveDateTime> {
        self.bounds.map(|(_, last)| last)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bounds.map_or(0, |(first, last)| span(first, last))
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    #[must_use]
    pub const fn iter(&self) -> DayByDay {
        DayByDay {
            remaining: self.bounds,
        }
    }
}

impl IntoIterator for DayRange {
    type Item = NaiveDateTime;
    type IntoIter = DayByDay;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &DayRange {
    type Item = NaiveDateTime;
    type IntoIter = DayByDay;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`DayRange`].
#[derive(Debug, Clone)]
pub struct DayByDay {
    remaining: Option<(NaiveDateTime, NaiveDateTime)>,
}

impl Iterator for DayByDay {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        let (front, back) = self.remaining?;
        self.remaining = front
            .checked_add_days(Days::new(1))
            .filter(|next| *next <= back)
            .map(|next| (next, back));
        Some(front)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.map_or(0, |(front, back)| span(front, back));
        (len, Some(len))
    }
}

impl DoubleEndedIterator for DayByDay {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (front, back) = self.remaining?;
        self.remaining = back
            .checked_sub_days(Days::new(1))
            .filter(|prev| *prev >= front)
            .map(|prev| (front, prev));
        Some(back)
    }
}

impl ExactSizeIterator for DayByDay {}

impl FusedIterator for DayByDay {}

/// Element count between two aligned bounds, inclusive.
fn span(first: NaiveDateTime, last: NaiveDateTime) -> usize {
    usize::try_from((last - first).num_days())
        .map_or(usize::MAX, |steps| steps.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(y: i32, m: u32, d: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
        at(y, m, d, 0, 0)
    }

    #[test]
    fn test_end_before_start_is_empty() {
        let range = DayRange::new(day(2018, 4, 30), day(2017, 4, 29));

        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert_eq!(range.iter().next(), None);
        assert_eq!(range.first(), None);
    }

    #[test]
    fn test_equal_bounds_single_element() {
        let range = DayRange::new(day(2018, 4, 30), day(2018, 4, 30));

        assert_eq!(range.iter().collect::<Vec<_>>(), vec![day(2018, 4, 30)]);
        assert_eq!(range.len(), 1);
    }

    #[test]
    fn test_inclusive_week() {
        let range = DayRange::new(day(2018, 4, 1), day(2018, 4, 7));
        let expected: Vec<_> = (1..=7).map(|d| day(2018, 4, d)).collect();

        assert_eq!(range.iter().collect::<Vec<_>>(), expected);
        assert_eq!(range.len(), 7);
    }

    #[test]
    fn test_crosses_month_and_leap_day() {
        let range = DayRange::new(day(2020, 2, 27), day(2020, 3, 2));
        let days: Vec<_> = range.into_iter().collect();

        assert_eq!(
            days,
            vec![
                day(2020, 2, 27),
                day(2020, 2, 28),
                day(2020, 2, 29),
                day(2020, 3, 1),
                day(2020, 3, 2),
            ]
        );
    }

    #[test]
    fn test_keeps_start_time_of_day() {
        let start = at(2018, 5, 1, 18, 45);
        let end = at(2018, 5, 3, 9, 0);
        let days: Vec<_> = DayRange::new(start, end).into_iter().collect();

        // 2018-05-03 18:45 would pass the end bound.
        assert_eq!(days, vec![start, at(2018, 5, 2, 18, 45)]);
    }

    #[test]
    fn test_same_day_earlier_end_is_empty() {
        let start = at(2018, 5, 1, 10, 0);
        let end = at(2018, 5, 1, 9, 0);

        assert!(DayRange::new(start, end).is_empty());
    }

    #[test]
    fn test_restartable() {
        let range = DayRange::for_days(day(2018, 5, 2), 3);

        let first_pass: Vec<_> = range.iter().collect();
        let second_pass: Vec<_> = (&range).into_iter().collect();

        assert_eq!(first_pass, second_pass);
        assert_eq!(first_pass.len(), 4);
    }

    #[test]
    fn test_for_days_counts() {
        let start = day(2018, 5, 2);

        assert!(DayRange::for_days(start, -7).is_empty());
        assert_eq!(
            DayRange::for_days(start, 0).iter().collect::<Vec<_>>(),
            vec![start]
        );

        let week = DayRange::for_days(start, 7);
        assert_eq!(week.len(), 8);
        assert_eq!(week.last(), Some(day(2018, 5, 9)));
    }

    #[test]
    fn test_for_days_saturates() {
        let start = NaiveDateTime::MAX - Days::new(2);
        let range = DayRange::for_days(start, i64::MAX);

        assert_eq!(range.len(), 3);
        assert_eq!(range.iter().last(), Some(NaiveDateTime::MAX));
    }

    #[test]
    fn test_double_ended_and_exact_size() {
        let mut iter = DayRange::new(day(2018, 4, 1), day(2018, 4, 4)).iter();

        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next_back(), Some(day(2018, 4, 4)));
        assert_eq!(iter.next(), Some(day(2018, 4, 1)));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next_back(), Some(day(2018, 4, 3)));
        assert_eq!(iter.next_back(), Some(day(2018, 4, 2)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }
}
