//! Inclusive calendar-day ranges.
//!
//! This module provides the [`DateRange`] type used to describe the days a
//! leave request covers, and the lazy [`Days`] iterator over those days.

use std::iter::FusedIterator;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{LeaveError, LeaveResult};

/// An inclusive span of calendar days.
///
/// A `DateRange` always satisfies `start <= end`; the only way to build one
/// is through [`DateRange::new`] (or [`DateRange::single`]), which rejects
/// reversed ranges.
///
/// # Example
///
/// ```
/// use leave_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
/// ).unwrap();
///
/// assert_eq!(range.day_count(), 3);
/// assert_eq!(range.days().count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range from `start` to `end`, both inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`LeaveError::InvalidRange`] if `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> LeaveResult<Self> {
        if end < start {
            return Err(LeaveError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range covering exactly one day.
    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// Returns the first day of the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the range.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns the number of days covered, counting both ends.
    ///
    /// Computed from the endpoints; no days are generated.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::models::DateRange;
    /// use chrono::NaiveDate;
    ///
    /// // February 2024 has 29 days, so this spans 34 days.
    /// let range = DateRange::new(
    ///     NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
    /// ).unwrap();
    /// assert_eq!(range.day_count(), 34);
    /// ```
    pub fn day_count(&self) -> u32 {
        (self.end.signed_duration_since(self.start).num_days() + 1) as u32
    }

    /// Returns an iterator over every day in the range, in order.
    ///
    /// Each call starts a fresh iteration, so a range can be walked any
    /// number of times.
    pub fn days(&self) -> Days {
        Days {
            next: Some(self.start),
            end: self.end,
        }
    }

    /// Checks whether `day` falls inside the range (inclusive).
    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }

    /// Checks whether the two ranges share at least one day.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns the days both ranges cover, if any.
    pub fn intersection(&self, other: &DateRange) -> Option<DateRange> {
        if !self.overlaps(other) {
            return None;
        }
        Some(DateRange {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }
}

impl IntoIterator for &DateRange {
    type Item = NaiveDate;
    type IntoIter = Days;

    fn into_iter(self) -> Self::IntoIter {
        self.days()
    }
}

/// Lazy iterator over the days of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for Days {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.succ_opt().filter(|day| *day <= self.end);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(day) => (self.end.signed_duration_since(day).num_days() + 1) as usize,
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Days {}

impl FusedIterator for Days {}
