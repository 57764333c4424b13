//! Calendar and date-range arithmetic.
//!
//! All day math is UTC; the canonical serialized day is `YYYY-MM-DD`.
//! Stay/block intervals are half-open `[start, end)` — a checkout day frees
//! the room — while requested date ranges and rate-plan validity windows are
//! inclusive on both ends.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Inclusive sequence of days from `from` to `to`.
///
/// Empty when `from > to`.
pub fn days_inclusive(from: NaiveDate, to: NaiveDate) -> DaySpan {
    DaySpan {
        next: if from <= to { Some(from) } else { None },
        last: to,
    }
}

/// Iterator over an inclusive day range.
#[derive(Debug, Clone)]
pub struct DaySpan {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl Iterator for DaySpan {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = if current < self.last {
            current.succ_opt()
        } else {
            None
        };
        Some(current)
    }
}

/// Half-open interval test: `start <= day < end`.
///
/// A zero-length interval (`start == end`) covers no day.
pub fn interval_covers(start: NaiveDate, end: NaiveDate, day: NaiveDate) -> bool {
    start <= day && day < end
}

/// Canonical `YYYY-MM-DD` rendering of a day.
pub fn date_str(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Default weekend policy: Saturday and Sunday.
///
/// Consumers take an injected `Fn(NaiveDate) -> bool` predicate so a holiday
/// calendar can be substituted; this is the stand-in when none is given.
pub fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Default visible window around `today` (e.g. the tape chart's initial view).
///
/// Returns the inclusive `(from, to)` pair `today - days_back ..= today + days_forward`.
pub fn default_view_range(today: NaiveDate, days_back: u64, days_forward: u64) -> (NaiveDate, NaiveDate) {
    let from = today.checked_sub_days(Days::new(days_back)).unwrap_or(today);
    let to = today.checked_add_days(Days::new(days_forward)).unwrap_or(today);
    (from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn days_inclusive_includes_both_endpoints() {
        let days: Vec<_> = days_inclusive(d("2026-02-27"), d("2026-03-02")).collect();
        assert_eq!(
            days,
            vec![d("2026-02-27"), d("2026-02-28"), d("2026-03-01"), d("2026-03-02")]
        );
    }

    #[test]
    fn days_inclusive_single_day() {
        let days: Vec<_> = days_inclusive(d("2026-02-10"), d("2026-02-10")).collect();
        assert_eq!(days, vec![d("2026-02-10")]);
    }

    #[test]
    fn days_inclusive_inverted_range_is_empty() {
        assert_eq!(days_inclusive(d("2026-02-11"), d("2026-02-10")).count(), 0);
    }

    #[test]
    fn interval_covers_is_half_open() {
        let (start, end) = (d("2026-02-07"), d("2026-02-09"));
        assert!(interval_covers(start, end, d("2026-02-07")));
        assert!(interval_covers(start, end, d("2026-02-08")));
        assert!(!interval_covers(start, end, d("2026-02-09")));
    }

    #[test]
    fn zero_length_interval_covers_nothing() {
        let day = d("2026-02-07");
        assert!(!interval_covers(day, day, day));
    }

    #[test]
    fn date_str_is_canonical() {
        assert_eq!(date_str(d("2026-02-03")), "2026-02-03");
    }

    #[test]
    fn weekend_default_is_saturday_sunday() {
        assert!(is_weekend(d("2026-02-14"))); // Saturday
        assert!(is_weekend(d("2026-02-15"))); // Sunday
        assert!(!is_weekend(d("2026-02-16"))); // Monday
    }

    #[test]
    fn default_view_range_spans_back_and_forward() {
        let (from, to) = default_view_range(d("2026-02-10"), 0, 14);
        assert_eq!(from, d("2026-02-10"));
        assert_eq!(to, d("2026-02-24"));
    }

    proptest! {
        /// Property: the span length is always `to - from + 1` for valid ranges.
        #[test]
        fn span_length_matches_day_delta(offset in 0i64..400, len in 0i64..90) {
            let from = d("2026-01-01") + chrono::Duration::days(offset);
            let to = from + chrono::Duration::days(len);
            prop_assert_eq!(days_inclusive(from, to).count() as i64, len + 1);
        }
    }
}
