//! Sunday arithmetic shared by every season builder.
//!
//! An anchor that is itself a Sunday is never part of the walk: the first
//! Sunday returned is strictly before (or after) it. Results are always in
//! chronological order.

use crate::consts::DAYS_IN_WEEK;
use crate::prelude::*;
use crate::types::FeastKey;

/// A Sunday paired with its numbered-week key, e.g. `advent03`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    pub date: NaiveDate,
    pub key: FeastKey,
}

/// Returns the `count` Sundays preceding `anchor`, oldest first.
pub fn sundays_before(anchor: NaiveDate, count: u32) -> Vec<NaiveDate> {
    let back = u64::from(anchor.weekday().num_days_from_monday()) + 1;
    let nearest = anchor - Days::new(back);
    (0..count)
        .rev()
        .map(|i| nearest - Days::new(DAYS_IN_WEEK * u64::from(i)))
        .collect()
}

/// Returns the `count` Sundays following `anchor`, oldest first.
pub fn sundays_after(anchor: NaiveDate, count: u32) -> Vec<NaiveDate> {
    let ahead = DAYS_IN_WEEK - u64::from(anchor.weekday().num_days_from_sunday());
    let first = anchor + Days::new(ahead);
    (0..count)
        .map(|i| first + Days::new(DAYS_IN_WEEK * u64::from(i)))
        .collect()
}

/// Numbered Sundays before `anchor`, labelled `1..=count`.
pub fn weeks_before(anchor: NaiveDate, count: u32, label: &str) -> Vec<Week> {
    weeks_before_ending(anchor, count, label, count)
}

/// Numbered Sundays before `anchor` whose last week is `end_index`.
///
/// The Sunday just before the anchor gets `end_index`, counting down from
/// there. Weeks that would number below one are not emitted.
pub fn weeks_before_ending(anchor: NaiveDate, count: u32, label: &str, end_index: u32) -> Vec<Week> {
    let sundays = sundays_before(anchor, count);
    let first = i64::from(end_index) - i64::from(count) + 1;
    sundays
        .into_iter()
        .zip(first..)
        .filter_map(|(date, week)| {
            u32::try_from(week)
                .ok()
                .filter(|week| *week >= 1)
                .map(|week| Week {
                    date,
                    key: FeastKey::numbered(label, week),
                })
        })
        .collect()
}

/// Numbered Sundays after `anchor`, labelled `start_index..start_index + count`.
pub fn weeks_after(anchor: NaiveDate, count: u32, start_index: u32, label: &str) -> Vec<Week> {
    sundays_after(anchor, count)
        .into_iter()
        .zip(start_index..)
        .map(|(date, week)| Week {
            date,
            key: FeastKey::numbered(label, week),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_sundays_before_weekday_anchor() {
        // Christmas 2025 is a Thursday
        let sundays = sundays_before(date(2025, 12, 25), 4);
        assert_eq!(
            sundays,
            vec![
                date(2025, 11, 30),
                date(2025, 12, 7),
                date(2025, 12, 14),
                date(2025, 12, 21)
            ]
        );
    }

    #[test]
    fn test_sundays_before_excludes_sunday_anchor() {
        let sundays = sundays_before(date(2026, 4, 5), 1);
        assert_eq!(sundays, vec![date(2026, 3, 29)]);
    }

    #[test]
    fn test_sundays_after_excludes_sunday_anchor() {
        let sundays = sundays_after(date(2026, 4, 5), 2);
        assert_eq!(sundays, vec![date(2026, 4, 12), date(2026, 4, 19)]);
    }

    #[test]
    fn test_sundays_after_saturday_anchor() {
        let sundays = sundays_after(date(2026, 4, 4), 1);
        assert_eq!(sundays, vec![date(2026, 4, 5)]);
    }

    #[test]
    fn test_zero_count_is_empty() {
        assert!(sundays_before(date(2026, 4, 5), 0).is_empty());
        assert!(sundays_after(date(2026, 4, 5), 0).is_empty());
        assert!(weeks_before(date(2026, 4, 5), 0, "lent").is_empty());
        assert!(weeks_after(date(2026, 4, 5), 0, 2, "easter").is_empty());
    }

    #[test]
    fn test_every_result_is_a_sunday() {
        let mut anchor = date(2026, 1, 1);
        for _ in 0..14 {
            for sunday in sundays_before(anchor, 3).into_iter().chain(sundays_after(anchor, 3)) {
                assert_eq!(sunday.weekday(), Weekday::Sun, "anchor {anchor}");
            }
            anchor = anchor.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_weeks_before_labels() {
        let weeks = weeks_before(date(2025, 12, 25), 4, "advent");
        let keys: Vec<&str> = weeks.iter().map(|w| w.key.as_str()).collect();
        assert_eq!(keys, ["advent01", "advent02", "advent03", "advent04"]);
        assert_eq!(weeks[0].date, date(2025, 11, 30));
    }

    #[test]
    fn test_weeks_before_ending_counts_down() {
        // Christ the King 2026 is November 22
        let weeks = weeks_before_ending(date(2026, 11, 22), 3, "ot", 33);
        let keys: Vec<&str> = weeks.iter().map(|w| w.key.as_str()).collect();
        assert_eq!(keys, ["ot31", "ot32", "ot33"]);
        assert_eq!(weeks[2].date, date(2026, 11, 15));
    }

    #[test]
    fn test_weeks_before_ending_drops_weeks_below_one() {
        let weeks = weeks_before_ending(date(2026, 11, 22), 3, "ot", 2);
        let keys: Vec<&str> = weeks.iter().map(|w| w.key.as_str()).collect();
        assert_eq!(keys, ["ot01", "ot02"]);
    }

    #[test]
    fn test_weeks_after_labels() {
        let weeks = weeks_after(date(2026, 4, 5), 3, 2, "easter");
        let keys: Vec<&str> = weeks.iter().map(|w| w.key.as_str()).collect();
        assert_eq!(keys, ["easter02", "easter03", "easter04"]);
        assert_eq!(weeks[0].date, date(2026, 4, 12));
    }
}
