//! Season ranges and their positional spans over the merged table.

use std::cmp::Ordering;

use crate::consts::keys;
use crate::prelude::*;
use crate::resolve::MergedTable;
use crate::types::Season;
use crate::CalendarError;

/// A season bounded by the keys of its first and last observance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonRange {
    pub start: &'static str,
    pub end: &'static str,
    pub season: Season,
}

/// Key ranges in the order they are applied. Rows outside every range are
/// Ordinary Time.
pub const SEASON_RANGES: [SeasonRange; 4] = [
    SeasonRange {
        start: "advent01",
        end: "advent04",
        season: Season::Advent,
    },
    SeasonRange {
        start: keys::CHRISTMAS_EVE,
        end: keys::BAPTISM,
        season: Season::Christmas,
    },
    SeasonRange {
        start: keys::ASH_WEDNESDAY,
        end: keys::GOOD_FRIDAY,
        season: Season::Lent,
    },
    SeasonRange {
        start: keys::EASTER_VIGIL,
        end: keys::PENTECOST,
        season: Season::Easter,
    },
];

/// Positional span (inclusive) of a season over the date-ordered table.
/// The start position must not be after the end position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{season}[{start}..={end}]")]
pub struct SeasonSpan {
    season: Season,
    start: usize,
    end: usize,
}

impl SeasonSpan {
    /// Creates a new span with validation.
    ///
    /// # Errors
    /// Returns `CalendarError::InconsistentSeasonSpan` if start > end.
    pub fn new(season: Season, start: usize, end: usize) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::inconsistent(
                season,
                format!("range starts at row {start}, after its end at row {end}"),
            ));
        }
        Ok(Self { season, start, end })
    }

    pub const fn season(&self) -> Season {
        self.season
    }

    /// Returns both start and end positions as a tuple
    pub const fn bounds(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// Checks if the span contains a given row position
    pub const fn contains(&self, position: usize) -> bool {
        self.start <= position && position <= self.end
    }

    /// Checks if this span shares any row with another span
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl PartialOrd for SeasonSpan {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SeasonSpan {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bounds().cmp(&other.bounds())
    }
}

/// Resolves every season range against the merged table.
///
/// An endpoint whose row was superseded by a fixed feast resolves to the
/// first row now occupying its date.
///
/// # Errors
/// Returns `CalendarError::InconsistentSeasonSpan` if an endpoint cannot be
/// found, a range is inverted, or two ranges overlap.
pub(crate) fn resolve_spans(table: &MergedTable) -> Result<Vec<SeasonSpan>, CalendarError> {
    let mut spans = SEASON_RANGES
        .iter()
        .map(|range| {
            let start = position(table, range.start, range.season)?;
            let end = position(table, range.end, range.season)?;
            SeasonSpan::new(range.season, start, end)
        })
        .collect::<Result<Vec<_>, _>>()?;

    spans.sort();
    for pair in spans.windows(2) {
        let (earlier, later) = (&pair[0], &pair[1]);
        if earlier.overlaps(later) {
            return Err(CalendarError::inconsistent(
                later.season(),
                format!("{later} overlaps {earlier}"),
            ));
        }
    }
    Ok(spans)
}

fn position(table: &MergedTable, key: &str, season: Season) -> Result<usize, CalendarError> {
    table
        .entries
        .iter()
        .position(|entry| entry.key == key)
        .or_else(|| {
            let date = table.superseded_date(key)?;
            table.entries.iter().position(|entry| entry.date == date)
        })
        .ok_or_else(|| CalendarError::inconsistent(season, format!("no observance for {key}")))
}
