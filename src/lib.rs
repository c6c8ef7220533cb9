//! US Catholic liturgical calendar resolution.
//!
//! Given the date of Easter Sunday, [`LiturgicalCalendar::build`] derives every
//! Sunday, moveable feast, fixed feast and notable weekday from the first
//! Sunday of Advent of the prior civil year through the last Sunday of
//! Ordinary Time.
//!
//! ```
//! use litcal::{EasterDate, LiturgicalCalendar, Options, Season};
//!
//! let easter: EasterDate = "2026-04-05".parse()?;
//! let calendar = LiturgicalCalendar::build(easter, Options::default())?;
//! let ash = calendar.get("ash-wednesday").ok_or("no Ash Wednesday")?;
//! assert_eq!(ash.date().to_string(), "2026-02-18");
//! assert_eq!(ash.season(), Season::Lent);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod annotate;
mod consts;
mod naming;
pub mod output;
mod prelude;
mod registry;
mod resolve;
mod seasons;
mod span;
mod types;
pub mod walker;

pub use annotate::{Observance, priority};
pub use consts::*;
pub use naming::{display_name, ordinal_word, title_case};
pub use registry::{christmas, thanksgiving};
pub use span::{SEASON_RANGES, SeasonRange, SeasonSpan};
pub use types::{DocumentPath, EasterDate, FeastKey, ParseError, Priority, Season, weekday_label};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::info;

/// Error type for calendar construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The Easter date could not be parsed or is not a possible Easter.
    #[error("Invalid Easter date: {0}")]
    InvalidDateInput(#[from] ParseError),

    /// Season arithmetic produced an impossible span.
    #[error("Inconsistent {season} span: {detail}")]
    InconsistentSeasonSpan { season: Season, detail: String },
}

impl CalendarError {
    pub(crate) fn inconsistent(season: Season, detail: impl Into<String>) -> Self {
        Self::InconsistentSeasonSpan {
            season,
            detail: detail.into(),
        }
    }
}

/// Calendar options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Celebrate the Ascension on its Thursday instead of transferring it to
    /// the seventh Sunday of Easter.
    pub ascension_thursday: bool,
}

/// The resolved calendar for one liturgical year, ordered by date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiturgicalCalendar {
    easter: EasterDate,
    options: Options,
    observances: Vec<Observance>,
}

impl LiturgicalCalendar {
    /// Builds the calendar for the civil year of `easter`.
    ///
    /// Advent and Christmas belong to the prior civil year; everything else
    /// to the year of Easter.
    ///
    /// # Errors
    /// Returns `CalendarError::InconsistentSeasonSpan` if season arithmetic
    /// produces an impossible span.
    pub fn build(easter: EasterDate, options: Options) -> Result<Self, CalendarError> {
        let (movable, fixed) = assemble(easter, options)?;
        let merged = resolve::merge(movable, &fixed);
        let observances = annotate::annotate(merged)?;

        info!(
            %easter,
            ascension_thursday = options.ascension_thursday,
            observances = observances.len(),
            "liturgical calendar resolved"
        );
        Ok(Self {
            easter,
            options,
            observances,
        })
    }

    /// Parses `easter` as `YYYY-MM-DD` and builds its calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDateInput` if the date is malformed or
    /// cannot be Easter, and any error of [`LiturgicalCalendar::build`].
    pub fn from_easter_str(easter: &str, options: Options) -> Result<Self, CalendarError> {
        Self::build(EasterDate::from_str(easter)?, options)
    }

    pub const fn easter(&self) -> EasterDate {
        self.easter
    }

    pub const fn options(&self) -> Options {
        self.options
    }

    /// Returns the civil year of Easter
    pub fn year(&self) -> i32 {
        self.easter.year()
    }

    /// All observances in date order
    pub fn observances(&self) -> &[Observance] {
        &self.observances
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observance> {
        self.observances.iter()
    }

    pub fn len(&self) -> usize {
        self.observances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observances.is_empty()
    }

    /// Looks up an observance by key
    pub fn get(&self, key: &str) -> Option<&Observance> {
        self.observances.iter().find(|observance| observance.key() == key)
    }

    /// Observances celebrated on `date` (alternate Masses share a date)
    pub fn on(&self, date: NaiveDate) -> impl Iterator<Item = &Observance> {
        self.observances
            .iter()
            .filter(move |observance| observance.date() == date)
    }

    /// Observances of one season, in date order
    pub fn in_season(&self, season: Season) -> impl Iterator<Item = &Observance> {
        self.observances
            .iter()
            .filter(move |observance| observance.season() == season)
    }
}

/// Movable rows of every season plus the floating feasts, and the fixed-date
/// rows that take precedence over them.
pub(crate) fn assemble(
    easter: EasterDate,
    options: Options,
) -> Result<(Vec<seasons::Entry>, Vec<seasons::Entry>), CalendarError> {
    let year = easter.year();
    let prior_christmas = registry::christmas(year - 1)?;

    let christmas = seasons::christmas(prior_christmas)?;
    let lent = seasons::lent(easter.get())?;
    let easter_season = seasons::easter(easter.get(), options.ascension_thursday)?;
    let ordinary_time = seasons::ordinary_time(&seasons::OrdinaryTimeAnchors {
        baptism: christmas.baptism,
        ash_wednesday: lent.ash_wednesday,
        corpus_christi: easter_season.corpus_christi,
        next_christmas: registry::christmas(year)?,
    })?;
    let floating = registry::floating_feasts(
        year,
        easter_season.pentecost,
        ordinary_time.christ_the_king,
    )?;

    let mut movable = seasons::advent(prior_christmas);
    movable.extend(christmas.entries);
    movable.extend(lent.entries);
    movable.extend(easter_season.entries);
    movable.extend(ordinary_time.entries);
    movable.extend(floating);

    let fixed = registry::fixed_feasts(year, christmas.holy_family_transferred)?;
    Ok((movable, fixed))
}

impl<'a> IntoIterator for &'a LiturgicalCalendar {
    type Item = &'a Observance;
    type IntoIter = std::slice::Iter<'a, Observance>;

    fn into_iter(self) -> Self::IntoIter {
        self.observances.iter()
    }
}
