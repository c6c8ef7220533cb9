//! Tabular output of a resolved calendar.

use std::io::Write;

use serde::Serialize;

use crate::consts::{CYCLE_A_YEAR, LECTIONARY_CYCLE_LEN};
use crate::prelude::*;
use crate::{DocumentPath, LiturgicalCalendar, Observance, Priority, Season};

/// Sunday lectionary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Cycle {
    #[display(fmt = "A")]
    A,
    #[display(fmt = "B")]
    B,
    #[display(fmt = "C")]
    C,
}

/// Lectionary cycle of the calendar year `year` (2020 was Year A).
pub const fn lectionary_cycle(year: i32) -> Cycle {
    match (year - CYCLE_A_YEAR).rem_euclid(LECTIONARY_CYCLE_LEN) {
        0 => Cycle::A,
        1 => Cycle::B,
        _ => Cycle::C,
    }
}

/// `YYYY-yearX-liturgical-calendar.csv`
pub fn default_filename(year: i32) -> String {
    format!("{year}-year{}-liturgical-calendar.csv", lectionary_cycle(year))
}

/// One CSV record; field names form the header.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    date: NaiveDate,
    weekday: &'static str,
    feast: &'a str,
    season: Season,
    name: &'a str,
    priority: Priority,
    year: i32,
    month: u32,
    day: u32,
    dayofweek: u32,
    filename: &'a DocumentPath,
}

impl<'a> From<&'a Observance> for CsvRow<'a> {
    fn from(observance: &'a Observance) -> Self {
        let date = observance.date();
        Self {
            date,
            weekday: observance.weekday_label(),
            feast: observance.key().as_str(),
            season: observance.season(),
            name: observance.name(),
            priority: observance.priority(),
            year: date.year(),
            month: date.month(),
            day: date.day(),
            dayofweek: observance.weekday().num_days_from_monday(),
            filename: observance.path(),
        }
    }
}

/// Writes the calendar as CSV, a header and then one row per observance.
///
/// # Errors
/// Returns `csv::Error` if a row cannot be serialized or the underlying
/// writer fails.
pub fn write_csv<W: Write>(calendar: &LiturgicalCalendar, writer: W) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for observance in calendar {
        writer.serialize(CsvRow::from(observance))?;
    }
    writer.flush()?;
    Ok(())
}
