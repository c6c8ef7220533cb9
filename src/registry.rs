//! Feasts and solemnities that do not follow the Sunday grid.
//!
//! Fixed feasts are anchored to a civil month and day. Floating feasts
//! (Sacred Heart, Christ the King and Thanksgiving) are computed from other
//! dates but are otherwise merged like any movable row.

use crate::CalendarError;
use crate::consts::{
    CHRISTMAS_DAY, DECEMBER, NOVEMBER, SACRED_HEART_OFFSET_DAYS, THANKSGIVING_WEEK, groupings, keys,
};
use crate::prelude::*;
use crate::seasons::Entry;
use crate::types::ParseError;
use tracing::debug;

/// Which civil year a fixed feast belongs to, relative to the calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CivilYear {
    /// The year before Easter, for feasts in Advent and Christmas
    Prior,
    /// The year of Easter
    Current,
}

#[derive(Debug, Clone, Copy)]
struct FixedFeast {
    year: CivilYear,
    month: u32,
    day: u32,
    key: &'static str,
    grouping: &'static str,
    stem: &'static str,
}

const fn feast(
    year: CivilYear,
    month: u32,
    day: u32,
    key: &'static str,
    stem: &'static str,
) -> FixedFeast {
    FixedFeast {
        year,
        month,
        day,
        key,
        grouping: groupings::FEASTS,
        stem,
    }
}

static FIXED_FEASTS: [FixedFeast; 16] = [
    // Feasts
    feast(CivilYear::Current, 2, 2, "presentation", "feb02-presentation"),
    feast(CivilYear::Current, 8, 6, "transfiguration", "aug06-transfiguration"),
    feast(CivilYear::Current, 9, 14, "holy-cross", "sep14-holy-cross"),
    feast(CivilYear::Current, 11, 2, keys::ALL_SOULS, "nov02-all-souls"),
    feast(CivilYear::Current, 11, 9, "john-lateran", "nov09-john-lateran"),
    // Solemnities
    feast(
        CivilYear::Prior,
        12,
        8,
        keys::IMMACULATE_CONCEPTION,
        "dec08-immaculate-conception",
    ),
    FixedFeast {
        year: CivilYear::Current,
        month: 1,
        day: 1,
        key: keys::MARY_MOTHER_OF_GOD,
        grouping: groupings::CHRISTMAS,
        stem: keys::MARY_MOTHER_OF_GOD,
    },
    feast(CivilYear::Current, 3, 19, "stjoseph", "st.joseph"),
    feast(CivilYear::Current, 3, 25, "annunciation", "mar25-annunciation"),
    feast(
        CivilYear::Current,
        6,
        23,
        "nativity-john-baptist-vigil",
        "jun23-nativity-john-baptist-vigil",
    ),
    feast(
        CivilYear::Current,
        6,
        24,
        "nativity-john-baptist",
        "jun24-nativity-john-baptist",
    ),
    feast(CivilYear::Current, 6, 28, "peter-paul-vigil", "jun28-peter-paul-vigil"),
    feast(CivilYear::Current, 6, 29, "peter-paul", "jun29-peter-paul"),
    feast(CivilYear::Current, 8, 14, keys::ASSUMPTION_VIGIL, "aug14-assumption-vigil"),
    feast(CivilYear::Current, 8, 15, keys::ASSUMPTION, "aug15-assumption"),
    feast(CivilYear::Current, 11, 1, keys::ALL_SAINTS, "nov01-all-saints"),
];

/// Holy Family when Christmas is a Sunday and leaves no Sunday before January 1.
const TRANSFERRED_HOLY_FAMILY: FixedFeast = FixedFeast {
    year: CivilYear::Prior,
    month: DECEMBER,
    day: 30,
    key: keys::HOLY_FAMILY,
    grouping: groupings::CHRISTMAS,
    stem: keys::HOLY_FAMILY,
};

impl FixedFeast {
    fn resolve(&self, year: i32) -> Result<Entry, CalendarError> {
        let year = match self.year {
            CivilYear::Prior => year - 1,
            CivilYear::Current => year,
        };
        let date = civil_date(year, self.month, self.day)?;
        Ok(Entry::with_stem(date, self.key, self.grouping, self.stem))
    }
}

/// Fixed-date rows for the calendar `year`, in table order.
///
/// Vigils falling on a Sunday are dropped: the vigil Mass is not celebrated
/// when its evening is itself a Sunday.
pub(crate) fn fixed_feasts(
    year: i32,
    holy_family_transferred: bool,
) -> Result<Vec<Entry>, CalendarError> {
    let transferred = holy_family_transferred.then_some(&TRANSFERRED_HOLY_FAMILY);
    let mut entries = Vec::with_capacity(FIXED_FEASTS.len() + 1);
    for feast in FIXED_FEASTS.iter().chain(transferred) {
        let entry = feast.resolve(year)?;
        if entry.key.is_vigil() && entry.date.weekday() == Weekday::Sun {
            debug!(key = %entry.key, date = %entry.date, "dropping vigil that falls on a Sunday");
            continue;
        }
        entries.push(entry);
    }
    Ok(entries)
}

/// Sacred Heart, Christ the King and Thanksgiving.
///
/// Christ the King's document depends on whether it precedes Thanksgiving.
pub(crate) fn floating_feasts(
    year: i32,
    pentecost: NaiveDate,
    christ_the_king: NaiveDate,
) -> Result<Vec<Entry>, CalendarError> {
    let sacred_heart = pentecost + Days::new(SACRED_HEART_OFFSET_DAYS);
    let thanksgiving = thanksgiving(year)?;
    let christ_the_king_stem = if christ_the_king < thanksgiving {
        "christ-the-king-before-thanksgiving"
    } else {
        "christ-the-king-after-thanksgiving"
    };

    Ok(vec![
        Entry::new(sacred_heart, keys::SACRED_HEART, groupings::FEASTS),
        Entry::with_stem(
            christ_the_king,
            keys::CHRIST_THE_KING,
            groupings::ORDINARY_TIME,
            christ_the_king_stem,
        ),
        Entry::new(thanksgiving, keys::THANKSGIVING, groupings::ORDINARY_TIME),
    ])
}

/// US Thanksgiving: the fourth Thursday of November.
pub fn thanksgiving(year: i32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_weekday_of_month_opt(year, NOVEMBER, Weekday::Thu, THANKSGIVING_WEEK).ok_or(
        CalendarError::InvalidDateInput(ParseError::InvalidYear(year)),
    )
}

/// Christmas Day of the civil `year`.
pub fn christmas(year: i32) -> Result<NaiveDate, CalendarError> {
    civil_date(year, DECEMBER, CHRISTMAS_DAY)
}

fn civil_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CalendarError::InvalidDateInput(ParseError::InvalidDate { year, month, day }))
}
