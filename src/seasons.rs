//! Movable observances, one builder per season.
//!
//! Each builder only does date arithmetic from its anchor (Christmas of the
//! prior civil year, or Easter) and hands back the dates later builders need.

use crate::CalendarError;
use crate::consts::{
    ADVENT_LABEL, ADVENT_SUNDAYS, ASCENSION_OFFSET_DAYS, ASH_WEDNESDAY_OFFSET_DAYS,
    CHRIST_THE_KING_SUNDAYS_BEFORE_CHRISTMAS, EASTER_FIRST_WEEK, EASTER_LABEL,
    EASTER_SUNDAYS, LENT_LABEL, LENT_SUNDAYS, OT_FIRST_WEEK, OT_LABEL, OT_LAST_WEEK, groupings,
    keys,
};
use crate::prelude::*;
use crate::types::{DocumentPath, FeastKey, Season};
use crate::walker::{self, Week};
use tracing::debug;

/// A dated, keyed row before annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry {
    pub date: NaiveDate,
    pub key: FeastKey,
    pub path: DocumentPath,
}

impl Entry {
    /// Entry whose document stem is its key.
    pub fn new(date: NaiveDate, key: &str, grouping: &str) -> Self {
        Self::with_stem(date, key, grouping, key)
    }

    pub fn with_stem(date: NaiveDate, key: &str, grouping: &str, stem: &str) -> Self {
        Self {
            date,
            key: FeastKey::from(key),
            path: DocumentPath::new(grouping, stem),
        }
    }

    fn from_week(week: Week, grouping: &str) -> Self {
        let path = DocumentPath::new(grouping, week.key.as_str());
        Self {
            date: week.date,
            key: week.key,
            path,
        }
    }
}

/// Advent: the four Sundays ending the week before Christmas.
pub(crate) fn advent(christmas: NaiveDate) -> Vec<Entry> {
    let entries: Vec<Entry> = walker::weeks_before(christmas, ADVENT_SUNDAYS, ADVENT_LABEL)
        .into_iter()
        .map(|week| Entry::from_week(week, groupings::ADVENT))
        .collect();
    debug!(season = %Season::Advent, rows = entries.len(), "season built");
    entries
}

pub(crate) struct ChristmasSeason {
    pub entries: Vec<Entry>,
    pub baptism: NaiveDate,
    /// Christmas fell on a Sunday, so Holy Family moves to December 30
    pub holy_family_transferred: bool,
}

/// Christmas: the four Christmas Masses, then Holy Family (unless
/// transferred), Epiphany and Baptism of the Lord on successive Sundays.
pub(crate) fn christmas(christmas: NaiveDate) -> Result<ChristmasSeason, CalendarError> {
    let eve = christmas - Days::new(1);
    let mut entries = vec![
        Entry::new(eve, keys::CHRISTMAS_EVE, groupings::CHRISTMAS),
        Entry::new(eve, keys::CHRISTMAS_MIDNIGHT, groupings::CHRISTMAS),
        Entry::new(christmas, keys::CHRISTMAS_DAWN, groupings::CHRISTMAS),
        Entry::new(christmas, keys::CHRISTMAS_DAY, groupings::CHRISTMAS),
    ];

    let holy_family_transferred = christmas.weekday() == Weekday::Sun;
    // January 1 is then a Sunday: Epiphany is walked onto it and gives way to
    // Mary, Mother of God when the fixed feasts are merged
    let sundays: &[&str] = if holy_family_transferred {
        &[keys::EPIPHANY, keys::BAPTISM]
    } else {
        &[keys::HOLY_FAMILY, keys::EPIPHANY, keys::BAPTISM]
    };

    let mut baptism = None;
    for (date, key) in walker::sundays_after(christmas, 3).into_iter().zip(sundays) {
        if *key == keys::BAPTISM {
            baptism = Some(date);
        }
        entries.push(Entry::new(date, key, groupings::CHRISTMAS));
    }
    let baptism = baptism.ok_or_else(|| {
        CalendarError::inconsistent(Season::Christmas, "no Sunday found for the Baptism of the Lord")
    })?;

    debug!(
        season = %Season::Christmas,
        rows = entries.len(),
        holy_family_transferred,
        "season built"
    );
    Ok(ChristmasSeason {
        entries,
        baptism,
        holy_family_transferred,
    })
}

pub(crate) struct LentSeason {
    pub entries: Vec<Entry>,
    pub ash_wednesday: NaiveDate,
}

/// Lent and the Triduum: Ash Wednesday, five Sundays of Lent, Palm Sunday,
/// Holy Thursday, Good Friday and the Easter Vigil.
pub(crate) fn lent(easter: NaiveDate) -> Result<LentSeason, CalendarError> {
    let weeks = walker::weeks_before(easter, LENT_SUNDAYS, LENT_LABEL);
    let first_sunday = weeks.first().map(|week| week.date).ok_or_else(|| {
        CalendarError::inconsistent(Season::Lent, "no first Sunday of Lent before Easter")
    })?;
    let palm_sunday = FeastKey::numbered(LENT_LABEL, LENT_SUNDAYS);

    let ash_wednesday = first_sunday - Days::new(ASH_WEDNESDAY_OFFSET_DAYS);
    let easter_vigil = easter - Days::new(1);
    let good_friday = easter_vigil - Days::new(1);
    let holy_thursday = good_friday - Days::new(1);

    let mut entries = vec![Entry::new(ash_wednesday, keys::ASH_WEDNESDAY, groupings::LENT)];
    entries.extend(weeks.into_iter().map(|week| {
        if week.key == palm_sunday {
            Entry::new(week.date, keys::PALM_SUNDAY, groupings::HOLY_WEEK)
        } else {
            Entry::from_week(week, groupings::LENT)
        }
    }));
    entries.extend([
        Entry::new(holy_thursday, keys::HOLY_THURSDAY, groupings::HOLY_WEEK),
        Entry::new(good_friday, keys::GOOD_FRIDAY, groupings::HOLY_WEEK),
        Entry::new(easter_vigil, keys::EASTER_VIGIL, groupings::HOLY_WEEK),
    ]);

    debug!(season = %Season::Lent, rows = entries.len(), %ash_wednesday, "season built");
    Ok(LentSeason {
        entries,
        ash_wednesday,
    })
}

pub(crate) struct EasterSeason {
    pub entries: Vec<Entry>,
    pub pentecost: NaiveDate,
    pub corpus_christi: NaiveDate,
}

/// Easter through Corpus Christi.
///
/// Weeks 8, 9 and 10 become Pentecost, Holy Trinity and Corpus Christi. The
/// Ascension either replaces the seventh Sunday (transferred, the default)
/// or is added on its Thursday, 39 days after Easter.
pub(crate) fn easter(
    easter: NaiveDate,
    ascension_thursday: bool,
) -> Result<EasterSeason, CalendarError> {
    let ascension_week = FeastKey::numbered(EASTER_LABEL, 7);
    let pentecost_week = FeastKey::numbered(EASTER_LABEL, 8);
    let trinity_week = FeastKey::numbered(EASTER_LABEL, 9);
    let corpus_christi_week = FeastKey::numbered(EASTER_LABEL, 10);

    let mut entries = vec![Entry::new(easter, keys::EASTER, groupings::EASTER)];
    let mut pentecost = None;
    let mut corpus_christi = None;

    for week in walker::weeks_after(easter, EASTER_SUNDAYS, EASTER_FIRST_WEEK, EASTER_LABEL) {
        let entry = if week.key == pentecost_week {
            pentecost = Some(week.date);
            Entry::new(week.date, keys::PENTECOST, groupings::EASTER)
        } else if week.key == trinity_week {
            Entry::new(week.date, keys::HOLY_TRINITY, groupings::FEASTS)
        } else if week.key == corpus_christi_week {
            corpus_christi = Some(week.date);
            Entry::new(week.date, keys::CORPUS_CHRISTI, groupings::FEASTS)
        } else if week.key == ascension_week && !ascension_thursday {
            Entry::new(week.date, keys::ASCENSION, groupings::EASTER)
        } else {
            Entry::from_week(week, groupings::EASTER)
        };
        entries.push(entry);
    }

    let pentecost = pentecost
        .ok_or_else(|| CalendarError::inconsistent(Season::Easter, "no Sunday found for Pentecost"))?;
    let corpus_christi = corpus_christi.ok_or_else(|| {
        CalendarError::inconsistent(Season::Easter, "no Sunday found for Corpus Christi")
    })?;

    let vigil = pentecost - Days::new(1);
    entries.extend([
        Entry::new(vigil, keys::PENTECOST_VIGIL, groupings::EASTER),
        Entry::new(vigil, keys::PENTECOST_VIGIL_EXTENDED, groupings::EASTER),
    ]);
    if ascension_thursday {
        let ascension = easter + Days::new(ASCENSION_OFFSET_DAYS);
        entries.push(Entry::new(ascension, keys::ASCENSION, groupings::EASTER));
    }

    debug!(
        season = %Season::Easter,
        rows = entries.len(),
        %pentecost,
        ascension_thursday,
        "season built"
    );
    Ok(EasterSeason {
        entries,
        pentecost,
        corpus_christi,
    })
}

/// Anchors Ordinary Time is computed from.
pub(crate) struct OrdinaryTimeAnchors {
    pub baptism: NaiveDate,
    pub ash_wednesday: NaiveDate,
    pub corpus_christi: NaiveDate,
    /// Christmas of the calendar's own civil year
    pub next_christmas: NaiveDate,
}

pub(crate) struct OrdinaryTime {
    pub entries: Vec<Entry>,
    pub christ_the_king: NaiveDate,
}

/// Ordinary Time in two segments.
///
/// Winter counts up from week 2 after the Baptism of the Lord until Ash
/// Wednesday. Summer counts down from week 33, the Sunday before Christ the
/// King, until Corpus Christi. The two segments are not contiguous in general.
pub(crate) fn ordinary_time(anchors: &OrdinaryTimeAnchors) -> Result<OrdinaryTime, CalendarError> {
    let winter = whole_weeks(anchors.baptism, anchors.ash_wednesday, "winter")?;
    let mut entries: Vec<Entry> = walker::weeks_after(anchors.baptism, winter, OT_FIRST_WEEK, OT_LABEL)
        .into_iter()
        .map(|week| Entry::from_week(week, groupings::ORDINARY_TIME))
        .collect();

    let christ_the_king = walker::sundays_before(
        anchors.next_christmas,
        CHRIST_THE_KING_SUNDAYS_BEFORE_CHRISTMAS,
    )
    .first()
    .copied()
    .ok_or_else(|| {
        CalendarError::inconsistent(Season::OrdinaryTime, "no Sunday found for Christ the King")
    })?;

    let summer = whole_weeks(anchors.corpus_christi, christ_the_king, "summer")?
        .checked_sub(1)
        .ok_or_else(|| {
            CalendarError::inconsistent(
                Season::OrdinaryTime,
                format!("Corpus Christi ({}) is not before Christ the King ({christ_the_king})", anchors.corpus_christi),
            )
        })?;
    entries.extend(
        walker::weeks_before_ending(christ_the_king, summer, OT_LABEL, OT_LAST_WEEK)
            .into_iter()
            .map(|week| Entry::from_week(week, groupings::ORDINARY_TIME)),
    );

    debug!(
        season = %Season::OrdinaryTime,
        winter_weeks = winter,
        summer_weeks = summer,
        %christ_the_king,
        "season built"
    );
    Ok(OrdinaryTime {
        entries,
        christ_the_king,
    })
}

/// Whole weeks from `start` to `end`, rounded down.
fn whole_weeks(start: NaiveDate, end: NaiveDate, segment: &str) -> Result<u32, CalendarError> {
    let days = (end - start).num_days();
    u32::try_from(days.div_euclid(7)).map_err(|_| {
        CalendarError::inconsistent(
            Season::OrdinaryTime,
            format!("{segment} segment runs backwards: {start} to {end}"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn find<'a>(entries: &'a [Entry], key: &str) -> Option<&'a Entry> {
        entries.iter().find(|entry| entry.key == key)
    }

    #[test]
    fn test_advent_has_four_sundays() {
        for year in 2015..2040 {
            let entries = advent(date(year, 12, 25));
            assert_eq!(entries.len(), 4, "Advent {year}");
            assert!(entries.iter().all(|e| e.date.weekday() == Weekday::Sun));
            assert!(entries[3].date < date(year, 12, 25));
            assert!(entries[3].date >= date(year, 12, 18));
        }
    }

    #[test]
    fn test_advent_paths() {
        let entries = advent(date(2025, 12, 25));
        assert_eq!(entries[0].key, "advent01");
        assert_eq!(entries[0].path.to_string(), "advent/advent01.qmd");
        assert_eq!(entries[0].date, date(2025, 11, 30));
    }

    #[test]
    fn test_christmas_weekday() {
        // Christmas 2025 is a Thursday
        let season = christmas(date(2025, 12, 25)).unwrap();
        assert!(!season.holy_family_transferred);
        assert_eq!(find(&season.entries, "holy-family").unwrap().date, date(2025, 12, 28));
        assert_eq!(find(&season.entries, "epiphany").unwrap().date, date(2026, 1, 4));
        assert_eq!(find(&season.entries, "baptism").unwrap().date, date(2026, 1, 11));
        assert_eq!(season.baptism, date(2026, 1, 11));
        assert_eq!(season.entries.len(), 7);
    }

    #[test]
    fn test_christmas_on_sunday() {
        // Christmas 2022 is a Sunday
        let season = christmas(date(2022, 12, 25)).unwrap();
        assert!(season.holy_family_transferred);
        assert!(find(&season.entries, "holy-family").is_none());
        assert_eq!(find(&season.entries, "epiphany").unwrap().date, date(2023, 1, 1));
        assert_eq!(find(&season.entries, "baptism").unwrap().date, date(2023, 1, 8));
        assert_eq!(season.baptism, date(2023, 1, 8));
        assert_eq!(season.entries.len(), 6);
    }

    #[test]
    fn test_christmas_masses_share_dates() {
        let season = christmas(date(2025, 12, 25)).unwrap();
        let eve = find(&season.entries, "christmas-eve").unwrap();
        let midnight = find(&season.entries, "christmas-midnight").unwrap();
        let dawn = find(&season.entries, "christmas-dawn").unwrap();
        let day = find(&season.entries, "christmas-day").unwrap();
        assert_eq!(eve.date, date(2025, 12, 24));
        assert_eq!(eve.date, midnight.date);
        assert_eq!(dawn.date, date(2025, 12, 25));
        assert_eq!(dawn.date, day.date);
    }

    #[test]
    fn test_lent_2026() {
        let season = lent(date(2026, 4, 5)).unwrap();
        assert_eq!(season.ash_wednesday, date(2026, 2, 18));
        assert_eq!(find(&season.entries, "lent01").unwrap().date, date(2026, 2, 22));
        let palm = find(&season.entries, "palm-sunday").unwrap();
        assert_eq!(palm.date, date(2026, 3, 29));
        assert_eq!(palm.path.to_string(), "holy-week/palm-sunday.qmd");
        assert!(find(&season.entries, "lent06").is_none());
        assert_eq!(find(&season.entries, "ash-wednesday").unwrap().path.grouping(), "lent");
    }

    #[test]
    fn test_lent_sundays_and_triduum() {
        let mut easter_day = date(2026, 3, 22);
        while easter_day <= date(2026, 4, 25) {
            let season = lent(easter_day).unwrap();
            let sundays = season
                .entries
                .iter()
                .filter(|e| e.date.weekday() == Weekday::Sun)
                .count();
            assert_eq!(sundays, 6);
            assert_eq!(season.ash_wednesday.weekday(), Weekday::Wed);

            let vigil = find(&season.entries, "easter-vigil").unwrap().date;
            let friday = find(&season.entries, "good-friday").unwrap().date;
            let thursday = find(&season.entries, "holy-thursday").unwrap().date;
            assert_eq!(vigil, easter_day - Days::new(1));
            assert_eq!(friday, vigil - Days::new(1));
            assert_eq!(thursday, friday - Days::new(1));
            easter_day = easter_day.checked_add_days(Days::new(7)).unwrap();
        }
    }

    #[test]
    fn test_easter_transferred_ascension() {
        let season = easter(date(2026, 4, 5), false).unwrap();
        assert!(find(&season.entries, "easter07").is_none());
        assert_eq!(find(&season.entries, "ascension").unwrap().date, date(2026, 5, 17));
        assert_eq!(season.pentecost, date(2026, 5, 24));
        assert_eq!(find(&season.entries, "holy-trinity").unwrap().date, date(2026, 5, 31));
        assert_eq!(season.corpus_christi, date(2026, 6, 7));
        assert!(find(&season.entries, "easter08").is_none());
        assert!(find(&season.entries, "easter10").is_none());
    }

    #[test]
    fn test_easter_ascension_thursday() {
        let season = easter(date(2026, 4, 5), true).unwrap();
        assert_eq!(find(&season.entries, "easter07").unwrap().date, date(2026, 5, 17));
        let ascension = find(&season.entries, "ascension").unwrap();
        assert_eq!(ascension.date, date(2026, 5, 14));
        assert_eq!(ascension.date.weekday(), Weekday::Thu);
    }

    #[test]
    fn test_easter_numbered_sundays() {
        let season = easter(date(2026, 4, 5), true).unwrap();
        let numbered: Vec<&str> = season
            .entries
            .iter()
            .filter(|e| e.key.week().is_some())
            .map(|e| e.key.as_str())
            .collect();
        assert_eq!(
            numbered,
            ["easter02", "easter03", "easter04", "easter05", "easter06", "easter07"]
        );
    }

    #[test]
    fn test_pentecost_vigils() {
        let season = easter(date(2026, 4, 5), false).unwrap();
        let vigil = find(&season.entries, "pentecost-vigil").unwrap();
        let extended = find(&season.entries, "pentecost-vigil-extended").unwrap();
        assert_eq!(vigil.date, date(2026, 5, 23));
        assert_eq!(vigil.date, extended.date);
        assert_eq!(extended.path.to_string(), "easter/pentecost-vigil-extended.qmd");
    }

    #[test]
    fn test_ordinary_time_2026() {
        let anchors = OrdinaryTimeAnchors {
            baptism:        date(2026, 1, 11),
            ash_wednesday:  date(2026, 2, 18),
            corpus_christi: date(2026, 6, 7),
            next_christmas: date(2026, 12, 25),
        };
        let ot = ordinary_time(&anchors).unwrap();
        assert_eq!(ot.christ_the_king, date(2026, 11, 22));

        let keys: Vec<&str> = ot.entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(&keys[..5], ["ot02", "ot03", "ot04", "ot05", "ot06"]);
        assert_eq!(keys[5], "ot11");
        assert_eq!(keys.last().copied(), Some("ot33"));
        assert_eq!(find(&ot.entries, "ot06").unwrap().date, date(2026, 2, 15));
        assert_eq!(find(&ot.entries, "ot11").unwrap().date, date(2026, 6, 14));
        assert_eq!(find(&ot.entries, "ot33").unwrap().date, date(2026, 11, 15));
        assert_eq!(
            find(&ot.entries, "ot33").unwrap().path.to_string(),
            "ordinary-time/ot33.qmd"
        );
    }

    #[test]
    fn test_ordinary_time_rejects_inverted_span() {
        let anchors = OrdinaryTimeAnchors {
            baptism:        date(2026, 3, 1),
            ash_wednesday:  date(2026, 2, 18),
            corpus_christi: date(2026, 6, 7),
            next_christmas: date(2026, 12, 25),
        };
        let result = ordinary_time(&anchors);
        assert!(matches!(
            result,
            Err(CalendarError::InconsistentSeasonSpan {
                season: Season::OrdinaryTime,
                ..
            })
        ));
    }
}
