//! Annotated observances: season, name, weekday and priority.

use crate::consts::keys;
use crate::naming::display_name;
use crate::prelude::*;
use crate::resolve::MergedTable;
use crate::span::resolve_spans;
use crate::types::{DocumentPath, FeastKey, Priority, Season, weekday_label};
use crate::CalendarError;
use serde::{Deserialize, Serialize};

/// Holy days of obligation, always priority 2.
static HOLY_DAYS: [&str; 10] = [
    keys::IMMACULATE_CONCEPTION,
    keys::CHRISTMAS_EVE,
    keys::CHRISTMAS_MIDNIGHT,
    keys::CHRISTMAS_DAWN,
    keys::CHRISTMAS_DAY,
    keys::MARY_MOTHER_OF_GOD,
    keys::ASCENSION,
    keys::ASSUMPTION,
    keys::ASSUMPTION_VIGIL,
    keys::ALL_SAINTS,
];

/// Important days that are not holy days of obligation.
static IMPORTANT_DAYS: [&str; 6] = [
    keys::ASH_WEDNESDAY,
    keys::HOLY_THURSDAY,
    keys::GOOD_FRIDAY,
    keys::EASTER_VIGIL,
    keys::THANKSGIVING,
    keys::ALL_SOULS,
];

/// One row of the liturgical calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observance {
    date: NaiveDate,
    key: FeastKey,
    season: Season,
    name: String,
    weekday: Weekday,
    priority: Priority,
    path: DocumentPath,
}

impl Observance {
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub const fn key(&self) -> &FeastKey {
        &self.key
    }

    pub const fn season(&self) -> Season {
        self.season
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Short day label (`Mon`, `Tues`, ..., `Sun`)
    pub const fn weekday_label(&self) -> &'static str {
        weekday_label(self.weekday)
    }

    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Liturgy document of this observance
    pub const fn path(&self) -> &DocumentPath {
        &self.path
    }
}

/// Priority of a key on a given weekday.
pub fn priority(key: &str, weekday: Weekday) -> Priority {
    if weekday == Weekday::Sun || HOLY_DAYS.contains(&key) {
        Priority::Obligation
    } else if IMPORTANT_DAYS.contains(&key) {
        Priority::Important
    } else {
        Priority::Ordinary
    }
}

/// Attaches season, name, weekday and priority to every merged row.
pub(crate) fn annotate(table: MergedTable) -> Result<Vec<Observance>, CalendarError> {
    let spans = resolve_spans(&table)?;
    Ok(table
        .entries
        .into_iter()
        .enumerate()
        .map(|(position, entry)| {
            let season = spans
                .iter()
                .find(|span| span.contains(position))
                .map_or(Season::OrdinaryTime, |span| span.season());
            let weekday = entry.date.weekday();
            Observance {
                name: display_name(&entry.key),
                priority: priority(entry.key.as_str(), weekday),
                date: entry.date,
                key: entry.key,
                season,
                weekday,
                path: entry.path,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::groupings;
    use crate::resolve::merge;
    use crate::seasons::Entry;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_priority_tiers() {
        struct TestCase {
            key:      &'static str,
            weekday:  Weekday,
            expected: Priority,
        }

        let cases = [
            TestCase { key: "ot05", weekday: Weekday::Sun, expected: Priority::Obligation },
            TestCase { key: "all-saints", weekday: Weekday::Tue, expected: Priority::Obligation },
            TestCase { key: "assumption-vigil", weekday: Weekday::Fri, expected: Priority::Obligation },
            TestCase { key: "ash-wednesday", weekday: Weekday::Wed, expected: Priority::Important },
            TestCase { key: "thanksgiving", weekday: Weekday::Thu, expected: Priority::Important },
            TestCase { key: "all-souls", weekday: Weekday::Sun, expected: Priority::Obligation },
            TestCase { key: "sacred-heart", weekday: Weekday::Fri, expected: Priority::Ordinary },
            TestCase { key: "pentecost-vigil", weekday: Weekday::Sat, expected: Priority::Ordinary },
        ];

        for case in &cases {
            assert_eq!(
                priority(case.key, case.weekday),
                case.expected,
                "{} on {}",
                case.key,
                case.weekday
            );
        }
    }

    fn rows() -> Vec<Entry> {
        let advent = (0..4).map(|i| {
            Entry::new(
                date(2025, 11, 30) + Days::new(7 * i),
                &format!("advent0{}", i + 1),
                groupings::ADVENT,
            )
        });
        advent
            .chain([
                Entry::new(date(2025, 12, 24), "christmas-eve", groupings::CHRISTMAS),
                Entry::new(date(2026, 1, 11), "baptism", groupings::CHRISTMAS),
                Entry::new(date(2026, 1, 18), "ot02", groupings::ORDINARY_TIME),
                Entry::new(date(2026, 2, 18), "ash-wednesday", groupings::LENT),
                Entry::new(date(2026, 4, 3), "good-friday", groupings::HOLY_WEEK),
                Entry::new(date(2026, 4, 4), "easter-vigil", groupings::HOLY_WEEK),
                Entry::new(date(2026, 5, 24), "pentecost", groupings::EASTER),
                Entry::new(date(2026, 5, 31), "holy-trinity", groupings::FEASTS),
            ])
            .collect()
    }

    #[test]
    fn test_annotate_seasons_by_range() {
        let fixed = [
            Entry::with_stem(
                date(2025, 12, 8),
                "immaculate-conception",
                groupings::FEASTS,
                "dec08-immaculate-conception",
            ),
            Entry::with_stem(date(2026, 1, 1), "mary-mother-of-god", groupings::CHRISTMAS, "mary-mother-of-god"),
        ];
        let observances = annotate(merge(rows(), &fixed)).unwrap();
        let season_of = |key: &str| {
            observances
                .iter()
                .find(|o| o.key() == key)
                .map(Observance::season)
                .unwrap()
        };

        assert_eq!(season_of("advent01"), Season::Advent);
        assert_eq!(season_of("immaculate-conception"), Season::Advent);
        assert_eq!(season_of("mary-mother-of-god"), Season::Christmas);
        assert_eq!(season_of("baptism"), Season::Christmas);
        assert_eq!(season_of("ot02"), Season::OrdinaryTime);
        assert_eq!(season_of("good-friday"), Season::Lent);
        assert_eq!(season_of("easter-vigil"), Season::Easter);
        assert_eq!(season_of("pentecost"), Season::Easter);
        assert_eq!(season_of("holy-trinity"), Season::OrdinaryTime);
    }

    #[test]
    fn test_annotate_fields() {
        let observances = annotate(merge(rows(), &[])).unwrap();
        let ash = observances
            .iter()
            .find(|o| o.key() == "ash-wednesday")
            .unwrap();
        assert_eq!(ash.name(), "Ash Wednesday");
        assert_eq!(ash.weekday(), Weekday::Wed);
        assert_eq!(ash.weekday_label(), "Wed");
        assert_eq!(ash.priority(), Priority::Important);
        assert_eq!(ash.path().to_string(), "lent/ash-wednesday.qmd");

        let ot = observances.iter().find(|o| o.key() == "ot02").unwrap();
        assert_eq!(ot.name(), "Second Sunday in Ordinary Time");
        assert_eq!(ot.priority(), Priority::Obligation);
    }

    #[test]
    fn test_annotate_serde() {
        let observances = annotate(merge(rows(), &[])).unwrap();
        let json = serde_json::to_value(&observances[0]).unwrap();
        assert_eq!(json["date"], "2025-11-30");
        assert_eq!(json["key"], "advent01");
        assert_eq!(json["season"], "advent");
        assert_eq!(json["priority"], 2);
        assert_eq!(json["path"], "advent/advent01.qmd");
    }
}
