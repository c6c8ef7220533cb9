use crate::consts::{
    DATE_SEPARATOR, DOCUMENT_EXTENSION, EASTER_EARLIEST, EASTER_LATEST, MAX_YEAR, MIN_YEAR,
    PATH_SEPARATOR, keys::VIGIL_MARKER,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors produced while validating date input or parsing the crate's string forms.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Invalid date format: {}", _0)]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", _0, MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[display(fmt = "Easter must fall on a Sunday, {} is a {}", _0, "_0.weekday()")]
    NotSunday(NaiveDate),
    #[display(fmt = "Easter must fall between March 22 and April 25, found {}", _0)]
    OutOfRange(NaiveDate),
    #[display(fmt = "Invalid priority: {} (must be 0-2)", _0)]
    InvalidPriority(u8),
}

impl std::error::Error for ParseError {}

/// The civil date of Easter Sunday, validated to be a Sunday inside the
/// Gregorian Easter window (March 22 - April 25).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deref, Display)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[display(fmt = "{}", _0)]
pub struct EasterDate(NaiveDate);

impl EasterDate {
    /// Wraps a date after checking it can be Easter.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` outside `MIN_YEAR..=MAX_YEAR`,
    /// `ParseError::NotSunday` or `ParseError::OutOfRange` otherwise.
    pub fn new(date: NaiveDate) -> Result<Self, ParseError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            return Err(ParseError::InvalidYear(date.year()));
        }
        if date.weekday() != Weekday::Sun {
            return Err(ParseError::NotSunday(date));
        }
        let month_day = (date.month(), date.day());
        if month_day < EASTER_EARLIEST || month_day > EASTER_LATEST {
            return Err(ParseError::OutOfRange(date));
        }
        Ok(Self(date))
    }

    /// Builds Easter from its civil components.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDate` for a day that does not exist, and
    /// any error of [`EasterDate::new`].
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ParseError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ParseError::InvalidYear(year));
        }
        let date =
            NaiveDate::from_ymd_opt(year, month, day).ok_or(ParseError::InvalidDate { year, month, day })?;
        Self::new(date)
    }

    /// Returns the underlying date
    #[inline]
    pub const fn get(self) -> NaiveDate {
        self.0
    }

    /// Returns the civil year of Easter, which is the calendar's year
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Helper to parse a numeric component with better error messages
    fn parse_component<T: FromStr>(s: &str) -> Result<T, ParseError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for EasterDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {trimmed}"
            )));
        };

        Self::from_ymd(
            Self::parse_component(year)?,
            Self::parse_component(month)?,
            Self::parse_component(day)?,
        )
    }
}

impl TryFrom<String> for EasterDate {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EasterDate> for String {
    fn from(easter: EasterDate) -> Self {
        easter.to_string()
    }
}

/// Machine-readable identifier of an observance, e.g. `advent01` or `easter-vigil`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeastKey(String);

impl FeastKey {
    /// Key of a numbered Sunday, e.g. `("ot", 7)` gives `ot07`.
    pub fn numbered(label: &str, week: u32) -> Self {
        Self(format!("{label}{week:02}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for vigil liturgies, which are never celebrated on a Sunday.
    pub fn is_vigil(&self) -> bool {
        self.0.contains(VIGIL_MARKER)
    }

    /// Splits a numbered-week key into its season label and week number.
    ///
    /// Only keys ending in exactly two digits after a non-empty label qualify.
    pub fn week(&self) -> Option<(&str, u32)> {
        let split = self.0.len().checked_sub(2)?;
        if split == 0 || !self.0.is_char_boundary(split) {
            return None;
        }
        let (label, digits) = self.0.split_at(split);
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok().map(|week| (label, week))
    }
}

impl From<&str> for FeastKey {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for FeastKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for FeastKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FeastKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Liturgical season of an observance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    #[display(fmt = "advent")]
    Advent,
    #[display(fmt = "christmas")]
    Christmas,
    #[display(fmt = "lent")]
    Lent,
    #[display(fmt = "easter")]
    Easter,
    #[display(fmt = "ordinary-time")]
    OrdinaryTime,
}

/// Filtering tier: Sundays and holy days of obligation first, then notable
/// weekdays such as Ash Wednesday, then everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    #[display(fmt = "0")]
    Ordinary,
    #[display(fmt = "1")]
    Important,
    #[display(fmt = "2")]
    Obligation,
}

impl Priority {
    /// Returns the numeric tier (0, 1 or 2)
    #[inline]
    pub const fn get(self) -> u8 {
        match self {
            Self::Ordinary => 0,
            Self::Important => 1,
            Self::Obligation => 2,
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Ordinary),
            1 => Ok(Self::Important),
            2 => Ok(Self::Obligation),
            _ => Err(ParseError::InvalidPriority(value)),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.get()
    }
}

/// Where the liturgy document of an observance lives: a grouping
/// (subdirectory) and a file stem, rendered as `grouping/stem.qmd`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentPath {
    grouping: String,
    stem: String,
}

impl DocumentPath {
    pub fn new(grouping: &str, stem: &str) -> Self {
        Self {
            grouping: grouping.to_owned(),
            stem: stem.to_owned(),
        }
    }

    /// Returns the grouping (subdirectory) of the document
    pub fn grouping(&self) -> &str {
        &self.grouping
    }

    /// Returns the file stem of the document
    pub fn stem(&self) -> &str {
        &self.stem
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{PATH_SEPARATOR}{}.{DOCUMENT_EXTENSION}",
            self.grouping, self.stem
        )
    }
}

impl FromStr for DocumentPath {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (grouping, file) = trimmed
            .rsplit_once(PATH_SEPARATOR)
            .ok_or_else(|| ParseError::InvalidFormat(trimmed.to_owned()))?;
        let stem = file
            .strip_suffix(DOCUMENT_EXTENSION)
            .and_then(|rest| rest.strip_suffix('.'))
            .ok_or_else(|| ParseError::InvalidFormat(trimmed.to_owned()))?;
        if grouping.is_empty() || stem.is_empty() {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }
        Ok(Self::new(grouping, stem))
    }
}

impl Serialize for DocumentPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DocumentPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

/// Short day label used in the calendar output.
pub const fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tues",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thurs",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
