/// Earliest supported year of Easter (first full Gregorian year)
pub const MIN_YEAR: i32 = 1583;
/// Latest supported year of Easter (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Easter never falls before March 22...
pub const EASTER_EARLIEST: (u32, u32) = (3, 22);
/// ...or after April 25
pub const EASTER_LATEST: (u32, u32) = (4, 25);

/// Month number for November
pub const NOVEMBER: u32 = 11;
/// Month number for December
pub const DECEMBER: u32 = 12;
/// Day of the month of Christmas
pub const CHRISTMAS_DAY: u32 = 25;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Separator between a document's grouping and its stem
pub const PATH_SEPARATOR: char = '/';
/// Extension of every liturgy document
pub const DOCUMENT_EXTENSION: &str = "qmd";

pub(crate) const DAYS_IN_WEEK: u64 = 7;

/// Sundays of Advent, always four
pub const ADVENT_SUNDAYS: u32 = 4;
/// Sundays walked back from Easter: five of Lent plus Palm Sunday
pub const LENT_SUNDAYS: u32 = 6;
/// Sundays walked forward from Easter: Easter 2..7, Pentecost, Trinity, Corpus Christi
pub const EASTER_SUNDAYS: u32 = 9;
/// Week number of the first Sunday after Easter Sunday
pub const EASTER_FIRST_WEEK: u32 = 2;
/// Ordinary Time starts counting at week two after the Baptism of the Lord
pub const OT_FIRST_WEEK: u32 = 2;
/// The Sunday before Christ the King is always the thirty-third of Ordinary Time
pub const OT_LAST_WEEK: u32 = 33;
/// Christ the King is the fifth Sunday before Christmas
pub const CHRIST_THE_KING_SUNDAYS_BEFORE_CHRISTMAS: u32 = 5;

/// Ash Wednesday is four days before the first Sunday of Lent
pub const ASH_WEDNESDAY_OFFSET_DAYS: u64 = 4;
/// Ascension Thursday, the fortieth day of Easter counting Easter itself
pub const ASCENSION_OFFSET_DAYS: u64 = 39;
/// Sacred Heart, the Friday after the second Sunday after Pentecost
pub const SACRED_HEART_OFFSET_DAYS: u64 = 19;
/// Thanksgiving is the fourth Thursday of November
pub const THANKSGIVING_WEEK: u8 = 4;

/// Labels prefixed to numbered Sundays
pub const ADVENT_LABEL: &str = "advent";
pub const LENT_LABEL: &str = "lent";
pub const EASTER_LABEL: &str = "easter";
pub const OT_LABEL: &str = "ot";

/// Reference years for the Sunday lectionary cycles A, B and C
pub const CYCLE_A_YEAR: i32 = 2020;
pub(crate) const LECTIONARY_CYCLE_LEN: i32 = 3;

/// Stable feast keys referenced by the season builders, the registry and the annotator.
pub mod keys {
    pub const CHRISTMAS_EVE: &str = "christmas-eve";
    pub const CHRISTMAS_MIDNIGHT: &str = "christmas-midnight";
    pub const CHRISTMAS_DAWN: &str = "christmas-dawn";
    pub const CHRISTMAS_DAY: &str = "christmas-day";
    pub const HOLY_FAMILY: &str = "holy-family";
    pub const EPIPHANY: &str = "epiphany";
    pub const BAPTISM: &str = "baptism";
    pub const MARY_MOTHER_OF_GOD: &str = "mary-mother-of-god";
    pub const IMMACULATE_CONCEPTION: &str = "immaculate-conception";

    pub const ASH_WEDNESDAY: &str = "ash-wednesday";
    pub const PALM_SUNDAY: &str = "palm-sunday";
    pub const HOLY_THURSDAY: &str = "holy-thursday";
    pub const GOOD_FRIDAY: &str = "good-friday";
    pub const EASTER_VIGIL: &str = "easter-vigil";

    pub const EASTER: &str = "easter";
    pub const ASCENSION: &str = "ascension";
    pub const PENTECOST: &str = "pentecost";
    pub const PENTECOST_VIGIL: &str = "pentecost-vigil";
    pub const PENTECOST_VIGIL_EXTENDED: &str = "pentecost-vigil-extended";
    pub const HOLY_TRINITY: &str = "holy-trinity";
    pub const CORPUS_CHRISTI: &str = "corpus-christi";

    pub const SACRED_HEART: &str = "sacred-heart";
    pub const CHRIST_THE_KING: &str = "christ-the-king";
    pub const THANKSGIVING: &str = "thanksgiving";
    pub const ALL_SAINTS: &str = "all-saints";
    pub const ALL_SOULS: &str = "all-souls";
    pub const ASSUMPTION: &str = "assumption";
    pub const ASSUMPTION_VIGIL: &str = "assumption-vigil";

    /// Substring marking a vigil liturgy
    pub const VIGIL_MARKER: &str = "vigil";
}

/// Output groupings (document subdirectories)
pub mod groupings {
    pub const ADVENT: &str = "advent";
    pub const CHRISTMAS: &str = "christmas";
    pub const LENT: &str = "lent";
    pub const HOLY_WEEK: &str = "holy-week";
    pub const EASTER: &str = "easter";
    pub const FEASTS: &str = "feasts";
    pub const ORDINARY_TIME: &str = "ordinary-time";
}
