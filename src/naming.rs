//! Human-readable observance names.

use crate::consts::OT_LABEL;
use crate::types::FeastKey;

/// Canonical titles that do not derive cleanly from their key.
static NAME_OVERRIDES: [(&str, &str); 13] = [
    ("epiphany", "Epiphany of the Lord"),
    ("mary-mother-of-god", "Mary, Mother of God"),
    ("baptism", "Baptism of the Lord"),
    ("presentation", "Presentation of the Lord"),
    ("stjoseph", "Saint Joseph"),
    ("nativity-john-baptist", "Nativity of John the Baptist"),
    ("peter-paul", "Saints Peter and Paul"),
    ("annunciation", "Annunciation of the Lord"),
    ("ascension", "Ascension of the Lord"),
    ("transfiguration", "Transfiguration of the Lord"),
    ("holy-cross", "Exaltation of the Holy Cross"),
    ("john-lateran", "Dedication of the Lateran Basilica"),
    ("sacred-heart", "Sacred Heart of Jesus"),
];

/// Words kept lower-case inside a title.
const SMALL_WORDS: [&str; 19] = [
    "a", "an", "and", "as", "at", "but", "by", "en", "for", "if", "in", "of", "on", "or", "the",
    "to", "v", "via", "vs",
];

const UNITS: [&str; 10] = [
    "", "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
];
const TEENS: [&str; 10] = [
    "tenth",
    "eleventh",
    "twelfth",
    "thirteenth",
    "fourteenth",
    "fifteenth",
    "sixteenth",
    "seventeenth",
    "eighteenth",
    "nineteenth",
];
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];
const TENS_ORDINAL: [&str; 10] = [
    "",
    "",
    "twentieth",
    "thirtieth",
    "fortieth",
    "fiftieth",
    "sixtieth",
    "seventieth",
    "eightieth",
    "ninetieth",
];

/// Display name of an observance.
///
/// Numbered weeks read "<Ordinal> Sunday in <Season>"; other keys are
/// title-cased word by word unless they carry a canonical title.
pub fn display_name(key: &FeastKey) -> String {
    let numbered = key
        .week()
        .and_then(|(label, week)| ordinal_word(week).map(|ordinal| (label, ordinal)));
    if let Some((label, ordinal)) = numbered {
        let season = if label == OT_LABEL {
            "Ordinary Time".to_owned()
        } else {
            title_case(&label.replace('-', " "))
        };
        return format!("{} Sunday in {season}", title_case(&ordinal));
    }

    NAME_OVERRIDES
        .iter()
        .find(|(overridden, _)| key == overridden)
        .map_or_else(|| title_case(&key.replace('-', " ")), |(_, name)| (*name).to_owned())
}

/// English ordinal for `1..=99`, e.g. `thirty-third`.
pub fn ordinal_word(n: u32) -> Option<String> {
    let (tens, units) = ((n / 10) as usize, (n % 10) as usize);
    match (tens, units) {
        (0, 0) | (10.., _) => None,
        (0, units) => Some(UNITS[units].to_owned()),
        (1, units) => Some(TEENS[units].to_owned()),
        (tens, 0) => Some(TENS_ORDINAL[tens].to_owned()),
        (tens, units) => Some(format!("{}-{}", TENS[tens], UNITS[units])),
    }
}

/// Title-cases space-separated words, keeping small words lower-case except
/// at the start. Hyphenated words are capitalized on both sides.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i > 0 && SMALL_WORDS.contains(&lower.as_str()) {
                lower
            } else {
                lower.split('-').map(capitalize).collect::<Vec<_>>().join("-")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
