//! Merging fixed feasts into the movable table.
//!
//! The join key is the calendar date: a fixed row replaces every movable row
//! on its date outright. Rows are otherwise identified by key, never by date,
//! so alternate Masses sharing a date (Christmas Eve and Midnight) survive.

use crate::prelude::*;
use crate::seasons::Entry;
use crate::types::FeastKey;
use std::collections::BTreeSet;
use tracing::debug;

/// The movable table after fixed-feast precedence has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MergedTable {
    /// Rows in date order; same-date rows keep their emission order
    pub entries: Vec<Entry>,
    /// Movable rows that lost their date to a fixed feast
    pub superseded: Vec<(FeastKey, NaiveDate)>,
}

impl MergedTable {
    /// Date of a superseded movable row, if `key` lost its date.
    pub fn superseded_date(&self, key: &str) -> Option<NaiveDate> {
        self.superseded
            .iter()
            .find(|(superseded, _)| superseded == key)
            .map(|(_, date)| *date)
    }
}

impl From<Vec<Entry>> for MergedTable {
    fn from(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            superseded: Vec::new(),
        }
    }
}

/// Applies fixed-feast precedence to the union of every movable table.
///
/// Merging is idempotent: merging the same `fixed` rows into an already
/// merged table yields the same rows, and rows superseded by an earlier merge
/// stay recorded.
pub(crate) fn merge(table: impl Into<MergedTable>, fixed: &[Entry]) -> MergedTable {
    let MergedTable {
        entries: movable,
        mut superseded,
    } = table.into();
    let fixed_dates: BTreeSet<NaiveDate> = fixed.iter().map(|entry| entry.date).collect();

    let mut entries: Vec<Entry> = Vec::with_capacity(movable.len() + fixed.len());
    for entry in movable {
        if !fixed_dates.contains(&entry.date) {
            entries.push(entry);
        } else if !fixed.contains(&entry) {
            debug!(key = %entry.key, date = %entry.date, "movable observance superseded by fixed feast");
            superseded.push((entry.key, entry.date));
        }
    }
    entries.extend_from_slice(fixed);
    entries.sort_by_key(|entry| entry.date);

    MergedTable {
        entries,
        superseded,
    }
}
