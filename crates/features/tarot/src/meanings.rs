//! Loader for the on-disk meanings resource.
//!
//! The resource is a JSON array of records keyed by asset key. It is read
//! exactly once, at slice initialization. Failure to read or parse it is a
//! degrade path, not a boot failure: the loader logs a warning and returns
//! an empty map so the deck falls back to placeholder meanings.

use crate::catalog;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Upright and reversed meaning texts for one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meaning {
    pub upright: String,
    pub reversed: String,
}

/// Meanings keyed by asset key.
pub type MeaningMap = HashMap<String, Meaning>;

/// One record of the resource file.
#[derive(Debug, Deserialize)]
struct MeaningRecord {
    /// Asset key, joining the record to the catalog.
    carta: String,
    /// Meaning when the card is drawn upright.
    normal: String,
    /// Meaning when the card is drawn reversed.
    invertida: String,
}

/// Reads and parses the meanings resource.
///
/// Never fails: an absent, unreadable, or malformed resource yields an
/// empty map and a diagnostic, and the service keeps booting.
#[must_use]
pub fn load(path: &Path) -> MeaningMap {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(
                path = %path.display(),
                "Meanings resource unreadable, cards will use placeholder meanings: {e}"
            );
            return MeaningMap::default();
        }
    };

    let records: Vec<MeaningRecord> = match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(e) => {
            warn!(
                path = %path.display(),
                "Meanings resource malformed, cards will use placeholder meanings: {e}"
            );
            return MeaningMap::default();
        }
    };

    let mut meanings = MeaningMap::with_capacity(records.len());
    for record in records {
        if catalog::find(&record.carta).is_none() {
            warn!(asset = %record.carta, "Meanings resource names a card the catalog does not know");
        }
        meanings.insert(
            record.carta,
            Meaning { upright: record.normal, reversed: record.invertida },
        );
    }

    meanings
}
