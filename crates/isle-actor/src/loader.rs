//! CSV schedule-entry loader.
//!
//! # CSV format
//!
//! One row per named schedule entry.  Entries contain `/` and spaces, so
//! quote them as usual for CSV:
//!
//! ```csv
//! actor,key,entry
//! Leah,GIRemainder,"1800 Town 10 10/1900 LeahHouse 5 6 2"
//! Leah,GIRemainder_rain,"1800 LeahHouse 5 6"
//! Leah,Saloon_Replacement,"9 9 2"
//! ```
//!
//! Actor names are kept as written; a repeated `(actor, key)` pair is an
//! error rather than a silent overwrite.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::ActorError;

/// Actor name → (entry key → raw entry).
pub type EntryTables = BTreeMap<String, BTreeMap<String, String>>;

#[derive(Deserialize)]
struct EntryRecord {
    actor: String,
    key:   String,
    entry: String,
}

/// Load per-actor schedule-entry tables from a CSV file.
pub fn load_entries_csv(path: &Path) -> Result<EntryTables, ActorError> {
    let file = std::fs::File::open(path).map_err(ActorError::Io)?;
    load_entries_reader(file)
}

/// Like [`load_entries_csv`] but accepts any `Read` source.
pub fn load_entries_reader<R: Read>(reader: R) -> Result<EntryTables, ActorError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut tables = EntryTables::new();

    for result in csv_reader.deserialize::<EntryRecord>() {
        let row = result.map_err(|e| ActorError::Parse(e.to_string()))?;
        let actor = row.actor.trim().to_string();
        let key = row.key.trim().to_string();
        if actor.is_empty() || key.is_empty() {
            return Err(ActorError::Parse("actor and key must be non-empty".into()));
        }
        match tables.entry(actor.clone()).or_default().entry(key) {
            Entry::Occupied(slot) => {
                return Err(ActorError::Parse(format!(
                    "duplicate entry {:?} for {actor:?}",
                    slot.key()
                )));
            }
            Entry::Vacant(slot) => {
                slot.insert(row.entry);
            }
        }
    }

    Ok(tables)
}
