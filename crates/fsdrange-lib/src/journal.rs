//! Journal loading and event lookup.
//!
//! The game writes one JSON event per line; exported journals are sometimes a
//! single JSON array instead. Both layouts are accepted.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::loadout::Loadout;

/// Event kind of the loadout snapshot.
pub const LOADOUT_EVENT: &str = "Loadout";

const JOURNAL_PREFIX: &str = "Journal.";

/// Ordered sequence of journal events.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    events: Vec<Value>,
    source: Option<PathBuf>,
}

impl Journal {
    /// Load a journal from a file, or from the newest journal in a directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file_path = if path.is_dir() {
            latest_journal_in(path)?
        } else {
            path.to_path_buf()
        };

        debug!(path = %file_path.display(), "reading journal");
        let file = fs::File::open(&file_path)?;
        let mut journal = Self::from_reader(file)?;
        journal.source = Some(file_path);
        Ok(journal)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Parse journal text as a JSON array or as newline-delimited JSON.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim_start_matches('\u{feff}').trim_start();
        let events = if trimmed.starts_with('[') {
            serde_json::from_str::<Vec<Value>>(trimmed)?
        } else {
            let mut events = Vec::new();
            for (index, line) in trimmed.lines().enumerate() {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let event = serde_json::from_str(line).map_err(|source| {
                    Error::InvalidJournalLine {
                        line: index + 1,
                        source,
                    }
                })?;
                events.push(event);
            }
            events
        };

        Ok(Self {
            events,
            source: None,
        })
    }

    pub fn events(&self) -> &[Value] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The file this journal was read from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// First event of the given kind, in journal order.
    pub fn first_event(&self, kind: &str) -> Option<&Value> {
        self.events
            .iter()
            .find(|event| event.get("event").and_then(Value::as_str) == Some(kind))
    }

    /// The first `Loadout` event, deserialized.
    ///
    /// "First" is positional: timestamps are not consulted.
    pub fn first_loadout(&self) -> Result<Option<Loadout>> {
        let Some(event) = self.first_event(LOADOUT_EVENT) else {
            return Ok(None);
        };
        let loadout = serde_json::from_value::<Loadout>(event.clone()).map_err(|err| {
            Error::InvalidRecord {
                kind: LOADOUT_EVENT,
                message: err.to_string(),
            }
        })?;
        Ok(Some(loadout))
    }
}

/// Pick the journal file with the greatest name in `dir`.
///
/// Journal file names embed a sortable timestamp, so the greatest name is the
/// most recent session.
pub fn latest_journal_in(dir: &Path) -> Result<PathBuf> {
    let mut latest: Option<PathBuf> = None;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || !is_journal_file(&path) {
            continue;
        }
        if latest
            .as_ref()
            .map_or(true, |current| path.file_name() > current.file_name())
        {
            latest = Some(path);
        }
    }

    latest.ok_or_else(|| Error::NoJournalFound {
        dir: dir.to_path_buf(),
    })
}

fn is_journal_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.starts_with(JOURNAL_PREFIX) && (name.ends_with(".log") || name.ends_with(".json"))
}
