//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use fsdrange_lib::{Journal, Loadout, ReferenceData};
use serde_json::{json, Value};

/// Path to fixtures directory used by tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

#[allow(dead_code)]
pub fn fixture_journal_path() -> PathBuf {
    fixtures_dir().join("Journal.2025-12-06T173759.01.log")
}

#[allow(dead_code)]
pub fn fixture_journal() -> Journal {
    Journal::from_path(&fixture_journal_path()).expect("load fixture journal")
}

pub fn fixture_reference() -> ReferenceData {
    ReferenceData::from_path(&fixtures_dir().join("spansh.data.json"))
        .expect("load fixture reference data")
}

/// Build a loadout from a module list with a 400 t hull and 32 + 8 t of fuel.
#[allow(dead_code)]
pub fn loadout_with(modules: Value) -> Loadout {
    serde_json::from_value(json!({
        "event": "Loadout",
        "Ship": "python",
        "UnladenMass": 400.0,
        "FuelCapacity": { "Main": 32.0, "Reserve": 8.0 },
        "Modules": modules,
    }))
    .expect("valid loadout")
}
