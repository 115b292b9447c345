//! Static game-data reference tables.
//!
//! The reference file is a large JSON document; only the ship, FSD, Guardian
//! booster and engineering tables are modelled. Module lookups compare
//! identifiers case-insensitively because the reference data uses mixed-case
//! symbols while the journal reports lower-case items.

use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::Result;

/// Parsed reference dataset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReferenceData {
    #[serde(default)]
    ships: BTreeMap<String, ShipEntry>,
    #[serde(default)]
    modules: ModuleTables,
    #[serde(default)]
    modifications: ModificationTables,
    #[serde(skip)]
    source: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ShipEntry {
    #[serde(default)]
    properties: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ModuleTables {
    #[serde(default)]
    standard: StandardModules,
    #[serde(default)]
    internal: InternalModules,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct StandardModules {
    #[serde(default)]
    fsd: Vec<FsdSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct InternalModules {
    #[serde(default)]
    gfsb: Vec<BoosterSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ModificationTables {
    #[serde(default)]
    blueprints: BTreeMap<String, Value>,
    #[serde(default, rename = "modifierActions")]
    modifier_actions: BTreeMap<String, Value>,
}

/// Static frame shift drive specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FsdSpec {
    #[serde(default)]
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optmass: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxfuel: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuelmul: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuelpower: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Static Guardian FSD booster specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoosterSpec {
    #[serde(default)]
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jumpboost: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ReferenceData {
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "reading reference data");
        let file = fs::File::open(path)?;
        let mut reference = Self::from_reader(BufReader::new(file))?;
        reference.source = Some(path.to_path_buf());
        Ok(reference)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let reference: Self = serde_json::from_reader(reader)?;
        debug!(
            ships = reference.ships.len(),
            fsds = reference.modules.standard.fsd.len(),
            boosters = reference.modules.internal.gfsb.len(),
            blueprints = reference.modifications.blueprints.len(),
            "loaded reference data"
        );
        Ok(reference)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Self::from_reader(text.as_bytes())
    }

    /// Base properties of a ship. Exact key match first, then case-insensitive.
    pub fn ship_properties(&self, ship: &str) -> Option<&Value> {
        self.ships
            .get(ship)
            .or_else(|| {
                self.ships
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(ship))
                    .map(|(_, entry)| entry)
            })
            .map(|entry| &entry.properties)
    }

    /// First FSD specification whose symbol matches `item`, ignoring case.
    pub fn fsd_spec(&self, item: &str) -> Option<&FsdSpec> {
        let item = normalize_symbol(item);
        self.modules
            .standard
            .fsd
            .iter()
            .find(|spec| normalize_symbol(&spec.symbol) == item)
    }

    /// First Guardian booster specification whose symbol matches `item`, ignoring case.
    pub fn booster_spec(&self, item: &str) -> Option<&BoosterSpec> {
        let item = normalize_symbol(item);
        self.modules
            .internal
            .gfsb
            .iter()
            .find(|spec| normalize_symbol(&spec.symbol) == item)
    }

    pub fn blueprint(&self, name: &str) -> Option<&Value> {
        self.modifications.blueprints.get(name)
    }

    pub fn experimental_effect(&self, name: &str) -> Option<&Value> {
        self.modifications.modifier_actions.get(name)
    }

    /// Get the source path if the dataset was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn normalize_symbol(symbol: &str) -> String {
    symbol.to_lowercase()
}
