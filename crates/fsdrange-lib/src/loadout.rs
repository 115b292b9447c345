//! Typed views of the `Loadout` journal event.
//!
//! Only the fields the resolver consumes are modelled explicitly. Everything
//! else is kept in a flattened map so records can be dumped back out intact.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Slot name the game uses for the frame shift drive.
pub const FSD_SLOT: &str = "FrameShiftDrive";

/// Item prefix shared by every Guardian FSD booster size.
pub const GUARDIAN_BOOSTER_PREFIX: &str = "int_guardianfsdbooster";

/// Modifier label carrying an engineered optimal mass.
pub const OPTIMAL_MASS_LABEL: &str = "FSDOptimalMass";

/// Modifier label carrying an engineered maximum fuel per jump.
pub const MAX_FUEL_LABEL: &str = "MaxFuelPerJump";

/// Snapshot of a ship's installed modules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Loadout {
    pub ship: String,
    pub unladen_mass: f64,
    pub fuel_capacity: FuelCapacity,
    #[serde(default)]
    pub modules: Vec<Module>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FuelCapacity {
    pub main: f64,
    pub reserve: f64,
}

/// One installed ship component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Module {
    pub slot: String,
    pub item: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engineering: Option<Engineering>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Applied engineering state of a module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Engineering {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blueprint_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experimental_effect: Option<String>,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single engineered stat override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Modifier {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Loadout {
    /// First module mounted in the frame shift drive slot.
    pub fn frame_shift_drive(&self) -> Option<&Module> {
        self.modules.iter().find(|module| module.is_frame_shift_drive())
    }

    /// First Guardian FSD booster, if one is installed.
    pub fn fsd_booster(&self) -> Option<&Module> {
        self.modules.iter().find(|module| module.is_guardian_booster())
    }

    /// Unladen hull mass plus the reserve tank, which is always carried.
    pub fn base_mass(&self) -> f64 {
        self.unladen_mass + self.fuel_capacity.reserve
    }

    /// The loadout record without its module list.
    pub fn summary(&self) -> Value {
        let mut value = serde_json::to_value(self).unwrap_or(Value::Null);
        if let Value::Object(map) = &mut value {
            map.remove("Modules");
        }
        value
    }
}

impl Module {
    pub fn is_frame_shift_drive(&self) -> bool {
        self.slot == FSD_SLOT
    }

    pub fn is_guardian_booster(&self) -> bool {
        self.item.starts_with(GUARDIAN_BOOSTER_PREFIX)
    }
}

impl Engineering {
    /// First modifier with the given label.
    pub fn modifier(&self, label: &str) -> Option<&Modifier> {
        self.modifiers.iter().find(|modifier| modifier.label == label)
    }
}
