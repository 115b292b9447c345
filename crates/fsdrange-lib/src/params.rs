//! Resolved jump-range parameters and their textual form.

use std::fmt::Write;

use serde::Serialize;

use crate::loadout::Modifier;

/// Maximum fuel per jump as selected by the resolver.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MaxFuelPerJump {
    Value(f64),
    /// The engineering override record itself, kept whole.
    Override(Modifier),
}

impl MaxFuelPerJump {
    /// The numeric value, if this is not a raw override record.
    pub fn as_value(&self) -> Option<f64> {
        match self {
            MaxFuelPerJump::Value(value) => Some(*value),
            MaxFuelPerJump::Override(_) => None,
        }
    }
}

/// The nine parameters consumed by range-calculation tooling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FsdParameters {
    pub optimal_mass: Option<f64>,
    pub max_fuel_per_jump: Option<MaxFuelPerJump>,
    pub fuel_multiplier: Option<f64>,
    pub fuel_power: Option<f64>,
    pub tank_size: f64,
    pub base_mass: f64,
    pub range_boost: Option<f64>,
    pub internal_tank_size: f64,
    pub supercharge_multiplier: u8,
}

impl FsdParameters {
    /// Parameter names and formatted values in output order.
    pub fn entries(&self) -> [(&'static str, String); 9] {
        [
            ("optimal_mass", format_optional(self.optimal_mass)),
            ("max_fuel_per_jump", format_max_fuel(self.max_fuel_per_jump.as_ref())),
            ("fuel_multiplier", format_optional(self.fuel_multiplier)),
            ("fuel_power", format_optional(self.fuel_power)),
            ("tank_size", format_number(self.tank_size)),
            ("base_mass", format_number(self.base_mass)),
            ("range_boost", format_optional(self.range_boost)),
            ("internal_tank_size", format_number(self.internal_tank_size)),
            (
                "supercharge_multiplier",
                self.supercharge_multiplier.to_string(),
            ),
        ]
    }

    /// Render as `params["key"]="value"` lines.
    pub fn to_assignments(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.entries() {
            let _ = writeln!(out, "params[\"{key}\"]=\"{value}\"");
        }
        out
    }
}

/// Shortest round-trip form, so whole numbers print without a fraction.
pub fn format_number(value: f64) -> String {
    format!("{value}")
}

fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "null".to_string(), format_number)
}

fn format_max_fuel(value: Option<&MaxFuelPerJump>) -> String {
    match value {
        None => "null".to_string(),
        Some(MaxFuelPerJump::Value(value)) => format_number(*value),
        Some(MaxFuelPerJump::Override(record)) => {
            serde_json::to_string(record).unwrap_or_else(|_| "null".to_string())
        }
    }
}
