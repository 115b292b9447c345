//! Jump-range estimation from resolved FSD parameters.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::params::FsdParameters;

/// Ship state for a single jump.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct JumpConditions {
    /// Fuel in the main tank in tonnes. `None` means a full tank.
    pub fuel_in_tank: Option<f64>,
    /// Cargo mass in tonnes.
    pub cargo_mass: f64,
    /// Whether the jump is supercharged by a neutron star or white dwarf.
    pub supercharged: bool,
}

/// Estimate the jump range in light-years.
///
/// Formula:
/// range = (optimal_mass / mass) × (fuel / fuel_multiplier) ^ (1 / fuel_power)
///
/// where `mass` is base mass plus fuel and cargo, and `fuel` is capped at the
/// maximum fuel per jump. A supercharge multiplies the drive's range; the
/// Guardian booster adds its flat bonus afterwards.
pub fn estimate_jump_range(params: &FsdParameters, conditions: &JumpConditions) -> Result<f64> {
    let optimal_mass = required(params.optimal_mass, "optimal_mass")?;
    let max_fuel = required(
        params.max_fuel_per_jump.as_ref().and_then(|m| m.as_value()),
        "max_fuel_per_jump",
    )?;
    let fuel_multiplier = required(params.fuel_multiplier, "fuel_multiplier")?;
    let fuel_power = required(params.fuel_power, "fuel_power")?;

    let fuel_in_tank = conditions.fuel_in_tank.unwrap_or(params.tank_size);
    if !fuel_in_tank.is_finite() || fuel_in_tank < 0.0 {
        return Err(Error::InvalidConditions {
            message: format!("fuel must be finite and non-negative, got {}", fuel_in_tank),
        });
    }
    if fuel_in_tank > params.tank_size {
        return Err(Error::InvalidConditions {
            message: format!(
                "fuel {} exceeds main tank size {}",
                fuel_in_tank, params.tank_size
            ),
        });
    }
    if !conditions.cargo_mass.is_finite() || conditions.cargo_mass < 0.0 {
        return Err(Error::InvalidConditions {
            message: format!(
                "cargo mass must be finite and non-negative, got {}",
                conditions.cargo_mass
            ),
        });
    }
    if fuel_multiplier <= 0.0 || fuel_power <= 0.0 {
        return Err(Error::InvalidConditions {
            message: "fuel multiplier and fuel power must be positive".to_string(),
        });
    }

    let mass = params.base_mass + fuel_in_tank + conditions.cargo_mass;
    if !mass.is_finite() || mass <= 0.0 {
        return Err(Error::InvalidConditions {
            message: format!("computed mass must be finite and positive, got {}", mass),
        });
    }

    let fuel = fuel_in_tank.min(max_fuel);
    let mut range = (optimal_mass / mass) * (fuel / fuel_multiplier).powf(1.0 / fuel_power);
    if conditions.supercharged {
        range *= f64::from(params.supercharge_multiplier);
    }
    Ok(range + params.range_boost.unwrap_or(0.0))
}

fn required(value: Option<f64>, name: &'static str) -> Result<f64> {
    value.ok_or(Error::MissingParameter { name })
}
