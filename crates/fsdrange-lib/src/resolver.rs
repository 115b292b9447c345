//! Frame shift drive parameter resolution.
//!
//! Combines the installed loadout, its engineering overrides and the static
//! reference tables into [`FsdParameters`]. Overrides win over reference
//! values; a loadout without a frame shift drive resolves to `None`.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::loadout::{Engineering, Loadout, Module, MAX_FUEL_LABEL, OPTIMAL_MASS_LABEL};
use crate::params::{FsdParameters, MaxFuelPerJump};
use crate::reference::{BoosterSpec, FsdSpec, ReferenceData};

/// FSD item that supercharges to six times its range instead of four.
pub const OVERCHARGE_MKII_ITEM: &str =
    "int_hyperdrive_overcharge_size8_class5_overchargebooster_mkii";

/// Supercharge multiplier for the overcharge Mk II drive.
pub const OVERCHARGE_MKII_MULTIPLIER: u8 = 6;

/// Supercharge multiplier for every other drive.
pub const DEFAULT_SUPERCHARGE_MULTIPLIER: u8 = 4;

/// How to react when a reference table has no entry for an installed record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupPolicy {
    /// Log a warning and leave dependent parameters null.
    #[default]
    Lenient,
    /// Fail with [`Error::ReferenceMismatch`].
    Strict,
}

/// Interpretation of a `MaxFuelPerJump` engineering override.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MaxFuelPolicy {
    /// Select the override record as a whole. Matches the historical output.
    #[default]
    Record,
    /// Use the override's value, falling back to the reference value when it
    /// is missing or zero.
    Value,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverOptions {
    pub lookup: LookupPolicy,
    pub max_fuel: MaxFuelPolicy,
}

/// Everything the resolver matched, plus the derived parameters.
#[derive(Debug, Clone)]
pub struct FsdResolution<'a> {
    pub loadout: &'a Loadout,
    pub fsd: &'a Module,
    pub booster: Option<&'a Module>,
    pub engineering: Option<&'a Engineering>,
    pub ship_properties: Option<&'a Value>,
    pub fsd_spec: Option<&'a FsdSpec>,
    pub booster_spec: Option<&'a BoosterSpec>,
    pub blueprint: Option<&'a Value>,
    pub experimental_effect: Option<&'a Value>,
    pub parameters: FsdParameters,
}

/// Supercharge multiplier for an FSD item. Exact match only.
pub fn supercharge_multiplier(item: &str) -> u8 {
    if item == OVERCHARGE_MKII_ITEM {
        OVERCHARGE_MKII_MULTIPLIER
    } else {
        DEFAULT_SUPERCHARGE_MULTIPLIER
    }
}

/// Resolve the FSD parameters of `loadout`.
///
/// Returns `Ok(None)` when the loadout has no frame shift drive; that is a
/// valid "nothing to compute" outcome, not an error.
pub fn resolve<'a>(
    loadout: &'a Loadout,
    reference: &'a ReferenceData,
    options: &ResolverOptions,
) -> Result<Option<FsdResolution<'a>>> {
    let Some(fsd) = loadout.frame_shift_drive() else {
        debug!(ship = %loadout.ship, "loadout has no frame shift drive");
        return Ok(None);
    };
    let booster = loadout.fsd_booster();
    let engineering = fsd.engineering.as_ref();

    let ship_properties = lookup(
        options.lookup,
        "ship",
        &loadout.ship,
        reference.ship_properties(&loadout.ship),
    )?;
    let fsd_spec = lookup(options.lookup, "fsd", &fsd.item, reference.fsd_spec(&fsd.item))?;
    let booster_spec = match booster {
        Some(module) => lookup(
            options.lookup,
            "gfsb",
            &module.item,
            reference.booster_spec(&module.item),
        )?,
        None => None,
    };
    let blueprint = match engineering.and_then(|e| e.blueprint_name.as_deref()) {
        Some(name) => lookup(options.lookup, "blueprint", name, reference.blueprint(name))?,
        None => None,
    };
    let experimental_effect = match engineering.and_then(|e| e.experimental_effect.as_deref()) {
        Some(name) => lookup(
            options.lookup,
            "modifierAction",
            name,
            reference.experimental_effect(name),
        )?,
        None => None,
    };

    let parameters = FsdParameters {
        optimal_mass: optimal_mass(engineering, fsd_spec),
        max_fuel_per_jump: max_fuel_per_jump(engineering, fsd_spec, options.max_fuel),
        fuel_multiplier: fsd_spec.and_then(|spec| spec.fuelmul),
        fuel_power: fsd_spec.and_then(|spec| spec.fuelpower),
        tank_size: loadout.fuel_capacity.main,
        base_mass: loadout.base_mass(),
        range_boost: booster_spec.and_then(|spec| spec.jumpboost),
        internal_tank_size: loadout.fuel_capacity.reserve,
        supercharge_multiplier: supercharge_multiplier(&fsd.item),
    };

    debug!(
        ship = %loadout.ship,
        fsd = %fsd.item,
        booster = booster.map(|m| m.item.as_str()).unwrap_or("none"),
        engineered = engineering.is_some(),
        "resolved fsd parameters"
    );

    Ok(Some(FsdResolution {
        loadout,
        fsd,
        booster,
        engineering,
        ship_properties,
        fsd_spec,
        booster_spec,
        blueprint,
        experimental_effect,
        parameters,
    }))
}

fn lookup<'a, T>(
    policy: LookupPolicy,
    table: &'static str,
    key: &str,
    found: Option<&'a T>,
) -> Result<Option<&'a T>> {
    if found.is_none() {
        match policy {
            LookupPolicy::Strict => {
                return Err(Error::ReferenceMismatch {
                    table,
                    key: key.to_string(),
                })
            }
            LookupPolicy::Lenient => {
                warn!(table, key, "no reference entry; dependent parameters will be null");
            }
        }
    }
    Ok(found)
}

/// Override value when present and non-zero, otherwise the reference value.
fn override_or(
    engineering: Option<&Engineering>,
    label: &str,
    fallback: Option<f64>,
) -> Option<f64> {
    engineering
        .and_then(|e| e.modifier(label))
        .and_then(|modifier| modifier.value)
        .filter(|value| *value != 0.0)
        .or(fallback)
}

fn optimal_mass(engineering: Option<&Engineering>, spec: Option<&FsdSpec>) -> Option<f64> {
    override_or(engineering, OPTIMAL_MASS_LABEL, spec.and_then(|s| s.optmass))
}

fn max_fuel_per_jump(
    engineering: Option<&Engineering>,
    spec: Option<&FsdSpec>,
    policy: MaxFuelPolicy,
) -> Option<MaxFuelPerJump> {
    let reference = spec.and_then(|s| s.maxfuel);
    match policy {
        MaxFuelPolicy::Record => match engineering.and_then(|e| e.modifier(MAX_FUEL_LABEL)) {
            Some(record) => {
                warn!(
                    "MaxFuelPerJump override selected as a whole record; \
                     use the value policy to emit its numeric value"
                );
                Some(MaxFuelPerJump::Override(record.clone()))
            }
            None => reference.map(MaxFuelPerJump::Value),
        },
        MaxFuelPolicy::Value => {
            override_or(engineering, MAX_FUEL_LABEL, reference).map(MaxFuelPerJump::Value)
        }
    }
}
