//! fsdrange library entry points.
//!
//! This crate reads a ship loadout from a game journal, matches its frame
//! shift drive and Guardian booster against static reference data, and
//! resolves the parameters range-calculation tooling needs. The CLI should
//! only depend on the functions exported here.
//!

pub mod error;
pub mod journal;
pub mod loadout;
pub mod params;
pub mod paths;
pub mod range;
pub mod reference;
pub mod resolver;

pub use error::{Error, Result};
pub use journal::{latest_journal_in, Journal};
pub use loadout::{Engineering, FuelCapacity, Loadout, Modifier, Module};
pub use params::{FsdParameters, MaxFuelPerJump};
pub use paths::{resolve_journal_path, resolve_reference_path};
pub use range::{estimate_jump_range, JumpConditions};
pub use reference::{BoosterSpec, FsdSpec, ReferenceData};
pub use resolver::{
    resolve, supercharge_multiplier, FsdResolution, LookupPolicy, MaxFuelPolicy, ResolverOptions,
};
