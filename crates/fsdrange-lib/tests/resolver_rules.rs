mod common;

use fsdrange_lib::{
    resolve, Error, Journal, LookupPolicy, MaxFuelPerJump, MaxFuelPolicy, ResolverOptions,
};
use serde_json::json;

use common::{fixture_reference, loadout_with};

fn engineered_fsd(modifiers: serde_json::Value) -> serde_json::Value {
    json!({
        "Slot": "FrameShiftDrive",
        "Item": "int_hyperdrive_size5_class5",
        "Engineering": {
            "BlueprintName": "FSD_LongRange",
            "ExperimentalEffect": "special_fsd_heavy",
            "Modifiers": modifiers,
        }
    })
}

#[test]
fn journal_without_loadout_yields_nothing() {
    let journal = Journal::parse("{\"event\":\"Fileheader\"}\n{\"event\":\"Location\"}\n")
        .expect("valid journal");
    assert!(journal.first_loadout().expect("parse").is_none());
}

#[test]
fn loadout_without_fsd_yields_nothing() {
    let loadout = loadout_with(json!([
        { "Slot": "Armour", "Item": "python_armour_grade1" },
        { "Slot": "Slot02_Size5", "Item": "int_guardianfsdbooster_size5" }
    ]));
    let reference = fixture_reference();
    let resolution =
        resolve(&loadout, &reference, &ResolverOptions::default()).expect("no error");
    assert!(resolution.is_none());
}

#[test]
fn overcharge_mk2_supercharges_six_times() {
    let loadout = loadout_with(json!([{
        "Slot": "FrameShiftDrive",
        "Item": "int_hyperdrive_overcharge_size8_class5_overchargebooster_mkii"
    }]));
    let reference = fixture_reference();
    let resolution = resolve(&loadout, &reference, &ResolverOptions::default())
        .expect("no error")
        .expect("fsd present");
    assert_eq!(resolution.parameters.supercharge_multiplier, 6);
    assert_eq!(resolution.parameters.optimal_mass, Some(5250.0));
}

#[test]
fn optimal_mass_override_wins_when_non_zero() {
    let loadout = loadout_with(json!([engineered_fsd(json!([
        { "Label": "FSDOptimalMass", "Value": 1600.0, "OriginalValue": 1050.0 }
    ]))]));
    let reference = fixture_reference();
    let resolution = resolve(&loadout, &reference, &ResolverOptions::default())
        .expect("no error")
        .expect("fsd present");
    assert_eq!(resolution.parameters.optimal_mass, Some(1600.0));
}

#[test]
fn zero_or_missing_optimal_mass_override_falls_back_to_reference() {
    let reference = fixture_reference();
    for modifiers in [
        json!([{ "Label": "FSDOptimalMass", "Value": 0.0 }]),
        json!([{ "Label": "FSDOptimalMass" }]),
        json!([{ "Label": "Mass", "Value": 26.0 }]),
    ] {
        let loadout = loadout_with(json!([engineered_fsd(modifiers)]));
        let resolution = resolve(&loadout, &reference, &ResolverOptions::default())
            .expect("no error")
            .expect("fsd present");
        assert_eq!(resolution.parameters.optimal_mass, Some(1050.0));
    }
}

#[test]
fn unengineered_fsd_uses_reference_values() {
    let loadout = loadout_with(json!([
        { "Slot": "FrameShiftDrive", "Item": "int_hyperdrive_size5_class5" }
    ]));
    let reference = fixture_reference();
    let resolution = resolve(&loadout, &reference, &ResolverOptions::default())
        .expect("no error")
        .expect("fsd present");
    assert!(resolution.engineering.is_none());
    assert!(resolution.blueprint.is_none());
    assert_eq!(resolution.parameters.optimal_mass, Some(1050.0));
    assert_eq!(
        resolution.parameters.max_fuel_per_jump,
        Some(MaxFuelPerJump::Value(5.0))
    );
}

#[test]
fn max_fuel_override_is_kept_as_record_by_default() {
    let loadout = loadout_with(json!([engineered_fsd(json!([
        { "Label": "MaxFuelPerJump", "Value": 5.5, "OriginalValue": 5.0 }
    ]))]));
    let reference = fixture_reference();
    let resolution = resolve(&loadout, &reference, &ResolverOptions::default())
        .expect("no error")
        .expect("fsd present");
    match &resolution.parameters.max_fuel_per_jump {
        Some(MaxFuelPerJump::Override(record)) => {
            assert_eq!(record.label, "MaxFuelPerJump");
            assert_eq!(record.value, Some(5.5));
            assert_eq!(record.extra["OriginalValue"], 5.0);
        }
        other => panic!("unexpected max fuel: {:?}", other),
    }
}

#[test]
fn max_fuel_value_policy_uses_override_value() {
    let options = ResolverOptions {
        max_fuel: MaxFuelPolicy::Value,
        ..ResolverOptions::default()
    };
    let reference = fixture_reference();

    let loadout = loadout_with(json!([engineered_fsd(json!([
        { "Label": "MaxFuelPerJump", "Value": 5.5 }
    ]))]));
    let resolution = resolve(&loadout, &reference, &options)
        .expect("no error")
        .expect("fsd present");
    assert_eq!(
        resolution.parameters.max_fuel_per_jump,
        Some(MaxFuelPerJump::Value(5.5))
    );

    let loadout = loadout_with(json!([engineered_fsd(json!([
        { "Label": "MaxFuelPerJump", "Value": 0.0 }
    ]))]));
    let resolution = resolve(&loadout, &reference, &options)
        .expect("no error")
        .expect("fsd present");
    assert_eq!(
        resolution.parameters.max_fuel_per_jump,
        Some(MaxFuelPerJump::Value(5.0))
    );
}

#[test]
fn base_mass_is_unladen_plus_reserve() {
    let loadout = loadout_with(json!([
        { "Slot": "FrameShiftDrive", "Item": "int_hyperdrive_size5_class5" }
    ]));
    let reference = fixture_reference();
    let resolution = resolve(&loadout, &reference, &ResolverOptions::default())
        .expect("no error")
        .expect("fsd present");
    assert_eq!(resolution.parameters.base_mass, 408.0);
    assert_eq!(resolution.parameters.tank_size, 32.0);
    assert_eq!(resolution.parameters.internal_tank_size, 8.0);
}

#[test]
fn range_boost_is_null_without_booster() {
    let loadout = loadout_with(json!([
        { "Slot": "FrameShiftDrive", "Item": "int_hyperdrive_size5_class5" }
    ]));
    let reference = fixture_reference();
    let resolution = resolve(&loadout, &reference, &ResolverOptions::default())
        .expect("no error")
        .expect("fsd present");
    assert!(resolution.booster.is_none());
    assert_eq!(resolution.parameters.range_boost, None);
}

#[test]
fn range_boost_comes_from_matched_booster() {
    let loadout = loadout_with(json!([
        { "Slot": "FrameShiftDrive", "Item": "int_hyperdrive_size5_class5" },
        { "Slot": "Slot05_Size1", "Item": "int_guardianfsdbooster_size1" }
    ]));
    let reference = fixture_reference();
    let resolution = resolve(&loadout, &reference, &ResolverOptions::default())
        .expect("no error")
        .expect("fsd present");
    assert_eq!(resolution.parameters.range_boost, Some(4.0));
}

#[test]
fn unknown_fsd_degrades_to_null_parameters() {
    let loadout = loadout_with(json!([
        { "Slot": "FrameShiftDrive", "Item": "int_hyperdrive_size9_class9" }
    ]));
    let reference = fixture_reference();
    let resolution = resolve(&loadout, &reference, &ResolverOptions::default())
        .expect("lenient lookups do not fail")
        .expect("fsd present");
    assert!(resolution.fsd_spec.is_none());
    assert_eq!(resolution.parameters.optimal_mass, None);
    assert_eq!(resolution.parameters.max_fuel_per_jump, None);
    assert_eq!(resolution.parameters.fuel_multiplier, None);
    assert_eq!(resolution.parameters.fuel_power, None);
    assert_eq!(resolution.parameters.base_mass, 408.0);
}

#[test]
fn strict_lookup_reports_reference_mismatch() {
    let options = ResolverOptions {
        lookup: LookupPolicy::Strict,
        ..ResolverOptions::default()
    };
    let loadout = loadout_with(json!([
        { "Slot": "FrameShiftDrive", "Item": "int_hyperdrive_size5_class5" },
        { "Slot": "Slot05_Size3", "Item": "int_guardianfsdbooster_size3" }
    ]));
    let reference = fixture_reference();
    match resolve(&loadout, &reference, &options) {
        Err(Error::ReferenceMismatch { table, key }) => {
            assert_eq!(table, "gfsb");
            assert_eq!(key, "int_guardianfsdbooster_size3");
        }
        other => panic!("unexpected result: {:?}", other.map(|r| r.is_some())),
    }
}
