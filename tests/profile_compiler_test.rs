//! Profile compiler integration tests
//!
//! Exercises the compiled profiles end to end: scaling invariants,
//! cross-preset ordering, and reproducibility guarantees.

use rampart::analytics::wave::calculate_wave_snapshot;
use rampart::balance::assumptions::{preset_assumptions, PresetId};
use rampart::balance::compiler::build_profile;
use rampart::balance::math::GROWTH_FLOOR_MARGIN;
use rampart::balance::profile::BalanceProfile;

fn all_profiles() -> Vec<BalanceProfile> {
    PresetId::all()
        .iter()
        .map(|id| build_profile(*id, &preset_assumptions(*id)))
        .collect()
}

// ============================================================================
// Wave scaling invariants
// ============================================================================

#[test]
fn test_hp_and_attack_multipliers_never_decrease() {
    for profile in all_profiles() {
        let mut prev = calculate_wave_snapshot(&profile, 1);
        for wave in 2..=80 {
            let snap = calculate_wave_snapshot(&profile, wave);
            assert!(
                snap.hp_multiplier >= prev.hp_multiplier,
                "{}: hp multiplier dipped at wave {}",
                profile.assumptions.label,
                wave
            );
            assert!(
                snap.attack_multiplier >= prev.attack_multiplier,
                "{}: attack multiplier dipped at wave {}",
                profile.assumptions.label,
                wave
            );
            prev = snap;
        }
    }
}

#[test]
fn test_speed_multiplier_respects_cap() {
    for profile in all_profiles() {
        for wave in 1..=200 {
            let snap = calculate_wave_snapshot(&profile, wave);
            assert!(
                snap.speed_multiplier <= profile.wave_infinite.max_speed_mult,
                "{}: speed over cap at wave {}",
                profile.assumptions.label,
                wave
            );
        }
    }
}

#[test]
fn test_wave_one_enemy_count_is_base_count() {
    let profile = build_profile(PresetId::Standard, &preset_assumptions(PresetId::Standard));
    let snap = calculate_wave_snapshot(&profile, 1);
    assert_eq!(snap.enemy_count, profile.wave_infinite.base_count);
}

// ============================================================================
// Growth floor
// ============================================================================

#[test]
fn test_building_growth_floor_holds_for_every_preset() {
    for profile in all_profiles() {
        let floor =
            1.0 + profile.wave_infinite.attack_mult_per_wave.max(0.0) + GROWTH_FLOOR_MARGIN;
        let b = &profile.building;
        for (name, growth) in [
            ("barracks", b.barracks.power_growth_per_level),
            ("tower", b.tower.power_growth_per_level),
            ("frost", b.frost_tower.power_growth_per_level),
            ("lightning", b.lightning_tower.power_growth_per_level),
        ] {
            assert!(
                growth >= floor - 1e-6,
                "{}: {} growth {} trails floor {}",
                profile.assumptions.label,
                name,
                growth,
                floor
            );
        }
    }
}

// ============================================================================
// Cross-preset ordering
// ============================================================================

#[test]
fn test_enemy_power_ordering_survives_compilation() {
    let casual = build_profile(PresetId::Casual, &preset_assumptions(PresetId::Casual));
    let standard = build_profile(PresetId::Standard, &preset_assumptions(PresetId::Standard));
    let hardcore = build_profile(PresetId::Hardcore, &preset_assumptions(PresetId::Hardcore));

    assert!(hardcore.enemy.base_hp >= standard.enemy.base_hp);
    assert!(standard.enemy.base_hp >= casual.enemy.base_hp);
    assert!(hardcore.enemy.base_attack >= standard.enemy.base_attack);
    assert!(standard.enemy.base_attack >= casual.enemy.base_attack);

    // Ordering holds at depth too, not just at wave 1
    for wave in [10, 30, 60] {
        let c = calculate_wave_snapshot(&casual, wave);
        let s = calculate_wave_snapshot(&standard, wave);
        let h = calculate_wave_snapshot(&hardcore, wave);
        assert!(h.enemy_hp >= s.enemy_hp);
        assert!(s.enemy_hp >= c.enemy_hp);
    }
}

#[test]
fn test_casual_economy_is_most_generous() {
    let casual = build_profile(PresetId::Casual, &preset_assumptions(PresetId::Casual));
    let hardcore = build_profile(PresetId::Hardcore, &preset_assumptions(PresetId::Hardcore));
    assert!(casual.economy.starting_coins > hardcore.economy.starting_coins);
    assert!(casual.economy.enemy_coin_drop >= hardcore.economy.enemy_coin_drop);
    // Cheaper upgrades on top of richer income
    assert!(casual.building.tower.cost < hardcore.building.tower.cost);
}

// ============================================================================
// Reproducibility
// ============================================================================

#[test]
fn test_recompilation_reproduces_every_field() {
    for id in PresetId::all() {
        let assumptions = preset_assumptions(id);
        let first = build_profile(id, &assumptions);
        let second = build_profile(id, &assumptions);
        // Serialized form covers every nested numeric field
        let a = serde_json::to_string(&first).unwrap();
        let b = serde_json::to_string(&second).unwrap();
        assert_eq!(a, b, "{:?}: recompilation drifted", id);
    }
}

#[test]
fn test_snapshot_calls_are_bit_identical() {
    let profile = build_profile(PresetId::Standard, &preset_assumptions(PresetId::Standard));
    let a = calculate_wave_snapshot(&profile, 10);
    let b = calculate_wave_snapshot(&profile, 10);
    assert_eq!(a, b);
}
