//! Per-wave enemy and economy resolution.

use serde::Serialize;

use crate::balance::math::{round2, round_count};
use crate::balance::profile::BalanceProfile;

/// Fraction of spawned enemies the player is expected to actually kill
/// for loot. Hand-tuned; treat as opaque.
pub const KILL_LOOT_FACTOR: f64 = 0.28;

/// Assumed seconds the hero has to clear a wave's total HP pool.
/// Hand-tuned; treat as opaque.
pub const HERO_DPS_CLEAR_BUDGET_SECONDS: f64 = 65.0;

/// Resolved values for a specific wave of a specific profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WaveBalanceSnapshot {
    pub wave: u32,
    pub enemy_count: u32,
    pub hp_multiplier: f64,
    pub attack_multiplier: f64,
    pub speed_multiplier: f64,
    pub enemy_hp: u32,
    pub enemy_attack: u32,
    pub predicted_coin_income: u32,
    pub suggested_hero_dps: u32,
}

/// Resolve enemy count, stats and predicted economy for one wave.
///
/// Pure with respect to `(profile, wave)`; the wave number is clamped
/// to 1 rather than rejected.
pub fn calculate_wave_snapshot(profile: &BalanceProfile, wave: u32) -> WaveBalanceSnapshot {
    let wave = wave.max(1);
    let wave_index = wave - 1;
    let idx = wave_index as f64;
    let rules = &profile.wave_infinite;

    // Linear growth plus a step bonus every count_growth_step_waves waves
    let steps = wave_index / rules.count_growth_step_waves;
    let enemy_count = round_count(
        rules.base_count as f64
            + idx * rules.count_per_wave
            + steps as f64 * rules.count_growth_step_bonus as f64,
    );

    let hp_multiplier = round2(1.0 + idx * rules.hp_mult_per_wave);
    let attack_multiplier = round2(1.0 + idx * rules.attack_mult_per_wave);
    let speed_multiplier = round2(
        rules
            .max_speed_mult
            .min(1.0 + idx * rules.speed_mult_per_wave),
    );

    let enemy_hp = round_count(profile.enemy.base_hp as f64 * hp_multiplier);
    let enemy_attack = round_count(profile.enemy.base_attack as f64 * attack_multiplier);

    let kill_income = (profile.economy.enemy_coin_drop as f64
        * enemy_count as f64
        * KILL_LOOT_FACTOR)
        .round() as u32;
    let predicted_coin_income = kill_income
        + profile.economy.wave_clear_bonus
        + wave_index * profile.economy.wave_clear_bonus_growth;

    let suggested_hero_dps = (enemy_hp as f64 * enemy_count as f64
        / HERO_DPS_CLEAR_BUDGET_SECONDS)
        .round() as u32;

    WaveBalanceSnapshot {
        wave,
        enemy_count,
        hp_multiplier,
        attack_multiplier,
        speed_multiplier,
        enemy_hp,
        enemy_attack,
        predicted_coin_income,
        suggested_hero_dps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::assumptions::{preset_assumptions, PresetId};
    use crate::balance::compiler::build_profile;

    fn standard() -> BalanceProfile {
        build_profile(PresetId::Standard, &preset_assumptions(PresetId::Standard))
    }

    #[test]
    fn test_wave_one_has_no_growth_terms() {
        let p = standard();
        let snap = calculate_wave_snapshot(&p, 1);
        assert_eq!(snap.enemy_count, p.wave_infinite.base_count);
        assert_eq!(snap.hp_multiplier, 1.0);
        assert_eq!(snap.attack_multiplier, 1.0);
        assert_eq!(snap.enemy_hp, p.enemy.base_hp);
    }

    #[test]
    fn test_wave_zero_clamps_to_one() {
        let p = standard();
        assert_eq!(
            calculate_wave_snapshot(&p, 0),
            calculate_wave_snapshot(&p, 1)
        );
    }

    #[test]
    fn test_count_step_bonus_applies() {
        let p = standard();
        let step = p.wave_infinite.count_growth_step_waves;
        // First wave past the step boundary carries the step bonus
        let before = calculate_wave_snapshot(&p, step);
        let after = calculate_wave_snapshot(&p, step + 1);
        let linear_only = p.wave_infinite.base_count as f64
            + step as f64 * p.wave_infinite.count_per_wave;
        assert_eq!(
            after.enemy_count,
            (linear_only.round() as u32) + p.wave_infinite.count_growth_step_bonus
        );
        assert!(after.enemy_count > before.enemy_count);
    }

    #[test]
    fn test_speed_multiplier_capped() {
        let p = standard();
        for wave in [1, 10, 40, 200, 1000] {
            let snap = calculate_wave_snapshot(&p, wave);
            assert!(snap.speed_multiplier <= p.wave_infinite.max_speed_mult);
        }
        // Deep waves actually reach the cap
        let deep = calculate_wave_snapshot(&p, 500);
        assert_eq!(deep.speed_multiplier, p.wave_infinite.max_speed_mult);
    }

    #[test]
    fn test_snapshot_is_deterministic() {
        let p = standard();
        assert_eq!(
            calculate_wave_snapshot(&p, 10),
            calculate_wave_snapshot(&p, 10)
        );
    }
}
