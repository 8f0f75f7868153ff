//! Horizon analytics: how a compiled profile plays out over 60 waves.

use super::route::{estimate_route_snapshot, DefenseAssumptions};
use super::wave::calculate_wave_snapshot;
use crate::balance::profile::{BalanceAnalytics, BalanceProfile};
use crate::lanes::canonical_path_length;

/// Waves simulated when judging a profile.
pub const ANALYTICS_HORIZON_WAVES: u32 = 60;

/// Fixed checkpoint wave used for cross-preset comparison.
pub const CHECKPOINT_WAVE: u32 = 10;

/// Breach rate at which a wave counts as carrying non-trivial risk.
/// Hand-tuned; treat as opaque.
pub const BREACH_ALERT_THRESHOLD: f64 = 0.05;

/// Drive the wave and route estimators across the horizon.
///
/// Accumulates predicted base-HP loss into a running pool seeded from
/// the nominal base HP. `first_breach_wave` records the first wave whose
/// breach rate clears the alert threshold; `first_base_collapse_wave`
/// records the wave the pool hits zero, at which point the loop stops.
/// Both stay 0 if the condition never triggers within the horizon.
pub fn compute_profile_analytics(profile: &BalanceProfile) -> BalanceAnalytics {
    let path_length = canonical_path_length();
    let defense = DefenseAssumptions::default();

    let wave10_snapshot = calculate_wave_snapshot(profile, CHECKPOINT_WAVE);

    let mut remaining_hp = defense.base_hp;
    let mut first_breach_wave = 0;
    let mut first_base_collapse_wave = 0;

    for wave in 1..=ANALYTICS_HORIZON_WAVES {
        let route = estimate_route_snapshot(profile, wave, path_length);
        if first_breach_wave == 0 && route.breach_rate >= BREACH_ALERT_THRESHOLD {
            first_breach_wave = wave;
        }
        remaining_hp -= route.predicted_base_hp_loss as f64;
        if remaining_hp <= 0.0 {
            first_base_collapse_wave = wave;
            break;
        }
    }

    BalanceAnalytics {
        wave10_snapshot,
        first_breach_wave,
        first_base_collapse_wave,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::assumptions::{preset_assumptions, BalanceAssumptions, PresetId};
    use crate::balance::compiler::build_profile;

    #[test]
    fn test_checkpoint_snapshot_matches_direct_call() {
        let p = build_profile(PresetId::Standard, &preset_assumptions(PresetId::Standard));
        assert_eq!(
            p.analytics.wave10_snapshot,
            calculate_wave_snapshot(&p, CHECKPOINT_WAVE)
        );
    }

    #[test]
    fn test_overwhelming_enemies_collapse_early() {
        let mut a = BalanceAssumptions::neutral("doomed");
        a.enemy_power_scale = 6.0;
        a.enemy_count_scale = 3.0;
        a.player_power_scale = 0.3;
        let p = build_profile(PresetId::Standard, &a);
        assert!(p.analytics.first_breach_wave > 0);
        assert!(p.analytics.first_base_collapse_wave > 0);
        assert!(p.analytics.first_breach_wave <= p.analytics.first_base_collapse_wave);
    }

    #[test]
    fn test_trivial_enemies_never_breach() {
        let mut a = BalanceAssumptions::neutral("sandbox");
        a.enemy_power_scale = 0.1;
        a.enemy_count_scale = 0.2;
        a.player_power_scale = 3.0;
        let p = build_profile(PresetId::Standard, &a);
        assert_eq!(p.analytics.first_breach_wave, 0);
        assert_eq!(p.analytics.first_base_collapse_wave, 0);
    }
}
