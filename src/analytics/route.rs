//! Route-level risk estimation: idealized defense DPS vs. wave pressure.
//!
//! Everything here is an offline estimate over the compiled profile; the
//! live game never consults this module. The capacity model below is an
//! idealized best-play assumption, not a reflection of actual building
//! placement.

use serde::Serialize;

use super::wave::calculate_wave_snapshot;
use crate::balance::math::round2;
use crate::balance::profile::{BalanceProfile, EliteSchedule};
use crate::lanes::canonical_path_length;

// Pressure normalization constants. Hand-tuned; treat as opaque.
const ENEMY_PRESSURE_DIVISOR: f64 = 36.0;
const ATTACK_PRESSURE_DIVISOR: f64 = 85.0;
const WAVE_PRESSURE_DIVISOR: f64 = 45.0;

/// Crowd saturation: breach pressure ramps in above this enemy count...
const SATURATION_COUNT_FLOOR: f64 = 40.0;
/// ...over this span, capped at this penalty.
const SATURATION_COUNT_SPAN: f64 = 120.0;
const SATURATION_PENALTY_CAP: f64 = 0.35;

/// Kill progress past which only stragglers are expected to leak.
const OVERKILL_PROGRESS_THRESHOLD: f64 = 1.25;
const OVERKILL_STRAGGLER_RATE: f64 = 0.35;

/// Defense capacity ramps in over the early waves.
const BUILD_UP_FLOOR: f64 = 0.35;
const BUILD_UP_WAVES: f64 = 20.0;

// Floors that make division-by-zero structurally impossible.
const MIN_ENEMY_SPEED: f64 = 0.25;
const MIN_TRAVEL_SECONDS: f64 = 0.5;
const MIN_KILL_PROGRESS: f64 = 0.001;

/// Static idealized defense capacity. Only the route risk simulator
/// reads this; live gameplay has its own placement rules.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DefenseAssumptions {
    pub tower_slots: f64,
    pub frost_tower_slots: f64,
    pub lightning_tower_slots: f64,
    pub base_fire_uptime: f64,
    pub base_coverage_ratio: f64,
    /// Not all soldiers are always in range.
    pub soldier_engage_derate: f64,
    pub hero_uptime: f64,
    /// Crowd control contributes multiplicatively to lane DPS.
    pub control_slow_bonus: f64,
    /// Nominal starting base HP for the collapse projection.
    pub base_hp: f64,
}

impl Default for DefenseAssumptions {
    fn default() -> Self {
        Self {
            tower_slots: 6.0,
            frost_tower_slots: 2.0,
            lightning_tower_slots: 2.0,
            base_fire_uptime: 0.82,
            base_coverage_ratio: 0.8,
            soldier_engage_derate: 0.55,
            hero_uptime: 0.7,
            control_slow_bonus: 0.5,
            base_hp: 1000.0,
        }
    }
}

/// Route-level estimate for one wave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RouteBalanceSnapshot {
    pub wave: u32,
    pub regular_enemy_count: u32,
    pub elite_enemy_count: u32,
    pub total_enemy_count: u32,
    pub path_length: f64,
    pub enemy_travel_seconds: f64,
    pub avg_enemy_hp: f64,
    pub avg_enemy_attack: f64,
    pub effective_lane_dps: f64,
    pub focus_dps_per_enemy: f64,
    pub damage_per_enemy_on_route: f64,
    /// Fraction of an enemy's HP the defense deals during its transit.
    pub kill_progress: f64,
    /// 0 = dies instantly relative to its travel budget; approaches 1 as
    /// kill progress approaches 0.
    pub kill_distance_to_base: f64,
    /// Estimated fraction of the wave expected to reach the base.
    pub breach_rate: f64,
    pub predicted_base_hp_loss: u32,
    /// 0-100 composite of breach rate and kill distance.
    pub risk_score: f64,
}

/// Elites appear on a periodic schedule from `start_wave`, growing one
/// per growth step up to the cap.
pub fn elite_count_for_wave(schedule: &EliteSchedule, wave: u32) -> u32 {
    if wave < schedule.start_wave {
        return 0;
    }
    let since_start = wave - schedule.start_wave;
    if since_start % schedule.interval_waves != 0 {
        return 0;
    }
    let grown = schedule.base_count + since_start / schedule.count_growth_step_waves;
    grown.min(schedule.max_count)
}

/// Estimate breach probability and base-HP loss for one wave on a lane
/// of the given length. Pure with respect to `(profile, wave, path_length)`.
pub fn estimate_route_snapshot(
    profile: &BalanceProfile,
    wave: u32,
    path_length: f64,
) -> RouteBalanceSnapshot {
    let wave = wave.max(1);
    let defense = DefenseAssumptions::default();
    let snap = calculate_wave_snapshot(profile, wave);

    let regular_enemy_count = snap.enemy_count;
    let elite_enemy_count = elite_count_for_wave(&profile.wave_director.elite, wave);
    let total_enemy_count = regular_enemy_count + elite_enemy_count;

    // Blend regular and elite stats by the elites' share of the wave
    let elite_share = elite_enemy_count as f64 / total_enemy_count as f64;
    let regular_hp = snap.enemy_hp as f64;
    let regular_attack = snap.enemy_attack as f64;
    let avg_enemy_hp =
        regular_hp * (1.0 - elite_share) + regular_hp * profile.enemy.elite.hp_mult * elite_share;
    let avg_enemy_attack = regular_attack * (1.0 - elite_share)
        + regular_attack * profile.enemy.elite.attack_mult * elite_share;

    let enemy_speed = profile.enemy.base_speed * snap.speed_multiplier;
    let enemy_travel_seconds =
        (path_length / enemy_speed.max(MIN_ENEMY_SPEED)).max(MIN_TRAVEL_SECONDS);

    // Defense capacity ramps in over the early waves
    let build_up = (BUILD_UP_FLOOR + wave as f64 / BUILD_UP_WAVES).clamp(BUILD_UP_FLOOR, 1.0);
    let player_power = profile.assumptions.player_power_scale;
    let lane_coverage =
        (defense.base_coverage_ratio * (0.94 + player_power * 0.06)).clamp(0.35, 0.95);
    let tower_uptime = (defense.base_fire_uptime * lane_coverage).clamp(0.2, 0.95);

    let b = &profile.building;
    let tower_dps =
        b.tower.damage as f64 / b.tower.attack_interval * defense.tower_slots * build_up;
    let frost_dps = b.frost_tower.damage as f64 / b.frost_tower.attack_interval
        * defense.frost_tower_slots
        * build_up;
    let lightning_dps = b.lightning_tower.damage as f64 / b.lightning_tower.attack_interval
        * defense.lightning_tower_slots
        * build_up;
    let soldier_dps = profile.soldier.base_attack as f64 / profile.soldier.attack_interval
        * b.barracks.max_units as f64
        * defense.soldier_engage_derate;
    let hero = &profile.hero;
    let hero_crit_factor = 1.0 + hero.crit_rate * (hero.crit_multiplier - 1.0);
    let hero_dps =
        hero.base_attack as f64 / hero.attack_interval * hero_crit_factor * defense.hero_uptime;

    let control_bonus = 1.0 + defense.control_slow_bonus * b.frost_tower.slow_percent;
    let effective_lane_dps = (tower_dps + frost_dps + lightning_dps + soldier_dps + hero_dps)
        * tower_uptime
        * control_bonus;

    // Per-enemy DPS diminishes as crowd size and power grow
    let pressure_index = total_enemy_count as f64 / ENEMY_PRESSURE_DIVISOR
        + avg_enemy_attack / ATTACK_PRESSURE_DIVISOR
        + wave as f64 / WAVE_PRESSURE_DIVISOR;
    let focus_dps_per_enemy = effective_lane_dps / (1.0 + pressure_index);

    let damage_per_enemy_on_route = focus_dps_per_enemy * enemy_travel_seconds;
    let kill_progress = damage_per_enemy_on_route / avg_enemy_hp;
    let kill_distance_to_base =
        (1.0 - 1.0 / kill_progress.max(MIN_KILL_PROGRESS)).clamp(0.0, 1.0);

    let saturation_penalty = ((total_enemy_count as f64 - SATURATION_COUNT_FLOOR)
        / SATURATION_COUNT_SPAN)
        .clamp(0.0, SATURATION_PENALTY_CAP);
    let mut breach_rate = ((1.0 - kill_progress).clamp(0.0, 1.0)
        + saturation_penalty * (1.0 - kill_distance_to_base))
        .clamp(0.0, 1.0);
    if kill_progress > OVERKILL_PROGRESS_THRESHOLD {
        breach_rate *= OVERKILL_STRAGGLER_RATE;
    }
    let breach_rate = round2(breach_rate);
    let kill_distance_to_base = round2(kill_distance_to_base);

    let predicted_base_hp_loss = (total_enemy_count as f64
        * breach_rate
        * profile.enemy.base_reach_damage as f64)
        .round() as u32;
    let risk_score = round2(
        (breach_rate * 70.0 + (1.0 - kill_distance_to_base) * 30.0).clamp(0.0, 100.0),
    );

    RouteBalanceSnapshot {
        wave,
        regular_enemy_count,
        elite_enemy_count,
        total_enemy_count,
        path_length: round2(path_length),
        enemy_travel_seconds: round2(enemy_travel_seconds),
        avg_enemy_hp: round2(avg_enemy_hp),
        avg_enemy_attack: round2(avg_enemy_attack),
        effective_lane_dps: round2(effective_lane_dps),
        focus_dps_per_enemy: round2(focus_dps_per_enemy),
        damage_per_enemy_on_route: round2(damage_per_enemy_on_route),
        kill_progress: round2(kill_progress),
        kill_distance_to_base,
        breach_rate,
        predicted_base_hp_loss,
        risk_score,
    }
}

/// Route estimate against the shipping map's canonical travel distance.
pub fn calculate_route_balance_snapshot(
    profile: &BalanceProfile,
    wave: u32,
) -> RouteBalanceSnapshot {
    estimate_route_snapshot(profile, wave, canonical_path_length())
}

/// Route estimates for an inclusive wave range.
pub fn build_route_risk_timeline(
    profile: &BalanceProfile,
    start_wave: u32,
    end_wave: u32,
) -> Vec<RouteBalanceSnapshot> {
    let start = start_wave.max(1);
    let end = end_wave.max(start);
    let path_length = canonical_path_length();
    (start..=end)
        .map(|wave| estimate_route_snapshot(profile, wave, path_length))
        .collect()
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
    fn test_elite_schedule() {
        let p = standard();
        let elite = &p.wave_director.elite;
        // Quiet before the start wave
        for wave in 1..elite.start_wave {
            assert_eq!(elite_count_for_wave(elite, wave), 0);
        }
        // Present on the start wave, absent between cycles
        assert_eq!(elite_count_for_wave(elite, elite.start_wave), elite.base_count);
        assert_eq!(elite_count_for_wave(elite, elite.start_wave + 1), 0);
        // Grows over time but never past the cap
        let deep = elite.start_wave + elite.interval_waves * 50;
        assert_eq!(elite_count_for_wave(elite, deep), elite.max_count);
    }

    #[test]
    fn test_no_elites_means_regular_blend() {
        let p = standard();
        let route = calculate_route_balance_snapshot(&p, 3);
        assert_eq!(route.elite_enemy_count, 0);
        let snap = calculate_wave_snapshot(&p, 3);
        assert_eq!(route.avg_enemy_hp, snap.enemy_hp as f64);
        assert_eq!(route.avg_enemy_attack, snap.enemy_attack as f64);
    }

    #[test]
    fn test_elite_wave_raises_average_stats() {
        let p = standard();
        let elite_wave = p.wave_director.elite.start_wave;
        let route = calculate_route_balance_snapshot(&p, elite_wave);
        let snap = calculate_wave_snapshot(&p, elite_wave);
        assert!(route.elite_enemy_count > 0);
        assert!(route.avg_enemy_hp > snap.enemy_hp as f64);
        assert!(route.avg_enemy_attack > snap.enemy_attack as f64);
    }

    #[test]
    fn test_short_path_floors_travel_time() {
        let p = standard();
        let route = estimate_route_snapshot(&p, 1, 0.0);
        assert_eq!(route.enemy_travel_seconds, MIN_TRAVEL_SECONDS);
    }

    #[test]
    fn test_longer_path_never_raises_breach() {
        let p = standard();
        for wave in [1, 10, 25, 40] {
            let short = estimate_route_snapshot(&p, wave, 10.0);
            let long = estimate_route_snapshot(&p, wave, 40.0);
            assert!(long.breach_rate <= short.breach_rate);
        }
    }

    #[test]
    fn test_overkill_discounts_breach() {
        let p = standard();
        // Early waves are massively overkilled by a built-out defense
        let route = estimate_route_snapshot(&p, 1, 200.0);
        assert!(route.kill_progress > OVERKILL_PROGRESS_THRESHOLD);
        assert!(route.breach_rate <= OVERKILL_STRAGGLER_RATE);
    }

    #[test]
    fn test_timeline_range_normalized() {
        let p = standard();
        let timeline = build_route_risk_timeline(&p, 0, 5);
        assert_eq!(timeline.len(), 5);
        assert_eq!(timeline[0].wave, 1);
        assert_eq!(timeline[4].wave, 5);

        // Inverted range collapses to a single wave
        let single = build_route_risk_timeline(&p, 7, 3);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].wave, 7);
    }
}
