//! Expands one assumption set into a complete balance profile.
//!
//! Pure arithmetic over pre-validated constants: no I/O, no side
//! effects, deterministic. Five scaling patterns cover every field:
//! direct scaling for quantities, inverse scaling for time costs,
//! deviation scaling for "x1.xx" multipliers, clamped scaling for
//! percentages, and the building growth floor.

use super::assumptions::{BalanceAssumptions, PresetId};
use super::baseline::*;
use super::math::{
    clamped_percent, deviation_scale, ensure_building_growth_floor, inverse_time_scale,
    reciprocal_deviation_scale, round2, round_count, scale_value,
};
use super::profile::*;
use crate::analytics::aggregator::compute_profile_analytics;

/// Compile a preset's assumptions into a frozen profile.
///
/// The analytics group is filled by running the offline wave simulation
/// against the freshly compiled numbers, so a profile carries its own
/// risk summary from the moment it exists.
pub fn build_profile(id: PresetId, assumptions: &BalanceAssumptions) -> BalanceProfile {
    let wave_infinite = compile_wave_infinite(assumptions);
    let mut profile = BalanceProfile {
        id,
        assumptions: *assumptions,
        economy: compile_economy(assumptions),
        wave_director: compile_wave_director(assumptions),
        enemy: compile_enemy(assumptions),
        building: compile_building(assumptions, &wave_infinite),
        soldier: compile_soldier(assumptions),
        hero: compile_hero(assumptions),
        hero_level: compile_hero_level(assumptions),
        hero_skill: compile_hero_skill(assumptions),
        wave_infinite,
        analytics: BalanceAnalytics::default(),
    };
    profile.analytics = compute_profile_analytics(&profile);
    profile
}

/// Upgrade affordability is decoupled from raw income: a preset can make
/// upgrades cheaper per coin without changing how much coin is earned.
fn cost_factor(a: &BalanceAssumptions) -> f64 {
    a.upgrade_cost_scale / a.economy_scale.max(0.05)
}

fn compile_economy(a: &BalanceAssumptions) -> EconomyBalance {
    EconomyBalance {
        starting_coins: round_count(scale_value(BASE_STARTING_COINS, a.economy_scale)),
        enemy_coin_drop: round_count(scale_value(BASE_ENEMY_COIN_DROP, a.economy_scale)),
        wave_clear_bonus: round_count(scale_value(BASE_WAVE_CLEAR_BONUS, a.economy_scale)),
        wave_clear_bonus_growth: round_count(scale_value(
            BASE_WAVE_CLEAR_BONUS_GROWTH,
            a.economy_scale,
        )),
    }
}

fn compile_wave_infinite(a: &BalanceAssumptions) -> WaveInfiniteBalance {
    WaveInfiniteBalance {
        base_count: round_count(scale_value(BASE_WAVE_ENEMY_COUNT, a.enemy_count_scale)),
        count_per_wave: round2(scale_value(BASE_ENEMY_COUNT_PER_WAVE, a.enemy_count_scale)),
        count_growth_step_waves: COUNT_GROWTH_STEP_WAVES,
        count_growth_step_bonus: round_count(scale_value(
            BASE_COUNT_GROWTH_STEP_BONUS,
            a.enemy_count_scale,
        )),
        hp_mult_per_wave: round2(scale_value(BASE_HP_MULT_PER_WAVE, a.enemy_power_scale)),
        attack_mult_per_wave: round2(scale_value(BASE_ATTACK_MULT_PER_WAVE, a.enemy_power_scale)),
        speed_mult_per_wave: round2(scale_value(BASE_SPEED_MULT_PER_WAVE, a.enemy_speed_scale)),
        max_speed_mult: round2(deviation_scale(BASE_MAX_SPEED_MULT, a.enemy_speed_scale)),
    }
}

fn compile_wave_director(a: &BalanceAssumptions) -> WaveDirectorBalance {
    WaveDirectorBalance {
        // More enemies per wave also means a tighter spawn cadence
        spawn_interval_seconds: round2(inverse_time_scale(
            BASE_SPAWN_INTERVAL_SECONDS,
            COMBAT_INTERVAL_SCALE_BIAS,
            a.enemy_count_scale,
            COMBAT_INTERVAL_SCALE_WEIGHT,
        )),
        portal_stagger_seconds: PORTAL_STAGGER_SECONDS,
        elite: EliteSchedule {
            start_wave: ELITE_START_WAVE,
            interval_waves: ELITE_INTERVAL_WAVES,
            base_count: round_count(scale_value(BASE_ELITE_COUNT, a.enemy_count_scale)),
            max_count: round_count(scale_value(BASE_ELITE_MAX_COUNT, a.enemy_count_scale)),
            count_growth_step_waves: ELITE_COUNT_GROWTH_STEP_WAVES,
        },
        flying_unlock_wave: FLYING_UNLOCK_WAVE,
        flying_spawn_weight: round2(clamped_percent(
            BASE_FLYING_SPAWN_WEIGHT,
            a.enemy_count_scale,
            FLYING_SPAWN_WEIGHT_MIN,
            FLYING_SPAWN_WEIGHT_MAX,
        )),
        boss: BossSchedule {
            start_wave: BOSS_START_WAVE,
            interval_waves: BOSS_INTERVAL_WAVES,
            hp_mult: round2(deviation_scale(BASE_BOSS_HP_MULT, a.enemy_power_scale)),
            attack_mult: round2(deviation_scale(BASE_BOSS_ATTACK_MULT, a.enemy_power_scale)),
            coin_mult: round2(deviation_scale(BASE_BOSS_COIN_MULT, a.economy_scale)),
        },
    }
}

fn compile_enemy(a: &BalanceAssumptions) -> EnemyBalance {
    EnemyBalance {
        base_hp: round_count(scale_value(ENEMY_BASE_HP, a.enemy_power_scale)),
        base_attack: round_count(scale_value(ENEMY_BASE_ATTACK, a.enemy_power_scale)),
        base_speed: round2(scale_value(ENEMY_BASE_SPEED, a.enemy_speed_scale)),
        attack_interval: round2(inverse_time_scale(
            ENEMY_BASE_ATTACK_INTERVAL,
            COMBAT_INTERVAL_SCALE_BIAS,
            a.enemy_power_scale,
            COMBAT_INTERVAL_SCALE_WEIGHT,
        )),
        base_reach_damage: round_count(scale_value(ENEMY_BASE_REACH_DAMAGE, a.enemy_power_scale)),
        elite: EliteEnemyBalance {
            hp_mult: round2(deviation_scale(ELITE_HP_MULT, a.enemy_power_scale)),
            attack_mult: round2(deviation_scale(ELITE_ATTACK_MULT, a.enemy_power_scale)),
            speed_mult: round2(reciprocal_deviation_scale(
                ELITE_SPEED_MULT,
                a.enemy_speed_scale,
            )),
            coin_mult: round2(deviation_scale(ELITE_COIN_MULT, a.economy_scale)),
        },
        flying: FlyingEnemyBalance {
            hp_mult: round2(reciprocal_deviation_scale(FLYING_HP_MULT, a.enemy_power_scale)),
            speed_mult: round2(deviation_scale(FLYING_SPEED_MULT, a.enemy_speed_scale)),
        },
    }
}

/// Deviation-scale a building's per-level power growth, then enforce the
/// floor against this preset's per-wave enemy attack growth.
fn building_power_growth(base: f64, a: &BalanceAssumptions, wave: &WaveInfiniteBalance) -> f64 {
    round2(ensure_building_growth_floor(
        deviation_scale(base, a.player_power_scale),
        wave.attack_mult_per_wave,
    ))
}

fn compile_building(a: &BalanceAssumptions, wave: &WaveInfiniteBalance) -> BuildingBalance {
    let costs = cost_factor(a);
    BuildingBalance {
        barracks: BarracksBalance {
            cost: round_count(scale_value(BARRACKS_COST, costs)),
            max_units: BARRACKS_MAX_UNITS,
            respawn_seconds: round2(inverse_time_scale(
                BARRACKS_RESPAWN_SECONDS,
                INTERVAL_SCALE_BIAS,
                a.player_power_scale,
                INTERVAL_SCALE_WEIGHT,
            )),
            power_growth_per_level: building_power_growth(BARRACKS_POWER_GROWTH, a, wave),
        },
        tower: TowerBalance {
            damage: round_count(scale_value(TOWER_DAMAGE, a.player_power_scale)),
            attack_interval: round2(inverse_time_scale(
                TOWER_ATTACK_INTERVAL,
                INTERVAL_SCALE_BIAS,
                a.player_power_scale,
                INTERVAL_SCALE_WEIGHT,
            )),
            range: TOWER_RANGE,
            cost: round_count(scale_value(TOWER_COST, costs)),
            power_growth_per_level: building_power_growth(TOWER_POWER_GROWTH, a, wave),
        },
        frost_tower: FrostTowerBalance {
            damage: round_count(scale_value(FROST_TOWER_DAMAGE, a.player_power_scale)),
            attack_interval: round2(inverse_time_scale(
                FROST_TOWER_ATTACK_INTERVAL,
                INTERVAL_SCALE_BIAS,
                a.player_power_scale,
                INTERVAL_SCALE_WEIGHT,
            )),
            slow_percent: round2(clamped_percent(
                FROST_TOWER_SLOW_PERCENT,
                a.player_power_scale,
                FROST_TOWER_SLOW_MIN,
                FROST_TOWER_SLOW_MAX,
            )),
            slow_duration_seconds: FROST_TOWER_SLOW_DURATION_SECONDS,
            cost: round_count(scale_value(FROST_TOWER_COST, costs)),
            power_growth_per_level: building_power_growth(FROST_TOWER_POWER_GROWTH, a, wave),
        },
        lightning_tower: LightningTowerBalance {
            damage: round_count(scale_value(LIGHTNING_TOWER_DAMAGE, a.player_power_scale)),
            attack_interval: round2(inverse_time_scale(
                LIGHTNING_TOWER_ATTACK_INTERVAL,
                INTERVAL_SCALE_BIAS,
                a.player_power_scale,
                INTERVAL_SCALE_WEIGHT,
            )),
            chain_targets: LIGHTNING_TOWER_CHAIN_TARGETS,
            cost: round_count(scale_value(LIGHTNING_TOWER_COST, costs)),
            power_growth_per_level: building_power_growth(LIGHTNING_TOWER_POWER_GROWTH, a, wave),
        },
        farm: FarmBalance {
            cost: round_count(scale_value(FARM_COST, costs)),
            income_per_cycle: round_count(scale_value(FARM_INCOME_PER_CYCLE, a.farm_income_scale)),
            cycle_seconds: FARM_CYCLE_SECONDS,
        },
        spa: SpaBalance {
            cost: round_count(scale_value(SPA_COST, costs)),
            heal_percent: round2(clamped_percent(
                SPA_HEAL_PERCENT,
                a.player_power_scale,
                SPA_HEAL_MIN,
                SPA_HEAL_MAX,
            )),
            heal_interval_seconds: SPA_HEAL_INTERVAL_SECONDS,
        },
        wall: WallBalance {
            cost: round_count(scale_value(WALL_COST, costs)),
            hp: round_count(scale_value(WALL_HP, a.player_power_scale)),
        },
        upgrade: UpgradeProgression {
            cost_base: round_count(scale_value(UPGRADE_COST_BASE, costs)),
            cost_growth: round2(deviation_scale(UPGRADE_COST_GROWTH, costs)),
            max_level: UPGRADE_MAX_LEVEL,
        },
    }
}

fn compile_soldier(a: &BalanceAssumptions) -> SoldierBalance {
    SoldierBalance {
        base_hp: round_count(scale_value(SOLDIER_BASE_HP, a.player_power_scale)),
        base_attack: round_count(scale_value(SOLDIER_BASE_ATTACK, a.player_power_scale)),
        attack_interval: round2(inverse_time_scale(
            SOLDIER_ATTACK_INTERVAL,
            INTERVAL_SCALE_BIAS,
            a.player_power_scale,
            INTERVAL_SCALE_WEIGHT,
        )),
        hp_growth_per_level: round2(deviation_scale(SOLDIER_HP_GROWTH, a.player_power_scale)),
        attack_growth_per_level: round2(deviation_scale(
            SOLDIER_ATTACK_GROWTH,
            a.player_power_scale,
        )),
        crit_rate: round2(clamped_percent(
            SOLDIER_CRIT_RATE,
            a.player_power_scale,
            SOLDIER_CRIT_MIN,
            SOLDIER_CRIT_MAX,
        )),
    }
}

fn compile_hero(a: &BalanceAssumptions) -> HeroBalance {
    HeroBalance {
        base_hp: round_count(scale_value(HERO_BASE_HP, a.player_power_scale)),
        base_attack: round_count(scale_value(HERO_BASE_ATTACK, a.player_power_scale)),
        attack_interval: round2(inverse_time_scale(
            HERO_ATTACK_INTERVAL,
            COMBAT_INTERVAL_SCALE_BIAS,
            a.player_power_scale,
            COMBAT_INTERVAL_SCALE_WEIGHT,
        )),
        crit_rate: round2(clamped_percent(
            HERO_CRIT_RATE,
            a.player_power_scale,
            HERO_CRIT_MIN,
            HERO_CRIT_MAX,
        )),
        crit_multiplier: round2(deviation_scale(HERO_CRIT_MULTIPLIER, a.player_power_scale)),
        move_speed: HERO_MOVE_SPEED,
    }
}

fn compile_hero_level(a: &BalanceAssumptions) -> HeroLevelBalance {
    HeroLevelBalance {
        // A faster-growth preset needs less XP per level, not more
        xp_base: round_count(inverse_time_scale(
            HERO_XP_BASE,
            XP_SCALE_BIAS,
            a.hero_growth_scale,
            XP_SCALE_WEIGHT,
        )),
        xp_growth_per_level: round2(inverse_time_scale(
            HERO_XP_GROWTH,
            COMBAT_INTERVAL_SCALE_BIAS,
            a.hero_growth_scale,
            COMBAT_INTERVAL_SCALE_WEIGHT,
        )),
        hp_per_level: round_count(scale_value(
            HERO_HP_PER_LEVEL,
            a.player_power_scale * a.hero_growth_scale,
        )),
        attack_per_level: round_count(scale_value(
            HERO_ATTACK_PER_LEVEL,
            a.player_power_scale * a.hero_growth_scale,
        )),
        max_level: HERO_MAX_LEVEL,
    }
}

fn compile_hero_skill(a: &BalanceAssumptions) -> HeroSkillBalance {
    let scale_tier = |base: f64| round2(deviation_scale(base, a.hero_skill_scale));
    HeroSkillBalance {
        weapon_power_mults: WEAPON_POWER_MULTS.map(scale_tier),
        buff_power_mults: BUFF_POWER_MULTS.map(scale_tier),
        cooldown_factor: round2(inverse_time_scale(
            SKILL_COOLDOWN_FACTOR,
            COMBAT_INTERVAL_SCALE_BIAS,
            a.hero_skill_scale,
            COMBAT_INTERVAL_SCALE_WEIGHT,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::assumptions::preset_assumptions;
    use crate::balance::math::GROWTH_FLOOR_MARGIN;

    fn standard() -> BalanceProfile {
        build_profile(PresetId::Standard, &preset_assumptions(PresetId::Standard))
    }

    #[test]
    fn test_neutral_preset_reproduces_baselines() {
        let p = standard();
        assert_eq!(p.wave_infinite.base_count, 8);
        assert_eq!(p.enemy.base_hp, 55);
        assert_eq!(p.enemy.base_attack, 10);
        assert_eq!(p.economy.starting_coins, 220);
        assert_eq!(p.building.tower.damage, 12);
        assert_eq!(p.building.tower.cost, 120);
        assert!((p.building.tower.power_growth_per_level - TOWER_POWER_GROWTH).abs() < 1e-9);
        assert!((p.wave_infinite.max_speed_mult - BASE_MAX_SPEED_MULT).abs() < 1e-9);
        assert!((p.hero_level.xp_growth_per_level - HERO_XP_GROWTH).abs() < 1e-9);
        assert_eq!(p.hero_skill.weapon_power_mults, WEAPON_POWER_MULTS);
    }

    #[test]
    fn test_cost_factor_decouples_costs_from_income() {
        // Double income with unchanged upgrade costs halves effective cost
        let mut a = BalanceAssumptions::neutral("rich");
        a.economy_scale = 2.0;
        let p = build_profile(PresetId::Standard, &a);
        assert_eq!(p.building.tower.cost, 60);
        assert_eq!(p.economy.starting_coins, 440);
    }

    #[test]
    fn test_growth_floor_binds_under_weak_player_scaling() {
        // Strong enemies + weak player would trail enemy growth without the floor
        let mut a = BalanceAssumptions::neutral("floor");
        a.enemy_power_scale = 2.0;
        a.player_power_scale = 0.5;
        let p = build_profile(PresetId::Standard, &a);
        let floor = 1.0 + p.wave_infinite.attack_mult_per_wave + GROWTH_FLOOR_MARGIN;
        for growth in [
            p.building.barracks.power_growth_per_level,
            p.building.tower.power_growth_per_level,
            p.building.frost_tower.power_growth_per_level,
            p.building.lightning_tower.power_growth_per_level,
        ] {
            assert!(growth >= floor - 1e-6, "{} trails floor {}", growth, floor);
        }
    }

    #[test]
    fn test_percent_fields_stay_in_band() {
        let mut a = BalanceAssumptions::neutral("extreme");
        a.player_power_scale = 25.0;
        let p = build_profile(PresetId::Standard, &a);
        assert!(p.building.frost_tower.slow_percent <= FROST_TOWER_SLOW_MAX);
        assert!(p.building.spa.heal_percent <= SPA_HEAL_MAX);
        assert!(p.hero.crit_rate <= HERO_CRIT_MAX);

        a.player_power_scale = 0.0001;
        let p = build_profile(PresetId::Standard, &a);
        assert!(p.building.frost_tower.slow_percent >= FROST_TOWER_SLOW_MIN);
        assert!(p.building.spa.heal_percent >= SPA_HEAL_MIN);
        assert!(p.soldier.crit_rate >= SOLDIER_CRIT_MIN);
    }

    #[test]
    fn test_inverse_scaling_shortens_intervals() {
        let fast = {
            let mut a = BalanceAssumptions::neutral("fast");
            a.player_power_scale = 1.5;
            build_profile(PresetId::Standard, &a)
        };
        let p = standard();
        assert!(fast.building.tower.attack_interval < p.building.tower.attack_interval);
        assert!(fast.hero.attack_interval < p.hero.attack_interval);
    }

    #[test]
    fn test_hero_growth_knob_cheapens_levels() {
        let grower = {
            let mut a = BalanceAssumptions::neutral("grower");
            a.hero_growth_scale = 1.3;
            build_profile(PresetId::Standard, &a)
        };
        let p = standard();
        assert!(grower.hero_level.xp_base < p.hero_level.xp_base);
        assert!(grower.hero_level.xp_growth_per_level < p.hero_level.xp_growth_per_level);
        assert!(grower.hero_level.hp_per_level > p.hero_level.hp_per_level);
    }

    #[test]
    fn test_all_presets_compile_with_positive_counts() {
        for id in PresetId::all() {
            let p = build_profile(id, &preset_assumptions(id));
            assert!(p.wave_infinite.base_count >= 1);
            assert!(p.wave_director.elite.base_count >= 1);
            assert!(p.enemy.base_reach_damage >= 1);
            assert!(p.building.barracks.max_units >= 1);
        }
    }
}
