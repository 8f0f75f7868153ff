//! The fully resolved balance profile.
//!
//! A `BalanceProfile` is the immutable output of the compiler for one
//! preset: every gameplay system reads its leaf fields as an opaque
//! numeric config. It is built once at startup and never mutated.

use serde::Serialize;

use super::assumptions::{BalanceAssumptions, PresetId};
use crate::analytics::wave::WaveBalanceSnapshot;

/// Income and payout knobs.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EconomyBalance {
    pub starting_coins: u32,
    pub enemy_coin_drop: u32,
    pub wave_clear_bonus: u32,
    pub wave_clear_bonus_growth: u32,
}

/// Parameters of the endless wave progression.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WaveInfiniteBalance {
    pub base_count: u32,
    /// Fractional; accumulated totals are rounded per wave.
    pub count_per_wave: f64,
    pub count_growth_step_waves: u32,
    pub count_growth_step_bonus: u32,
    pub hp_mult_per_wave: f64,
    pub attack_mult_per_wave: f64,
    pub speed_mult_per_wave: f64,
    pub max_speed_mult: f64,
}

/// Elite appearance schedule.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EliteSchedule {
    pub start_wave: u32,
    pub interval_waves: u32,
    pub base_count: u32,
    pub max_count: u32,
    pub count_growth_step_waves: u32,
}

/// Boss event schedule and stat bonuses.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BossSchedule {
    pub start_wave: u32,
    pub interval_waves: u32,
    pub hp_mult: f64,
    pub attack_mult: f64,
    pub coin_mult: f64,
}

/// Spawn pacing and special-wave cadence.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WaveDirectorBalance {
    pub spawn_interval_seconds: f64,
    pub portal_stagger_seconds: f64,
    pub elite: EliteSchedule,
    pub flying_unlock_wave: u32,
    pub flying_spawn_weight: f64,
    pub boss: BossSchedule,
}

/// Elite variant multipliers relative to the wave's regular enemy.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EliteEnemyBalance {
    pub hp_mult: f64,
    pub attack_mult: f64,
    pub speed_mult: f64,
    pub coin_mult: f64,
}

/// Flying variant multipliers.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FlyingEnemyBalance {
    pub hp_mult: f64,
    pub speed_mult: f64,
}

/// Regular enemy base stats plus variant multipliers.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EnemyBalance {
    pub base_hp: u32,
    pub base_attack: u32,
    pub base_speed: f64,
    pub attack_interval: f64,
    /// Base HP lost per enemy that reaches the base.
    pub base_reach_damage: u32,
    pub elite: EliteEnemyBalance,
    pub flying: FlyingEnemyBalance,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BarracksBalance {
    pub cost: u32,
    pub max_units: u32,
    pub respawn_seconds: f64,
    pub power_growth_per_level: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TowerBalance {
    pub damage: u32,
    pub attack_interval: f64,
    pub range: f64,
    pub cost: u32,
    pub power_growth_per_level: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FrostTowerBalance {
    pub damage: u32,
    pub attack_interval: f64,
    pub slow_percent: f64,
    pub slow_duration_seconds: f64,
    pub cost: u32,
    pub power_growth_per_level: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LightningTowerBalance {
    pub damage: u32,
    pub attack_interval: f64,
    pub chain_targets: u32,
    pub cost: u32,
    pub power_growth_per_level: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FarmBalance {
    pub cost: u32,
    pub income_per_cycle: u32,
    pub cycle_seconds: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SpaBalance {
    pub cost: u32,
    pub heal_percent: f64,
    pub heal_interval_seconds: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct WallBalance {
    pub cost: u32,
    pub hp: u32,
}

/// Upgrade cost progression shared across building types.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UpgradeProgression {
    pub cost_base: u32,
    pub cost_growth: f64,
    pub max_level: u32,
}

/// Per-type building stats, costs and upgrade multipliers.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BuildingBalance {
    pub barracks: BarracksBalance,
    pub tower: TowerBalance,
    pub frost_tower: FrostTowerBalance,
    pub lightning_tower: LightningTowerBalance,
    pub farm: FarmBalance,
    pub spa: SpaBalance,
    pub wall: WallBalance,
    pub upgrade: UpgradeProgression,
}

/// Barracks soldier stats and growth curve.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SoldierBalance {
    pub base_hp: u32,
    pub base_attack: u32,
    pub attack_interval: f64,
    pub hp_growth_per_level: f64,
    pub attack_growth_per_level: f64,
    pub crit_rate: f64,
}

/// Hero base combat stats.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HeroBalance {
    pub base_hp: u32,
    pub base_attack: u32,
    pub attack_interval: f64,
    pub crit_rate: f64,
    pub crit_multiplier: f64,
    pub move_speed: f64,
}

/// Hero XP curve and per-level stat growth.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HeroLevelBalance {
    pub xp_base: u32,
    pub xp_growth_per_level: f64,
    pub hp_per_level: u32,
    pub attack_per_level: u32,
    pub max_level: u32,
}

/// Hero skill rarity tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillRarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl SkillRarity {
    pub fn all() -> [SkillRarity; 4] {
        [
            SkillRarity::Common,
            SkillRarity::Rare,
            SkillRarity::Epic,
            SkillRarity::Legendary,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            SkillRarity::Common => 0,
            SkillRarity::Rare => 1,
            SkillRarity::Epic => 2,
            SkillRarity::Legendary => 3,
        }
    }
}

/// Skill power multipliers by rarity.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HeroSkillBalance {
    pub weapon_power_mults: [f64; 4],
    pub buff_power_mults: [f64; 4],
    pub cooldown_factor: f64,
}

impl HeroSkillBalance {
    pub fn weapon_power(&self, rarity: SkillRarity) -> f64 {
        self.weapon_power_mults[rarity.index()]
    }

    pub fn buff_power(&self, rarity: SkillRarity) -> f64 {
        self.buff_power_mults[rarity.index()]
    }
}

/// Derived summary analytics for one compiled profile.
///
/// Wave numbers are 0 when the condition never triggered within the
/// simulated horizon.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct BalanceAnalytics {
    pub wave10_snapshot: WaveBalanceSnapshot,
    pub first_breach_wave: u32,
    pub first_base_collapse_wave: u32,
}

/// The fully resolved, immutable output of the compiler for one preset.
#[derive(Debug, Clone, Serialize)]
pub struct BalanceProfile {
    pub id: PresetId,
    pub assumptions: BalanceAssumptions,
    pub economy: EconomyBalance,
    pub wave_infinite: WaveInfiniteBalance,
    pub wave_director: WaveDirectorBalance,
    pub enemy: EnemyBalance,
    pub building: BuildingBalance,
    pub soldier: SoldierBalance,
    pub hero: HeroBalance,
    pub hero_level: HeroLevelBalance,
    pub hero_skill: HeroSkillBalance,
    pub analytics: BalanceAnalytics,
}
