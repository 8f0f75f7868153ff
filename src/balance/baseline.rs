//! Authored baseline numbers for every compiled balance field.
//!
//! These are the "standard" values: a preset with all scale factors at
//! 1.0 reproduces them exactly. Change once, test everywhere.

// =============================================================================
// ECONOMY
// =============================================================================

/// Coins the player starts a run with.
pub const BASE_STARTING_COINS: f64 = 220.0;

/// Coins dropped by a regular enemy kill.
pub const BASE_ENEMY_COIN_DROP: f64 = 9.0;

/// Flat bonus paid out when a wave is cleared.
pub const BASE_WAVE_CLEAR_BONUS: f64 = 40.0;

/// Extra wave-clear bonus gained per wave.
pub const BASE_WAVE_CLEAR_BONUS_GROWTH: f64 = 6.0;

// =============================================================================
// WAVE PROGRESSION
// =============================================================================

/// Enemies spawned on wave 1.
pub const BASE_WAVE_ENEMY_COUNT: f64 = 8.0;

/// Additional enemies per wave (fractional; totals are rounded).
pub const BASE_ENEMY_COUNT_PER_WAVE: f64 = 0.9;

/// Every this many waves the count gets a step bonus.
pub const COUNT_GROWTH_STEP_WAVES: u32 = 5;

/// Enemies added at each count growth step.
pub const BASE_COUNT_GROWTH_STEP_BONUS: f64 = 2.0;

/// Enemy HP multiplier growth per wave (linear, unbounded).
pub const BASE_HP_MULT_PER_WAVE: f64 = 0.16;

/// Enemy attack multiplier growth per wave (linear, unbounded).
pub const BASE_ATTACK_MULT_PER_WAVE: f64 = 0.12;

/// Enemy speed multiplier growth per wave (linear, capped).
pub const BASE_SPEED_MULT_PER_WAVE: f64 = 0.02;

/// Cap on the enemy speed multiplier.
pub const BASE_MAX_SPEED_MULT: f64 = 1.6;

// =============================================================================
// WAVE DIRECTOR
// =============================================================================

/// Seconds between spawns from an open portal.
pub const BASE_SPAWN_INTERVAL_SECONDS: f64 = 1.4;

/// Stagger between the three lane portals opening.
pub const PORTAL_STAGGER_SECONDS: f64 = 0.35;

/// First wave that can carry elites.
pub const ELITE_START_WAVE: u32 = 8;

/// Waves between elite appearances.
pub const ELITE_INTERVAL_WAVES: u32 = 4;

/// Elites on the first elite wave.
pub const BASE_ELITE_COUNT: f64 = 2.0;

/// Cap on elites per wave.
pub const BASE_ELITE_MAX_COUNT: f64 = 6.0;

/// Every this many waves past the start, one more elite spawns.
pub const ELITE_COUNT_GROWTH_STEP_WAVES: u32 = 10;

/// First wave flying enemies may appear on.
pub const FLYING_UNLOCK_WAVE: u32 = 6;

/// Weight of flying spawns in the wave randomizer once unlocked.
pub const BASE_FLYING_SPAWN_WEIGHT: f64 = 0.22;
pub const FLYING_SPAWN_WEIGHT_MIN: f64 = 0.05;
pub const FLYING_SPAWN_WEIGHT_MAX: f64 = 0.45;

/// First boss-event wave.
pub const BOSS_START_WAVE: u32 = 15;

/// Waves between boss events.
pub const BOSS_INTERVAL_WAVES: u32 = 10;

/// Boss stat multipliers relative to the wave's regular enemy.
pub const BASE_BOSS_HP_MULT: f64 = 9.0;
pub const BASE_BOSS_ATTACK_MULT: f64 = 3.0;

/// Boss coin payout multiplier.
pub const BASE_BOSS_COIN_MULT: f64 = 4.0;

// =============================================================================
// ENEMY
// =============================================================================

/// Regular enemy stats at wave 1.
pub const ENEMY_BASE_HP: f64 = 55.0;
pub const ENEMY_BASE_ATTACK: f64 = 10.0;
pub const ENEMY_BASE_SPEED: f64 = 1.15;
pub const ENEMY_BASE_ATTACK_INTERVAL: f64 = 1.3;

/// Base HP the base loses per enemy that reaches it.
pub const ENEMY_BASE_REACH_DAMAGE: f64 = 2.0;

/// Elite variant multipliers (relative to the wave's regular enemy).
pub const ELITE_HP_MULT: f64 = 3.2;
pub const ELITE_ATTACK_MULT: f64 = 2.2;
/// Elites lumber: below 1.0, scaled via the reciprocal deviation form.
pub const ELITE_SPEED_MULT: f64 = 0.85;
pub const ELITE_COIN_MULT: f64 = 2.5;

/// Flying variant multipliers.
pub const FLYING_HP_MULT: f64 = 0.7;
pub const FLYING_SPEED_MULT: f64 = 1.35;

// =============================================================================
// BUILDINGS
// =============================================================================

pub const BARRACKS_COST: f64 = 100.0;
pub const BARRACKS_MAX_UNITS: u32 = 3;
pub const BARRACKS_RESPAWN_SECONDS: f64 = 8.0;
pub const BARRACKS_POWER_GROWTH: f64 = 1.22;

pub const TOWER_DAMAGE: f64 = 12.0;
pub const TOWER_ATTACK_INTERVAL: f64 = 0.9;
pub const TOWER_RANGE: f64 = 5.5;
pub const TOWER_COST: f64 = 120.0;
pub const TOWER_POWER_GROWTH: f64 = 1.24;

pub const FROST_TOWER_DAMAGE: f64 = 4.0;
pub const FROST_TOWER_ATTACK_INTERVAL: f64 = 1.1;
pub const FROST_TOWER_SLOW_PERCENT: f64 = 0.35;
pub const FROST_TOWER_SLOW_MIN: f64 = 0.15;
pub const FROST_TOWER_SLOW_MAX: f64 = 0.6;
pub const FROST_TOWER_SLOW_DURATION_SECONDS: f64 = 1.8;
pub const FROST_TOWER_COST: f64 = 140.0;
pub const FROST_TOWER_POWER_GROWTH: f64 = 1.2;

pub const LIGHTNING_TOWER_DAMAGE: f64 = 26.0;
pub const LIGHTNING_TOWER_ATTACK_INTERVAL: f64 = 2.2;
pub const LIGHTNING_TOWER_CHAIN_TARGETS: u32 = 3;
pub const LIGHTNING_TOWER_COST: f64 = 210.0;
pub const LIGHTNING_TOWER_POWER_GROWTH: f64 = 1.26;

pub const FARM_COST: f64 = 90.0;
pub const FARM_INCOME_PER_CYCLE: f64 = 14.0;
pub const FARM_CYCLE_SECONDS: f64 = 6.0;

pub const SPA_COST: f64 = 130.0;
pub const SPA_HEAL_PERCENT: f64 = 0.06;
pub const SPA_HEAL_MIN: f64 = 0.02;
pub const SPA_HEAL_MAX: f64 = 0.25;
pub const SPA_HEAL_INTERVAL_SECONDS: f64 = 3.0;

pub const WALL_COST: f64 = 60.0;
pub const WALL_HP: f64 = 160.0;

/// Shared upgrade progression across building types.
pub const UPGRADE_COST_BASE: f64 = 90.0;
pub const UPGRADE_COST_GROWTH: f64 = 1.5;
pub const UPGRADE_MAX_LEVEL: u32 = 5;

// =============================================================================
// SOLDIERS
// =============================================================================

pub const SOLDIER_BASE_HP: f64 = 45.0;
pub const SOLDIER_BASE_ATTACK: f64 = 7.0;
pub const SOLDIER_ATTACK_INTERVAL: f64 = 1.0;
pub const SOLDIER_HP_GROWTH: f64 = 1.18;
pub const SOLDIER_ATTACK_GROWTH: f64 = 1.15;
pub const SOLDIER_CRIT_RATE: f64 = 0.08;
pub const SOLDIER_CRIT_MIN: f64 = 0.01;
pub const SOLDIER_CRIT_MAX: f64 = 0.5;

// =============================================================================
// HERO
// =============================================================================

pub const HERO_BASE_HP: f64 = 320.0;
pub const HERO_BASE_ATTACK: f64 = 28.0;
pub const HERO_ATTACK_INTERVAL: f64 = 0.75;
pub const HERO_CRIT_RATE: f64 = 0.12;
pub const HERO_CRIT_MIN: f64 = 0.05;
pub const HERO_CRIT_MAX: f64 = 0.5;
pub const HERO_CRIT_MULTIPLIER: f64 = 1.75;

/// World units per second; authored, not preset-scaled.
pub const HERO_MOVE_SPEED: f64 = 2.4;

// =============================================================================
// HERO LEVELING
// =============================================================================

/// XP required for the first level-up.
pub const HERO_XP_BASE: f64 = 80.0;

/// Per-level XP requirement multiplier.
pub const HERO_XP_GROWTH: f64 = 1.22;

pub const HERO_HP_PER_LEVEL: f64 = 26.0;
pub const HERO_ATTACK_PER_LEVEL: f64 = 3.0;
pub const HERO_MAX_LEVEL: u32 = 30;

// =============================================================================
// HERO SKILLS (by rarity: common, rare, epic, legendary)
// =============================================================================

pub const WEAPON_POWER_MULTS: [f64; 4] = [1.0, 1.25, 1.55, 2.0];
pub const BUFF_POWER_MULTS: [f64; 4] = [1.0, 1.2, 1.45, 1.8];

/// Multiplier on skill cooldowns; inverse-scaled by the skill knob.
pub const SKILL_COOLDOWN_FACTOR: f64 = 1.0;

// =============================================================================
// INVERSE-SCALE SHAPES
// =============================================================================
// Each interval resolves as base / (bias + scale * weight); bias + weight
// sum to 1.0 so the neutral preset reproduces the authored interval.

/// Building and soldier attack/respawn intervals react mildly to player power.
pub const INTERVAL_SCALE_BIAS: f64 = 0.6;
pub const INTERVAL_SCALE_WEIGHT: f64 = 0.4;

/// Hero tempo and enemy attack intervals react at full strength.
pub const COMBAT_INTERVAL_SCALE_BIAS: f64 = 0.5;
pub const COMBAT_INTERVAL_SCALE_WEIGHT: f64 = 0.5;

/// Hero XP requirements lean hard on the growth knob.
pub const XP_SCALE_BIAS: f64 = 0.3;
pub const XP_SCALE_WEIGHT: f64 = 0.7;
