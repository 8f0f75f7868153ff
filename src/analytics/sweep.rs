//! Monte Carlo assumption sweep.
//!
//! Jitters a preset's tuning knobs across many randomized variants and
//! compiles each one, to answer "how fragile is this tuning?" before a
//! preset ships. Deterministic for a given seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::aggregator::CHECKPOINT_WAVE;
use super::route::calculate_route_balance_snapshot;
use crate::balance::assumptions::{preset_assumptions, BalanceAssumptions, PresetId};
use crate::balance::compiler::build_profile;

/// Jittered factors never drop below this floor.
const MIN_JITTERED_SCALE: f64 = 0.05;

/// Configuration for a sweep run.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Number of randomized variants to compile
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Multiplicative jitter span per knob (0.15 = ±15%)
    pub jitter: f64,

    /// Preset the variants are centered on
    pub base_preset: PresetId,

    /// Wave used for the worst-case risk checkpoint
    pub checkpoint_wave: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-run)
    pub verbosity: u8,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            num_runs: 200,
            seed: None,
            jitter: 0.15,
            base_preset: PresetId::Standard,
            checkpoint_wave: CHECKPOINT_WAVE,
            verbosity: 1,
        }
    }
}

/// Aggregated results of a sweep.
#[derive(Debug, Clone)]
pub struct SweepReport {
    pub num_runs: u32,
    pub checkpoint_wave: u32,
    pub runs_breached: u32,
    pub runs_collapsed: u32,
    /// 0 when no run breached/collapsed
    pub earliest_breach_wave: u32,
    pub earliest_collapse_wave: u32,
    /// Mean first-breach wave among breached runs
    pub avg_first_breach_wave: f64,
    pub worst_checkpoint_risk: f64,
}

impl SweepReport {
    pub fn to_text(&self) -> String {
        let mut report = String::new();
        report.push_str("── ASSUMPTION SWEEP ─────────────────────────────────────────────\n");
        report.push_str(&format!("  Variants:          {}\n", self.num_runs));
        report.push_str(&format!(
            "  Breached:          {} ({:.1}%)\n",
            self.runs_breached,
            self.runs_breached as f64 / self.num_runs.max(1) as f64 * 100.0
        ));
        report.push_str(&format!(
            "  Collapsed:         {} ({:.1}%)\n",
            self.runs_collapsed,
            self.runs_collapsed as f64 / self.num_runs.max(1) as f64 * 100.0
        ));
        if self.runs_breached > 0 {
            report.push_str(&format!(
                "  Earliest Breach:   wave {}\n",
                self.earliest_breach_wave
            ));
            report.push_str(&format!(
                "  Avg First Breach:  wave {:.1}\n",
                self.avg_first_breach_wave
            ));
        }
        if self.runs_collapsed > 0 {
            report.push_str(&format!(
                "  Earliest Collapse: wave {}\n",
                self.earliest_collapse_wave
            ));
        }
        report.push_str(&format!(
            "  Worst Wave-{} Risk: {:.1}\n",
            self.checkpoint_wave, self.worst_checkpoint_risk
        ));
        report
    }
}

/// Multiplicatively jitter every knob of a base assumption set.
fn jitter_assumptions(
    base: &BalanceAssumptions,
    jitter: f64,
    rng: &mut impl Rng,
) -> BalanceAssumptions {
    let mut wobble = |value: f64| {
        (value * (1.0 + rng.gen_range(-jitter..=jitter))).max(MIN_JITTERED_SCALE)
    };
    BalanceAssumptions {
        label: base.label,
        enemy_count_scale: wobble(base.enemy_count_scale),
        enemy_power_scale: wobble(base.enemy_power_scale),
        enemy_speed_scale: wobble(base.enemy_speed_scale),
        player_power_scale: wobble(base.player_power_scale),
        economy_scale: wobble(base.economy_scale),
        upgrade_cost_scale: wobble(base.upgrade_cost_scale),
        farm_income_scale: wobble(base.farm_income_scale),
        hero_growth_scale: wobble(base.hero_growth_scale),
        hero_skill_scale: wobble(base.hero_skill_scale),
    }
}

/// Compile `num_runs` jittered variants and aggregate their analytics.
pub fn run_sweep(config: &SweepConfig) -> SweepReport {
    let base = preset_assumptions(config.base_preset);
    let root_seed = config.seed.unwrap_or_else(rand::random);

    let mut runs_breached = 0;
    let mut runs_collapsed = 0;
    let mut earliest_breach_wave = 0u32;
    let mut earliest_collapse_wave = 0u32;
    let mut breach_wave_sum = 0u64;
    let mut worst_checkpoint_risk: f64 = 0.0;

    for run_idx in 0..config.num_runs {
        let mut rng = ChaCha8Rng::seed_from_u64(root_seed.wrapping_add(run_idx as u64));
        let assumptions = jitter_assumptions(&base, config.jitter, &mut rng);
        let profile = build_profile(config.base_preset, &assumptions);

        let analytics = &profile.analytics;
        if analytics.first_breach_wave > 0 {
            runs_breached += 1;
            breach_wave_sum += analytics.first_breach_wave as u64;
            if earliest_breach_wave == 0 || analytics.first_breach_wave < earliest_breach_wave {
                earliest_breach_wave = analytics.first_breach_wave;
            }
        }
        if analytics.first_base_collapse_wave > 0 {
            runs_collapsed += 1;
            if earliest_collapse_wave == 0
                || analytics.first_base_collapse_wave < earliest_collapse_wave
            {
                earliest_collapse_wave = analytics.first_base_collapse_wave;
            }
        }

        let checkpoint = calculate_route_balance_snapshot(&profile, config.checkpoint_wave);
        worst_checkpoint_risk = worst_checkpoint_risk.max(checkpoint.risk_score);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - breach {}, collapse {}, wave-{} risk {:.1}",
                run_idx + 1,
                config.num_runs,
                analytics.first_breach_wave,
                analytics.first_base_collapse_wave,
                config.checkpoint_wave,
                checkpoint.risk_score
            );
        }
    }

    SweepReport {
        num_runs: config.num_runs,
        checkpoint_wave: config.checkpoint_wave,
        runs_breached,
        runs_collapsed,
        earliest_breach_wave,
        earliest_collapse_wave,
        avg_first_breach_wave: breach_wave_sum as f64 / runs_breached.max(1) as f64,
        worst_checkpoint_risk,
    }
}
