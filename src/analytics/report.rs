//! Scheme summary and timeline rendering.
//!
//! Text output follows the balance tooling conventions: sectioned
//! tables for humans, pretty JSON for further analysis.

use serde::Serialize;

use super::route::{build_route_risk_timeline, RouteBalanceSnapshot};
use super::wave::WaveBalanceSnapshot;
use crate::balance::assumptions::{BalanceAssumptions, PresetId};
use crate::balance::profile::{BalanceAnalytics, BalanceProfile};

/// One preset's row in the cross-preset comparison.
#[derive(Debug, Clone, Serialize)]
pub struct SchemeSummaryRow {
    pub id: PresetId,
    pub label: &'static str,
    pub assumptions: BalanceAssumptions,
    pub snapshot: WaveBalanceSnapshot,
    pub route_snapshot: RouteBalanceSnapshot,
    pub analytics: BalanceAnalytics,
}

/// The full comparison at one checkpoint wave.
#[derive(Debug, Clone, Serialize)]
pub struct SchemeSummary {
    pub wave: u32,
    pub rows: Vec<SchemeSummaryRow>,
}

impl SchemeSummary {
    /// Human-readable comparison report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str(&format!(
            "── PRESET COMPARISON (wave {}) ──────────────────────────────────\n",
            self.wave
        ));
        report.push_str("  Preset      Enemies   HP     Atk    Income   Breach   Risk\n");
        report.push_str("  ──────      ───────   ──     ───    ──────   ──────   ────\n");
        for row in &self.rows {
            report.push_str(&format!(
                "  {:<10}  {:>7}   {:>4}   {:>4}   {:>6}   {:>5.2}   {:>5.1}\n",
                row.label,
                row.route_snapshot.total_enemy_count,
                row.snapshot.enemy_hp,
                row.snapshot.enemy_attack,
                row.snapshot.predicted_coin_income,
                row.route_snapshot.breach_rate,
                row.route_snapshot.risk_score,
            ));
        }
        report.push('\n');

        report.push_str("── HORIZON ANALYTICS ────────────────────────────────────────────\n");
        report.push_str("  Preset      First Breach   Collapse   Assessment\n");
        report.push_str("  ──────      ────────────   ────────   ──────────\n");
        for row in &self.rows {
            let breach = wave_or_dash(row.analytics.first_breach_wave);
            let collapse = wave_or_dash(row.analytics.first_base_collapse_wave);
            report.push_str(&format!(
                "  {:<10}  {:>12}   {:>8}   {}\n",
                row.label,
                breach,
                collapse,
                assessment(&row.analytics)
            ));
        }
        report.push('\n');

        report.push_str("── TUNING KNOBS ─────────────────────────────────────────────────\n");
        report.push_str("  Preset      Count  Power  Speed  Player  Econ   Cost   Hero\n");
        for row in &self.rows {
            let a = &row.assumptions;
            report.push_str(&format!(
                "  {:<10}  {:>5.2}  {:>5.2}  {:>5.2}  {:>6.2}  {:>5.2}  {:>5.2}  {:>5.2}\n",
                row.label,
                a.enemy_count_scale,
                a.enemy_power_scale,
                a.enemy_speed_scale,
                a.player_power_scale,
                a.economy_scale,
                a.upgrade_cost_scale,
                a.hero_growth_scale,
            ));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    /// JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn wave_or_dash(wave: u32) -> String {
    if wave == 0 {
        "-".to_string()
    } else {
        wave.to_string()
    }
}

fn assessment(analytics: &BalanceAnalytics) -> &'static str {
    match (
        analytics.first_base_collapse_wave,
        analytics.first_breach_wave,
    ) {
        (0, 0) => "TOO SAFE - defense is never threatened",
        (0, breach) if breach >= 40 => "GOOD - pressure builds late",
        (0, _) => "TENSE - sustained mid-game pressure",
        (collapse, _) if collapse < 40 => "TOO HARD - base falls early",
        _ => "HARD - base falls within the horizon",
    }
}

/// Per-wave risk table for one profile.
pub fn timeline_text(profile: &BalanceProfile, start_wave: u32, end_wave: u32) -> String {
    let timeline = build_route_risk_timeline(profile, start_wave, end_wave);
    let mut report = String::new();

    report.push_str(&format!(
        "── RISK TIMELINE ({}) ───────────────────────────────────────────\n",
        profile.assumptions.label
    ));
    report.push_str("  Wave   Total   Elite   KillProg   Breach   HP Loss   Risk\n");
    report.push_str("  ────   ─────   ─────   ────────   ──────   ───────   ────\n");
    for route in &timeline {
        report.push_str(&format!(
            "  {:>4}   {:>5}   {:>5}   {:>8.2}   {:>6.2}   {:>7}   {:>5.1}\n",
            route.wave,
            route.total_enemy_count,
            route.elite_enemy_count,
            route.kill_progress,
            route.breach_rate,
            route.predicted_base_hp_loss,
            route.risk_score,
        ));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PresetRegistry;

    #[test]
    fn test_summary_text_lists_all_presets() {
        let registry = PresetRegistry::new();
        let summary = registry.build_balance_scheme_summary(10);
        let text = summary.to_text();
        assert!(text.contains("Casual"));
        assert!(text.contains("Standard"));
        assert!(text.contains("Hardcore"));
        assert!(text.contains("HORIZON ANALYTICS"));
    }

    #[test]
    fn test_summary_json_round_trips_as_value() {
        let registry = PresetRegistry::new();
        let summary = registry.build_balance_scheme_summary(10);
        let json = summary.to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["wave"], 10);
        assert_eq!(value["rows"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_timeline_text_covers_range() {
        let registry = PresetRegistry::new();
        let text = timeline_text(registry.active(), 1, 5);
        for wave in 1..=5 {
            assert!(text.contains(&format!("\n  {:>4} ", wave)));
        }
    }
}
