//! Difficulty presets: named bundles of scale factors.
//!
//! Every factor is a positive multiplier centered at 1.0, meaning "no
//! change from the authored baseline". The fixed preset table is
//! populated once at startup; there are no runtime edits.

use serde::Serialize;

/// Identifier for one of the authored difficulty presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetId {
    Casual,
    Standard,
    Hardcore,
}

impl PresetId {
    pub fn all() -> [PresetId; 3] {
        [PresetId::Casual, PresetId::Standard, PresetId::Hardcore]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PresetId::Casual => "casual",
            PresetId::Standard => "standard",
            PresetId::Hardcore => "hardcore",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            PresetId::Casual => 0,
            PresetId::Standard => 1,
            PresetId::Hardcore => 2,
        }
    }

    /// Parse a preset id. Unknown ids are a configuration error the
    /// caller should surface before any profile is consumed.
    pub fn parse(id: &str) -> Option<PresetId> {
        match id {
            "casual" => Some(PresetId::Casual),
            "standard" => Some(PresetId::Standard),
            "hardcore" => Some(PresetId::Hardcore),
            _ => None,
        }
    }
}

/// One named bundle of tuning knobs.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BalanceAssumptions {
    pub label: &'static str,
    /// Enemies per wave.
    pub enemy_count_scale: f64,
    /// Enemy HP/attack and their per-wave growth.
    pub enemy_power_scale: f64,
    /// Enemy move speed and its per-wave growth.
    pub enemy_speed_scale: f64,
    /// Player-side combat power (buildings, soldiers, hero).
    pub player_power_scale: f64,
    /// Raw income: starting coins, drops, wave bonuses.
    pub economy_scale: f64,
    /// Upgrade and construction costs (decoupled from income).
    pub upgrade_cost_scale: f64,
    /// Farm passive income.
    pub farm_income_scale: f64,
    /// Hero leveling pace and per-level gains.
    pub hero_growth_scale: f64,
    /// Hero skill potency.
    pub hero_skill_scale: f64,
}

impl BalanceAssumptions {
    /// All knobs at the neutral 1.0 baseline.
    pub fn neutral(label: &'static str) -> Self {
        Self {
            label,
            enemy_count_scale: 1.0,
            enemy_power_scale: 1.0,
            enemy_speed_scale: 1.0,
            player_power_scale: 1.0,
            economy_scale: 1.0,
            upgrade_cost_scale: 1.0,
            farm_income_scale: 1.0,
            hero_growth_scale: 1.0,
            hero_skill_scale: 1.0,
        }
    }
}

/// The fixed assumption table for the three authored presets.
pub fn preset_assumptions(id: PresetId) -> BalanceAssumptions {
    match id {
        PresetId::Casual => BalanceAssumptions {
            label: "Casual",
            enemy_count_scale: 0.85,
            enemy_power_scale: 0.8,
            enemy_speed_scale: 0.9,
            player_power_scale: 1.15,
            economy_scale: 1.2,
            upgrade_cost_scale: 0.85,
            farm_income_scale: 1.15,
            hero_growth_scale: 1.15,
            hero_skill_scale: 1.1,
        },
        PresetId::Standard => BalanceAssumptions::neutral("Standard"),
        PresetId::Hardcore => BalanceAssumptions {
            label: "Hardcore",
            enemy_count_scale: 1.15,
            enemy_power_scale: 1.3,
            enemy_speed_scale: 1.1,
            player_power_scale: 0.95,
            economy_scale: 0.9,
            upgrade_cost_scale: 1.15,
            farm_income_scale: 0.9,
            hero_growth_scale: 0.95,
            hero_skill_scale: 0.95,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_ids() {
        assert_eq!(PresetId::parse("casual"), Some(PresetId::Casual));
        assert_eq!(PresetId::parse("standard"), Some(PresetId::Standard));
        assert_eq!(PresetId::parse("hardcore"), Some(PresetId::Hardcore));
        assert_eq!(PresetId::parse("nightmare"), None);
    }

    #[test]
    fn test_standard_is_neutral() {
        let a = preset_assumptions(PresetId::Standard);
        assert_eq!(a.enemy_count_scale, 1.0);
        assert_eq!(a.enemy_power_scale, 1.0);
        assert_eq!(a.player_power_scale, 1.0);
        assert_eq!(a.economy_scale, 1.0);
    }

    #[test]
    fn test_all_factors_positive() {
        for id in PresetId::all() {
            let a = preset_assumptions(id);
            for v in [
                a.enemy_count_scale,
                a.enemy_power_scale,
                a.enemy_speed_scale,
                a.player_power_scale,
                a.economy_scale,
                a.upgrade_cost_scale,
                a.farm_income_scale,
                a.hero_growth_scale,
                a.hero_skill_scale,
            ] {
                assert!(v > 0.0, "{}: factor must be positive", a.label);
            }
        }
    }

    #[test]
    fn test_enemy_power_ordering() {
        let casual = preset_assumptions(PresetId::Casual);
        let standard = preset_assumptions(PresetId::Standard);
        let hardcore = preset_assumptions(PresetId::Hardcore);
        assert!(casual.enemy_power_scale < standard.enemy_power_scale);
        assert!(standard.enemy_power_scale < hardcore.enemy_power_scale);
    }
}
