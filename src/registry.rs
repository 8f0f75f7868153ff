//! Compiled preset registry.
//!
//! All three profiles are built eagerly at startup; the registry is an
//! explicit configuration value passed to whatever consumes it, not a
//! process-wide mutable singleton.

use crate::analytics::report::{SchemeSummary, SchemeSummaryRow};
use crate::analytics::route::calculate_route_balance_snapshot;
use crate::analytics::wave::calculate_wave_snapshot;
use crate::balance::assumptions::{preset_assumptions, PresetId};
use crate::balance::compiler::build_profile;
use crate::balance::profile::BalanceProfile;

/// Holds the compiled profile for every preset plus the active choice.
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    profiles: [BalanceProfile; 3],
    active: PresetId,
}

impl PresetRegistry {
    /// Compile every preset with `standard` active.
    pub fn new() -> Self {
        Self::with_active(PresetId::Standard)
    }

    /// Compile every preset with the given one active.
    pub fn with_active(active: PresetId) -> Self {
        let profiles = PresetId::all().map(|id| build_profile(id, &preset_assumptions(id)));
        Self { profiles, active }
    }

    pub fn active_id(&self) -> PresetId {
        self.active
    }

    /// The profile live gameplay reads its numbers from.
    pub fn active(&self) -> &BalanceProfile {
        self.get(self.active)
    }

    pub fn get(&self, id: PresetId) -> &BalanceProfile {
        &self.profiles[id.index()]
    }

    /// Cross-preset comparison at one checkpoint wave, for tooling and
    /// the debug table.
    pub fn build_balance_scheme_summary(&self, wave: u32) -> SchemeSummary {
        let rows = self
            .profiles
            .iter()
            .map(|profile| SchemeSummaryRow {
                id: profile.id,
                label: profile.assumptions.label,
                assumptions: profile.assumptions,
                snapshot: calculate_wave_snapshot(profile, wave),
                route_snapshot: calculate_route_balance_snapshot(profile, wave),
                analytics: profile.analytics,
            })
            .collect();
        SchemeSummary { wave, rows }
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_builds_every_preset() {
        let registry = PresetRegistry::new();
        for id in PresetId::all() {
            assert_eq!(registry.get(id).id, id);
        }
        assert_eq!(registry.active_id(), PresetId::Standard);
    }

    #[test]
    fn test_with_active_selects_profile() {
        let registry = PresetRegistry::with_active(PresetId::Hardcore);
        assert_eq!(registry.active().id, PresetId::Hardcore);
        assert_eq!(registry.active().assumptions.label, "Hardcore");
    }

    #[test]
    fn test_summary_row_order_matches_preset_order() {
        let registry = PresetRegistry::new();
        let summary = registry.build_balance_scheme_summary(10);
        let ids: Vec<_> = summary.rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, PresetId::all().to_vec());
    }
}
