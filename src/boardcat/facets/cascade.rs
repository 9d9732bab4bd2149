//! Cascading option provider for the family → series → SoC selects.
//!
//! An empty selection at any level means "everything at that level". Options
//! are always recomputed from the hierarchy, never patched incrementally.

use super::FacetState;
use crate::model::SocHierarchy;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Valid choices for the dependent dimensions, each sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CascadeOptions {
    pub series: Vec<String>,
    pub socs: Vec<String>,
}

/// Computes the series and SoC options reachable from a family/series selection.
pub fn options(
    hierarchy: &SocHierarchy,
    families: &BTreeSet<String>,
    series: &BTreeSet<String>,
) -> CascadeOptions {
    let mut series_opts = BTreeSet::new();
    let mut soc_opts = BTreeSet::new();

    let effective = hierarchy
        .families()
        .filter(|family| families.is_empty() || families.contains(*family));

    for family in effective {
        let Some(family_series) = hierarchy.series_of(family) else {
            continue;
        };
        for (name, socs) in family_series {
            series_opts.insert(name.clone());
            if series.is_empty() || series.contains(name) {
                soc_opts.extend(socs.iter().cloned());
            }
        }
    }

    CascadeOptions {
        series: series_opts.into_iter().collect(),
        socs: soc_opts.into_iter().collect(),
    }
}

/// Drops selected series and SoCs that the current selection no longer reaches.
///
/// Series are pruned first so the SoC options are computed from the surviving
/// series. Invalid values are removed, never replaced.
pub fn prune(hierarchy: &SocHierarchy, state: &mut FacetState) -> CascadeOptions {
    let series_opts = options(hierarchy, &state.families, &BTreeSet::new()).series;
    state.series.retain(|s| {
        let keep = series_opts.binary_search(s).is_ok();
        if !keep {
            debug!(series = %s, "pruned unreachable series");
        }
        keep
    });

    let opts = options(hierarchy, &state.families, &state.series);
    state.socs.retain(|s| {
        let keep = opts.socs.binary_search(s).is_ok();
        if !keep {
            debug!(soc = %s, "pruned unreachable soc");
        }
        keep
    });

    opts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hierarchy() -> SocHierarchy {
        SocHierarchy::new()
            .with_series("Nordic", "nRF52", &["nrf52840", "nrf52832"])
            .with_series("Nordic", "nRF53", &["nrf5340"])
            .with_series("STM", "STM32F4", &["stm32f401", "stm32f407"])
    }

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_selection_offers_everything() {
        let opts = options(&hierarchy(), &set(&[]), &set(&[]));
        assert_eq!(opts.series, vec!["STM32F4", "nRF52", "nRF53"]);
        assert_eq!(opts.socs.len(), 5);
    }

    #[test]
    fn family_narrows_series_and_socs() {
        let opts = options(&hierarchy(), &set(&["Nordic"]), &set(&[]));
        assert_eq!(opts.series, vec!["nRF52", "nRF53"]);
        assert_eq!(opts.socs, vec!["nrf52832", "nrf52840", "nrf5340"]);
    }

    #[test]
    fn series_narrows_socs_but_not_series_options() {
        let opts = options(&hierarchy(), &set(&["Nordic"]), &set(&["nRF53"]));
        assert_eq!(opts.series, vec!["nRF52", "nRF53"]);
        assert_eq!(opts.socs, vec!["nrf5340"]);
    }

    #[test]
    fn unknown_family_offers_nothing() {
        let opts = options(&hierarchy(), &set(&["Espressif"]), &set(&[]));
        assert!(opts.series.is_empty());
        assert!(opts.socs.is_empty());
    }

    #[test]
    fn prune_drops_series_outside_families() {
        let mut state = FacetState {
            families: set(&["STM"]),
            series: set(&["nRF52", "STM32F4"]),
            socs: set(&["nrf52840", "stm32f407"]),
            ..Default::default()
        };
        let opts = prune(&hierarchy(), &mut state);

        assert_eq!(state.series, set(&["STM32F4"]));
        assert_eq!(state.socs, set(&["stm32f407"]));
        assert_eq!(opts.socs, vec!["stm32f401", "stm32f407"]);
    }

    #[test]
    fn prune_drops_socs_outside_series() {
        let mut state = FacetState {
            families: set(&["Nordic"]),
            series: set(&["nRF53"]),
            socs: set(&["nrf52840", "nrf5340"]),
            ..Default::default()
        };
        prune(&hierarchy(), &mut state);
        assert_eq!(state.socs, set(&["nrf5340"]));
    }

    #[test]
    fn prune_keeps_everything_when_nothing_is_selected() {
        let mut state = FacetState {
            socs: set(&["nrf52840", "stm32f401"]),
            ..Default::default()
        };
        prune(&hierarchy(), &mut state);
        assert_eq!(state.socs.len(), 2);
    }
}
