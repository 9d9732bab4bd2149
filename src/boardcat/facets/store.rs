//! # Facet State Store
//!
//! Owns the [`FacetState`] of one filtering session. All mutation goes through
//! the operations below; the evaluator and the UI only ever read the state.
//!
//! Invalid input is dropped where it enters, without an error:
//! - tags outside the catalog's vocabulary, or already selected
//! - architectures/vendors no card carries
//! - families missing from the hierarchy, series/SoCs outside the current options
//! - tags and SoCs containing `,`, which the fragment cannot carry
//! - blank or duplicate compatible patterns, or patterns containing `|`
//!
//! Changing `families` or `series` re-runs the cascade before returning, so the
//! state never holds a series or SoC the selection cannot reach.

use super::cascade::{self, CascadeOptions};
use super::{FacetState, FacetValue};
use crate::model::{SocHierarchy, Vocabulary};
use std::collections::BTreeSet;
use tracing::debug;

/// Separator used for SoC and tag lists in the URL fragment.
pub const LIST_DELIMITER: char = ',';

/// Separator used for compatible patterns in the URL fragment.
pub const PATTERN_DELIMITER: char = '|';

#[derive(Debug, Clone)]
pub struct FacetStore {
    state: FacetState,
    hierarchy: SocHierarchy,
    vocabulary: Vocabulary,
}

impl FacetStore {
    pub fn new(hierarchy: SocHierarchy, vocabulary: Vocabulary) -> Self {
        Self {
            state: FacetState::default(),
            hierarchy,
            vocabulary,
        }
    }

    pub fn state(&self) -> &FacetState {
        &self.state
    }

    pub fn hierarchy(&self) -> &SocHierarchy {
        &self.hierarchy
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Current series/SoC options for the family/series selection.
    pub fn cascade_options(&self) -> CascadeOptions {
        let mut options =
            cascade::options(&self.hierarchy, &self.state.families, &self.state.series);
        options.socs.retain(|soc| !soc.contains(LIST_DELIMITER));
        options
    }

    /// Vocabulary tags that can still be added, sorted.
    pub fn tag_choices(&self) -> impl Iterator<Item = &String> {
        self.vocabulary
            .tags
            .iter()
            .filter(|t| !t.contains(LIST_DELIMITER))
            .filter(|t| !self.state.hardware_tags.contains(t))
    }

    /// Replaces the value of one dimension.
    pub fn set(&mut self, value: FacetValue) {
        debug!(dimension = value.dimension(), "set facet");
        match value {
            FacetValue::Name(query) => self.state.name_query = query.to_lowercase(),
            FacetValue::Architecture(arch) => {
                self.state.architecture = known(arch, &self.vocabulary.architectures, "arch");
            }
            FacetValue::Vendor(vendor) => {
                self.state.vendor = known(vendor, &self.vocabulary.vendors, "vendor");
            }
            FacetValue::Families(families) => {
                self.state.families = families
                    .into_iter()
                    .filter(|f| {
                        let ok = self.hierarchy.has_family(f);
                        if !ok {
                            debug!(family = %f, "dropped unknown family");
                        }
                        ok
                    })
                    .collect();
                cascade::prune(&self.hierarchy, &mut self.state);
            }
            FacetValue::Series(series) => {
                self.state.series = series.into_iter().collect();
                cascade::prune(&self.hierarchy, &mut self.state);
            }
            FacetValue::Socs(socs) => {
                let valid = self.cascade_options().socs;
                self.state.socs = socs
                    .into_iter()
                    .filter(|s| {
                        let ok = valid.binary_search(s).is_ok();
                        if !ok {
                            debug!(soc = %s, "dropped soc outside current options");
                        }
                        ok
                    })
                    .collect();
            }
            FacetValue::ShowBoards(show) => self.state.show_boards = show,
            FacetValue::ShowShields(show) => self.state.show_shields = show,
        }
    }

    /// Adds a hardware tag. Returns whether the state changed.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if !self.vocabulary.tags.contains(tag) || tag.contains(LIST_DELIMITER) {
            debug!(tag, "ignored tag outside vocabulary");
            return false;
        }
        if self.state.hardware_tags.iter().any(|t| t == tag) {
            debug!(tag, "ignored duplicate tag");
            return false;
        }
        self.state.hardware_tags.push(tag.to_string());
        true
    }

    /// Removes a hardware tag. Returns whether the state changed.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.state.hardware_tags.len();
        self.state.hardware_tags.retain(|t| t != tag.trim());
        before != self.state.hardware_tags.len()
    }

    /// Adds a compatible wildcard pattern. Returns whether the state changed.
    pub fn add_compatible(&mut self, pattern: &str) -> bool {
        let pattern = pattern.trim();
        if pattern.is_empty() || pattern.contains(PATTERN_DELIMITER) {
            debug!(pattern, "ignored unusable compatible pattern");
            return false;
        }
        if self.state.compatible_patterns.iter().any(|p| p == pattern) {
            debug!(pattern, "ignored duplicate compatible pattern");
            return false;
        }
        self.state.compatible_patterns.push(pattern.to_string());
        true
    }

    /// Removes a compatible pattern. Returns whether the state changed.
    pub fn remove_compatible(&mut self, pattern: &str) -> bool {
        let before = self.state.compatible_patterns.len();
        self.state
            .compatible_patterns
            .retain(|p| p != pattern.trim());
        before != self.state.compatible_patterns.len()
    }

    /// Restores every dimension to its default. The catalog data is untouched.
    pub fn reset(&mut self) {
        self.state = FacetState::default();
    }

    /// Replaces the whole state, pushing every value through the same
    /// validation as the individual operations.
    pub fn load(&mut self, incoming: FacetState) {
        self.reset();
        self.set(FacetValue::Name(incoming.name_query));
        self.set(FacetValue::Architecture(incoming.architecture));
        self.set(FacetValue::Vendor(incoming.vendor));
        self.set(FacetValue::Families(incoming.families.into_iter().collect()));
        self.set(FacetValue::Series(incoming.series.into_iter().collect()));
        self.set(FacetValue::Socs(incoming.socs.into_iter().collect()));
        for tag in &incoming.hardware_tags {
            self.add_tag(tag);
        }
        for pattern in &incoming.compatible_patterns {
            self.add_compatible(pattern);
        }
        self.set(FacetValue::ShowBoards(incoming.show_boards));
        self.set(FacetValue::ShowShields(incoming.show_shields));
    }
}

fn known(value: Option<String>, options: &BTreeSet<String>, dimension: &str) -> Option<String> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())?;
    if options.contains(&value) {
        Some(value)
    } else {
        debug!(dimension, value = %value, "dropped value no card carries");
        None
    }
}
