//! Predicate evaluation over the card list.
//!
//! Dimensions combine with AND; an empty dimension always passes. Within a
//! dimension the rules differ on purpose:
//!
//! | Dimension | Rule |
//! |-----------|------|
//! | visibility | shields/boards hidden by their toggle fail first |
//! | name | lowercase substring |
//! | architecture | card lists it |
//! | vendor | exact equality |
//! | soc | card has ANY selected SoC |
//! | hardware tags | card has ALL selected tags |
//! | compatibles | EVERY pattern matches at least one compatible |
//!
//! Every pass re-evaluates the whole list; there is no incremental state.

use super::wildcard::WildcardPattern;
use super::FacetState;
use crate::model::Card;
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// A [`FacetState`] prepared for evaluation against many cards.
///
/// Compiles the compatible patterns once per pass instead of once per card.
#[derive(Debug)]
pub struct CompiledFilter<'a> {
    state: &'a FacetState,
    name_query: String,
    patterns: Vec<Option<WildcardPattern>>,
}

impl<'a> CompiledFilter<'a> {
    pub fn new(state: &'a FacetState) -> Self {
        let patterns = state
            .compatible_patterns
            .iter()
            .map(|p| match WildcardPattern::new(p) {
                Ok(compiled) => Some(compiled),
                Err(e) => {
                    warn!(pattern = %p, error = %e, "compatible pattern does not compile, nothing will match it");
                    None
                }
            })
            .collect();

        Self {
            state,
            name_query: state.name_query.to_lowercase(),
            patterns,
        }
    }

    pub fn matches(&self, card: &Card) -> bool {
        let state = self.state;

        if card.is_shield && !state.show_shields {
            return false;
        }
        if !card.is_shield && !state.show_boards {
            return false;
        }

        if !self.name_query.is_empty() && !card.name.to_lowercase().contains(&self.name_query) {
            return false;
        }

        if let Some(arch) = &state.architecture {
            if !card.architectures.contains(arch) {
                return false;
            }
        }

        if let Some(vendor) = &state.vendor {
            if card.vendor != *vendor {
                return false;
            }
        }

        if !state.socs.is_empty() && card.socs.is_disjoint(&state.socs) {
            return false;
        }

        if !state
            .hardware_tags
            .iter()
            .all(|tag| card.supported_features.contains(tag))
        {
            return false;
        }

        self.patterns.iter().all(|pattern| match pattern {
            Some(p) => p.matches_any(&card.compatibles),
            None => false,
        })
    }
}

/// Whether a single card passes the filter.
///
/// Compiles the compatible patterns on every call; use [`CompiledFilter`] or
/// [`evaluate`] when checking many cards against one state.
pub fn matches(card: &Card, state: &FacetState) -> bool {
    CompiledFilter::new(state).matches(card)
}

/// Visible/total counts, split by boards and shields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterSummary {
    pub visible_boards: usize,
    pub total_boards: usize,
    pub visible_shields: usize,
    pub total_shields: usize,
}

impl fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} of {} boards, {} of {} shields",
            self.visible_boards, self.total_boards, self.visible_shields, self.total_shields
        )
    }
}

/// Result of one full pass: a flag per card (same order as the input) plus counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub visible: Vec<bool>,
    pub summary: FilterSummary,
}

pub fn evaluate(cards: &[Card], state: &FacetState) -> Evaluation {
    let filter = CompiledFilter::new(state);
    let mut summary = FilterSummary::default();

    let visible = cards
        .iter()
        .map(|card| {
            let shown = filter.matches(card);
            if card.is_shield {
                summary.total_shields += 1;
                summary.visible_shields += usize::from(shown);
            } else {
                summary.total_boards += 1;
                summary.visible_boards += usize::from(shown);
            }
            shown
        })
        .collect();

    Evaluation { visible, summary }
}
