//! # URL Fragment Codec
//!
//! A [`FacetState`] travels in the URL fragment as form-encoded pairs:
//!
//! | Key | Value |
//! |-----|-------|
//! | `name` | name query |
//! | `arch` | architecture |
//! | `vendor` | vendor |
//! | `soc` | comma-separated SoCs |
//! | `features` | comma-separated hardware tags |
//! | `compatibles` | `|`-separated wildcard patterns |
//! | `show-boards` | `false` when boards are hidden |
//! | `show-shields` | `false` when shields are hidden |
//!
//! Defaults are never written, so the default state encodes to an empty
//! fragment. Decoding is lenient: unknown keys, SoCs missing from the
//! hierarchy and tags outside the vocabulary are skipped, and the remaining
//! keys still apply. Family and series selections are not part of the
//! fragment; they only narrow the option lists and never affect which cards
//! match.

use super::store::{LIST_DELIMITER, PATTERN_DELIMITER};
use super::FacetState;
use crate::model::{SocHierarchy, Vocabulary};
use tracing::debug;
use url::form_urlencoded;

/// Serializes the state to a fragment (without the leading `#`).
pub fn encode(state: &FacetState) -> String {
    let mut out = form_urlencoded::Serializer::new(String::new());

    if !state.name_query.is_empty() {
        out.append_pair("name", &state.name_query);
    }
    if let Some(arch) = &state.architecture {
        out.append_pair("arch", arch);
    }
    if let Some(vendor) = &state.vendor {
        out.append_pair("vendor", vendor);
    }
    if !state.socs.is_empty() {
        out.append_pair("soc", &join(state.socs.iter(), LIST_DELIMITER));
    }
    if !state.hardware_tags.is_empty() {
        out.append_pair("features", &join(state.hardware_tags.iter(), LIST_DELIMITER));
    }
    if !state.compatible_patterns.is_empty() {
        out.append_pair(
            "compatibles",
            &join(state.compatible_patterns.iter(), PATTERN_DELIMITER),
        );
    }
    if !state.show_boards {
        out.append_pair("show-boards", "false");
    }
    if !state.show_shields {
        out.append_pair("show-shields", "false");
    }

    out.finish()
}

/// Parses a fragment into a state. Keys that are absent keep their defaults.
///
/// Accepts the fragment with or without a leading `#`.
pub fn decode(fragment: &str, vocabulary: &Vocabulary, hierarchy: &SocHierarchy) -> FacetState {
    let fragment = fragment.trim();
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    let mut state = FacetState::default();

    for (key, value) in form_urlencoded::parse(fragment.as_bytes()) {
        match &*key {
            "name" => state.name_query = value.into_owned(),
            "arch" => state.architecture = non_empty(&value),
            "vendor" => state.vendor = non_empty(&value),
            "soc" => {
                state.socs = split(&value, LIST_DELIMITER)
                    .filter(|soc| {
                        let ok = hierarchy.contains_soc(soc);
                        if !ok {
                            debug!(soc = %soc, "skipped unknown soc in fragment");
                        }
                        ok
                    })
                    .collect();
            }
            "features" => {
                state.hardware_tags = unique(split(&value, LIST_DELIMITER).filter(|tag| {
                    let ok = vocabulary.tags.contains(tag);
                    if !ok {
                        debug!(tag = %tag, "skipped unknown tag in fragment");
                    }
                    ok
                }));
            }
            "compatibles" => {
                state.compatible_patterns = unique(split(&value, PATTERN_DELIMITER));
            }
            "show-boards" => state.show_boards = !is_false(&value),
            "show-shields" => state.show_shields = !is_false(&value),
            other => debug!(key = other, "ignored unknown fragment key"),
        }
    }

    state
}

fn join<'a>(values: impl Iterator<Item = &'a String>, delimiter: char) -> String {
    values
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(&delimiter.to_string())
}

fn split(value: &str, delimiter: char) -> impl Iterator<Item = String> + '_ {
    value
        .split(delimiter)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn unique(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn is_false(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("false")
}
