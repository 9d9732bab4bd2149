//! # Catalog Model
//!
//! The data the facet engine reads but never mutates: the [`Card`] records
//! rendered by the documentation page, the static [`SocHierarchy`], and the
//! [`Vocabulary`] derived from the cards once at load time.
//!
//! ## Card Attributes
//!
//! The page renderer attaches one attribute map per card, with multi-valued
//! attributes written as space-separated tokens:
//!
//! | Key | Kind | Field |
//! |-----|------|-------|
//! | `name` | text (required) | [`Card::name`] |
//! | `arch` | tokens | [`Card::architectures`] |
//! | `vendor` | text | [`Card::vendor`] |
//! | `socs` | tokens | [`Card::socs`] |
//! | `supported-features` | tokens | [`Card::supported_features`] |
//! | `compatibles` | tokens | [`Card::compatibles`] |
//! | `shield` / `is-shield` | `true`/`false` | [`Card::is_shield`] |
//!
//! A catalog file may also carry cards as structured JSON records; see
//! [`CardEntry`].

use crate::error::{BoardcatError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One catalog entry: a board or a shield.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Card {
    pub name: String,
    #[serde(default)]
    pub architectures: BTreeSet<String>,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub socs: BTreeSet<String>,
    #[serde(default)]
    pub supported_features: BTreeSet<String>,
    #[serde(default)]
    pub compatibles: BTreeSet<String>,
    #[serde(default)]
    pub is_shield: bool,
}

impl Card {
    /// A board with the given name and no other attributes.
    pub fn board(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            architectures: BTreeSet::new(),
            vendor: String::new(),
            socs: BTreeSet::new(),
            supported_features: BTreeSet::new(),
            compatibles: BTreeSet::new(),
            is_shield: false,
        }
    }

    /// A shield with the given name and no other attributes.
    pub fn shield(name: impl Into<String>) -> Self {
        Self {
            is_shield: true,
            ..Self::board(name)
        }
    }

    pub fn with_arch(mut self, arch: &str) -> Self {
        self.architectures.insert(arch.to_string());
        self
    }

    pub fn with_vendor(mut self, vendor: &str) -> Self {
        self.vendor = vendor.to_string();
        self
    }

    pub fn with_socs(mut self, socs: &[&str]) -> Self {
        self.socs.extend(socs.iter().map(|s| s.to_string()));
        self
    }

    pub fn with_features(mut self, features: &[&str]) -> Self {
        self.supported_features
            .extend(features.iter().map(|s| s.to_string()));
        self
    }

    pub fn with_compatibles(mut self, compatibles: &[&str]) -> Self {
        self.compatibles
            .extend(compatibles.iter().map(|s| s.to_string()));
        self
    }

    /// Builds a card from the attribute map the page renderer attaches to it.
    ///
    /// Unknown keys are ignored. A missing or blank `name` means the page
    /// template is broken, which is reported as a catalog error.
    pub fn from_attributes(attrs: &BTreeMap<String, String>) -> Result<Self> {
        let name = attrs
            .get("name")
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| BoardcatError::Catalog("card is missing a name attribute".into()))?;

        let shield = attrs
            .get("shield")
            .or_else(|| attrs.get("is-shield"))
            .map(|v| {
                let v = v.trim();
                v.eq_ignore_ascii_case("true") || v == "1"
            })
            .unwrap_or(false);

        Ok(Self {
            name: name.to_string(),
            architectures: tokens(attrs.get("arch")),
            vendor: attrs
                .get("vendor")
                .map(|v| v.trim().to_string())
                .unwrap_or_default(),
            socs: tokens(attrs.get("socs")),
            supported_features: tokens(attrs.get("supported-features")),
            compatibles: tokens(attrs.get("compatibles")),
            is_shield: shield,
        })
    }

    /// Strips padding around the vendor and every set member, dropping blanks.
    fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            architectures: trim_all(self.architectures),
            vendor: self.vendor.trim().to_string(),
            socs: trim_all(self.socs),
            supported_features: trim_all(self.supported_features),
            compatibles: trim_all(self.compatibles),
            is_shield: self.is_shield,
        }
    }
}

fn trim_all(values: BTreeSet<String>) -> BTreeSet<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

fn tokens(value: Option<&String>) -> BTreeSet<String> {
    value
        .map(|v| v.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// A card as it appears in a catalog file: either a structured record or the
/// raw attribute map.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CardEntry {
    Structured(Card),
    Attributes(BTreeMap<String, String>),
}

impl CardEntry {
    pub fn into_card(self) -> Result<Card> {
        match self {
            CardEntry::Structured(card) => {
                if card.name.trim().is_empty() {
                    return Err(BoardcatError::Catalog("card has an empty name".into()));
                }
                Ok(card.trimmed())
            }
            CardEntry::Attributes(attrs) => Card::from_attributes(&attrs),
        }
    }
}

/// Static `family → series → SoCs` mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocHierarchy(BTreeMap<String, BTreeMap<String, Vec<String>>>);

impl SocHierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a series (and its SoCs) under a family, merging with what is there.
    pub fn with_series(mut self, family: &str, series: &str, socs: &[&str]) -> Self {
        let entry = self
            .0
            .entry(family.to_string())
            .or_default()
            .entry(series.to_string())
            .or_default();
        for soc in socs {
            if !entry.iter().any(|s| s == soc) {
                entry.push(soc.to_string());
            }
        }
        self
    }

    /// Family names, sorted.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn has_family(&self, family: &str) -> bool {
        self.0.contains_key(family)
    }

    /// The series map for one family.
    pub fn series_of(&self, family: &str) -> Option<&BTreeMap<String, Vec<String>>> {
        self.0.get(family)
    }

    /// Whether any family/series lists this SoC.
    pub fn contains_soc(&self, soc: &str) -> bool {
        self.0
            .values()
            .flat_map(|series| series.values())
            .any(|socs| socs.iter().any(|s| s == soc))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Values observed across all cards, computed once per catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Vocabulary {
    pub tags: BTreeSet<String>,
    pub architectures: BTreeSet<String>,
    pub vendors: BTreeSet<String>,
}

impl Vocabulary {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut vocab = Self::default();
        for card in cards {
            vocab
                .tags
                .extend(card.supported_features.iter().cloned());
            vocab
                .architectures
                .extend(card.architectures.iter().cloned());
            if !card.vendor.is_empty() {
                vocab.vendors.insert(card.vendor.clone());
            }
        }
        vocab
    }
}

/// The full, immutable input of a filtering session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub cards: Vec<Card>,
    pub hierarchy: SocHierarchy,
}

impl Catalog {
    pub fn new(cards: Vec<Card>, hierarchy: SocHierarchy) -> Self {
        Self { cards, hierarchy }
    }

    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::from_cards(&self.cards)
    }
}

/// On-disk layout of a catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDocument {
    pub cards: Vec<CardEntry>,
    #[serde(default)]
    pub socs: SocHierarchy,
}

impl CatalogDocument {
    pub fn into_catalog(self) -> Result<Catalog> {
        let cards = self
            .cards
            .into_iter()
            .map(CardEntry::into_card)
            .collect::<Result<Vec<_>>>()?;
        Ok(Catalog::new(cards, self.socs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn card_from_attributes_splits_tokens() {
        let card = Card::from_attributes(&attrs(&[
            ("name", "nRF52840 DK"),
            ("arch", "arm"),
            ("vendor", "nordic"),
            ("socs", "nrf52840"),
            ("supported-features", "gpio  spi\ti2c"),
            ("compatibles", "nordic,nrf52840-dk nordic,nrf52840"),
        ]))
        .unwrap();

        assert_eq!(card.name, "nRF52840 DK");
        assert_eq!(card.vendor, "nordic");
        assert!(card.architectures.contains("arm"));
        assert_eq!(card.supported_features.len(), 3);
        assert_eq!(card.compatibles.len(), 2);
        assert!(!card.is_shield);
    }

    #[test]
    fn card_from_attributes_reads_shield_flag() {
        let card = Card::from_attributes(&attrs(&[("name", "x"), ("shield", "TRUE")])).unwrap();
        assert!(card.is_shield);

        let card = Card::from_attributes(&attrs(&[("name", "x"), ("is-shield", "false")])).unwrap();
        assert!(!card.is_shield);
    }

    #[test]
    fn card_without_name_is_a_catalog_error() {
        let err = Card::from_attributes(&attrs(&[("vendor", "st")])).unwrap_err();
        assert!(matches!(err, BoardcatError::Catalog(_)));

        let err = Card::from_attributes(&attrs(&[("name", "   ")])).unwrap_err();
        assert!(matches!(err, BoardcatError::Catalog(_)));
    }

    #[test]
    fn catalog_document_accepts_both_card_forms() {
        let json = r#"{
            "cards": [
                {"name": "a", "vendor": "nordic", "socs": ["nrf52840"], "is_shield": false},
                {"name": "b", "arch": "arm riscv", "shield": "true"}
            ],
            "socs": {"Nordic": {"nRF52": ["nrf52840"]}}
        }"#;
        let doc: CatalogDocument = serde_json::from_str(json).unwrap();
        let catalog = doc.into_catalog().unwrap();

        assert_eq!(catalog.cards.len(), 2);
        assert!(catalog.cards[0].socs.contains("nrf52840"));
        assert!(catalog.cards[1].is_shield);
        assert_eq!(catalog.cards[1].architectures.len(), 2);
        assert!(catalog.hierarchy.contains_soc("nrf52840"));
    }

    #[test]
    fn structured_cards_are_trimmed() {
        let json = r#"{"name": " Acme Board ", "architectures": [" arm", ""],
                       "vendor": "acme ", "socs": ["nrf5340 "],
                       "supported_features": [" gpio"], "compatibles": ["acme,x "]}"#;
        let entry: CardEntry = serde_json::from_str(json).unwrap();
        let card = entry.into_card().unwrap();

        assert_eq!(card.name, "Acme Board");
        assert_eq!(card.vendor, "acme");
        assert_eq!(card.architectures.iter().collect::<Vec<_>>(), vec!["arm"]);
        assert!(card.socs.contains("nrf5340"));
        assert!(card.supported_features.contains("gpio"));
        assert!(card.compatibles.contains("acme,x"));
    }

    #[test]
    fn vocabulary_collects_tags_archs_and_vendors() {
        let cards = vec![
            Card::board("a")
                .with_arch("arm")
                .with_vendor("nordic")
                .with_features(&["gpio", "spi"]),
            Card::board("b").with_arch("riscv").with_features(&["gpio", "i2c"]),
        ];
        let vocab = Vocabulary::from_cards(&cards);

        assert_eq!(
            vocab.tags.iter().collect::<Vec<_>>(),
            vec!["gpio", "i2c", "spi"]
        );
        assert_eq!(vocab.architectures.len(), 2);
        assert_eq!(vocab.vendors.iter().collect::<Vec<_>>(), vec!["nordic"]);
    }

    #[test]
    fn hierarchy_merges_series() {
        let h = SocHierarchy::new()
            .with_series("Nordic", "nRF52", &["nrf52832"])
            .with_series("Nordic", "nRF52", &["nrf52840", "nrf52832"]);

        assert_eq!(h.series_of("Nordic").unwrap()["nRF52"].len(), 2);
        assert!(h.has_family("Nordic"));
        assert!(!h.contains_soc("stm32f4"));
    }
}
