use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::hemisphere::Hemisphere;
use crate::month::MonthSet;

/// Normalize a creature name into its lookup key.
///
/// Trims, lowercases, and drops whitespace and hyphens, so `"Blue Marlin"`,
/// `" blue-marlin "` and `"bluemarlin"` all map to `bluemarlin`.
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// A selling price. Datasets carry either plain numbers or preformatted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    /// A price in bells.
    Bells(u64),
    /// A price as text, e.g. `"15,000"` or `"Varies"`.
    Text(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bells(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Months a creature can be caught, per hemisphere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthsAvailable {
    /// Months in the northern hemisphere.
    pub northern: MonthSet,
    /// Months in the southern hemisphere.
    pub southern: MonthSet,
}

impl MonthsAvailable {
    /// Months for the given hemisphere.
    pub fn get(&self, hemisphere: Hemisphere) -> &MonthSet {
        match hemisphere {
            Hemisphere::Northern => &self.northern,
            Hemisphere::Southern => &self.southern,
        }
    }
}

/// Static attributes of a single fish or bug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    /// Display name.
    pub name: String,
    /// The line shown when the creature is caught.
    #[serde(rename = "catchquote", default)]
    pub catch_quote: String,
    /// Price at the shop.
    pub nook_price: Price,
    /// Price paid by C.J. (fish only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cj_price: Option<Price>,
    /// Price paid by Flick (bugs only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flick_price: Option<Price>,
    /// Where it can be found.
    #[serde(default)]
    pub location: String,
    /// Hours of the day it is active.
    #[serde(default)]
    pub active_hours: String,
    /// Seasonal availability.
    pub months_available: MonthsAvailable,
    /// Link to a page with more details.
    #[serde(default)]
    pub details_link: String,
    /// Shadow size descriptor (fish only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_size: Option<String>,
}

impl Creature {
    /// Lookup key derived from the display name.
    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }

    /// Months available in a hemisphere.
    pub fn months(&self, hemisphere: Hemisphere) -> &MonthSet {
        self.months_available.get(hemisphere)
    }

    /// The category-specific buyer's price, if the dataset has one.
    pub fn venue_price(&self, category: Category) -> Option<&Price> {
        match category {
            Category::Fish => self.cj_price.as_ref(),
            Category::Bugs => self.flick_price.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;

    #[test]
    fn normalize_strips_spaces_and_hyphens() {
        assert_eq!(normalize_name("Blue Marlin"), "bluemarlin");
        assert_eq!(normalize_name("  Giant Trevally "), "gianttrevally");
        assert_eq!(normalize_name("Hermit-Crab"), "hermitcrab");
        assert_eq!(normalize_name("great\tpurple emperor"), "greatpurpleemperor");
    }

    #[test]
    fn price_accepts_numbers_and_text() {
        let n: Price = serde_json::from_str("10000").unwrap();
        assert_eq!(n, Price::Bells(10000));
        assert_eq!(n.to_string(), "10000");

        let t: Price = serde_json::from_str("\"15,000\"").unwrap();
        assert_eq!(t.to_string(), "15,000");
    }

    #[test]
    fn deserialize_fish_record() {
        let json = r#"{
            "name": "Blue Marlin",
            "catchquote": "I caught a blue marlin! It must be a real fan of the blues!",
            "nook_price": 10000,
            "cj_price": "15,000",
            "location": "Pier",
            "shadow_size": "Largest (6)",
            "active_hours": "All day",
            "months_available": {
                "northern": ["Jan", "Feb", "Mar", "Apr", "Jul", "Aug", "Sep", "Nov", "Dec"],
                "southern": ["Jan", "Feb", "Mar", "May", "Jun", "Jul", "Aug", "Sep", "Oct"]
            },
            "details_link": "https://example.org/Blue_Marlin"
        }"#;
        let fish: Creature = serde_json::from_str(json).unwrap();
        assert_eq!(fish.key(), "bluemarlin");
        assert_eq!(fish.shadow_size.as_deref(), Some("Largest (6)"));
        assert_eq!(
            fish.venue_price(Category::Fish),
            Some(&Price::Text("15,000".to_string()))
        );
        assert_eq!(fish.venue_price(Category::Bugs), None);
        assert!(fish.months(Hemisphere::Northern).contains(Month::July));
        assert!(!fish.months(Hemisphere::Southern).contains(Month::April));
    }
}
