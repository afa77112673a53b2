use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two hemispheres. Seasons are inverted between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    /// The northern hemisphere.
    Northern,
    /// The southern hemisphere.
    Southern,
}

impl Hemisphere {
    /// Both hemispheres, northern first.
    pub const ALL: [Hemisphere; 2] = [Hemisphere::Northern, Hemisphere::Southern];

    /// Lowercase name, as used in datasets and replies.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Northern => "northern",
            Self::Southern => "southern",
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepted spellings for each hemisphere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HemisphereAliases {
    /// Aliases that resolve to [`Hemisphere::Northern`].
    #[serde(default)]
    pub northern: Vec<String>,
    /// Aliases that resolve to [`Hemisphere::Southern`].
    #[serde(default)]
    pub southern: Vec<String>,
}

impl Default for HemisphereAliases {
    fn default() -> Self {
        let owned =
            |names: &[&str]| -> Vec<String> { names.iter().map(|s| s.to_string()).collect() };
        Self {
            northern: owned(&["northern", "north", "n", "nh"]),
            southern: owned(&["southern", "south", "s", "sh"]),
        }
    }
}

impl HemisphereAliases {
    /// Resolve user input to a hemisphere (case-insensitive).
    ///
    /// Northern aliases win if a spelling is listed under both.
    pub fn resolve(&self, input: &str) -> Option<Hemisphere> {
        let input = input.trim().to_lowercase();
        if self.northern.iter().any(|a| a.to_lowercase() == input) {
            Some(Hemisphere::Northern)
        } else if self.southern.iter().any(|a| a.to_lowercase() == input) {
            Some(Hemisphere::Southern)
        } else {
            None
        }
    }

    /// Aliases for one hemisphere.
    pub fn for_hemisphere(&self, hemisphere: Hemisphere) -> &[String] {
        match hemisphere {
            Hemisphere::Northern => &self.northern,
            Hemisphere::Southern => &self.southern,
        }
    }
}
