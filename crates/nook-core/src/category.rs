use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CritterError;

/// A kind of critter, each backed by its own dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Fish, sold to C.J. as well as the shop.
    Fish,
    /// Bugs, sold to Flick as well as the shop.
    Bugs,
}

impl Category {
    /// Every supported category.
    pub const ALL: [Category; 2] = [Category::Fish, Category::Bugs];

    /// Stem of the dataset file, e.g. `bugs` for `bugs.json`.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::Fish => "fish",
            Self::Bugs => "bugs",
        }
    }

    /// Name of a single critter of this kind.
    pub fn singular(&self) -> &'static str {
        match self {
            Self::Fish => "fish",
            Self::Bugs => "bug",
        }
    }

    /// Capitalized plural, for headings.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Fish => "Fish",
            Self::Bugs => "Bugs",
        }
    }

    /// The travelling buyer who pays a premium for this kind.
    pub fn venue(&self) -> &'static str {
        match self {
            Self::Fish => "C.J.",
            Self::Bugs => "Flick",
        }
    }
}

impl FromStr for Category {
    type Err = CritterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fish" => Ok(Self::Fish),
            "bugs" | "bug" => Ok(Self::Bugs),
            _ => Err(CritterError::InvalidCategory(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("FISH".parse::<Category>().unwrap(), Category::Fish);
        assert_eq!("Bugs".parse::<Category>().unwrap(), Category::Bugs);
        assert_eq!("bug".parse::<Category>().unwrap(), Category::Bugs);
    }

    #[test]
    fn parse_rejects_other_critters() {
        let err = "fossils".parse::<Category>().unwrap_err();
        assert!(matches!(err, CritterError::InvalidCategory(ref s) if s == "fossils"));
    }

    #[test]
    fn names() {
        assert_eq!(Category::Bugs.to_string(), "bugs");
        assert_eq!(Category::Bugs.singular(), "bug");
        assert_eq!(Category::Fish.title(), "Fish");
        assert_eq!(Category::Fish.venue(), "C.J.");
    }
}
