//! Per-category critter datasets.
//!
//! A dataset file is a JSON object mapping a creature key to its record.
//! Keys are re-normalized on load and each creature is also indexed under its
//! normalized display name, so a lookup by name always finds the record even
//! if the file's keys were written differently.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use chrono::Month;
use tracing::debug;

use crate::category::Category;
use crate::creature::{Creature, normalize_name};
use crate::error::{CritterError, CritterResult};
use crate::hemisphere::Hemisphere;

/// All creatures of one category, indexed by normalized name.
#[derive(Debug, Clone)]
pub struct Dataset {
    category: Category,
    // Sorted by primary key
    creatures: Vec<Creature>,
    index: HashMap<String, usize>,
}

impl Dataset {
    /// Build a dataset from creature records, keyed by their display names.
    pub fn from_creatures(
        category: Category,
        creatures: impl IntoIterator<Item = Creature>,
    ) -> CritterResult<Self> {
        let mut keyed: BTreeMap<String, Creature> = BTreeMap::new();
        for creature in creatures {
            let key = creature.key();
            if let Some(existing) = keyed.insert(key.clone(), creature) {
                return Err(CritterError::DatasetMalformed {
                    category,
                    reason: format!(
                        "key \"{key}\" is used by more than one creature (\"{}\")",
                        existing.name
                    ),
                });
            }
        }
        Self::from_keyed(category, keyed)
    }

    /// Parse a dataset from the JSON text of a dataset file.
    pub fn from_json(category: Category, json: &str) -> CritterResult<Self> {
        let raw: BTreeMap<String, Creature> =
            serde_json::from_str(json).map_err(|e| CritterError::DatasetMalformed {
                category,
                reason: e.to_string(),
            })?;
        Self::from_keyed(category, raw)
    }

    /// Read and parse a dataset file.
    pub fn load(category: Category, path: &Path) -> CritterResult<Self> {
        let json =
            std::fs::read_to_string(path).map_err(|source| CritterError::DatasetUnavailable {
                category,
                path: path.to_path_buf(),
                source,
            })?;
        let dataset = Self::from_json(category, &json)?;
        debug!(
            category = %category,
            path = %path.display(),
            creatures = dataset.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    fn from_keyed(category: Category, raw: BTreeMap<String, Creature>) -> CritterResult<Self> {
        let mut by_key: BTreeMap<String, Creature> = BTreeMap::new();
        for (key, creature) in raw {
            let key = normalize_name(&key);
            if key.is_empty() {
                return Err(CritterError::DatasetMalformed {
                    category,
                    reason: format!("creature \"{}\" has an empty key", creature.name),
                });
            }
            if let Some(existing) = by_key.insert(key.clone(), creature) {
                return Err(CritterError::DatasetMalformed {
                    category,
                    reason: format!(
                        "key \"{key}\" is used by more than one creature (\"{}\")",
                        existing.name
                    ),
                });
            }
        }

        let mut index = HashMap::with_capacity(by_key.len() * 2);
        let mut creatures = Vec::with_capacity(by_key.len());
        for (position, (key, creature)) in by_key.into_iter().enumerate() {
            index.insert(key, position);
            creatures.push(creature);
        }

        // Display names are aliases unless they collide with another record
        for (position, creature) in creatures.iter().enumerate() {
            let name_key = creature.key();
            if name_key.is_empty() {
                continue;
            }
            match index.get(&name_key) {
                None => {
                    index.insert(name_key, position);
                }
                Some(&other) if other != position => {
                    return Err(CritterError::DatasetMalformed {
                        category,
                        reason: format!(
                            "\"{}\" collides with the key of \"{}\"",
                            creature.name, creatures[other].name
                        ),
                    });
                }
                Some(_) => {}
            }
        }

        Ok(Self {
            category,
            creatures,
            index,
        })
    }

    /// The category this dataset belongs to.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Exact lookup by name after normalization. `None` if no creature matches.
    pub fn lookup(&self, name: &str) -> Option<&Creature> {
        self.index
            .get(&normalize_name(name))
            .map(|&position| &self.creatures[position])
    }

    /// All creatures, ordered by key.
    pub fn iter(&self) -> std::slice::Iter<'_, Creature> {
        self.creatures.iter()
    }

    /// Creatures available in the given month and hemisphere, ordered by key.
    pub fn available_in(
        &self,
        hemisphere: Hemisphere,
        month: Month,
    ) -> impl Iterator<Item = &Creature> + '_ {
        self.creatures
            .iter()
            .filter(move |c| c.months(hemisphere).contains(month))
    }

    /// Number of creatures.
    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    /// True if the dataset has no creatures.
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Creature;
    type IntoIter = std::slice::Iter<'a, Creature>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
