//! The critterpedia: datasets on disk, cached in memory.
//!
//! Datasets are read the first time a category is queried and kept until an
//! explicit [`Critterpedia::refresh`] or [`Critterpedia::install`]. Both build
//! the replacement completely before swapping it in, so a query never sees a
//! half-updated dataset.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::category::Category;
use crate::clock::{Clock, SystemClock};
use crate::creature::Creature;
use crate::dataset::Dataset;
use crate::error::{CritterError, CritterResult};
use crate::hemisphere::Hemisphere;
use crate::month;
use crate::window::SeasonalWindow;

/// Cached access to every category's dataset.
pub struct Critterpedia {
    data_dir: PathBuf,
    cache: HashMap<Category, Dataset>,
    clock: Box<dyn Clock>,
}

impl Critterpedia {
    /// Create a critterpedia reading `<data_dir>/<category>.json`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            cache: HashMap::new(),
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the clock used to find the current month.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Directory holding the dataset files.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the dataset file for a category.
    pub fn dataset_path(&self, category: Category) -> PathBuf {
        self.data_dir.join(format!("{}.json", category.file_stem()))
    }

    /// The dataset for a category, reading it from disk if not yet cached.
    ///
    /// A failed read is not cached; the next call tries again.
    pub fn dataset(&mut self, category: Category) -> CritterResult<&Dataset> {
        let path = self.dataset_path(category);
        match self.cache.entry(category) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let dataset = Dataset::load(category, &path)?;
                Ok(entry.insert(dataset))
            }
        }
    }

    /// Look up a single creature by name.
    ///
    /// `Ok(None)` means the dataset was read but has no such creature.
    pub fn lookup(&mut self, category: Category, name: &str) -> CritterResult<Option<&Creature>> {
        let dataset = self.dataset(category)?;
        let found = dataset.lookup(name);
        debug!(%category, name, found = found.is_some(), "critter lookup");
        Ok(found)
    }

    /// Classify a category around the current month shifted by `offset`.
    pub fn window(
        &mut self,
        category: Category,
        hemisphere: Hemisphere,
        offset: i32,
    ) -> CritterResult<SeasonalWindow<'_>> {
        let current = month::shift(self.clock.current_month(), offset);
        let dataset = self.dataset(category)?;
        Ok(SeasonalWindow::compute(dataset, hemisphere, current))
    }

    /// Re-read every dataset from disk.
    ///
    /// The cache is only replaced if every category loads; on error the
    /// previous datasets stay in use. Returns the total number of creatures.
    pub fn refresh(&mut self) -> CritterResult<usize> {
        let mut fresh = HashMap::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            let dataset = Dataset::load(category, &self.dataset_path(category))?;
            fresh.insert(category, dataset);
        }
        let total = fresh.values().map(Dataset::len).sum();
        self.cache = fresh;
        info!(creatures = total, "datasets refreshed");
        Ok(total)
    }

    /// Validate a new dataset file and install it for a category.
    ///
    /// The file is written next to the live dataset and renamed over it, so
    /// readers of the data directory see either the old or the new file.
    pub fn install(&mut self, category: Category, source: &Path) -> CritterResult<&Dataset> {
        let json =
            std::fs::read_to_string(source).map_err(|e| CritterError::DatasetUnavailable {
                category,
                path: source.to_path_buf(),
                source: e,
            })?;
        let dataset = Dataset::from_json(category, &json)?;

        let target = self.dataset_path(category);
        let unavailable = |source: std::io::Error| CritterError::DatasetUnavailable {
            category,
            path: target.clone(),
            source,
        };
        std::fs::create_dir_all(&self.data_dir).map_err(unavailable)?;
        let mut staged = NamedTempFile::new_in(&self.data_dir).map_err(unavailable)?;
        staged.write_all(json.as_bytes()).map_err(unavailable)?;
        staged.as_file().sync_all().map_err(unavailable)?;
        staged.persist(&target).map_err(|e| unavailable(e.error))?;

        info!(
            %category,
            path = %target.display(),
            creatures = dataset.len(),
            "dataset installed"
        );
        self.cache.insert(category, dataset);
        self.dataset(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::Month;
    use std::fs;

    const BUGS: &str = r#"{
        "tigerbutterfly": {
            "name": "Tiger Butterfly",
            "catchquote": "I caught a tiger butterfly!",
            "nook_price": 240,
            "flick_price": 360,
            "location": "Flying near flowers",
            "active_hours": "4 AM - 7 PM",
            "months_available": { "northern": ["Mar", "Apr", "May"], "southern": ["Sep", "Oct", "Nov"] },
            "details_link": "https://example.org/Tiger_Butterfly"
        },
        "ant": {
            "name": "Ant",
            "catchquote": "I caught an ant!",
            "nook_price": 80,
            "flick_price": 120,
            "location": "On rotten food",
            "active_hours": "All day",
            "months_available": {
                "northern": ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"],
                "southern": ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
            },
            "details_link": "https://example.org/Ant"
        }
    }"#;

    const FISH: &str = r#"{
        "bluemarlin": {
            "name": "Blue Marlin",
            "nook_price": 10000,
            "cj_price": 15000,
            "months_available": { "northern": ["Jul", "Aug", "Sep"], "southern": ["Jan", "Feb", "Mar"] }
        }
    }"#;

    fn data_dir() -> tempfile::TempDir {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("bugs.json"), BUGS).unwrap();
        fs::write(dir.path().join("fish.json"), FISH).unwrap();
        dir
    }

    #[test]
    fn lookup_found_and_missing() {
        let dir = data_dir();
        let mut pedia = Critterpedia::new(dir.path());
        let fish = pedia.lookup(Category::Fish, "Blue Marlin").unwrap();
        assert_eq!(fish.unwrap().name, "Blue Marlin");
        assert!(pedia.lookup(Category::Fish, "Coelacanth").unwrap().is_none());
    }

    #[test]
    fn missing_dataset_is_distinct_from_missing_creature() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut pedia = Critterpedia::new(dir.path());
        let err = pedia.lookup(Category::Fish, "Blue Marlin").unwrap_err();
        assert!(matches!(err, CritterError::DatasetUnavailable { .. }));

        // A later read succeeds once the file appears
        fs::write(dir.path().join("fish.json"), FISH).unwrap();
        assert!(pedia.lookup(Category::Fish, "Blue Marlin").unwrap().is_some());
    }

    #[test]
    fn window_uses_clock_and_offset() {
        let dir = data_dir();
        let mut pedia = Critterpedia::new(dir.path()).with_clock(FixedClock(Month::April));

        let w = pedia.window(Category::Bugs, Hemisphere::Northern, -1).unwrap();
        assert_eq!(w.current, Month::March);
        assert_eq!(w.new.len(), 1);
        assert_eq!(w.new[0].name, "Tiger Butterfly");

        let w = pedia.window(Category::Bugs, Hemisphere::Northern, 1).unwrap();
        assert_eq!(w.current, Month::May);
        assert_eq!(w.leaving.len(), 1);
        assert_eq!(w.leaving[0].name, "Tiger Butterfly");
    }

    #[test]
    fn window_offset_wraps_past_december() {
        let dir = data_dir();
        let mut pedia = Critterpedia::new(dir.path()).with_clock(FixedClock(Month::December));
        let w = pedia.window(Category::Fish, Hemisphere::Southern, 1).unwrap();
        assert_eq!(w.previous, Month::December);
        assert_eq!(w.current, Month::January);
        assert_eq!(w.next, Month::February);
    }

    #[test]
    fn refresh_picks_up_changes() {
        let dir = data_dir();
        let mut pedia = Critterpedia::new(dir.path());
        assert!(pedia.lookup(Category::Fish, "Sea Bass").unwrap().is_none());

        let updated = FISH.replace("Blue Marlin", "Sea Bass").replace("bluemarlin", "seabass");
        fs::write(dir.path().join("fish.json"), updated).unwrap();
        // Cached until refreshed
        assert!(pedia.lookup(Category::Fish, "Sea Bass").unwrap().is_none());

        assert_eq!(pedia.refresh().unwrap(), 3);
        assert!(pedia.lookup(Category::Fish, "Sea Bass").unwrap().is_some());
    }

    #[test]
    fn failed_refresh_keeps_old_cache() {
        let dir = data_dir();
        let mut pedia = Critterpedia::new(dir.path());
        pedia.dataset(Category::Fish).unwrap();

        fs::write(dir.path().join("fish.json"), "{ not json").unwrap();
        let err = pedia.refresh().unwrap_err();
        assert!(matches!(err, CritterError::DatasetMalformed { .. }));
        assert!(pedia.lookup(Category::Fish, "Blue Marlin").unwrap().is_some());
    }

    #[test]
    fn install_replaces_dataset() {
        let dir = data_dir();
        let staging = tempfile::TempDir::new().unwrap();
        let source = staging.path().join("new_fish.json");
        let renamed = FISH
            .replace("Blue Marlin", "Sea Bass")
            .replace("bluemarlin", "seabass");
        fs::write(&source, renamed).unwrap();

        let mut pedia = Critterpedia::new(dir.path());
        pedia.dataset(Category::Fish).unwrap();
        let installed = pedia.install(Category::Fish, &source).unwrap();
        assert_eq!(installed.len(), 1);

        assert!(pedia.lookup(Category::Fish, "Sea Bass").unwrap().is_some());
        let on_disk = fs::read_to_string(dir.path().join("fish.json")).unwrap();
        assert!(on_disk.contains("Sea Bass"));
    }

    #[test]
    fn invalid_install_leaves_old_file() {
        let dir = data_dir();
        let staging = tempfile::TempDir::new().unwrap();
        let source = staging.path().join("broken.json");
        fs::write(&source, r#"{ "koi": { "name": "Koi" } }"#).unwrap();

        let mut pedia = Critterpedia::new(dir.path());
        let err = pedia.install(Category::Fish, &source).unwrap_err();
        assert!(matches!(err, CritterError::DatasetMalformed { .. }));

        let on_disk = fs::read_to_string(dir.path().join("fish.json")).unwrap();
        assert_eq!(on_disk, FISH);
    }

    #[test]
    fn install_into_fresh_directory() {
        let staging = tempfile::TempDir::new().unwrap();
        let source = staging.path().join("bugs.json");
        fs::write(&source, BUGS).unwrap();
        let target = staging.path().join("data");

        let mut pedia = Critterpedia::new(&target);
        pedia.install(Category::Bugs, &source).unwrap();
        assert!(target.join("bugs.json").exists());
        assert!(pedia.lookup(Category::Bugs, "ant").unwrap().is_some());
    }
}
