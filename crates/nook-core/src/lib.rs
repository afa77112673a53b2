//! Core types for Nook: critter datasets, month arithmetic, and seasonal windows.
//!
//! This crate knows nothing about chat. It loads per-category JSON datasets,
//! looks creatures up by name, and classifies them around a month into those
//! arriving, staying, and leaving for either hemisphere.

/// Critter categories and their dataset naming.
pub mod category;
/// Sources of the current month.
pub mod clock;
/// Creature records and name normalization.
pub mod creature;
/// Cached, refreshable access to the datasets on disk.
pub mod critterpedia;
/// Per-category datasets and exact-name lookup.
pub mod dataset;
/// Error types used throughout the crate.
pub mod error;
/// Hemispheres and their accepted aliases.
pub mod hemisphere;
/// Month arithmetic and month sets.
pub mod month;
/// Seasonal window classification.
pub mod window;

/// Re-export category types.
pub use category::Category;
/// Re-export clock types.
pub use clock::{Clock, FixedClock, SystemClock};
/// Re-export creature types.
pub use creature::{Creature, MonthsAvailable, Price, normalize_name};
/// Re-export the dataset cache.
pub use critterpedia::Critterpedia;
/// Re-export dataset types.
pub use dataset::Dataset;
/// Re-export error types.
pub use error::{CritterError, CritterResult};
/// Re-export hemisphere types.
pub use hemisphere::{Hemisphere, HemisphereAliases};
/// Re-export month types.
pub use month::MonthSet;
/// Re-export window types.
pub use window::{SeasonalWindow, WindowView};
