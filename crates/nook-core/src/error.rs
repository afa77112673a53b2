use std::path::PathBuf;

use crate::category::Category;

/// Alias for `Result<T, CritterError>`.
pub type CritterResult<T> = Result<T, CritterError>;

/// Errors that can occur when resolving inputs or reading critter data.
#[derive(Debug, thiserror::Error)]
pub enum CritterError {
    /// The category is not one of the supported critter kinds.
    #[error("invalid category: \"{0}\"")]
    InvalidCategory(String),

    /// The hemisphere could not be resolved from its aliases or a default.
    #[error("invalid hemisphere: \"{0}\"")]
    InvalidHemisphere(String),

    /// No creature in the category matches the given name.
    #[error("no {} called \"{name}\"", category.singular())]
    CreatureNotFound {
        /// The category that was searched.
        category: Category,
        /// The name as the user typed it.
        name: String,
    },

    /// The dataset file for a category could not be read or written.
    #[error("dataset for {category} unavailable at {}: {source}", path.display())]
    DatasetUnavailable {
        /// The category whose dataset failed.
        category: Category,
        /// The dataset file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The dataset file was read but its contents are not a valid dataset.
    #[error("dataset for {category} is malformed: {reason}")]
    DatasetMalformed {
        /// The category whose dataset failed.
        category: Category,
        /// What was wrong with it.
        reason: String,
    },
}
