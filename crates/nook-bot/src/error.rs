//! Error types for the chat command layer.

use nook_core::{Category, CritterError};
use thiserror::Error;

use crate::auth::Role;

/// Result type for bot operations.
pub type BotResult<T> = Result<T, BotError>;

/// A required command argument that the user left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingArgument {
    /// The name of the creature to look up.
    CritterName(Category),
    /// Whether to list fish or bugs.
    CritterType,
}

/// Errors that can occur while handling a message.
#[derive(Debug, Error)]
pub enum BotError {
    /// Invalid input or unreadable data from the core.
    #[error(transparent)]
    Critter(#[from] CritterError),

    /// A required argument was not given.
    #[error("missing argument: {0:?}")]
    MissingArgument(MissingArgument),

    /// The command word is not recognised.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The author lacks the role the command requires.
    #[error("{required:?} role required")]
    Unauthorized {
        /// The minimum role for the command.
        required: Role,
    },

    /// A configuration or settings file could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Reply used when nothing more specific applies.
pub const DEFAULT_ERROR_MESSAGE: &str = "I am sorry, but something went wrong. \
    I am uncertain whether it was something you did, or something I did hoo..";

impl BotError {
    /// The message shown to the chat user for this error.
    pub fn user_message(&self, prefix: &str) -> String {
        match self {
            Self::MissingArgument(MissingArgument::CritterName(category)) => format!(
                "Uh oh! It seems you forgot to enter the name of the {} you are looking for hoo",
                category.singular()
            ),
            Self::MissingArgument(MissingArgument::CritterType) => {
                "Hoo! You have to tell me whether you want to view bugs or fish for that period!"
                    .to_string()
            }
            Self::Critter(CritterError::CreatureNotFound { category, name }) => format!(
                "I am sorry, I was unable to find a {} called {name}. Are you certain you spelled its name correctly?",
                category.singular()
            ),
            Self::Critter(CritterError::InvalidCategory(_)) => {
                "I'm afraid I don't know what type of critter you are looking for. I only know about bugs and fish hoo.."
                    .to_string()
            }
            Self::Critter(CritterError::InvalidHemisphere(input)) if input.is_empty() => {
                "Hoo, I don't know which hemisphere your island is in! Please tell me: northern or southern."
                    .to_string()
            }
            Self::Critter(CritterError::InvalidHemisphere(input)) => format!(
                "I'm afraid {input} is not an existing hemisphere. You can only choose between northern and southern."
            ),
            Self::UnknownCommand(word) => format!(
                "Hoo? I don't know the command {word}. Try {prefix}help to see what I can do."
            ),
            Self::Unauthorized { .. } => {
                "I'm afraid only those in charge may ask me to do that hoo.".to_string()
            }
            Self::Critter(
                CritterError::DatasetUnavailable { .. } | CritterError::DatasetMalformed { .. },
            )
            | Self::Config(_) => DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_name_mentions_category() {
        let err = BotError::MissingArgument(MissingArgument::CritterName(Category::Bugs));
        assert_eq!(
            err.user_message("!"),
            "Uh oh! It seems you forgot to enter the name of the bug you are looking for hoo"
        );
    }

    #[test]
    fn not_found_echoes_input() {
        let err = BotError::from(CritterError::CreatureNotFound {
            category: Category::Fish,
            name: "Nessie".to_string(),
        });
        assert!(err.user_message("!").contains("find a fish called Nessie"));
    }

    #[test]
    fn invalid_hemisphere_echoes_input() {
        let err = BotError::from(CritterError::InvalidHemisphere("eastern".to_string()));
        assert_eq!(
            err.user_message("!"),
            "I'm afraid eastern is not an existing hemisphere. You can only choose between northern and southern."
        );
    }

    #[test]
    fn missing_hemisphere_asks_for_one() {
        let err = BotError::from(CritterError::InvalidHemisphere(String::new()));
        assert!(err.user_message("!").contains("northern or southern"));
    }

    #[test]
    fn unknown_command_suggests_help() {
        let err = BotError::UnknownCommand("fossil".to_string());
        assert!(err.user_message("?").contains("?help"));
    }

    #[test]
    fn dataset_failures_use_default_message() {
        let err = BotError::from(CritterError::DatasetMalformed {
            category: Category::Fish,
            reason: "bad".to_string(),
        });
        assert_eq!(err.user_message("!"), DEFAULT_ERROR_MESSAGE);
    }
}
