//! Command parsing for chat messages.

use nook_core::{Category, WindowView};

use crate::auth::Role;
use crate::error::{BotError, BotResult, MissingArgument};

/// A parsed bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Look up one creature.
    Critter {
        /// Which dataset to search.
        category: Category,
        /// The name as typed.
        name: String,
    },
    /// List what arrives, stays, and leaves around a month.
    Month {
        /// Which month the window is anchored on.
        view: WindowView,
        /// Which dataset to classify.
        category: Category,
        /// Hemisphere as typed, if any.
        hemisphere: Option<String>,
    },
    /// Show usage.
    Help {
        /// Optional command to explain.
        topic: Option<String>,
    },
    /// List the known servers.
    Servers,
    /// Count the known servers.
    TotalServers,
    /// Reload the datasets from disk.
    Refresh,
    /// Show this server's hemisphere settings.
    Settings,
}

impl Command {
    /// Parse a message body (prefix already removed).
    pub fn parse(body: &str) -> BotResult<Self> {
        let body = body.trim();
        let (word, rest) = match body.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (body, ""),
        };

        match word.to_lowercase().as_str() {
            "fish" | "f" => Self::critter(Category::Fish, rest),
            "bug" | "b" => Self::critter(Category::Bugs, rest),
            "prevmonth" | "pm" | "lastmonth" | "lm" => Self::month(WindowView::Previous, rest),
            "thismonth" | "tm" => Self::month(WindowView::This, rest),
            "nextmonth" | "nm" => Self::month(WindowView::Next, rest),
            "help" | "h" => Ok(Self::Help {
                topic: (!rest.is_empty()).then(|| rest.to_lowercase()),
            }),
            "servers" | "getservers" => Ok(Self::Servers),
            "totalservers" | "gettotalservers" => Ok(Self::TotalServers),
            "refresh" | "updatejson" => Ok(Self::Refresh),
            "settings" => Ok(Self::Settings),
            _ => Err(BotError::UnknownCommand(word.to_string())),
        }
    }

    fn critter(category: Category, rest: &str) -> BotResult<Self> {
        if rest.is_empty() {
            return Err(BotError::MissingArgument(MissingArgument::CritterName(
                category,
            )));
        }
        Ok(Self::Critter {
            category,
            name: rest.to_string(),
        })
    }

    fn month(view: WindowView, rest: &str) -> BotResult<Self> {
        let mut args = rest.split_whitespace();
        let category = args
            .next()
            .ok_or(BotError::MissingArgument(MissingArgument::CritterType))?
            .parse::<Category>()?;
        Ok(Self::Month {
            view,
            category,
            hemisphere: args.next().map(str::to_string),
        })
    }

    /// The lowest role allowed to run this command.
    pub fn required_role(&self) -> Role {
        match self {
            Self::Critter { .. } | Self::Month { .. } | Self::Help { .. } => Role::Member,
            Self::Settings => Role::Admin,
            Self::Servers | Self::TotalServers | Self::Refresh => Role::Owner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nook_core::CritterError;

    #[test]
    fn parse_critter_lookups() {
        assert_eq!(
            Command::parse("fish Blue Marlin").unwrap(),
            Command::Critter {
                category: Category::Fish,
                name: "Blue Marlin".to_string()
            }
        );
        assert_eq!(
            Command::parse("B   tiger butterfly ").unwrap(),
            Command::Critter {
                category: Category::Bugs,
                name: "tiger butterfly".to_string()
            }
        );
    }

    #[test]
    fn critter_without_name() {
        let err = Command::parse("bug").unwrap_err();
        assert!(matches!(
            err,
            BotError::MissingArgument(MissingArgument::CritterName(Category::Bugs))
        ));
    }

    #[test]
    fn parse_month_views() {
        assert_eq!(
            Command::parse("lm bugs south").unwrap(),
            Command::Month {
                view: WindowView::Previous,
                category: Category::Bugs,
                hemisphere: Some("south".to_string())
            }
        );
        assert_eq!(
            Command::parse("thismonth FISH").unwrap(),
            Command::Month {
                view: WindowView::This,
                category: Category::Fish,
                hemisphere: None
            }
        );
        assert!(matches!(
            Command::parse("nm fish").unwrap(),
            Command::Month { view: WindowView::Next, .. }
        ));
    }

    #[test]
    fn month_without_type() {
        let err = Command::parse("tm").unwrap_err();
        assert!(matches!(
            err,
            BotError::MissingArgument(MissingArgument::CritterType)
        ));
    }

    #[test]
    fn month_with_wrong_type() {
        let err = Command::parse("tm fossils").unwrap_err();
        assert!(matches!(
            err,
            BotError::Critter(CritterError::InvalidCategory(_))
        ));
    }

    #[test]
    fn parse_admin_commands() {
        assert_eq!(Command::parse("updatejson").unwrap(), Command::Refresh);
        assert_eq!(Command::parse("gettotalservers").unwrap(), Command::TotalServers);
        assert_eq!(Command::parse("servers").unwrap(), Command::Servers);
        assert_eq!(Command::parse("settings").unwrap(), Command::Settings);
    }

    #[test]
    fn parse_help() {
        assert_eq!(Command::parse("help").unwrap(), Command::Help { topic: None });
        assert_eq!(
            Command::parse("help NM").unwrap(),
            Command::Help {
                topic: Some("nm".to_string())
            }
        );
    }

    #[test]
    fn unknown_command() {
        let err = Command::parse("fossil amber").unwrap_err();
        assert!(matches!(err, BotError::UnknownCommand(ref w) if w == "fossil"));
    }

    #[test]
    fn roles() {
        assert_eq!(Command::Refresh.required_role(), Role::Owner);
        assert_eq!(Command::Settings.required_role(), Role::Admin);
        assert_eq!(Command::Help { topic: None }.required_role(), Role::Member);
    }
}
