pub mod chat;
pub mod check;
pub mod critter;
pub mod import;
pub mod month;

use chrono::Month;
use nook_bot::{Bot, BotConfig, UserId};
use nook_core::{Category, Critterpedia, FixedClock};

use crate::GlobalArgs;

/// Resolved configuration shared by all subcommands.
pub struct Context {
    pub config: BotConfig,
    /// Pinned current month, if any.
    pub month: Option<Month>,
}

impl Context {
    /// Load the config file, if any, and apply the command-line overrides.
    pub fn from_args(args: &GlobalArgs) -> Result<Self, String> {
        let mut config = match &args.config {
            Some(path) => BotConfig::load(path).map_err(|e| e.to_string())?,
            None => BotConfig::default(),
        };
        if let Some(dir) = &args.data_dir {
            config = config.with_data_dir(dir);
        }
        if let Some(path) = &args.settings {
            config = config.with_settings_path(path);
        }
        if let Some(path) = &args.admins {
            config = config.with_admins_path(path);
        }
        if let Some(id) = args.owner_id {
            config = config.with_owner(UserId(id));
        }
        if let Some(prefix) = &args.prefix {
            config = config.with_prefix(prefix.as_str());
        }

        let month = match &args.month {
            Some(text) => Some(
                nook_core::month::parse(text).ok_or_else(|| format!("unknown month '{text}'"))?,
            ),
            None => None,
        };

        Ok(Self { config, month })
    }

    pub fn critterpedia(&self) -> Critterpedia {
        let pedia = Critterpedia::new(&self.config.data_dir);
        match self.month {
            Some(month) => pedia.with_clock(FixedClock(month)),
            None => pedia,
        }
    }

    pub fn bot(&self) -> Result<Bot, String> {
        let bot = Bot::from_config(&self.config).map_err(|e| e.to_string())?;
        Ok(match self.month {
            Some(month) => bot.with_clock(FixedClock(month)),
            None => bot,
        })
    }
}

fn parse_category(text: &str) -> Result<Category, String> {
    text.parse::<Category>().map_err(|e| e.to_string())
}
