//! Message handling.
//!
//! `Bot` turns an incoming chat message into a reply: it strips the command
//! prefix, parses the command, checks the author's role, runs the command
//! against the critterpedia, and maps any failure to a friendly message.

use std::time::Instant;

use nook_core::{Clock, CritterError, Critterpedia};
use tracing::{debug, info, warn};

use crate::auth::{AccessPolicy, Authorizer, Role};
use crate::command::Command;
use crate::config::BotConfig;
use crate::context::MessageContext;
use crate::error::{BotError, BotResult};
use crate::format;
use crate::reply::Reply;
use crate::settings::{JsonSettings, SettingsStore, resolve_hemisphere};

struct HelpEntry {
    names: &'static [&'static str],
    usage: &'static str,
    description: &'static str,
    role: Role,
}

const fn entry(
    names: &'static [&'static str],
    usage: &'static str,
    description: &'static str,
    role: Role,
) -> HelpEntry {
    HelpEntry {
        names,
        usage,
        description,
        role,
    }
}

/// Commands listed by `help`, each shown only to authors with its role.
const HELP_ENTRIES: &[HelpEntry] = &[
    entry(&["fish", "f"], "fish <name>", "Look up a fish.", Role::Member),
    entry(&["bug", "b"], "bug <name>", "Look up a bug.", Role::Member),
    entry(
        &["prevmonth", "pm", "lastmonth", "lm"],
        "prevmonth <fish|bugs> [hemisphere]",
        "What arrived, stayed, and left last month.",
        Role::Member,
    ),
    entry(
        &["thismonth", "tm"],
        "thismonth <fish|bugs> [hemisphere]",
        "What is new, staying, and leaving this month.",
        Role::Member,
    ),
    entry(
        &["nextmonth", "nm"],
        "nextmonth <fish|bugs> [hemisphere]",
        "What will be new, stay, and leave next month.",
        Role::Member,
    ),
    entry(&["help", "h"], "help [command]", "Show this help.", Role::Member),
    entry(
        &["settings"],
        "settings",
        "Show this server's hemisphere settings.",
        Role::Admin,
    ),
    entry(
        &["servers", "getservers"],
        "servers",
        "List the servers I know about.",
        Role::Owner,
    ),
    entry(
        &["totalservers", "gettotalservers"],
        "totalservers",
        "Count the servers I know about.",
        Role::Owner,
    ),
    entry(
        &["refresh", "updatejson"],
        "refresh",
        "Reload the critter data from disk.",
        Role::Owner,
    ),
];

/// A chat bot answering critter questions.
pub struct Bot {
    prefix: String,
    pedia: Critterpedia,
    settings: Box<dyn SettingsStore>,
    auth: Box<dyn Authorizer>,
}

impl Bot {
    /// Assemble a bot from its parts.
    pub fn new(
        prefix: impl Into<String>,
        pedia: Critterpedia,
        settings: impl SettingsStore + 'static,
        auth: impl Authorizer + 'static,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            pedia,
            settings: Box::new(settings),
            auth: Box::new(auth),
        }
    }

    /// Build a bot from configuration, loading the settings and admin files.
    pub fn from_config(config: &BotConfig) -> BotResult<Self> {
        let settings = JsonSettings::load(&config.settings_path)?;
        let mut policy = AccessPolicy::new().with_admin_file(&config.admins_path)?;
        if let Some(owner) = config.owner_id {
            policy = policy.with_owner(owner);
        }
        Ok(Self::new(
            config.prefix.clone(),
            Critterpedia::new(&config.data_dir),
            settings,
            policy,
        ))
    }

    /// Replace the clock used for month views.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.pedia = self.pedia.with_clock(clock);
        self
    }

    /// The command prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The underlying critterpedia.
    pub fn critterpedia(&mut self) -> &mut Critterpedia {
        &mut self.pedia
    }

    /// Handle a chat message.
    ///
    /// Returns `None` when the message is not addressed to the bot. Every
    /// failure becomes a plain-text reply explaining what went wrong.
    pub fn respond(&mut self, ctx: &MessageContext, message: &str) -> Option<Reply> {
        let body = message.trim_start().strip_prefix(self.prefix.as_str())?;
        if body.trim().is_empty() {
            return None;
        }

        let result = Command::parse(body).and_then(|command| self.execute(ctx, command));
        match result {
            Ok(reply) => Some(reply),
            Err(e) => {
                warn!(author = %ctx.author, input = message, error = %e, "command failed");
                Some(Reply::Text(e.user_message(&self.prefix)))
            }
        }
    }

    /// Run a parsed command on behalf of the message author.
    pub fn execute(&mut self, ctx: &MessageContext, command: Command) -> BotResult<Reply> {
        debug!(author = %ctx.author, ?command, "dispatch");
        self.auth.require(ctx, command.required_role())?;

        match command {
            Command::Critter { category, name } => {
                let creature = self.pedia.lookup(category, &name)?.ok_or_else(|| {
                    CritterError::CreatureNotFound {
                        category,
                        name: name.clone(),
                    }
                })?;
                Ok(Reply::Text(format::creature_card(category, creature)))
            }
            Command::Month {
                view,
                category,
                hemisphere,
            } => {
                let hemisphere = resolve_hemisphere(
                    self.settings.as_ref(),
                    ctx.server_id(),
                    hemisphere.as_deref(),
                )?;
                let window = self.pedia.window(category, hemisphere, view.offset())?;
                Ok(Reply::Embed(format::month_embed(view, &window)))
            }
            Command::Help { topic } => self.help(ctx, topic.as_deref()).map(Reply::Text),
            Command::Servers => {
                let servers = self.settings.servers();
                if servers.is_empty() {
                    return Ok(Reply::Text("I don't know of any servers yet hoo.".to_string()));
                }
                let names: Vec<String> = servers
                    .iter()
                    .map(|(id, entry)| {
                        if entry.name.is_empty() {
                            id.to_string()
                        } else {
                            entry.name.clone()
                        }
                    })
                    .collect();
                Ok(Reply::Text(names.join(", ")))
            }
            Command::TotalServers => Ok(Reply::Text(format!(
                "I am currently in {} servers!",
                self.settings.servers().len()
            ))),
            Command::Refresh => {
                let started = Instant::now();
                let creatures = self.pedia.refresh()?;
                let elapsed = started.elapsed().as_secs_f64();
                info!(creatures, elapsed, "refreshed on request");
                Ok(Reply::Text(format!(
                    "Updated JSON data in {elapsed:.2} seconds."
                )))
            }
            Command::Settings => Ok(Reply::Text(self.settings_summary(ctx))),
        }
    }

    fn help(&self, ctx: &MessageContext, topic: Option<&str>) -> BotResult<String> {
        let prefix = &self.prefix;
        let role = self.auth.role(ctx);
        match topic {
            None => {
                let mut out = String::from("Hoo! Here is what I can do:\n");
                for help in HELP_ENTRIES.iter().filter(|h| h.role <= role) {
                    out.push_str(&format!("  {prefix}{} - {}\n", help.usage, help.description));
                }
                out.push_str(
                    "Hemisphere can be northern or southern; without it I use your server's default.",
                );
                Ok(out)
            }
            Some(topic) => {
                let topic = topic.trim_start_matches(prefix.as_str());
                let help = HELP_ENTRIES
                    .iter()
                    .find(|h| h.names.contains(&topic))
                    .ok_or_else(|| BotError::UnknownCommand(topic.to_string()))?;
                if help.role > role {
                    return Err(BotError::Unauthorized {
                        required: help.role,
                    });
                }
                let mut out = format!("{prefix}{}\n{}", help.usage, help.description);
                if let Some(aliases) = help.names.get(1..).filter(|a| !a.is_empty()) {
                    let aliases: Vec<String> =
                        aliases.iter().map(|a| format!("{prefix}{a}")).collect();
                    out.push_str(&format!("\nAliases: {}", aliases.join(", ")));
                }
                Ok(out)
            }
        }
    }

    fn settings_summary(&self, ctx: &MessageContext) -> String {
        let default = ctx
            .server_id()
            .and_then(|id| self.settings.hemisphere(id))
            .map(|h| h.to_string())
            .unwrap_or_else(|| "not set".to_string());
        let aliases = self.settings.aliases();
        format!(
            "Default hemisphere: {default}\nNorthern aliases: {}\nSouthern aliases: {}",
            aliases.northern.join(", "),
            aliases.southern.join(", ")
        )
    }
}
