//! Who may run which commands.
//!
//! Authorization is a plain ID comparison. The policy is injected into the
//! bot so tests can run without real owner or admin IDs.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::context::{MessageContext, UserId};
use crate::error::{BotError, BotResult};

/// Privilege level of a message author. Ordered from least to most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    /// Anyone.
    Member,
    /// The server owner or a listed admin.
    Admin,
    /// The bot owner.
    Owner,
}

/// Decides the role of a message author.
pub trait Authorizer {
    /// The author's role in the context of this message.
    fn role(&self, ctx: &MessageContext) -> Role;

    /// Fail with [`BotError::Unauthorized`] unless the author has `required`.
    fn require(&self, ctx: &MessageContext, required: Role) -> BotResult<()> {
        if self.role(ctx) >= required {
            Ok(())
        } else {
            Err(BotError::Unauthorized { required })
        }
    }
}

#[derive(Deserialize)]
struct AdminList {
    #[serde(default)]
    admins: Vec<UserId>,
}

/// ID-based policy: one bot owner plus a list of admins.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    owner: Option<UserId>,
    admins: BTreeSet<UserId>,
}

impl AccessPolicy {
    /// A policy with no owner and no admins; only server owners are admins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bot owner.
    pub fn with_owner(mut self, owner: UserId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Add admins.
    pub fn with_admins(mut self, admins: impl IntoIterator<Item = UserId>) -> Self {
        self.admins.extend(admins);
        self
    }

    /// Add the admins listed in a JSON file of the form `{"admins": [ids]}`.
    ///
    /// A missing file adds nobody.
    pub fn with_admin_file(self, path: &Path) -> BotResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no admin list");
            return Ok(self);
        }
        let json = std::fs::read_to_string(path)
            .map_err(|e| BotError::Config(format!("cannot read {}: {e}", path.display())))?;
        let list: AdminList = serde_json::from_str(&json)
            .map_err(|e| BotError::Config(format!("invalid admin list {}: {e}", path.display())))?;
        Ok(self.with_admins(list.admins))
    }

    /// The configured bot owner.
    pub fn owner(&self) -> Option<UserId> {
        self.owner
    }

    /// True if the user is on the admin list.
    pub fn is_listed_admin(&self, user: UserId) -> bool {
        self.admins.contains(&user)
    }
}

impl Authorizer for AccessPolicy {
    fn role(&self, ctx: &MessageContext) -> Role {
        if self.owner == Some(ctx.author) {
            Role::Owner
        } else if ctx.server.is_some_and(|s| s.owner == ctx.author)
            || self.admins.contains(&ctx.author)
        {
            Role::Admin
        } else {
            Role::Member
        }
    }
}
