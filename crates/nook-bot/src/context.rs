//! Who sent a message, and where.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A chat user's numeric identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

/// A chat server's numeric identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ServerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The server a message was posted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerContext {
    /// The server's identifier.
    pub id: ServerId,
    /// The user who owns the server.
    pub owner: UserId,
}

/// Context for a single incoming message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageContext {
    /// The message author.
    pub author: UserId,
    /// The server, or `None` for a direct message.
    pub server: Option<ServerContext>,
}

impl MessageContext {
    /// A direct message from `author`.
    pub fn direct(author: UserId) -> Self {
        Self {
            author,
            server: None,
        }
    }

    /// A message from `author` in server `id`, which is owned by `owner`.
    pub fn in_server(author: UserId, id: ServerId, owner: UserId) -> Self {
        Self {
            author,
            server: Some(ServerContext { id, owner }),
        }
    }

    /// The server identifier, if the message came from a server.
    pub fn server_id(&self) -> Option<ServerId> {
        self.server.map(|s| s.id)
    }
}
