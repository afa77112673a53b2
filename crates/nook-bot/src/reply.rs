//! Platform-neutral replies.

use std::fmt;

/// Accent colour for month listings.
pub const MONTH_COLOUR: u32 = 0xF9D048;

/// A titled field inside an embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    /// Field heading.
    pub name: String,
    /// Field body.
    pub value: String,
    /// Whether the field may sit beside the previous one.
    pub inline: bool,
}

/// A rich message with a title and fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    /// Heading of the whole message.
    pub title: String,
    /// Accent colour as `0xRRGGBB`.
    pub colour: u32,
    /// Fields in display order.
    pub fields: Vec<EmbedField>,
}

impl Embed {
    /// An embed with no fields.
    pub fn new(title: impl Into<String>, colour: u32) -> Self {
        Self {
            title: title.into(),
            colour,
            fields: Vec::new(),
        }
    }

    /// Append a field that takes a full row.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline: false,
        });
        self
    }
}

/// What the bot sends back for a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain text.
    Text(String),
    /// A rich message.
    Embed(Embed),
}

impl Reply {
    /// The text body, if this is a plain-text reply.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Embed(_) => None,
        }
    }

    /// The embed, if this is a rich reply.
    pub fn as_embed(&self) -> Option<&Embed> {
        match self {
            Self::Text(_) => None,
            Self::Embed(embed) => Some(embed),
        }
    }
}

/// Renders as plain text, for terminals and logs.
impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Embed(embed) => {
                write!(f, "{}", embed.title)?;
                for field in &embed.fields {
                    write!(f, "\n\n{}\n{}", field.name, field.value)?;
                }
                Ok(())
            }
        }
    }
}
