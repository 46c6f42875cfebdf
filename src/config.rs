//! Client configuration loading.
//!
//! Construction data for [`crate::Client`], loadable from a TOML file.
//! Every field is optional; defaulting happens when the client is built,
//! not during parsing, so a partially-specified file round-trips
//! faithfully.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Default command prefix when none is configured.
pub const DEFAULT_COMMAND_PREFIX: &str = "!";

/// Default score cooldown window in milliseconds.
pub const DEFAULT_SCORE_COOL_DOWN_TIME_LIMIT_MS: u64 = 30_000;

/// Raw client construction data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClientData {
    /// Prefix that marks a message as a command invocation.
    pub default_command_prefix: Option<String>,
    /// Channels the bot logs to.
    pub log_channels: Option<LogChannels>,
    /// User ID of the bot's owner.
    pub owner_id: Option<String>,
    /// Score cooldown window, in milliseconds.
    pub score_cool_down_time_limit: Option<u64>,
    /// Options forwarded to the chat gateway.
    pub gateway_options: Option<GatewayOptions>,
}

impl ClientData {
    /// Load client construction data from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let data: ClientData = toml::from_str(&content)?;
        Ok(data)
    }
}

/// Logging channel ids.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogChannels {
    /// Channel receiving boot-time log messages.
    pub boot_channel_id: Option<String>,
    /// Channel receiving forwarded direct messages.
    pub direct_message_channel_id: Option<String>,
}

/// Options forwarded to the chat gateway connection.
///
/// The gateway itself is a black box; these are carried, defaulted
/// field-by-field, and handed over verbatim.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GatewayOptions {
    /// Which mention kinds the bot is allowed to trigger.
    pub allowed_mentions: Option<AllowedMentions>,
    /// Gateway event groups the bot subscribes to.
    pub intents: Option<Vec<String>>,
    /// Partial object kinds the gateway may deliver.
    pub partials: Option<Vec<String>>,
}

impl GatewayOptions {
    /// Fill every unset field with its default.
    ///
    /// Defaulting is per field: a supplied options object with only
    /// `intents` set still gets the default mentions and partials.
    pub fn resolved(self) -> Self {
        Self {
            allowed_mentions: self.allowed_mentions.or_else(|| Some(AllowedMentions::default_set())),
            intents: self.intents.or_else(|| Some(default_intents())),
            partials: self.partials.or_else(|| Some(default_partials())),
        }
    }
}

/// Mention kinds the bot may trigger in its replies.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AllowedMentions {
    /// Mention categories to parse ("roles", "users", "everyone").
    pub parse: Vec<String>,
    /// Whether replying pings the replied-to user.
    pub replied_user: bool,
}

impl AllowedMentions {
    /// The default mention policy: roles and users, ping on reply.
    pub fn default_set() -> Self {
        Self {
            parse: vec!["roles".into(), "users".into()],
            replied_user: true,
        }
    }
}

fn default_intents() -> Vec<String> {
    [
        "GUILDS",
        "GUILD_MEMBERS",
        "GUILD_BANS",
        "GUILD_EMOJIS_AND_STICKERS",
        "GUILD_INVITES",
        "GUILD_VOICE_STATES",
        "GUILD_PRESENCES",
        "GUILD_MESSAGES",
        "DIRECT_MESSAGES",
        "DIRECT_MESSAGE_TYPING",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_partials() -> Vec<String> {
    ["CHANNEL", "GUILD_MEMBER", "MESSAGE", "REACTION", "USER"]
        .into_iter()
        .map(String::from)
        .collect()
}
