//! # cordite
//!
//! Command metadata and client configuration core for a chat bot framework.
//!
//! This crate describes, validates, and categorizes the commands a bot
//! exposes, and holds the bot's runtime configuration in a validated,
//! immutable-where-possible form before any command executes. It does not
//! talk to the chat platform itself: the gateway, dispatcher, and database
//! are black boxes behind small trait seams.
//!
//! ## Features
//!
//! - Closed enumerated-constant sets for permission levels, command
//!   parameter kinds, and command response kinds, with case-insensitive
//!   code lookup and classification queries
//! - Command descriptor construction with field defaulting, name/alias
//!   normalization, and two-bucket validation reporting
//! - Name/alias command registry
//! - Process-wide client state with cooldown and voice-state bookkeeping
//! - TOML-backed client configuration loading
//!
//! ## Quick Start
//!
//! ```rust
//! use cordite::{CommandHelp, CommandHelpData, PermissionLevel, ResponseType};
//!
//! let help = CommandHelp::new(Some(CommandHelpData {
//!     response_type: Some(ResponseType::ResponseInChannel),
//!     description: Some("Replies with pong".into()),
//!     enabled: Some(true),
//!     name: Some("Ping".into()),
//!     permission_level: Some(PermissionLevel::None),
//!     ..Default::default()
//! }))
//! .expect("valid descriptor");
//!
//! assert_eq!(help.name(), "ping");
//! assert_eq!(help.aliases(), ["ping"]);
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod format;
pub mod gateway;
pub mod telemetry;
pub mod types;

pub use self::client::{Client, Environment};
pub use self::command::help::{CommandHelp, CommandHelpData, Finding, Validity};
pub use self::command::registry::Registry;
pub use self::command::{Command, CommandRequest, react_to_command};
pub use self::config::{AllowedMentions, ClientData, GatewayOptions, LogChannels};
pub use self::error::{CommandError, ConfigError, GatewayError, TypeError};
pub use self::format::bold;
pub use self::gateway::Gateway;
pub use self::types::parameter::{ParameterSlot, ParameterType};
pub use self::types::permission::PermissionLevel;
pub use self::types::response::ResponseType;
