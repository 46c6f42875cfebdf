//! Commands and their shared post-execution behavior.
//!
//! Every concrete command implements the [`Command`] trait and owns one
//! validated [`CommandHelp`] descriptor, built at construction time, so a
//! command with invalid metadata cannot exist. The dispatcher (out of
//! scope here) looks commands up by name or alias in the [`Registry`] and,
//! once a command finishes, calls [`react_to_command`] to mark the
//! originating message with the outcome.

pub mod help;
pub mod registry;

pub use help::{CommandHelp, CommandHelpData, Finding, Validity};
pub use registry::Registry;

use crate::error::CommandError;
use crate::gateway::Gateway;
use async_trait::async_trait;
use tracing::warn;

/// Reaction added to a message whose command completed successfully.
const SUCCESS_EMOJI: &str = "\u{2705}";
/// Reaction added to a message whose command failed.
const FAILURE_EMOJI: &str = "\u{274E}";

const DISABLED_COMMAND_TEMPLATE: &str =
    "I'm sorry, %MEMBER%, this command is currently disabled";
const CANNOT_BE_USED_IN_DM_TEMPLATE: &str =
    "I'm sorry, %MEMBER%, this command cannot be used in a DM channel";

/// Coordinates of the message that invoked a command.
///
/// A thin projection of the platform message object; the gateway keeps the
/// real thing.
#[derive(Debug, Clone)]
pub struct CommandRequest {
    /// Channel the command was used in.
    pub channel_id: String,
    /// The invoking message itself.
    pub message_id: String,
    /// Display name of the invoking member.
    pub member: String,
    /// Whether the command arrived over a direct-message channel.
    pub is_direct_message: bool,
}

/// Trait implemented by every concrete command.
///
/// A command owns its descriptor and exposes a single asynchronous
/// `execute` operation; anything else (cooldowns, permission checks,
/// argument parsing) belongs to the dispatcher.
#[async_trait]
pub trait Command: Send + Sync {
    /// The command's validated descriptor.
    fn help(&self) -> &CommandHelp;

    /// Run the command.
    async fn execute(
        &self,
        gateway: &dyn Gateway,
        request: &CommandRequest,
    ) -> Result<(), CommandError>;
}

/// React to a completed command's originating message with a success or
/// failure marker.
///
/// Best effort: if the reaction attempt fails (message deleted, missing
/// permission), a plain-text error notice is sent to the same channel
/// instead of propagating the failure. There is no retry and no timeout;
/// a caller that needs a deadline wraps this externally.
pub async fn react_to_command(gateway: &dyn Gateway, request: &CommandRequest, success: bool) {
    let emoji = if success { SUCCESS_EMOJI } else { FAILURE_EMOJI };

    if let Err(error) = gateway
        .react(&request.channel_id, &request.message_id, emoji)
        .await
    {
        let notice = format!("__Error:__ {error}.");
        if let Err(error) = gateway.send_message(&request.channel_id, &notice).await {
            warn!(
                channel = %request.channel_id,
                error = %error,
                "failed to deliver reaction error notice"
            );
        }
    }
}

/// User notice for an invocation of a disabled command.
pub fn disabled_notice(member: &str) -> String {
    DISABLED_COMMAND_TEMPLATE.replace("%MEMBER%", member)
}

/// User notice for a guild-only command invoked over direct message.
pub fn dm_refusal_notice(member: &str) -> String {
    CANNOT_BE_USED_IN_DM_TEMPLATE.replace("%MEMBER%", member)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_templates_substitute_member() {
        assert_eq!(
            disabled_notice("mira"),
            "I'm sorry, mira, this command is currently disabled"
        );
        assert_eq!(
            dm_refusal_notice("mira"),
            "I'm sorry, mira, this command cannot be used in a DM channel"
        );
    }
}
