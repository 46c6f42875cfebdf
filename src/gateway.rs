//! Black-box chat-platform seam.
//!
//! The core never talks to the chat platform directly; everything it needs
//! from the gateway (sending a message, reacting to one) goes through this
//! trait. The connection, event delivery, and message objects live entirely
//! on the implementor's side.

use crate::error::GatewayError;
use async_trait::async_trait;

/// Operations the core requests from the chat platform.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Send a plain-text message to a channel.
    async fn send_message(&self, channel_id: &str, text: &str) -> Result<(), GatewayError>;

    /// React to a message with an emoji.
    async fn react(
        &self,
        channel_id: &str,
        message_id: &str,
        emoji: &str,
    ) -> Result<(), GatewayError>;
}
