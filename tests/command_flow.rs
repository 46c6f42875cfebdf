//! Integration tests for the command trait, registry, and reaction helper.

use async_trait::async_trait;
use cordite::error::{CommandError, GatewayError};
use cordite::{
    Command, CommandHelp, CommandHelpData, CommandRequest, Gateway, PermissionLevel, Registry,
    ResponseType, react_to_command,
};
use std::sync::Arc;
use std::sync::Mutex;

/// Records every gateway call; optionally fails reactions.
#[derive(Default)]
struct RecordingGateway {
    fail_reactions: bool,
    fail_sends: bool,
    sent: Mutex<Vec<(String, String)>>,
    reactions: Mutex<Vec<(String, String, String)>>,
}

#[async_trait]
impl Gateway for RecordingGateway {
    async fn send_message(&self, channel_id: &str, text: &str) -> Result<(), GatewayError> {
        if self.fail_sends {
            return Err(GatewayError::MissingPermission("send".into()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((channel_id.to_string(), text.to_string()));
        Ok(())
    }

    async fn react(
        &self,
        channel_id: &str,
        message_id: &str,
        emoji: &str,
    ) -> Result<(), GatewayError> {
        if self.fail_reactions {
            return Err(GatewayError::MessageNotFound(message_id.to_string()));
        }
        self.reactions.lock().unwrap().push((
            channel_id.to_string(),
            message_id.to_string(),
            emoji.to_string(),
        ));
        Ok(())
    }
}

struct PingCommand {
    help: CommandHelp,
}

impl PingCommand {
    fn new() -> Self {
        let help = CommandHelp::new(Some(CommandHelpData {
            response_type: Some(ResponseType::ResponseInChannel),
            description: Some("Replies with pong".into()),
            enabled: Some(true),
            name: Some("Ping".into()),
            permission_level: Some(PermissionLevel::None),
            aliases: Some(vec!["p".into()]),
            ..Default::default()
        }))
        .expect("valid descriptor");
        Self { help }
    }
}

#[async_trait]
impl Command for PingCommand {
    fn help(&self) -> &CommandHelp {
        &self.help
    }

    async fn execute(
        &self,
        gateway: &dyn Gateway,
        request: &CommandRequest,
    ) -> Result<(), CommandError> {
        gateway
            .send_message(&request.channel_id, "pong")
            .await
            .map_err(|e| CommandError::Invalid(e.to_string()))?;
        Ok(())
    }
}

fn request() -> CommandRequest {
    CommandRequest {
        channel_id: "general".into(),
        message_id: "msg-1".into(),
        member: "mira".into(),
        is_direct_message: false,
    }
}

#[tokio::test]
async fn registered_command_resolves_and_executes() {
    let mut registry = Registry::new();
    registry.register(Arc::new(PingCommand::new())).unwrap();

    let gateway = RecordingGateway::default();
    let command = registry.get("P").expect("alias lookup");
    command.execute(&gateway, &request()).await.unwrap();

    let sent = gateway.sent.lock().unwrap();
    assert_eq!(sent.as_slice(), [("general".to_string(), "pong".to_string())]);
}

#[tokio::test]
async fn successful_command_reacts_with_check_mark() {
    let gateway = RecordingGateway::default();
    react_to_command(&gateway, &request(), true).await;

    let reactions = gateway.reactions.lock().unwrap();
    assert_eq!(
        reactions.as_slice(),
        [("general".to_string(), "msg-1".to_string(), "\u{2705}".to_string())]
    );
}

#[tokio::test]
async fn failed_command_reacts_with_cross_mark() {
    let gateway = RecordingGateway::default();
    react_to_command(&gateway, &request(), false).await;

    let reactions = gateway.reactions.lock().unwrap();
    assert_eq!(reactions.len(), 1);
    assert_eq!(reactions[0].2, "\u{274E}");
}

#[tokio::test]
async fn failing_reaction_falls_back_to_channel_notice() {
    let gateway = RecordingGateway {
        fail_reactions: true,
        ..Default::default()
    };
    react_to_command(&gateway, &request(), true).await;

    assert!(gateway.reactions.lock().unwrap().is_empty());
    let sent = gateway.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "general");
    assert!(sent[0].1.starts_with("__Error:__"));
    assert!(sent[0].1.ends_with('.'));
}

#[tokio::test]
async fn failing_fallback_send_is_swallowed() {
    let gateway = RecordingGateway {
        fail_reactions: true,
        fail_sends: true,
        ..Default::default()
    };
    // Must not panic or propagate.
    react_to_command(&gateway, &request(), false).await;
    assert!(gateway.sent.lock().unwrap().is_empty());
}
