//! Command response kinds.
//!
//! How, and where, a command delivers its reply: silently, silently unless
//! an error occurs, as a direct message, as an ephemeral message, or in
//! the channel it was used in.

use crate::error::TypeError;
use crate::format::bold;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// How a command replies once it has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseType {
    /// No response is generated.
    NoResponseSent,
    /// No response is generated unless the command errors.
    NoResponseSentUnlessError,
    /// The response goes to the invoking user as a direct message.
    ResponseAsDirectMessage,
    /// The response goes to the channel as an ephemeral message.
    ResponseAsEphemeral,
    /// The response goes to the channel the command was used in.
    ResponseInChannel,
}

impl ResponseType {
    /// Type tag identifying this enumerated-constant set.
    pub const TYPE: &'static str = "CommandResponseType";

    /// Every supported response type.
    pub const ALL: [Self; 5] = [
        Self::NoResponseSent,
        Self::NoResponseSentUnlessError,
        Self::ResponseAsDirectMessage,
        Self::ResponseAsEphemeral,
        Self::ResponseInChannel,
    ];

    /// The stable code for this response type.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoResponseSent => "NO_RESPONSE_SENT",
            Self::NoResponseSentUnlessError => "NO_RESPONSE_SENT_UNLESS_ERROR",
            Self::ResponseAsDirectMessage => "RESPONSE_AS_DIRECT_MESSAGE",
            Self::ResponseAsEphemeral => "RESPONSE_AS_EPHEMERAL",
            Self::ResponseInChannel => "RESPONSE_IN_CHANNEL",
        }
    }

    /// The human-readable label for this response type.
    pub fn text(&self) -> &'static str {
        match self {
            Self::NoResponseSent => "No response sent",
            Self::NoResponseSentUnlessError => "No response sent unless error",
            Self::ResponseAsDirectMessage => "Response as direct message",
            Self::ResponseAsEphemeral => "Response as ephemeral",
            Self::ResponseInChannel => "Response in channel",
        }
    }

    /// User-facing description of the reply behavior.
    pub fn response_message(&self) -> String {
        match self {
            Self::NoResponseSent => "This command does not generate a response back.".into(),
            Self::NoResponseSentUnlessError => format!(
                "This command does not generate a response back, unless there is an error. \
                 If there is an error, a response will be sent in the {} the command was used in.",
                bold("channel")
            ),
            Self::ResponseAsDirectMessage => format!(
                "This command generates a response back to the {} that used it in a direct \
                 message.",
                bold("user")
            ),
            Self::ResponseAsEphemeral => format!(
                "This command generates a response back in the {} it was used in as an {}.",
                bold("channel"),
                bold("ephemeral message")
            ),
            Self::ResponseInChannel => format!(
                "This command generates a response back in the {} it was used in.",
                bold("channel")
            ),
        }
    }

    /// Look up a response type by its code, case-insensitively.
    ///
    /// # Errors
    ///
    /// [`TypeError::UnsupportedCode`] if the code matches no response type.
    pub fn from_code(code: &str) -> Result<Self, TypeError> {
        let upper = code.to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|rt| rt.code() == upper)
            .ok_or_else(|| TypeError::UnsupportedCode {
                code: code.to_string(),
            })
    }

    /// Look up a response type from a raw config value.
    ///
    /// A non-string value fails with [`TypeError::UnsupportedType`].
    pub fn from_value(value: &toml::Value) -> Result<Self, TypeError> {
        match value.as_str() {
            Some(code) => Self::from_code(code),
            None => Err(TypeError::UnsupportedType {
                type_name: value.type_str().to_string(),
            }),
        }
    }

    /// Whether this type generates any reply at all (direct message,
    /// ephemeral, or in channel).
    pub fn is_any_response_sent(&self) -> bool {
        matches!(
            self,
            Self::ResponseAsDirectMessage | Self::ResponseAsEphemeral | Self::ResponseInChannel
        )
    }

    /// Whether no response is ever sent.
    pub fn is_no_response_sent(&self) -> bool {
        *self == Self::NoResponseSent
    }

    /// Whether a response is only sent on error.
    pub fn is_no_response_sent_unless_error(&self) -> bool {
        *self == Self::NoResponseSentUnlessError
    }

    /// Whether the response goes out as a direct message.
    pub fn is_response_sent_as_direct_message(&self) -> bool {
        *self == Self::ResponseAsDirectMessage
    }

    /// Whether the response goes out as an ephemeral message.
    pub fn is_response_sent_as_ephemeral_message(&self) -> bool {
        *self == Self::ResponseAsEphemeral
    }

    /// Whether the response goes out in the originating channel.
    pub fn is_response_sent_in_channel(&self) -> bool {
        *self == Self::ResponseInChannel
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl<'de> Deserialize<'de> for ResponseType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Self::from_code(&code).map_err(serde::de::Error::custom)
    }
}
