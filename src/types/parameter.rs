//! Command parameter kinds.
//!
//! Each constant names one kind of argument slot a command accepts,
//! in a required, optional, or throw-on-invalid variant. Not every kind
//! has all three variants; points only exists as required.

use crate::error::TypeError;
use crate::format::bold;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Machine-friendly parameter slot vocabulary.
///
/// The slot name is what a dispatcher uses to pick an argument out of an
/// incoming invocation; the variants of [`ParameterType`] map onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterSlot {
    /// The name of another command (`commandName`).
    CommandName,
    /// A numerical value (`n`).
    Number,
    /// A number of points (`points`).
    Points,
    /// A free-form string (`str`).
    Str,
    /// A user's platform ID (`userId`).
    UserId,
    /// An @-mentionable user (`userMentionable`).
    UserMentionable,
}

impl ParameterSlot {
    /// The slot's machine name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CommandName => "commandName",
            Self::Number => "n",
            Self::Points => "points",
            Self::Str => "str",
            Self::UserId => "userId",
            Self::UserMentionable => "userMentionable",
        }
    }
}

/// Command parameter kind and required-ness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterType {
    /// Optional command name.
    CommandNameOptional,
    /// Required command name.
    CommandNameRequired,
    /// Command name that raises on an invalid value.
    CommandNameThrowError,
    /// Optional number.
    NumberOptional,
    /// Required number.
    NumberRequired,
    /// Required point count.
    PointsRequired,
    /// Optional string.
    StringOptional,
    /// Required string.
    StringRequired,
    /// Optional user ID.
    UserIdOptional,
    /// Required user ID.
    UserIdRequired,
    /// User ID that raises on an invalid value.
    UserIdThrowError,
    /// Optional user mentionable.
    UserMentionableOptional,
    /// Required user mentionable.
    UserMentionableRequired,
    /// User mentionable that raises on an invalid value.
    UserMentionableThrowError,
}

impl ParameterType {
    /// Type tag identifying this enumerated-constant set.
    pub const TYPE: &'static str = "CommandParameterType";

    /// Every supported parameter type.
    pub const ALL: [Self; 14] = [
        Self::CommandNameOptional,
        Self::CommandNameRequired,
        Self::CommandNameThrowError,
        Self::NumberOptional,
        Self::NumberRequired,
        Self::PointsRequired,
        Self::StringOptional,
        Self::StringRequired,
        Self::UserIdOptional,
        Self::UserIdRequired,
        Self::UserIdThrowError,
        Self::UserMentionableOptional,
        Self::UserMentionableRequired,
        Self::UserMentionableThrowError,
    ];

    /// The stable code for this parameter type.
    pub fn code(&self) -> &'static str {
        match self {
            Self::CommandNameOptional => "COMMAND_NAME_OPTIONAL",
            Self::CommandNameRequired => "COMMAND_NAME_REQUIRED",
            Self::CommandNameThrowError => "COMMAND_NAME_THROW_ERROR",
            Self::NumberOptional => "NUMBER_OPTIONAL",
            Self::NumberRequired => "NUMBER_REQUIRED",
            Self::PointsRequired => "POINTS_REQUIRED",
            Self::StringOptional => "STRING_OPTIONAL",
            Self::StringRequired => "STRING_REQUIRED",
            Self::UserIdOptional => "USER_ID_OPTIONAL",
            Self::UserIdRequired => "USER_ID_REQUIRED",
            Self::UserIdThrowError => "USER_ID_THROW_ERROR",
            Self::UserMentionableOptional => "USER_MENTIONABLE_OPTIONAL",
            Self::UserMentionableRequired => "USER_MENTIONABLE_REQUIRED",
            Self::UserMentionableThrowError => "USER_MENTIONABLE_THROW_ERROR",
        }
    }

    /// The human-readable label for this parameter type.
    pub fn text(&self) -> &'static str {
        match self {
            Self::CommandNameOptional => "Command name (optional)",
            Self::CommandNameRequired => "Command name (required)",
            Self::CommandNameThrowError => "Command name (throw error)",
            Self::NumberOptional => "Number (optional)",
            Self::NumberRequired => "Number (required)",
            Self::PointsRequired => "Points (required)",
            Self::StringOptional => "String (optional)",
            Self::StringRequired => "String (required)",
            Self::UserIdOptional => "User ID (optional)",
            Self::UserIdRequired => "User ID (required)",
            Self::UserIdThrowError => "User ID (throw error)",
            Self::UserMentionableOptional => "User mentionable (optional)",
            Self::UserMentionableRequired => "User mentionable (required)",
            Self::UserMentionableThrowError => "User mentionable (throw error)",
        }
    }

    /// The parameter slot this type fills.
    pub fn slot(&self) -> ParameterSlot {
        match self {
            Self::CommandNameOptional | Self::CommandNameRequired | Self::CommandNameThrowError => {
                ParameterSlot::CommandName
            }
            Self::NumberOptional | Self::NumberRequired => ParameterSlot::Number,
            Self::PointsRequired => ParameterSlot::Points,
            Self::StringOptional | Self::StringRequired => ParameterSlot::Str,
            Self::UserIdOptional | Self::UserIdRequired | Self::UserIdThrowError => {
                ParameterSlot::UserId
            }
            Self::UserMentionableOptional
            | Self::UserMentionableRequired
            | Self::UserMentionableThrowError => ParameterSlot::UserMentionable,
        }
    }

    /// The machine name of this type's slot.
    pub fn name(&self) -> &'static str {
        self.slot().as_str()
    }

    /// User-facing description of the parameter, with markup on the
    /// required-ness marker.
    pub fn description(&self) -> String {
        match self {
            Self::CommandNameOptional => {
                format!("The name of a command. {}.", bold("Optional"))
            }
            Self::CommandNameRequired => {
                format!("The name of a command. {}.", bold("Required"))
            }
            Self::CommandNameThrowError => {
                "The name of a command. Throws an error if an invalid name is provided.".into()
            }
            Self::NumberOptional => format!("A numerical value. {}.", bold("Optional")),
            Self::NumberRequired => format!("A numerical value. {}.", bold("Required")),
            Self::PointsRequired => format!("A number of points. {}.", bold("Required")),
            Self::StringOptional => format!("A string value. {}.", bold("Optional")),
            Self::StringRequired => format!("A string value. {}.", bold("Required")),
            Self::UserIdOptional => {
                format!("The ID of a Discord user. {}.", bold("Optional"))
            }
            Self::UserIdRequired => {
                format!("The ID of a Discord user. {}.", bold("Required"))
            }
            Self::UserIdThrowError => {
                "The ID of a Discord user. Throws an error if an invalid ID is provided.".into()
            }
            Self::UserMentionableOptional => {
                format!("A user mentionable (@ user). {}.", bold("Optional"))
            }
            Self::UserMentionableRequired => {
                format!("A user mentionable (@ user). {}.", bold("Required"))
            }
            Self::UserMentionableThrowError => {
                "A user mentionable (@ user). Throws an error if an invalid user mentionable \
                 is provided."
                    .into()
            }
        }
    }

    /// Look up a parameter type by its code, case-insensitively.
    ///
    /// # Errors
    ///
    /// [`TypeError::UnsupportedCode`] if the code matches no parameter type.
    pub fn from_code(code: &str) -> Result<Self, TypeError> {
        let upper = code.to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|pt| pt.code() == upper)
            .ok_or_else(|| TypeError::UnsupportedCode {
                code: code.to_string(),
            })
    }

    /// Look up a parameter type from a raw config value.
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

    /// Whether this is a command-name parameter (any variant).
    pub fn is_command_name(&self) -> bool {
        self.slot() == ParameterSlot::CommandName
    }

    /// Whether this is a number parameter.
    ///
    /// Excludes the points variant even though points are numeric; callers
    /// that want any numeric parameter must also check [`Self::is_points`].
    pub fn is_number(&self) -> bool {
        self.slot() == ParameterSlot::Number
    }

    /// Whether this is the points parameter.
    pub fn is_points(&self) -> bool {
        self.slot() == ParameterSlot::Points
    }

    /// Whether this is a string parameter (any variant).
    pub fn is_string(&self) -> bool {
        self.slot() == ParameterSlot::Str
    }

    /// Whether this is a user-ID parameter (any variant).
    pub fn is_user_id(&self) -> bool {
        self.slot() == ParameterSlot::UserId
    }

    /// Whether this is a user-mentionable parameter (any variant).
    pub fn is_user_mentionable(&self) -> bool {
        self.slot() == ParameterSlot::UserMentionable
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl<'de> Deserialize<'de> for ParameterType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Self::from_code(&code).map_err(serde::de::Error::custom)
    }
}
