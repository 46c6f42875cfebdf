//! Permission levels.
//!
//! The access tier required to invoke a command. Five tiers exist, with
//! two derived groupings: super users (owner, admin) and privileged users
//! (super users plus mods). `None` is the default tier and is excluded
//! from every derived grouping.

use crate::error::TypeError;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Permission level attached to a command or held by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionLevel {
    /// Admin user.
    Admin,
    /// Bot user.
    Bot,
    /// Mod user.
    Mod,
    /// No special permissions. The default tier.
    None,
    /// The owner of the bot. Has all permissions.
    Owner,
}

impl PermissionLevel {
    /// Type tag identifying this enumerated-constant set.
    pub const TYPE: &'static str = "PermissionLevelType";

    /// Every supported permission level.
    pub const ALL: [Self; 5] = [Self::Admin, Self::Bot, Self::Mod, Self::None, Self::Owner];

    /// Levels that qualify as super user.
    pub const SUPER_USERS: [Self; 2] = [Self::Owner, Self::Admin];

    /// Levels that qualify as privileged user.
    pub const PRIVILEGED_USERS: [Self; 3] = [Self::Owner, Self::Admin, Self::Mod];

    /// The stable code for this level.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Bot => "BOT",
            Self::Mod => "MOD",
            Self::None => "NONE",
            Self::Owner => "OWNER",
        }
    }

    /// The human-readable label for this level.
    pub fn text(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Bot => "Bot",
            Self::Mod => "Mod",
            Self::None => "N/A",
            Self::Owner => "Owner",
        }
    }

    /// Look up a permission level by its code, case-insensitively.
    ///
    /// # Errors
    ///
    /// [`TypeError::UnsupportedCode`] if the code matches no level.
    pub fn from_code(code: &str) -> Result<Self, TypeError> {
        match code.to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "bot" => Ok(Self::Bot),
            "mod" => Ok(Self::Mod),
            "none" => Ok(Self::None),
            "owner" => Ok(Self::Owner),
            _ => Err(TypeError::UnsupportedCode {
                code: code.to_string(),
            }),
        }
    }

    /// Look up a permission level from a raw config value.
    ///
    /// Distinguishes an ill-typed value from an unrecognized code: a
    /// non-string value fails with [`TypeError::UnsupportedType`], a string
    /// value delegates to [`PermissionLevel::from_code`].
    pub fn from_value(value: &toml::Value) -> Result<Self, TypeError> {
        match value.as_str() {
            Some(code) => Self::from_code(code),
            None => Err(TypeError::UnsupportedType {
                type_name: value.type_str().to_string(),
            }),
        }
    }

    /// Whether this level grants any special permissions (anything but `None`).
    pub fn has_permissions(&self) -> bool {
        *self != Self::None
    }

    /// Whether this is the admin level.
    pub fn is_admin(&self) -> bool {
        *self == Self::Admin
    }

    /// Whether this is the bot level.
    pub fn is_bot(&self) -> bool {
        *self == Self::Bot
    }

    /// Whether this is the mod level.
    pub fn is_mod(&self) -> bool {
        *self == Self::Mod
    }

    /// Whether this is the owner level.
    pub fn is_owner(&self) -> bool {
        *self == Self::Owner
    }

    /// Whether this level is in the privileged-user grouping (owner, admin, mod).
    pub fn is_privileged_user(&self) -> bool {
        Self::PRIVILEGED_USERS.contains(self)
    }

    /// Whether this level is in the super-user grouping (owner, admin).
    pub fn is_super_user(&self) -> bool {
        Self::SUPER_USERS.contains(self)
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl<'de> Deserialize<'de> for PermissionLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Self::from_code(&code).map_err(serde::de::Error::custom)
    }
}
