//! Unified error handling for cordite.
//!
//! This module provides the error hierarchy for the command-metadata core:
//! enumerated-constant lookup failures, descriptor construction failures,
//! configuration loading failures, and gateway call failures.

use thiserror::Error;

// ============================================================================
// Enumerated-constant lookup errors
// ============================================================================

/// Errors raised by reverse lookup on an enumerated-constant set.
///
/// Lookup distinguishes a well-typed but unrecognized code from an input
/// that is not a string at all (e.g. an integer in a config file).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TypeError {
    /// The code is a string but matches no supported constant.
    #[error("Unsupported code {code} provided")]
    UnsupportedCode {
        /// The unrecognized code as supplied.
        code: String,
    },

    /// The input is not a string value.
    #[error("Unsupported type {type_name} provided")]
    UnsupportedType {
        /// Name of the value's actual type (e.g. "integer", "boolean").
        type_name: String,
    },
}

// ============================================================================
// Command descriptor errors
// ============================================================================

/// Errors raised while building or registering a command.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CommandError {
    /// The descriptor construction data was absent entirely.
    #[error("Unable to create command with a null data object")]
    NullData,

    /// Descriptor validation failed; the message aggregates every
    /// missing and malformed field finding in check order.
    #[error("{0}")]
    Invalid(String),

    /// A command name or alias is already taken in the registry.
    #[error("duplicate command name or alias: {0}")]
    DuplicateName(String),
}

// ============================================================================
// Configuration errors
// ============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the config file contents.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Gateway errors
// ============================================================================

/// Errors surfaced by the black-box chat gateway.
///
/// The core never constructs these itself; a gateway implementation maps
/// its platform failures (missing permission, deleted message, transport
/// trouble) onto these variants.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The target message no longer exists.
    #[error("message not found: {0}")]
    MessageNotFound(String),

    /// The bot lacks permission for the attempted action.
    #[error("missing permission: {0}")]
    MissingPermission(String),

    /// Any other platform-side failure.
    #[error("gateway error: {0}")]
    Platform(String),
}
