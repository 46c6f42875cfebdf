//! Validated command descriptors.
//!
//! A command author supplies a [`CommandHelpData`] configuration object;
//! [`CommandHelp`] defaults its optional fields, normalizes the name and
//! aliases, and validates the required fields before any command carrying
//! it can exist. Construction either fully succeeds or fails with the
//! aggregated validation message, so a partially-built descriptor is never
//! observable.

use crate::error::CommandError;
use crate::types::parameter::ParameterType;
use crate::types::permission::PermissionLevel;
use crate::types::response::ResponseType;
use serde::Deserialize;

// Field labels as they appear in validation messages. The camelCase names
// are part of the reported-message contract.
const FIELD_RESPONSE_TYPE: &str = "commandResponseType";
const FIELD_DESCRIPTION: &str = "description";
const FIELD_ENABLED: &str = "enabled";
const FIELD_NAME: &str = "name";
const FIELD_PERMISSION_LEVEL: &str = "permissionLevel";

/// Raw command descriptor as supplied by a command author or a config file.
///
/// Every field is optional here; which ones are actually required is
/// decided by [`CommandHelp::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CommandHelpData {
    /// How the command replies. Required.
    pub response_type: Option<ResponseType>,
    /// Short description shown in help listings. Required.
    pub description: Option<String>,
    /// Whether the command starts out enabled. Required.
    pub enabled: Option<bool>,
    /// The command's invocation name. Required, normalized on construction.
    pub name: Option<String>,
    /// Permission tier required to invoke the command. Required.
    pub permission_level: Option<PermissionLevel>,
    /// Alternate invocation names. Defaults to the normalized name.
    pub aliases: Option<Vec<String>>,
    /// Usage string shown in detailed help. Defaults to absent.
    pub command_format: Option<String>,
    /// Argument slots the command accepts. Defaults to none.
    pub parameters: Option<Vec<ParameterType>>,
    /// Long-form description. Defaults to `description`.
    pub detailed_description: Option<String>,
    /// Example invocations. Defaults to `"N/A"`.
    pub examples: Option<String>,
    /// Display name, kept un-normalized. Defaults to the raw `name`.
    pub full_name: Option<String>,
}

/// A single field-level validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finding {
    /// The field was not supplied at all.
    Missing(&'static str),
    /// The field was supplied but fails its shape check.
    Malformed(&'static str),
}

/// Validation report for a [`CommandHelpData`].
///
/// Produced by the pure [`CommandHelp::validate`] function; holds the
/// ordered field findings and renders them as the aggregate message the
/// constructor raises on failure.
#[derive(Debug, Clone, Default)]
pub struct Validity {
    findings: Vec<Finding>,
}

impl Validity {
    /// Whether no field was flagged.
    pub fn is_valid(&self) -> bool {
        self.findings.is_empty()
    }

    /// Every finding, in field check order.
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// The aggregate message: every missing field in check order, then
    /// every malformed field in check order. Empty exactly when valid.
    pub fn message(&self) -> String {
        let mut message = String::new();
        for finding in &self.findings {
            if let Finding::Missing(field) = finding {
                message.push_str(field);
                message.push_str(" is either null or undefined and cannot be;");
            }
        }
        for finding in &self.findings {
            if let Finding::Malformed(field) = finding {
                message.push_str(field);
                message.push_str(" is invalid;");
            }
        }
        message
    }
}

/// The validated descriptor for one command.
///
/// Only `enabled` is mutable after construction; every other field is
/// fixed for the descriptor's lifetime.
#[derive(Debug, Clone)]
pub struct CommandHelp {
    response_type: ResponseType,
    description: String,
    enabled: bool,
    name: String,
    permission_level: PermissionLevel,
    aliases: Vec<String>,
    command_format: Option<String>,
    parameters: Vec<ParameterType>,
    detailed_description: String,
    examples: String,
    full_name: String,
}

/// Lower-case a command name and strip all whitespace from it.
fn normalize_name(name: &str) -> String {
    name.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect()
}

/// Non-empty string or nothing; blank optional fields count as unset.
fn set_or_none(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl CommandHelp {
    /// Build a validated descriptor from raw configuration data.
    ///
    /// Runs [`CommandHelp::validate`] and only constructs on a clean
    /// report, then applies the defaulting and normalization rules:
    /// the name is lower-cased with whitespace stripped, supplied aliases
    /// are taken as-is (assumed already lower-case) with the normalized
    /// name appended if absent, and each optional field falls back to its
    /// documented default.
    ///
    /// # Errors
    ///
    /// [`CommandError::NullData`] if `data` is `None`;
    /// [`CommandError::Invalid`] with the aggregated report message if any
    /// required field is missing or malformed.
    pub fn new(data: Option<CommandHelpData>) -> Result<Self, CommandError> {
        let data = data.ok_or(CommandError::NullData)?;

        let validity = Self::validate(&data);
        if !validity.is_valid() {
            return Err(CommandError::Invalid(validity.message()));
        }

        // The report was clean, so the required fields are all present and
        // the raw name normalizes to something non-empty.
        let raw_name = data.name.unwrap_or_default();
        let name = normalize_name(&raw_name);
        let description = data.description.unwrap_or_default();

        let mut aliases = match data.aliases {
            Some(aliases) if !aliases.is_empty() => aliases,
            _ => vec![name.clone()],
        };
        if !aliases.contains(&name) {
            aliases.push(name.clone());
        }

        let detailed_description =
            set_or_none(data.detailed_description).unwrap_or_else(|| description.clone());
        let examples = set_or_none(data.examples).unwrap_or_else(|| "N/A".to_string());
        let full_name = set_or_none(data.full_name).unwrap_or(raw_name);

        Ok(Self {
            response_type: data.response_type.unwrap_or(ResponseType::NoResponseSent),
            description,
            enabled: data.enabled.unwrap_or_default(),
            name,
            permission_level: data.permission_level.unwrap_or(PermissionLevel::None),
            aliases,
            command_format: set_or_none(data.command_format),
            parameters: data.parameters.unwrap_or_default(),
            detailed_description,
            examples,
            full_name,
        })
    }

    /// Validate raw descriptor data without constructing anything.
    ///
    /// Pure and reusable: each required field lands in at most one bucket,
    /// with missing taking precedence over malformed. An absent name
    /// normalizes to the empty string, so it reports malformed rather than
    /// missing.
    pub fn validate(data: &CommandHelpData) -> Validity {
        let mut findings = Vec::new();

        if data.response_type.is_none() {
            findings.push(Finding::Missing(FIELD_RESPONSE_TYPE));
        }
        if data.description.is_none() {
            findings.push(Finding::Missing(FIELD_DESCRIPTION));
        }
        if data.enabled.is_none() {
            findings.push(Finding::Missing(FIELD_ENABLED));
        }
        if normalize_name(data.name.as_deref().unwrap_or_default()).is_empty() {
            findings.push(Finding::Malformed(FIELD_NAME));
        }
        if data.permission_level.is_none() {
            findings.push(Finding::Missing(FIELD_PERMISSION_LEVEL));
        }

        Validity { findings }
    }

    /// How the command replies.
    pub fn response_type(&self) -> ResponseType {
        self.response_type
    }

    /// Short description shown in help listings.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the command is currently enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable the command. Idempotent.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Disable the command. Idempotent.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// The normalized invocation name (lower-case, no whitespace).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Permission tier required to invoke the command.
    pub fn permission_level(&self) -> PermissionLevel {
        self.permission_level
    }

    /// Every invocation name, normalized primary name included.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Usage string for detailed help, if one was supplied.
    pub fn command_format(&self) -> Option<&str> {
        self.command_format.as_deref()
    }

    /// Argument slots the command accepts.
    pub fn parameters(&self) -> &[ParameterType] {
        &self.parameters
    }

    /// Long-form description.
    pub fn detailed_description(&self) -> &str {
        &self.detailed_description
    }

    /// Example invocations.
    pub fn examples(&self) -> &str {
        &self.examples
    }

    /// Display name, un-normalized (may contain spaces and capitals).
    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_data() -> CommandHelpData {
        CommandHelpData {
            response_type: Some(ResponseType::NoResponseSent),
            description: Some("Test".into()),
            enabled: Some(true),
            name: Some("Test command".into()),
            permission_level: Some(PermissionLevel::None),
            ..Default::default()
        }
    }

    #[test]
    fn test_null_data_is_rejected() {
        let err = CommandHelp::new(None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unable to create command with a null data object"
        );
    }

    #[test]
    fn test_empty_data_aggregates_all_findings() {
        let err = CommandHelp::new(Some(CommandHelpData::default())).unwrap_err();
        assert_eq!(
            err.to_string(),
            "commandResponseType is either null or undefined and cannot be;\
             description is either null or undefined and cannot be;\
             enabled is either null or undefined and cannot be;\
             permissionLevel is either null or undefined and cannot be;\
             name is invalid;"
        );
    }

    #[test]
    fn test_whitespace_only_name_is_invalid() {
        let mut data = base_data();
        data.name = Some("   ".into());
        let validity = CommandHelp::validate(&data);
        assert!(!validity.is_valid());
        assert_eq!(validity.message(), "name is invalid;");
        assert_eq!(validity.findings(), [Finding::Malformed("name")]);
    }

    #[test]
    fn test_validate_is_idempotent() {
        let data = CommandHelpData::default();
        let first = CommandHelp::validate(&data).message();
        let second = CommandHelp::validate(&data).message();
        assert_eq!(first, second);
    }

    #[test]
    fn test_name_normalization_and_defaults() {
        let help = CommandHelp::new(Some(base_data())).unwrap();
        assert_eq!(help.name(), "testcommand");
        assert_eq!(help.aliases(), ["testcommand"]);
        assert_eq!(help.command_format(), None);
        assert!(help.parameters().is_empty());
        assert_eq!(help.detailed_description(), "Test");
        assert_eq!(help.examples(), "N/A");
        assert_eq!(help.full_name(), "Test command");
    }

    #[test]
    fn test_aliases_append_name_if_missing() {
        let mut data = base_data();
        data.aliases = Some(vec!["test".into(), "testo".into()]);
        let help = CommandHelp::new(Some(data)).unwrap();
        assert_eq!(help.aliases(), ["test", "testo", "testcommand"]);
    }

    #[test]
    fn test_aliases_no_duplicate_append() {
        let mut data = base_data();
        data.name = Some("Test".into());
        data.aliases = Some(vec!["test".into(), "testo".into()]);
        let help = CommandHelp::new(Some(data)).unwrap();
        assert_eq!(help.aliases(), ["test", "testo"]);
    }

    #[test]
    fn test_empty_alias_list_counts_as_unset() {
        let mut data = base_data();
        data.aliases = Some(Vec::new());
        let help = CommandHelp::new(Some(data)).unwrap();
        assert_eq!(help.aliases(), ["testcommand"]);
    }

    #[test]
    fn test_enable_disable_idempotence() {
        let mut help = CommandHelp::new(Some(base_data())).unwrap();
        assert!(help.is_enabled());
        help.enable();
        assert!(help.is_enabled());
        help.disable();
        assert!(!help.is_enabled());
        help.disable();
        assert!(!help.is_enabled());
    }

    #[test]
    fn test_descriptor_from_toml() {
        let data: CommandHelpData = toml::from_str(
            r#"
            response_type = "RESPONSE_IN_CHANNEL"
            description = "Rolls a die"
            enabled = true
            name = "Roll"
            permission_level = "none"
            parameters = ["NUMBER_OPTIONAL"]
            "#,
        )
        .unwrap();
        let help = CommandHelp::new(Some(data)).unwrap();
        assert_eq!(help.response_type(), ResponseType::ResponseInChannel);
        assert_eq!(help.parameters(), [ParameterType::NumberOptional]);
        assert_eq!(help.name(), "roll");
    }

    #[test]
    fn test_descriptor_from_toml_bad_code() {
        let result: Result<CommandHelpData, _> = toml::from_str(
            r#"
            response_type = "SMOKE_SIGNAL"
            "#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Unsupported code SMOKE_SIGNAL provided"));
    }
}
