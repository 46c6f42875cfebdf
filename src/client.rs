//! Process-wide client state.
//!
//! One [`Client`] exists per process: it holds the bot's validated runtime
//! configuration (owner, prefixes, log channels, cooldown window), the
//! command registry, and the bookkeeping sets the dispatcher consults
//! while commands are in flight. The core introduces no locks; the
//! single-threaded event dispatch serializes access to the mutable sets.

use crate::command::Registry;
use crate::config::{
    ClientData, DEFAULT_COMMAND_PREFIX, DEFAULT_SCORE_COOL_DOWN_TIME_LIMIT_MS, GatewayOptions,
    LogChannels,
};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::time::Duration;
use tracing::info;

/// Process environment the bot runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Normal operation.
    Production,
    /// Running under the test harness.
    Test,
}

impl Environment {
    /// Detect the environment from `CORDITE_ENV` (value `test`,
    /// case-insensitive, selects [`Environment::Test`]).
    pub fn detect() -> Self {
        Self::from_env_value(std::env::var("CORDITE_ENV").ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(value) if value.eq_ignore_ascii_case("test") => Self::Test,
            _ => Self::Production,
        }
    }

    /// Whether this is the test environment.
    pub fn is_test(&self) -> bool {
        *self == Self::Test
    }
}

/// Validation report for the client configuration.
///
/// Softer than the command descriptor report: the client logs and keeps
/// going where a descriptor would refuse construction.
#[derive(Debug, Clone, Default)]
pub struct ClientValidity {
    null_or_void: Vec<&'static str>,
    malformed: Vec<&'static str>,
}

impl ClientValidity {
    /// Whether no field was flagged.
    pub fn is_valid(&self) -> bool {
        self.null_or_void.is_empty() && self.malformed.is_empty()
    }

    /// The aggregate message, missing fields first.
    pub fn message(&self) -> String {
        let mut message = String::new();
        for field in &self.null_or_void {
            message.push_str(field);
            message.push_str(" is either null or void and cannot be;");
        }
        for field in &self.malformed {
            message.push_str(field);
            message.push_str(" is malformed;");
        }
        message
    }
}

/// The bot's process-wide state.
pub struct Client {
    accepting_commands: bool,
    default_command_prefix: String,
    environment: Environment,
    gateway_options: GatewayOptions,
    kicking_or_banning_member: bool,
    log_channels: LogChannels,
    owner_id: Option<String>,
    registry: Registry,
    score_cool_down: HashSet<String>,
    score_cool_down_time_limit: Duration,
    start_time: DateTime<Utc>,
    voice_states: HashSet<String>,
}

impl Client {
    /// Build the client from construction data, defaulting what is unset.
    ///
    /// The start time is captured before anything else. Gateway options
    /// are resolved field-by-field; the prefix defaults to `"!"` and the
    /// score cooldown window to 30 seconds.
    pub fn new(data: ClientData) -> Self {
        let start_time = Utc::now();

        let default_command_prefix = data
            .default_command_prefix
            .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string());
        let score_cool_down_time_limit = Duration::from_millis(
            data.score_cool_down_time_limit
                .unwrap_or(DEFAULT_SCORE_COOL_DOWN_TIME_LIMIT_MS),
        );
        let environment = Environment::detect();

        info!(
            start_time = %start_time,
            prefix = %default_command_prefix,
            test_environment = environment.is_test(),
            "client initialized, beginning loading process"
        );

        Self {
            accepting_commands: true,
            default_command_prefix,
            environment,
            gateway_options: data.gateway_options.unwrap_or_default().resolved(),
            kicking_or_banning_member: false,
            log_channels: data.log_channels.unwrap_or_default(),
            owner_id: data.owner_id,
            registry: Registry::new(),
            score_cool_down: HashSet::new(),
            score_cool_down_time_limit,
            start_time,
            voice_states: HashSet::new(),
        }
    }

    /// Soft validation of the client's configuration.
    ///
    /// Re-runnable; reports rather than refuses.
    pub fn is_valid(&self) -> ClientValidity {
        let mut report = ClientValidity::default();
        self.validate_command_size(&mut report);
        self.validate_db(&mut report);
        self.validate_owner_id(&mut report);
        report
    }

    fn validate_command_size(&self, _report: &mut ClientValidity) {
        // TODO: require at least one registered command before the bot
        // starts accepting traffic, and terminate startup otherwise.
    }

    fn validate_db(&self, _report: &mut ClientValidity) {
        // TODO: validate the database connection once the db layer exists,
        // and terminate startup otherwise.
    }

    fn validate_owner_id(&self, report: &mut ClientValidity) {
        if self.owner_id.is_none() {
            report.null_or_void.push("ownerId");
        }
    }

    /// Whether the bot is currently accepting commands.
    pub fn is_accepting_commands(&self) -> bool {
        self.accepting_commands
    }

    /// Toggle whether the bot accepts commands.
    pub fn set_accepting_commands(&mut self, accepting: bool) {
        self.accepting_commands = accepting;
    }

    /// Whether the bot is mid kick or ban of a member.
    pub fn is_kicking_or_banning_member(&self) -> bool {
        self.kicking_or_banning_member
    }

    /// Mark the start or end of a kick/ban operation.
    pub fn set_kicking_or_banning_member(&mut self, active: bool) {
        self.kicking_or_banning_member = active;
    }

    /// The configured command prefix.
    pub fn default_command_prefix(&self) -> &str {
        &self.default_command_prefix
    }

    /// The configured logging channels.
    pub fn log_channels(&self) -> &LogChannels {
        &self.log_channels
    }

    /// The bot owner's user ID, if configured.
    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    /// The resolved gateway options.
    pub fn gateway_options(&self) -> &GatewayOptions {
        &self.gateway_options
    }

    /// The registered commands.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Mutable access to the command registry, for startup registration.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// The score cooldown window.
    pub fn score_cool_down_time_limit(&self) -> Duration {
        self.score_cool_down_time_limit
    }

    /// Put a user on score cooldown. Returns false if they already were.
    pub fn start_score_cool_down(&mut self, user_id: &str) -> bool {
        self.score_cool_down.insert(user_id.to_string())
    }

    /// Take a user off score cooldown. Returns false if they were not on it.
    pub fn end_score_cool_down(&mut self, user_id: &str) -> bool {
        self.score_cool_down.remove(user_id)
    }

    /// Whether a user is currently on score cooldown.
    pub fn is_on_score_cool_down(&self, user_id: &str) -> bool {
        self.score_cool_down.contains(user_id)
    }

    /// Mark a user as mid voice-state transition. Returns false if already marked.
    pub fn begin_voice_state_transition(&mut self, user_id: &str) -> bool {
        self.voice_states.insert(user_id.to_string())
    }

    /// Clear a user's voice-state transition. Returns false if none was marked.
    pub fn end_voice_state_transition(&mut self, user_id: &str) -> bool {
        self.voice_states.remove(user_id)
    }

    /// Whether a user is mid voice-state transition.
    pub fn is_in_voice_state_transition(&self, user_id: &str) -> bool {
        self.voice_states.contains(user_id)
    }

    /// When this client was constructed.
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Whether the process runs under the test harness.
    pub fn is_test_environment(&self) -> bool {
        self.environment.is_test()
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(ClientData::default())
    }
}
