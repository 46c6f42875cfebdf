//! Command registry.
//!
//! Maps every invocation name and alias to its command so the dispatcher
//! can resolve an incoming message in one lookup. Registration is
//! all-or-nothing: a name collision leaves the registry untouched.

use crate::command::Command;
use crate::error::CommandError;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of commands, indexed by normalized name and alias.
#[derive(Default)]
pub struct Registry {
    commands: Vec<Arc<dyn Command>>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command under its name and every alias.
    ///
    /// The descriptor guarantees the normalized name is present in the
    /// alias list, so the aliases are the complete key set.
    ///
    /// # Errors
    ///
    /// [`CommandError::DuplicateName`] if any key is already taken; no
    /// key is inserted in that case.
    pub fn register(&mut self, command: Arc<dyn Command>) -> Result<(), CommandError> {
        for alias in command.help().aliases() {
            if self.index.contains_key(alias) {
                return Err(CommandError::DuplicateName(alias.clone()));
            }
        }

        let slot = self.commands.len();
        for alias in command.help().aliases() {
            self.index.insert(alias.clone(), slot);
        }
        self.commands.push(command);
        Ok(())
    }

    /// Look up a command by name or alias, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Command>> {
        let key = name.to_lowercase();
        self.index.get(&key).map(|&slot| &self.commands[slot])
    }

    /// Number of distinct registered commands (aliases not counted).
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no command is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over the distinct registered commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Command>> {
        self.commands.iter()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("commands", &self.commands.len())
            .field("keys", &self.index.len())
            .finish()
    }
}
