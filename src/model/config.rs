use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::command::{SORT_COMMANDS, SortCommand};

/// User settings from settings.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Command ID → enabled. Commands missing here use their default.
    #[serde(default)]
    pub commands_enabled: IndexMap<String, bool>,
}

impl Settings {
    /// Settings with every command listed at its default
    pub fn with_defaults() -> Self {
        Settings {
            commands_enabled: SORT_COMMANDS
                .iter()
                .map(|cmd| (cmd.id.to_string(), cmd.enabled_by_default))
                .collect(),
        }
    }

    pub fn is_enabled(&self, command: &SortCommand) -> bool {
        self.commands_enabled
            .get(command.id)
            .copied()
            .unwrap_or(command.enabled_by_default)
    }

    pub fn set_enabled(&mut self, command: &SortCommand, enabled: bool) {
        self.commands_enabled.insert(command.id.to_string(), enabled);
    }
}
