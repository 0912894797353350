use std::fs;
use std::path::{Path, PathBuf};

use crate::io::file_io::atomic_write;
use crate::model::config::Settings;

/// Error type for settings I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse settings: {0}")]
    ParseError(#[from] toml_edit::TomlError),
}

/// Get the settings file path, respecting XDG_CONFIG_HOME
pub fn settings_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".config"));
    config_dir.join("sorty").join("settings.toml")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read settings from a specific path.
/// If the file doesn't exist, returns defaults.
/// If the file is corrupted, backs it up as .bak and returns defaults.
pub fn read_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }

    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str::<Settings>(&content) {
            Ok(settings) => settings,
            Err(e) => {
                let bak = path.with_extension("toml.bak");
                let _ = fs::copy(path, &bak);
                eprintln!(
                    "warning: could not parse {} (backed up as {}): {}",
                    path.display(),
                    bak.display(),
                    e
                );
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    }
}

/// Read the settings file as an editable document, preserving comments and
/// layout. A missing file yields an empty document.
pub fn read_settings_document(path: &Path) -> Result<toml_edit::DocumentMut, ConfigError> {
    if !path.exists() {
        return Ok(toml_edit::DocumentMut::new());
    }
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(text.parse()?)
}

/// Write the settings document back to disk, creating parent directories
pub fn write_settings_document(
    path: &Path,
    doc: &toml_edit::DocumentMut,
) -> Result<(), ConfigError> {
    let write_err = |e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    atomic_write(path, doc.to_string().as_bytes()).map_err(write_err)
}

/// Set `commands_enabled.<id>` in the settings document
pub fn set_command_enabled(doc: &mut toml_edit::DocumentMut, command_id: &str, enabled: bool) {
    if !doc.contains_key("commands_enabled") {
        doc["commands_enabled"] = toml_edit::Item::Table(toml_edit::Table::new());
    }
    doc["commands_enabled"][command_id] = toml_edit::value(enabled);
}

/// Enable or disable a command in the settings file at `path`
pub fn update_command_enabled(
    path: &Path,
    command_id: &str,
    enabled: bool,
) -> Result<(), ConfigError> {
    let mut doc = read_settings_document(path)?;
    set_command_enabled(&mut doc, command_id, enabled);
    write_settings_document(path, &doc)
}
