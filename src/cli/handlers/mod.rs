use std::path::{Path, PathBuf};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::{config_io, file_io};
use crate::model::command::{SORT_COMMANDS, SortCommand, find_command};
use crate::ops::document_ops::sort_text;

/// Error type for CLI command handling
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (try `sorty commands`)")]
    UnknownCommand(String),
    #[error("command '{0}' is disabled (enable it with `sorty enable {0}`)")]
    Disabled(String),
    #[error("{0}")]
    BadSelection(String),
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let settings_path = cli.config.unwrap_or_else(config_io::settings_path);
    log::info!("using settings at {}", settings_path.display());

    match cli.command {
        Commands::Sort(args) => cmd_sort(args, &settings_path, json),
        Commands::Commands => cmd_commands(&settings_path, json),
        Commands::Enable(args) => cmd_toggle(args, &settings_path, true),
        Commands::Disable(args) => cmd_toggle(args, &settings_path, false),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn resolve_command(id: &str) -> Result<&'static SortCommand, CommandError> {
    find_command(id).ok_or_else(|| CommandError::UnknownCommand(id.to_string()))
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_sort(
    args: SortArgs,
    settings_path: &Path,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let command = resolve_command(&args.command)?;
    let settings = config_io::read_settings_from(settings_path);
    if !settings.is_enabled(command) {
        return Err(CommandError::Disabled(command.short_id().to_string()).into());
    }

    let selections = args
        .select
        .iter()
        .map(|s| parse_selection(s).map_err(CommandError::BadSelection))
        .collect::<Result<Vec<_>, _>>()?;

    let file: Option<PathBuf> = args.file.filter(|p| p.as_os_str() != "-");
    let text = match &file {
        Some(path) => file_io::read_document(path)?,
        None => file_io::read_stdin()?,
    };

    log::info!("{} over {} selection(s)", command.id, selections.len().max(1));
    let outcome = sort_text(&text, command, &selections);

    let to_stdout = args.stdout || file.is_none();
    if let Some(path) = file.as_deref().filter(|_| !to_stdout)
        && outcome.text != text
    {
        file_io::write_document(path, &outcome.text)?;
    }

    if json {
        let report = SortReportJson {
            command: command.id.to_string(),
            file: file.as_ref().map(|p| p.display().to_string()),
            selections: outcome.selections.iter().map(selection_to_json).collect(),
            skipped: outcome.skipped,
            text: to_stdout.then(|| outcome.text.clone()),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if to_stdout {
        print!("{}", outcome.text);
        if outcome.skipped > 0 {
            eprintln!(
                "warning: {} selection(s) outside the document were skipped",
                outcome.skipped
            );
        }
    } else if let Some(path) = &file {
        println!(
            "{}",
            format_sort_summary(
                command,
                &path.display().to_string(),
                outcome.selections.len(),
                outcome.skipped
            )
        );
    }

    Ok(())
}

fn cmd_commands(settings_path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let settings = config_io::read_settings_from(settings_path);

    if json {
        let commands: Vec<CommandJson> = SORT_COMMANDS
            .iter()
            .map(|cmd| command_to_json(cmd, &settings))
            .collect();
        println!("{}", serde_json::to_string_pretty(&commands)?);
    } else {
        for cmd in &SORT_COMMANDS {
            println!("{}", format_command_line(cmd, settings.is_enabled(cmd)));
        }
    }
    Ok(())
}

fn cmd_toggle(
    args: ToggleArgs,
    settings_path: &Path,
    enabled: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let command = resolve_command(&args.id)?;
    config_io::update_command_enabled(settings_path, command.id, enabled)?;
    println!(
        "{} {}",
        if enabled { "Enabled" } else { "Disabled" },
        command.name
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_and_unknown_commands() {
        assert_eq!(resolve_command("tasks").unwrap().id, "sorty-sort-tasks");
        let err = resolve_command("shuffle").unwrap_err();
        assert_eq!(err.to_string(), "unknown command 'shuffle' (try `sorty commands`)");
    }

    #[test]
    fn disabled_error_names_the_enable_command() {
        let err = CommandError::Disabled("lines".into());
        assert_eq!(
            err.to_string(),
            "command 'lines' is disabled (enable it with `sorty enable lines`)"
        );
    }
}
