//! Password prompts, confirmations and note text entry.

use std::io::{self, BufRead, IsTerminal, Read};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use dialoguer::{Confirm, Password};

use crate::constants::{END_OF_INPUT, NEW_PASSWORD_ENV, PASSWORD_ENV};
use crate::errors::CliError;

fn interactive() -> bool {
    io::stdin().is_terminal()
}

/// Password for a protected note, from CALDRAS_PASSWORD or a prompt.
pub fn prompt_note_password(number: usize) -> anyhow::Result<String> {
    if let Ok(value) = std::env::var(PASSWORD_ENV) {
        if !value.is_empty() {
            return Ok(value);
        }
    }
    if !interactive() {
        return Err(CliError::auth_failed_with_hint(
            format!("Note #{} is password protected", number),
            format!("Hint: Set {} or run in a terminal.", PASSWORD_ENV),
        )
        .into());
    }
    Password::new()
        .with_prompt(format!("Password for note #{}", number))
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// New note password, from CALDRAS_NEW_PASSWORD or a confirmed prompt.
///
/// With `allow_empty`, an empty answer (or an empty variable) means "no
/// password" and yields `None`.
pub fn prompt_new_password(allow_empty: bool) -> anyhow::Result<Option<String>> {
    let password = match std::env::var(NEW_PASSWORD_ENV) {
        Ok(value) => value,
        Err(_) if interactive() => Password::new()
            .with_prompt("New password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .allow_empty_password(allow_empty)
            .interact()
            .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))?,
        Err(_) => {
            return Err(CliError::invalid_input(format!(
                "No new password provided and no TTY available. Set {}.",
                NEW_PASSWORD_ENV
            ))
            .into())
        }
    };
    if password.is_empty() {
        if allow_empty {
            return Ok(None);
        }
        return Err(CliError::invalid_input("Password cannot be empty").into());
    }
    Ok(Some(password))
}

/// Yes/no confirmation. Without a terminal, `assume_yes` must be set.
pub fn confirm(prompt: &str, assume_yes: bool) -> anyhow::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    if !interactive() {
        return Err(
            CliError::invalid_input("Refusing to continue without a terminal; pass --yes").into(),
        );
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
}

/// Read note text from a flag, piped stdin, `$EDITOR`, or line entry.
///
/// `initial` seeds the editor buffer when revising an existing body.
pub fn read_note_text(flag: Option<String>, initial: Option<&str>) -> anyhow::Result<String> {
    if let Some(value) = flag {
        return Ok(value);
    }

    if !interactive() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        return Ok(buffer.trim_end().to_string());
    }

    if let Ok(editor) = std::env::var("EDITOR") {
        if !editor.trim().is_empty() {
            return read_text_from_editor(&editor, initial.unwrap_or(""));
        }
    }

    read_text_from_lines()
}

/// Open `$EDITOR` on a temp file seeded with `initial`.
fn read_text_from_editor(editor: &str, initial: &str) -> anyhow::Result<String> {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| anyhow::anyhow!("System time error: {}", e))?
        .as_nanos();
    let filename = format!("caldras_note_{}_{}.md", std::process::id(), nanos);
    let path = std::env::temp_dir().join(filename);

    std::fs::write(&path, initial)
        .map_err(|e| anyhow::anyhow!("Failed to create temp file: {}", e))?;

    let status = Command::new(editor)
        .arg(&path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to launch editor: {}", e))?;
    if !status.success() {
        let _ = std::fs::remove_file(&path);
        return Err(anyhow::anyhow!("Editor exited with failure"));
    }

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read temp file: {}", e))?;
    let _ = std::fs::remove_file(&path);

    Ok(contents.trim_end().to_string())
}

/// Read lines from the terminal until a line reading `EOF`.
fn read_text_from_lines() -> anyhow::Result<String> {
    eprintln!("Enter text; finish with a line containing only {}", END_OF_INPUT);
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))?;
        if line.trim_end() == END_OF_INPUT {
            break;
        }
        lines.push(line);
    }
    Ok(collect_lines(&lines))
}

fn collect_lines(lines: &[String]) -> String {
    lines.join("\n").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins() {
        let text = read_note_text(Some("from flag".to_string()), Some("old")).unwrap();
        assert_eq!(text, "from flag");
    }

    #[test]
    fn test_flag_may_be_empty() {
        assert_eq!(read_note_text(Some(String::new()), None).unwrap(), "");
    }

    #[test]
    fn test_collect_lines_trims_trailing_blank_lines() {
        let lines = vec!["one".to_string(), "two".to_string(), String::new()];
        assert_eq!(collect_lines(&lines), "one\ntwo");
    }

    #[test]
    fn test_confirm_assume_yes() {
        assert!(confirm("Delete?", true).unwrap());
    }
}
