//! Caldras CLI - password-protectable notes with markdown rendering
//!
//! This is the command-line interface for Caldras. It provides a user-friendly
//! interface to the core vault and renderer.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod ui;

use clap::{CommandFactory, Parser};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{maintenance, misc, notes, preview, search, theme};
use crate::errors::exit_code_for;
use crate::ui::{print_error, Terminal, UiContext};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx
            .ui_context(false)
            .unwrap_or_else(|_| {
                UiContext::new(false, cli.no_color, !cli.ascii, &Terminal::detect())
            });

        let error_msg = format!("{}", e);
        let (message, hint) = split_error_hint(&error_msg);

        print_error(&ui_ctx, message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Logs go to stderr; RUST_LOG overrides the `-v` level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Split an explicit "Hint:" line off an error message, or supply a
/// contextual hint for common failures. The label itself is added by
/// `print_error`.
fn split_error_hint(error: &str) -> (&str, Option<String>) {
    if let Some(idx) = error.find("\nHint:") {
        let hint = error[idx + "\nHint:".len()..].trim();
        return (&error[..idx], Some(hint.to_string()));
    }

    let error_lower = error.to_lowercase();

    if error_lower.contains("wrong password") {
        return (
            error,
            Some("Check the note's password or set CALDRAS_PASSWORD.".to_string()),
        );
    }

    if error_lower.contains("no note at index") {
        return (
            error,
            Some("Run `caldras list` to see note numbers.".to_string()),
        );
    }

    if error_lower.contains("persistence error") {
        return (
            error,
            Some("Check that the vault path is writable (see --vault).".to_string()),
        );
    }

    (error, None)
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::New(args)) => {
            notes::handle_new(ctx, args)?;
        }
        Some(Commands::List(args)) => {
            notes::handle_list(ctx, args)?;
        }
        Some(Commands::Show(args)) => {
            notes::handle_show(ctx, args)?;
        }
        Some(Commands::Edit(args)) => {
            notes::handle_edit(ctx, args)?;
        }
        Some(Commands::Append(args)) => {
            notes::handle_append(ctx, args)?;
        }
        Some(Commands::Delete(args)) => {
            notes::handle_delete(ctx, args)?;
        }
        Some(Commands::Passwd(args)) => {
            notes::handle_passwd(ctx, args)?;
        }
        Some(Commands::Search(args)) => {
            search::handle_search(ctx, args)?;
        }
        Some(Commands::Preview(args)) => {
            preview::handle_preview(ctx, args)?;
        }
        Some(Commands::Theme { action }) => {
            theme::handle_theme(ctx, action.as_ref())?;
        }
        Some(Commands::Check) => {
            maintenance::handle_check(ctx)?;
        }
        Some(Commands::Completions { shell }) => {
            misc::handle_completions(*shell)?;
        }
        None => {
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_explicit_hint_is_split() {
        let (message, hint) = split_error_hint("No note #4\nHint: Run `caldras list`.");
        assert_eq!(message, "No note #4");
        assert_eq!(hint.as_deref(), Some("Run `caldras list`."));
    }

    #[test]
    fn test_wrong_password_gets_hint() {
        let (message, hint) = split_error_hint("Wrong password");
        assert_eq!(message, "Wrong password");
        assert!(hint.unwrap().contains("CALDRAS_PASSWORD"));
    }

    #[test]
    fn test_unknown_error_has_no_hint() {
        assert_eq!(split_error_hint("boom"), ("boom", None));
    }
}
