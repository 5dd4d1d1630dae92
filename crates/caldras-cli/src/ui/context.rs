//! How `caldras` should draw its output on the current stdout.
//!
//! [`Terminal`] captures what the process can observe about stdout. A
//! [`UiContext`] combines that with the command's flags and the `[ui]` config
//! section; it is built through `AppContext::ui_context`.

use std::io::IsTerminal;

/// Output shape for a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `--json`: one JSON document, nothing else on stdout.
    Json,
    /// `key=value` lines and tab-separated rows for scripts and pipes.
    #[default]
    Plain,
    /// Headers, tables, badges and painted markdown for a person at a terminal.
    Pretty,
}

impl OutputMode {
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

/// Facts about stdout and the environment, read once per command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminal {
    pub stdout_is_tty: bool,
    /// `TERM=dumb`
    pub dumb: bool,
    /// `NO_COLOR` is set
    pub no_color_env: bool,
    pub columns: Option<usize>,
}

impl Terminal {
    pub fn detect() -> Self {
        Self {
            stdout_is_tty: std::io::stdout().is_terminal(),
            dumb: std::env::var("TERM").is_ok_and(|term| term == "dumb"),
            no_color_env: std::env::var_os("NO_COLOR").is_some(),
            columns: columns_from_env().or_else(stdout_columns),
        }
    }
}

/// Resolved drawing decisions for one command.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub mode: OutputMode,
    /// ANSI colour, including truecolor theme attributes for painted notes.
    pub color: bool,
    /// Unicode glyphs for badges, bullets and rules; `--ascii` or
    /// `ui.unicode = false` turn them off.
    pub unicode: bool,
    pub width: usize,
}

impl UiContext {
    const FALLBACK_WIDTH: usize = 80;

    pub fn new(json: bool, no_color: bool, unicode: bool, terminal: &Terminal) -> Self {
        let mode = if json {
            OutputMode::Json
        } else if terminal.stdout_is_tty && !terminal.dumb {
            OutputMode::Pretty
        } else {
            OutputMode::Plain
        };

        Self {
            mode,
            color: mode.is_pretty() && !no_color && !terminal.no_color_env,
            unicode,
            width: terminal.columns.unwrap_or(Self::FALLBACK_WIDTH),
        }
    }
}

fn columns_from_env() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()?
        .parse::<usize>()
        .ok()
        .filter(|&cols| cols > 0)
}

#[cfg(unix)]
fn stdout_columns() -> Option<usize> {
    let mut size = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    // SAFETY: TIOCGWINSZ writes a winsize into the struct we own.
    let size_ptr: *mut libc::winsize = &mut size;
    let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, size_ptr) };
    (rc == 0 && size.ws_col > 0).then_some(size.ws_col as usize)
}

#[cfg(not(unix))]
fn stdout_columns() -> Option<usize> {
    None
}
