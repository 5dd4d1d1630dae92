use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use caldras_core::VERSION;

/// Caldras - password-protectable notes with markdown rendering
#[derive(Parser)]
#[command(name = "caldras")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the vault file
    #[arg(long, global = true, env = "CALDRAS_VAULT")]
    pub vault: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, env = "CALDRAS_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII glyphs instead of Unicode
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `new` command
#[derive(Args)]
pub struct NewArgs {
    /// Note title
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Note body (overrides stdin/interactive entry)
    #[arg(long)]
    pub body: Option<String>,

    /// Protect the note with a password
    #[arg(long)]
    pub protect: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Note number (as shown by `list`)
    #[arg(value_name = "N")]
    pub number: usize,

    /// Render the body as markdown
    #[arg(short, long, conflicts_with = "json")]
    pub markdown: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Note number (as shown by `list`)
    #[arg(value_name = "N")]
    pub number: usize,

    /// New body (overrides stdin/editor)
    #[arg(long)]
    pub body: Option<String>,
}

/// Arguments for the `append` command
#[derive(Args)]
pub struct AppendArgs {
    /// Note number (as shown by `list`)
    #[arg(value_name = "N")]
    pub number: usize,

    /// Text to append (overrides stdin/interactive entry)
    #[arg(long)]
    pub text: Option<String>,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Note number (as shown by `list`)
    #[arg(value_name = "N")]
    pub number: usize,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `passwd` command
#[derive(Args)]
pub struct PasswdArgs {
    /// Note number (as shown by `list`)
    #[arg(value_name = "N")]
    pub number: usize,

    /// Remove protection instead of setting a new password
    #[arg(long)]
    pub remove: bool,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Keyword (case-insensitive)
    #[arg(value_name = "KEYWORD")]
    pub keyword: String,

    /// Also search the body of this protected note (repeatable)
    #[arg(long, value_name = "N")]
    pub unlock: Vec<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `preview` command
#[derive(Args)]
pub struct PreviewArgs {
    /// Markdown file to render (stdin when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<String>,

    /// Output styled runs as JSON
    #[arg(long)]
    pub json: bool,
}

/// Theme actions
#[derive(Subcommand, Clone)]
pub enum ThemeAction {
    /// Show the active theme
    Show,
    /// Switch between alien-dark and alien-light
    Toggle,
    /// Set the theme by name
    Set {
        /// alien-dark or alien-light
        #[arg(value_name = "NAME")]
        name: String,
    },
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new note
    New(NewArgs),

    /// List notes
    List(ListArgs),

    /// Show a note as plain text or rendered markdown
    Show(ShowArgs),

    /// Replace a note's body
    Edit(EditArgs),

    /// Append text to a note
    Append(AppendArgs),

    /// Delete a note
    Delete(DeleteArgs),

    /// Set, change or remove a note's password
    Passwd(PasswdArgs),

    /// Search note titles and bodies
    Search(SearchArgs),

    /// Render markdown from a file or stdin
    Preview(PreviewArgs),

    /// Show or change the display theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },

    /// Check that the vault file loads
    Check,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
