//! Application context for the Caldras CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use caldras_core::{Theme, Vault};

use crate::cli::Cli;
use crate::config::{load_or_default, write_config, CaldrasConfig};
use crate::ui::{Terminal, UiContext};

use super::resolver::{resolve_config_path, resolve_vault_path};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<CaldrasConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&CaldrasConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path(self.cli)?;
            load_or_default(&path)
        })
    }

    pub fn config_path(&self) -> anyhow::Result<PathBuf> {
        resolve_config_path(self.cli)
    }

    /// Persist a modified config to the resolved config path.
    pub fn save_config(&self, config: &CaldrasConfig) -> anyhow::Result<()> {
        let path = self.config_path()?;
        write_config(&path, config)?;
        tracing::debug!(path = %path.display(), "config written");
        Ok(())
    }

    pub fn vault_path(&self) -> anyhow::Result<PathBuf> {
        resolve_vault_path(self.cli, self.config()?)
    }

    /// Open the vault. Missing and corrupt files both load as empty; see
    /// `Vault::status`.
    pub fn open_vault(&self) -> anyhow::Result<Vault> {
        Ok(Vault::open(self.vault_path()?))
    }

    /// Whether Unicode glyphs are in use (`--ascii` or config can disable them).
    pub fn unicode(&self) -> anyhow::Result<bool> {
        Ok(!self.cli.ascii && self.config()?.ui.unicode)
    }

    /// The configured display theme.
    pub fn theme(&self) -> anyhow::Result<Theme> {
        let config = self.config()?;
        Ok(Theme::named(config.ui.theme).with_unicode(self.unicode()?))
    }

    /// Build a UI context for a command from the terminal, the global flags
    /// and the `[ui]` config section.
    pub fn ui_context(&self, json: bool) -> anyhow::Result<UiContext> {
        Ok(UiContext::new(
            json,
            self.cli.no_color,
            self.unicode()?,
            &Terminal::detect(),
        ))
    }
}
