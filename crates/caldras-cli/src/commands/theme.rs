use std::str::FromStr;

use owo_colors::OwoColorize;

use caldras_core::render::ThemeName;
use caldras_core::{StyleTag, Theme};

use crate::app::AppContext;
use crate::cli::ThemeAction;
use crate::config::load_or_default;
use crate::ui::theme::attributes_style;
use crate::ui::{header, kv, print, receipt, UiContext};

pub fn handle_theme(ctx: &AppContext, action: Option<&ThemeAction>) -> anyhow::Result<()> {
    match action {
        None | Some(ThemeAction::Show) => show(ctx),
        Some(ThemeAction::Toggle) => {
            let current = ctx.config()?.ui.theme;
            save(ctx, current.toggled())
        }
        Some(ThemeAction::Set { name }) => {
            let name = ThemeName::from_str(name)?;
            save(ctx, name)
        }
    }
}

fn show(ctx: &AppContext) -> anyhow::Result<()> {
    let theme = ctx.theme()?;
    let ui_ctx = ctx.ui_context(false)?;

    if !ui_ctx.mode.is_pretty() {
        println!("theme={}", theme.name());
        return Ok(());
    }

    print(&ui_ctx, &header(&ui_ctx, "theme", Some(theme.name().as_str())));
    for line in swatches(&ui_ctx, &theme) {
        print(&ui_ctx, &line);
    }
    Ok(())
}

/// One sample line per style tag, painted when colour is on.
fn swatches(ui_ctx: &UiContext, theme: &Theme) -> Vec<String> {
    StyleTag::ALL
        .iter()
        .map(|&tag| {
            let attrs = theme.tag_attributes(tag);
            let sample = if ui_ctx.color {
                "sample text".style(attributes_style(attrs)).to_string()
            } else {
                "sample text".to_string()
            };
            let colour = attrs
                .foreground
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string());
            format!("  {}  {}", kv(ui_ctx, tag.name(), &colour), sample)
        })
        .collect()
}

fn save(ctx: &AppContext, name: ThemeName) -> anyhow::Result<()> {
    let path = ctx.config_path()?;
    let mut config = load_or_default(&path)?;
    config.ui.theme = name;
    ctx.save_config(&config)?;
    tracing::info!(theme = %name, "theme saved");

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false)?;
        print(
            &ui_ctx,
            &receipt(&ui_ctx, "Theme saved", &[("Theme", name.as_str())]),
        );
    }
    Ok(())
}
