use caldras_core::LoadStatus;

use crate::app::AppContext;
use crate::constants::PREVIEW_CHARS;
use crate::ui::{badge, kv, preview, print, Badge};

pub fn handle_check(ctx: &AppContext) -> anyhow::Result<()> {
    let vault = ctx.open_vault()?;
    let ui_ctx = ctx.ui_context(false)?;
    let path = vault.path().display().to_string();

    match vault.status() {
        LoadStatus::Missing => {
            if !ctx.quiet() {
                let message = "Vault check: no vault file yet";
                print(&ui_ctx, &badge(&ui_ctx, Badge::Info, message));
                print(&ui_ctx, &kv(&ui_ctx, "Path", &path));
            }
            return Ok(());
        }
        LoadStatus::Corrupt { reason } => {
            eprintln!("Vault check: FAILED");
            eprintln!("- path: {}", path);
            eprintln!("- error: {}", reason);
            eprintln!("Hint: The next change will overwrite this file; copy it aside first.");
            return Err(anyhow::anyhow!("Vault check failed"));
        }
        LoadStatus::Loaded { notes } => {
            if ctx.quiet() {
                return Ok(());
            }
            print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, "Vault check: OK"));
            print(&ui_ctx, &kv(&ui_ctx, "Path", &path));
            print(&ui_ctx, &kv(&ui_ctx, "Notes", &notes.to_string()));
        }
    }

    for (index, note) in vault.iter().enumerate() {
        let detail = if note.is_protected() {
            "(protected)".to_string()
        } else {
            let body = vault.read(index, None)?;
            preview(&body, PREVIEW_CHARS)
        };
        print(&ui_ctx, &format!("- #{} {}: {}", index + 1, note.title(), detail));
    }
    Ok(())
}
