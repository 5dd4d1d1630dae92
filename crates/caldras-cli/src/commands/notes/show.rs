use serde_json::json;

use caldras_core::render;

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::helpers::resolve_note_index;
use crate::ui::render::note_frame;
use crate::ui::{paint_runs, print};

use super::password_for;

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let vault = ctx.open_vault()?;
    let index = resolve_note_index(args.number, vault.len())?;
    let password = password_for(&vault, index, args.number)?;
    let body = vault.read(index, password.as_deref())?;
    let note = vault.get(index)?;

    let ui_ctx = ctx.ui_context(args.json)?;

    if ui_ctx.mode.is_json() {
        let output = json!({
            "number": args.number,
            "title": note.title(),
            "protected": note.is_protected(),
            "created_at": note.created_at().to_rfc3339(),
            "updated_at": note.updated_at().to_rfc3339(),
            "body": body,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if args.markdown {
        let theme = ctx.theme()?;
        let runs = render(&body, &theme);
        tracing::debug!(runs = runs.len(), theme = %theme.name(), "rendered note");
        let painted = paint_runs(&ui_ctx, &runs, &theme);
        print(&ui_ctx, &note_frame(&ui_ctx, note.title(), &painted));
    } else {
        print(&ui_ctx, &note_frame(&ui_ctx, note.title(), &body));
    }
    Ok(())
}
