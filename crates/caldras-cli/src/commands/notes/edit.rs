use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::helpers::{read_note_text, resolve_note_index};
use crate::ui::{print, receipt};

use super::password_for;

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let mut vault = ctx.open_vault()?;
    let index = resolve_note_index(args.number, vault.len())?;
    let password = password_for(&vault, index, args.number)?;
    let current = vault.read(index, password.as_deref())?;

    let body = read_note_text(args.body.clone(), Some(&current))?;
    if body == current {
        tracing::debug!(number = args.number, "body unchanged; nothing written");
    } else {
        vault.update(index, &body, password.as_deref())?;
    }
    vault.close()?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false)?;
        let number = args.number.to_string();
        print(
            &ui_ctx,
            &receipt(&ui_ctx, "Note updated", &[("Number", number.as_str())]),
        );
    }
    Ok(())
}
