use crate::app::AppContext;
use crate::cli::AppendArgs;
use crate::errors::CliError;
use crate::helpers::{read_note_text, resolve_note_index};
use crate::ui::{print, receipt};

use super::password_for;

pub fn handle_append(ctx: &AppContext, args: &AppendArgs) -> anyhow::Result<()> {
    let mut vault = ctx.open_vault()?;
    let index = resolve_note_index(args.number, vault.len())?;
    let password = password_for(&vault, index, args.number)?;
    // Fail on a bad password before asking for text.
    vault.get(index)?.check_password(password.as_deref())?;

    let text = read_note_text(args.text.clone(), None)?;
    if text.trim().is_empty() {
        return Err(CliError::invalid_input("Nothing to append").into());
    }

    vault.append(index, &text, password.as_deref())?;
    vault.close()?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false)?;
        let number = args.number.to_string();
        print(
            &ui_ctx,
            &receipt(&ui_ctx, "Text appended", &[("Number", number.as_str())]),
        );
    }
    Ok(())
}
