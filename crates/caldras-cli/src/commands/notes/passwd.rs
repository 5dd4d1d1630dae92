use crate::app::AppContext;
use crate::cli::PasswdArgs;
use crate::helpers::{prompt_new_password, resolve_note_index};
use crate::ui::{badge, print, receipt, Badge};

use super::password_for;

pub fn handle_passwd(ctx: &AppContext, args: &PasswdArgs) -> anyhow::Result<()> {
    let mut vault = ctx.open_vault()?;
    let index = resolve_note_index(args.number, vault.len())?;
    let current = password_for(&vault, index, args.number)?;
    vault.get(index)?.check_password(current.as_deref())?;

    let new = if args.remove {
        None
    } else {
        prompt_new_password(true)?
    };

    vault.set_password(index, current.as_deref(), new.as_deref())?;
    vault.close()?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false)?;
        let number = args.number.to_string();
        let title = match (current.is_some(), new.is_some()) {
            (_, false) => "Protection removed",
            (false, true) => "Password set",
            (true, true) => "Password changed",
        };
        print(&ui_ctx, &receipt(&ui_ctx, title, &[("Number", number.as_str())]));
        if current.is_some() && new.is_none() && ui_ctx.mode.is_pretty() {
            let warning = format!("Note #{} is now stored unencrypted", args.number);
            print(&ui_ctx, &badge(&ui_ctx, Badge::Warn, &warning));
        }
    }
    Ok(())
}
