use crate::app::AppContext;
use crate::cli::NewArgs;
use crate::helpers::{prompt_new_password, read_note_text};
use crate::ui::{print, receipt};

pub fn handle_new(ctx: &AppContext, args: &NewArgs) -> anyhow::Result<()> {
    let password = if args.protect {
        prompt_new_password(false)?
    } else {
        None
    };
    let body = read_note_text(args.body.clone(), None)?;

    let mut vault = ctx.open_vault()?;
    let index = vault.create(&args.title, &body, password.as_deref())?;
    let title = vault.get(index)?.title().to_string();
    vault.close()?;

    tracing::info!(number = index + 1, protected = password.is_some(), "note created");

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false)?;
        let number = (index + 1).to_string();
        let protected = if password.is_some() { "yes" } else { "no" };
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Note created",
                &[
                    ("Number", number.as_str()),
                    ("Title", title.as_str()),
                    ("Protected", protected),
                ],
            ),
        );
    }
    Ok(())
}
