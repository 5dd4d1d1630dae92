use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::helpers::{confirm, resolve_note_index};
use crate::ui::{badge, print, receipt, Badge, OutputMode};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let mut vault = ctx.open_vault()?;
    let index = resolve_note_index(args.number, vault.len())?;
    let title = vault.get(index)?.title().to_string();
    let ui_ctx = ctx.ui_context(false)?;

    let confirmed = confirm(
        &format!("Delete note #{} '{}'?", args.number, title),
        args.yes,
    )?;
    if !confirmed {
        if !ctx.quiet() {
            match ui_ctx.mode {
                OutputMode::Pretty => {
                    print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Cancelled"));
                }
                OutputMode::Plain | OutputMode::Json => {
                    println!("status=cancelled");
                }
            }
        }
        return Ok(());
    }

    vault.delete(index)?;
    vault.close()?;
    tracing::info!(number = args.number, "note deleted");

    if !ctx.quiet() {
        print(
            &ui_ctx,
            &receipt(&ui_ctx, "Note deleted", &[("Title", title.as_str())]),
        );
    }
    Ok(())
}
