use serde_json::json;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::ui::{
    blank_line, format_datetime, header, hint, print, simple_table, truncate, Column, OutputMode,
};

const TITLE_MAX: usize = 60;

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let vault = ctx.open_vault()?;
    let notes = vault.list();
    let ui_ctx = ctx.ui_context(args.json)?;

    if ui_ctx.mode.is_json() {
        let output: Vec<_> = notes
            .iter()
            .map(|note| {
                json!({
                    "number": note.display_index(),
                    "title": note.title,
                    "protected": note.is_protected,
                    "updated_at": note.updated_at.to_rfc3339(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if notes.is_empty() {
        if !ctx.quiet() {
            match ui_ctx.mode {
                OutputMode::Pretty => {
                    print(&ui_ctx, &header(&ui_ctx, "list", None));
                    blank_line(&ui_ctx);
                    print(
                        &ui_ctx,
                        &hint(&ui_ctx, "No notes yet. Create one with `caldras new <title>`."),
                    );
                }
                OutputMode::Plain | OutputMode::Json => {
                    println!("count=0");
                }
            }
        }
        return Ok(());
    }

    let pretty = ui_ctx.mode.is_pretty();
    let lock = if ui_ctx.unicode { "\u{1F512}" } else { "locked" };
    let rows: Vec<Vec<String>> = notes
        .iter()
        .map(|note| {
            let marker = match (note.is_protected, pretty) {
                (true, true) => lock.to_string(),
                (true, false) => "protected".to_string(),
                (false, true) => String::new(),
                (false, false) => "plain".to_string(),
            };
            vec![
                note.display_index().to_string(),
                truncate(&note.title, TITLE_MAX),
                marker,
                format_datetime(&note.updated_at, pretty),
            ]
        })
        .collect();

    let columns = [
        Column::new("#"),
        Column::new("Title"),
        Column::new(""),
        Column::new("Updated"),
    ];

    if pretty && !ctx.quiet() {
        let count = format!("{} notes", notes.len());
        print(&ui_ctx, &header(&ui_ctx, "list", Some(&count)));
        blank_line(&ui_ctx);
    }
    print(&ui_ctx, &simple_table(&ui_ctx, &columns, &rows));
    if pretty && !ctx.quiet() {
        blank_line(&ui_ctx);
        print(&ui_ctx, &hint(&ui_ctx, "caldras show <n>"));
    }
    Ok(())
}
