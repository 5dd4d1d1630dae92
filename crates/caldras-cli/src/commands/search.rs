use serde_json::json;

use caldras_core::SearchScope;

use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::helpers::{prompt_note_password, resolve_note_index};
use crate::ui::{blank_line, header, hint, print, simple_table, truncate, Column, OutputMode};

const TITLE_MAX: usize = 60;

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let vault = ctx.open_vault()?;

    let mut scope = SearchScope::new();
    for &number in &args.unlock {
        let index = resolve_note_index(number, vault.len())?;
        if vault.get(index)?.is_protected() {
            scope.insert(index, prompt_note_password(number)?);
        } else {
            tracing::debug!(number, "note is not protected; --unlock ignored");
        }
    }

    let hits = vault.search(&args.keyword, &scope);
    tracing::debug!(keyword = %args.keyword, hits = hits.len(), "search finished");

    let ui_ctx = ctx.ui_context(args.json)?;

    if ui_ctx.mode.is_json() {
        let output: Vec<_> = hits
            .iter()
            .map(|hit| json!({ "number": hit.index + 1, "title": hit.title }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let context = format!("\"{}\"", args.keyword);

    if hits.is_empty() {
        if !ctx.quiet() {
            match ui_ctx.mode {
                OutputMode::Pretty => {
                    print(&ui_ctx, &header(&ui_ctx, "search", Some(&context)));
                    blank_line(&ui_ctx);
                    let text = if vault.iter().any(|note| note.is_protected()) {
                        "No matches. Protected bodies are searched only with --unlock <n>."
                    } else {
                        "No matches. Try a different keyword."
                    };
                    print(&ui_ctx, &hint(&ui_ctx, text));
                }
                OutputMode::Plain | OutputMode::Json => {
                    println!("count=0");
                }
            }
        }
        return Ok(());
    }

    let rows: Vec<Vec<String>> = hits
        .iter()
        .map(|hit| vec![(hit.index + 1).to_string(), truncate(&hit.title, TITLE_MAX)])
        .collect();
    let columns = [Column::new("#"), Column::new("Title")];

    if ui_ctx.mode.is_pretty() && !ctx.quiet() {
        print(&ui_ctx, &header(&ui_ctx, "search", Some(&context)));
        blank_line(&ui_ctx);
    }
    print(&ui_ctx, &simple_table(&ui_ctx, &columns, &rows));
    Ok(())
}
