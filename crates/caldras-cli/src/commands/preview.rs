use std::io::{self, Read};

use serde_json::json;

use caldras_core::render;

use crate::app::AppContext;
use crate::cli::PreviewArgs;
use crate::ui::{paint_runs, print};

pub fn handle_preview(ctx: &AppContext, args: &PreviewArgs) -> anyhow::Result<()> {
    let markdown = match args.file.as_deref() {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path, e))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
            buffer
        }
    };

    let theme = ctx.theme()?;
    let runs = render(&markdown, &theme);
    let ui_ctx = ctx.ui_context(args.json)?;

    if ui_ctx.mode.is_json() {
        let output = json!({ "theme": theme.name().as_str(), "runs": runs });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print(&ui_ctx, &paint_runs(&ui_ctx, &runs, &theme));
    Ok(())
}
