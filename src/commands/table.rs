use super::CommandContext;
use crate::cli::{TableArgs, TableFormat};
use crate::handicaps::{rating_range, HandicapTable, TableOptions};
use crate::rounds::Round;
use anyhow::{Context, Result};
use std::fs;

/// Build the table described by the arguments
pub fn build_table(ctx: &CommandContext, args: &TableArgs) -> Result<HandicapTable> {
    let rounds = args
        .rounds
        .iter()
        .map(|codename| ctx.round(codename.trim()).cloned())
        .collect::<Result<Vec<Round>>>()?;
    let ratings = rating_range(args.from, args.to, args.step);

    let mut options = TableOptions::from(&ctx.config.table);
    options.clean_gaps = options.clean_gaps && !args.keep_gaps;

    let scheme = ctx.scheme(args.scheme).name;
    Ok(HandicapTable::new(scheme, &ratings, &rounds, options)?)
}

pub fn render_table(table: &HandicapTable, format: TableFormat) -> Result<String> {
    Ok(match format {
        TableFormat::Text => table.to_string(),
        TableFormat::Csv => table.to_csv()?,
        TableFormat::Json => serde_json::to_string_pretty(table)?,
    })
}

/// Render the table, writing it to `--output` when given
pub fn run_table(ctx: &CommandContext, args: &TableArgs) -> Result<String> {
    let table = build_table(ctx, args)?;
    let rendered = render_table(&table, args.format)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write table to {}", path.display()))?;
            Ok(ctx
                .formatter
                .success(&format!("Wrote table to {}", path.display())))
        }
        None => Ok(rendered),
    }
}
