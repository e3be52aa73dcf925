use super::{format_number, CommandContext};
use crate::cli::HandicapArgs;
use anyhow::Result;

pub fn run_handicap(ctx: &CommandContext, args: &HandicapArgs) -> Result<String> {
    let round = ctx.round(&args.round)?;
    let scheme = ctx.scheme(args.scheme);
    let int_prec = args.int_prec || ctx.config.handicap.int_prec;

    let handicap = scheme.handicap_from_score(args.score, round, int_prec, args.arrow_diameter)?;
    Ok(format!(
        "{} handicap for {} on a {}: {}",
        scheme.name,
        format_number(args.score),
        round.name(),
        ctx.formatter.bold(&format_number(handicap))
    ))
}
