use super::{format_number, CommandContext};
use crate::cli::ScoreArgs;
use anyhow::Result;
use std::fmt::Write as _;

pub fn run_score(ctx: &CommandContext, args: &ScoreArgs) -> Result<String> {
    let round = ctx.round(&args.round)?;
    let scheme = ctx.scheme(args.scheme);
    let rounded = !args.raw;

    let total = scheme.score_for_round(args.handicap, round, args.arrow_diameter, rounded)?;
    let mut out = format!(
        "{} handicap {} on a {}: {}",
        scheme.name,
        format_number(args.handicap),
        round.name(),
        ctx.formatter.bold(&format_number(total))
    );

    if args.per_pass {
        let passes =
            scheme.score_for_passes(args.handicap, round, args.arrow_diameter, rounded)?;
        for (i, (pass, score)) in round.passes().iter().zip(passes).enumerate() {
            let distance = pass.distance();
            write!(
                out,
                "\n  pass {}: {} arrows at {} {}s: {}",
                i + 1,
                pass.n_arrows(),
                distance.value,
                distance.unit,
                format_number(score)
            )?;
        }
    }
    Ok(out)
}
