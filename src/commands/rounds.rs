use super::CommandContext;
use crate::formatting::format_catalogue;

pub fn run_rounds(ctx: &CommandContext, filter: Option<&str>) -> String {
    format_catalogue(&ctx.catalogue, filter)
}
