use super::{format_number, CommandContext};
use crate::classifications::{
    indoor, old_field, old_indoor, old_outdoor, outdoor, Category, ClassificationResult,
    Discipline,
};
use crate::cli::ClassifyArgs;
use crate::formatting::{format_classification, format_thresholds};
use anyhow::Result;

/// Reject categories the discipline would otherwise coax
fn validate(discipline: Discipline, category: Category) -> crate::errors::Result<Category> {
    match discipline {
        Discipline::Outdoor => outdoor::validate_outdoor_group(category),
        Discipline::Indoor => indoor::validate_indoor_group(category),
        Discipline::OldOutdoor => old_outdoor::validate_old_outdoor_group(category),
        Discipline::OldIndoor => old_indoor::validate_old_indoor_group(category),
        Discipline::OldField => old_field::validate_old_field_group(category),
    }
}

fn thresholds(
    discipline: Discipline,
    codename: &str,
    category: Category,
) -> crate::errors::Result<(&'static [&'static str], Vec<i32>)> {
    Ok(match discipline {
        Discipline::Outdoor => (
            &outdoor::TIERS[..],
            outdoor::agb_outdoor_classification_scores(codename, category)?,
        ),
        Discipline::Indoor => (
            &indoor::TIERS[..],
            indoor::agb_indoor_classification_scores(codename, category)?,
        ),
        Discipline::OldOutdoor => (
            old_outdoor::old_outdoor_tiers(category),
            old_outdoor::agb_old_outdoor_classification_scores(codename, category)?,
        ),
        Discipline::OldIndoor => (
            &old_indoor::TIERS[..],
            old_indoor::agb_old_indoor_classification_scores(codename, category)?,
        ),
        Discipline::OldField => (
            &old_field::TIERS[..],
            old_field::agb_old_field_classification_scores(codename, category)?,
        ),
    })
}

fn classify(
    discipline: Discipline,
    score: f64,
    codename: &str,
    category: Category,
) -> crate::errors::Result<ClassificationResult> {
    match discipline {
        Discipline::Outdoor => {
            outdoor::calculate_agb_outdoor_classification(score, codename, category)
        }
        Discipline::Indoor => {
            indoor::calculate_agb_indoor_classification(score, codename, category)
        }
        Discipline::OldOutdoor => {
            old_outdoor::calculate_agb_old_outdoor_classification(score, codename, category)
        }
        Discipline::OldIndoor => {
            old_indoor::calculate_agb_old_indoor_classification(score, codename, category)
        }
        Discipline::OldField => {
            old_field::calculate_agb_old_field_classification(score, codename, category)
        }
    }
}

pub fn run_classify(ctx: &CommandContext, args: &ClassifyArgs) -> Result<String> {
    let category = Category::parse(&args.bowstyle, &args.gender, &args.age)?;
    if args.strict {
        validate(args.discipline, category)?;
    }

    let heading = ctx.formatter.header(&format!(
        "{} {} classification on {}",
        category, args.discipline, args.round
    ));
    match args.score {
        Some(score) => {
            let result = classify(args.discipline, score, &args.round, category)?;
            Ok(format!(
                "{}\n{}: {}",
                heading,
                format_number(score),
                format_classification(ctx.formatter.as_ref(), result)
            ))
        }
        None => {
            let (tiers, scores) = thresholds(args.discipline, &args.round, category)?;
            Ok(format!(
                "{}\n{}",
                heading,
                format_thresholds(ctx.formatter.as_ref(), tiers, &scores)
            ))
        }
    }
}
