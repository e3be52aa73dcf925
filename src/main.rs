use anyhow::{Context, Result};
use archerymath::cli::{configure_thread_pool, init_logging, Cli, Commands};
use archerymath::commands::{self, CommandContext};
use archerymath::config::{load_config, load_config_from, ArcheryConfig};
use archerymath::formatting::ColorMode;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.verbosity);
    configure_thread_pool(cli.jobs);

    let output = match &cli.command {
        Commands::Init { force } => commands::init_config(*force)?,
        Commands::Age {
            birth_year,
            event_year,
        } => commands::age::run_age(*birth_year, *event_year),
        command => {
            let ctx = build_context(&cli)?;
            run_with_context(&ctx, command)?
        }
    };

    println!("{}", output);
    Ok(())
}

fn load_configuration(cli: &Cli) -> Result<ArcheryConfig> {
    match &cli.config {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(load_config()),
    }
}

fn color_mode(cli: &Cli, config: &ArcheryConfig) -> Result<ColorMode> {
    let mode = match &cli.color {
        Some(value) => ColorMode::parse(value).with_context(|| {
            format!("Invalid color mode '{}'. Use auto, always or never.", value)
        })?,
        None => config.output.color_mode(),
    };
    Ok(mode.with_env())
}

fn build_context(cli: &Cli) -> Result<CommandContext> {
    let config = load_configuration(cli)?;
    let color = color_mode(cli, &config)?;
    CommandContext::new(config, &cli.round_files, color)
}

fn run_with_context(ctx: &CommandContext, command: &Commands) -> Result<String> {
    match command {
        Commands::Score(args) => commands::score::run_score(ctx, args),
        Commands::Handicap(args) => commands::handicap::run_handicap(ctx, args),
        Commands::Table(args) => commands::table::run_table(ctx, args),
        Commands::Classify(args) => commands::classify::run_classify(ctx, args),
        Commands::Rounds { filter } => Ok(commands::rounds::run_rounds(ctx, filter.as_deref())),
        Commands::Init { .. } | Commands::Age { .. } => {
            anyhow::bail!("command does not need a round catalogue")
        }
    }
}
