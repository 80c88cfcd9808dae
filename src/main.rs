use anyhow::{Context, Result};
use meal_planner::cli::{
    parse_args, read_completion_file, Command, GenerateArgs, OutputFormat, ParseArgs,
};
use meal_planner::config::GenerationConfig;
use meal_planner::meal_plan::{
    generate_meal_plan, render_meal_plan, validate_duration, MealPlan, MealPlanError,
    MealPlanParser, RandomFiller,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("meal_planner=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_plan(plan: &MealPlan, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_meal_plan(plan)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(plan).context("Failed to serialize meal plan")?;
            println!("{}", json);
        }
    }
    Ok(())
}

async fn run_parse(args: ParseArgs) -> Result<()> {
    validate_duration(args.duration)?;
    let text = read_completion_file(&args.input).await?;
    let filler = match args.seed {
        Some(seed) => RandomFiller::seeded(seed),
        None => RandomFiller::from_entropy(),
    };
    let plan = MealPlanParser::with_filler(filler).parse(&text, args.duration);
    print_plan(&plan, args.format)
}

async fn run_generate(args: GenerateArgs) -> Result<()> {
    let config = GenerationConfig::from_env()?;
    let request = args.to_request();
    match generate_meal_plan(&request, &config).await {
        Ok(plan) => print_plan(&plan, args.format),
        Err(e @ MealPlanError::InvalidRequest(_)) => Err(e.into()),
        Err(e) => {
            error!(error = ?e, "could not generate meal plan");
            Err(anyhow::anyhow!("Failed to generate meal plan. Please try again."))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_logging();

    let cli = parse_args();
    match cli.command {
        Command::Parse(args) => run_parse(args).await,
        Command::Generate(args) => run_generate(args).await,
    }
}
