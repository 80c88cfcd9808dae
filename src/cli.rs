use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::meal_plan::{CookingStyle, MealPlanRequest, MAX_DURATION_DAYS};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a saved meal-plan completion from a text file
    Parse(ParseArgs),
    /// Ask the text-generation service for a new meal plan
    Generate(GenerateArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Path to the completion text file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Plan length in days
    #[arg(
        short,
        long,
        default_value_t = 7,
        value_parser = clap::value_parser!(u32).range(1..=MAX_DURATION_DAYS as i64)
    )]
    pub duration: u32,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Seed for the filler values, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Total budget in dollars
    #[arg(short, long)]
    pub budget: f64,

    #[arg(long, default_value_t = 3)]
    pub meals_per_day: u32,

    /// Dietary preference tags, comma separated or repeated
    #[arg(long = "dietary", value_delimiter = ',')]
    pub dietary_preferences: Vec<String>,

    /// Health goal tags, comma separated or repeated
    #[arg(long = "health-goal", value_delimiter = ',')]
    pub health_goals: Vec<String>,

    #[arg(long, value_enum, default_value_t = CookingStyle::Mixed)]
    pub cooking_style: CookingStyle,

    #[arg(short, long, default_value = "")]
    pub location: String,

    /// Plan length in days
    #[arg(
        short,
        long,
        default_value_t = 7,
        value_parser = clap::value_parser!(u32).range(1..=MAX_DURATION_DAYS as i64)
    )]
    pub duration: u32,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

fn clean_tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

impl GenerateArgs {
    pub fn to_request(&self) -> MealPlanRequest {
        MealPlanRequest {
            budget: self.budget,
            meals_per_day: self.meals_per_day,
            dietary_preferences: clean_tags(&self.dietary_preferences),
            health_goals: clean_tags(&self.health_goals),
            cooking_style: self.cooking_style,
            location: self.location.trim().to_string(),
            duration: self.duration,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

pub async fn read_completion_file(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read meal plan text from '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_args_to_request() {
        let cli = Cli::try_parse_from([
            "meal-planner",
            "generate",
            "--budget",
            "90",
            "--dietary",
            "vegan, nut-free,",
            "--health-goal",
            "energy",
            "--cooking-style",
            "meal-prep",
            "--duration",
            "14",
        ])
        .unwrap();

        let Command::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        let request = args.to_request();
        assert_eq!(request.budget, 90.0);
        assert_eq!(request.meals_per_day, 3);
        assert_eq!(request.dietary_preferences, vec!["vegan", "nut-free"]);
        assert_eq!(request.health_goals, vec!["energy"]);
        assert_eq!(request.cooking_style, CookingStyle::MealPrep);
        assert_eq!(request.duration, 14);
    }

    #[test]
    fn test_parse_args_defaults() {
        let cli = Cli::try_parse_from(["meal-planner", "parse", "--input", "plan.txt"]).unwrap();
        let Command::Parse(args) = cli.command else {
            panic!("expected parse command");
        };
        assert_eq!(args.input, PathBuf::from("plan.txt"));
        assert_eq!(args.duration, 7);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn test_duration_out_of_range_is_rejected() {
        for days in ["0", "366000"] {
            let result =
                Cli::try_parse_from(["meal-planner", "parse", "--input", "plan.txt", "-d", days]);
            assert!(result.is_err(), "duration {} should be rejected", days);
        }
        let result = Cli::try_parse_from([
            "meal-planner",
            "generate",
            "--budget",
            "50",
            "--duration",
            "400000000",
        ]);
        assert!(result.is_err());
    }
}
