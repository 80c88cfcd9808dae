pub mod cost;
pub mod error;
pub mod filler;
pub mod generator;
pub mod model;
pub mod parser;
pub mod prompt;
pub mod render;

pub use error::MealPlanError;
pub use filler::{FillerSource, FixedFiller, RandomFiller};
pub use generator::{generate_meal_plan, generate_meal_plan_with, TextGenerator};
pub use model::{
    validate_duration, CookingStyle, GroceryItem, GroceryStoreGroup, Ingredient, Meal, MealPlan,
    MealPlanRequest, MealType, MAX_DURATION_DAYS,
};
pub use parser::{parse_meal_plan_response, MealPlanParser};
pub use render::render_meal_plan;
