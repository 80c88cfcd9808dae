use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::MealPlanError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum CookingStyle {
    MealPrep,
    DailyCooking,
    Mixed,
}

impl CookingStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CookingStyle::MealPrep => "mealPrep",
            CookingStyle::DailyCooking => "dailyCooking",
            CookingStyle::Mixed => "mixed",
        }
    }
}

impl fmt::Display for CookingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Longest plan accepted, in days. Long plans copy every meal once per week.
pub const MAX_DURATION_DAYS: u32 = 366;

pub fn validate_duration(duration: u32) -> Result<(), MealPlanError> {
    if duration == 0 || duration > MAX_DURATION_DAYS {
        return Err(MealPlanError::InvalidRequest(format!(
            "duration must be between 1 and {} days, got {}",
            MAX_DURATION_DAYS, duration
        )));
    }
    Ok(())
}

/// Parameters sent to the text-generation service for one plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanRequest {
    pub budget: f64,
    pub meals_per_day: u32,
    pub dietary_preferences: Vec<String>,
    pub health_goals: Vec<String>,
    pub cooking_style: CookingStyle,
    pub location: String,
    /// Plan length in days.
    pub duration: u32,
}

impl MealPlanRequest {
    pub fn validate(&self) -> Result<(), MealPlanError> {
        if !self.budget.is_finite() || self.budget <= 0.0 {
            return Err(MealPlanError::InvalidRequest(format!(
                "budget must be a positive amount, got {}",
                self.budget
            )));
        }
        if self.meals_per_day == 0 {
            return Err(MealPlanError::InvalidRequest(
                "meals per day must be at least 1".to_string(),
            ));
        }
        validate_duration(self.duration)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    /// Matches a lowercase keyword as produced by the meal-header pattern.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "breakfast" => Some(MealType::Breakfast),
            "lunch" => Some(MealType::Lunch),
            "dinner" => Some(MealType::Dinner),
            "snack" => Some(MealType::Snack),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
    pub estimated_cost: f64,
    pub store: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub estimated_calories: u32,
    /// Minutes.
    pub estimated_prep_time: u32,
    /// Minutes.
    pub estimated_cook_time: u32,
}

impl Meal {
    pub fn total_time(&self) -> u32 {
        self.estimated_prep_time + self.estimated_cook_time
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    pub name: String,
    pub quantity: String,
    pub estimated_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryStoreGroup {
    pub store: String,
    pub items: Vec<GroceryItem>,
    pub total_cost: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub meals: Vec<Meal>,
    pub total_cost: f64,
    pub grocery_list: Vec<GroceryStoreGroup>,
}
