use super::cost::weeks_needed;
use super::model::MealPlanRequest;

pub const SYSTEM_PROMPT: &str = "You are a professional nutritionist and meal planner. Create detailed, practical meal plans that consider budget, dietary preferences, and local availability. For longer durations (>7 days), focus on creating weekly meal rotations that can be prepped in advance, with clear cost breakdowns per week and for the entire duration.";

/// Builds the user prompt asking for a plan in the layout the parser understands.
pub fn build_prompt(request: &MealPlanRequest) -> String {
    let weeks = weeks_needed(request.duration);
    let long_term = request.duration > 7;
    let mut prompt = String::new();

    prompt.push_str(&format!(
        "Create a {} meal plan for {} meals per day for {} days ({} weeks) with a budget of ${}.\n",
        request.cooking_style, request.meals_per_day, request.duration, weeks, request.budget
    ));
    if long_term {
        prompt.push_str(
            "Please create a weekly rotation of meals that can be meal prepped in advance.\n",
        );
    }
    prompt.push_str(&format!(
        "Dietary preferences: {}\n",
        request.dietary_preferences.join(", ")
    ));
    prompt.push_str(&format!("Health goals: {}\n", request.health_goals.join(", ")));
    prompt.push_str(&format!("Location: {}\n\n", request.location));

    prompt.push_str("Please format the response as follows:\n\n");
    if long_term {
        prompt.push_str("Week 1 Rotation:\n");
    }
    prompt.push_str(
        "Breakfast: [Meal Name] (can be prepped for [X] servings)\n\
         Ingredients:\n\
         - [Ingredient] ($[cost] for [X] servings)\n\
         - [Ingredient] ($[cost] for [X] servings)\n\
         Instructions:\n\
         1. [Step]\n\
         2. [Step]\n\n\
         Lunch: [Meal Name]\n\
         [... repeat format for each meal]\n\n",
    );
    prompt.push_str(if long_term {
        "Weekly Grocery List:\n"
    } else {
        "Grocery List:\n"
    });
    prompt.push_str(
        "[Store Name]:\n\
         - [Item] ($[cost] for [X] servings)\n\
         - [Item] ($[cost] for [X] servings)\n\
         [... repeat for each store]\n",
    );
    if long_term {
        prompt.push_str(&format!(
            "\nMonthly Cost Breakdown:\n\
             Weekly grocery cost: $[X]\n\
             Total monthly cost ({} days): $[X]\n",
            request.duration
        ));
    }

    prompt
}
