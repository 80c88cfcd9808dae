use super::model::MealPlan;

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Plain-text view of a plan: the meal schedule, then the grocery list with totals.
pub fn render_meal_plan(plan: &MealPlan) -> String {
    let mut lines: Vec<String> = vec!["Meal Schedule".to_string()];

    for meal in &plan.meals {
        lines.push(String::new());
        lines.push(format!(
            "{} ({})",
            capitalize(meal.meal_type.as_str()),
            meal.date.format("%Y-%m-%d")
        ));
        lines.push(format!("  {}", meal.name));
        lines.push(format!(
            "  {} min | {} cal",
            meal.total_time(),
            meal.estimated_calories
        ));
        if !meal.ingredients.is_empty() {
            lines.push("  Ingredients:".to_string());
            lines.extend(meal.ingredients.iter().map(|ingredient| {
                format!(
                    "    {} ({} • ${:.2})",
                    ingredient.name, ingredient.quantity, ingredient.estimated_cost
                )
            }));
        }
        if !meal.instructions.is_empty() {
            lines.push("  Instructions:".to_string());
            lines.extend(
                meal.instructions
                    .iter()
                    .enumerate()
                    .map(|(i, step)| format!("    {}. {}", i + 1, step)),
            );
        }
    }

    lines.push(String::new());
    lines.push("Grocery List".to_string());
    for store in &plan.grocery_list {
        lines.push(String::new());
        lines.push(store.store.clone());
        lines.extend(store.items.iter().map(|item| {
            format!(
                "  {} ({} • ${:.2})",
                item.name, item.quantity, item.estimated_cost
            )
        }));
        lines.push(format!("  Store Total: ${:.2}", store.total_cost));
    }
    lines.push(String::new());
    lines.push(format!("Total Cost: ${:.2}", plan.total_cost));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
