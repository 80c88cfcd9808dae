use chrono::NaiveDate;
use meal_planner::cli::read_completion_file;
use meal_planner::meal_plan::cost::rescale_total_cost;
use meal_planner::meal_plan::{
    parse_meal_plan_response, FixedFiller, MealPlanParser, MealType, RandomFiller,
};

const OATMEAL_PLAN: &str = "Breakfast: Oatmeal\nIngredients:\n- Oats ($2.00)\n- Milk ($1.50)\nInstructions:\n1. Cook oats\n2. Add milk\nGrocery List:\nWhole Foods:\n- Oats ($2.00)\n- Milk ($1.50)";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 26).unwrap()
}

fn parser() -> MealPlanParser<FixedFiller> {
    MealPlanParser::with_filler(FixedFiller::default()).with_today(today())
}

#[test]
fn test_oatmeal_end_to_end() {
    let plan = parser().parse(OATMEAL_PLAN, 3);

    assert_eq!(plan.meals.len(), 1);
    let meal = &plan.meals[0];
    assert_eq!(meal.meal_type, MealType::Breakfast);
    assert_eq!(meal.name, "Oatmeal");
    assert_eq!(meal.date, today());

    let costs: Vec<f64> = meal.ingredients.iter().map(|i| i.estimated_cost).collect();
    assert_eq!(costs, vec![2.0, 1.5]);
    assert_eq!(meal.ingredients[0].name, "Oats");
    assert_eq!(meal.ingredients[1].name, "Milk");
    assert_eq!(meal.instructions, vec!["Cook oats", "Add milk"]);

    assert_eq!(plan.grocery_list.len(), 1);
    assert_eq!(plan.grocery_list[0].store, "Whole Foods");
    assert_eq!(plan.grocery_list[0].items.len(), 2);
    assert_eq!(plan.grocery_list[0].total_cost, 3.5);
    assert_eq!(plan.total_cost, 3.5);
}

#[test]
fn test_each_block_yields_one_meal_for_a_week_or_less() {
    let text = "Breakfast: Eggs\nLunch: Wrap\nDinner: Curry\nSnack: Apple";
    for duration in [1, 5, 7] {
        let plan = parser().parse(text, duration);
        assert_eq!(plan.meals.len(), 4, "duration {}", duration);
        assert!(plan.meals.iter().all(|m| m.date == today()));
    }
}

#[test]
fn test_long_plans_copy_each_meal_per_week() {
    let text = "Lunch: Burrito bowl\nIngredients:\n- Rice ($1.00)\nInstructions:\n- Cook rice\nDinner: Pho";
    let plan = parser().parse(text, 30);

    // ceil(30 / 7) == 5
    assert_eq!(plan.meals.len(), 10);
    let lunches: Vec<_> = plan
        .meals
        .iter()
        .filter(|m| m.meal_type == MealType::Lunch)
        .collect();
    assert_eq!(lunches.len(), 5);
    for (week, meal) in lunches.iter().enumerate() {
        let expected = today() + chrono::Duration::days(7 * week as i64);
        assert_eq!(meal.date, expected);
        assert_eq!(meal.name, lunches[0].name);
        assert_eq!(meal.ingredients, lunches[0].ingredients);
        assert_eq!(meal.instructions, lunches[0].instructions);
    }
}

#[test]
fn test_instruction_markers_are_stripped_in_order() {
    let text = "Dinner: Stir fry\nInstructions:\n1. Chop vegetables\n- Heat the wok\n2. Stir fry everything\n• Serve";
    let plan = parser().parse(text, 1);
    assert_eq!(
        plan.meals[0].instructions,
        vec![
            "Chop vegetables",
            "Heat the wok",
            "Stir fry everything",
            "Serve"
        ]
    );
}

#[test]
fn test_grocery_total_sums_all_stores() {
    let text = "Grocery List:\nAldi:\n- Beans ($1.10)\n- Rice ($2.20)\nKroger:\n- Tofu ($3.30)\nFarmers Market:\n- Kale ($4.40)";
    let plan = parser().parse(text, 7);
    let store_sum: f64 = plan.grocery_list.iter().map(|s| s.total_cost).sum();
    let item_sum: f64 = plan
        .grocery_list
        .iter()
        .flat_map(|s| s.items.iter())
        .map(|i| i.estimated_cost)
        .sum();
    assert!((plan.total_cost - 11.0).abs() < 1e-9);
    assert!((store_sum - item_sum).abs() < 1e-9);
    assert!((plan.total_cost - item_sum).abs() < 1e-9);
}

#[test]
fn test_rescaling_for_long_durations() {
    let text = "Grocery List:\nAldi:\n- Beans ($10.00)\n- Rice ($20.00)";
    let fortnight = parser().parse(text, 14);
    assert_eq!(fortnight.total_cost, 30.0);
    assert_eq!(fortnight.total_cost, rescale_total_cost(30.0, 14));

    let ten_days = parser().parse(text, 10);
    assert_eq!(ten_days.total_cost, (30.0 / 2.0) * 2.0);
}

#[test]
fn test_garbage_lines_do_not_disturb_neighbours() {
    let clean = parser().parse(OATMEAL_PLAN, 3);
    let noisy_text = "Here is your plan!\n\nBreakfast: Oatmeal\nIngredients:\n- Oats ($2.00)\n- Milk ($1.50)\nInstructions:\nEnjoy this hearty start\n1. Cook oats\n~~~~\n2. Add milk\nGrocery List:\nWhole Foods:\n- Oats ($2.00)\n- Milk ($1.50)";
    let noisy = parser().parse(noisy_text, 3);

    assert_eq!(noisy.meals.len(), clean.meals.len());
    assert_eq!(noisy.meals[0].instructions, clean.meals[0].instructions);
    assert_eq!(noisy.meals[0].ingredients, clean.meals[0].ingredients);
    assert_eq!(noisy.grocery_list, clean.grocery_list);
    assert_eq!(noisy.total_cost, clean.total_cost);
}

#[test]
fn test_missing_prices_fall_back_to_random_range() {
    let text = "Lunch: Salad\nIngredients:\n- Spinach\n- Feta\nGrocery List:\nCostco:\n- Spinach\n- Feta";
    let mut parser = MealPlanParser::with_filler(RandomFiller::seeded(99));
    let plan = parser.parse(text, 7);

    let costs = plan.meals[0]
        .ingredients
        .iter()
        .map(|i| i.estimated_cost)
        .chain(plan.grocery_list[0].items.iter().map(|i| i.estimated_cost));
    for cost in costs {
        assert!((1.0..6.0).contains(&cost), "cost {} outside [1, 6)", cost);
    }
    let calories = plan.meals[0].estimated_calories;
    assert!((200..600).contains(&calories));
}

#[test]
fn test_default_parser_dates_from_today() {
    let plan = parse_meal_plan_response("Dinner: Pizza", 1);
    assert_eq!(plan.meals.len(), 1);
    assert_eq!(plan.meals[0].date, chrono::Utc::now().date_naive());
}

#[test]
fn test_json_shape_matches_display_contract() {
    let plan = parser().parse(OATMEAL_PLAN, 3);
    let value = serde_json::to_value(&plan).unwrap();
    assert_eq!(value["meals"][0]["mealType"], "breakfast");
    assert_eq!(value["meals"][0]["date"], "2024-02-26");
    assert_eq!(value["meals"][0]["ingredients"][0]["estimatedCost"], 2.0);
    assert_eq!(value["meals"][0]["ingredients"][0]["store"], "Local Store");
    assert_eq!(value["groceryList"][0]["totalCost"], 3.5);
    assert_eq!(value["totalCost"], 3.5);
}

#[tokio::test]
async fn test_read_completion_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.txt");
    std::fs::write(&path, OATMEAL_PLAN).unwrap();

    let text = read_completion_file(&path).await.unwrap();
    let plan = parser().parse(&text, 3);
    assert_eq!(plan.meals[0].name, "Oatmeal");

    let missing = read_completion_file(&dir.path().join("absent.txt")).await;
    assert!(missing.is_err());
}
