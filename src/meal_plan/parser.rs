//! Line-oriented parser for free-text meal plans.
//!
//! The input is whatever prose the text-generation service returned: meal headers
//! (`Breakfast: Oatmeal`) followed by `Ingredients:` and `Instructions:` blocks, then a
//! `Grocery List:` with `<Store>:` headers, and optionally a `Monthly Cost Breakdown`.
//! Parsing never fails. Lines that fit no pattern are dropped.

use std::sync::OnceLock;

use chrono::{NaiveDate, Utc};
use regex::Regex;
use tracing::{debug, trace};

use super::cost::{rescale_total_cost, weeks_needed};
use super::filler::{FillerSource, RandomFiller};
use super::model::{GroceryItem, GroceryStoreGroup, Ingredient, Meal, MealPlan, MealType};

pub const DEFAULT_STORE: &str = "Local Store";
pub const DEFAULT_QUANTITY: &str = "1";

fn meal_header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(breakfast|lunch|dinner|snack)").expect("meal header pattern is valid")
    })
}

fn priced_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[-•*]?\s*(.+?)(?:\s*\(?\$(\d[\d,]*(?:\.\d+)?)\)?)?$")
            .expect("priced line pattern is valid")
    })
}

fn instruction_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:\d+[.)]|[-•*])\s*(.*)$").expect("instruction pattern is valid")
    })
}

fn dollar_amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$(\d[\d,]*(?:\.\d+)?)").expect("dollar pattern is valid"))
}

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("number pattern is valid"))
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse::<f64>().ok()
}

/// Splits `- Name ($1.25)` style lines into the name and the price, if one is given.
fn parse_priced_line(line: &str) -> Option<(String, Option<f64>)> {
    let caps = priced_line_re().captures(line)?;
    let name = caps.get(1)?.as_str().trim();
    if name.trim_matches(|c| matches!(c, '-' | '•' | '*')).trim().is_empty() {
        return None;
    }
    let amount = caps.get(2).and_then(|m| parse_amount(m.as_str()));
    Some((name.to_string(), amount))
}

/// Zero or missing prices are replaced by the filler cost.
fn cost_or_fallback<F: FillerSource>(amount: Option<f64>, filler: &mut F) -> f64 {
    match amount {
        Some(cost) if cost > 0.0 => cost,
        _ => filler.fallback_cost(),
    }
}

fn parse_instruction(line: &str) -> Option<String> {
    let caps = instruction_re().captures(line)?;
    let step = caps.get(1)?.as_str().trim();
    if step.is_empty() {
        None
    } else {
        Some(step.to_string())
    }
}

fn parse_meal_header(line: &str) -> Option<(MealType, String)> {
    let keyword = meal_header_re().captures(line)?.get(1)?.as_str().to_lowercase();
    let meal_type = MealType::from_keyword(&keyword)?;
    let name = line
        .split_once(':')
        .map(|(_, rest)| rest.trim().to_string())
        .unwrap_or_default();
    Some((meal_type, name))
}

/// Where the parser is, together with the accumulator that section fills.
#[derive(Debug)]
enum Section {
    /// Waiting for a meal header; content lines are ignored.
    Meal,
    Ingredients(Meal),
    Instructions(Meal),
    Grocery(Option<GroceryStoreGroup>),
    Costs,
}

impl Section {
    fn name(&self) -> &'static str {
        match self {
            Section::Meal => "meal",
            Section::Ingredients(_) => "ingredients",
            Section::Instructions(_) => "instructions",
            Section::Grocery(_) => "grocery",
            Section::Costs => "costs",
        }
    }
}

/// Turns generated meal-plan text into a [`MealPlan`].
///
/// Dates are stamped relative to `today`, which defaults to the current UTC date.
pub struct MealPlanParser<F = RandomFiller> {
    filler: F,
    today: NaiveDate,
}

impl MealPlanParser<RandomFiller> {
    pub fn new() -> Self {
        Self::with_filler(RandomFiller::from_entropy())
    }
}

impl Default for MealPlanParser<RandomFiller> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FillerSource> MealPlanParser<F> {
    pub fn with_filler(filler: F) -> Self {
        Self {
            filler,
            today: Utc::now().date_naive(),
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Parses `text` for a plan lasting `duration` days.
    pub fn parse(&mut self, text: &str, duration: u32) -> MealPlan {
        let mut run = ParseRun {
            filler: &mut self.filler,
            today: self.today,
            duration,
            section: Section::Meal,
            meals: Vec::new(),
            grocery_list: Vec::new(),
            total_cost: 0.0,
            last_store: None,
            current_week: 1,
        };

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            run.feed_line(line);
        }

        run.finish()
    }
}

/// Parses `text` with random filler values, dated from today.
pub fn parse_meal_plan_response(text: &str, duration: u32) -> MealPlan {
    MealPlanParser::new().parse(text, duration)
}

struct ParseRun<'a, F> {
    filler: &'a mut F,
    today: NaiveDate,
    duration: u32,
    section: Section,
    meals: Vec<Meal>,
    grocery_list: Vec<GroceryStoreGroup>,
    total_cost: f64,
    /// Name of the most recently opened store, used for ingredient `store` fields.
    last_store: Option<String>,
    current_week: u32,
}

impl<F: FillerSource> ParseRun<'_, F> {
    fn feed_line(&mut self, line: &str) {
        let lower = line.to_lowercase();

        if lower.contains("week") && lower.contains("rotation") {
            self.current_week = number_re()
                .find(line)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(1);
            debug!(week = self.current_week, "week rotation marker");
            return;
        }

        if let Some((meal_type, name)) = parse_meal_header(line) {
            self.close_section();
            let meal = self.start_meal(meal_type, name);
            self.enter(Section::Ingredients(meal));
            return;
        }

        if lower.contains("ingredients:") {
            let next = match self.take_section() {
                Section::Ingredients(meal) | Section::Instructions(meal) => {
                    Section::Ingredients(meal)
                }
                other => {
                    self.close(other);
                    Section::Meal
                }
            };
            self.enter(next);
            return;
        }

        if lower.contains("instructions:") {
            let next = match self.take_section() {
                Section::Ingredients(meal) | Section::Instructions(meal) => {
                    Section::Instructions(meal)
                }
                other => {
                    self.close(other);
                    Section::Meal
                }
            };
            self.enter(next);
            return;
        }

        if lower.contains("grocery list:") {
            self.close_section();
            self.enter(Section::Grocery(None));
            return;
        }

        if matches!(self.section, Section::Grocery(_)) && line.contains(':') {
            let store = line.replacen(':', "", 1).trim().to_string();
            if let Section::Grocery(Some(finished)) = self.take_section() {
                self.push_store(finished);
            }
            debug!(store = %store, "grocery store header");
            self.last_store = Some(store.clone());
            self.section = Section::Grocery(Some(GroceryStoreGroup {
                store,
                items: Vec::new(),
                total_cost: 0.0,
            }));
            return;
        }

        if lower.contains("monthly cost breakdown") {
            self.close_section();
            self.enter(Section::Costs);
            return;
        }

        self.feed_content(line, &lower);
    }

    fn feed_content(&mut self, line: &str, lower: &str) {
        match &mut self.section {
            Section::Ingredients(meal) => {
                if let Some((name, amount)) = parse_priced_line(line) {
                    let estimated_cost = cost_or_fallback(amount, &mut *self.filler);
                    meal.ingredients.push(Ingredient {
                        name,
                        quantity: DEFAULT_QUANTITY.to_string(),
                        estimated_cost,
                        store: self
                            .last_store
                            .clone()
                            .unwrap_or_else(|| DEFAULT_STORE.to_string()),
                    });
                    return;
                }
            }
            Section::Instructions(meal) => {
                if let Some(step) = parse_instruction(line) {
                    meal.instructions.push(step);
                    return;
                }
            }
            Section::Grocery(Some(store)) => {
                if let Some((name, amount)) = parse_priced_line(line) {
                    let estimated_cost = cost_or_fallback(amount, &mut *self.filler);
                    store.items.push(GroceryItem {
                        name,
                        quantity: DEFAULT_QUANTITY.to_string(),
                        estimated_cost,
                    });
                    store.total_cost += estimated_cost;
                    self.total_cost += estimated_cost;
                    return;
                }
            }
            Section::Costs => {
                if lower.contains("total") {
                    let amount = dollar_amount_re()
                        .captures(line)
                        .and_then(|caps| caps.get(1))
                        .and_then(|m| parse_amount(m.as_str()));
                    if let Some(total) = amount {
                        debug!(total, "total cost line");
                        self.total_cost = total;
                        return;
                    }
                }
            }
            Section::Grocery(None) | Section::Meal => {}
        }
        trace!(section = self.section.name(), line, "ignoring line");
    }

    fn start_meal(&mut self, meal_type: MealType, name: String) -> Meal {
        Meal {
            date: self.today,
            meal_type,
            name,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            estimated_calories: self.filler.calories(),
            estimated_prep_time: self.filler.prep_time(),
            estimated_cook_time: self.filler.cook_time(),
        }
    }

    fn take_section(&mut self) -> Section {
        std::mem::replace(&mut self.section, Section::Meal)
    }

    fn enter(&mut self, section: Section) {
        trace!(section = section.name(), "entering section");
        self.section = section;
    }

    fn close_section(&mut self) {
        let section = self.take_section();
        self.close(section);
    }

    /// Flushes whatever accumulator `section` was holding into the results.
    fn close(&mut self, section: Section) {
        match section {
            Section::Ingredients(meal) | Section::Instructions(meal) => self.emit_meal(meal),
            Section::Grocery(Some(store)) => self.push_store(store),
            Section::Grocery(None) | Section::Meal | Section::Costs => {}
        }
    }

    /// Adds a finished store group, folding it into an earlier group of the same name.
    fn push_store(&mut self, store: GroceryStoreGroup) {
        match self
            .grocery_list
            .iter_mut()
            .find(|group| group.store == store.store)
        {
            Some(existing) => {
                existing.items.extend(store.items);
                existing.total_cost += store.total_cost;
            }
            None => self.grocery_list.push(store),
        }
    }

    /// Appends `meal`, once per week for plans longer than a week.
    fn emit_meal(&mut self, meal: Meal) {
        if self.duration <= 7 {
            self.meals.push(meal);
            return;
        }

        let weeks = weeks_needed(self.duration);
        debug!(meal = %meal.name, weeks, "replicating meal across weeks");
        for week in 0..weeks {
            let date = self.today + chrono::Duration::days(i64::from(week) * 7);
            self.meals.push(Meal {
                date,
                ..meal.clone()
            });
        }
    }

    fn finish(mut self) -> MealPlan {
        self.close_section();
        let total_cost = rescale_total_cost(self.total_cost, self.duration);
        debug!(
            meals = self.meals.len(),
            stores = self.grocery_list.len(),
            raw_total = self.total_cost,
            total_cost,
            "parsed meal plan"
        );
        MealPlan {
            meals: self.meals,
            total_cost,
            grocery_list: self.grocery_list,
        }
    }
}
