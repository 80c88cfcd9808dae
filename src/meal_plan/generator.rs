use tracing::{debug, error, info};

use super::error::MealPlanError;
use super::filler::FillerSource;
use super::model::{MealPlan, MealPlanRequest};
use super::parser::MealPlanParser;
use super::prompt::{build_prompt, SYSTEM_PROMPT};
use crate::api_connection::{ApiConnectionError, ChatClient};
use crate::config::GenerationConfig;

/// Anything that can turn a system + user prompt into completion text.
#[allow(async_fn_in_trait)]
pub trait TextGenerator {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ApiConnectionError>;
}

impl TextGenerator for ChatClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ApiConnectionError> {
        ChatClient::complete(self, system_prompt, user_prompt).await
    }
}

/// Requests a plan from the configured service and parses the reply.
///
/// One upstream call per invocation; failures are not retried.
pub async fn generate_meal_plan(
    request: &MealPlanRequest,
    config: &GenerationConfig,
) -> Result<MealPlan, MealPlanError> {
    let client = ChatClient::new(config.clone());
    let mut parser = MealPlanParser::new();
    generate_meal_plan_with(&client, request, &mut parser).await
}

pub async fn generate_meal_plan_with<G, F>(
    generator: &G,
    request: &MealPlanRequest,
    parser: &mut MealPlanParser<F>,
) -> Result<MealPlan, MealPlanError>
where
    G: TextGenerator,
    F: FillerSource,
{
    request.validate()?;
    info!(
        budget = request.budget,
        meals_per_day = request.meals_per_day,
        duration = request.duration,
        cooking_style = %request.cooking_style,
        "generating meal plan"
    );

    let prompt = build_prompt(request);
    let text = generator
        .complete(SYSTEM_PROMPT, &prompt)
        .await
        .map_err(|e| {
            error!(error = %e, "meal plan generation failed");
            MealPlanError::GenerationFailed(e)
        })?;
    debug!(completion = %text, "received meal plan text");

    let plan = parser.parse(&text, request.duration);
    info!(
        meals = plan.meals.len(),
        stores = plan.grocery_list.len(),
        total_cost = plan.total_cost,
        "meal plan ready"
    );
    Ok(plan)
}
