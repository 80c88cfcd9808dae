use thiserror::Error;

use crate::api_connection::ApiConnectionError;

#[derive(Debug, Error)]
pub enum MealPlanError {
    #[error("Invalid meal plan request: {0}")]
    InvalidRequest(String),

    #[error("Failed to generate meal plan")]
    GenerationFailed(#[source] ApiConnectionError),
}
