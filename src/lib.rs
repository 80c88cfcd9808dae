pub mod api_connection;
pub mod cli;
pub mod config;
pub mod meal_plan;
