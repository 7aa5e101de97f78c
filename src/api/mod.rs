use async_trait::async_trait;
use reqwest::StatusCode;

use crate::foods::{FavoriteFood, Food, FoodId};
use crate::orders::OrderSubmission;

#[cfg(test)]
pub mod fake;
mod http;

pub use http::HttpApi;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: FoodId },
    #[error("{url} answered {status}")]
    Status { status: StatusCode, url: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Remote restaurant API: food catalog, favorites and orders.
#[async_trait]
pub trait RestaurantApi: Send + Sync {
    async fn get_food(&self, id: FoodId) -> Result<Food, ApiError>;
    async fn get_favorite(&self, id: FoodId) -> Result<FavoriteFood, ApiError>;
    async fn delete_favorite(&self, id: FoodId) -> Result<(), ApiError>;
    async fn create_favorite(&self, favorite: &FavoriteFood) -> Result<(), ApiError>;
    async fn create_order(&self, order: &OrderSubmission) -> Result<(), ApiError>;
}
