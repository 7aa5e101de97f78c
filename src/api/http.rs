use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, instrument};

use super::{ApiError, RestaurantApi};
use crate::config::ApiConfig;
use crate::foods::{FavoriteFood, Food, FoodId};
use crate::orders::OrderSubmission;

#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .context("build http client")?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

/// Turns a non-2xx answer into an `ApiError`; 404 on a keyed resource is
/// reported as `NotFound`.
fn check(res: Response, resource: &'static str, id: Option<FoodId>) -> Result<Response, ApiError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    match (status, id) {
        (StatusCode::NOT_FOUND, Some(id)) => Err(ApiError::NotFound { resource, id }),
        _ => Err(ApiError::Status {
            status,
            url: res.url().to_string(),
        }),
    }
}

#[async_trait]
impl RestaurantApi for HttpApi {
    #[instrument(skip(self))]
    async fn get_food(&self, id: FoodId) -> Result<Food, ApiError> {
        let res = self.client.get(self.url(&format!("foods/{id}"))).send().await?;
        let food: Food = check(res, "food", Some(id))?.json().await?;
        debug!(food_id = id, extras = food.extras.len(), "food fetched");
        Ok(food)
    }

    #[instrument(skip(self))]
    async fn get_favorite(&self, id: FoodId) -> Result<FavoriteFood, ApiError> {
        let res = self
            .client
            .get(self.url(&format!("favorites/{id}")))
            .send()
            .await?;
        Ok(check(res, "favorite", Some(id))?.json().await?)
    }

    #[instrument(skip(self))]
    async fn delete_favorite(&self, id: FoodId) -> Result<(), ApiError> {
        let res = self
            .client
            .delete(self.url(&format!("favorites/{id}")))
            .send()
            .await?;
        check(res, "favorite", Some(id))?;
        Ok(())
    }

    #[instrument(skip(self, favorite), fields(food_id = favorite.id))]
    async fn create_favorite(&self, favorite: &FavoriteFood) -> Result<(), ApiError> {
        let res = self
            .client
            .post(self.url("favorites"))
            .json(favorite)
            .send()
            .await?;
        check(res, "favorite", None)?;
        Ok(())
    }

    #[instrument(skip(self, order), fields(product_id = order.product_id, quantity = order.quantity))]
    async fn create_order(&self, order: &OrderSubmission) -> Result<(), ApiError> {
        let res = self
            .client
            .post(self.url("orders"))
            .json(order)
            .send()
            .await?;
        check(res, "order", None)?;
        Ok(())
    }
}
