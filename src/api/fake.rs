use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use super::{ApiError, RestaurantApi};
use crate::foods::{FavoriteFood, Food, FoodId};
use crate::orders::OrderSubmission;

/// In-memory restaurant API for tests. Failures are switched on per
/// resource and surface as upstream 500s.
#[derive(Default)]
pub struct FakeApi {
    pub foods: Mutex<HashMap<FoodId, Food>>,
    pub favorites: Mutex<HashMap<FoodId, FavoriteFood>>,
    pub orders: Mutex<Vec<OrderSubmission>>,
    pub fail_catalog: AtomicBool,
    pub fail_favorite_lookup: AtomicBool,
    pub fail_favorite_writes: AtomicBool,
    pub fail_orders: AtomicBool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn with_food(food: Food) -> Self {
        let api = Self::default();
        api.foods.lock().unwrap().insert(food.id, food);
        api
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn fail_if(flag: &AtomicBool, url: &str) -> Result<(), ApiError> {
        if flag.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                url: url.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RestaurantApi for FakeApi {
    async fn get_food(&self, id: FoodId) -> Result<Food, ApiError> {
        self.record(format!("GET /foods/{id}"));
        Self::fail_if(&self.fail_catalog, "/foods")?;
        self.foods
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(ApiError::NotFound { resource: "food", id })
    }

    async fn get_favorite(&self, id: FoodId) -> Result<FavoriteFood, ApiError> {
        self.record(format!("GET /favorites/{id}"));
        Self::fail_if(&self.fail_favorite_lookup, "/favorites")?;
        self.favorites
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(ApiError::NotFound {
                resource: "favorite",
                id,
            })
    }

    async fn delete_favorite(&self, id: FoodId) -> Result<(), ApiError> {
        self.record(format!("DELETE /favorites/{id}"));
        Self::fail_if(&self.fail_favorite_writes, "/favorites")?;
        self.favorites.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn create_favorite(&self, favorite: &FavoriteFood) -> Result<(), ApiError> {
        self.record("POST /favorites".into());
        Self::fail_if(&self.fail_favorite_writes, "/favorites")?;
        self.favorites
            .lock()
            .unwrap()
            .insert(favorite.id, favorite.clone());
        Ok(())
    }

    async fn create_order(&self, order: &OrderSubmission) -> Result<(), ApiError> {
        self.record("POST /orders".into());
        Self::fail_if(&self.fail_orders, "/orders")?;
        self.orders.lock().unwrap().push(order.clone());
        Ok(())
    }
}
