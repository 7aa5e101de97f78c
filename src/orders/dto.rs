use rust_decimal::Decimal;
use serde::Serialize;

use crate::composer::Extra;
use crate::foods::{CategoryId, Food, FoodId};

/// Payload posted to `/orders`. `extras` is left out of the JSON entirely
/// when nothing was picked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSubmission {
    pub product_id: FoodId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub thumbnail_url: String,
    pub category: CategoryId,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<Vec<Extra>>,
}

impl OrderSubmission {
    pub fn new(food: &Food, quantity: u32, extras: &[Extra]) -> Self {
        let chosen: Vec<Extra> = extras.iter().filter(|e| e.quantity > 0).cloned().collect();
        Self {
            product_id: food.id,
            name: food.name.clone(),
            description: food.description.clone(),
            price: food.price,
            thumbnail_url: food.thumbnail_url.clone(),
            category: food.category,
            quantity,
            extras: (!chosen.is_empty()).then_some(chosen),
        }
    }
}
