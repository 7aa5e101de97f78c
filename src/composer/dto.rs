use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::model::{ComposerError, Extra, OrderComposer};
use crate::foods::FoodId;
use crate::money::CurrencyFormat;

#[derive(Debug, Serialize)]
pub struct FoodView {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub formatted_price: String,
    pub image_url: String,
}

/// Everything the food details screen renders.
#[derive(Debug, Serialize)]
pub struct ScreenSnapshot {
    pub session_id: Uuid,
    pub food: Option<FoodView>,
    pub extras: Vec<Extra>,
    pub food_quantity: u32,
    pub is_favorite: bool,
    pub favorite_icon: &'static str,
    pub cart_total: String,
}

impl ScreenSnapshot {
    pub fn new(
        session_id: Uuid,
        composer: &OrderComposer,
        currency: &CurrencyFormat,
    ) -> Result<Self, ComposerError> {
        Ok(Self {
            session_id,
            food: composer.food().map(|f| FoodView {
                id: f.id,
                name: f.name.clone(),
                description: f.description.clone(),
                price: f.price,
                formatted_price: currency.format_value(f.price),
                image_url: f.image_url.clone(),
            }),
            extras: composer.extras().to_vec(),
            food_quantity: composer.food_quantity(),
            is_favorite: composer.is_favorite(),
            favorite_icon: composer.favorite_icon(),
            cart_total: composer.formatted_total(currency)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct NavigationIntent {
    pub navigate_to: String,
}
