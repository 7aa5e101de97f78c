use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::foods::{CatalogExtra, ExtraId, Food};
use crate::money::CurrencyFormat;

/// Extra as held by the screen: the catalog entry plus how many were picked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extra {
    pub id: ExtraId,
    pub name: String,
    pub value: Decimal,
    pub quantity: u32,
}

impl From<CatalogExtra> for Extra {
    fn from(e: CatalogExtra) -> Self {
        Self {
            id: e.id,
            name: e.name,
            value: e.value,
            quantity: 0,
        }
    }
}

/// Quantity gestures on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    IncrementExtra { id: ExtraId },
    DecrementExtra { id: ExtraId },
    IncrementFood,
    DecrementFood,
}

#[derive(Debug, thiserror::Error)]
pub enum ComposerError {
    #[error("no food loaded")]
    NotLoaded,
    #[error("extra {0} is not offered with this food")]
    UnknownExtra(ExtraId),
    #[error("order total is too large to represent")]
    Overflow,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// State of one food details screen.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderComposer {
    food: Option<Food>,
    extras: Vec<Extra>,
    food_quantity: u32,
    is_favorite: bool,
}

impl Default for OrderComposer {
    fn default() -> Self {
        Self::empty()
    }
}

impl OrderComposer {
    /// What the screen shows when the catalog could not be reached.
    pub fn empty() -> Self {
        Self {
            food: None,
            extras: Vec::new(),
            food_quantity: 1,
            is_favorite: false,
        }
    }

    /// Takes ownership of a catalog food; every extra starts at zero.
    pub fn with_food(mut food: Food, is_favorite: bool) -> Self {
        let extras = std::mem::take(&mut food.extras)
            .into_iter()
            .map(Extra::from)
            .collect();
        Self {
            food: Some(food),
            extras,
            food_quantity: 1,
            is_favorite,
        }
    }

    pub fn food(&self) -> Option<&Food> {
        self.food.as_ref()
    }

    pub fn extras(&self) -> &[Extra] {
        &self.extras
    }

    pub fn food_quantity(&self) -> u32 {
        self.food_quantity
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    pub(crate) fn set_favorite(&mut self, value: bool) {
        self.is_favorite = value;
    }

    /// Applies a gesture. A gesture that would push the total out of range is
    /// refused and leaves the state as it was.
    pub fn apply(&mut self, command: Command) -> Result<(), ComposerError> {
        let mut next = self.clone();
        next.apply_unchecked(command)?;
        next.compute_total()?;
        *self = next;
        Ok(())
    }

    fn apply_unchecked(&mut self, command: Command) -> Result<(), ComposerError> {
        match command {
            Command::IncrementExtra { id } => self.increment_extra(id),
            Command::DecrementExtra { id } => self.decrement_extra(id),
            Command::IncrementFood => {
                self.increment_food();
                Ok(())
            }
            Command::DecrementFood => {
                self.decrement_food();
                Ok(())
            }
        }
    }

    fn extra_mut(&mut self, id: ExtraId) -> Result<&mut Extra, ComposerError> {
        self.extras
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(ComposerError::UnknownExtra(id))
    }

    pub fn increment_extra(&mut self, id: ExtraId) -> Result<(), ComposerError> {
        let extra = self.extra_mut(id)?;
        extra.quantity = extra.quantity.saturating_add(1);
        Ok(())
    }

    pub fn decrement_extra(&mut self, id: ExtraId) -> Result<(), ComposerError> {
        let extra = self.extra_mut(id)?;
        extra.quantity = extra.quantity.saturating_sub(1);
        Ok(())
    }

    pub fn increment_food(&mut self) {
        self.food_quantity = self.food_quantity.saturating_add(1);
    }

    pub fn decrement_food(&mut self) {
        if self.food_quantity > 1 {
            self.food_quantity -= 1;
        }
    }

    /// `price * quantity + sum(value * quantity)` over the extras; zero
    /// while nothing is loaded.
    pub fn compute_total(&self) -> Result<Decimal, ComposerError> {
        let Some(food) = &self.food else {
            return Ok(Decimal::ZERO);
        };
        let food_total = food
            .price
            .checked_mul(Decimal::from(self.food_quantity))
            .ok_or(ComposerError::Overflow)?;
        self.extras.iter().try_fold(food_total, |total, e| {
            e.value
                .checked_mul(Decimal::from(e.quantity))
                .and_then(|line| total.checked_add(line))
                .ok_or(ComposerError::Overflow)
        })
    }

    pub fn formatted_total(&self, currency: &CurrencyFormat) -> Result<String, ComposerError> {
        Ok(currency.format_value(self.compute_total()?))
    }

    pub fn favorite_icon(&self) -> &'static str {
        if self.is_favorite {
            "favorite"
        } else {
            "favorite-border"
        }
    }
}
