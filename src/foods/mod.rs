mod dto;

pub use dto::{CatalogExtra, CategoryId, ExtraId, FavoriteFood, Food, FoodId};
