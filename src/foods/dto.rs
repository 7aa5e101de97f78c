use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type FoodId = u64;
pub type ExtraId = u64;
pub type CategoryId = u64;

/// Food record as served by the catalog, extras included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
    #[serde(default)]
    pub thumbnail_url: String,
    pub category: CategoryId,
    pub extras: Vec<CatalogExtra>,
}

/// Add-on attached to a food in the catalog. Quantities are not part of the
/// catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogExtra {
    pub id: ExtraId,
    pub name: String,
    pub value: Decimal,
}

/// Favorite marker stored by the API: the food without its extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteFood {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub category: CategoryId,
}

impl From<&Food> for FavoriteFood {
    fn from(food: &Food) -> Self {
        Self {
            id: food.id,
            name: food.name.clone(),
            description: food.description.clone(),
            price: food.price,
            image_url: food.image_url.clone(),
            thumbnail_url: food.thumbnail_url.clone(),
            category: food.category,
        }
    }
}

#[cfg(test)]
mod food_dto_tests {
    use super::*;

    #[test]
    fn parses_catalog_payload() {
        let json = r#"{
            "id": 1,
            "name": "Ao molho",
            "description": "Macarrão ao molho branco",
            "price": 19.5,
            "category": 1,
            "image_url": "https://img/ao_molho.png",
            "thumbnail_url": "https://img/ao_molho_thumb.png",
            "extras": [{ "id": 1, "name": "Bacon", "value": 1.5 }]
        }"#;
        let food: Food = serde_json::from_str(json).unwrap();
        assert_eq!(food.price, Decimal::new(195, 1));
        assert_eq!(food.extras.len(), 1);
        assert_eq!(food.extras[0].value, Decimal::new(15, 1));
    }

    #[test]
    fn catalog_payload_without_extras_is_rejected() {
        let json = r#"{
            "id": 1, "name": "x", "description": "y", "price": 1,
            "category": 1, "image_url": "z"
        }"#;
        assert!(serde_json::from_str::<Food>(json).is_err());
    }

    #[test]
    fn favorite_drops_extras() {
        let food = Food {
            id: 7,
            name: "Veggie".into(),
            description: "Salad".into(),
            price: Decimal::new(2190, 2),
            image_url: "img".into(),
            thumbnail_url: "thumb".into(),
            category: 2,
            extras: vec![CatalogExtra {
                id: 1,
                name: "Cheese".into(),
                value: Decimal::ONE,
            }],
        };
        let json = serde_json::to_value(FavoriteFood::from(&food)).unwrap();
        assert!(json.get("extras").is_none());
        assert_eq!(json["id"], 7);
        assert_eq!(json["thumbnail_url"], "thumb");
    }
}
