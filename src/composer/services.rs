use tracing::{debug, error, info, instrument, warn};

use super::dto::NavigationIntent;
use super::model::{ComposerError, OrderComposer};
use crate::api::{ApiError, RestaurantApi};
use crate::foods::{FavoriteFood, FoodId};
use crate::orders::OrderSubmission;

/// Fetches the food and its favorite marker side by side. Never fails: a
/// catalog error leaves the screen empty and a favorite lookup error reads
/// as "not a favorite".
#[instrument(skip(api))]
pub async fn load(api: &dyn RestaurantApi, food_id: FoodId) -> OrderComposer {
    let (food, favorite) = tokio::join!(api.get_food(food_id), api.get_favorite(food_id));

    let is_favorite = match favorite {
        Ok(_) => true,
        Err(ApiError::NotFound { .. }) => {
            debug!(food_id, "food is not a favorite");
            false
        }
        Err(e) => {
            warn!(error = %e, food_id, "favorite lookup failed, assuming not favorite");
            false
        }
    };

    match food {
        Ok(food) => {
            info!(food_id, extras = food.extras.len(), is_favorite, "food details loaded");
            OrderComposer::with_food(food, is_favorite)
        }
        Err(e) => {
            error!(error = %e, food_id, "load food failed");
            OrderComposer::empty()
        }
    }
}

/// Flips the favorite marker remotely, then locally. A failed call leaves
/// the flag as it was.
#[instrument(skip(api, composer))]
pub async fn toggle_favorite(
    api: &dyn RestaurantApi,
    composer: &mut OrderComposer,
) -> Result<bool, ComposerError> {
    let food = composer.food().ok_or(ComposerError::NotLoaded)?;
    let food_id = food.id;

    if composer.is_favorite() {
        api.delete_favorite(food_id).await?;
    } else {
        api.create_favorite(&FavoriteFood::from(food)).await?;
    }

    let now = !composer.is_favorite();
    composer.set_favorite(now);
    info!(food_id, is_favorite = now, "favorite toggled");
    Ok(now)
}

#[instrument(skip(api, composer))]
pub async fn submit_order(
    api: &dyn RestaurantApi,
    composer: &OrderComposer,
    home_screen: &str,
) -> Result<NavigationIntent, ComposerError> {
    let food = composer.food().ok_or(ComposerError::NotLoaded)?;
    let order = OrderSubmission::new(food, composer.food_quantity(), composer.extras());

    api.create_order(&order).await?;

    info!(
        product_id = order.product_id,
        quantity = order.quantity,
        extras = order.extras.as_ref().map_or(0, Vec::len),
        "order submitted"
    );
    Ok(NavigationIntent {
        navigate_to: home_screen.to_string(),
    })
}
