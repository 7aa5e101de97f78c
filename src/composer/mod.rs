mod dto;
pub mod handlers;
mod model;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub use model::{Extra, OrderComposer};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::screen_routes())
        .merge(handlers::session_routes())
}
