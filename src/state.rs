use crate::api::{HttpApi, RestaurantApi};
use crate::config::AppConfig;
use crate::sessions::SessionStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub api: Arc<dyn RestaurantApi>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let api = Arc::new(HttpApi::new(&config.api)?) as Arc<dyn RestaurantApi>;
        tracing::info!(base_url = %config.api.base_url, "restaurant api configured");
        Ok(Self::from_parts(config, api))
    }

    pub fn from_parts(config: Arc<AppConfig>, api: Arc<dyn RestaurantApi>) -> Self {
        let sessions = SessionStore::new(config.session_idle());
        Self {
            config,
            api,
            sessions,
        }
    }

    #[cfg(test)]
    pub fn fake(api: Arc<crate::api::fake::FakeApi>) -> Self {
        let config = Arc::new(
            AppConfig::from_lookup(|_| None).expect("default config is valid"),
        );
        Self::from_parts(config, api as Arc<dyn RestaurantApi>)
    }
}
