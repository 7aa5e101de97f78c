mod api;
mod app;
mod composer;
mod config;
mod foods;
mod money;
mod orders;
mod sessions;
mod state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "foodorder=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let app_state = state::AppState::init()?;
    tracing::info!(
        home_screen = %app_state.config.home_screen,
        "food details screen backend starting"
    );

    let addr = app_state.config.listen_addr;
    app_state.sessions.spawn_sweeper();
    app::serve(app::build_app(app_state), addr).await
}
