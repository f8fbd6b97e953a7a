use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use blog_posts::shell::config::Config;
use blog_posts::shell::http::router;
use blog_posts::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;
    let app = router(AppState::seeded());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Posts API listening on http://{}/api/posts", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
