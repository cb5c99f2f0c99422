#[tokio::main]
async fn main() -> anyhow::Result<()> {
    urbanfood_observability::init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| {
        tracing::warn!("BIND_ADDR not set; using 0.0.0.0:8080");
        "0.0.0.0:8080".to_string()
    });

    let app = urbanfood_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
