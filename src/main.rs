use std::sync::Arc;

use beerstock::{http, BeerService, HashMapRepository};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let addr =
        std::env::var("BEERSTOCK_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let service = Arc::new(BeerService::new(HashMapRepository::new()));
    http::serve(service, &addr).await
}
