use std::sync::Arc;

use wardstock_api::app::{self, services::AppServices};
use wardstock_core::{Clock, SystemClock};

#[tokio::main]
async fn main() {
    wardstock_observability::init();

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let ledger = wardstock_ledger::demo::seeded_ledger(clock.now())
        .expect("demo catalog seeds cleanly");

    let app = app::build_app(Arc::new(AppServices::new(clock, ledger)));

    let addr =
        std::env::var("WARDSTOCK_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
