//! Local HTTP upstreams for adapter tests.

use axum::Router;
use tokio::net::TcpListener;

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local upstream");
    let addr = listener.local_addr().expect("local upstream address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve local upstream");
    });

    format!("http://{addr}")
}
