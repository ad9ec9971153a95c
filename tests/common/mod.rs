#![allow(dead_code)]

use std::sync::Once;

use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("tcloud=debug")
            .with_test_writer()
            .init();
    });
}

/// Spawns the application on a random local port and returns its base address.
pub async fn spawn_app() -> String {
    init_tracing_once();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");

    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, tcloud::app()).await.unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}
