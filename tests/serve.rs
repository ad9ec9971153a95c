mod common;

use std::io::ErrorKind;

use tokio::net::TcpListener;

use tcloud::config::Config;
use tcloud::error::AppError;

#[tokio::test]
async fn serve_fails_when_port_is_taken() {
    common::init_tracing_once();

    let held = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = held.local_addr().unwrap().port();

    let config = Config::from_vars(Some("127.0.0.1".into()), Some(port.to_string()))
        .expect("Config should parse");

    match tcloud::serve(config).await {
        Err(AppError::Io(e)) => assert_eq!(e.kind(), ErrorKind::AddrInUse),
        other => panic!("Expected an address-in-use error, got {other:?}"),
    }
}
