//! Change feed delivery over a real TCP pair

use std::net::SocketAddr;
use std::time::Duration;

use tandoor_client::ClientConfig;
use tandoor_server::SyncBus;

/// Poll until the server records its bound address (port 0 picks a free one)
async fn wait_for_bound(bus: &SyncBus) -> SocketAddr {
    for _ in 0..50 {
        if let Some(addr) = bus.local_addr() {
            return addr;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("sync bus never came up");
}

#[tokio::test]
async fn published_changes_reach_a_tcp_subscriber() {
    let bus = SyncBus::new(0);

    let server_bus = bus.clone();
    tokio::spawn(async move {
        server_bus.start_tcp_server().await.unwrap();
    });

    let addr = wait_for_bound(&bus).await;

    let config = ClientConfig::default().with_sync_tcp_addr(format!("127.0.0.1:{}", addr.port()));
    let mut client = config.connect_sync().await.unwrap();
    // give the server a beat to register the subscriber
    tokio::time::sleep(Duration::from_millis(50)).await;

    bus.publish(shared::sync::BusMessage::Sync(shared::sync::SyncPayload {
        resource: "order".into(),
        action: "created".into(),
        id: "order:abc".into(),
        version: 1,
    }));

    let payload = tokio::time::timeout(Duration::from_secs(2), client.next_sync())
        .await
        .expect("timed out waiting for sync frame")
        .unwrap();

    assert_eq!(payload.resource, "order");
    assert_eq!(payload.action, "created");
    assert_eq!(payload.id, "order:abc");
    assert_eq!(payload.version, 1);

    bus.shutdown();
}
