use std::{sync::Arc, time::Duration};

use ladle_core::{Client, ClientBuilder, MemoryGateway};

/// Helper function to create a client over a seeded in-memory gateway
pub fn create_test_client() -> (Arc<MemoryGateway>, Client) {
    let gateway = Arc::new(MemoryGateway::seeded());
    let client = ClientBuilder::new()
        .with_gateway(gateway.clone())
        .with_timeout(Duration::from_millis(250))
        .build()
        .expect("Failed to create client");
    (gateway, client)
}
