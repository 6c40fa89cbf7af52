// Shared one-time server bootstrapping for integration tests.
use media_lake::interface_adapters::state::AppState;
use media_lake::interface_adapters::stores::InMemoryMediaAssetStore;
use std::{
    sync::{Arc, OnceLock},
    time::Duration,
};

pub const API_KEY: &str = "integration-key";

static SERVER_URL: OnceLock<String> = OnceLock::new();

// Ensure the in-memory test server is running and return its base URL.
pub fn ensure_server() -> &'static str {
    SERVER_URL.get_or_init(|| {
        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);
        // The server outlives individual `#[tokio::test]` runtimes, so it gets its own.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                let _ = published_url_thread.set(format!("http://{addr}"));

                let state = AppState::new(Arc::new(InMemoryMediaAssetStore::default()), API_KEY);
                media_lake::run(listener, state).await.expect("server failed");
            });
        });
        wait_for_readiness(&published_url)
    })
}

fn wait_for_readiness(published_url: &OnceLock<String>) -> String {
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");
    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return base_url;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("server did not become ready in time");
}

// Unique gtin so tests sharing one server never collide.
pub fn unique_gtin() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

pub fn asset(gtin: &str, channel: &str) -> serde_json::Value {
    serde_json::json!({
        "gtin": gtin,
        "channel": channel,
        "mediaId": format!("media-{gtin}"),
        "contentType": "image/jpeg",
        "mediaType": "MainImage",
        "status": "ML010New",
        "resolutionKey": "X1024",
        "resolutionInPx": "1024x1024",
        "hasCopyright": true
    })
}
