//! Shared utilities for integration tests.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use folio::config::SiteConfig;
use folio::http::HttpServer;

/// Start the site with the given configuration on an ephemeral port and
/// return the bound address. The listener is bound before the server task
/// is spawned, so the address accepts connections as soon as this returns.
pub async fn start_site(config: SiteConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config).expect("server should start with the checked-in content");
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// A client that ignores any proxy configured in the environment.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
