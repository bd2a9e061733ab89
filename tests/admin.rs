//! End-to-end tests for the admin console.

use folio::config::SiteConfig;
use reqwest::StatusCode;

mod common;

fn config_with_key(key: &str) -> SiteConfig {
    let mut config = SiteConfig::default();
    config.admin.api_key = key.to_string();
    config
}

#[tokio::test]
async fn console_page_is_public() {
    let addr = common::start_site(config_with_key("secret")).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/admin/", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("Site administration"));
}

#[tokio::test]
async fn api_requires_the_configured_key() {
    let addr = common::start_site(config_with_key("secret")).await;
    let client = common::client();
    let url = format!("http://{}/admin/status", addr);

    let unauthenticated = client.get(&url).send().await.unwrap();
    assert_eq!(unauthenticated.status(), StatusCode::UNAUTHORIZED);

    let wrong_key = client.get(&url).bearer_auth("nope").send().await.unwrap();
    assert_eq!(wrong_key.status(), StatusCode::UNAUTHORIZED);

    let wrong_scheme = client
        .get(&url)
        .header("authorization", "Basic c2VjcmV0")
        .send()
        .await
        .unwrap();
    assert_eq!(wrong_scheme.status(), StatusCode::UNAUTHORIZED);

    let authorized = client.get(&url).bearer_auth("secret").send().await.unwrap();
    assert_eq!(authorized.status(), StatusCode::OK);

    let status: serde_json::Value = authorized.json().await.unwrap();
    assert_eq!(status["status"], "operational");
    assert_eq!(status["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn page_table_lists_every_route() {
    let addr = common::start_site(config_with_key("secret")).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/admin/pages", addr))
        .bearer_auth("secret")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let pages: serde_json::Value = res.json().await.unwrap();
    let paths: Vec<&str> = pages
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, ["/", "/projects/", "/resume/"]);
}

#[tokio::test]
async fn disabled_console_is_absent() {
    let mut config = SiteConfig::default();
    config.admin.enabled = false;
    let addr = common::start_site(config).await;
    let client = common::client();

    for path in ["/admin/", "/admin/status"] {
        let res = client
            .get(format!("http://{}{}", addr, path))
            .bearer_auth("secret")
            .send()
            .await
            .unwrap();
        assert_eq!(
            res.status(),
            StatusCode::NOT_FOUND,
            "{} should not exist when the console is disabled",
            path
        );
    }
}
