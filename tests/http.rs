//! HTTP boundary tests against an in-memory catalog served on an
//! ephemeral port.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use loomdex::catalog::memory::InMemoryCatalog;
use loomdex::catalog::Catalog;
use loomdex::lookup::{ColorLookupService, QualityLookupService};
use loomdex::models::{ColorRecord, QualityRecord};
use loomdex::server::{serve, AppState};

fn quality(code: &str, aliases: &[&str]) -> QualityRecord {
    QualityRecord {
        code: code.to_string(),
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
    }
}

fn color(quality: &str, label: &str, code: &str) -> ColorRecord {
    ColorRecord {
        quality_code: quality.to_string(),
        color_label: label.to_string(),
        color_code: code.to_string(),
    }
}

fn seeded_catalog() -> Arc<InMemoryCatalog> {
    let catalog = InMemoryCatalog::new();
    catalog.insert_quality(quality("COT100", &["cotton", "100% cotton"]));
    catalog.insert_quality(quality("SLK200", &["silk"]));
    catalog.insert_color(color("SLK200", "Royal Blue", "#1d3fbf"));
    catalog.insert_color(color("COT100", "Sky Blue", "#88c6ef"));
    catalog.insert_color(color("COT100", "Crimson", "#b0172c"));
    Arc::new(catalog)
}

/// A catalog whose every read fails, simulating a store outage.
struct FailingCatalog;

#[async_trait]
impl Catalog for FailingCatalog {
    async fn colors_matching(
        &self,
        _label_fragment: &str,
        _quality_code: Option<&str>,
        _limit: i64,
    ) -> Result<Vec<ColorRecord>> {
        anyhow::bail!("catalog unavailable")
    }

    async fn qualities_window(&self, _limit: i64) -> Result<Vec<QualityRecord>> {
        anyhow::bail!("catalog unavailable")
    }
}

async fn spawn_app(catalog: Arc<dyn Catalog>) -> String {
    let state = AppState::new(
        ColorLookupService::new(catalog.clone(), 10),
        QualityLookupService::new(catalog, 50, 10),
        3,
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        serve(listener, state).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_short_query_returns_empty_200() {
    // A two-character query never reaches the catalog.
    let base = spawn_app(seeded_catalog()).await;
    let client = reqwest::Client::new();

    for endpoint in ["autocomplete-colors", "autocomplete-qualities"] {
        let resp = client
            .get(format!("{base}/{endpoint}?query=re"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Vec<serde_json::Value> = resp.json().await.unwrap();
        assert!(body.is_empty(), "{endpoint} should return [] for short query");
    }
}

#[tokio::test]
async fn test_missing_query_treated_as_empty() {
    let base = spawn_app(seeded_catalog()).await;
    let resp = reqwest::get(format!("{base}/autocomplete-colors")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Vec<serde_json::Value> = resp.json().await.unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_quality_alias_match() {
    // "cott" resolves COT100 via its "cotton" alias.
    let base = spawn_app(seeded_catalog()).await;
    let resp = reqwest::get(format!("{base}/autocomplete-qualities?query=cott"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Vec<QualityRecord> = resp.json().await.unwrap();
    assert!(body.iter().any(|q| q.code == "COT100"));
}

#[tokio::test]
async fn test_color_scope_filters_exactly() {
    // Scoping to COT100 keeps only "Sky Blue".
    let base = spawn_app(seeded_catalog()).await;
    let resp = reqwest::get(format!(
        "{base}/autocomplete-colors?query=blue&quality=COT100"
    ))
    .await
    .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Vec<ColorRecord> = resp.json().await.unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0].color_label, "Sky Blue");
    assert!(body.iter().all(|c| c.quality_code == "COT100"));
}

#[tokio::test]
async fn test_color_results_capped_at_ten() {
    let catalog = InMemoryCatalog::new();
    for i in 0..25 {
        catalog.insert_color(color("COT100", &format!("Blue {i:02}"), "#000000"));
    }
    let base = spawn_app(Arc::new(catalog)).await;
    let resp = reqwest::get(format!("{base}/autocomplete-colors?query=blue"))
        .await
        .unwrap();
    let body: Vec<ColorRecord> = resp.json().await.unwrap();
    assert_eq!(body.len(), 10);
}

#[tokio::test]
async fn test_every_color_result_contains_query() {
    let base = spawn_app(seeded_catalog()).await;
    let resp = reqwest::get(format!("{base}/autocomplete-colors?query=blue"))
        .await
        .unwrap();
    let body: Vec<ColorRecord> = resp.json().await.unwrap();
    assert!(!body.is_empty());
    assert!(body
        .iter()
        .all(|c| c.color_label.to_lowercase().contains("blue")));
}

#[tokio::test]
async fn test_catalog_failure_returns_500_envelope() {
    // A store outage surfaces as the standard error body.
    let base = spawn_app(Arc::new(FailingCatalog)).await;
    let client = reqwest::Client::new();

    for endpoint in ["autocomplete-colors", "autocomplete-qualities"] {
        let resp = client
            .get(format!("{base}/{endpoint}?query=blue"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 500);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert!(body["error"].is_string(), "{endpoint} missing error field");
    }
}

#[tokio::test]
async fn test_malformed_query_string_uses_error_envelope() {
    // A duplicated parameter fails query parsing; the failure must wear
    // the same JSON envelope as catalog errors, not a bare 400.
    let base = spawn_app(seeded_catalog()).await;
    let resp = reqwest::get(format!("{base}/autocomplete-colors?query=blue&query=red"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_preflight_has_cors_headers_and_empty_body() {
    let base = spawn_app(seeded_catalog()).await;
    let client = reqwest::Client::new();
    let resp = client
        .request(
            reqwest::Method::OPTIONS,
            format!("{base}/autocomplete-colors"),
        )
        .header("Origin", "https://app.example")
        .header("Access-Control-Request-Method", "GET")
        .header("Access-Control-Request-Headers", "authorization,apikey")
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    let allow_headers = resp
        .headers()
        .get("access-control-allow-headers")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_lowercase();
    assert!(allow_headers.contains("authorization"));
    assert!(allow_headers.contains("apikey"));
    let body = resp.bytes().await.unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_cors_origin_header_on_regular_responses() {
    let base = spawn_app(seeded_catalog()).await;
    let client = reqwest::Client::new();
    let resp = client
        .get(format!("{base}/autocomplete-qualities?query=silk"))
        .header("Origin", "https://app.example")
        .send()
        .await
        .unwrap();
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_repeated_requests_are_idempotent() {
    let base = spawn_app(seeded_catalog()).await;
    let url = format!("{base}/autocomplete-colors?query=blue");
    let first: Vec<ColorRecord> = reqwest::get(&url).await.unwrap().json().await.unwrap();
    let second: Vec<ColorRecord> = reqwest::get(&url).await.unwrap().json().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_health() {
    let base = spawn_app(seeded_catalog()).await;
    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}
