#![cfg(feature = "ssr")]

use std::net::SocketAddr;
use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use reqwest::Url;
use serde_json::json;
use wellnex::content::{ContentError, ContentLoader, ContentSettings, FailureReason, HttpSource};

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn site() -> Router {
    Router::new()
        .route(
            "/data/data.json",
            get(|| async { r#"{"hero": {"title": "X"}, "navbar": {"logo": "Y"}}"# }),
        )
        .route("/landing/broken.json", get(|| async { "<html>oops</html>" }))
        .route(
            "/slow.json",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "{}"
            }),
        )
}

fn loader(addr: SocketAddr, settings: ContentSettings) -> ContentLoader {
    let base = Url::parse(&format!("http://{addr}/landing/index.html")).unwrap();
    ContentLoader::new(HttpSource::new(base), settings)
}

#[tokio::test]
async fn loads_document_from_absolute_root_candidate() {
    let addr = serve(site()).await;
    let loader = loader(addr, ContentSettings::default());

    assert_eq!(loader.section("hero").await.unwrap(), json!({"title": "X"}));
    assert!(loader.section("footer").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn reports_status_and_parse_failures_per_location() {
    let addr = serve(site()).await;
    let loader = loader(
        addr,
        ContentSettings::default().with_candidates(["missing.json", "broken.json"]),
    );

    match loader.section("hero").await.unwrap_err() {
        ContentError::Unreachable { failures } => {
            assert_eq!(failures[0].reason, FailureReason::Status(StatusCode::NOT_FOUND.as_u16()));
            assert!(matches!(failures[1].reason, FailureReason::Parse(_)));
        }
        other => panic!("expected unreachable, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_location_times_out_then_falls_through() {
    let addr = serve(site()).await;
    let loader = loader(
        addr,
        ContentSettings::default()
            .with_candidates(["/slow.json", "/data/data.json"])
            .with_timeout(Some(Duration::from_millis(200))),
    );

    assert_eq!(loader.section("navbar").await.unwrap(), json!({"logo": "Y"}));
}
