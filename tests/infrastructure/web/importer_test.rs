use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::http::{StatusCode, header};
use axum::response::{Html, Redirect};
use axum::routing::get;

use contextify::application::ports::{WebImportError, WebImporter};
use contextify::infrastructure::web::HttpWebImporter;

async fn spawn_fixture(app: axum::Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn importer() -> HttpWebImporter {
    HttpWebImporter::new(Duration::from_secs(2)).expect("reqwest client should build")
}

#[tokio::test]
async fn given_html_response_when_fetching_then_returns_readable_text() {
    let fixture = axum::Router::new().route(
        "/page",
        get(|| async {
            Html(
                "<html><body><nav>Top navigation links</nav>\
                 <main><p>Fetched article content</p></main></body></html>",
            )
        }),
    );
    let addr = spawn_fixture(fixture).await;

    let result = importer()
        .fetch_readable_text(&format!("http://{addr}/page"))
        .await
        .unwrap();

    assert_eq!(result, "Fetched article content");
}

#[tokio::test]
async fn given_redirect_when_fetching_then_follows_to_target() {
    let fixture = axum::Router::new()
        .route("/old", get(|| async { Redirect::permanent("/new") }))
        .route(
            "/new",
            get(|| async {
                Html("<html><body><p>Redirected destination content</p></body></html>")
            }),
        );
    let addr = spawn_fixture(fixture).await;

    let result = importer()
        .fetch_readable_text(&format!("http://{addr}/old"))
        .await
        .unwrap();

    assert_eq!(result, "Redirected destination content");
}

#[tokio::test]
async fn given_forbidden_response_when_fetching_then_returns_blocked() {
    let fixture = axum::Router::new().route(
        "/private",
        get(|| async { (StatusCode::FORBIDDEN, "denied") }),
    );
    let addr = spawn_fixture(fixture).await;

    let result = importer()
        .fetch_readable_text(&format!("http://{addr}/private"))
        .await;

    assert!(matches!(result, Err(WebImportError::Blocked)));
}

#[tokio::test]
async fn given_server_error_when_fetching_then_returns_http_status() {
    let fixture = axum::Router::new().route(
        "/broken",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let addr = spawn_fixture(fixture).await;

    let result = importer()
        .fetch_readable_text(&format!("http://{addr}/broken"))
        .await;

    assert!(matches!(result, Err(WebImportError::HttpStatus(500))));
    assert_eq!(result.unwrap_err().to_string(), "URL returned HTTP 500");
}

#[tokio::test]
async fn given_json_content_type_when_fetching_then_returns_not_html() {
    let fixture = axum::Router::new().route(
        "/api",
        get(|| async { ([(header::CONTENT_TYPE, "application/json")], "{}") }),
    );
    let addr = spawn_fixture(fixture).await;

    let result = importer()
        .fetch_readable_text(&format!("http://{addr}/api"))
        .await;

    assert!(matches!(result, Err(WebImportError::NotHtml)));
}

#[tokio::test]
async fn given_blocked_extension_when_fetching_then_skips_network() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let fixture = axum::Router::new().route(
        "/report.PDF",
        get(move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Html("<p>never fetched</p>")
            }
        }),
    );
    let addr = spawn_fixture(fixture).await;

    let result = importer()
        .fetch_readable_text(&format!("http://{addr}/report.PDF"))
        .await;

    assert!(matches!(result, Err(WebImportError::NonHtmlFile)));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_missing_scheme_when_fetching_then_returns_invalid_url() {
    let result = importer().fetch_readable_text("example.com/page").await;

    assert!(matches!(result, Err(WebImportError::InvalidUrl)));
}

#[tokio::test]
async fn given_non_http_scheme_when_fetching_then_returns_invalid_url() {
    let result = importer()
        .fetch_readable_text("ftp://example.com/archive")
        .await;

    assert!(matches!(result, Err(WebImportError::InvalidUrl)));
}

#[tokio::test]
async fn given_unreachable_port_when_fetching_then_returns_fetch_failed() {
    let result = importer().fetch_readable_text("http://127.0.0.1:9/").await;

    assert!(matches!(result, Err(WebImportError::FetchFailed(_))));
}

#[tokio::test]
async fn given_slow_server_when_fetching_then_times_out() {
    let fixture = axum::Router::new().route(
        "/slow",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Html("<p>late response</p>")
        }),
    );
    let addr = spawn_fixture(fixture).await;

    let importer =
        HttpWebImporter::new(Duration::from_millis(300)).expect("reqwest client should build");
    let result = importer
        .fetch_readable_text(&format!("http://{addr}/slow"))
        .await;

    assert!(matches!(result, Err(WebImportError::FetchFailed(_))));
}
