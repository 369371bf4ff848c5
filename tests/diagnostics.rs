#![allow(clippy::unwrap_used)]

//! Failures that never surface to callers must still leave an ERROR record.

use anyhow::Result;
use hobbyhub::{
    features::{
        auth::{GuardDecision, NavigationGuard},
        hobbies::HobbiesStore,
    },
    routes,
    web::{ApiClient, AppConfig, SessionContext},
};
use serde_json::json;
use std::{
    io::{self, Write},
    net::TcpListener,
    sync::{Arc, Mutex},
    time::Duration,
};
use tracing::subscriber::DefaultGuard;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Route events on the current thread into this buffer until the guard drops.
    fn capture(&self) -> DefaultGuard {
        let buffer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || buffer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    fn assert_error_line(&self, needle: &str) {
        let logs = self.contents();
        assert!(
            logs.lines()
                .any(|line| line.contains("ERROR") && line.contains(needle)),
            "no ERROR line containing {needle:?} in:\n{logs}"
        );
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn api(uri: &str) -> ApiClient {
    let config = AppConfig::new(uri, Duration::from_millis(300)).unwrap();
    ApiClient::new(config, SessionContext::anonymous()).unwrap()
}

/// Base URL of a port that was just released, so connections are refused.
fn closed_port_uri() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

async fn serve(route: &str, response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn store_logs_transport_failure() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let logs = LogBuffer::default();
    let _guard = logs.capture();

    let store = HobbiesStore::new(api(&closed_port_uri()));
    store.refresh().await;

    assert!(store.hobbies().is_empty());
    logs.assert_error_line("Error fetching hobbies");
    Ok(())
}

#[tokio::test]
async fn store_logs_rejected_status() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = serve(
        "/api/hobbies/",
        ResponseTemplate::new(500).set_body_string("database unavailable"),
    )
    .await;
    let logs = LogBuffer::default();
    let _guard = logs.capture();

    let store = HobbiesStore::new(api(&server.uri()));
    store.refresh().await;

    assert!(!store.is_loading());
    logs.assert_error_line("Failed to fetch hobbies. Status: 500");
    Ok(())
}

#[tokio::test]
async fn store_logs_undecodable_body() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = serve(
        "/api/hobbies/",
        ResponseTemplate::new(200).set_body_json(json!({ "results": [] })),
    )
    .await;
    let logs = LogBuffer::default();
    let _guard = logs.capture();

    let store = HobbiesStore::new(api(&server.uri()));
    store.refresh().await;

    assert!(store.hobbies().is_empty());
    logs.assert_error_line("Error fetching hobbies");
    Ok(())
}

#[tokio::test]
async fn guard_logs_transport_failure() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let logs = LogBuffer::default();
    let _guard = logs.capture();

    let guard = NavigationGuard::new(api(&closed_port_uri()));
    let profile = routes::find("/profile").unwrap();
    let decision = guard.evaluate(profile).await;

    assert_eq!(decision, GuardDecision::Redirect("/login/".to_string()));
    logs.assert_error_line("Error during authentication check");
    Ok(())
}

#[tokio::test]
async fn guard_logs_rejected_status() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = serve("/api/authenticated/", ResponseTemplate::new(403)).await;
    let logs = LogBuffer::default();
    let _guard = logs.capture();

    let guard = NavigationGuard::new(api(&server.uri()));
    let profile = routes::find("/profile").unwrap();
    let decision = guard.evaluate(profile).await;

    assert_eq!(decision, GuardDecision::Redirect("/login/".to_string()));
    logs.assert_error_line("Authentication check rejected with status 403");
    Ok(())
}

#[tokio::test]
async fn guard_logs_undecodable_body() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = serve(
        "/api/authenticated/",
        ResponseTemplate::new(200).set_body_json(json!([true])),
    )
    .await;
    let logs = LogBuffer::default();
    let _guard = logs.capture();

    let guard = NavigationGuard::new(api(&server.uri()));
    let profile = routes::find("/profile").unwrap();
    let decision = guard.evaluate(profile).await;

    assert_eq!(decision, GuardDecision::Redirect("/login/".to_string()));
    logs.assert_error_line("Error during authentication check");
    Ok(())
}
