//! Integration tests for the business identifier worker API.
//!
//! These tests spin up a real server instance and make HTTP requests to verify
//! the complete request/response cycle.

use std::net::SocketAddr;
use std::sync::Arc;

use regex::Regex;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tokio::net::TcpListener;

use bizid_worker::api::{AppState, create_router};
use bizid_worker::checksum::luhn_control_digit;
use bizid_worker::checksum::national::regon_check_digit;
use bizid_worker::config::{AppConfig, GeneratorConfig, ObservabilityConfig, ServerConfig};

// ============================================================================
// Test Harness
// ============================================================================

/// Test server instance.
struct TestServer {
    addr: SocketAddr,
    client: Client,
}

impl TestServer {
    async fn new() -> Self {
        Self::with_seed(Some(20_260_123)).await
    }

    async fn with_seed(seed: Option<u64>) -> Self {
        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".parse().unwrap(),
                port: 0,
            },
            generator: GeneratorConfig {
                seed,
                max_count: 100,
            },
            observability: ObservabilityConfig {
                log_level: "warn".to_string(),
                log_format: "text".to_string(),
                metrics_enabled: true,
                metrics_path: "/metrics".to_string(),
            },
        };

        let state = AppState::new(Arc::new(config));
        let app = create_router(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server failed");
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Self {
            addr,
            client: Client::new(),
        }
    }

    fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url(), path))
            .send()
            .await
            .expect("Request failed")
    }

    async fn ids(&self, path: &str) -> Vec<String> {
        let response = self.get(path).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {path}");
        let body: ApiResponse<IdsData> = response.json().await.expect("Invalid JSON");
        assert_eq!(body.code, 0);
        body.data.expect("missing data").ids
    }
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    code: i32,
    message: String,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct IdsData {
    ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SchemesData {
    schemes: Vec<SchemeEntry>,
}

#[derive(Debug, Deserialize)]
struct SchemeEntry {
    scheme: String,
    check: String,
    policy: String,
}

fn digits(s: &str) -> Vec<u8> {
    s.bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

// ============================================================================
// Health Endpoints
// ============================================================================

#[tokio::test]
async fn test_health() {
    let server = TestServer::new().await;
    let response = server.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["status"], "healthy");
}

#[tokio::test]
async fn test_ready() {
    let server = TestServer::new().await;
    let response = server.get("/ready").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["ready"], true);
    assert_eq!(body["data"]["components"]["generator"], true);
    assert_eq!(body["data"]["schemes"], 16);
}

#[tokio::test]
async fn test_metrics() {
    let server = TestServer::new().await;
    let response = server.get("/metrics").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("bizid_up 1"));
}

#[tokio::test]
async fn test_request_id_propagated() {
    let server = TestServer::new().await;
    let response = server.get("/health").await;
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Scheme Listing
// ============================================================================

#[tokio::test]
async fn test_list_schemes() {
    let server = TestServer::new().await;
    let response = server.get("/v1/schemes").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: ApiResponse<SchemesData> = response.json().await.unwrap();
    let schemes = body.data.unwrap().schemes;
    assert_eq!(schemes.len(), 16);

    let norwegian = schemes
        .iter()
        .find(|s| s.scheme == "norwegian_organisation_number")
        .unwrap();
    assert_eq!(norwegian.check, "mod11");
    assert_eq!(norwegian.policy, "rejection");
}

// ============================================================================
// Identifier Generation
// ============================================================================

#[tokio::test]
async fn test_generate_single_by_default() {
    let server = TestServer::new().await;
    let ids = server.ids("/v1/id/ein").await;
    assert_eq!(ids.len(), 1);
    assert!(Regex::new(r"^\d{2}-\d{7}$").unwrap().is_match(&ids[0]));
}

#[tokio::test]
async fn test_generate_every_scheme() {
    let server = TestServer::new().await;
    let shapes = [
        ("ein", r"^\d{2}-\d{7}$"),
        ("duns_number", r"^\d{2}-\d{3}-\d{4}$"),
        ("spanish_organisation_number", r"^[ABCDEFGHJNPQRSUVW]\d{7}$"),
        ("swedish_organisation_number", r"^[12356789]\d[2-9]\d{7}$"),
        ("czech_organisation_number", r"^\d{8}$"),
        ("french_siren_number", r"^\d{9}$"),
        ("french_siret_number", r"^\d{9}00\d{3}$"),
        ("norwegian_organisation_number", r"^[89]\d{8}$"),
        ("australian_business_number", r"^\d{11}$"),
        ("polish_taxpayer_identification_number", r"^[1-9]{3}\d{7}$"),
        ("polish_register_of_national_economy", r"^\d{9}$"),
        ("brazilian_company_number", r"^\d{8}000[1-9]\d{2}$"),
        (
            "south_african_pty_ltd_registration_number",
            r"^\d{4}/\d{4,10}/07$",
        ),
        (
            "south_african_close_corporation_registration_number",
            r"^(CK\d{2}|\d{4})/\d{4,10}/23$",
        ),
        (
            "south_african_listed_company_registration_number",
            r"^\d{4}/\d{4,10}/06$",
        ),
        (
            "south_african_trust_registration_number",
            r"^IT\d{2,4}/\d{2,10}$",
        ),
    ];

    for (scheme, shape) in shapes {
        let re = Regex::new(shape).unwrap();
        let ids = server.ids(&format!("/v1/id/{scheme}?count=25")).await;
        assert_eq!(ids.len(), 25, "{scheme}");
        for id in ids {
            assert!(re.is_match(&id), "{scheme} produced {id}");
        }
    }
}

#[tokio::test]
async fn test_generated_siret_checks() {
    let server = TestServer::new().await;
    for id in server.ids("/v1/id/french_siret_number?count=50").await {
        let d = digits(&id);
        assert_eq!(luhn_control_digit(&d[..8]), d[8]);
        assert_eq!(luhn_control_digit(&d[..13]), d[13]);
    }
}

#[tokio::test]
async fn test_regon_lengths() {
    let server = TestServer::new().await;

    for length in [9usize, 14] {
        let ids = server
            .ids(&format!(
                "/v1/id/polish_register_of_national_economy?count=20&length={length}"
            ))
            .await;
        for id in ids {
            assert_eq!(id.len(), length);
            let d = digits(&id);
            let (last, prefix) = d.split_last().unwrap();
            assert_eq!(regon_check_digit(prefix), Some(*last), "{id}");
        }
    }
}

#[tokio::test]
async fn test_regon_invalid_length() {
    let server = TestServer::new().await;
    let response = server
        .get("/v1/id/polish_register_of_national_economy?length=10")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ApiResponse<serde_json::Value> = response.json().await.unwrap();
    assert_eq!(body.code, 1003);
    assert!(body.message.contains("Length should be 9 or 14"));
    assert!(body.data.is_none());
}

#[tokio::test]
async fn test_brazilian_formatted() {
    let server = TestServer::new().await;
    let re = Regex::new(r"^\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2}$").unwrap();

    let ids = server
        .ids("/v1/id/brazilian_company_number?count=10&formatted=true")
        .await;
    for id in ids {
        assert!(re.is_match(&id), "{id}");
    }
}

#[tokio::test]
async fn test_seeded_servers_agree() {
    let a = TestServer::with_seed(Some(7)).await;
    let b = TestServer::with_seed(Some(7)).await;

    let path = "/v1/id/norwegian_organisation_number?count=30";
    assert_eq!(a.ids(path).await, b.ids(path).await);
}

#[tokio::test]
async fn test_unseeded_server() {
    let server = TestServer::with_seed(None).await;
    let ids = server.ids("/v1/id/australian_business_number?count=5").await;
    assert!(ids.iter().all(|id| id.len() == 11));
}

// ============================================================================
// Error Cases
// ============================================================================

#[tokio::test]
async fn test_unknown_scheme() {
    let server = TestServer::new().await;
    let response = server.get("/v1/id/iban").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: ApiResponse<serde_json::Value> = response.json().await.unwrap();
    assert_eq!(body.code, 4001);
}

#[tokio::test]
async fn test_count_out_of_range() {
    let server = TestServer::new().await;

    let response = server.get("/v1/id/ein?count=0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ApiResponse<serde_json::Value> = response.json().await.unwrap();
    assert_eq!(body.code, 3001);

    let response = server.get("/v1/id/ein?count=101").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_query() {
    let server = TestServer::new().await;

    for path in [
        "/v1/id/ein?count=abc",
        "/v1/id/ein?count=-1",
        "/v1/id/polish_register_of_national_economy?length=x",
    ] {
        let response = server.get(path).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "GET {path}");
        assert!(
            response
                .headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v.starts_with("application/json")),
            "GET {path}: not json"
        );
        let body: ApiResponse<serde_json::Value> = response.json().await.unwrap();
        assert_eq!(body.code, 3001, "GET {path}");
        assert!(body.message.contains("query string"), "GET {path}: {}", body.message);
        assert!(body.data.is_none());
    }
}
