//! End-to-end lookups through the real directory client against a local
//! directory service, with image existence answered in-process.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{Body, to_bytes};
use axum::extract::Path;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tower::ServiceExt;

use gtavatar::application::LookupAvatarsUseCase;
use gtavatar::domain::entities::{AvatarLookup, EditionAvatars, PlayerToken};
use gtavatar::domain::errors::ProbeError;
use gtavatar::domain::ports::{ImageProbePort, ProbeOutcome};
use gtavatar::infrastructure::DirectoryClient;
use gtavatar::infrastructure::config::DirectoryConfig;
use gtavatar::presentation::build_router;

const LEGACY_0: &str = "https://prod.cloud.rockstargames.com/members/sc/6266/{id}/publish/gta5/mpchars/0.png";
const LEGACY_1: &str = "https://prod.cloud.rockstargames.com/members/sc/6266/{id}/publish/gta5/mpchars/1.png";
const ENHANCED_0: &str =
    "https://prod.cloud.rockstargames.com/members/sc/0807/{id}/publish/gta5/mpchars/0_pcrosalt.png";
const ENHANCED_1: &str =
    "https://prod.cloud.rockstargames.com/members/sc/0807/{id}/publish/gta5/mpchars/1_pcrosalt.png";

fn url(template: &str, id: &str) -> String {
    template.replace("{id}", id)
}

#[derive(Default)]
struct RecordingProbe {
    existing: HashSet<String>,
    calls: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

impl RecordingProbe {
    fn with_existing(urls: &[String]) -> Self {
        Self {
            existing: urls.iter().cloned().collect(),
            ..Self::default()
        }
    }
}

#[async_trait]
impl ImageProbePort for RecordingProbe {
    async fn probe(&self, url: &str) -> Result<ProbeOutcome, ProbeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(url.to_string());
        Ok(if self.existing.contains(url) {
            ProbeOutcome::Found
        } else {
            ProbeOutcome::Missing { status: 404 }
        })
    }
}

async fn directory_service() -> String {
    let router = Router::new()
        .route(
            "/r/:id",
            get(|Path(id): Path<String>| async move {
                match id.as_str() {
                    "12345" => (StatusCode::OK, Json(json!({ "name": "Driver" }))),
                    _ => (StatusCode::NOT_FOUND, Json(Value::Null)),
                }
            }),
        )
        .route(
            "/n/:name",
            get(|Path(name): Path<String>| async move {
                match name.as_str() {
                    "Driver" => (StatusCode::OK, Json(json!({ "id": 67890 }))),
                    "Bob" => (StatusCode::OK, Json(json!([{ "id": "5", "name": "Bob" }]))),
                    _ => (StatusCode::NOT_FOUND, Json(Value::Null)),
                }
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn use_case(base_url: &str, probe: Arc<RecordingProbe>) -> LookupAvatarsUseCase {
    let directory = DirectoryClient::new(&DirectoryConfig {
        base_url: base_url.to_string(),
        timeout_secs: 2,
        ..DirectoryConfig::default()
    })
    .unwrap();
    LookupAvatarsUseCase::new(Arc::new(directory), probe)
}

fn token(raw: &str) -> PlayerToken {
    PlayerToken::parse(raw).unwrap()
}

#[tokio::test]
async fn test_numeric_token_with_every_avatar() {
    let base = directory_service().await;
    let all = [
        url(LEGACY_0, "12345"),
        url(LEGACY_1, "12345"),
        url(ENHANCED_0, "12345"),
        url(ENHANCED_1, "12345"),
    ];
    let probe = Arc::new(RecordingProbe::with_existing(&all));

    let lookup = use_case(&base, probe.clone()).execute(&token("12345")).await;

    let expected: AvatarLookup = serde_json::from_value(json!({
        "legacy": { "primary": all[0], "secondary": all[1] },
        "enhanced": { "primary": all[2], "secondary": all[3] },
        "id": "12345",
        "name": "Driver"
    }))
    .unwrap();
    assert_eq!(lookup, expected);
    assert_eq!(probe.calls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_name_token_with_second_legacy_slot_only() {
    let base = directory_service().await;
    let slot1 = url(LEGACY_1, "67890");
    let probe = Arc::new(RecordingProbe::with_existing(&[slot1.clone()]));

    let lookup = use_case(&base, probe).execute(&token("Driver")).await;

    assert_eq!(
        lookup.legacy,
        EditionAvatars {
            primary: Some(slot1.clone()),
            secondary: Some(slot1),
        }
    );
    assert_eq!(lookup.enhanced, EditionAvatars::default());
    assert_eq!(lookup.id.unwrap().as_str(), "67890");
    assert_eq!(lookup.name.as_deref(), Some("Driver"));
}

#[tokio::test]
async fn test_list_shaped_directory_answer() {
    let base = directory_service().await;
    let probe = Arc::new(RecordingProbe::default());

    let lookup = use_case(&base, probe.clone()).execute(&token("Bob")).await;

    assert_eq!(lookup.id.as_ref().unwrap().as_str(), "5");
    assert_eq!(lookup.name.as_deref(), Some("Bob"));
    assert!(!lookup.has_avatars());
    assert!(
        probe
            .seen
            .lock()
            .unwrap()
            .iter()
            .all(|u| u.contains("/5/publish/"))
    );
}

#[tokio::test]
async fn test_unknown_name_never_probes() {
    let base = directory_service().await;
    let probe = Arc::new(RecordingProbe::default());

    let lookup = use_case(&base, probe.clone()).execute(&token("Nobody")).await;

    assert_eq!(lookup, AvatarLookup::default());
    assert_eq!(probe.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_directory_outage_yields_empty_record() {
    let probe = Arc::new(RecordingProbe::default());

    let lookup = use_case("http://127.0.0.1:9", probe.clone())
        .execute(&token("Driver"))
        .await;

    assert_eq!(lookup, AvatarLookup::default());
    assert_eq!(probe.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_http_endpoint_contract() {
    let base = directory_service().await;
    let probe = Arc::new(RecordingProbe::with_existing(&[url(ENHANCED_0, "67890")]));
    let router = build_router(Arc::new(use_case(&base, probe)));

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/rockstar?player=Driver")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value =
        serde_json::from_slice(&to_bytes(response.into_body(), usize::MAX).await.unwrap())
            .unwrap();
    assert_eq!(body["enhanced"]["primary"], url(ENHANCED_0, "67890"));
    assert!(body["enhanced"]["secondary"].is_null());
    assert_eq!(body["id"], "67890");

    let response = router
        .oneshot(
            Request::builder()
                .uri("/api/rockstar?player=")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
