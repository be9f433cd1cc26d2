//! End-to-end tests for the HTTP surface
//!
//! The router runs against the in-memory store and a scripted completion
//! provider, so no network access is needed.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use archai_api::{create_router, AppState};
use archai_core::error::{ArchaiError, Result};
use archai_core::MaterialEstimator;
use archai_llm::{CompletionProvider, LayoutGenerator, ProviderStrategy};
use archai_store::{MemoryProjectStore, ProjectStore};
use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

const LAYOUTS: &str = r#"```json
{"layouts": [
  {"name": "Compact", "totalArea": 28,
   "rooms": [{"name": "Bedroom 1", "x": 0, "y": 0, "width": 4, "height": 2, "area": 8},
             {"name": "Living Room", "x": 4, "y": 0, "width": 5, "height": 4, "area": 20}]},
  {"name": "Open", "totalArea": 100,
   "rooms": [{"name": "Master Bedroom", "x": 0, "y": 0, "width": 4, "height": 4, "area": 16},
             {"name": "Kitchen", "x": 4, "y": 0, "width": 3, "height": 4, "area": 12},
             {"name": "Living", "x": 0, "y": 4, "width": 7, "height": 6, "area": 42},
             {"name": "Bath", "x": 7, "y": 0, "width": 2, "height": 3, "area": 6}]}
]}
```"#;

struct ScriptedProvider {
    reply: Option<&'static str>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    fn replying(text: &'static str) -> Arc<Self> {
        Arc::new(Self { reply: Some(text), calls: AtomicUsize::new(0) })
    }

    fn down() -> Arc<Self> {
        Arc::new(Self { reply: None, calls: AtomicUsize::new(0) })
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, _prompt: &str, _system: Option<&str>) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.map(str::to_string).ok_or_else(|| ArchaiError::ProviderUnavailable {
            provider: "scripted".to_string(),
            reason: "connection refused".to_string(),
        })
    }
}

struct TestApp {
    router: Router,
    store: MemoryProjectStore,
}

fn app_with(providers: Vec<Arc<ScriptedProvider>>) -> TestApp {
    let store = MemoryProjectStore::new();
    let generator = providers
        .into_iter()
        .fold(LayoutGenerator::new(3), |generator, provider| {
            generator.with_strategy(ProviderStrategy::new(provider))
        });

    let state = AppState::new(Arc::new(store.clone()), generator, MaterialEstimator::default());

    TestApp {
        router: create_router(Arc::new(state)),
        store,
    }
}

fn app() -> TestApp {
    app_with(vec![ScriptedProvider::replying(LAYOUTS)])
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).unwrap()
}

fn multipart_request(uri: &str, filename: &str, content: &str) -> Request<Body> {
    let boundary = "archai-test-boundary";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{f}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n{c}\r\n--{b}--\r\n",
        b = boundary,
        f = filename,
        c = content
    );

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap()
}

fn project_body() -> Value {
    json!({
        "name": "Lake House",
        "config": {
            "projectType": "residential",
            "siteConstraints": {"width": 18.0, "length": 12.0},
            "requiredSpaces": [
                {"name": "Bedroom", "quantity": 2, "minArea": 10.0},
                {"name": "Kitchen", "quantity": 1}
            ]
        }
    })
}

async fn create_project(router: &Router) -> String {
    let (status, body) = send(router, json_request(Method::POST, "/api/projects", project_body())).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

fn square_dxf(width: f64, length: f64) -> String {
    let line = |x1: f64, y1: f64, x2: f64, y2: f64| {
        format!("0\nLINE\n8\n0\n10\n{}\n20\n{}\n11\n{}\n21\n{}\n", x1, y1, x2, y2)
    };
    format!(
        "0\nSECTION\n2\nENTITIES\n{}{}{}{}0\nENDSEC\n0\nEOF\n",
        line(0.0, 0.0, width, 0.0),
        line(width, 0.0, width, length),
        line(width, length, 0.0, length),
        line(0.0, length, 0.0, 0.0)
    )
}

#[tokio::test]
async fn test_health_and_root() {
    let app = app();

    let (status, body) = send(&app.router, empty_request(Method::GET, "/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app.router, empty_request(Method::GET, "/api/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "ArchAI Backend API"}));
}

#[tokio::test]
async fn test_project_lifecycle() {
    let app = app();
    let id = create_project(&app.router).await;

    let (status, body) = send(&app.router, empty_request(Method::GET, &format!("/api/projects/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Lake House");
    assert_eq!(body["config"]["requiredSpaces"][0]["minArea"], 10.0);
    assert_eq!(body["floorPlans"], json!([]));
    assert_eq!(body["selectedPlanIndex"], 0);
    assert!(body["createdAt"].is_string());

    let (status, body) = send(&app.router, empty_request(Method::GET, "/api/projects")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let uri = format!("/api/projects/{}", id);
    let (status, body) = send(&app.router, empty_request(Method::DELETE, &uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (status, _) = send(&app.router, empty_request(Method::DELETE, &uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app.router, empty_request(Method::GET, &uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Project not found");
}

#[tokio::test]
async fn test_create_rejects_zero_quantity() {
    let app = app();
    let mut body = project_body();
    body["config"]["requiredSpaces"][0]["quantity"] = json!(0);

    let (status, response) = send(&app.router, json_request(Method::POST, "/api/projects", body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Invalid project configuration");
    assert!(response["details"].as_str().unwrap().contains("requiredSpaces[0].quantity"));
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_generate_persists_layouts_and_evaluation() {
    let app = app();
    let id = create_project(&app.router).await;

    let uri = format!("/api/projects/{}/generate", id);
    let (status, body) = send(&app.router, empty_request(Method::POST, &uri)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let plans = body["floorPlans"].as_array().unwrap();
    assert_eq!(plans.len(), 2);
    assert!(plans[0]["svgContent"].as_str().unwrap().starts_with("<svg"));
    assert_eq!(plans[0]["dimensions"], json!({"width": 18.0, "length": 12.0}));

    // First layout is evaluated: failing bedroom, passing living room, setbacks, doorways
    let checks = body["complianceChecks"].as_array().unwrap();
    assert_eq!(checks.len(), 4);
    assert_eq!(checks[0]["rule"], "Minimum Bedroom Size");
    assert_eq!(checks[0]["status"], "failed");
    assert_eq!(checks[1]["status"], "passed");
    assert_eq!(checks[2]["rule"], "Building Setbacks");
    assert_eq!(checks[3]["category"], "accessibility");

    assert_eq!(body["materials"].as_array().unwrap().len(), 8);

    let stored = app.store.get_project(&id).await.unwrap().unwrap();
    assert_eq!(stored.layouts.len(), 2);
    assert_eq!(stored.selected_index, 0);
    assert_eq!(stored.compliance_checks.len(), 4);
    assert!(stored.updated_at >= stored.created_at);
}

#[tokio::test]
async fn test_generate_failure_is_distinguishable() {
    let primary = ScriptedProvider::down();
    let secondary = ScriptedProvider::replying("I'm sorry, I can only describe floor plans in prose.");
    let app = app_with(vec![primary.clone(), secondary.clone()]);
    let id = create_project(&app.router).await;

    let uri = format!("/api/projects/{}/generate", id);
    let (status, body) = send(&app.router, empty_request(Method::POST, &uri)).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "AI generation failed");
    assert_eq!(primary.calls.load(Ordering::SeqCst), 1);
    assert_eq!(secondary.calls.load(Ordering::SeqCst), 1);

    let stored = app.store.get_project(&id).await.unwrap().unwrap();
    assert!(stored.layouts.is_empty());
}

#[tokio::test]
async fn test_generate_unknown_project() {
    let app = app();
    let (status, _) = send(&app.router, empty_request(Method::POST, "/api/projects/missing/generate")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_select_plan_recomputes_derived_lists() {
    let app = app();
    let id = create_project(&app.router).await;
    send(&app.router, empty_request(Method::POST, &format!("/api/projects/{}/generate", id))).await;

    let uri = format!("/api/projects/{}/select-plan/1", id);
    let (status, body) = send(&app.router, empty_request(Method::PUT, &uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let stored = app.store.get_project(&id).await.unwrap().unwrap();
    assert_eq!(stored.selected_index, 1);
    // Four rooms plus setbacks plus doorways, all passing
    assert_eq!(stored.compliance_checks.len(), 6);
    assert!(stored.compliance_checks.iter().all(|c| c.status.to_string() == "passed"));
    // Concrete for 100 m2 of floor
    assert!((stored.materials[0].quantity - 15.0).abs() < 1e-9);
    assert!((stored.materials[0].estimated_cost.unwrap() - 82500.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_select_plan_out_of_range() {
    let app = app();
    let id = create_project(&app.router).await;
    send(&app.router, empty_request(Method::POST, &format!("/api/projects/{}/generate", id))).await;

    let uri = format!("/api/projects/{}/select-plan/7", id);
    let (status, body) = send(&app.router, empty_request(Method::PUT, &uri)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid plan index");

    let stored = app.store.get_project(&id).await.unwrap().unwrap();
    assert_eq!(stored.selected_index, 0);
}

#[tokio::test]
async fn test_select_plan_without_layouts() {
    let app = app();
    let id = create_project(&app.router).await;

    let uri = format!("/api/projects/{}/select-plan/0", id);
    let (status, _) = send(&app.router, empty_request(Method::PUT, &uri)).await;
    assert_eq!(status, StatusCode::OK);

    let stored = app.store.get_project(&id).await.unwrap().unwrap();
    assert!(stored.compliance_checks.is_empty());
    assert!(stored.materials.is_empty());
}

#[tokio::test]
async fn test_upload_boundary_updates_site() {
    let app = app();
    let id = create_project(&app.router).await;

    let uri = format!("/api/projects/{}/upload-dxf", id);
    let (status, body) = send(&app.router, multipart_request(&uri, "plot.dxf", &square_dxf(24.0, 16.0))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"parsed": true, "width": 24.0, "length": 16.0, "area": 384.0}));

    let stored = app.store.get_project(&id).await.unwrap().unwrap();
    let site = &stored.config.site_constraints;
    assert_eq!(site.width, Some(24.0));
    assert_eq!(site.length, Some(16.0));
    assert_eq!(site.file_name.as_deref(), Some("plot.dxf"));
}

#[tokio::test]
async fn test_upload_unreadable_boundary_leaves_site() {
    let app = app();
    let id = create_project(&app.router).await;

    let uri = format!("/api/projects/{}/upload-dxf", id);
    let (status, body) = send(&app.router, multipart_request(&uri, "plot.dxf", "not a drawing")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["parsed"], false);
    assert!(body["error"].is_string());

    let stored = app.store.get_project(&id).await.unwrap().unwrap();
    assert_eq!(stored.config.site_constraints.width, Some(18.0));
    assert!(stored.config.site_constraints.file_name.is_none());
}

#[tokio::test]
async fn test_upload_rejects_other_formats() {
    let app = app();
    let id = create_project(&app.router).await;

    let uri = format!("/api/projects/{}/upload-dxf", id);
    let (status, body) = send(&app.router, multipart_request(&uri, "plot.dwg", "binary")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Only DXF files are supported");
}

/// Holds the completion open until the test releases it
struct GatedProvider {
    entered: tokio::sync::Notify,
    release: tokio::sync::Notify,
}

#[async_trait]
impl CompletionProvider for GatedProvider {
    fn name(&self) -> &str {
        "gated"
    }

    async fn complete(&self, _prompt: &str, _system: Option<&str>) -> Result<String> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(LAYOUTS.to_string())
    }
}

#[tokio::test]
async fn test_generate_keeps_boundary_uploaded_meanwhile() {
    let gate = Arc::new(GatedProvider {
        entered: tokio::sync::Notify::new(),
        release: tokio::sync::Notify::new(),
    });
    let store = MemoryProjectStore::new();
    let generator = LayoutGenerator::new(3).with_strategy(ProviderStrategy::new(gate.clone()));
    let state = AppState::new(Arc::new(store.clone()), generator, MaterialEstimator::default());
    let router = create_router(Arc::new(state));

    let id = create_project(&router).await;

    let generate_uri = format!("/api/projects/{}/generate", id);
    let generating = tokio::spawn(
        router
            .clone()
            .oneshot(empty_request(Method::POST, &generate_uri)),
    );
    gate.entered.notified().await;

    let upload_uri = format!("/api/projects/{}/upload-dxf", id);
    let (status, _) = send(&router, multipart_request(&upload_uri, "plot.dxf", &square_dxf(24.0, 16.0))).await;
    assert_eq!(status, StatusCode::OK);

    gate.release.notify_one();
    let response = generating.await.unwrap().unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let stored = store.get_project(&id).await.unwrap().unwrap();
    assert_eq!(stored.layouts.len(), 2);
    assert_eq!(stored.config.site_constraints.width, Some(24.0));
    assert_eq!(stored.config.site_constraints.length, Some(16.0));
    assert_eq!(stored.config.site_constraints.file_name.as_deref(), Some("plot.dxf"));
}

#[tokio::test]
async fn test_generate_for_project_deleted_meanwhile() {
    let gate = Arc::new(GatedProvider {
        entered: tokio::sync::Notify::new(),
        release: tokio::sync::Notify::new(),
    });
    let store = MemoryProjectStore::new();
    let generator = LayoutGenerator::new(3).with_strategy(ProviderStrategy::new(gate.clone()));
    let state = AppState::new(Arc::new(store.clone()), generator, MaterialEstimator::default());
    let router = create_router(Arc::new(state));

    let id = create_project(&router).await;

    let generate_uri = format!("/api/projects/{}/generate", id);
    let generating = tokio::spawn(
        router
            .clone()
            .oneshot(empty_request(Method::POST, &generate_uri)),
    );
    gate.entered.notified().await;

    let (status, _) = send(&router, empty_request(Method::DELETE, &format!("/api/projects/{}", id))).await;
    assert_eq!(status, StatusCode::OK);

    gate.release.notify_one();
    let response = generating.await.unwrap().unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(store.is_empty());
}
