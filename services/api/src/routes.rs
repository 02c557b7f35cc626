use crate::infra::AppState;
use crate::page::FormView;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Extension, Form, Json, Router};
use flames::calculator::{
    Category, EliminationStep, NormalizedName, OutcomeKind, Reading, RemainingLetters,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::Ordering;
use tracing::debug;

/// Fields posted by the name form. Absent fields count as empty names.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct NameForm {
    #[serde(default)]
    pub(crate) name1: String,
    #[serde(default)]
    pub(crate) name2: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FlamesRequest {
    #[serde(default)]
    pub(crate) name1: String,
    #[serde(default)]
    pub(crate) name2: String,
    #[serde(default)]
    pub(crate) include_steps: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct NormalizedPair {
    pub(crate) name1: NormalizedName,
    pub(crate) name2: NormalizedName,
}

#[derive(Debug, Serialize)]
pub(crate) struct FlamesResponse {
    pub(crate) outcome: OutcomeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) letter: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) label: Option<&'static str>,
    pub(crate) message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) tally: Option<usize>,
    pub(crate) normalized: NormalizedPair,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) remaining: Option<RemainingLetters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) steps: Option<Vec<EliminationStep>>,
}

impl FlamesResponse {
    pub(crate) fn from_reading(reading: Reading, include_steps: bool) -> Self {
        let category = reading.outcome.category();
        let tally = reading.tally();
        let remaining = reading.remaining();
        let Reading {
            first,
            second,
            steps,
            outcome,
            ..
        } = reading;

        Self {
            outcome: outcome.kind(),
            category,
            letter: category.map(Category::letter),
            label: category.map(Category::label),
            message: outcome.to_string(),
            tally,
            normalized: NormalizedPair {
                name1: first,
                name2: second,
            },
            remaining,
            steps: include_steps.then_some(steps),
        }
    }
}

pub(crate) fn flames_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(form_page).post(submit_form))
        .route("/reset", post(reset_form))
        .route("/api/v1/flames", post(flames_endpoint))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .layer(Extension(state))
}

pub(crate) async fn form_page(Extension(state): Extension<AppState>) -> Html<String> {
    Html(FormView::blank(&state.form.placeholder).render())
}

pub(crate) async fn submit_form(Form(form): Form<NameForm>) -> Html<String> {
    let reading = flames::evaluate(&form.name1, &form.name2);
    debug!(
        outcome = reading.outcome.kind().label(),
        tally = ?reading.tally(),
        "form submitted"
    );

    let result = reading.outcome.to_string();
    let view = FormView {
        name1: &form.name1,
        name2: &form.name2,
        result: &result,
    };
    Html(view.render())
}

pub(crate) async fn reset_form(Extension(state): Extension<AppState>) -> Html<String> {
    debug!("form reset");
    Html(FormView::blank(&state.form.placeholder).render())
}

pub(crate) async fn flames_endpoint(Json(payload): Json<FlamesRequest>) -> Json<FlamesResponse> {
    let FlamesRequest {
        name1,
        name2,
        include_steps,
    } = payload;

    let reading = flames::evaluate(&name1, &name2);
    debug!(
        outcome = reading.outcome.kind().label(),
        tally = ?reading.tally(),
        "flames computed"
    );

    Json(FlamesResponse::from_reading(reading, include_steps))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::test_state;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn read_body(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }

    fn form_request(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("request")
    }

    fn json_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/flames")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::to_vec(&body).expect("serialize request"),
            ))
            .expect("request")
    }

    #[tokio::test]
    async fn form_page_shows_placeholder() {
        let router = flames_router(test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let html = read_body(response).await;
        assert!(html.contains("Result will appear here"));
    }

    #[tokio::test]
    async fn submitting_the_form_renders_the_result() {
        let router = flames_router(test_state());
        let response = router
            .oneshot(form_request("/", "name1=David&name2=Maria"))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let html = read_body(response).await;
        assert!(html.contains("Your relationship: Marriage (M)"));
        assert!(html.contains(r#"value="David""#));
        assert!(html.contains(r#"value="Maria""#));
    }

    #[tokio::test]
    async fn missing_form_fields_are_invalid_input() {
        let router = flames_router(test_state());
        let response = router
            .oneshot(form_request("/", "name1=David"))
            .await
            .expect("router dispatch");

        let html = read_body(response).await;
        assert!(html.contains("Please enter both valid names (letters only)."));
    }

    #[tokio::test]
    async fn reset_clears_names_and_restores_placeholder() {
        let router = flames_router(test_state());
        let response = router
            .oneshot(form_request("/reset", "name1=David&name2=Maria"))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let html = read_body(response).await;
        assert!(html.contains("Result will appear here"));
        assert!(!html.contains("David"));
        assert!(!html.contains("Marriage"));
    }

    #[tokio::test]
    async fn json_endpoint_reports_category_and_trace() {
        let router = flames_router(test_state());
        let response = router
            .oneshot(json_request(json!({
                "name1": "David",
                "name2": "Maria",
                "include_steps": true,
            })))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let payload: Value = serde_json::from_str(&read_body(response).await).expect("json");
        assert_eq!(payload["outcome"], json!("categorized"));
        assert_eq!(payload["category"], json!("marriage"));
        assert_eq!(payload["letter"], json!("M"));
        assert_eq!(payload["label"], json!("Marriage"));
        assert_eq!(payload["message"], json!("Your relationship: Marriage (M)"));
        assert_eq!(payload["tally"], json!(6));
        assert_eq!(payload["normalized"]["name1"], json!("david"));
        assert_eq!(payload["remaining"]["second"], json!("mra"));
        assert_eq!(payload["steps"].as_array().map(Vec::len), Some(5));
        assert_eq!(payload["steps"][0]["removed"], json!("siblings"));
    }

    #[tokio::test]
    async fn json_endpoint_reports_degenerate_outcomes() {
        let router = flames_router(test_state());
        let response = router
            .clone()
            .oneshot(json_request(json!({ "name1": "ab", "name2": "ba" })))
            .await
            .expect("router dispatch");
        let payload: Value = serde_json::from_str(&read_body(response).await).expect("json");
        assert_eq!(payload["outcome"], json!("fully_matched"));
        assert_eq!(payload["tally"], json!(0));
        assert!(payload.get("category").is_none());
        assert!(payload.get("steps").is_none());

        let response = router
            .oneshot(json_request(json!({ "name1": "123", "name2": "Bob" })))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        let payload: Value = serde_json::from_str(&read_body(response).await).expect("json");
        assert_eq!(payload["outcome"], json!("invalid_input"));
        assert!(payload.get("tally").is_none());
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let router = flames_router(test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/flames")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn readiness_follows_flag() {
        let state = test_state();
        let router = flames_router(state.clone());

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/ready")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        state.readiness.store(true, Ordering::Release);
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/ready")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }
}
