use std::sync::Arc;

use anyhow::{anyhow, Result};
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use job_automation_api::config::Config;
use job_automation_api::documents::MockDocumentGenerator;
use job_automation_api::routes::build_router;
use job_automation_api::state::AppState;
use job_automation_api::store::Store;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tower::util::ServiceExt;

/// A router over a freshly seeded store. Every test builds its own, so
/// mutations never leak between tests.
pub struct TestApp {
    pub state: AppState,
    router: Router,
}

// Each test binary compiles this module and uses only some of the helpers.
#[allow(dead_code)]
impl TestApp {
    pub fn new() -> Result<Self> {
        let store = Store::with_seed_data()?;
        let state = AppState::new(store, Arc::new(MockDocumentGenerator), Config::default());
        let router = build_router(state.clone());
        Ok(Self { state, router })
    }

    pub async fn send(&self, request: Request<Body>) -> Result<Response<Body>> {
        Ok(self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("infallible response"))
    }

    pub async fn get(&self, path: &str) -> Result<Response<Body>> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())?;
        self.send(request).await
    }

    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response<Body>> {
        self.send_json(Method::POST, path, payload).await
    }

    pub async fn put_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response<Body>> {
        self.send_json(Method::PUT, path, payload).await
    }

    pub async fn post_empty(&self, path: &str) -> Result<Response<Body>> {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .body(Body::empty())?;
        self.send(request).await
    }

    pub async fn post_raw(&self, path: &str, raw: &str) -> Result<Response<Body>> {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(raw.to_string()))?;
        self.send(request).await
    }

    async fn send_json<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        payload: &T,
    ) -> Result<Response<Body>> {
        let body = serde_json::to_vec(payload)?;
        let request = Request::builder()
            .method(method)
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body))?;
        self.send(request).await
    }
}

#[allow(dead_code)]
pub async fn body_to_vec(body: Body) -> Result<Vec<u8>> {
    let collected = body
        .collect()
        .await
        .map_err(|err| anyhow!("failed to read response body: {err}"))?;
    Ok(collected.to_bytes().to_vec())
}

#[allow(dead_code)]
pub async fn json_body<T: DeserializeOwned>(response: Response<Body>) -> Result<T> {
    let bytes = body_to_vec(response.into_body()).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
