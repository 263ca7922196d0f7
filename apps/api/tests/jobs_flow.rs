mod common;

use anyhow::Result;
use axum::http::StatusCode;
use common::{json_body, TestApp};
use serde_json::{json, Value};

#[tokio::test]
async fn every_seed_job_is_reachable_by_id() -> Result<()> {
    let app = TestApp::new()?;

    let response = app.get("/api/jobs").await?;
    assert_eq!(response.status(), StatusCode::OK);
    let jobs: Vec<Value> = json_body(response).await?;
    assert_eq!(jobs.len(), 3);

    for job in &jobs {
        let id = job["id"].as_str().unwrap();
        let response = app.get(&format!("/api/jobs/{id}")).await?;
        assert_eq!(response.status(), StatusCode::OK);
        let fetched: Value = json_body(response).await?;
        assert_eq!(fetched["id"], id);
    }
    Ok(())
}

#[tokio::test]
async fn status_filter_returns_only_matching_jobs() -> Result<()> {
    let app = TestApp::new()?;
    let all: Vec<Value> = json_body(app.get("/api/jobs").await?).await?;

    for status in ["nova", "candidatada", "entrevista", "rejeitada", "ignorada"] {
        let response = app.get(&format!("/api/jobs?status={status}")).await?;
        assert_eq!(response.status(), StatusCode::OK);
        let filtered: Vec<Value> = json_body(response).await?;
        assert!(filtered.len() <= all.len());
        assert!(filtered.iter().all(|j| j["status"] == status));
    }
    Ok(())
}

#[tokio::test]
async fn platform_and_status_filters_combine() -> Result<()> {
    let app = TestApp::new()?;

    let jobs: Vec<Value> = json_body(app.get("/api/jobs?platform=gupy&status=all").await?).await?;
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0]["company"], "StartupXYZ");

    let jobs: Vec<Value> =
        json_body(app.get("/api/jobs?platform=Gupy&status=nova").await?).await?;
    assert!(jobs.is_empty());

    let response = app.get("/api/jobs?status=arquivada").await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn unknown_job_is_not_found() -> Result<()> {
    let app = TestApp::new()?;

    let response = app.get("/api/jobs/999").await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response).await?;
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let response = app.post_empty("/api/jobs/999/analyze").await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn status_update_is_visible_on_next_read() -> Result<()> {
    let app = TestApp::new()?;

    let job: Value = json_body(app.get("/api/jobs/1").await?).await?;
    assert_eq!(job["title"], "Desenvolvedor Python Júnior");
    assert_eq!(job["company"], "TechCorp");
    assert_eq!(job["status"], "nova");

    let response = app
        .put_json("/api/jobs/1/status", &json!({"status": "candidatada"}))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let job: Value = json_body(app.get("/api/jobs/1").await?).await?;
    assert_eq!(job["status"], "candidatada");
    assert_eq!(job["version"], 2);
    Ok(())
}

#[tokio::test]
async fn unrecognized_status_is_rejected() -> Result<()> {
    let app = TestApp::new()?;

    let response = app
        .put_json("/api/jobs/1/status", &json!({"status": "qualquer-coisa"}))
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response).await?;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let job: Value = json_body(app.get("/api/jobs/1").await?).await?;
    assert_eq!(job["status"], "nova");

    let response = app
        .put_json("/api/jobs/404/status", &json!({"status": "ignorada"}))
        .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn stale_expected_version_conflicts() -> Result<()> {
    let app = TestApp::new()?;

    let response = app
        .put_json(
            "/api/jobs/2/status",
            &json!({"status": "entrevista", "expected_version": 1}),
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .put_json(
            "/api/jobs/2/status",
            &json!({"status": "rejeitada", "expected_version": 1}),
        )
        .await?;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let job: Value = json_body(app.get("/api/jobs/2").await?).await?;
    assert_eq!(job["status"], "entrevista");
    Ok(())
}

#[tokio::test]
async fn analyze_returns_canned_score() -> Result<()> {
    let app = TestApp::new()?;

    let response = app.post_empty("/api/jobs/2/analyze").await?;
    assert_eq!(response.status(), StatusCode::OK);
    let analysis: Value = json_body(response).await?;
    assert_eq!(analysis["compatibility"], 92);
    assert_eq!(analysis["priority"], "high");
    assert_eq!(analysis["should_apply"], true);
    Ok(())
}

#[tokio::test]
async fn search_without_body_returns_all_seed_jobs() -> Result<()> {
    let app = TestApp::new()?;

    let response = app.post_empty("/api/jobs/search").await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response).await?;
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Busca iniciada");
    assert_eq!(body["total"], 3);
    Ok(())
}

#[tokio::test]
async fn search_filters_by_platform_and_keyword() -> Result<()> {
    let app = TestApp::new()?;

    let body: Value = json_body(
        app.post_json(
            "/api/jobs/search",
            &json!({"platforms": ["linkedin", "gupy"], "keywords": ["typescript"]}),
        )
        .await?,
    )
    .await?;
    assert_eq!(body["total"], 1);
    assert_eq!(body["jobs"][0]["id"], "2");

    // Search never adds jobs.
    let jobs: Vec<Value> = json_body(app.get("/api/jobs").await?).await?;
    assert_eq!(jobs.len(), 3);
    Ok(())
}

#[tokio::test]
async fn ill_typed_search_body_is_rejected() -> Result<()> {
    let app = TestApp::new()?;

    let response = app
        .post_raw("/api/jobs/search", r#"{"platforms":"gupy"}"#)
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response).await?;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let response = app.post_raw("/api/jobs/search", "{not json").await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn list_supports_search_min_score_and_paging() -> Result<()> {
    let app = TestApp::new()?;

    let jobs: Vec<Value> = json_body(app.get("/api/jobs?search=typescript").await?).await?;
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0]["id"], "2");

    let jobs: Vec<Value> = json_body(app.get("/api/jobs?min_score=80").await?).await?;
    let ids: Vec<&str> = jobs.iter().filter_map(|j| j["id"].as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);

    let jobs: Vec<Value> =
        json_body(app.get("/api/jobs?search=remote&min_score=90").await?).await?;
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0]["id"], "2");

    let jobs: Vec<Value> = json_body(app.get("/api/jobs?limit=1&offset=1").await?).await?;
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0]["id"], "2");

    let jobs: Vec<Value> = json_body(app.get("/api/jobs?offset=5").await?).await?;
    assert!(jobs.is_empty());

    let response = app.get("/api/jobs?min_score=abc").await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response).await?;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    Ok(())
}
