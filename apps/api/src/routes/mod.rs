pub mod health;

use axum::{
    http::HeaderValue,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::analytics::handlers as analytics;
use crate::applications::handlers as applications;
use crate::jobs::handlers as jobs;
use crate::settings::handlers as settings;
use crate::state::AppState;

/// Local frontends allowed to call the API: the Vite dev server and the API's own port.
pub const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:8000"];

pub fn cors_layer() -> CorsLayer {
    let origins = ALLOWED_ORIGINS.map(HeaderValue::from_static);
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Jobs
        .route("/api/jobs", get(jobs::handle_list_jobs))
        .route("/api/jobs/search", post(jobs::handle_search_jobs))
        .route("/api/jobs/:id", get(jobs::handle_get_job))
        .route("/api/jobs/:id/analyze", post(jobs::handle_analyze_job))
        .route("/api/jobs/:id/status", put(jobs::handle_update_job_status))
        // Applications
        .route(
            "/api/applications",
            get(applications::handle_list_applications)
                .post(applications::handle_create_application),
        )
        .route(
            "/api/applications/:id",
            get(applications::handle_get_application),
        )
        .route(
            "/api/applications/:id/status",
            put(applications::handle_update_application_status),
        )
        .route(
            "/api/applications/:id/generate_resume",
            post(applications::handle_generate_resume),
        )
        .route(
            "/api/applications/:id/generate_cover_letter",
            post(applications::handle_generate_cover_letter),
        )
        .route(
            "/api/applications/:id/respond_questionnaire",
            post(applications::handle_respond_questionnaire),
        )
        // Settings
        .route(
            "/api/settings",
            get(settings::handle_get_settings).post(settings::handle_update_settings),
        )
        .route(
            "/api/settings/test_connection",
            post(settings::handle_test_connection),
        )
        .route(
            "/api/settings/system_info",
            get(settings::handle_system_info),
        )
        // Analytics
        .route("/api/analytics/stats", get(analytics::handle_stats))
        .layer(cors_layer())
        .with_state(state)
}
