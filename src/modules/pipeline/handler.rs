use super::dto::{LogQuery, LogResponse, RunResponse};
use super::render;
use super::service::PipelineService;
use crate::common::clock;
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::infrastructure::logfile;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};

/// Browser smoke test: run the pipeline and show each step's output
#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Rendered run report", content_type = "text/html", body = String)
    ),
    tag = "Pipeline"
)]
pub async fn test_page(State(state): State<AppState>) -> Html<String> {
    let report = PipelineService::run(&state.config).await;
    Html(render::html_page(&report))
}

/// Trigger a full automation run
#[utoipa::path(
    post,
    path = "/api/v1/pipeline/run",
    responses(
        (status = 200, description = "Run report", body = ApiResponse<RunResponse>),
        (status = 500, description = "Run log could not be written")
    ),
    tag = "Pipeline"
)]
pub async fn run_pipeline(State(state): State<AppState>) -> impl IntoResponse {
    let report = PipelineService::run(&state.config).await;

    // Same audit trail as a scheduled run: mark completion no matter how
    // the individual steps exited.
    match logfile::append_completion(&state.config.log_file, clock::now_local()) {
        Ok(()) => ApiSuccess(
            RunResponse::from(report),
            "Pipeline executed",
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => ApiError(
            format!("Pipeline ran but the run log was not updated: {e}"),
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .into_response(),
    }
}

/// Tail the completion log
#[utoipa::path(
    get,
    path = "/api/v1/pipeline/log",
    params(LogQuery),
    responses(
        (status = 200, description = "Trailing log lines", body = ApiResponse<LogResponse>),
        (status = 404, description = "Log file not found")
    ),
    tag = "Pipeline"
)]
pub async fn tail_log(
    State(state): State<AppState>,
    Query(query): Query<LogQuery>,
) -> impl IntoResponse {
    let lines = query.lines.unwrap_or(20);
    match PipelineService::tail_log(&state.config, lines).await {
        Ok(tail) => ApiSuccess(
            LogResponse {
                path: state.config.log_file.display().to_string(),
                lines: tail,
            },
            "Log retrieved",
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => ApiError(e.to_string(), StatusCode::NOT_FOUND).into_response(),
    }
}
