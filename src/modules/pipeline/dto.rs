use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::model::{RunReport, StepReport};

#[derive(Debug, Serialize, ToSchema)]
pub struct StepResponse {
    pub label: String,
    pub script: String,
    /// Missing when the program could not be launched or died on a signal.
    pub exit_code: Option<i32>,
    pub output: String,
}

impl From<StepReport> for StepResponse {
    fn from(step: StepReport) -> Self {
        Self {
            label: step.label,
            script: step.script,
            exit_code: step.exit_code,
            output: step.output,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RunResponse {
    pub id: Uuid,
    #[serde(with = "time::serde::iso8601")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::iso8601")]
    pub finished_at: OffsetDateTime,
    pub steps: Vec<StepResponse>,
}

impl From<RunReport> for RunResponse {
    fn from(report: RunReport) -> Self {
        Self {
            id: report.id,
            started_at: report.started_at,
            finished_at: report.finished_at,
            steps: report.steps.into_iter().map(StepResponse::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct LogQuery {
    /// Number of trailing log lines to return (default 20)
    pub lines: Option<usize>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LogResponse {
    pub path: String,
    pub lines: Vec<String>,
}
