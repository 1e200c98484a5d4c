use crate::modules::pipeline::dto::{LogResponse, RunResponse, StepResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::pipeline::handler::test_page,
        crate::modules::pipeline::handler::run_pipeline,
        crate::modules::pipeline::handler::tail_log,
    ),
    components(
        schemas(RunResponse, StepResponse, LogResponse)
    ),
    tags(
        (name = "Pipeline", description = "YouTube automation pipeline runner")
    )
)]
pub struct ApiDoc;
