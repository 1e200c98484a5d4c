use time::OffsetDateTime;
use uuid::Uuid;

/// One external program in the automation sequence.
#[derive(Debug, Clone, Copy)]
pub struct PipelineStep {
    pub label: &'static str,
    pub script: &'static str,
}

/// The fixed nightly sequence: write the video scripts, render the video,
/// upload the result. Order matters, nothing is skipped.
pub const PIPELINE_STEPS: [PipelineStep; 3] = [
    PipelineStep {
        label: "Content Pipeline",
        script: "content_pipeline.py",
    },
    PipelineStep {
        label: "Runway Generator",
        script: "runway_generator.py",
    },
    PipelineStep {
        label: "YouTube Uploader",
        script: "youtube_uploader.py",
    },
];

/// What a single step printed, plus how it exited.
#[derive(Debug, Clone)]
pub struct StepReport {
    pub label: String,
    pub script: String,
    /// Combined stdout + stderr blob, re-emitted as-is. Never parsed.
    pub output: String,
    /// `None` when the program could not be launched or died on a signal.
    pub exit_code: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub id: Uuid,
    pub started_at: OffsetDateTime,
    pub finished_at: OffsetDateTime,
    pub steps: Vec<StepReport>,
}
