use super::model::{PIPELINE_STEPS, PipelineStep, RunReport, StepReport};
use crate::common::clock;
use crate::config::settings::AppConfig;
use crate::infrastructure::exec::CommandRunner;
use anyhow::Result;
use tracing::{error, info, warn};
use uuid::Uuid;

pub struct PipelineService;

impl PipelineService {
    /// Run every step in order and collect what each one printed.
    ///
    /// Exit statuses are logged so failures are visible in the service log,
    /// but they never short-circuit the run: a step that fails (or cannot
    /// even be launched) still leaves its blob in the report and the next
    /// step runs anyway.
    pub async fn run(config: &AppConfig) -> RunReport {
        let id = Uuid::new_v4();
        let started_at = clock::now_local();
        info!("🎬 Starting automation run {}", id);

        let runner = CommandRunner::new();
        let mut steps = Vec::with_capacity(PIPELINE_STEPS.len());
        for step in PIPELINE_STEPS {
            steps.push(Self::run_step(config, &runner, step).await);
        }

        let finished_at = clock::now_local();
        info!("🏁 Automation run {} finished", id);

        RunReport {
            id,
            started_at,
            finished_at,
            steps,
        }
    }

    async fn run_step(config: &AppConfig, runner: &CommandRunner, step: PipelineStep) -> StepReport {
        info!(
            "▶️ {}: {} {} (cwd {})",
            step.label,
            config.python_bin,
            step.script,
            config.pipeline_dir.display()
        );

        match runner
            .run(&config.python_bin, &[step.script], &config.pipeline_dir)
            .await
        {
            Ok(captured) => {
                match captured.exit_code {
                    Some(0) => info!("{} exited 0", step.label),
                    Some(code) => warn!("{} exited {}", step.label, code),
                    None => warn!("{} was killed by a signal", step.label),
                }
                StepReport {
                    label: step.label.to_string(),
                    script: step.script.to_string(),
                    output: captured.combined(),
                    exit_code: captured.exit_code,
                }
            }
            Err(e) => {
                error!("{} did not start: {}", step.label, e);
                StepReport {
                    label: step.label.to_string(),
                    script: step.script.to_string(),
                    output: format!("{e}\n"),
                    exit_code: None,
                }
            }
        }
    }

    /// Trailing lines of the completion log, newest last.
    pub async fn tail_log(config: &AppConfig, lines: usize) -> Result<Vec<String>> {
        let contents = tokio::fs::read_to_string(&config.log_file).await?;
        let all: Vec<&str> = contents.lines().collect();
        let start = all.len().saturating_sub(lines);
        Ok(all[start..].iter().map(|line| line.to_string()).collect())
    }
}
