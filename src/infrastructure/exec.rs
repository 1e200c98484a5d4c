use std::io;
use std::path::Path;
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to launch {program}: {source}")]
    Spawn { program: String, source: io::Error },
}

/// Everything one external program produced: both streams plus the exit
/// code (`None` when the process was killed by a signal).
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
}

impl CapturedOutput {
    /// Single blob with stderr folded in after stdout, so cron mail and the
    /// test page show everything a step printed in one place.
    pub fn combined(&self) -> String {
        let mut blob = String::with_capacity(self.stdout.len() + self.stderr.len());
        blob.push_str(&self.stdout);
        blob.push_str(&self.stderr);
        blob
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Launches external programs and waits for them to finish.
#[derive(Debug, Clone, Default)]
pub struct CommandRunner;

impl CommandRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run `program` with `args` from `dir`, blocking until it exits.
    /// Nothing is passed on stdin and the exit status is returned, not
    /// interpreted.
    pub async fn run(
        &self,
        program: &str,
        args: &[&str],
        dir: &Path,
    ) -> Result<CapturedOutput, ExecError> {
        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| ExecError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let captured = CapturedOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        };
        debug!(program, exit_code = ?captured.exit_code, "command finished");
        Ok(captured)
    }
}
