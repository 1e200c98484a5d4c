use crate::config::env::{self, EnvKey};
use serde::Deserialize;
use std::path::PathBuf;

/// Runtime configuration, resolved from the environment once at startup.
#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    /// Working directory the pipeline programs are launched from.
    pub pipeline_dir: PathBuf,
    /// Append-only run log that receives the completion line.
    pub log_file: PathBuf,
    /// Interpreter used to launch the step scripts.
    pub python_bin: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, std::env::VarError> {
        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            pipeline_dir: PathBuf::from(env::get(EnvKey::PipelineDir)?),
            log_file: PathBuf::from(env::get(EnvKey::LogFile)?),
            python_bin: env::get_or(EnvKey::PythonBin, "python3"),
        })
    }
}
