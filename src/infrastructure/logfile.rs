use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use time::OffsetDateTime;
use tracing::debug;

use crate::common::clock;

/// Append the end-of-run marker to the run log. One line per run, format
/// `YYYY-MM-DD HH:MM:SS - Execution completed`. The file is created on
/// first use and only ever appended to.
pub fn append_completion(path: &Path, at: OffsetDateTime) -> io::Result<()> {
    let line = format!("{} - Execution completed\n", clock::format_timestamp(at));

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())?;

    debug!(path = %path.display(), "completion line appended");
    Ok(())
}
