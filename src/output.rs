//! JSON report writing shared by the subcommands.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

/// Serializes `report` as pretty JSON to `path`, or to stdout when `None`.
pub fn write_json<T: Serialize>(report: &T, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    match path {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => {
            let mut out = std::io::stdout().lock();
            writeln!(out, "{json}").context("failed to write report to stdout")?;
        }
    }
    Ok(())
}
