use anyhow::Context;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::state::Dashboard;

/// Write the flight and schedule CSV downloads for the current filters.
pub async fn write_exports(directory: &Path, dashboard: &Dashboard, today: NaiveDate) -> anyhow::Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(directory)
        .await
        .with_context(|| format!("creating export directory {}", directory.display()))?;

    let files = [
        (dashboard.operations.export_file_name().to_string(), dashboard.operations.export_csv()),
        (dashboard.schedule.export_file_name(today), dashboard.schedule.export_csv()),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (name, body) in files {
        let path = directory.join(name);
        tokio::fs::write(&path, body)
            .await
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::info!("Exported {}", path.display());
        written.push(path);
    }

    Ok(written)
}
