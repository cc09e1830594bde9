use std::fs;
use std::path::Path;

use crate::models::CycleData;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Load a profile/cycles/daily-logs snapshot exported by the data layer.
pub fn load(path: impl AsRef<Path>) -> Result<CycleData, SnapshotError> {
    let raw = fs::read(path)?;
    let data: CycleData = serde_json::from_slice(&raw)?;
    tracing::debug!(
        cycles = data.cycles.len(),
        daily_logs = data.daily_logs.len(),
        "snapshot loaded"
    );
    Ok(data)
}

pub fn save(path: impl AsRef<Path>, data: &CycleData) -> Result<(), SnapshotError> {
    fs::write(path, to_json(data)?)?;
    Ok(())
}

pub fn to_json(data: &CycleData) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(data)?)
}
