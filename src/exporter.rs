//! JSON export of the fleet report.

use std::path::Path;

use crate::errors::{FleetError, FleetResult};
use crate::models::FleetReport;

pub struct JsonExporter;

impl JsonExporter {
    /// Write the full report as pretty-printed JSON.
    pub fn export(report: &FleetReport, path: &Path) -> FleetResult<()> {
        let json = serde_json::to_string_pretty(report)?;
        std::fs::write(path, json).map_err(|e| FleetError::io(e, path.to_path_buf()))?;
        log::info!("Fleet report written to {:?}", path);
        Ok(())
    }
}
