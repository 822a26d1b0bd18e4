//! Export sweep results to CSV and JSON.
//!
//! CSV is meant for spreadsheets and scripts (`x,y,z,value,tier`); JSON keeps the
//! sweep axis and a generation timestamp alongside the rows.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Evaluation, SweepAxis};
use crate::error::{AppError, INTERNAL_EXIT_CODE};

/// JSON schema of an exported sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub axis: SweepAxis,
    pub rows: Vec<Evaluation>,
}

/// One evaluation as pretty-printed JSON.
pub fn evaluation_json(evaluation: &Evaluation) -> Result<String, AppError> {
    serde_json::to_string_pretty(evaluation)
        .map_err(|e| AppError::new(INTERNAL_EXIT_CODE, format!("Failed to encode result JSON: {e}")))
}

/// Write one CSV row per evaluation.
pub fn write_sweep_csv(path: &Path, rows: &[Evaluation]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush export CSV: {e}")))?;
    Ok(())
}

/// Write the sweep as pretty-printed JSON.
pub fn write_sweep_json(path: &Path, axis: SweepAxis, rows: &[Evaluation]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create sweep JSON '{}': {e}", path.display())))?;

    let sweep = SweepFile {
        tool: "funcascade".to_string(),
        generated_at: Utc::now(),
        axis,
        rows: rows.to_vec(),
    };

    serde_json::to_writer_pretty(file, &sweep)
        .map_err(|e| AppError::new(2, format!("Failed to write sweep JSON: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Tier;

    fn rows() -> Vec<Evaluation> {
        vec![
            Evaluation { x: 0.0, y: 1.0, z: 2.0, value: 1.5, tier: Tier::Primary },
            Evaluation { x: 0.5, y: 1.0, z: 2.0, value: -3.25, tier: Tier::ClosedForm },
        ]
    }

    #[test]
    fn csv_has_header_and_kebab_case_tiers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.csv");
        write_sweep_csv(&path, &rows()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "x,y,z,value,tier");
        assert_eq!(lines[1], "0.0,1.0,2.0,1.5,primary");
        assert_eq!(lines[2], "0.5,1.0,2.0,-3.25,closed-form");
    }

    #[test]
    fn evaluation_json_uses_field_names_and_tier_label() {
        let json = evaluation_json(&rows()[1]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["x"], 0.5);
        assert_eq!(value["value"], -3.25);
        assert_eq!(value["tier"], "closed-form");
    }

    #[test]
    fn json_records_axis_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.json");
        write_sweep_json(&path, SweepAxis::Y, &rows()).unwrap();

        let file = File::open(&path).unwrap();
        let sweep: SweepFile = serde_json::from_reader(file).unwrap();
        assert_eq!(sweep.tool, "funcascade");
        assert_eq!(sweep.axis, SweepAxis::Y);
        assert_eq!(sweep.rows, rows());
    }
}
