// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Placement plan serialization.
//!
//! This module renders the in-memory plan into the wire shape the backend
//! expects, and handles exporting a local copy of the plan in YAML and
//! JSON formats.

use crate::models::plan::{PlacementPlan, PlacementPoint};
use crate::util::timecode;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One mark in the submission payload: decimal seconds plus its points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    /// Seconds with two decimal places, e.g. `"5.00"`
    pub timestamp: String,
    pub points: Vec<PlacementPoint>,
}

/// Render the plan as payload entries, one per mark in selection order.
pub fn plan_entries(plan: &PlacementPlan) -> Vec<PlanEntry> {
    plan.marks()
        .iter()
        .map(|mark| PlanEntry {
            timestamp: timecode::wire_seconds(mark.seconds),
            points: mark.points.clone(),
        })
        .collect()
}

/// Encode payload entries as the JSON string carried in the `timestamps`
/// multipart field.
pub fn encode_entries(entries: &[PlanEntry]) -> serde_json::Result<String> {
    serde_json::to_string(entries)
}

/// On-disk copy of a plan, for record-keeping between sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanExport {
    pub video_filename: Option<String>,
    pub timestamps: Vec<PlanEntry>,
}

/// Export a plan copy to YAML format.
pub fn export_yaml(export: &PlanExport, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(export)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Export a plan copy to JSON format.
pub fn export_json(export: &PlanExport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(export)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn quad_plan() -> PlacementPlan {
        let mut plan = PlacementPlan::new();
        plan.add_mark(5.0);
        plan.add_mark(65.0);
        plan.add_point("00:00:05", 10.0, 10.0);
        plan.add_point("00:00:05", 90.0, 10.0);
        plan.add_point("00:00:05", 90.0, 90.0);
        plan.add_point("00:00:05", 10.0, 90.0);
        plan
    }

    #[test]
    fn test_entries_follow_selection_order() {
        let entries = plan_entries(&quad_plan());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].timestamp, "5.00");
        assert_eq!(entries[1].timestamp, "65.00");
        assert_eq!(entries[0].points.len(), 4);
        assert!(entries[1].points.is_empty());
    }

    #[test]
    fn test_encoded_payload_shape() {
        let encoded = encode_entries(&plan_entries(&quad_plan())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();

        let expected = json!([
            {
                "timestamp": "5.00",
                "points": [
                    {"x": 10.0, "y": 10.0},
                    {"x": 90.0, "y": 10.0},
                    {"x": 90.0, "y": 90.0},
                    {"x": 10.0, "y": 90.0},
                ],
            },
            {
                "timestamp": "65.00",
                "points": [],
            },
        ]);
        assert_eq!(value, expected);
    }

    #[test]
    fn test_empty_plan_encodes_to_empty_array() {
        let plan = PlacementPlan::new();
        assert_eq!(encode_entries(&plan_entries(&plan)).unwrap(), "[]");
    }

    #[test]
    fn test_export_json_roundtrip() {
        let export = PlanExport {
            video_filename: Some("abc123.mp4".to_string()),
            timestamps: plan_entries(&quad_plan()),
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.json");
        export_json(&export, &path).unwrap();

        let read: PlanExport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(read.video_filename.as_deref(), Some("abc123.mp4"));
        assert_eq!(read.timestamps, export.timestamps);
    }

    #[test]
    fn test_export_yaml_writes_file() {
        let export = PlanExport {
            video_filename: None,
            timestamps: Vec::new(),
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.yaml");
        export_yaml(&export, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("timestamps"));
    }
}
