// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Loading radar exports into quadrant descriptors.
//!
//! The radar data layer exports one JSON document per radar; the demo CLI
//! loads it here. Quadrants keep their exported order.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::model::{Blip, BlipId, IdError, Quadrant, QuadrantDescriptor};

#[derive(Debug, Deserialize)]
struct RadarExport {
    quadrants: Vec<QuadrantExport>,
}

#[derive(Debug, Deserialize)]
struct QuadrantExport {
    order: u32,
    #[serde(rename = "startAngle")]
    start_angle: f64,
    name: String,
    blips: Vec<BlipExport>,
}

#[derive(Debug, Deserialize)]
struct BlipExport {
    id: String,
    name: String,
}

/// Parses a radar export document.
pub fn parse_radar_export(json: &str) -> Result<Vec<QuadrantDescriptor>, RadarExportError> {
    let export: RadarExport = serde_json::from_str(json).map_err(RadarExportError::Json)?;

    let mut quadrants = Vec::with_capacity(export.quadrants.len());
    for quadrant in export.quadrants {
        let mut blips = Vec::with_capacity(quadrant.blips.len());
        for blip in quadrant.blips {
            let blip_id = BlipId::new(blip.id).map_err(|source| RadarExportError::BlipId {
                blip_name: blip.name.clone(),
                source,
            })?;
            blips.push(Blip::new(blip_id, blip.name));
        }
        quadrants.push(QuadrantDescriptor::new(
            quadrant.order,
            quadrant.start_angle,
            Quadrant::new(quadrant.name, blips),
        ));
    }

    Ok(quadrants)
}

/// Reads and parses a radar export file.
pub fn load_radar_export(path: &Path) -> Result<Vec<QuadrantDescriptor>, RadarExportError> {
    let json = fs::read_to_string(path).map_err(RadarExportError::Io)?;
    parse_radar_export(&json)
}

#[derive(Debug)]
pub enum RadarExportError {
    Io(std::io::Error),
    Json(serde_json::Error),
    BlipId { blip_name: String, source: IdError },
}

impl fmt::Display for RadarExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read radar export: {err}"),
            Self::Json(err) => write!(f, "invalid radar export: {err}"),
            Self::BlipId { blip_name, source } => {
                write!(f, "invalid id for blip \"{blip_name}\": {source}")
            }
        }
    }
}

impl std::error::Error for RadarExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::BlipId { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_radar_export, RadarExportError};
    use crate::model::IdError;

    const EXPORT: &str = r#"{
        "quadrants": [
            {
                "order": 0,
                "startAngle": 90,
                "name": "Tools",
                "blips": [
                    { "id": "blip-1", "name": "JUnit" },
                    { "id": "blip-2", "name": "Gradle" }
                ]
            },
            {
                "order": 1,
                "startAngle": 0,
                "name": "Techniques",
                "blips": []
            }
        ]
    }"#;

    #[test]
    fn parses_quadrants_in_export_order() {
        let quadrants = parse_radar_export(EXPORT).expect("parse");
        assert_eq!(quadrants.len(), 2);

        assert_eq!(quadrants[0].order(), 0);
        assert_eq!(quadrants[0].start_angle(), 90.0);
        assert_eq!(quadrants[0].quadrant().name(), "Tools");
        assert_eq!(quadrants[0].quadrant().blips().len(), 2);
        assert_eq!(quadrants[0].quadrant().blips()[1].name(), "Gradle");

        assert_eq!(quadrants[1].quadrant().name(), "Techniques");
        assert!(quadrants[1].quadrant().blips().is_empty());
    }

    #[test]
    fn rejects_blank_blip_id() {
        let json = r#"{
            "quadrants": [
                {
                    "order": 0,
                    "startAngle": 0,
                    "name": "Tools",
                    "blips": [{ "id": "", "name": "JUnit" }]
                }
            ]
        }"#;

        let err = parse_radar_export(json).expect_err("blank id");
        match err {
            RadarExportError::BlipId { blip_name, source } => {
                assert_eq!(blip_name, "JUnit");
                assert_eq!(source, IdError::Empty);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_malformed_document() {
        let err = parse_radar_export("{\"quadrants\": 7}").expect_err("malformed");
        assert!(matches!(err, RadarExportError::Json(_)));
    }
}
