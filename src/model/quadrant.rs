// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::blip::Blip;

/// One of the radar's display segments, holding its blips in render order.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadrant {
    name: String,
    blips: Vec<Blip>,
}

impl Quadrant {
    pub fn new(name: impl Into<String>, blips: Vec<Blip>) -> Self {
        Self {
            name: name.into(),
            blips,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn blips(&self) -> &[Blip] {
        &self.blips
    }
}

/// A quadrant plus the selection parameters the visual transition needs.
///
/// Descriptors arrive as an ordered slice; that order is the tie-break for
/// duplicate blip names during resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadrantDescriptor {
    order: u32,
    start_angle: f64,
    quadrant: Quadrant,
}

impl QuadrantDescriptor {
    pub fn new(order: u32, start_angle: f64, quadrant: Quadrant) -> Self {
        Self {
            order,
            start_angle,
            quadrant,
        }
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    pub fn quadrant(&self) -> &Quadrant {
        &self.quadrant
    }
}
