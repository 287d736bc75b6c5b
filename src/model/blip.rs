// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::BlipId;

/// A single entry plotted on the radar.
///
/// The display name is what authors reference from internal links; the id is
/// what the render surface keys its on-screen elements by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blip {
    blip_id: BlipId,
    name: String,
}

impl Blip {
    pub fn new(blip_id: BlipId, name: impl Into<String>) -> Self {
        Self {
            blip_id,
            name: name.into(),
        }
    }

    pub fn blip_id(&self) -> &BlipId {
        &self.blip_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case-insensitive display-name match against an already-lowercased needle.
    pub(crate) fn name_matches_lowercase(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase() == needle_lower
    }
}
