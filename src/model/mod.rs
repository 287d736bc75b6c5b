// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only radar data model.
//!
//! Quadrants and blips are supplied by the external render/data layer; this
//! crate never creates, mutates, or destroys them during navigation.

mod blip;
mod ids;
mod quadrant;

pub use blip::Blip;
pub use ids::{BlipId, BlipIdTag, Id, IdError};
pub use quadrant::{Quadrant, QuadrantDescriptor};
