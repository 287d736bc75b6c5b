// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Larissa — blip cross-link navigation for interactive tech radars.
//!
//! Authors embed hyperlinks inside blip descriptions that name another blip.
//! [`links::setup_internal_links`] classifies those links and intercepts their
//! clicks; [`nav::Navigator`] resolves the target name across quadrants and
//! drives the quadrant switch, highlight, and delayed scroll against the
//! collaborator seams in [`surface`].

pub mod diag;
pub mod links;
pub mod model;
pub mod nav;
pub mod store;
pub mod surface;

#[cfg(test)]
pub(crate) mod test_support;
