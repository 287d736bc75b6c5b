// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Navigation from a resolved blip name to its on-screen element.
//!
//! One resolution attempt per click: search quadrants in order, switch the
//! active quadrant, re-trigger the search highlight, then scroll after a fixed
//! delay. Both miss cases (unknown name, unrendered element) are warnings.

use std::sync::Arc;
use std::time::Duration;

use crate::diag::DiagnosticSink;
use crate::model::{Blip, QuadrantDescriptor};
use crate::surface::{QuadrantSelector, RenderSurface, ScrollScheduler};

/// Delay before the matched element is scrolled into view.
///
/// The quadrant-switch animation has no completion signal, so the scroll waits
/// out a fixed window instead.
pub const SCROLL_DELAY: Duration = Duration::from_millis(1500);

/// Similarity floor (rapidfuzz ratio, 0..=100) below which a near-miss name is
/// not worth suggesting in the unresolved-name warning.
const SUGGESTION_MIN_RATIO: f64 = 70.0;

/// Drives the quadrant switch, highlight, and deferred scroll for one target.
pub struct Navigator<S, Q> {
    surface: S,
    selector: Q,
    scheduler: Arc<dyn ScrollScheduler + Send + Sync>,
    diagnostics: Arc<dyn DiagnosticSink + Send + Sync>,
}

impl<S: Clone, Q: Clone> Clone for Navigator<S, Q> {
    fn clone(&self) -> Self {
        Self {
            surface: self.surface.clone(),
            selector: self.selector.clone(),
            scheduler: Arc::clone(&self.scheduler),
            diagnostics: Arc::clone(&self.diagnostics),
        }
    }
}

impl<S, Q> Navigator<S, Q>
where
    S: RenderSurface + Clone + Send + 'static,
    Q: QuadrantSelector,
{
    pub fn new(
        surface: S,
        selector: Q,
        scheduler: Arc<dyn ScrollScheduler + Send + Sync>,
        diagnostics: Arc<dyn DiagnosticSink + Send + Sync>,
    ) -> Self {
        Self {
            surface,
            selector,
            scheduler,
            diagnostics,
        }
    }

    /// Brings the blip with the given display name (case-insensitive) into
    /// view, switching the active quadrant if necessary.
    ///
    /// Never fails: an unknown name or an unrendered element emits one warning
    /// and aborts the remaining steps for this click.
    pub fn navigate_to_blip(&self, blip_name: &str, quadrants: &[QuadrantDescriptor]) {
        let Some((descriptor, blip)) = find_blip(blip_name, quadrants) else {
            self.warn_unresolved_name(blip_name, quadrants);
            return;
        };

        self.selector.select_quadrant(
            descriptor.order(),
            descriptor.start_angle(),
            descriptor.quadrant().name(),
        );

        let blip_id = blip.blip_id();
        let Some(element) = self.surface.find_blip_element(blip_id) else {
            self.diagnostics.warn(&format!(
                "internal link: no rendered element for blip \"{blip_name}\" (id: {blip_id})"
            ));
            return;
        };

        self.selector.remove_scroll_listener();
        self.surface.dispatch_highlight(&element);

        let surface = self.surface.clone();
        self.scheduler.schedule(
            SCROLL_DELAY,
            Box::new(move || surface.scroll_into_view(&element)),
        );
    }

    fn warn_unresolved_name(&self, blip_name: &str, quadrants: &[QuadrantDescriptor]) {
        match closest_blip_name(blip_name, quadrants) {
            Some(candidate) => self.diagnostics.warn(&format!(
                "internal link: no blip named \"{blip_name}\" (closest match: \"{candidate}\")"
            )),
            None => self
                .diagnostics
                .warn(&format!("internal link: no blip named \"{blip_name}\"")),
        }
    }
}

/// First-match resolution across quadrants in slice order, blips in render
/// order. Comparison is Unicode-lowercase, so `#JUnit` and `#junit` resolve
/// identically.
pub fn find_blip<'a>(
    blip_name: &str,
    quadrants: &'a [QuadrantDescriptor],
) -> Option<(&'a QuadrantDescriptor, &'a Blip)> {
    let needle = blip_name.to_lowercase();
    for descriptor in quadrants {
        let matched = descriptor
            .quadrant()
            .blips()
            .iter()
            .find(|blip| blip.name_matches_lowercase(&needle));
        if let Some(blip) = matched {
            return Some((descriptor, blip));
        }
    }
    None
}

/// Best fuzzy candidate for an unresolved name, if any clears the floor.
/// First-seen wins ties, mirroring exact resolution.
pub fn closest_blip_name<'a>(
    blip_name: &str,
    quadrants: &'a [QuadrantDescriptor],
) -> Option<&'a str> {
    let needle = blip_name.to_lowercase();
    let mut best: Option<(f64, &str)> = None;

    for descriptor in quadrants {
        for blip in descriptor.quadrant().blips() {
            let haystack = blip.name().to_lowercase();
            // rapidfuzz's Rust API reports ratios in 0.0..=1.0; scale to the
            // 0..=100 range the floor is defined on.
            let ratio = rapidfuzz::fuzz::ratio(needle.chars(), haystack.chars()) * 100.0;
            if best.map_or(true, |(best_ratio, _)| ratio > best_ratio) {
                best = Some((ratio, blip.name()));
            }
        }
    }

    best.and_then(|(ratio, name)| (ratio >= SUGGESTION_MIN_RATIO).then_some(name))
}
