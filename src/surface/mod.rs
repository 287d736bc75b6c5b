// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Collaborator seams between navigation and the rendering technology.
//!
//! The render surface owns the element tree and the search feature's highlight
//! animation; the quadrant selector owns the visual transition between display
//! segments. Both are opaque to this crate beyond these traits.

use std::time::Duration;

use crate::model::BlipId;

/// The rendered element tree, keyed by blip id.
pub trait RenderSurface {
    /// Handle to an on-screen element. Handles outlive the navigation call
    /// because the deferred scroll runs after [`nav::SCROLL_DELAY`]; scrolling
    /// a since-detached handle must be a no-op, not a crash.
    ///
    /// [`nav::SCROLL_DELAY`]: crate::nav::SCROLL_DELAY
    type Element: Send + 'static;

    /// Returns the name-label element for a rendered blip, if any.
    fn find_blip_element(&self, blip_id: &BlipId) -> Option<Self::Element>;

    /// Re-triggers the highlight event the search feature uses.
    fn dispatch_highlight(&self, element: &Self::Element);

    /// Smoothly scrolls the element into view.
    fn scroll_into_view(&self, element: &Self::Element);
}

/// The quadrant-selection subsystem.
pub trait QuadrantSelector {
    /// Switches the active display quadrant. Side effects are fully owned by
    /// the selector.
    fn select_quadrant(&self, order: u32, start_angle: f64, name: &str);

    /// Suspends the external scroll-position tracker so it does not fight the
    /// highlight animation.
    fn remove_scroll_listener(&self);
}

/// A one-shot deferred scroll action.
pub type ScrollJob = Box<dyn FnOnce() + Send + 'static>;

/// Schedules the deferred scroll independently of the caller.
///
/// Jobs are fire-and-forget: they are not cancelled when the user navigates
/// again, and two rapid navigations may both schedule a job with the later
/// one winning visually.
pub trait ScrollScheduler {
    fn schedule(&self, delay: Duration, job: ScrollJob);
}

/// [`ScrollScheduler`] backed by the tokio timer.
///
/// Requires a running tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScrollScheduler;

impl ScrollScheduler for TokioScrollScheduler {
    fn schedule(&self, delay: Duration, job: ScrollJob) {
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            job();
        });
    }
}

/// The structural selector pattern a DOM-backed surface resolves blip ids
/// with: the item container carrying the id, narrowed to its name label.
pub fn blip_name_selector(blip_id: &BlipId) -> String {
    format!(
        ".blip-list__item-container[data-blip-id=\"{blip_id}\"] .blip-list__item-container__name"
    )
}

#[cfg(test)]
mod tests {
    use super::blip_name_selector;
    use crate::model::BlipId;

    #[test]
    fn selector_scopes_name_label_to_item_container() {
        let blip_id = BlipId::new("blip-42").expect("id");
        assert_eq!(
            blip_name_selector(&blip_id),
            ".blip-list__item-container[data-blip-id=\"blip-42\"] .blip-list__item-container__name"
        );
    }
}
