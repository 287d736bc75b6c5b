// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Internal-link detection inside rendered blip descriptions.
//!
//! Authors reference another blip by writing its display name into an href,
//! with or without a leading `#`:
//!
//! ```text
//! <a href="#JUnit">JUnit</a>
//! <a href="ASP.NET Core">our web stack</a>
//! ```
//!
//! Anything carrying a URL scheme separator stays an ordinary external link.

use crate::model::QuadrantDescriptor;
use crate::nav::Navigator;
use crate::surface::{QuadrantSelector, RenderSurface};

/// Classification of a hyperlink found in a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Cross-reference to another blip, carrying the resolved display name.
    Internal(String),
    /// Ordinary hyperlink; left untouched.
    External,
}

impl LinkTarget {
    /// A link is internal if its href is present, non-empty, and either starts
    /// with `#` or contains no `://`. The resolved name drops one leading `#`.
    ///
    /// Bare relative-looking hrefs are deliberately internal so authors can
    /// write either `#Name` or `Name`.
    pub fn classify(href: Option<&str>) -> Self {
        let Some(href) = href else {
            return Self::External;
        };
        if href.is_empty() {
            return Self::External;
        }
        if !href.starts_with('#') && href.contains("://") {
            return Self::External;
        }

        let name = href.strip_prefix('#').unwrap_or(href);
        Self::Internal(name.to_owned())
    }
}

/// A click on a link, with the two suppressions an interceptor must apply.
pub trait ClickEvent {
    fn prevent_default(&mut self);
    fn stop_propagation(&mut self);
}

/// Interceptor installed on an internal link.
pub type ClickHandler = Box<dyn FnMut(&mut dyn ClickEvent) + Send>;

/// One hyperlink-bearing element inside a description.
pub trait LinkElement {
    fn href(&self) -> Option<String>;

    /// Style hook distinguishing internal links from external ones.
    fn mark_internal(&mut self);

    fn set_click_interceptor(&mut self, handler: ClickHandler);
}

/// A rendered description container the scanner can walk.
pub trait DescriptionContainer {
    type Link: LinkElement;

    fn links_mut(&mut self) -> Vec<&mut Self::Link>;
}

/// Examines every hyperlink in the container exactly once and wires internal
/// ones up to the navigator.
///
/// Not idempotent: calling this twice on the same container re-attaches
/// interceptors. Call it once per rendered description instance.
pub fn setup_internal_links<C, S, Q>(
    container: &mut C,
    quadrants: &[QuadrantDescriptor],
    navigator: &Navigator<S, Q>,
) where
    C: DescriptionContainer,
    S: RenderSurface + Clone + Send + 'static,
    Q: QuadrantSelector + Clone + Send + 'static,
{
    for link in container.links_mut() {
        let LinkTarget::Internal(blip_name) = LinkTarget::classify(link.href().as_deref()) else {
            continue;
        };

        let navigator = navigator.clone();
        let quadrants = quadrants.to_vec();
        link.set_click_interceptor(Box::new(move |event| {
            event.prevent_default();
            event.stop_propagation();
            navigator.navigate_to_blip(&blip_name, &quadrants);
        }));
        link.mark_internal();
    }
}
