// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Larissa CLI entrypoint.
//!
//! Loads a radar export and navigates to a blip by display name against a
//! console-backed surface, so the full click-through sequence (quadrant
//! switch, highlight, delayed scroll) can be observed without a browser.

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use larissa::diag::TracingSink;
use larissa::model::{BlipId, QuadrantDescriptor};
use larissa::nav::{Navigator, SCROLL_DELAY};
use larissa::store::load_radar_export;
use larissa::surface::{
    blip_name_selector, QuadrantSelector, RenderSurface, TokioScrollScheduler,
};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <radar.json> <blip-name>\n\nLoads the radar export and navigates to the blip with the given display\nname (case-insensitive), printing each collaborator call as it happens.\nThe deferred scroll fires after {}ms.",
        SCROLL_DELAY.as_millis()
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    radar_path: PathBuf,
    blip_name: String,
}

fn parse_options(args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut radar_path = None;
    let mut blip_name = None;

    for arg in args {
        if arg.starts_with('-') {
            return Err(());
        }
        if radar_path.is_none() {
            radar_path = Some(PathBuf::from(arg));
        } else if blip_name.is_none() {
            blip_name = Some(arg);
        } else {
            return Err(());
        }
    }

    match (radar_path, blip_name) {
        (Some(radar_path), Some(blip_name)) => Ok(CliOptions {
            radar_path,
            blip_name,
        }),
        _ => Err(()),
    }
}

/// Surface whose "elements" are the structural selectors a DOM-backed radar
/// would query; every blip in the export counts as rendered.
#[derive(Clone)]
struct ConsoleSurface {
    blip_ids: Arc<Vec<BlipId>>,
}

impl ConsoleSurface {
    fn new(quadrants: &[QuadrantDescriptor]) -> Self {
        let blip_ids = quadrants
            .iter()
            .flat_map(|descriptor| descriptor.quadrant().blips())
            .map(|blip| blip.blip_id().clone())
            .collect();
        Self {
            blip_ids: Arc::new(blip_ids),
        }
    }
}

impl RenderSurface for ConsoleSurface {
    type Element = String;

    fn find_blip_element(&self, blip_id: &BlipId) -> Option<String> {
        self.blip_ids
            .iter()
            .find(|id| *id == blip_id)
            .map(blip_name_selector)
    }

    fn dispatch_highlight(&self, element: &String) {
        println!("highlight  {element}");
    }

    fn scroll_into_view(&self, element: &String) {
        println!("scroll     {element}");
    }
}

#[derive(Debug, Clone, Copy)]
struct ConsoleSelector;

impl QuadrantSelector for ConsoleSelector {
    fn select_quadrant(&self, order: u32, start_angle: f64, name: &str) {
        println!("quadrant   {name} (order {order}, start angle {start_angle})");
    }

    fn remove_scroll_listener(&self) {
        println!("listener   scroll tracking suspended");
    }
}

async fn run(options: CliOptions) -> Result<(), Box<dyn Error>> {
    let quadrants = load_radar_export(&options.radar_path)?;

    let navigator = Navigator::new(
        ConsoleSurface::new(&quadrants),
        ConsoleSelector,
        Arc::new(TokioScrollScheduler),
        Arc::new(TracingSink),
    );

    navigator.navigate_to_blip(&options.blip_name, &quadrants);

    // Keep the process alive until the deferred scroll has fired.
    tokio::time::sleep(SCROLL_DELAY + Duration::from_millis(250)).await;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "larissa".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    if let Err(err) = run(options).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
