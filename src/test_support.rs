// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared fakes for the collaborator seams.
//!
//! All fakes append into one ordered call log so tests can assert the global
//! side-effect sequence across collaborators.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::model::{Blip, BlipId, Quadrant, QuadrantDescriptor};
use crate::surface::{QuadrantSelector, RenderSurface, ScrollJob, ScrollScheduler};

pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn log_entries(log: &CallLog) -> Vec<String> {
    log.lock().expect("call log").clone()
}

fn push(log: &CallLog, entry: String) {
    log.lock().expect("call log").push(entry);
}

/// Render surface whose elements are the blip ids of "rendered" blips.
#[derive(Clone)]
pub struct FakeSurface {
    rendered: Vec<String>,
    log: CallLog,
}

impl FakeSurface {
    pub fn new(log: CallLog, rendered: &[&str]) -> Self {
        Self {
            rendered: rendered.iter().map(|id| (*id).to_owned()).collect(),
            log,
        }
    }
}

impl RenderSurface for FakeSurface {
    type Element = String;

    fn find_blip_element(&self, blip_id: &BlipId) -> Option<String> {
        self.rendered
            .iter()
            .find(|id| id.as_str() == blip_id.as_str())
            .cloned()
    }

    fn dispatch_highlight(&self, element: &String) {
        push(&self.log, format!("highlight({element})"));
    }

    fn scroll_into_view(&self, element: &String) {
        push(&self.log, format!("scroll({element})"));
    }
}

#[derive(Clone)]
pub struct FakeSelector {
    log: CallLog,
}

impl FakeSelector {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl QuadrantSelector for FakeSelector {
    fn select_quadrant(&self, order: u32, start_angle: f64, name: &str) {
        push(&self.log, format!("select_quadrant({order},{start_angle},{name})"));
    }

    fn remove_scroll_listener(&self) {
        push(&self.log, "remove_scroll_listener".to_owned());
    }
}

/// Captures scheduled jobs instead of deferring them, so tests control when
/// the "delayed" scroll runs.
#[derive(Default)]
pub struct RecordingScheduler {
    jobs: Mutex<Vec<(Duration, ScrollJob)>>,
}

impl RecordingScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scheduled_delays(&self) -> Vec<Duration> {
        self.jobs
            .lock()
            .expect("scheduler jobs")
            .iter()
            .map(|(delay, _)| *delay)
            .collect()
    }

    /// Runs every captured job in schedule order and clears the queue.
    pub fn run_pending(&self) {
        let jobs = std::mem::take(&mut *self.jobs.lock().expect("scheduler jobs"));
        for (_, job) in jobs {
            job();
        }
    }
}

impl ScrollScheduler for RecordingScheduler {
    fn schedule(&self, delay: Duration, job: ScrollJob) {
        self.jobs.lock().expect("scheduler jobs").push((delay, job));
    }
}

pub fn blip(id: &str, name: &str) -> Blip {
    Blip::new(BlipId::new(id).expect("blip id"), name)
}

/// Two quadrants, three blips; enough to exercise cross-quadrant resolution.
pub fn demo_quadrants() -> Vec<QuadrantDescriptor> {
    vec![
        QuadrantDescriptor::new(
            0,
            0.0,
            Quadrant::new(
                "Tools",
                vec![blip("blip-junit", "JUnit"), blip("blip-gradle", "Gradle")],
            ),
        ),
        QuadrantDescriptor::new(
            1,
            -90.0,
            Quadrant::new(
                "Techniques",
                vec![blip("blip-ci", "Continuous Integration")],
            ),
        ),
    ]
}
