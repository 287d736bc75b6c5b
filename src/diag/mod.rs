// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Larissa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Larissa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Injected diagnostic channel.
//!
//! Navigation failures are warnings, never UI alerts; the sink is injected so
//! embedders and tests can observe them.

use std::sync::Mutex;

/// Receives the diagnostic warnings navigation emits.
pub trait DiagnosticSink {
    fn warn(&self, message: &str);
}

/// Routes warnings to `tracing::warn!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "larissa", "{message}");
    }
}

/// Records warnings in memory, for tests and embedders that surface them
/// elsewhere.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("sink lock").clone()
    }
}

impl DiagnosticSink for MemorySink {
    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .expect("sink lock")
            .push(message.to_owned());
    }
}
