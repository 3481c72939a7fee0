// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Timing knobs for a search session.
//!
//! Both delays default to 300 ms. The debounce window coalesces typing
//! bursts; the close grace keeps results on screen while the search surface
//! animates out.

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_CLOSE_GRACE_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Quiet period after the last query change before searching.
    pub debounce_ms: u64,
    /// Delay between closing the search surface and clearing its state.
    pub close_grace_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            close_grace_ms: DEFAULT_CLOSE_GRACE_MS,
        }
    }
}

impl EngineConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn close_grace(&self) -> Duration {
        Duration::from_millis(self.close_grace_ms)
    }

    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    pub fn with_close_grace_ms(mut self, ms: u64) -> Self {
        self.close_grace_ms = ms;
        self
    }
}
