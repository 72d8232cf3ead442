// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Boot configuration for the shell: display target, cadence, frames.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::frames::{FrameSequence, DEFAULT_FRAMES};

/// Element identifier the indicator renders into unless overridden.
pub const DEFAULT_TARGET_ID: &str = "loading";

/// Tick cadence in milliseconds unless overridden.
pub const DEFAULT_INTERVAL_MS: u32 = 400;

/// Validation failures raised before any timer is registered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BootError {
    /// The frame list was empty.
    #[error("frame sequence is empty")]
    EmptyFrames,
    /// The tick interval was zero.
    #[error("tick interval must be positive")]
    ZeroInterval,
}

/// Startup parameters for the shell.
///
/// Hosts may override any field; missing fields fall back to the defaults
/// the shell has always shipped with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BootConfig {
    /// Identifier of the display target element.
    pub target_id: String,
    /// Tick cadence in milliseconds.
    pub interval_ms: u32,
    /// Animation frames, displayed in order.
    pub frames: Vec<String>,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            target_id: DEFAULT_TARGET_ID.to_string(),
            interval_ms: DEFAULT_INTERVAL_MS,
            frames: DEFAULT_FRAMES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl BootConfig {
    /// Checks the config without consuming it.
    ///
    /// # Errors
    ///
    /// Returns [`BootError::EmptyFrames`] or [`BootError::ZeroInterval`] for
    /// the corresponding invalid field.
    pub fn validate(&self) -> Result<(), BootError> {
        if self.frames.is_empty() {
            return Err(BootError::EmptyFrames);
        }
        if self.interval_ms == 0 {
            return Err(BootError::ZeroInterval);
        }
        Ok(())
    }

    /// Tick cadence as a duration.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.interval_ms))
    }

    /// Builds the frame sequence described by this config.
    ///
    /// # Errors
    ///
    /// Propagates [`validate`](Self::validate) failures.
    pub fn frame_sequence(&self) -> Result<FrameSequence, BootError> {
        self.validate()?;
        FrameSequence::new(self.frames.clone())
    }
}
