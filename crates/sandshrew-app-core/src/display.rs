// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Port trait for the display surface the indicator renders into, without
//! depending on a specific DOM or UI crate.

use thiserror::Error;

/// Failure modes for a display port.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DisplayError {
    /// The display target could not be resolved at this tick.
    #[error("display target `{id}` not found")]
    TargetMissing {
        /// Identifier that failed to resolve.
        id: String,
    },
}

/// Minimal text surface port.
///
/// Implementations resolve the target on every call rather than caching the
/// handle, so a target that disappears surfaces as [`DisplayError::TargetMissing`]
/// at that tick and not later.
pub trait DisplayPort {
    /// Replace the displayed text content of the target.
    fn replace_text(&mut self, text: &str) -> Result<(), DisplayError>;
}
