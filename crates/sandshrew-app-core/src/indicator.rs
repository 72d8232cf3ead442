// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Loading indicator state machine: one frame per tick, forever.

use crate::display::{DisplayError, DisplayPort};
use crate::frames::FrameSequence;

/// Cycles a frame sequence through a display port, one frame per tick.
///
/// The indicator owns its sequence and cursor; the host scheduler owns the
/// cadence and the page lifetime owns termination. There is a single state
/// ("cycling") with one self-transition per successful tick.
#[derive(Debug, Clone)]
pub struct LoadingIndicator {
    frames: FrameSequence,
    ticks: u64,
}

impl LoadingIndicator {
    /// Wraps a frame sequence. No side effects until the first tick.
    pub fn new(frames: FrameSequence) -> Self {
        Self { frames, ticks: 0 }
    }

    /// Writes the current frame through `port`, then advances the cursor.
    ///
    /// On a port failure the cursor stays put: the frame was never shown, and
    /// the next tick retries it. The error is propagated unrecovered.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::TargetMissing`] when the port cannot resolve
    /// its target at this tick.
    pub fn tick(&mut self, port: &mut dyn DisplayPort) -> Result<(), DisplayError> {
        port.replace_text(self.frames.current())?;
        self.frames.advance();
        self.ticks += 1;
        Ok(())
    }

    /// The frame the next tick will display.
    pub fn pending_frame(&self) -> &str {
        self.frames.current()
    }

    /// Number of successful ticks so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frames::DEFAULT_FRAMES;

    /// Recording port with a switchable missing-target fault.
    struct FakeDisplay {
        writes: Vec<String>,
        missing: bool,
    }

    impl FakeDisplay {
        fn new() -> Self {
            Self {
                writes: Vec::new(),
                missing: false,
            }
        }
    }

    impl DisplayPort for FakeDisplay {
        fn replace_text(&mut self, text: &str) -> Result<(), DisplayError> {
            if self.missing {
                return Err(DisplayError::TargetMissing {
                    id: "loading".to_string(),
                });
            }
            self.writes.push(text.to_string());
            Ok(())
        }
    }

    fn default_indicator() -> LoadingIndicator {
        LoadingIndicator::new(FrameSequence::default())
    }

    #[test]
    fn zero_ticks_pending_frame_is_index_one() {
        let indicator = default_indicator();
        assert_eq!(indicator.pending_frame(), "Loading.");
    }

    #[test]
    fn four_ticks_wrap_back_to_index_zero() {
        let mut indicator = default_indicator();
        let mut port = FakeDisplay::new();
        for _ in 0..4 {
            indicator.tick(&mut port).expect("tick");
        }
        assert_eq!(indicator.pending_frame(), "Loading");
        assert_eq!(
            port.writes,
            vec!["Loading.", "Loading..", "Loading...", "Loading..."]
        );
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut indicator = default_indicator();
        let fresh = default_indicator();
        let mut port = FakeDisplay::new();
        for _ in 0..5 {
            indicator.tick(&mut port).expect("tick");
        }
        assert_eq!(indicator.pending_frame(), fresh.pending_frame());
    }

    #[test]
    fn displayed_frame_follows_modular_progression() {
        let mut indicator = default_indicator();
        let mut port = FakeDisplay::new();
        for n in 0..23 {
            indicator.tick(&mut port).expect("tick");
            let expected = DEFAULT_FRAMES[(1 + n) % DEFAULT_FRAMES.len()];
            assert_eq!(port.writes.last().map(String::as_str), Some(expected));
        }
        assert_eq!(indicator.ticks(), 23);
    }

    #[test]
    fn missing_target_surfaces_and_indicator_stays_usable() {
        let mut indicator = default_indicator();
        let mut port = FakeDisplay::new();
        port.missing = true;

        let err = indicator.tick(&mut port).expect_err("target is missing");
        assert_eq!(
            err,
            DisplayError::TargetMissing {
                id: "loading".to_string()
            }
        );
        // The frame was never shown: no advance, no tick counted.
        assert_eq!(indicator.pending_frame(), "Loading.");
        assert_eq!(indicator.ticks(), 0);

        // Target comes back; the same frame is displayed next.
        port.missing = false;
        indicator.tick(&mut port).expect("tick");
        assert_eq!(port.writes, vec!["Loading."]);
    }
}
