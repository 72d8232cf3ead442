// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared shell services for the sandshrew browser host (frames, indicator,
//! boot config). Keeps the WASM/DOM adapter thin and host-agnostic.

pub mod config;
pub mod display;
pub mod frames;
pub mod indicator;
