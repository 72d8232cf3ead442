// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Browser host shell for the sandshrew engine.
//!
//! Drives the loading indicator over the page DOM on a fixed cadence while
//! the engine module initializes in the background. The two startup actions
//! are independent and unordered: the indicator never observes engine
//! completion, and the engine never touches the indicator.
//!
//! # Usage (from JavaScript)
//!
//! ```js
//! import { start, startWithConfig } from 'sandshrew-browser';
//!
//! start();
//! // or, with overrides:
//! startWithConfig({ target_id: "boot-status", interval_ms: 250 });
//! ```
#![deny(missing_docs)]

use sandshrew_app_core::config::BootConfig;
use sandshrew_app_core::display::{DisplayError, DisplayPort};
use sandshrew_app_core::indicator::LoadingIndicator;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

// ─── Engine seam ─────────────────────────────────────────────────────────────

#[cfg(feature = "engine-module")]
#[wasm_bindgen(raw_module = "./target/sandshrew.js")]
extern "C" {
    /// Default-export initializer of the externally-built engine artifact.
    #[wasm_bindgen(js_name = "default")]
    fn engine_init() -> js_sys::Promise;
}

/// Hands the host an observable handle to the engine's initialization.
#[cfg(feature = "engine-module")]
#[wasm_bindgen(js_name = initEngine)]
pub fn init_engine() -> js_sys::Promise {
    engine_init()
}

/// Launches engine initialization without awaiting it.
///
/// A rejection is logged to the console and otherwise discarded; success is
/// not observed at all.
#[cfg(feature = "engine-module")]
fn spawn_engine_init() {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(err) = wasm_bindgen_futures::JsFuture::from(engine_init()).await {
            web_sys::console::error_2(&"sandshrew engine init failed".into(), &err);
        }
    });
}

// ─── DOM display port ────────────────────────────────────────────────────────

/// DOM-backed display port.
///
/// Resolves the target element by id on every call, so a target removed from
/// the document surfaces as [`DisplayError::TargetMissing`] at that tick and
/// not later.
pub struct DomDisplay {
    document: Document,
    target_id: String,
}

impl DomDisplay {
    /// Creates a port over `document` writing into the element `target_id`.
    pub fn new(document: Document, target_id: impl Into<String>) -> Self {
        Self {
            document,
            target_id: target_id.into(),
        }
    }
}

impl DisplayPort for DomDisplay {
    fn replace_text(&mut self, text: &str) -> Result<(), DisplayError> {
        match self.document.get_element_by_id(&self.target_id) {
            Some(el) => {
                el.set_text_content(Some(text));
                Ok(())
            }
            None => Err(DisplayError::TargetMissing {
                id: self.target_id.clone(),
            }),
        }
    }
}

// ─── Interval scheduling ─────────────────────────────────────────────────────

/// Registers the repeating tick with the page scheduler and returns the
/// interval handle.
///
/// The tick closure is intentionally leaked: the interval is never cancelled
/// in normal operation and must stay callable for the lifetime of the page.
/// A failed tick is rethrown into the host unhandled; the interval stays
/// registered, so the fault repeats at the next tick if the target is still
/// missing.
fn schedule_ticks(
    window: &Window,
    mut indicator: LoadingIndicator,
    mut display: DomDisplay,
    interval_ms: u32,
) -> Result<i32, JsError> {
    let timeout = i32::try_from(interval_ms)
        .map_err(|_| JsError::new("tick interval exceeds the scheduler's range"))?;
    let tick = Closure::<dyn FnMut()>::new(move || {
        if let Err(err) = indicator.tick(&mut display) {
            wasm_bindgen::throw_str(&err.to_string());
        }
    });
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            timeout,
        )
        .map_err(|_| JsError::new("failed to register the interval timer"))?;
    tick.forget();
    Ok(id)
}

// ─── Startup ─────────────────────────────────────────────────────────────────

/// Validates the config, wires the indicator to the page, and kicks off the
/// engine. Indicator and engine are started independently; neither waits for
/// the other.
fn boot(config: BootConfig) -> Result<(), JsError> {
    let frames = config
        .frame_sequence()
        .map_err(|e| JsError::new(&e.to_string()))?;
    let window = web_sys::window().ok_or_else(|| JsError::new("no window in this host"))?;
    let document = window
        .document()
        .ok_or_else(|| JsError::new("no document in this host"))?;

    let indicator = LoadingIndicator::new(frames);
    let display = DomDisplay::new(document, config.target_id);
    schedule_ticks(&window, indicator, display, config.interval_ms)?;

    #[cfg(feature = "engine-module")]
    spawn_engine_init();

    Ok(())
}

/// Boots the shell with the default configuration: begins the loading ticker
/// and launches engine initialization.
///
/// # Errors
///
/// Fails when the host exposes no window or document, or when the interval
/// timer cannot be registered.
#[wasm_bindgen]
pub fn start() -> Result<(), JsError> {
    boot(BootConfig::default())
}

/// Boots the shell with a host-supplied configuration object.
///
/// Missing fields fall back to the shipped defaults.
///
/// # Errors
///
/// Fails on a malformed or invalid config (empty frames, zero interval)
/// before any timer is registered, and on the same host failures as
/// [`start`].
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(config: JsValue) -> Result<(), JsError> {
    let config: BootConfig =
        serde_wasm_bindgen::from_value(config).map_err(|e| JsError::new(&e.to_string()))?;
    boot(config)
}

#[cfg(feature = "console-panic")]
#[wasm_bindgen(start)]
/// Initialize console panic hook for better error messages in browser.
pub fn init_console_panic_hook() {
    console_error_panic_hook::set_once();
}
