//! SGEA Form Enhancements
//!
//! Phone masking and date/time picker wiring for the SGEA event forms,
//! loaded as a WASM module on every page that renders a form.

mod config;
mod date_pair;
mod jquery;
mod locale;
mod phone_mask;
mod picker;

pub use config::{DatePickerOptions, FormsConfig, TimePickerOptions};
pub use date_pair::{constrain_end, EndConstraint, PairState};
pub use jquery::{JQueryDateField, JQueryHost};
pub use locale::LocaleTable;
pub use phone_mask::{apply_phone_mask, format_phone};
pub use picker::{sync_end_with_start, wire_pickers, Capabilities, DateField, PickerHost, WiringReport};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Enhance the current document: phone masks first, then pickers
pub fn enhance_page(config: &FormsConfig) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let masked = phone_mask::mask_all(&document, &config.phone_selector);

    let report = match JQueryHost::probe(&window) {
        Some(host) => wire_pickers(&host, config),
        None => {
            log::debug!("[Forms] jQuery not found, pickers skipped");
            WiringReport::default()
        }
    };

    log::info!(
        "[Forms] Ready: {} phone field(s), date pickers {}, time pickers {}",
        masked,
        if report.date_pickers { "on" } else { "off" },
        if report.time_pickers { "on" } else { "off" },
    );
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, config_err) = FormsConfig::from_window();
    // A second module instance on the page keeps the first logger
    if let Err(e) = console_logger::init(console_logger::parse_level(&config.log_level)) {
        log::debug!("[Forms] Logger already installed: {}", e);
    }
    if let Some(e) = config_err {
        log::warn!("[Forms] Ignoring window.{}: {}", config::WINDOW_CONFIG_KEY, e);
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() != "loading" {
        enhance_page(&config);
        return;
    }

    let on_ready = Closure::once(move |_ev: web_sys::Event| enhance_page(&config));
    if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref()) {
        log::error!("[Forms] Failed to wait for DOMContentLoaded: {:?}", e);
    }
    on_ready.forget();
}
