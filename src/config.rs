//! Form Enhancement Configuration
//!
//! Defaults match the SGEA templates. A page can override any field by
//! defining `window.sgeaFormsConfig` before the module loads.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::locale::WIDGET_DATE_FORMAT;

/// Global the page may define to override defaults
pub const WINDOW_CONFIG_KEY: &str = "sgeaFormsConfig";

/// Options passed to the time picker widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimePickerOptions {
    pub time_format: String,
    pub hour_grid: u32,
    pub minute_grid: u32,
}

impl Default for TimePickerOptions {
    fn default() -> Self {
        Self {
            time_format: "HH:mm".to_string(),
            hour_grid: 4,
            minute_grid: 10,
        }
    }
}

/// Options passed to a date picker widget
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatePickerOptions {
    /// Days from today; `Some(0)` blocks past dates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_date: Option<i32>,
    pub change_month: bool,
    pub change_year: bool,
    pub date_format: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormsConfig {
    pub phone_selector: String,
    pub start_date_selector: String,
    pub end_date_selector: String,
    pub time_selector: String,
    /// Regional name registered as the datepicker default
    pub locale: String,
    pub date_format: String,
    pub time_picker: TimePickerOptions,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            phone_selector: ".telefone-mask".to_string(),
            start_date_selector: ".datepicker#id_data_inicio, input[name='data_inicio'].datepicker".to_string(),
            end_date_selector: ".datepicker#id_data_fim, input[name='data_fim'].datepicker".to_string(),
            time_selector: ".timepicker, #id_horario.timepicker".to_string(),
            locale: "pt-BR".to_string(),
            date_format: WIDGET_DATE_FORMAT.to_string(),
            time_picker: TimePickerOptions::default(),
            log_level: "info".to_string(),
        }
    }
}

impl FormsConfig {
    /// Start field: today onwards
    pub fn start_picker_options(&self) -> DatePickerOptions {
        DatePickerOptions {
            min_date: Some(0),
            ..self.end_picker_options()
        }
    }

    /// End field: no minimum until a start date is picked
    pub fn end_picker_options(&self) -> DatePickerOptions {
        DatePickerOptions {
            min_date: None,
            change_month: true,
            change_year: true,
            date_format: self.date_format.clone(),
        }
    }

    /// Decode a JS object into a config. `undefined`/`null` give defaults.
    pub fn from_js(value: JsValue) -> Result<Self, String> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
    }

    /// Read `window.sgeaFormsConfig`, falling back to defaults.
    ///
    /// The error is returned alongside so it can be logged once the logger
    /// (whose level comes from this config) is installed.
    pub fn from_window() -> (Self, Option<String>) {
        let Some(window) = web_sys::window() else {
            return (Self::default(), None);
        };
        let value = match js_sys::Reflect::get(&window, &JsValue::from_str(WINDOW_CONFIG_KEY)) {
            Ok(value) => value,
            Err(e) => return (Self::default(), Some(format!("{:?}", e))),
        };
        match Self::from_js(value) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selectors() {
        let config = FormsConfig::default();
        assert_eq!(config.phone_selector, ".telefone-mask");
        assert!(config.start_date_selector.contains("input[name='data_inicio']"));
        assert!(config.end_date_selector.contains("#id_data_fim"));
        assert!(config.time_selector.contains("#id_horario"));
        assert_eq!(config.locale, "pt-BR");
    }

    #[test]
    fn test_start_options_block_past_dates() {
        let config = FormsConfig::default();
        let start = config.start_picker_options();
        let end = config.end_picker_options();
        assert_eq!(start.min_date, Some(0));
        assert_eq!(end.min_date, None);
        assert!(start.change_month && start.change_year);
        assert_eq!(start.date_format, end.date_format);
    }

    #[test]
    fn test_date_options_serialized_shape() {
        let config = FormsConfig::default();
        let start = serde_json::to_value(config.start_picker_options()).unwrap();
        assert_eq!(start["minDate"], 0);
        assert_eq!(start["changeMonth"], true);
        assert_eq!(start["dateFormat"], "yy-mm-dd");

        let end = serde_json::to_value(config.end_picker_options()).unwrap();
        assert!(end.get("minDate").is_none());
    }

    #[test]
    fn test_time_options() {
        let value = serde_json::to_value(TimePickerOptions::default()).unwrap();
        assert_eq!(value["timeFormat"], "HH:mm");
        assert_eq!(value["hourGrid"], 4);
        assert_eq!(value["minuteGrid"], 10);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: FormsConfig = serde_json::from_value(serde_json::json!({
            "phoneSelector": "input.phone",
            "timePicker": { "minuteGrid": 15 },
            "logLevel": "debug"
        }))
        .unwrap();
        assert_eq!(config.phone_selector, "input.phone");
        assert_eq!(config.time_picker.minute_grid, 15);
        assert_eq!(config.time_picker.hour_grid, 4);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.locale, "pt-BR");
    }
}
