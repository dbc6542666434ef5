//! jQuery UI Picker Host
//!
//! `PickerHost` backed by the page's global jQuery with the datepicker and
//! timepicker plugins.

use chrono::{Datelike, NaiveDate};
use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::{DatePickerOptions, TimePickerOptions};
use crate::locale::LocaleTable;
use crate::picker::{Capabilities, DateField, PickerHost};

#[wasm_bindgen]
extern "C" {
    /// A jQuery collection
    #[derive(Debug, Clone)]
    pub type JQuery;

    #[wasm_bindgen(method, catch, js_name = datepicker)]
    fn datepicker_init(this: &JQuery, options: &JsValue) -> Result<JQuery, JsValue>;

    #[wasm_bindgen(method, catch, js_name = datepicker)]
    fn datepicker_get(this: &JQuery, method: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = datepicker)]
    fn datepicker_set(this: &JQuery, method: &str, value: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = datepicker)]
    fn datepicker_option(this: &JQuery, method: &str, key: &str, value: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = timepicker)]
    fn timepicker_init(this: &JQuery, options: &JsValue) -> Result<JQuery, JsValue>;

    #[wasm_bindgen(method)]
    fn on(this: &JQuery, events: &str, handler: &Function) -> JQuery;

    #[wasm_bindgen(method, getter)]
    fn length(this: &JQuery) -> u32;
}

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Property lookup that treats `undefined` and `null` as missing
fn prop(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Local midnight of `date`. `setFullYear` keeps years 0-99 literal, unlike
/// the `Date(y, m, d)` constructor which maps them to 19xx.
fn to_js_date(date: NaiveDate) -> Result<js_sys::Date, String> {
    let year = u32::try_from(date.year()).map_err(|_| format!("year {} is out of range", date.year()))?;
    let js = js_sys::Date::new_0();
    js.set_full_year_with_month_date(year, date.month0() as i32, date.day() as i32);
    js.set_hours(0);
    js.set_minutes(0);
    js.set_seconds(0);
    js.set_milliseconds(0);
    Ok(js)
}

fn from_js_date(value: &JsValue) -> Option<NaiveDate> {
    let date = value.dyn_ref::<js_sys::Date>()?;
    // Invalid dates report NaN
    if date.get_time().is_nan() {
        return None;
    }
    NaiveDate::from_ymd_opt(date.get_full_year() as i32, date.get_month() + 1, date.get_date())
}

/// Date pickers matched by one selector
#[derive(Debug, Clone)]
pub struct JQueryDateField(JQuery);

impl DateField for JQueryDateField {
    fn date(&self) -> Option<NaiveDate> {
        match self.0.datepicker_get("getDate") {
            Ok(value) => from_js_date(&value),
            Err(e) => {
                log::warn!("[jQuery] getDate failed: {}", js_err(e));
                None
            }
        }
    }

    fn set_min_date(&self, date: NaiveDate) -> Result<(), String> {
        self.0
            .datepicker_option("option", "minDate", &JsValue::from(to_js_date(date)?))
            .map(|_| ())
            .map_err(js_err)
    }

    fn set_date(&self, date: NaiveDate) -> Result<(), String> {
        self.0
            .datepicker_set("setDate", &JsValue::from(to_js_date(date)?))
            .map(|_| ())
            .map_err(js_err)
    }
}

/// The page's `window.$`, with the plugins found on it
pub struct JQueryHost {
    jq: Function,
    caps: Capabilities,
}

impl JQueryHost {
    /// Look for jQuery and its picker plugins. `None` when jQuery is absent.
    pub fn probe(window: &web_sys::Window) -> Option<Self> {
        let jq = prop(window, "$")?.dyn_into::<Function>().ok()?;
        let plugins = prop(&jq, "fn");
        let has_plugin = |name: &str| {
            plugins
                .as_ref()
                .and_then(|p| prop(p, name))
                .is_some_and(|f| f.is_function())
        };

        let caps = Capabilities::detect(
            has_plugin("datepicker"),
            has_plugin("timepicker"),
            prop(&jq, "datepicker").is_some(),
        );
        log::debug!("[jQuery] Found {:?}", caps);
        Some(Self { jq, caps })
    }

    fn select(&self, selector: &JsValue) -> Result<JQuery, String> {
        self.jq
            .call1(&JsValue::NULL, selector)
            .map(|v| v.unchecked_into::<JQuery>())
            .map_err(js_err)
    }
}

impl PickerHost for JQueryHost {
    type Field = JQueryDateField;

    fn capabilities(&self) -> Capabilities {
        self.caps
    }

    fn register_locale(&self, locale: &LocaleTable) -> Result<(), String> {
        let table = serde_wasm_bindgen::to_value(locale).map_err(|e| e.to_string())?;
        let registry = prop(&self.jq, "datepicker").ok_or("$.datepicker is missing")?;
        let regional = prop(&registry, "regional").ok_or("$.datepicker.regional is missing")?;
        Reflect::set(&regional, &JsValue::from_str(locale.name), &table).map_err(js_err)?;

        let set_defaults = prop(&registry, "setDefaults")
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or("$.datepicker.setDefaults is missing")?;
        set_defaults.call1(&registry, &table).map_err(js_err)?;
        Ok(())
    }

    fn attach_date_picker(&self, selector: &str, options: &DatePickerOptions) -> Result<JQueryDateField, String> {
        let options = serde_wasm_bindgen::to_value(options).map_err(|e| e.to_string())?;
        let field = self.select(&JsValue::from_str(selector))?;
        let field = field.datepicker_init(&options).map_err(js_err)?;
        log::debug!("[jQuery] Date picker on {} element(s) of {:?}", field.length(), selector);
        Ok(JQueryDateField(field))
    }

    fn attach_time_picker(&self, selector: &str, options: &TimePickerOptions) -> Result<(), String> {
        let options = serde_wasm_bindgen::to_value(options).map_err(|e| e.to_string())?;
        let field = self.select(&JsValue::from_str(selector))?;
        let field = field.timepicker_init(&options).map_err(js_err)?;
        log::debug!("[jQuery] Time picker on {} element(s) of {:?}", field.length(), selector);
        Ok(())
    }

    fn on_date_change(&self, field: &JQueryDateField, handler: Box<dyn Fn(JQueryDateField)>) -> Result<(), String> {
        let jq = self.jq.clone();
        // Handlers are bound through jQuery since the widget fires jQuery-level events
        let on_change = Closure::<dyn FnMut(JsValue)>::new(move |ev: JsValue| {
            let Some(target) = prop(&ev, "currentTarget") else {
                return;
            };
            match jq.call1(&JsValue::NULL, &target) {
                Ok(changed) => handler(JQueryDateField(changed.unchecked_into())),
                Err(e) => log::warn!("[jQuery] Failed to wrap changed field: {}", js_err(e)),
            }
        });

        field.0.on("change", on_change.as_ref().unchecked_ref());
        // Lives as long as the page
        on_change.forget();
        Ok(())
    }
}
