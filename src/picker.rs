//! Picker Wiring
//!
//! Configures date/time picker widgets through the `PickerHost` seam and
//! keeps the end date from falling behind the start date. Hosts without a
//! capability simply skip the matching step.

use chrono::NaiveDate;

use crate::config::{DatePickerOptions, FormsConfig, TimePickerOptions};
use crate::date_pair::{self, PairState};
use crate::locale::{self, LocaleTable};

/// Which widget features the page provides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub date_picker: bool,
    pub time_picker: bool,
    /// Regional table registry with settable defaults
    pub locale_registry: bool,
}

impl Capabilities {
    /// Decide capabilities from what the page exposes. The locale registry
    /// only counts when the date picker plugin itself is present.
    pub fn detect(date_plugin: bool, time_plugin: bool, regional_registry: bool) -> Self {
        Self {
            date_picker: date_plugin,
            time_picker: time_plugin,
            locale_registry: date_plugin && regional_registry,
        }
    }
}

/// Handle to the date picker(s) attached by one selector
pub trait DateField: Clone + 'static {
    /// Currently selected date, `None` when empty
    fn date(&self) -> Option<NaiveDate>;
    fn set_min_date(&self, date: NaiveDate) -> Result<(), String>;
    fn set_date(&self, date: NaiveDate) -> Result<(), String>;
}

/// A page able to host picker widgets
pub trait PickerHost {
    type Field: DateField;

    fn capabilities(&self) -> Capabilities;

    /// Register `locale` and make it the default for every date picker
    fn register_locale(&self, locale: &LocaleTable) -> Result<(), String>;

    fn attach_date_picker(&self, selector: &str, options: &DatePickerOptions) -> Result<Self::Field, String>;

    fn attach_time_picker(&self, selector: &str, options: &TimePickerOptions) -> Result<(), String>;

    /// Call `handler` with the changed field each time a date in `field` changes
    fn on_date_change(&self, field: &Self::Field, handler: Box<dyn Fn(Self::Field)>) -> Result<(), String>;
}

/// What `wire_pickers` managed to set up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WiringReport {
    pub locale_registered: bool,
    pub date_pickers: bool,
    pub time_pickers: bool,
}

/// Apply the start date to the end field: raise its minimum and pull its
/// value forward when it is earlier. No-op while the start is empty.
pub fn sync_end_with_start<F: DateField>(start: &F, end: &F) -> Result<(), String> {
    let start_date = start.date();
    let end_date = end.date();
    let Some(constraint) = date_pair::constrain_end(start_date, end_date) else {
        return Ok(());
    };

    end.set_min_date(constraint.min_date)?;
    if let Some(date) = constraint.overwrite {
        end.set_date(date)?;
    }
    log::debug!(
        "[Picker] {:?}: end min {}, end {}",
        PairState::of(start_date, end_date),
        date_pair::format_date(constraint.min_date),
        constraint
            .overwrite
            .or(end_date)
            .map(date_pair::format_date)
            .unwrap_or_else(|| "unset".to_string()),
    );
    Ok(())
}

fn wire_date_pair<H: PickerHost>(host: &H, config: &FormsConfig) -> Result<(), String> {
    let start = host.attach_date_picker(&config.start_date_selector, &config.start_picker_options())?;
    let end = host.attach_date_picker(&config.end_date_selector, &config.end_picker_options())?;

    host.on_date_change(
        &start,
        Box::new(move |changed| {
            if let Err(e) = sync_end_with_start(&changed, &end) {
                log::warn!("[Picker] Failed to sync end date: {}", e);
            }
        }),
    )
}

/// Configure every picker the host supports. Never fails: a missing
/// capability skips its step and a failing step is logged.
pub fn wire_pickers<H: PickerHost>(host: &H, config: &FormsConfig) -> WiringReport {
    let caps = host.capabilities();
    let mut report = WiringReport::default();

    if caps.locale_registry {
        match locale::by_name(&config.locale) {
            Some(table) => match host.register_locale(table) {
                Ok(()) => report.locale_registered = true,
                Err(e) => log::warn!("[Picker] Failed to register locale {}: {}", table.name, e),
            },
            None => log::warn!("[Picker] Unknown locale {:?}, keeping widget default", config.locale),
        }
    }

    if caps.date_picker {
        match wire_date_pair(host, config) {
            Ok(()) => report.date_pickers = true,
            Err(e) => log::warn!("[Picker] Failed to attach date pickers: {}", e),
        }
    } else {
        log::debug!("[Picker] No date picker available, skipping");
    }

    if caps.time_picker {
        match host.attach_time_picker(&config.time_selector, &config.time_picker) {
            Ok(()) => report.time_pickers = true,
            Err(e) => log::warn!("[Picker] Failed to attach time pickers: {}", e),
        }
    } else {
        log::debug!("[Picker] No time picker available, skipping");
    }

    report
}
