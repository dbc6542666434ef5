//! Datepicker Locale Tables
//!
//! Static strings handed to the datepicker's regional registry.

use serde::Serialize;

/// One regional entry, serialized into the object shape the widget reads
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleTable {
    #[serde(skip)]
    pub name: &'static str,
    pub close_text: &'static str,
    pub prev_text: &'static str,
    pub next_text: &'static str,
    pub current_text: &'static str,
    pub month_names: [&'static str; 12],
    pub month_names_short: [&'static str; 12],
    pub day_names: [&'static str; 7],
    pub day_names_short: [&'static str; 7],
    pub day_names_min: [&'static str; 7],
    pub week_header: &'static str,
    /// Widget pattern; `yy` is the four-digit year
    pub date_format: &'static str,
    /// 0 = Sunday
    pub first_day: u8,
    #[serde(rename = "isRTL")]
    pub is_rtl: bool,
    pub show_month_after_year: bool,
    pub year_suffix: &'static str,
}

/// Widget pattern for `yyyy-mm-dd`
pub const WIDGET_DATE_FORMAT: &str = "yy-mm-dd";

pub static PT_BR: LocaleTable = LocaleTable {
    name: "pt-BR",
    close_text: "Fechar",
    prev_text: "&#x3C;Anterior",
    next_text: "Próximo&#x3E;",
    current_text: "Hoje",
    month_names: [
        "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho",
        "Julho", "Agosto", "Setembro", "Outubro", "Novembro", "Dezembro",
    ],
    month_names_short: [
        "Jan", "Fev", "Mar", "Abr", "Mai", "Jun",
        "Jul", "Ago", "Set", "Out", "Nov", "Dez",
    ],
    day_names: [
        "Domingo", "Segunda-feira", "Terça-feira", "Quarta-feira",
        "Quinta-feira", "Sexta-feira", "Sábado",
    ],
    day_names_short: ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"],
    day_names_min: ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"],
    week_header: "Sm",
    date_format: WIDGET_DATE_FORMAT,
    first_day: 0,
    is_rtl: false,
    show_month_after_year: false,
    year_suffix: "",
};

/// Look up a built-in table by regional name
pub fn by_name(name: &str) -> Option<&'static LocaleTable> {
    match name {
        "pt-BR" | "pt_BR" | "pt-br" => Some(&PT_BR),
        _ => None,
    }
}
