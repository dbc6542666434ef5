//! Phone Mask
//!
//! Reformats Brazilian phone numbers as `(NN) NNNNN-NNNN` while typing.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

/// Longest digit string kept (2 area + 9 subscriber)
pub const MAX_DIGITS: usize = 11;

/// Keep ASCII digits only, clipped to `MAX_DIGITS`
pub fn digits(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_DIGITS)
        .collect()
}

/// Render any raw text as the masked phone display
pub fn format_phone(raw: &str) -> String {
    let d = digits(raw);
    // Every char is ASCII, so byte slicing is safe
    match d.len() {
        0 => String::new(),
        1..=2 => format!("({}", d),
        3..=6 => format!("({}) {}", &d[..2], &d[2..]),
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
    }
}

/// Register an input listener that keeps `input` masked
pub fn apply_phone_mask(input: &HtmlInputElement) {
    let target = input.clone();
    let on_input = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        let current = target.value();
        let masked = format_phone(&current);
        if masked != current {
            target.set_value(&masked);
        }
    });

    if let Err(e) = input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref()) {
        log::warn!("[PhoneMask] Failed to bind input listener: {:?}", e);
    }
    // Lives as long as the page
    on_input.forget();
}

/// Mask every input matching `selector`, returning how many were bound
pub fn mask_all(document: &Document, selector: &str) -> usize {
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(e) => {
            log::warn!("[PhoneMask] Invalid selector {:?}: {:?}", selector, e);
            return 0;
        }
    };

    let mut bound = 0;
    for i in 0..nodes.length() {
        let Some(input) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlInputElement>().ok()) else {
            continue;
        };
        apply_phone_mask(&input);
        bound += 1;
    }
    bound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_by_digit_count() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("1"), "(1");
        assert_eq!(format_phone("11"), "(11");
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("119999"), "(11) 9999");
        assert_eq!(format_phone("1199999"), "(11) 99999-");
        assert_eq!(format_phone("1199999888"), "(11) 99999-888");
        assert_eq!(format_phone("11999998888"), "(11) 99999-8888");
    }

    #[test]
    fn test_strips_non_digits() {
        assert_eq!(format_phone("(11) 99999-8888"), "(11) 99999-8888");
        assert_eq!(format_phone("tel: +55 11"), "(55) 11");
        assert_eq!(format_phone("abc"), "");
        assert_eq!(format_phone("١٢٣"), "");
    }

    #[test]
    fn test_overlong_paste_is_clipped() {
        let long = "119999988887777";
        assert_eq!(long.len(), 15);
        assert_eq!(format_phone(long), format_phone(&long[..11]));
        assert_eq!(digits(long), "11999998888");
    }

    #[test]
    fn test_mask_is_idempotent() {
        let inputs = ["", "1", "12", "123", "123456", "1234567", "12345678901", "99 8-7a6543210123", "()- "];
        for raw in inputs {
            let once = format_phone(raw);
            assert_eq!(format_phone(&once), once, "input {:?}", raw);
        }
    }

    #[test]
    fn test_backspace_over_punctuation() {
        // Deleting the ")" leaves the same digits, so the mask comes back
        assert_eq!(format_phone("(11 9"), "(11) 9");
        // Deleting the trailing "-" on 7 digits puts it back
        assert_eq!(format_phone("(11) 99999"), "(11) 99999-");
    }
}
