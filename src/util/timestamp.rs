//! Formatted timestamp for contact submissions.

use wasm_bindgen::JsValue;

const FORMAT_OPTIONS: &[(&str, &str)] = &[
    ("weekday", "long"),
    ("year", "numeric"),
    ("month", "long"),
    ("day", "numeric"),
    ("hour", "2-digit"),
    ("minute", "2-digit"),
    ("second", "2-digit"),
    ("timeZoneName", "short"),
];

/// The current moment in a long human-readable form, e.g.
/// "Friday, August 1, 2025, 10:00:00 AM GMT+6". Substituted into the email
/// template as the `time` parameter.
#[must_use]
pub fn submission_timestamp() -> String {
    let options = js_sys::Object::new();
    for (key, value) in FORMAT_OPTIONS {
        let _ = js_sys::Reflect::set(
            &options,
            &JsValue::from_str(key),
            &JsValue::from_str(value),
        );
    }
    js_sys::Date::new_0().to_locale_string("en-US", &options).into()
}
