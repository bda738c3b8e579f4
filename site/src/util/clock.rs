//! Wall-clock helpers.

use chrono::{DateTime, Utc};

/// Locale used for the submission timestamp.
#[cfg(feature = "hydrate")]
const TIMESTAMP_LOCALE: &str = "en-IN";

#[must_use]
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Human-readable local time for the submission record, formatted by the
/// browser's locale rules. Off-browser it falls back to RFC 3339 UTC.
#[must_use]
pub fn locale_timestamp() -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0()
            .to_locale_string(TIMESTAMP_LOCALE, &wasm_bindgen::JsValue::UNDEFINED)
            .into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        now_utc().to_rfc3339()
    }
}
