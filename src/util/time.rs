//! Browser clock readings. Native builds return zero values; the state
//! layer treats them as opaque strings anyway.

/// Epoch milliseconds from the browser clock.
// Date.now() fits comfortably in u64 for any realistic clock.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_millis() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// Locale display timestamp, e.g. `8/22/2026, 10:03:17 AM`.
#[must_use]
pub fn locale_timestamp() -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0()
            .to_locale_string("en-US", &wasm_bindgen::JsValue::UNDEFINED)
            .into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Calendar-day key, e.g. `Fri Aug 22 2026`. Stable across reloads within
/// one local day, which is all the today-count needs.
#[must_use]
pub fn day_key() -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().to_date_string().into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// ISO calendar date, e.g. `2026-08-22`, for export filenames.
#[must_use]
pub fn iso_date() -> String {
    #[cfg(feature = "hydrate")]
    {
        let iso: String = js_sys::Date::new_0().to_iso_string().into();
        iso.split('T').next().unwrap_or_default().to_owned()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
