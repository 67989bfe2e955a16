//! File downloads and clipboard writes via the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// Save text as a downloaded `.txt`/`.json` file.
pub fn save_text_file(filename: &str, text: &str, mime: &str) {
    #[cfg(feature = "hydrate")]
    {
        let parts = js_sys::Array::new();
        parts.push(&wasm_bindgen::JsValue::from_str(text));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        if let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) {
            trigger_download(&blob, filename);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, text, mime);
    }
}

/// Save raw bytes (e.g. a fetched image) as a downloaded file.
pub fn save_binary_file(filename: &str, bytes: &[u8], mime: &str) {
    #[cfg(feature = "hydrate")]
    {
        let array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::new();
        parts.push(&array);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        if let Ok(blob) = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options) {
            trigger_download(&blob, filename);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, bytes, mime);
    }
}

/// Copy text to the clipboard; false when the write fails or there is no
/// browser.
pub async fn copy_text(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise).await.is_ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}

/// Content type for a stored taxonomy image format.
#[must_use]
pub fn image_mime(format: &str) -> &'static str {
    match format {
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(feature = "hydrate")]
fn trigger_download(blob: &web_sys::Blob, filename: &str) {
    use wasm_bindgen::JsCast;

    let Ok(url) = web_sys::Url::create_object_url_with_blob(blob) else {
        return;
    };
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Ok(element) = document.create_element("a") {
            if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
                anchor.set_href(&url);
                anchor.set_download(filename);
                if let Some(body) = document.body() {
                    let _ = body.append_child(&anchor);
                }
                anchor.click();
                anchor.remove();
            }
        }
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}
