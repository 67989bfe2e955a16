use super::*;

// =============================================================
// Image content types
// =============================================================

#[test]
fn image_mime_covers_supported_formats() {
    assert_eq!(image_mime("svg"), "image/svg+xml");
    assert_eq!(image_mime("png"), "image/png");
    assert_eq!(image_mime("jpg"), "image/jpeg");
    assert_eq!(image_mime("jpeg"), "image/jpeg");
    assert_eq!(image_mime("gif"), "image/gif");
    assert_eq!(image_mime("webp"), "image/webp");
}

#[test]
fn image_mime_falls_back_for_unknown_formats() {
    assert_eq!(image_mime("tiff"), "application/octet-stream");
    assert_eq!(image_mime(""), "application/octet-stream");
}
