//! Box-art URL sizing.

/// Replace the `{width}` and `{height}` placeholders in a templated image URL.
///
/// Only the first occurrence of each placeholder is replaced. A missing
/// placeholder is left alone. Values are not range-checked.
pub fn replace_image_size(image_url: &str, width: i32, height: i32) -> String {
    image_url
        .replacen("{width}", &width.to_string(), 1)
        .replacen("{height}", &height.to_string(), 1)
}
