/// Backing-store size for a canvas shown at `css_width` x `css_height` CSS
/// pixels, clamped to `[1, max_dim]` on each axis.
#[inline]
pub fn backing_size(css_width: u32, css_height: u32, pixel_ratio: f64, max_dim: u32) -> (u32, u32) {
    let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
        pixel_ratio
    } else {
        1.0
    };
    let scale = |v: u32| ((v as f64 * ratio).round() as u32).clamp(1, max_dim.max(1));
    (scale(css_width), scale(css_height))
}

/// Convert a JS number (CSS pixels, possibly fractional) to whole pixels.
#[inline]
pub fn css_px(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round() as u32
    } else {
        0
    }
}
