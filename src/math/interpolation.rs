//! Linear blending and clamping for color channels and normalized positions

/// Clamp a value into `[0, 1]`
pub fn clamp_unit(value: f64) -> f64 {
    num_traits::clamp(value, 0.0, 1.0)
}

/// Linear interpolation from `a` (at `t = 0`) to `b` (at `t = 1`)
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (b - a).mul_add(t, a)
}

/// Round and clamp a channel value into `[0, 255]`
///
/// Non-finite inputs map to 0.
pub fn clamp_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    num_traits::clamp(value.round(), 0.0, 255.0) as u8
}
