/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3D rotation type.
pub type Rotation3 = nalgebra::Rotation3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Decimal places kept on cached edge lengths before they are compared.
pub const LENGTH_DECIMALS: i32 = 5;

/// Decimal places kept on reported strut angles.
pub const ANGLE_DECIMALS: i32 = 2;

/// Rounds `value` to a fixed number of decimal places.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Linearly maps `value` from `src` onto `dst`.
///
/// Returns `None` when `value` lies outside `src` or `src` is empty.
#[must_use]
pub fn convert_to_range(value: f64, src: (f64, f64), dst: (f64, f64)) -> Option<f64> {
    let src_span = src.1 - src.0;
    if !(src.0..=src.1).contains(&value) || src_span.abs() < TOLERANCE {
        return None;
    }
    Some((value - src.0) * (dst.1 - dst.0) / src_span + dst.0)
}
