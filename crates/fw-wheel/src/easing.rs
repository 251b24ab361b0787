//! Easing curves for the spin animation

/// An easing curve: monotonic on [0, 1] with `f(0) = 0` and `f(1) = 1`.
pub type Easing = fn(f64) -> f64;

/// Constant-rate progress
pub fn linear(t: f64) -> f64 {
    t
}

/// Quadratic ease-out: `t * (2 - t)`
pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

/// Cubic ease-out: `1 - (1 - t)^3`
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Default spin easing
pub const DEFAULT_EASING: Easing = ease_out_cubic;
