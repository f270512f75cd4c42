//! Math primitives that never produce infinities.
//!
//! Results are clamped into `[TOO_SMALL, TOO_BIG]` so that sums of several
//! results stay finite. NaN is not a number to clamp and passes through.

pub const TOO_BIG: f64 = 1.0e20;
pub const TOO_SMALL: f64 = -1.0e20;

pub fn bound(x: f64) -> f64 {
    if x < TOO_SMALL {
        TOO_SMALL
    } else if x > TOO_BIG {
        TOO_BIG
    } else {
        x
    }
}

/// e^x, clamped to [`TOO_BIG`] instead of overflowing to infinity.
pub fn exp(x: f64) -> f64 {
    bound(x.exp())
}
