//! Softmax, usually the output activation of a classification network.
//!
//! Turns a range of logits into a probability distribution. Exponentials come
//! from [`common::bound_math::exp`] so they never overflow to infinity. When
//! the exponentials sum to NaN or to (nearly) zero, e.g. for all-negative-infinity
//! logits, there is nothing meaningful to normalize by and the range is filled
//! with the uniform distribution instead.

use common::{bound_math, DEFAULT_DOUBLE_EQUAL};
use tracing::trace;

use crate::activator::ActivationFunction;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Softmax {
    params: [f64; 0],
}

impl Softmax {
    pub fn new() -> Softmax {
        Softmax { params: [] }
    }
}

impl ActivationFunction for Softmax {
    fn name(&self) -> &'static str {
        "softmax"
    }

    fn activate(&self, x: &mut [f64]) {
        if x.is_empty() {
            return;
        }

        let mut sum = 0.0;
        for v in x.iter_mut() {
            *v = bound_math::exp(*v);
            sum += *v;
        }

        if sum.is_nan() || sum < DEFAULT_DOUBLE_EQUAL {
            trace!(size = x.len(), sum, "degenerate softmax sum, using uniform distribution");
            let uniform = 1.0 / x.len() as f64;
            x.fill(uniform);
        } else {
            for v in x.iter_mut() {
                *v /= sum;
            }
        }
    }

    /// Only the diagonal of the softmax Jacobian. The cross terms between
    /// outputs can't be expressed as a function of a single output.
    fn derivative(&self, _b: f64, a: f64) -> f64 {
        a * (1.0 - a)
    }

    fn has_derivative(&self) -> bool {
        true
    }

    fn param_names(&self) -> &[&'static str] {
        &[]
    }

    fn params(&self) -> &[f64] {
        &self.params
    }

    fn params_mut(&mut self) -> &mut [f64] {
        &mut self.params
    }

    fn box_clone(&self) -> Box<dyn ActivationFunction> {
        Box::new(Softmax::new())
    }
}
