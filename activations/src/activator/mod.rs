use std::fmt::Debug;

use crate::errors::{ActivationError, Result};

pub mod leaky_relu;
pub mod linear;
pub mod relu;
pub mod sigmoid;
pub mod softmax;
pub mod tanh;

/// An activation function that a layer applies to its pre-activation values.
///
/// Activations work in place over a slice of the layer's buffer. Instances
/// carry no state beyond their flat parameter list, so `params` and
/// `param_names` fully describe an instance.
pub trait ActivationFunction: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// Overwrites every value in `x` with its activated value.
    fn activate(&self, x: &mut [f64]);

    /// Activates `buffer[start..start + size]` in place.
    ///
    /// An empty range is a no-op. A range that does not fit in the buffer is
    /// rejected before anything is written.
    fn apply(&self, buffer: &mut [f64], start: usize, size: usize) -> Result<()> {
        let range = checked_range(buffer.len(), start, size)?;
        if size == 0 {
            return Ok(());
        }
        self.activate(&mut buffer[range]);
        Ok(())
    }

    /// The derivative at one point, given the pre-activation value `b` and
    /// the activated value `a` that `activate` produced from it.
    fn derivative(&self, b: f64, a: f64) -> f64;

    fn has_derivative(&self) -> bool;

    /// Names of the parameters, in the same order as `params`.
    fn param_names(&self) -> &[&'static str];

    fn params(&self) -> &[f64];

    fn params_mut(&mut self) -> &mut [f64];

    fn set_param(&mut self, index: usize, value: f64) -> Result<()> {
        let params = self.params_mut();
        let len = params.len();
        let slot = params
            .get_mut(index)
            .ok_or(ActivationError::ParamIndexOutOfBounds { index, len })?;
        *slot = value;
        Ok(())
    }

    fn box_clone(&self) -> Box<dyn ActivationFunction>;
}

impl Clone for Box<dyn ActivationFunction> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

fn checked_range(len: usize, start: usize, size: usize) -> Result<std::ops::Range<usize>> {
    match start.checked_add(size) {
        Some(end) if end <= len => Ok(start..end),
        _ => Err(ActivationError::RangeOutOfBounds { start, size, len }),
    }
}
