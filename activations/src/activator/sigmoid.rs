use common::bound_math;

use crate::activator::ActivationFunction;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sigmoid {
    params: [f64; 0],
}

impl Sigmoid {
    pub fn new() -> Sigmoid {
        Sigmoid { params: [] }
    }
}

impl ActivationFunction for Sigmoid {
    fn name(&self) -> &'static str {
        "sigmoid"
    }

    fn activate(&self, x: &mut [f64]) {
        for z in x.iter_mut() {
            *z = 1.0 / (1.0 + bound_math::exp(-*z));
        }
    }

    // derivative from the activated value, no need to recompute the exponential
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
        Box::new(self.clone())
    }
}
