use crate::activator::ActivationFunction;

/// Passes values through unchanged. Typical for regression output layers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Linear {
    params: [f64; 0],
}

impl Linear {
    pub fn new() -> Linear {
        Linear { params: [] }
    }
}

impl ActivationFunction for Linear {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn activate(&self, _x: &mut [f64]) {}

    fn derivative(&self, _b: f64, _a: f64) -> f64 {
        1.0
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
