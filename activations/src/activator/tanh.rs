use crate::activator::ActivationFunction;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TanH {
    params: [f64; 0],
}

impl TanH {
    pub fn new() -> TanH {
        TanH { params: [] }
    }
}

impl ActivationFunction for TanH {
    fn name(&self) -> &'static str {
        "tanh"
    }

    fn activate(&self, x: &mut [f64]) {
        for z in x.iter_mut() {
            *z = z.tanh();
        }
    }

    fn derivative(&self, _b: f64, a: f64) -> f64 {
        1.0 - a * a
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
