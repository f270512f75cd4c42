use crate::activator::ActivationFunction;

#[derive(Debug, Clone, PartialEq)]
pub struct LeakyReLU {
    params: [f64; 1],
}

impl LeakyReLU {
    pub fn new(tail_slope: f64) -> Self {
        Self {
            params: [tail_slope],
        }
    }

    pub fn tail_slope(&self) -> f64 {
        self.params[0]
    }
}

impl ActivationFunction for LeakyReLU {
    fn name(&self) -> &'static str {
        "leaky_relu"
    }

    fn activate(&self, x: &mut [f64]) {
        let tail_slope = self.tail_slope();
        for z in x.iter_mut() {
            if *z < 0.0 {
                *z *= tail_slope;
            }
        }
    }

    fn derivative(&self, b: f64, _a: f64) -> f64 {
        if b <= 0.0 {
            self.tail_slope()
        } else {
            1.0
        }
    }

    fn has_derivative(&self) -> bool {
        true
    }

    fn param_names(&self) -> &[&'static str] {
        &["tail_slope"]
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
