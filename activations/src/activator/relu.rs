use crate::activator::ActivationFunction;

const THRESHOLD_LOW: usize = 0;
const LOW: usize = 1;

/// Rectified linear unit. Values at or below `threshold_low` are replaced
/// by `low`, everything above passes through.
#[derive(Debug, Clone, PartialEq)]
pub struct ReLU {
    params: [f64; 2],
}

impl ReLU {
    pub fn new() -> ReLU {
        ReLU::with_threshold(0.0, 0.0)
    }

    pub fn with_threshold(threshold_low: f64, low: f64) -> ReLU {
        ReLU {
            params: [threshold_low, low],
        }
    }

    pub fn threshold_low(&self) -> f64 {
        self.params[THRESHOLD_LOW]
    }

    pub fn low(&self) -> f64 {
        self.params[LOW]
    }
}

impl Default for ReLU {
    fn default() -> Self {
        ReLU::new()
    }
}

impl ActivationFunction for ReLU {
    fn name(&self) -> &'static str {
        "relu"
    }

    fn activate(&self, x: &mut [f64]) {
        let threshold_low = self.threshold_low();
        let low = self.low();
        for z in x.iter_mut() {
            if *z <= threshold_low {
                *z = low;
            }
        }
    }

    fn derivative(&self, b: f64, _a: f64) -> f64 {
        if b <= self.threshold_low() {
            0.0
        } else {
            1.0
        }
    }

    fn has_derivative(&self) -> bool {
        true
    }

    fn param_names(&self) -> &[&'static str] {
        &["threshold_low", "low"]
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
