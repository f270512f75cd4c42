use serde_derive::{Deserialize, Serialize};
use tracing::debug;

use crate::activator::leaky_relu::LeakyReLU;
use crate::activator::linear::Linear;
use crate::activator::relu::ReLU;
use crate::activator::sigmoid::Sigmoid;
use crate::activator::softmax::Softmax;
use crate::activator::tanh::TanH;
use crate::activator::ActivationFunction;
use crate::errors::Result;

/// Which activation a layer uses, in a form that can be stored alongside the
/// rest of a network description.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActivationConfig {
    Linear,
    Sigmoid,
    #[serde(rename = "tanh")]
    TanH,
    #[serde(rename = "relu")]
    ReLU {
        #[serde(default)]
        threshold_low: f64,
        #[serde(default)]
        low: f64,
    },
    #[serde(rename = "leaky_relu")]
    LeakyReLU { tail_slope: f64 },
    Softmax,
}

impl ActivationConfig {
    pub fn build(&self) -> Box<dyn ActivationFunction> {
        let activation: Box<dyn ActivationFunction> = match self {
            ActivationConfig::Linear => Box::new(Linear::new()),
            ActivationConfig::Sigmoid => Box::new(Sigmoid::new()),
            ActivationConfig::TanH => Box::new(TanH::new()),
            ActivationConfig::ReLU { threshold_low, low } => {
                Box::new(ReLU::with_threshold(*threshold_low, *low))
            }
            ActivationConfig::LeakyReLU { tail_slope } => Box::new(LeakyReLU::new(*tail_slope)),
            ActivationConfig::Softmax => Box::new(Softmax::new()),
        };
        debug!(
            activation = activation.name(),
            params = ?activation.params(),
            "built activation function"
        );
        activation
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LayerConfig {
    pub size: usize,
    // Optional because the input layer doesn't have an activation function
    #[serde(default)]
    pub activation_function: Option<ActivationConfig>,
}

impl LayerConfig {
    pub fn new(size: usize, activation_function: Option<ActivationConfig>) -> Self {
        Self {
            size,
            activation_function,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// A fresh activation instance for this layer, if it has one.
    pub fn build_activation(&self) -> Option<Box<dyn ActivationFunction>> {
        self.activation_function.as_ref().map(|a| a.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ActivationError;

    #[test]
    pub fn parses_softmax_layer() {
        let config = LayerConfig::from_json(
            r#"{ "size": 10, "activation_function": { "type": "softmax" } }"#,
        )
        .unwrap();
        assert_eq!(config, LayerConfig::new(10, Some(ActivationConfig::Softmax)));

        let activation = config.build_activation().unwrap();
        assert_eq!(activation.name(), "softmax");
        assert!(activation.params().is_empty());
    }

    #[test]
    pub fn parses_parameterized_layers() {
        let config = LayerConfig::from_json(
            r#"{ "size": 4, "activation_function": { "type": "relu", "low": -1.0 } }"#,
        )
        .unwrap();
        let activation = config.build_activation().unwrap();
        assert_eq!(activation.name(), "relu");
        assert_eq!(activation.params(), &[0.0, -1.0]);

        let config = LayerConfig::from_json(
            r#"{ "size": 4, "activation_function": { "type": "leaky_relu", "tail_slope": 0.01 } }"#,
        )
        .unwrap();
        let activation = config.build_activation().unwrap();
        assert_eq!(activation.name(), "leaky_relu");
        assert_eq!(activation.params(), &[0.01]);
    }

    #[test]
    pub fn input_layer_has_no_activation() {
        let config = LayerConfig::from_json(r#"{ "size": 784 }"#).unwrap();
        assert_eq!(config.activation_function, None);
        assert!(config.build_activation().is_none());
    }

    #[test]
    pub fn every_config_builds_matching_activation() {
        let configs = [
            (ActivationConfig::Linear, "linear"),
            (ActivationConfig::Sigmoid, "sigmoid"),
            (ActivationConfig::TanH, "tanh"),
            (
                ActivationConfig::ReLU {
                    threshold_low: 0.0,
                    low: 0.0,
                },
                "relu",
            ),
            (ActivationConfig::LeakyReLU { tail_slope: 0.1 }, "leaky_relu"),
            (ActivationConfig::Softmax, "softmax"),
        ];

        for (config, name) in configs.iter() {
            let activation = config.build();
            assert_eq!(activation.name(), *name);
            assert_eq!(activation.params().len(), activation.param_names().len());

            // the serialized tag matches the activation name
            let json = serde_json::to_value(config).unwrap();
            assert_eq!(json["type"], *name);
        }
    }

    #[test]
    pub fn json_round_trip() {
        let config = LayerConfig::new(3, Some(ActivationConfig::LeakyReLU { tail_slope: 0.2 }));
        let json = config.to_json().unwrap();
        assert_eq!(LayerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    pub fn rejects_unknown_activation() {
        let result = LayerConfig::from_json(
            r#"{ "size": 4, "activation_function": { "type": "swish" } }"#,
        );
        assert!(matches!(result, Err(ActivationError::Config(_))));

        let result = LayerConfig::from_json("not json");
        assert!(matches!(result, Err(ActivationError::Config(_))));
    }
}
