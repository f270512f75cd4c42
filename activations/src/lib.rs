//! Activation functions for neural-network layers.
//!
//! Every activation implements [`ActivationFunction`], so a layer can hold any
//! of them as a `Box<dyn ActivationFunction>` and apply it in place to its
//! slice of the network's value buffer.

pub mod activator;
pub mod batch;
pub mod errors;
pub mod layer_config;

pub use activator::leaky_relu::LeakyReLU;
pub use activator::linear::Linear;
pub use activator::relu::ReLU;
pub use activator::sigmoid::Sigmoid;
pub use activator::softmax::Softmax;
pub use activator::tanh::TanH;
pub use activator::ActivationFunction;
pub use batch::activate_rows;
pub use errors::{ActivationError, Result};
pub use layer_config::{ActivationConfig, LayerConfig};
