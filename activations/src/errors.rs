use thiserror::Error;

pub type Result<T> = std::result::Result<T, ActivationError>;

#[derive(Debug, Error)]
pub enum ActivationError {
    #[error("parameter index {index} is out of bounds for an activation with {len} parameters")]
    ParamIndexOutOfBounds { index: usize, len: usize },

    #[error("range starting at {start} with size {size} does not fit in a buffer of length {len}")]
    RangeOutOfBounds { start: usize, size: usize, len: usize },

    #[error("buffer of length {len} cannot be split into rows of length {row_len}")]
    RaggedBatch { len: usize, row_len: usize },

    #[error("invalid layer config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = ActivationError::ParamIndexOutOfBounds { index: 0, len: 0 };
        assert_eq!(
            e.to_string(),
            "parameter index 0 is out of bounds for an activation with 0 parameters"
        );

        let e = ActivationError::RangeOutOfBounds {
            start: 2,
            size: 3,
            len: 4,
        };
        assert_eq!(
            e.to_string(),
            "range starting at 2 with size 3 does not fit in a buffer of length 4"
        );
    }
}
