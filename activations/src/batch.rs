use rayon::prelude::*;

use crate::activator::ActivationFunction;
use crate::errors::{ActivationError, Result};

/// Applies `activation` to every row of a row-major batch in parallel.
///
/// `buffer` holds consecutive rows of `row_len` values each, e.g. the
/// pre-activations of one layer for every example in a mini-batch. Rows are
/// disjoint, so each is handed to its own rayon task.
pub fn activate_rows(
    activation: &dyn ActivationFunction,
    buffer: &mut [f64],
    row_len: usize,
) -> Result<()> {
    if row_len == 0 || buffer.len() % row_len != 0 {
        return Err(ActivationError::RaggedBatch {
            len: buffer.len(),
            row_len,
        });
    }

    buffer
        .par_chunks_mut(row_len)
        .for_each(|row| activation.activate(row));

    Ok(())
}
