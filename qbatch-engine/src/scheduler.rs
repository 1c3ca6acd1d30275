//! Parallel circuit construction
//!
//! Builds all B circuits of a batch concurrently. The index range is
//! partitioned into fixed-size chunks and dispatched over rayon's worker
//! pool; each worker writes its circuits into disjoint, pre-allocated
//! slots, so the only shared mutable state is the [`FirstFailure`] cell.
//! Construction is all-or-nothing: every chunk runs to completion even
//! after a failure, and the aggregated status is returned before any
//! simulation starts. Each circuit's build output depends only on its own
//! program and binding, so the result is identical for any chunk size.

use crate::collector::FirstFailure;
use crate::error::{BatchError, Result};
use qbatch_core::{build_circuit, Circuit, Program, SymbolBinding};
use rayon::prelude::*;
use tracing::debug;

/// Build every circuit of the batch in parallel
///
/// `symbol_values[i]` is circuit `i`'s value row for the shared
/// `symbol_names`; the caller has already validated that the rows line up.
///
/// # Errors
/// Returns the first construction failure observed, after all workers have
/// finished. On error no circuit is returned, built or not.
pub fn build_batch(
    programs: &[Program],
    symbol_names: &[String],
    symbol_values: &[Vec<f64>],
    chunk_size: usize,
) -> Result<Vec<Circuit>> {
    let chunk_size = chunk_size.max(1);
    debug!(
        batch = programs.len(),
        chunk_size,
        "building circuits in parallel"
    );

    let mut slots: Vec<Option<Circuit>> = (0..programs.len()).map(|_| None).collect();
    let failure: FirstFailure<BatchError> = FirstFailure::new();

    slots
        .par_chunks_mut(chunk_size)
        .enumerate()
        .for_each(|(chunk_index, chunk)| {
            let base = chunk_index * chunk_size;
            for (offset, slot) in chunk.iter_mut().enumerate() {
                let index = base + offset;
                let binding = SymbolBinding::from_rows(symbol_names, &symbol_values[index]);
                match build_circuit(&programs[index], &binding) {
                    Ok(circuit) => *slot = Some(circuit),
                    Err(source) => {
                        failure.record(BatchError::Construction { index, source });
                    }
                }
            }
        });

    failure.into_result()?;
    Ok(slots
        .into_iter()
        .map(|slot| slot.expect("every slot is filled when no failure was recorded"))
        .collect())
}
