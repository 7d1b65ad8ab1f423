//! Row partitioning across workers.

use std::ops::Range;

use crate::Error;

/// Returns the half-open row range owned by worker `id` out of `workers`.
///
/// Rows are split into contiguous chunks of `total_rows / workers` rows, the
/// last worker absorbing the remainder. When there are more workers than rows,
/// worker `id` owns row `id` alone and workers past the last row get `None`.
///
/// Ranges for all ids of the same `workers` are disjoint and together cover
/// `0..total_rows`.
pub fn plan(total_rows: usize, id: usize, workers: usize) -> Result<Option<Range<usize>>, Error> {
    if workers == 0 || id >= workers {
        return Err(Error::InvalidChunk { id, workers });
    }

    let base_chunk = total_rows / workers;
    if base_chunk == 0 {
        if id >= total_rows {
            return Ok(None);
        }
        return Ok(Some(id..id + 1));
    }

    let start = chunk_start(total_rows, id, workers);
    let end = if id == workers - 1 {
        total_rows
    } else {
        chunk_start(total_rows, id + 1, workers)
    };

    tracing::debug!(total_rows, id, workers, start, end, "planned chunk");
    Ok(Some(start..end))
}

/// Iterates over `(id, range)` for every worker.
pub fn chunks(
    total_rows: usize,
    workers: usize,
) -> impl Iterator<Item = (usize, Option<Range<usize>>)> {
    (0..workers).map(move |id| {
        // id < workers always holds here
        let range = plan(total_rows, id, workers).unwrap_or(None);
        (id, range)
    })
}

// Multiply before dividing; u128 keeps the product from overflowing.
fn chunk_start(total_rows: usize, id: usize, workers: usize) -> usize {
    (total_rows as u128 * id as u128 / workers as u128) as usize
}
