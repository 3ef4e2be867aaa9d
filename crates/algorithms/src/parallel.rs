//! Row and index fan-out.
//!
//! With the `parallel` feature the work runs on the rayon pool; without it
//! the same closures run in order on the calling thread. Results are
//! always returned in input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Evaluate `row_fn` for every row in `0..rows` and concatenate the
/// returned rows into one row-major buffer.
pub(crate) fn collect_rows<F>(rows: usize, row_fn: F) -> Vec<f64>
where
    F: Fn(usize) -> Vec<f64> + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        (0..rows).into_par_iter().flat_map(row_fn).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..rows).flat_map(row_fn).collect()
    }
}

/// Apply `f` to every item independently
pub(crate) fn map_each<I, O, F>(items: &[I], f: F) -> Vec<O>
where
    I: Sync,
    O: Send,
    F: Fn(&I) -> O + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        items.par_iter().map(f).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        items.iter().map(f).collect()
    }
}
