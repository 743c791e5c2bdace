//! Batch wrapper around [`composite_alpha_to_base`].
//!
//! Each element is an independent call of the single-pair pipeline. Inputs of
//! length one are broadcast over the batch.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::error::Error;
use crate::imageops::pipeline::{composite_alpha_to_base, CompositeOptions};
use crate::imageops::raster::Raster;

/// Composites every element of a batch, preserving input order.
///
/// `bases`, `cutouts` and (if present) `masks` must each have either the batch
/// length or length one. With the `rayon` feature the elements are processed
/// in parallel.
///
/// # Errors
///
/// * `Error::BatchSizeMismatch` - When the lengths cannot be broadcast
/// * Any error of [`composite_alpha_to_base`]; the first failing element wins
pub fn composite_batch(
    bases: &[Raster],
    cutouts: &[Raster],
    masks: Option<&[Raster]>,
    options: &CompositeOptions,
) -> Result<Vec<Raster>, Error> {
    let len = batch_len(bases.len(), cutouts.len(), masks.map(<[Raster]>::len))?;

    let run = |index: usize| {
        composite_alpha_to_base(
            broadcast(bases, index),
            broadcast(cutouts, index),
            masks.map(|masks| broadcast(masks, index)),
            options,
        )
    };

    #[cfg(feature = "rayon")]
    {
        (0..len).into_par_iter().map(run).collect()
    }

    #[cfg(not(feature = "rayon"))]
    {
        (0..len).map(run).collect()
    }
}

fn batch_len(bases: usize, cutouts: usize, masks: Option<usize>) -> Result<usize, Error> {
    let len = bases.max(cutouts).max(masks.unwrap_or(0));
    let fits = |n: usize| n == len || n == 1;

    if len == 0 {
        return Ok(0);
    }
    if fits(bases) && fits(cutouts) && masks.map_or(true, fits) {
        Ok(len)
    } else {
        Err(Error::BatchSizeMismatch {
            bases,
            cutouts,
            masks: masks.unwrap_or(0),
        })
    }
}

#[inline]
fn broadcast(items: &[Raster], index: usize) -> &Raster {
    if items.len() == 1 {
        &items[0]
    } else {
        &items[index]
    }
}
