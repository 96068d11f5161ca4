//! Overlap (intersection over union) between rasterized regions.
use ndarray::Zip;
use rayon::prelude::*;

use crate::{
    bounds::Frame,
    config::OverlapConfig,
    error::{Error, Result},
    raster::Raster,
    shape::{Region, Shape},
};

/// Computes the overlap between two regions as the ratio of shared pixels to covered pixels.
///
/// Both regions are rasterized onto the union of their bounds, clipped to `frame` if one is
/// given. Pixels covered by `ignore` count towards neither the intersection nor the union.
///
/// Two empty regions are considered identical and have an overlap of `1.0`. Regions that lie
/// completely outside of `frame` have an overlap of `0.0`.
#[must_use]
pub fn overlap(first: &Shape, second: &Shape, frame: Option<Frame>, ignore: Option<&Shape>) -> f32 {
    let union = first.bounds().union(&second.bounds());
    // single-row and single-column unions are not empty, their pixels are scored
    if union.is_empty() {
        tracing::trace!("Both regions are empty");
        return 1.0;
    }

    let window = match frame {
        Some(frame) => union.clip_to_frame(frame),
        None => union,
    };
    if window.is_empty() {
        tracing::trace!(?union, ?frame, "Regions lie outside of the frame");
        return 0.0;
    }

    let first = first.rasterize(window);
    let second = second.rasterize(window);
    let ignore = ignore
        .filter(|shape| !matches!(shape, Shape::Empty))
        .map(|shape| shape.rasterize(window));

    let (intersection, union) = count_pixels(&first, &second, ignore.as_ref());
    if union == 0 {
        return 0.0;
    }

    intersection as f32 / union as f32
}

/// Counts the pixels set in both rasters and in either raster, skipping ignored pixels.
fn count_pixels(first: &Raster, second: &Raster, ignore: Option<&Raster>) -> (usize, usize) {
    let mut intersection = 0;
    let mut union = 0;

    let mut tally = |a: u8, b: u8| {
        if a != 0 || b != 0 {
            union += 1;
            if a != 0 && b != 0 {
                intersection += 1;
            }
        }
    };

    match ignore {
        Some(ignore) => Zip::from(first)
            .and(second)
            .and(ignore)
            .for_each(|&a, &b, &ignored| {
                if ignored == 0 {
                    tally(a, b);
                }
            }),
        None => Zip::from(first).and(second).for_each(|&a, &b| tally(a, b)),
    }

    (intersection, union)
}

/// Computes the pairwise overlap of two equally long lists of regions.
///
/// This uses the [`OverlapConfig::default`] execution settings, see [`OverlapEngine::overlaps_in`].
pub fn overlaps(
    first: &[Shape],
    second: &[Shape],
    frame: Option<Frame>,
    ignore: Option<&[Shape]>,
) -> Result<Vec<f32>> {
    OverlapEngine::default().overlaps_in(first, second, frame, ignore)
}

fn ensure_same_length(first: usize, second: usize) -> Result<()> {
    if first != second {
        tracing::warn!(first, second, "Region lists are not of the same size");
        return Err(Error::LengthMismatch { first, second });
    }

    Ok(())
}

/// Scores regions using the settings of an [`OverlapConfig`].
#[derive(Debug, Clone, Default)]
pub struct OverlapEngine {
    config: OverlapConfig,
}

impl OverlapEngine {
    #[must_use]
    pub fn new(config: OverlapConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &OverlapConfig {
        &self.config
    }

    /// Computes the overlap of two regions inside the configured frame, see [`overlap`].
    #[must_use]
    pub fn overlap(&self, first: &Shape, second: &Shape, ignore: Option<&Shape>) -> f32 {
        overlap(first, second, self.config.frame, ignore)
    }

    /// Computes the pairwise overlaps inside the configured frame, see [`Self::overlaps_in`].
    pub fn overlaps(
        &self,
        first: &[Shape],
        second: &[Shape],
        ignore: Option<&[Shape]>,
    ) -> Result<Vec<f32>> {
        self.overlaps_in(first, second, self.config.frame, ignore)
    }

    /// Computes the overlap of every pair `(first[i], second[i])`, ignoring `ignore[i]` if an
    /// ignore list is given.
    ///
    /// The result at index `i` always belongs to the pair at index `i`, also when the pairs are
    /// scored in parallel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the lists are not equally long.
    pub fn overlaps_in(
        &self,
        first: &[Shape],
        second: &[Shape],
        frame: Option<Frame>,
        ignore: Option<&[Shape]>,
    ) -> Result<Vec<f32>> {
        ensure_same_length(first.len(), second.len())?;
        if let Some(ignore) = ignore {
            ensure_same_length(first.len(), ignore.len())?;
        }

        let pairs = first.len();
        let parallel = self.config.parallel && pairs >= self.config.min_parallel_batch;
        tracing::debug!(pairs, parallel, "Computing overlaps");

        let score =
            |i: usize| overlap(&first[i], &second[i], frame, ignore.map(|ignore| &ignore[i]));

        let overlaps: Vec<f32> = if parallel {
            (0..pairs).into_par_iter().map(score).collect()
        } else {
            (0..pairs).map(score).collect()
        };

        Ok(overlaps)
    }
}
