//! Bin-edge generation for histogram definitions.

use crate::error::{JetkitError, Result};

/// Smallest admissible lower edge for log-spaced binning. Lower edges at or
/// below zero are clamped up to this so the logarithm stays defined.
const LOG_FLOOR: f64 = 1e-2;

/// `nbins + 1` edges evenly spaced in log10 between `xmin` and `xmax`,
/// single precision.
///
/// An `xmin <= 0` is clamped up to `1e-2`. Fails if `nbins` is zero or if
/// `xmax` is not positive.
pub fn log_bins(xmin: f64, xmax: f64, nbins: usize) -> Result<Vec<f32>> {
    if nbins < 1 {
        return Err(JetkitError::Binning(format!(
            "need at least one bin, got {nbins}"
        )));
    }
    let xmin = if xmin <= 0.0 { LOG_FLOOR } else { xmin };
    if xmax <= 0.0 {
        return Err(JetkitError::Binning(format!(
            "log spacing needs a positive maximum, got {xmax}"
        )));
    }

    let lo = xmin.log10();
    let hi = xmax.log10();
    let step = (hi - lo) / nbins as f64;
    Ok((0..=nbins)
        .map(|i| 10f64.powf(lo + step * i as f64) as f32)
        .collect())
}

/// `nbins + 1` edges evenly spaced between `xmin` and `xmax`, single
/// precision. Fails if `nbins` is zero.
pub fn lin_bins(xmin: f64, xmax: f64, nbins: usize) -> Result<Vec<f32>> {
    if nbins < 1 {
        return Err(JetkitError::Binning(format!(
            "need at least one bin, got {nbins}"
        )));
    }
    let width = (xmax - xmin) / nbins as f64;
    Ok((0..=nbins)
        .map(|i| (xmin + width * i as f64) as f32)
        .collect())
}
