//! Piecewise-linear interpolation along latitude
//!
//! Latitude axes in model output run either south-to-north or north-to-south,
//! so the interpolator sorts the grid once and remembers where each sorted
//! point came from. Targets outside the grid are rejected; there is no
//! extrapolation.

use crate::errors::{Result, ZonalPlotError};
use ndarray::{Array1, Array2, ArrayView1, Axis};

/// Where a target falls on the sorted grid, in terms of original indices
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bracket {
    /// The target coincides with a grid point
    Exact(usize),
    /// The target lies strictly between two grid points
    Between {
        lower: usize,
        upper: usize,
        weight: f64,
    },
}

impl Bracket {
    /// Evaluates the interpolant for one set of values aligned with the grid.
    pub fn apply(&self, values: ArrayView1<'_, f64>) -> f64 {
        match *self {
            Bracket::Exact(i) => values[i],
            Bracket::Between {
                lower,
                upper,
                weight,
            } => {
                let y0 = values[lower];
                let y1 = values[upper];
                y0 + (y1 - y0) * weight
            }
        }
    }
}

/// Linear interpolant over a fixed 1-D coordinate grid
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    /// Grid coordinates in ascending order
    sorted: Vec<f64>,
    /// `order[k]` is the original index of `sorted[k]`
    order: Vec<usize>,
}

impl LinearInterpolator {
    /// Builds an interpolant over `coordinates`, which may be in any order.
    pub fn new(coordinates: &[f64]) -> Result<Self> {
        if coordinates.len() < 2 {
            return Err(ZonalPlotError::TooFewLatitudes {
                found: coordinates.len(),
            });
        }
        if let Some((index, &value)) = coordinates
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite())
        {
            return Err(ZonalPlotError::InvalidCoordinate { index, value });
        }

        let mut order: Vec<usize> = (0..coordinates.len()).collect();
        order.sort_by(|&a, &b| coordinates[a].total_cmp(&coordinates[b]));
        let sorted = order.iter().map(|&i| coordinates[i]).collect();

        Ok(Self { sorted, order })
    }

    /// Number of grid points
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Always false; construction requires at least two points
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Smallest and largest grid coordinate
    pub fn bounds(&self) -> (f64, f64) {
        (self.sorted[0], self.sorted[self.sorted.len() - 1])
    }

    /// Locates `target` on the grid, failing if it is outside the bounds.
    pub fn locate(&self, target: f64) -> Result<Bracket> {
        let (min, max) = self.bounds();
        // NaN fails both comparisons and lands here too
        if !(target >= min && target <= max) {
            return Err(ZonalPlotError::LatitudeOutOfRange { target, min, max });
        }

        let k = self.sorted.partition_point(|&x| x < target);
        if self.sorted[k] == target {
            return Ok(Bracket::Exact(self.order[k]));
        }

        // target > min, so k >= 1
        let (x0, x1) = (self.sorted[k - 1], self.sorted[k]);
        Ok(Bracket::Between {
            lower: self.order[k - 1],
            upper: self.order[k],
            weight: (target - x0) / (x1 - x0),
        })
    }

    /// Interpolates `values` (aligned with the original coordinates) at `target`.
    pub fn evaluate(&self, values: &[f64], target: f64) -> Result<f64> {
        if values.len() != self.len() {
            return Err(ZonalPlotError::LengthMismatch {
                expected: self.len(),
                found: values.len(),
            });
        }
        let bracket = self.locate(target)?;
        Ok(bracket.apply(ArrayView1::from(values)))
    }
}

/// Interpolates every time row of a (time, lat) array to one latitude.
///
/// The range check runs once, before any row is touched.
pub fn interpolate_to_latitude(
    lat: &Array1<f64>,
    zonal_mean: &Array2<f64>,
    target: f64,
) -> Result<Array1<f64>> {
    let interpolator = LinearInterpolator::new(&lat.to_vec())?;
    if zonal_mean.ncols() != interpolator.len() {
        return Err(ZonalPlotError::LengthMismatch {
            expected: interpolator.len(),
            found: zonal_mean.ncols(),
        });
    }

    let bracket = interpolator.locate(target)?;
    Ok(zonal_mean
        .axis_iter(Axis(0))
        .map(|row| bracket.apply(row))
        .collect())
}
