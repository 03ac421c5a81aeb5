//! Discretized coordinate systems for the two supported pulse geometries.

use ndarray as nd;
use std::str::FromStr;
use crate::error::GridError;

/// Geometry of a simulation grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dim {
    /// Full 3-D Cartesian geometry with axes (x, y, t).
    XYT,
    /// Cylindrically symmetric geometry with axes (r, t).
    ///
    /// Only the azimuthal mode 0 component of the field is tracked.
    RT,
}

impl Dim {
    /// Number of coordinate axes implied by the geometry.
    pub fn naxes(self) -> usize {
        match self {
            Self::XYT => 3,
            Self::RT => 2,
        }
    }
}

impl FromStr for Dim {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, GridError> {
        match s {
            "xyt" => Ok(Self::XYT),
            "rt" => Ok(Self::RT),
            _ => Err(GridError::InvalidGeometry(s.to_string())),
        }
    }
}

/// Evenly sampled coordinate axes over one of the supported geometries.
///
/// Transverse Cartesian and temporal axes are node-centered: `n` samples
/// spanning `[lo, hi]` inclusive with spacing `(hi - lo)/(n - 1)`. The radial
/// axis of an [`RT`][Dim::RT] grid is cell-centered: `n` samples at
/// `lo + (i + 1/2)·dr` with `dr = (hi - lo)/n`, so neither `r = lo` nor
/// `r = hi` is sampled. Cell centering keeps the radial spectral transform
/// used by propagation invertible (every radial basis function vanishes at
/// the aperture edge).
#[derive(Clone, Debug)]
pub struct Grid {
    dim: Dim,
    lo: Vec<f64>,
    hi: Vec<f64>,
    shape: Vec<usize>,
    axes: Vec<nd::Array1<f64>>,
    spacing: Vec<f64>,
}

impl Grid {
    /// Validate bounds and sample counts for `dim` and derive the coordinate
    /// axes.
    pub fn new(dim: Dim, lo: &[f64], hi: &[f64], npoints: &[usize])
        -> Result<Self, GridError>
    {
        let naxes = dim.naxes();
        for got in [lo.len(), hi.len(), npoints.len()] {
            if got != naxes {
                return Err(GridError::DimensionMismatch { expected: naxes, got });
            }
        }
        for (&l, &h) in lo.iter().zip(hi) {
            if h <= l { return Err(GridError::InvertedBounds(l, h)); }
        }
        for &n in npoints {
            if n < 2 { return Err(GridError::BadSampleCount(n)); }
        }
        if dim == Dim::RT && lo[0] < 0.0 {
            return Err(GridError::NegativeRadius(lo[0]));
        }

        let mut axes: Vec<nd::Array1<f64>> = Vec::with_capacity(naxes);
        let mut spacing: Vec<f64> = Vec::with_capacity(naxes);
        for (ax, ((&l, &h), &n)) in
            lo.iter().zip(hi).zip(npoints).enumerate()
        {
            if dim == Dim::RT && ax == 0 {
                let dr = (h - l) / n as f64;
                axes.push(
                    (0..n).map(|i| l + (i as f64 + 0.5) * dr).collect()
                );
                spacing.push(dr);
            } else {
                axes.push(nd::Array1::linspace(l, h, n));
                spacing.push((h - l) / (n - 1) as f64);
            }
        }
        Ok(Self {
            dim,
            lo: lo.to_vec(),
            hi: hi.to_vec(),
            shape: npoints.to_vec(),
            axes,
            spacing,
        })
    }

    /// Geometry of the grid.
    pub fn dim(&self) -> Dim { self.dim }

    /// Per-axis lower bounds.
    pub fn lo(&self) -> &[f64] { &self.lo }

    /// Per-axis upper bounds.
    pub fn hi(&self) -> &[f64] { &self.hi }

    /// Per-axis sample counts.
    pub fn shape(&self) -> &[usize] { &self.shape }

    /// All coordinate axes, in geometry order.
    pub fn axes(&self) -> &[nd::Array1<f64>] { &self.axes }

    /// A single coordinate axis.
    ///
    /// *Panics if `ax` is out of range for the geometry*.
    pub fn axis(&self, ax: usize) -> &nd::Array1<f64> { &self.axes[ax] }

    /// Per-axis sample spacings.
    pub fn spacing(&self) -> &[f64] { &self.spacing }
}
