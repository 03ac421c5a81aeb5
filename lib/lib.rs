//! Models the complex envelope of an ultrashort laser pulse on a discretized
//! spatial/temporal grid and propagates it through free space with a spectral
//! (angular-spectrum) transfer-function propagator.
//!
//! The crate is organized around three layers:
//! - [`grid`]: discretized coordinate systems for the two supported
//!   geometries, full 3-D Cartesian (`xyt`) and cylindrically symmetric
//!   (`rt`);
//! - [`longitudinal`], [`transverse`], [`profile`]: composable analytic (or
//!   tabulated) temporal and spatial mode functions, combined into a single
//!   complex envelope normalized to a target pulse energy;
//! - [`laser`]: a pulse container that samples a profile onto a grid and
//!   advances the stored field by arbitrary longitudinal distances via the
//!   free-space dispersion relation, truncating evanescent components.

pub mod error;
pub mod units;
pub mod utils;
pub mod interp;
pub mod grid;
pub mod longitudinal;
pub mod transverse;
pub mod profile;
pub mod laser;

/// Samples per transverse axis in the pulse-energy normalization quadrature.
pub(crate) const NORM_SAMPLES_TRANSVERSE: usize = 400;
/// Samples over the temporal window in the pulse-energy normalization
/// quadrature.
pub(crate) const NORM_SAMPLES_LONGITUDINAL: usize = 2000;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
