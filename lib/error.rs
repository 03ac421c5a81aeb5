//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! All errors are raised synchronously at the point of construction or call;
//! none are retried internally. Construction of a grid, profile, or laser
//! either succeeds fully or fails with no usable partial object.
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from [`Grid`][crate::grid::Grid] construction.
#[derive(Debug, Error)]
pub enum GridError {
    /// Returned when a geometry tag is not one of `"xyt"` or `"rt"`.
    #[error("unrecognized geometry tag '{0}'; expected \"xyt\" or \"rt\"")]
    InvalidGeometry(String),

    /// Returned when bounds or sample counts do not match the number of axes
    /// implied by the geometry.
    #[error("expected {expected} axes for this geometry; got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Returned when an axis has fewer than two samples.
    #[error("each axis needs at least two samples; got {0}")]
    BadSampleCount(usize),

    /// Returned when an axis has `upper <= lower`.
    #[error("axis bounds must satisfy upper > lower; got [{0}, {1}]")]
    InvertedBounds(f64, f64),

    /// Returned when the radial axis of a cylindrical grid starts below zero.
    #[error("radial axis must start at r >= 0; got {0}")]
    NegativeRadius(f64),
}

/// Returned from profile constructors and evaluation.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Returned when a non-positive waist is encountered.
    #[error("waist must be greater than 0; got {0}")]
    BadWaist(f64),

    /// Returned when a non-positive duration is encountered.
    #[error("duration must be greater than 0; got {0}")]
    BadDuration(f64),

    /// Returned when a non-positive wavelength is encountered.
    #[error("wavelength must be greater than 0; got {0}")]
    BadWavelength(f64),

    /// Returned when a non-positive pulse energy is encountered.
    #[error("pulse energy must be greater than 0; got {0}")]
    BadEnergy(f64),

    /// Returned when a non-positive super-Gaussian order is encountered.
    #[error("super-Gaussian order must be greater than 0; got {0}")]
    BadOrder(f64),

    /// Returned when a polarization vector has zero magnitude.
    #[error("polarization vector must have nonzero magnitude")]
    BadPolarization,

    /// Returned when tabulated-profile axes are not strictly ascending or do
    /// not match the table shape.
    #[error("tabulated profile axes must be strictly ascending and match the table shape")]
    BadTable,

    /// Returned when a profile carries no power over its reference domain, in
    /// which case no normalization to a finite pulse energy exists.
    #[error("profile has zero power over its reference domain; cannot normalize")]
    ZeroPower,

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),
}

impl ProfileError {
    pub(crate) fn check_waist(w0: f64) -> Result<(), Self> {
        (w0 > 0.0).then_some(()).ok_or(Self::BadWaist(w0))
    }

    pub(crate) fn check_duration(tau: f64) -> Result<(), Self> {
        (tau > 0.0).then_some(()).ok_or(Self::BadDuration(tau))
    }

    pub(crate) fn check_wavelength(lambda0: f64) -> Result<(), Self> {
        (lambda0 > 0.0).then_some(()).ok_or(Self::BadWavelength(lambda0))
    }

    pub(crate) fn check_energy(energy: f64) -> Result<(), Self> {
        (energy > 0.0).then_some(()).ok_or(Self::BadEnergy(energy))
    }

    pub(crate) fn check_order(n_order: f64) -> Result<(), Self> {
        (n_order > 0.0).then_some(()).ok_or(Self::BadOrder(n_order))
    }
}

/// Returned from [`Laser`][crate::laser::Laser] construction and propagation.
#[derive(Debug, Error)]
pub enum LaserError {
    /// Returned when a propagation distance is not finite.
    #[error("propagation distance must be finite; got {0}")]
    BadDistance(f64),

    /// [`LinalgError`], raised when the radial spectral transform matrix
    /// cannot be inverted.
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),

    /// [`GridError`]
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    /// [`ProfileError`]
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
}
