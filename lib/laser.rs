//! Pulse container and the spectral free-space propagator.
//!
//! A [`Laser`] samples a [`CombinedProfile`] onto a [`Grid`] at construction
//! and owns the resulting field exclusively; [`Laser::propagate`] advances
//! the field in place by an arbitrary longitudinal distance.
//!
//! Propagation works in the spectral domain: the field is transformed along
//! every transverse axis and the temporal axis, each spectral component is
//! multiplied by `exp(i·kz·distance)` with `kz` from the free-space
//! dispersion relation `kz^2 = (ω/c)^2 - k⊥^2`, and the result is
//! transformed back. Components with `kz^2 <= 0` are evanescent: they are
//! zeroed outright rather than allowed to grow without bound under
//! back-propagation. The truncation is a deterministic numerical policy, not
//! an error, and is applied identically for either sign of the distance.

use std::f64::consts::TAU;
use ndarray as nd;
use ndarray_linalg::Inverse;
use num_complex::Complex64 as C64;
use num_traits::Zero;
use crate::{
    error::LaserError,
    grid::{ Dim, Grid },
    profile::CombinedProfile,
    units,
    utils::{
        bessel_j0, bessel_j0_zero, fft_axis, fft_freq, ifft_axis, trapz,
    },
};

pub type LaserResult<T> = Result<T, LaserError>;

/// Complex envelope samples over a grid, shaped exactly as the grid's sample
/// counts.
#[derive(Clone, Debug)]
pub enum Field {
    /// Indexed `[x, y, t]`.
    Cartesian(nd::Array3<C64>),
    /// Indexed `[r, t]`; azimuthal mode 0.
    Cylindrical(nd::Array2<C64>),
}

impl Field {
    /// Per-axis sample counts.
    pub fn shape(&self) -> &[usize] {
        match self {
            Self::Cartesian(f) => f.shape(),
            Self::Cylindrical(f) => f.shape(),
        }
    }

    /// Iterate over all samples in logical order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &C64> + '_> {
        match self {
            Self::Cartesian(f) => Box::new(f.iter()),
            Self::Cylindrical(f) => Box::new(f.iter()),
        }
    }
}

/// An ultrashort pulse discretized on a grid.
///
/// The grid, wavelength, and polarization are exposed as stable read-only
/// views for downstream serialization; the field is mutated in place only by
/// [`propagate`][Self::propagate].
#[derive(Clone, Debug)]
pub struct Laser {
    grid: Grid,
    field: Field,
    wavelength: f64,
    pol: (f64, f64),
}

impl Laser {
    /// Build the grid for `dim` and sample `profile` onto its full
    /// coordinate mesh.
    ///
    /// Construction is atomic: any invalid parameter fails before a field is
    /// allocated.
    pub fn new(
        dim: Dim,
        lo: &[f64],
        hi: &[f64],
        npoints: &[usize],
        profile: &CombinedProfile,
    ) -> LaserResult<Self> {
        let grid = Grid::new(dim, lo, hi, npoints)?;
        let field = sample_field(&grid, profile)?;
        Ok(Self {
            grid,
            field,
            wavelength: profile.wavelength(),
            pol: profile.polarization(),
        })
    }

    /// The grid the field is sampled on.
    pub fn grid(&self) -> &Grid { &self.grid }

    /// The stored envelope.
    pub fn field(&self) -> &Field { &self.field }

    /// Central wavelength (m).
    pub fn wavelength(&self) -> f64 { self.wavelength }

    /// Unit-magnitude polarization vector.
    pub fn polarization(&self) -> (f64, f64) { self.pol }

    /// Advance the stored field by `distance` meters of free space, mutating
    /// it in place.
    ///
    /// Negative distances back-propagate. `propagate(0.0)` is the identity
    /// up to round-off, and consecutive calls compose: `propagate(a)` then
    /// `propagate(b)` matches a single `propagate(a + b)` for fields
    /// dominated by propagating modes.
    pub fn propagate(&mut self, distance: f64) -> LaserResult<()> {
        if !distance.is_finite() {
            return Err(LaserError::BadDistance(distance));
        }
        let omega0 = TAU * units::c / self.wavelength;
        match &mut self.field {
            Field::Cartesian(f) => {
                propagate_xyt(&self.grid, f, omega0, distance)
            }
            Field::Cylindrical(f) => {
                propagate_rt(&self.grid, f, omega0, distance)
            }
        }
    }

    /// Total pulse energy (J) of the stored field,
    /// `(e0/2)·∫|E|^2 dA·(c dt)` discretized on the grid.
    pub fn energy(&self) -> f64 {
        match &self.field {
            Field::Cartesian(f) => {
                let dx = self.grid.spacing()[0];
                let dy = self.grid.spacing()[1];
                let dt = self.grid.spacing()[2];
                let (nx, ny, _) = f.dim();
                let mut plane: nd::Array2<f64> = nd::Array2::zeros((nx, ny));
                nd::Zip::indexed(&mut plane)
                    .for_each(|(i, j), p| {
                        let sq = f.slice(nd::s![i, j, ..])
                            .mapv(|v| v.norm_sqr());
                        *p = trapz(&sq, dt);
                    });
                let cols: nd::Array1<f64>
                    = plane.rows().into_iter()
                    .map(|row| trapz(&row, dy))
                    .collect();
                0.5 * units::e0 * units::c * trapz(&cols, dx)
            }
            Field::Cylindrical(f) => {
                let dr = self.grid.spacing()[0];
                let dt = self.grid.spacing()[1];
                let r = self.grid.axis(0);
                // midpoint rule in r (the axis is cell-centered), trapezoid
                // in t
                let integ: f64
                    = f.rows().into_iter().zip(r)
                    .map(|(row, &ri)| {
                        let sq = row.mapv(|v| v.norm_sqr());
                        TAU * ri * trapz(&sq, dt) * dr
                    })
                    .sum();
                0.5 * units::e0 * units::c * integ
            }
        }
    }
}

// sample the profile on the full coordinate mesh; for RT the transverse
// coordinates are (r, 0), i.e. the azimuthal mode 0 slice
fn sample_field(grid: &Grid, profile: &CombinedProfile)
    -> Result<Field, crate::error::ProfileError>
{
    match grid.dim() {
        Dim::XYT => {
            let (x, y, t) = (grid.axis(0), grid.axis(1), grid.axis(2));
            let (nx, ny, nt) = (x.len(), y.len(), t.len());
            let total = nx * ny * nt;
            let mut xs: Vec<f64> = Vec::with_capacity(total);
            let mut ys: Vec<f64> = Vec::with_capacity(total);
            let mut ts: Vec<f64> = Vec::with_capacity(total);
            for &xi in x {
                for &yj in y {
                    for &tk in t {
                        xs.push(xi);
                        ys.push(yj);
                        ts.push(tk);
                    }
                }
            }
            let vals = profile.evaluate(
                &nd::Array1::from_vec(xs),
                &nd::Array1::from_vec(ys),
                &nd::Array1::from_vec(ts),
            )?;
            let arr = vals.into_shape((nx, ny, nt)).unwrap();
            Ok(Field::Cartesian(arr))
        }
        Dim::RT => {
            let (r, t) = (grid.axis(0), grid.axis(1));
            let (nr, nt) = (r.len(), t.len());
            let total = nr * nt;
            let mut rs: Vec<f64> = Vec::with_capacity(total);
            let mut ts: Vec<f64> = Vec::with_capacity(total);
            for &ri in r {
                for &tk in t {
                    rs.push(ri);
                    ts.push(tk);
                }
            }
            let vals = profile.evaluate(
                &nd::Array1::from_vec(rs),
                &nd::Array1::zeros(total),
                &nd::Array1::from_vec(ts),
            )?;
            let arr = vals.into_shape((nr, nt)).unwrap();
            Ok(Field::Cylindrical(arr))
        }
    }
}

// angular-spectrum propagation on a Cartesian grid: FFT along x, y, t,
// multiply by the transfer function, inverse FFT
//
// the envelope carries an implicit exp(-i·ω0·t) carrier, so temporal bin f
// maps to the physical frequency ω0 - 2π·f
fn propagate_xyt(
    grid: &Grid,
    field: &mut nd::Array3<C64>,
    omega0: f64,
    distance: f64,
) -> LaserResult<()> {
    let (dx, dy, dt)
        = (grid.spacing()[0], grid.spacing()[1], grid.spacing()[2]);
    let (nx, ny, nt) = field.dim();
    let kx = fft_freq(nx, dx).mapv(|fk| TAU * fk);
    let ky = fft_freq(ny, dy).mapv(|fk| TAU * fk);
    let w = fft_freq(nt, dt).mapv(|fk| omega0 - TAU * fk);

    let mut spec = fft_axis(&*field, 0);
    spec = fft_axis(&spec, 1);
    spec = fft_axis(&spec, 2);
    nd::Zip::indexed(&mut spec)
        .for_each(|(i, j, k), s| {
            let kz2 = (w[k] / units::c).powi(2)
                - kx[i].powi(2)
                - ky[j].powi(2);
            if kz2 > 0.0 {
                *s *= C64::cis(kz2.sqrt() * distance);
            } else {
                *s = C64::zero();
            }
        });
    let mut out = ifft_axis(&spec, 2);
    out = ifft_axis(&out, 1);
    out = ifft_axis(&out, 0);
    out.move_into(field.view_mut());
    Ok(())
}

// propagation on a cylindrical grid for azimuthal mode 0: a Fourier-Bessel
// (discrete Hankel, order 0) transform along r, an FFT along t, the same
// transfer function with kr = α_j/rmax, and the inverse transforms
//
// the backward matrix J0(α_j·r_i/rmax) is exactly invertible on the
// cell-centered radial axis; its inverse is the forward transform
fn propagate_rt(
    grid: &Grid,
    field: &mut nd::Array2<C64>,
    omega0: f64,
    distance: f64,
) -> LaserResult<()> {
    let (nr, nt) = field.dim();
    let r = grid.axis(0);
    let rmax = grid.hi()[0];
    let dt = grid.spacing()[1];
    let alphas: nd::Array1<f64>
        = (1..=nr).map(bessel_j0_zero).collect();
    let kr = alphas.mapv(|a| a / rmax);
    let back = nd::Array2::from_shape_fn((nr, nr), |(i, j)| {
        bessel_j0(alphas[j] * r[i] / rmax)
    });
    let fwd = back.inv()?;
    let back = back.mapv(C64::from);
    let fwd = fwd.mapv(C64::from);
    let w = fft_freq(nt, dt).mapv(|fk| omega0 - TAU * fk);

    let coef = fwd.dot(&*field);
    let mut spec = fft_axis(&coef, 1);
    nd::Zip::indexed(&mut spec)
        .for_each(|(j, k), s| {
            let kz2 = (w[k] / units::c).powi(2) - kr[j].powi(2);
            if kz2 > 0.0 {
                *s *= C64::cis(kz2.sqrt() * distance);
            } else {
                *s = C64::zero();
            }
        });
    let coef = ifft_axis(&spec, 1);
    let out = back.dot(&coef);
    out.move_into(field.view_mut());
    Ok(())
}
