//! Transverse (spatial) mode profiles.
//!
//! Each variant evaluates pointwise over paired Cartesian coordinate arrays;
//! profiles defined in polar form convert internally. Evaluation is a pure
//! function of the profile parameters and the sample coordinates.

use std::f64::consts::SQRT_2;
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    error::{ LengthError, ProfileError },
    interp::{ interp1, interp2 },
    utils::{ hermite, laguerre },
};

/// Complex spatial mode amplitude in the plane transverse to propagation.
#[derive(Clone, Debug)]
pub enum TransverseProfile {
    /// `exp(-(x^2 + y^2)/w0^2)`.
    Gaussian { w0: f64 },
    /// Laguerre-Gaussian mode in polar form,
    /// `L_p^|m|(2r^2/w0^2) · (r·√2/w0)^|m| · exp(-r^2/w0^2) · exp(i·m·θ)`.
    ///
    /// `p` is the radial index; the sign of the azimuthal index `m` sets the
    /// direction of the azimuthal phase ramp.
    LaguerreGaussian { w0: f64, p: u32, m: i32 },
    /// `H_nx(√2·x/w0) · H_ny(√2·y/w0) · exp(-(x^2 + y^2)/w0^2)`.
    HermiteGaussian { w0: f64, n_x: u32, n_y: u32 },
    /// `exp(-(r/w0)^n)`; tends to a flat-top disk of radius `w0` as
    /// `n → ∞`.
    SuperGaussian { w0: f64, n_order: f64 },
    /// Tabulated 2-D mode; bilinear interpolation inside the sampled ranges,
    /// zero amplitude outside.
    FromArray {
        x_axis: nd::Array1<f64>,
        y_axis: nd::Array1<f64>,
        table: nd::Array2<C64>,
    },
    /// Tabulated azimuthally symmetric mode sampled over radius; linear
    /// interpolation inside the sampled range, zero amplitude outside.
    FromRadialArray {
        r_axis: nd::Array1<f64>,
        values: nd::Array1<C64>,
    },
}

fn ascending(axis: &nd::Array1<f64>) -> bool {
    axis.len() >= 2
        && axis.iter().zip(axis.iter().skip(1)).all(|(a, b)| a < b)
}

impl TransverseProfile {
    /// Fundamental Gaussian mode of waist `w0`.
    pub fn gaussian(w0: f64) -> Result<Self, ProfileError> {
        ProfileError::check_waist(w0)?;
        Ok(Self::Gaussian { w0 })
    }

    /// Laguerre-Gaussian mode of waist `w0`, radial index `p`, and azimuthal
    /// index `m`.
    pub fn laguerre_gaussian(w0: f64, p: u32, m: i32)
        -> Result<Self, ProfileError>
    {
        ProfileError::check_waist(w0)?;
        Ok(Self::LaguerreGaussian { w0, p, m })
    }

    /// Hermite-Gaussian mode of waist `w0` and mode orders `(n_x, n_y)`.
    pub fn hermite_gaussian(w0: f64, n_x: u32, n_y: u32)
        -> Result<Self, ProfileError>
    {
        ProfileError::check_waist(w0)?;
        Ok(Self::HermiteGaussian { w0, n_x, n_y })
    }

    /// Super-Gaussian mode of waist `w0` and order `n_order`.
    pub fn super_gaussian(w0: f64, n_order: f64) -> Result<Self, ProfileError> {
        ProfileError::check_waist(w0)?;
        ProfileError::check_order(n_order)?;
        Ok(Self::SuperGaussian { w0, n_order })
    }

    /// Tabulated 2-D mode over strictly ascending axes matching the table
    /// shape.
    pub fn from_array(
        x_axis: nd::Array1<f64>,
        y_axis: nd::Array1<f64>,
        table: nd::Array2<C64>,
    ) -> Result<Self, ProfileError> {
        let ok = ascending(&x_axis)
            && ascending(&y_axis)
            && x_axis.len() == table.nrows()
            && y_axis.len() == table.ncols();
        ok.then_some(()).ok_or(ProfileError::BadTable)?;
        Ok(Self::FromArray { x_axis, y_axis, table })
    }

    /// Tabulated radial mode over a strictly ascending, non-negative radial
    /// axis matching the value array.
    pub fn from_radial_array(
        r_axis: nd::Array1<f64>,
        values: nd::Array1<C64>,
    ) -> Result<Self, ProfileError> {
        let ok = ascending(&r_axis)
            && r_axis[0] >= 0.0
            && r_axis.len() == values.len();
        ok.then_some(()).ok_or(ProfileError::BadTable)?;
        Ok(Self::FromRadialArray { r_axis, values })
    }

    /// Evaluate the mode amplitude pointwise over paired coordinate arrays.
    pub fn evaluate<S, T>(&self, x: &Arr1<S>, y: &Arr1<T>)
        -> Result<nd::Array1<C64>, ProfileError>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
    {
        LengthError::check(x, y)?;
        let out: nd::Array1<C64> = match self {
            Self::Gaussian { w0 } => {
                nd::Zip::from(x).and(y)
                    .map_collect(|&xk, &yk| {
                        C64::from((-(xk * xk + yk * yk) / (w0 * w0)).exp())
                    })
            }
            Self::LaguerreGaussian { w0, p, m } => {
                let ma = m.unsigned_abs();
                nd::Zip::from(x).and(y)
                    .map_collect(|&xk, &yk| {
                        let r2 = xk * xk + yk * yk;
                        let r = r2.sqrt();
                        let theta = yk.atan2(xk);
                        let amp
                            = laguerre(*p, ma as f64, 2.0 * r2 / (w0 * w0))
                            * (r * SQRT_2 / w0).powi(ma as i32)
                            * (-r2 / (w0 * w0)).exp();
                        C64::cis(*m as f64 * theta) * amp
                    })
            }
            Self::HermiteGaussian { w0, n_x, n_y } => {
                nd::Zip::from(x).and(y)
                    .map_collect(|&xk, &yk| {
                        C64::from(
                            hermite(*n_x, SQRT_2 * xk / w0)
                            * hermite(*n_y, SQRT_2 * yk / w0)
                            * (-(xk * xk + yk * yk) / (w0 * w0)).exp()
                        )
                    })
            }
            Self::SuperGaussian { w0, n_order } => {
                nd::Zip::from(x).and(y)
                    .map_collect(|&xk, &yk| {
                        let r = xk.hypot(yk);
                        C64::from((-(r / w0).powf(*n_order)).exp())
                    })
            }
            Self::FromArray { x_axis, y_axis, table } => {
                nd::Zip::from(x).and(y)
                    .map_collect(|&xk, &yk| {
                        interp2(x_axis, y_axis, table, xk, yk)
                    })
            }
            Self::FromRadialArray { r_axis, values } => {
                nd::Zip::from(x).and(y)
                    .map_collect(|&xk, &yk| {
                        interp1(r_axis, values, xk.hypot(yk))
                    })
            }
        };
        Ok(out)
    }

    // half-width of a square centered on the origin that contains essentially
    // all of the mode's power, for the normalization quadrature
    pub(crate) fn ref_halfwidth(&self) -> f64 {
        match self {
            Self::Gaussian { w0 } => 5.0 * w0,
            Self::LaguerreGaussian { w0, p, m } => {
                5.0 * w0 * ((2 * p + m.unsigned_abs() + 1) as f64).sqrt()
            }
            Self::HermiteGaussian { w0, n_x, n_y } => {
                5.0 * w0 * ((n_x.max(n_y) + 1) as f64).sqrt()
            }
            Self::SuperGaussian { w0, n_order } => {
                // radius at which |T|^2 has decayed to exp(-16); low orders
                // have heavy tails and need a much wider domain than w0
                w0 * 8.0_f64.powf(1.0 / n_order)
            }
            Self::FromArray { x_axis, y_axis, .. } => {
                let n = x_axis.len();
                let m = y_axis.len();
                x_axis[0].abs()
                    .max(x_axis[n - 1].abs())
                    .max(y_axis[0].abs())
                    .max(y_axis[m - 1].abs())
            }
            Self::FromRadialArray { r_axis, .. } => r_axis[r_axis.len() - 1],
        }
    }
}
