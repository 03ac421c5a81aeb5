//! Composition of one longitudinal and one transverse profile into a single
//! energy-normalized pulse envelope.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    NORM_SAMPLES_LONGITUDINAL,
    NORM_SAMPLES_TRANSVERSE,
    error::{ LengthError, ProfileError },
    longitudinal::LongitudinalProfile,
    transverse::TransverseProfile,
    units,
    utils::trapz,
};

/// A complete pulse envelope: one [`LongitudinalProfile`] and one
/// [`TransverseProfile`], scaled so that the total pulse energy matches a
/// target value.
///
/// The normalization scalar is computed once at construction; after that,
/// evaluation is a pure function of the sample coordinates and the profile is
/// safe to share across concurrent readers.
///
/// Polarization is carried as unit-magnitude metadata for downstream field
/// reconstruction; it is not folded into the scalar envelope.
#[derive(Clone, Debug)]
pub struct CombinedProfile {
    wavelength: f64,
    pol: (f64, f64),
    energy: f64,
    long: LongitudinalProfile,
    trans: TransverseProfile,
    norm: f64,
}

impl CombinedProfile {
    /// Combine a longitudinal and a transverse profile, normalizing so that
    /// the pulse carries `energy` joules.
    ///
    /// The polarization vector is normalized to unit magnitude; a zero vector
    /// is rejected.
    pub fn new(
        wavelength: f64,
        pol: (f64, f64),
        energy: f64,
        long: LongitudinalProfile,
        trans: TransverseProfile,
    ) -> Result<Self, ProfileError> {
        ProfileError::check_wavelength(wavelength)?;
        ProfileError::check_energy(energy)?;
        let mag = pol.0.hypot(pol.1);
        if mag <= 0.0 { return Err(ProfileError::BadPolarization); }
        let pol = (pol.0 / mag, pol.1 / mag);
        let norm = norm_scalar(energy, &long, &trans)?;
        Ok(Self { wavelength, pol, energy, long, trans, norm })
    }

    /// Shorthand for the common all-Gaussian pulse: Gaussian temporal
    /// envelope of duration `tau` peaking at `t_peak`, fundamental Gaussian
    /// transverse mode of waist `w0`.
    pub fn gaussian(
        wavelength: f64,
        pol: (f64, f64),
        energy: f64,
        w0: f64,
        tau: f64,
        t_peak: f64,
    ) -> Result<Self, ProfileError> {
        Self::new(
            wavelength,
            pol,
            energy,
            LongitudinalProfile::gaussian(tau, t_peak)?,
            TransverseProfile::gaussian(w0)?,
        )
    }

    /// Evaluate the normalized envelope pointwise over equal-length
    /// coordinate arrays.
    pub fn evaluate<S, T, U>(&self, x: &Arr1<S>, y: &Arr1<T>, t: &Arr1<U>)
        -> Result<nd::Array1<C64>, ProfileError>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
        U: nd::Data<Elem = f64>,
    {
        LengthError::check(x, t)?;
        let trans = self.trans.evaluate(x, y)?;
        let long = self.long.evaluate(t);
        let out = nd::Zip::from(&trans).and(&long)
            .map_collect(|&tk, &lk| self.norm * tk * lk);
        Ok(out)
    }

    /// Central wavelength (m).
    pub fn wavelength(&self) -> f64 { self.wavelength }

    /// Angular carrier frequency `2π·c/wavelength` (rad s^-1).
    pub fn omega0(&self) -> f64 {
        std::f64::consts::TAU * units::c / self.wavelength
    }

    /// Unit-magnitude polarization vector.
    pub fn polarization(&self) -> (f64, f64) { self.pol }

    /// Target pulse energy (J).
    pub fn energy(&self) -> f64 { self.energy }
}

// scalar N such that (e0·c/2) · N^2 · ∬|T|^2 dx dy · ∫|L|^2 dt = energy,
// with both integrals taken by trapezoidal quadrature over the profiles'
// reference domains
fn norm_scalar(
    energy: f64,
    long: &LongitudinalProfile,
    trans: &TransverseProfile,
) -> Result<f64, ProfileError> {
    let n = NORM_SAMPLES_TRANSVERSE;
    let hw = trans.ref_halfwidth();
    let ax: nd::Array1<f64> = nd::Array1::linspace(-hw, hw, n);
    let d = ax[1] - ax[0];
    let mut rows: nd::Array1<f64> = nd::Array1::zeros(n);
    for (i, &yi) in ax.iter().enumerate() {
        let yrow = nd::Array1::from_elem(n, yi);
        let sq = trans.evaluate(&ax, &yrow)?.mapv(|v| v.norm_sqr());
        rows[i] = trapz(&sq, d);
    }
    let i_trans = trapz(&rows, d);

    let m = NORM_SAMPLES_LONGITUDINAL;
    let (t0, t1) = long.ref_window();
    let t: nd::Array1<f64> = nd::Array1::linspace(t0, t1, m);
    let sq = long.evaluate(&t).mapv(|v| v.norm_sqr());
    let i_long = trapz(&sq, t[1] - t[0]);

    let denom = 0.5 * units::e0 * units::c * i_trans * i_long;
    if !(denom > 0.0) { return Err(ProfileError::ZeroPower); }
    Ok((energy / denom).sqrt())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use super::*;

    // for a Gaussian/Gaussian profile the power integrals are analytic:
    // ∬|T|^2 = π·w0^2/2, ∫|L|^2 = tau·√(π/2)
    #[test]
    fn gaussian_norm_matches_closed_form() {
        let (w0, tau, energy) = (5.0e-6, 30.0e-15, 1.0);
        let profile = CombinedProfile::gaussian(
            0.8e-6, (1.0, 0.0), energy, w0, tau, 0.0).unwrap();
        let i_trans = std::f64::consts::PI * w0 * w0 / 2.0;
        let i_long = tau * (std::f64::consts::PI / 2.0).sqrt();
        let expected
            = (energy / (0.5 * units::e0 * units::c * i_trans * i_long))
            .sqrt();
        let x = nd::array![0.0];
        let y = nd::array![0.0];
        let t = nd::array![0.0];
        let peak = profile.evaluate(&x, &y, &t).unwrap()[0];
        assert_relative_eq!(peak.re, expected, max_relative = 1e-4);
        assert!(peak.im.abs() < 1e-12 * expected);
    }

    // for order n the transverse power integral is
    // 2π·w0^2·Γ(2/n)/(n·2^(2/n)); at n = 1/2 that is 3π·w0^2/2, and the
    // slowly decaying tail stresses the quadrature domain
    #[test]
    fn super_gaussian_low_order_norm_matches_closed_form() {
        let (w0, tau, energy) = (10.0e-6, 30.0e-15, 1.0);
        let profile = CombinedProfile::new(
            0.8e-6,
            (1.0, 0.0),
            energy,
            LongitudinalProfile::gaussian(tau, 0.0).unwrap(),
            TransverseProfile::super_gaussian(w0, 0.5).unwrap(),
        ).unwrap();
        let i_trans = 0.75 * std::f64::consts::TAU * w0 * w0;
        let i_long = tau * (std::f64::consts::PI / 2.0).sqrt();
        let expected
            = (energy / (0.5 * units::e0 * units::c * i_trans * i_long))
            .sqrt();
        let x = nd::array![0.0];
        let y = nd::array![0.0];
        let t = nd::array![0.0];
        let peak = profile.evaluate(&x, &y, &t).unwrap()[0];
        assert_relative_eq!(peak.re, expected, max_relative = 5e-3);
    }

    #[test]
    fn polarization_normalized() {
        let profile = CombinedProfile::gaussian(
            0.8e-6, (3.0, 4.0), 1.0, 5.0e-6, 30.0e-15, 0.0).unwrap();
        let (px, py) = profile.polarization();
        assert_relative_eq!(px.hypot(py), 1.0, max_relative = 1e-12);
        assert_relative_eq!(px, 0.6, max_relative = 1e-12);
        assert_relative_eq!(py, 0.8, max_relative = 1e-12);
    }

    #[test]
    fn rejects_bad_parameters() {
        let long = || LongitudinalProfile::gaussian(30.0e-15, 0.0).unwrap();
        let trans = || TransverseProfile::gaussian(5.0e-6).unwrap();
        assert!(matches!(
            CombinedProfile::new(0.0, (1.0, 0.0), 1.0, long(), trans()),
            Err(ProfileError::BadWavelength(_)),
        ));
        assert!(matches!(
            CombinedProfile::new(0.8e-6, (1.0, 0.0), -1.0, long(), trans()),
            Err(ProfileError::BadEnergy(_)),
        ));
        assert!(matches!(
            CombinedProfile::new(0.8e-6, (0.0, 0.0), 1.0, long(), trans()),
            Err(ProfileError::BadPolarization),
        ));
    }

    // an all-zero tabulated mode carries no power, so no finite
    // normalization scalar exists
    #[test]
    fn rejects_powerless_profile() {
        let axis = nd::Array1::linspace(-1.0e-5, 1.0e-5, 16);
        let table = nd::Array2::from_elem((16, 16), C64::from(0.0));
        let trans = TransverseProfile::from_array(
            axis.clone(), axis, table).unwrap();
        let long = LongitudinalProfile::gaussian(30.0e-15, 0.0).unwrap();
        assert!(matches!(
            CombinedProfile::new(0.8e-6, (1.0, 0.0), 1.0, long, trans),
            Err(ProfileError::ZeroPower),
        ));
    }

    #[test]
    fn evaluation_is_separable() {
        let profile = CombinedProfile::gaussian(
            0.8e-6, (1.0, 0.0), 1.0, 5.0e-6, 30.0e-15, 0.0).unwrap();
        let x = nd::array![1.0e-6, 2.0e-6];
        let y = nd::array![0.5e-6, 0.0];
        let t = nd::array![10.0e-15, -20.0e-15];
        let vals = profile.evaluate(&x, &y, &t).unwrap();
        let trans = TransverseProfile::gaussian(5.0e-6).unwrap()
            .evaluate(&x, &y).unwrap();
        let long = LongitudinalProfile::gaussian(30.0e-15, 0.0).unwrap()
            .evaluate(&t);
        let ratio0 = vals[0] / (trans[0] * long[0]);
        let ratio1 = vals[1] / (trans[1] * long[1]);
        assert_relative_eq!(ratio0.re, ratio1.re, max_relative = 1e-10);
        assert!(ratio0.im.abs() < 1e-9 * ratio0.re.abs());
        assert!(ratio1.im.abs() < 1e-9 * ratio1.re.abs());
    }
}
