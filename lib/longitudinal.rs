//! Temporal (longitudinal) envelope profiles.
//!
//! Each variant is a pure function of its parameters and the sample
//! coordinates; evaluation mutates no state and is safe to call from
//! concurrent readers.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{ Arr1, error::ProfileError };

/// Complex temporal envelope of a pulse at fixed transverse position.
#[derive(Clone, Debug)]
pub enum LongitudinalProfile {
    /// Gaussian envelope
    /// `exp(-((t - t_peak)/tau)^2) · exp(i·(phi + chirp·(t - t_peak)^2))`.
    Gaussian {
        /// Duration parameter (s).
        tau: f64,
        /// Time of peak amplitude (s).
        t_peak: f64,
        /// Quadratic phase coefficient (rad s^-2); zero means no chirp.
        chirp: f64,
        /// Constant carrier-envelope phase offset (rad).
        cep_phase: f64,
    },
}

impl LongitudinalProfile {
    /// Unchirped Gaussian envelope of duration `tau` peaking at `t_peak`.
    pub fn gaussian(tau: f64, t_peak: f64) -> Result<Self, ProfileError> {
        ProfileError::check_duration(tau)?;
        Ok(Self::Gaussian { tau, t_peak, chirp: 0.0, cep_phase: 0.0 })
    }

    /// Add a quadratic chirp phase `chirp·(t - t_peak)^2`.
    pub fn with_chirp(self, chirp: f64) -> Self {
        match self {
            Self::Gaussian { tau, t_peak, cep_phase, .. } => {
                Self::Gaussian { tau, t_peak, chirp, cep_phase }
            }
        }
    }

    /// Add a constant carrier-envelope phase offset.
    pub fn with_cep_phase(self, cep_phase: f64) -> Self {
        match self {
            Self::Gaussian { tau, t_peak, chirp, .. } => {
                Self::Gaussian { tau, t_peak, chirp, cep_phase }
            }
        }
    }

    /// Evaluate the envelope pointwise over an array of time coordinates.
    pub fn evaluate<S>(&self, t: &Arr1<S>) -> nd::Array1<C64>
    where S: nd::Data<Elem = f64>
    {
        match self {
            Self::Gaussian { tau, t_peak, chirp, cep_phase } => {
                t.mapv(|tk| {
                    let u = (tk - t_peak) / tau;
                    C64::from_polar(
                        (-u * u).exp(),
                        cep_phase + chirp * (tk - t_peak).powi(2),
                    )
                })
            }
        }
    }

    // temporal window over which the envelope carries essentially all of its
    // power, for the normalization quadrature
    pub(crate) fn ref_window(&self) -> (f64, f64) {
        match self {
            Self::Gaussian { tau, t_peak, .. } => {
                (t_peak - 6.0 * tau, t_peak + 6.0 * tau)
            }
        }
    }
}
