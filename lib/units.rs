#![allow(non_upper_case_globals)]

//! Physical constants needed by the pulse-energy normalization and the
//! free-space dispersion relation.
//!
//! Concrete values are taken from NIST.

/// speed of light in vacuum (m s^-1)
pub const c: f64 = 2.99792458e8;
//             +/- 0 (exact)

/// electric permittivity in vacuum (F m^-1)
pub const e0: f64 = 8.8541878128e-12;
//              +/- 0.0000000013e-12
