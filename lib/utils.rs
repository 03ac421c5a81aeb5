//! Miscellaneous numerical tools.
//!
//! Everything here is a pure free function with no process-wide state: grid
//! quadrature, FFTs along single axes of N-dimensional arrays, and the
//! polynomial and Bessel evaluations behind the analytic mode functions and
//! the radial (Hankel) spectral transform.

use std::f64::consts::PI;
use ndarray::{ self as nd, Ix1, concatenate };
use ndrustfft as ndfft;
use num_complex::Complex64 as C64;

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S>(y: &nd::ArrayBase<S, Ix1>, dx: f64) -> f64
where S: nd::Data<Elem = f64>
{
    let n: usize = y.len();
    (dx / 2.0) * (y[0] + 2.0 * y.slice(nd::s![1..n - 1]).sum() + y[n - 1])
}

/// Generate an array of frequency-space coordinates to accompany a FFT of `n`
/// points for sampling time `dt`.
pub fn fft_freq(n: usize, dt: f64) -> nd::Array1<f64> {
    if n % 2 == 0 {
        let fp: nd::Array1<f64>
            = (0..n / 2)
            .map(|k| k as f64 / (n as f64 * dt))
            .collect();
        let fm: nd::Array1<f64>
            = (1..n / 2 + 1).rev()
            .map(|k| -(k as f64) / (n as f64 * dt))
            .collect();
        concatenate!(nd::Axis(0), fp, fm)
    } else {
        let fp: nd::Array1<f64>
            = (0..(n + 1) / 2)
            .map(|k| k as f64 / (n as f64 * dt))
            .collect();
        let fm: nd::Array1<f64>
            = (1..(n + 1) / 2).rev()
            .map(|k| -(k as f64) / (n as f64 * dt))
            .collect();
        concatenate!(nd::Axis(0), fp, fm)
    }
}

/// Perform the complex-valued FFT along one axis of an N-dimensional array.
pub fn fft_axis<D>(x: &nd::Array<C64, D>, axis: usize) -> nd::Array<C64, D>
where D: nd::Dimension
{
    let n: usize = x.shape()[axis];
    let mut buf: nd::Array<C64, D> = nd::Array::zeros(x.raw_dim());
    let mut handler: ndfft::FftHandler<f64> = ndfft::FftHandler::new(n);
    ndfft::ndfft(x, &mut buf, &mut handler, axis);
    buf
}

/// Perform the complex-valued inverse FFT (normalized by `1/n`) along one
/// axis of an N-dimensional array.
pub fn ifft_axis<D>(f: &nd::Array<C64, D>, axis: usize) -> nd::Array<C64, D>
where D: nd::Dimension
{
    let n: usize = f.shape()[axis];
    let mut buf: nd::Array<C64, D> = nd::Array::zeros(f.raw_dim());
    let mut handler: ndfft::FftHandler<f64> = ndfft::FftHandler::new(n);
    ndfft::ndifft(f, &mut buf, &mut handler, axis);
    buf
}

/// Evaluate the physicists' Hermite polynomial H_n at `x` via the usual
/// three-term recurrence.
pub fn hermite(n: u32, x: f64) -> f64 {
    let mut hm1: f64 = 1.0;
    if n == 0 { return hm1; }
    let mut h: f64 = 2.0 * x;
    for k in 1..n {
        let hp1 = 2.0 * x * h - 2.0 * (k as f64) * hm1;
        hm1 = h;
        h = hp1;
    }
    h
}

/// Evaluate the generalized Laguerre polynomial L_p^alpha at `x` via the
/// usual three-term recurrence.
pub fn laguerre(p: u32, alpha: f64, x: f64) -> f64 {
    let mut lm1: f64 = 1.0;
    if p == 0 { return lm1; }
    let mut l: f64 = 1.0 + alpha - x;
    for k in 1..p {
        let kf = k as f64;
        let lp1 = ((2.0 * kf + 1.0 + alpha - x) * l - (kf + alpha) * lm1)
            / (kf + 1.0);
        lm1 = l;
        l = lp1;
    }
    l
}

/// Evaluate the Bessel function of the first kind J_0 via rational (small
/// argument) and asymptotic (large argument) approximations.
///
/// Accurate to roughly one part in 10^8.
pub fn bessel_j0(x: f64) -> f64 {
    let ax = x.abs();
    if ax < 8.0 {
        let y = x * x;
        let p1
            = 57568490574.0
            + y * (-13362590354.0
            + y * (651619640.7
            + y * (-11214424.18
            + y * (77392.33017
            + y * (-184.9052456)))));
        let p2
            = 57568490411.0
            + y * (1029532985.0
            + y * (9494680.718
            + y * (59272.64853
            + y * (267.8532712
            + y))));
        p1 / p2
    } else {
        let z = 8.0 / ax;
        let y = z * z;
        let p1
            = 1.0
            + y * (-0.1098628627e-2
            + y * (0.2734510407e-4
            + y * (-0.2073370639e-5
            + y * 0.2093887211e-6)));
        let p2
            = -0.1562499995e-1
            + y * (0.1430488765e-3
            + y * (-0.6911147651e-5
            + y * (0.7621095161e-6
            + y * (-0.934935152e-7))));
        let xx = ax - 0.785398164;
        (0.636619772 / ax).sqrt() * (xx.cos() * p1 - z * xx.sin() * p2)
    }
}

/// Evaluate the Bessel function of the first kind J_1; companion to
/// [`bessel_j0`].
pub fn bessel_j1(x: f64) -> f64 {
    let ax = x.abs();
    if ax < 8.0 {
        let y = x * x;
        let r1
            = x * (72362614232.0
            + y * (-7895059235.0
            + y * (242396853.1
            + y * (-2972611.439
            + y * (15704.48260
            + y * (-30.16036606))))));
        let r2
            = 144725228442.0
            + y * (2300535178.0
            + y * (18583304.74
            + y * (99447.43394
            + y * (376.9991397
            + y))));
        r1 / r2
    } else {
        let z = 8.0 / ax;
        let y = z * z;
        let p1
            = 1.0
            + y * (0.183105e-2
            + y * (-0.3516396496e-4
            + y * (0.2457520174e-5
            + y * (-0.240337019e-6))));
        let p2
            = 0.04687499995
            + y * (-0.2002690873e-3
            + y * (0.8449199096e-5
            + y * (-0.88228987e-6
            + y * 0.105787412e-6)));
        let xx = ax - 2.356194491;
        let ans
            = (0.636619772 / ax).sqrt() * (xx.cos() * p1 - z * xx.sin() * p2);
        if x < 0.0 { -ans } else { ans }
    }
}

/// Return the `k`-th positive zero of J_0 via the McMahon expansion, refined
/// by two Newton steps (J_0' = -J_1).
///
/// Assumes `k >= 1`.
pub fn bessel_j0_zero(k: usize) -> f64 {
    let b = (k as f64 - 0.25) * PI;
    let b8 = 8.0 * b;
    let mut a = b
        + 1.0 / b8
        - 124.0 / (3.0 * b8.powi(3))
        + 120928.0 / (15.0 * b8.powi(5));
    for _ in 0..2 {
        a += bessel_j0(a) / bessel_j1(a);
    }
    a
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use super::*;

    #[test]
    fn trapz_linear_exact() {
        let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 11);
        let y = x.mapv(|xk| 3.0 * xk + 1.0);
        assert_relative_eq!(trapz(&y, 0.1), 2.5, max_relative = 1e-12);
    }

    #[test]
    fn hermite_low_orders() {
        // H2 = 4x^2 - 2, H3 = 8x^3 - 12x
        assert_relative_eq!(hermite(0, 0.7), 1.0);
        assert_relative_eq!(hermite(1, 0.7), 1.4, max_relative = 1e-12);
        assert_relative_eq!(hermite(2, 1.5), 7.0, max_relative = 1e-12);
        assert_relative_eq!(hermite(3, 1.5), 9.0, max_relative = 1e-12);
    }

    #[test]
    fn laguerre_low_orders() {
        // L2^0 = (x^2 - 4x + 2)/2, L1^1 = 2 - x
        assert_relative_eq!(laguerre(0, 0.0, 3.0), 1.0);
        assert_relative_eq!(laguerre(2, 0.0, 1.0), -0.5, max_relative = 1e-12);
        assert_relative_eq!(laguerre(1, 1.0, 0.5), 1.5, max_relative = 1e-12);
    }

    #[test]
    fn bessel_values() {
        assert_relative_eq!(bessel_j0(0.0), 1.0, max_relative = 1e-7);
        assert_relative_eq!(bessel_j1(0.0), 0.0, epsilon = 1e-9);
        // J0(1) = 0.7651976865..., J1(1) = 0.4400505857...
        assert_relative_eq!(bessel_j0(1.0), 0.7651976865579666, max_relative = 1e-7);
        assert_relative_eq!(bessel_j1(1.0), 0.4400505857449335, max_relative = 1e-7);
        assert!(bessel_j0(bessel_j0_zero(1)).abs() < 1e-8);
    }

    #[test]
    fn bessel_zeros() {
        let expected = [2.404825557695773, 5.520078110286311, 8.653727912911013];
        for (k, z) in expected.into_iter().enumerate() {
            assert_relative_eq!(bessel_j0_zero(k + 1), z, max_relative = 1e-8);
        }
    }

    #[test]
    fn fft_axis_inverts() {
        let x: nd::Array2<C64>
            = nd::Array2::from_shape_fn((4, 8), |(i, k)| {
                C64::new((i + 1) as f64, k as f64 / 8.0)
            });
        let f = fft_axis(&x, 1);
        let y = ifft_axis(&f, 1);
        for (xk, yk) in x.iter().zip(&y) {
            assert!((xk - yk).norm() < 1e-12);
        }
    }

    #[test]
    fn fft_freq_conventions() {
        let f = fft_freq(4, 0.5);
        let expected = [0.0, 0.5, -1.0, -0.5];
        for (fk, ek) in f.iter().zip(expected) {
            assert_relative_eq!(*fk, ek, epsilon = 1e-12);
        }
        let f = fft_freq(5, 1.0);
        let expected = [0.0, 0.2, 0.4, -0.4, -0.2];
        for (fk, ek) in f.iter().zip(expected) {
            assert_relative_eq!(*fk, ek, epsilon = 1e-12);
        }
    }
}
