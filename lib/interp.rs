//! Linear interpolation of tabulated complex data on monotonic axes.
//!
//! Used by the tabulated transverse profiles: coordinates inside the sampled
//! range are interpolated linearly (bilinearly in 2-D); coordinates outside
//! it extrapolate to zero amplitude.

use ndarray as nd;
use num_complex::Complex64 as C64;
use num_traits::Zero;
use crate::{ Arr1, Arr2 };

// index of the cell [axis[i], axis[i + 1]] containing `v`, by bisection
fn bracket<S>(axis: &Arr1<S>, v: f64) -> Option<usize>
where S: nd::Data<Elem = f64>
{
    let n = axis.len();
    if v < axis[0] || v > axis[n - 1] { return None; }
    let mut lo: usize = 0;
    let mut hi: usize = n - 1;
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if axis[mid] <= v { lo = mid; } else { hi = mid; }
    }
    Some(lo)
}

/// Interpolate a 1-D complex table linearly at `x`; zero outside the axis
/// range.
///
/// *Panics if `axis` and `values` differ in length or are shorter than 2*.
pub fn interp1<S, T>(axis: &Arr1<S>, values: &Arr1<T>, x: f64) -> C64
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = C64>,
{
    assert_eq!(axis.len(), values.len());
    let Some(i) = bracket(axis, x) else { return C64::zero(); };
    let u = (x - axis[i]) / (axis[i + 1] - axis[i]);
    values[i] * (1.0 - u) + values[i + 1] * u
}

/// Interpolate a 2-D complex table bilinearly at `(x, y)`; zero outside the
/// axis ranges.
///
/// The table is indexed as `table[[i, j]]` with `i` running over `x_axis` and
/// `j` over `y_axis`.
///
/// *Panics if the axes do not match the table shape or are shorter than 2*.
pub fn interp2<S, T, U>(
    x_axis: &Arr1<S>,
    y_axis: &Arr1<T>,
    table: &Arr2<U>,
    x: f64,
    y: f64,
) -> C64
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = C64>,
{
    assert_eq!(x_axis.len(), table.nrows());
    assert_eq!(y_axis.len(), table.ncols());
    let Some(i) = bracket(x_axis, x) else { return C64::zero(); };
    let Some(j) = bracket(y_axis, y) else { return C64::zero(); };
    let u = (x - x_axis[i]) / (x_axis[i + 1] - x_axis[i]);
    let v = (y - y_axis[j]) / (y_axis[j + 1] - y_axis[j]);
    table[[i, j]] * ((1.0 - u) * (1.0 - v))
        + table[[i + 1, j]] * (u * (1.0 - v))
        + table[[i, j + 1]] * ((1.0 - u) * v)
        + table[[i + 1, j + 1]] * (u * v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interp1_linear_exact() {
        let axis: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 5);
        let values = axis.mapv(|a| C64::new(2.0 * a, -a));
        let got = interp1(&axis, &values, 0.3);
        assert!((got - C64::new(0.6, -0.3)).norm() < 1e-12);
    }

    #[test]
    fn interp1_zero_outside() {
        let axis: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 5);
        let values = axis.mapv(|_| C64::new(1.0, 0.0));
        assert_eq!(interp1(&axis, &values, -0.1), C64::zero());
        assert_eq!(interp1(&axis, &values, 1.1), C64::zero());
    }

    #[test]
    fn interp2_bilinear_exact() {
        let xa: nd::Array1<f64> = nd::Array1::linspace(-1.0, 1.0, 9);
        let ya: nd::Array1<f64> = nd::Array1::linspace(0.0, 2.0, 7);
        let table = nd::Array2::from_shape_fn((9, 7), |(i, j)| {
            C64::new(xa[i] + 3.0 * ya[j], xa[i] * ya[j])
        });
        let got = interp2(&xa, &ya, &table, 0.123, 1.456);
        let expected = C64::new(0.123 + 3.0 * 1.456, 0.123 * 1.456);
        assert!((got - expected).norm() < 1e-10);
    }

    #[test]
    fn interp2_zero_outside() {
        let xa: nd::Array1<f64> = nd::Array1::linspace(-1.0, 1.0, 5);
        let ya = xa.clone();
        let table = nd::Array2::from_elem((5, 5), C64::new(1.0, 0.0));
        assert_eq!(interp2(&xa, &ya, &table, 2.0, 0.0), C64::zero());
        assert_eq!(interp2(&xa, &ya, &table, 0.0, -2.0), C64::zero());
    }
}
