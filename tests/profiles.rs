//! Statistical properties of the analytic transverse modes.

use approx::assert_relative_eq;
use ndarray as nd;
use envprop::transverse::TransverseProfile;

// amplitude-weighted RMS width of a mode along a single transverse cut
fn amplitude_std(axis: &nd::Array1<f64>, amp: &nd::Array1<f64>) -> f64 {
    let wsum: f64 = amp.sum();
    let msum: f64
        = axis.iter().zip(amp)
        .map(|(&xk, &fk)| xk * xk * fk)
        .sum();
    (msum / wsum).sqrt()
}

fn radial_cut(tp: &TransverseProfile, rmax: f64, n: usize)
    -> (nd::Array1<f64>, nd::Array1<f64>)
{
    let r: nd::Array1<f64> = nd::Array1::linspace(0.0, rmax, n);
    let y: nd::Array1<f64> = nd::Array1::zeros(n);
    let amp = tp.evaluate(&r, &y).unwrap().mapv(|v| v.norm());
    (r, amp)
}

#[test]
fn gaussian_width() {
    let w0 = 10.0e-6;
    let tp = TransverseProfile::gaussian(w0).unwrap();
    let (r, amp) = radial_cut(&tp, 6.0 * w0, 2000);
    let std = amplitude_std(&r, &amp);
    assert_relative_eq!(std, w0 / 2.0_f64.sqrt(), max_relative = 1e-2);
}

#[test]
fn laguerre_gaussian_width() {
    let w0 = 10.0e-6;
    let tp = TransverseProfile::laguerre_gaussian(w0, 2, 0).unwrap();
    let (r, amp) = radial_cut(&tp, 6.0 * w0, 2000);
    let std = amplitude_std(&r, &amp);
    assert_relative_eq!(std, 1.2969576587040524e-5, max_relative = 1e-2);
}

#[test]
fn hermite_gaussian_width() {
    let w0 = 10.0e-6;
    let tp = TransverseProfile::hermite_gaussian(w0, 2, 2).unwrap();
    let x: nd::Array1<f64> = nd::Array1::linspace(-4.0 * w0, 4.0 * w0, 200);
    let y: nd::Array1<f64> = nd::Array1::zeros(200);
    let amp = tp.evaluate(&x, &y).unwrap().mapv(|v| v.norm());
    let std = amplitude_std(&x, &amp);
    assert_relative_eq!(std, 1.2151311989441392e-5, max_relative = 1e-2);
}

#[test]
fn super_gaussian_flat_top_width() {
    // as the order grows the mode tends to a uniform disk, whose
    // amplitude-weighted radial cut has RMS width w0/sqrt(3)
    let w0 = 10.0e-6;
    let tp = TransverseProfile::super_gaussian(w0, 100.0).unwrap();
    let (r, amp) = radial_cut(&tp, 6.0 * w0, 2000);
    let std = amplitude_std(&r, &amp);
    assert_relative_eq!(std, w0 / 3.0_f64.sqrt(), max_relative = 1e-2);
}

#[test]
fn super_gaussian_order_two_is_gaussian() {
    let w0 = 10.0e-6;
    let sg = TransverseProfile::super_gaussian(w0, 2.0).unwrap();
    let g = TransverseProfile::gaussian(w0).unwrap();
    let x: nd::Array1<f64> = nd::Array1::linspace(-3.0 * w0, 3.0 * w0, 31);
    let y = x.mapv(|v| 0.25 * v);
    let a = sg.evaluate(&x, &y).unwrap();
    let b = g.evaluate(&x, &y).unwrap();
    for (ak, bk) in a.iter().zip(&b) {
        assert!((ak - bk).norm() < 1e-12);
    }
}
