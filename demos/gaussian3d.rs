use envprop::{ grid::Dim, laser::Laser, profile::CombinedProfile };

// sample a 1 J Gaussian pulse on a Cartesian grid and push it forward

fn main() {
    const WAVELENGTH: f64 = 0.8e-6; // m
    const W0: f64 = 25.0e-6; // waist; m
    const TAU: f64 = 30.0e-15; // duration; s
    const ENERGY: f64 = 1.0; // J

    let profile = CombinedProfile::gaussian(
        WAVELENGTH, (1.0, 0.0), ENERGY, W0, TAU, 0.0).unwrap();

    let hw = 3.0 * W0;
    let ht = 3.5 * TAU;
    let mut laser = Laser::new(
        Dim::XYT,
        &[-hw, -hw, -ht],
        &[hw, hw, ht],
        &[100, 100, 100],
        &profile,
    ).unwrap();
    println!("energy on grid: {:.6} J", laser.energy());

    laser.propagate(1.0e-6).unwrap();
    println!("after 1 um:     {:.6} J", laser.energy());

    laser.propagate(-1.0e-6).unwrap();
    println!("back at start:  {:.6} J", laser.energy());
}
