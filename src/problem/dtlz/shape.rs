//! Shape functions.
//!
//! Each takes the leading block `x` of the decision vector (`fdim - 1`
//! components), the value `g` of the distance function and the DTLZ4 skew
//! exponent, and returns a fresh fitness vector of `x.len() + 1` objectives.

use std::f64::consts::{FRAC_PI_2, PI};

/// Signature shared by all shape functions.
pub type ShapeFn = fn(x: &[f64], g: f64, alpha: u32) -> Vec<f64>;

/// Fills `f` with the cos/sin recursion over `angles` scaled by `radius`.
///
/// `f[0]` is the product of every cosine, `f[i]` drops the last `i` cosines
/// and multiplies by the sine of the first dropped angle.
fn calc_spherical_target(angles: &[f64], radius: f64, f: &mut [f64])
{
    let n = angles.len();

    for i in 0..f.len()
    {
        let mut f_val = radius;

        for angle in &angles[..n - i]
        {
            f_val *= (angle * FRAC_PI_2).cos();
        }

        if i > 0
        {
            f_val *= (angles[n - i] * FRAC_PI_2).sin();
        }

        f[i] = f_val;
    }
}

/// DTLZ1: the front lies on the hyperplane `sum(f) = 0.5`.
pub fn linear(x: &[f64], g: f64, _alpha: u32) -> Vec<f64>
{
    let n = x.len();
    let mut f = vec![0.0; n + 1];

    for i in 0..f.len()
    {
        let mut f_val = 0.5 * (1.0 + g);

        for x_i in &x[..n - i]
        {
            f_val *= x_i;
        }

        if i > 0
        {
            f_val *= 1.0 - x[n - i];
        }

        f[i] = f_val;
    }

    f
}

/// DTLZ2 and DTLZ3: the front is the positive orthant of the unit sphere.
pub fn spherical(x: &[f64], g: f64, _alpha: u32) -> Vec<f64>
{
    let mut f = vec![0.0; x.len() + 1];

    calc_spherical_target(x, 1.0 + g, &mut f);

    f
}

/// DTLZ4: spherical front with every variable raised to `alpha` first,
/// which pushes solutions towards the boundary planes.
pub fn skewed_spherical(x: &[f64], g: f64, alpha: u32) -> Vec<f64>
{
    let alpha = f64::from(alpha);
    let skewed: Vec<f64> = x.iter()
        .map(|x_i| x_i.powf(alpha))
        .collect();

    spherical(&skewed, g, 0)
}

/// DTLZ5 and DTLZ6: a degenerate curve front, whatever the objective count.
pub fn curve(x: &[f64], g: f64, _alpha: u32) -> Vec<f64>
{
    let t = 1.0 / (2.0 * (1.0 + g));

    let theta: Vec<f64> = x.iter()
        .enumerate()
        .map(|(i, x_i)| if i == 0 { *x_i } else { t + (g * x_i) / (1.0 + g) })
        .collect();

    spherical(&theta, g, 0)
}

/// DTLZ7: several disconnected Pareto-optimal regions.
///
/// `distance` is the offset-free DTLZ7 distance; the shape uses `1 + distance`.
pub fn disconnected(x: &[f64], distance: f64, _alpha: u32) -> Vec<f64>
{
    let g = 1.0 + distance;
    let n_obj = x.len() + 1;

    let mut f = Vec::with_capacity(n_obj);
    f.extend_from_slice(x);

    let mut h_sum = 0.0;

    for f_i in &f
    {
        h_sum += (f_i / (1.0 + g)) * (1.0 + (3.0 * PI * f_i).sin());
    }

    let h = n_obj as f64 - h_sum;

    f.push((1.0 + g) * h);

    f
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &[f64], b: &[f64])
    {
        assert_eq!(a.len(), b.len());

        for (a_i, b_i) in a.iter().zip(b)
        {
            assert!((a_i - b_i).abs() < 1e-12, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn linear_front_sums_to_half()
    {
        let f = linear(&[0.3, 0.8, 0.1], 0.0, 0);

        assert_eq!(f.len(), 4);
        assert!((f.iter().sum::<f64>() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn linear_two_objectives()
    {
        assert_close(&linear(&[0.25], 1.0, 0), &[0.25, 0.75]);
    }

    #[test]
    fn spherical_front_has_unit_radius()
    {
        let f = spherical(&[0.2, 0.7], 0.0, 0);
        let norm: f64 = f.iter().map(|f_i| f_i * f_i).sum();

        assert!((norm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn spherical_scales_with_g()
    {
        let f = spherical(&[0.0, 0.0], 2.0, 0);

        assert_close(&f, &[3.0, 0.0, 0.0]);
    }

    #[test]
    fn skewed_spherical_maps_interior_to_first_axis()
    {
        let f = skewed_spherical(&[0.5, 0.5], 0.0, 100);

        assert!((f[0] - 1.0).abs() < 1e-12);
        assert!(f[1].abs() < 1e-12);
        assert!(f[2].abs() < 1e-12);
    }

    #[test]
    fn skewed_spherical_with_unit_alpha_is_spherical()
    {
        let x = [0.3, 0.9, 0.45];

        assert_close(&skewed_spherical(&x, 0.4, 1), &spherical(&x, 0.4, 0));
    }

    #[test]
    fn curve_on_front_collapses_meta_angles()
    {
        // g = 0 puts every meta-angle after the first at 0.5
        let f = curve(&[0.3, 0.0, 1.0], 0.0, 0);

        assert_close(&f, &spherical(&[0.3, 0.5, 0.5], 0.0, 0));
    }

    #[test]
    fn disconnected_passes_leading_variables_through()
    {
        assert_close(&disconnected(&[0.0, 0.0], 0.0, 0), &[0.0, 0.0, 6.0]);

        let f = disconnected(&[0.25, 0.5], 0.0, 0);
        assert_eq!(f[0], 0.25);
        assert_eq!(f[1], 0.5);
    }

    #[test]
    fn disconnected_off_front()
    {
        // distance 9 gives g = 10, sin(0.75 pi) = 1/sqrt(2), sin(1.5 pi) = -1
        let f = disconnected(&[0.25, 0.5], 9.0, 0);
        let last = 33.0 - 0.25 * (1.0 + std::f64::consts::FRAC_1_SQRT_2);

        assert_close(&f, &[0.25, 0.5, last]);
    }

    #[test]
    fn curve_off_front_uses_meta_angles()
    {
        // g = 1: t = 0.25, theta = [0.3, 0.25 + 0.8 / 2]
        let f = curve(&[0.3, 0.8], 1.0, 0);

        assert_close(&f, &spherical(&[0.3, 0.65], 1.0, 0));
        assert_close(&f, &[
            2.0 * (0.15 * PI).cos() * (0.325 * PI).cos(),
            2.0 * (0.15 * PI).cos() * (0.325 * PI).sin(),
            2.0 * (0.15 * PI).sin(),
        ]);
    }
}
