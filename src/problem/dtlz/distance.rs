//! Distance functions `g(x_m)`.
//!
//! Every function takes the tail block `x_m` of the decision vector and is
//! zero exactly when each component sits at its optimum.

use std::f64::consts::PI;

/// Signature shared by all distance functions.
pub type DistanceFn = fn(&[f64]) -> f64;

/// Rastrigin-like distance used by DTLZ1 and DTLZ3. Optimum at `0.5`.
pub fn g13(x_m: &[f64]) -> f64
{
    let mut sum = 0.0;

    for x_m_i in x_m
    {
        sum += (x_m_i - 0.5).powi(2) - (20.0 * PI * (x_m_i - 0.5)).cos();
    }

    100.0 * (sum + x_m.len() as f64)
}

/// Sphere distance used by DTLZ2, DTLZ4 and DTLZ5. Optimum at `0.5`.
pub fn g245(x_m: &[f64]) -> f64
{
    let mut sum = 0.0;

    for x_m_i in x_m
    {
        sum += (x_m_i - 0.5).powi(2);
    }

    sum
}

/// DTLZ6 distance. Optimum at `0.0`.
pub fn g6(x_m: &[f64]) -> f64
{
    let mut sum = 0.0;

    for x_m_i in x_m
    {
        sum += x_m_i.powf(0.1);
    }

    sum
}

/// DTLZ7 distance. Optimum at `0.0`.
///
/// The literature adds `1.0` to this value. It is left out here so that zero
/// is the convergence optimum for all seven problems; the fitness of DTLZ7
/// adds the offset back itself.
pub fn g7(x_m: &[f64]) -> f64
{
    let sum: f64 = x_m.iter().sum();

    (9.0 / x_m.len() as f64) * sum
}
