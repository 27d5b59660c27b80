pub mod dtlz;

use dyn_clone::DynClone;

use crate::error::Result;

/// The capability a host optimization framework needs from a test problem.
///
/// Boxed problems can be stored in a registry and cloned out of it.
pub trait Problem: DynClone + Send + Sync {
    fn name(&self) -> &str;

    /// Computes the objective vector of `x`.
    fn fitness(&self, x: &[f64]) -> Vec<f64>;
    fn nobj(&self) -> usize;
    fn bounds(&self) -> (Vec<f64>, Vec<f64>);

    /// Distance of `x` from the optimal front, `0.0` on the front.
    fn convergence_metric(&self, x: &[f64]) -> Result<f64>;

    fn best_metric(&self) -> f64 {
        0.0
    }
}

dyn_clone::clone_trait_object!(Problem);

/// Read-only view over the decision vectors of a population.
pub trait Population {
    fn size(&self) -> usize;
    fn x(&self, index: usize) -> &[f64];
}

impl Population for [Vec<f64>]
{
    fn size(&self) -> usize {
        self.len()
    }

    fn x(&self, index: usize) -> &[f64] {
        &self[index]
    }
}

impl Population for Vec<Vec<f64>>
{
    fn size(&self) -> usize {
        self.len()
    }

    fn x(&self, index: usize) -> &[f64] {
        &self[index]
    }
}
