pub mod distance;
pub mod shape;
pub mod variant;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::config::{DtlzConfig, DEFAULT_VARIANT};
use crate::error::{Error, Result};
use crate::metric::mean_convergence_metric;
use crate::problem::{Population, Problem};
use crate::problem::dtlz::variant::Variant;

/// A problem of the DTLZ test suite.
///
/// The decision vector is split into a leading block `x[..fdim - 1]` that
/// places the point on the front and a tail block `x[fdim - 1..]` that
/// controls its distance from it:
///
/// ```text
/// x[0], x[1], ..., x[fdim-2], x[fdim-1], ..., x[dim-1]
///                             [-------- x_m ---------]
/// ```
///
/// A `Dtlz` is validated once on construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "DtlzConfig", try_from = "DtlzConfig")]
pub struct Dtlz
{
    name: String,
    variant: Variant,
    dim: usize,
    fdim: usize,
    alpha: u32,
}

impl Dtlz {
    /// Builds problem `prob_id` with `dim` variables and `fdim` objectives.
    ///
    /// `alpha` only affects DTLZ4.
    pub fn new(prob_id: u32, dim: usize, fdim: usize, alpha: u32) -> Result<Self>
    {
        let variant = Variant::try_from(prob_id)?;

        if fdim < 2
        {
            return Err(Error::invalid(
                "fdim",
                format!("DTLZ test problem have a minimum of 2 objectives: fdim={} was detected", fdim),
            ));
        }

        // Conservative limits so no index arithmetic below can overflow
        if fdim > usize::MAX / 3
        {
            return Err(Error::invalid("fdim", "the number of objectives is too large"));
        }

        if dim > usize::MAX / 3
        {
            return Err(Error::invalid("dim", "the problem dimension is too large"));
        }

        if dim <= fdim
        {
            return Err(Error::invalid(
                "dim",
                format!("the problem dimension ({}) has to be larger than the number of objectives ({})", dim, fdim),
            ));
        }

        debug!("created {} with dim={} fdim={} alpha={}", variant, dim, fdim, alpha);

        Ok(Dtlz {
            name: variant.to_string(),
            variant,
            dim,
            fdim,
            alpha,
        })
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn prob_id(&self) -> u32 {
        self.variant.id()
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn fdim(&self) -> usize {
        self.fdim
    }

    pub fn alpha(&self) -> u32 {
        self.alpha
    }

    pub fn config(&self) -> DtlzConfig {
        DtlzConfig::new(self.prob_id(), self.dim, self.fdim, self.alpha)
    }

    /// Computes the fitness of `x`.
    ///
    /// The length of `x` is not checked here; callers are expected to pass
    /// `dim` components.
    ///
    /// # Panics
    ///
    /// Panics if `x` has fewer than `fdim - 1` components.
    pub fn evaluate(&self, x: &[f64]) -> Vec<f64>
    {
        let (x, x_m) = x.split_at(self.fdim - 1);

        let g = (self.variant.distance_fn())(x_m);

        (self.variant.shape_fn())(x, g, self.alpha)
    }

    /// Box bounds: `dim` zeros and `dim` ones.
    pub fn get_bounds(&self) -> (Vec<f64>, Vec<f64>)
    {
        (vec![0.0; self.dim], vec![1.0; self.dim])
    }

    /// Convergence metric of a single decision vector, `0.0` on the optimal front.
    pub fn distance_to_front(&self, x: &[f64]) -> Result<f64>
    {
        if x.len() != self.dim
        {
            return Err(Error::SizeMismatch {
                expected: self.dim,
                got: x.len(),
            });
        }

        let x_m = &x[self.fdim - 1..];

        Ok((self.variant.distance_fn())(x_m))
    }

    /// Mean of [`Dtlz::distance_to_front`] over every member of `population`.
    pub fn mean_distance_to_front<P: Population + ?Sized>(&self, population: &P) -> Result<f64>
    {
        mean_convergence_metric(self, population)
    }

    pub fn to_json(&self) -> Result<String>
    {
        self.config().to_json()
    }

    pub fn from_json(json: &str) -> Result<Self>
    {
        DtlzConfig::from_json(json)?.build()
    }
}

impl Default for Dtlz
{
    fn default() -> Self {
        let config = DtlzConfig::default();

        Dtlz {
            name: DEFAULT_VARIANT.to_string(),
            variant: DEFAULT_VARIANT,
            dim: config.dim,
            fdim: config.fdim,
            alpha: config.alpha,
        }
    }
}

impl TryFrom<DtlzConfig> for Dtlz
{
    type Error = Error;

    fn try_from(config: DtlzConfig) -> Result<Self> {
        config.build()
    }
}

impl From<Dtlz> for DtlzConfig
{
    fn from(problem: Dtlz) -> Self {
        problem.config()
    }
}

impl Display for Dtlz
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (dim: {}, fdim: {}, alpha: {})", self.name, self.dim, self.fdim, self.alpha)
    }
}

impl Problem for Dtlz
{
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn fitness(&self, x: &[f64]) -> Vec<f64> {
        self.evaluate(x)
    }

    fn nobj(&self) -> usize {
        self.fdim
    }

    fn bounds(&self) -> (Vec<f64>, Vec<f64>) {
        self.get_bounds()
    }

    fn convergence_metric(&self, x: &[f64]) -> Result<f64> {
        self.distance_to_front(x)
    }
}
