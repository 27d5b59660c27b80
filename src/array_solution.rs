use std::fmt::{Debug, Formatter};

use rand::Rng;

use crate::error::{Error, Result};
use crate::metric::par_mean_convergence_metric;
use crate::problem::{Population, Problem};

/// A decision vector together with its last computed fitness.
#[derive(Clone, PartialEq)]
pub struct ArraySolution
{
    pub x: Vec<f64>,
    pub f: Vec<f64>,
}

impl ArraySolution
{
    pub fn new(x: Vec<f64>) -> Self
    {
        ArraySolution {
            x,
            f: vec![],
        }
    }

    fn calc_objectives(&mut self, problem: &dyn Problem)
    {
        self.f = problem.fitness(&self.x);
    }
}

impl Debug for ArraySolution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "x: {:?} f: {:?}", self.x, self.f)
    }
}

/// A batch of solutions of a single problem.
#[derive(Clone)]
pub struct ArrayPopulation
{
    problem: Box<dyn Problem>,
    solutions: Vec<ArraySolution>,
}

impl ArrayPopulation
{
    pub fn new(problem: Box<dyn Problem>) -> Self
    {
        ArrayPopulation {
            problem,
            solutions: vec![],
        }
    }

    /// `size` members drawn uniformly inside the box bounds of `problem`.
    pub fn random<R: Rng + ?Sized>(problem: Box<dyn Problem>, size: usize, rng: &mut R) -> Self
    {
        let (lower, upper) = problem.bounds();

        let solutions = (0..size)
            .map(|_| {
                let x = lower.iter()
                    .zip(&upper)
                    .map(|(lo, hi)| rng.gen_range(*lo..=*hi))
                    .collect();

                ArraySolution::new(x)
            })
            .collect();

        ArrayPopulation {
            problem,
            solutions,
        }
    }

    /// Adds `x` to the population.
    pub fn push(&mut self, x: Vec<f64>) -> Result<()>
    {
        let dim = self.problem.bounds().0.len();

        if x.len() != dim
        {
            return Err(Error::SizeMismatch {
                expected: dim,
                got: x.len(),
            });
        }

        self.solutions.push(ArraySolution::new(x));

        Ok(())
    }

    pub fn problem(&self) -> &dyn Problem {
        self.problem.as_ref()
    }

    pub fn solutions(&self) -> &[ArraySolution] {
        &self.solutions
    }

    /// Computes the fitness of every member, in order.
    pub fn evaluate_all(&mut self)
    {
        let problem = self.problem.as_ref();

        debug!("evaluating {} solutions of {}", self.solutions.len(), problem.name());

        for solution in self.solutions.iter_mut()
        {
            solution.calc_objectives(problem);
        }
    }

    /// Mean distance of the members from the optimal front.
    pub fn convergence_metric(&self) -> Result<f64>
    {
        par_mean_convergence_metric(self.problem.as_ref(), self)
    }
}

impl Population for ArrayPopulation
{
    fn size(&self) -> usize {
        self.solutions.len()
    }

    fn x(&self, index: usize) -> &[f64] {
        &self.solutions[index].x
    }
}
