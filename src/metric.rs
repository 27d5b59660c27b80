//! Population-level convergence metrics.

use crate::error::{Error, Result};
use crate::problem::{Population, Problem};

/// Mean convergence metric over every member of `population`.
pub fn mean_convergence_metric<T, P>(problem: &T, population: &P) -> Result<f64>
    where
        T: Problem + ?Sized,
        P: Population + ?Sized,
{
    let size = population.size();

    if size == 0
    {
        return Err(Error::EmptyPopulation);
    }

    let mut sum = 0.0;

    for i in 0..size
    {
        sum += problem.convergence_metric(population.x(i))?;
    }

    Ok(sum / size as f64)
}

/// Same as [`mean_convergence_metric`] but splits the members over one
/// scoped thread per logical cpu.
pub fn par_mean_convergence_metric<T, P>(problem: &T, population: &P) -> Result<f64>
    where
        T: Problem + ?Sized,
        P: Population + Sync + ?Sized,
{
    let size = population.size();

    if size == 0
    {
        return Err(Error::EmptyPopulation);
    }

    let chunk_size = (size + num_cpus::get() - 1) / num_cpus::get();
    let ranges: Vec<(usize, usize)> = (0..size)
        .step_by(chunk_size)
        .map(|start| (start, (start + chunk_size).min(size)))
        .collect();

    debug!("evaluating {} members in {} chunks", size, ranges.len());

    let partial_sums: Vec<Result<f64>> = crossbeam::scope(|scope| {
        let handles: Vec<_> = ranges
            .iter()
            .map(|&(start, end)| {
                scope.spawn(move |_| -> Result<f64> {
                    let mut sum = 0.0;

                    for i in start..end
                    {
                        sum += problem.convergence_metric(population.x(i))?;
                    }

                    Ok(sum)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect::<Vec<_>>()
    })
    .unwrap_or_else(|panic| std::panic::resume_unwind(panic));

    let mut sum = 0.0;

    for partial_sum in partial_sums
    {
        sum += partial_sum?;
    }

    Ok(sum / size as f64)
}
