use itertools::iproduct;

use crate::metric::{mean_convergence_metric, par_mean_convergence_metric};
use crate::problem::dtlz::variant::Variant;
use crate::problem::dtlz::Dtlz;
use crate::tests::{init_logger, random_x, seeded_rng};

fn problems() -> Vec<Dtlz>
{
    iproduct!(Variant::ALL, vec![2usize, 3, 5, 8], vec![1usize, 4, 10])
        .map(|(variant, fdim, k)| Dtlz::new(variant.id(), fdim + k, fdim, 100).unwrap())
        .collect()
}

/// `x` with its tail block moved to the optimum of the distance function.
fn on_front(problem: &Dtlz, mut x: Vec<f64>) -> Vec<f64>
{
    for x_i in &mut x[problem.fdim() - 1..]
    {
        *x_i = problem.variant().optimal_tail_value();
    }

    x
}

#[test]
fn bounds_are_unit_box()
{
    for problem in problems()
    {
        let (lower, upper) = problem.get_bounds();

        assert_eq!(lower.len(), problem.dim());
        assert_eq!(upper.len(), problem.dim());
        assert!(lower.iter().all(|lo| *lo == 0.0));
        assert!(upper.iter().all(|hi| *hi == 1.0));
    }
}

#[test]
fn fitness_has_one_value_per_objective()
{
    let mut rng = seeded_rng();

    for problem in problems()
    {
        let x = random_x(&mut rng, problem.dim());

        assert_eq!(problem.evaluate(&x).len(), problem.fdim(), "{}", problem);
    }
}

#[test]
fn evaluation_is_deterministic()
{
    let mut rng = seeded_rng();

    for problem in problems()
    {
        let x = random_x(&mut rng, problem.dim());

        let first: Vec<u64> = problem.evaluate(&x).iter().map(|f_i| f_i.to_bits()).collect();
        let second: Vec<u64> = problem.evaluate(&x).iter().map(|f_i| f_i.to_bits()).collect();

        assert_eq!(first, second, "{}", problem);
    }
}

#[test]
fn distance_vanishes_on_front()
{
    let mut rng = seeded_rng();

    for problem in problems()
    {
        let x = on_front(&problem, random_x(&mut rng, problem.dim()));

        assert!(problem.distance_to_front(&x).unwrap().abs() < 1e-9, "{}", problem);
    }
}

#[test]
fn distance_is_positive_off_front()
{
    let mut rng = seeded_rng();

    for problem in problems()
    {
        let mut x = on_front(&problem, random_x(&mut rng, problem.dim()));
        let last = x.len() - 1;
        x[last] = 0.9;

        assert!(problem.distance_to_front(&x).unwrap() > 0.0, "{}", problem);
    }
}

#[test]
fn dtlz1_front_is_a_hyperplane()
{
    let mut rng = seeded_rng();

    for problem in problems().into_iter().filter(|problem| problem.variant() == Variant::Dtlz1)
    {
        let x = on_front(&problem, random_x(&mut rng, problem.dim()));
        let sum: f64 = problem.evaluate(&x).iter().sum();

        assert!((sum - 0.5).abs() < 1e-9, "{}", problem);
    }
}

#[test]
fn spherical_fronts_have_unit_norm()
{
    let mut rng = seeded_rng();

    let spherical = [Variant::Dtlz2, Variant::Dtlz3, Variant::Dtlz4, Variant::Dtlz5, Variant::Dtlz6];

    for problem in problems().into_iter().filter(|problem| spherical.contains(&problem.variant()))
    {
        let x = on_front(&problem, random_x(&mut rng, problem.dim()));
        let norm: f64 = problem.evaluate(&x).iter().map(|f_i| f_i * f_i).sum();

        assert!((norm - 1.0).abs() < 1e-9, "{}", problem);
    }
}

#[test]
fn dtlz7_passes_leading_variables_through()
{
    let mut rng = seeded_rng();

    for problem in problems().into_iter().filter(|problem| problem.variant() == Variant::Dtlz7)
    {
        let x = random_x(&mut rng, problem.dim());
        let f = problem.evaluate(&x);

        assert_eq!(&f[..problem.fdim() - 1], &x[..problem.fdim() - 1]);
    }
}

#[test]
fn out_of_box_inputs_are_evaluated_as_is()
{
    let problem = Dtlz::new(1, 5, 3, 100).unwrap();

    let f = problem.evaluate(&[2.0, -1.0, 0.5, 0.5, 0.5]);

    assert_eq!(f, vec![-1.0, 2.0, -0.5]);
}

#[test]
fn parallel_metric_matches_sequential()
{
    init_logger();

    let mut rng = seeded_rng();

    for problem in problems()
    {
        let population: Vec<Vec<f64>> = (0..53)
            .map(|_| random_x(&mut rng, problem.dim()))
            .collect();

        let sequential = mean_convergence_metric(&problem, &population).unwrap();
        let parallel = par_mean_convergence_metric(&problem, &population).unwrap();

        assert!((sequential - parallel).abs() <= 1e-9 * sequential.abs().max(1.0), "{}", problem);
    }
}
