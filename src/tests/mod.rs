mod front_properties;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_logger()
{
    let _ = pretty_env_logger::try_init();
}

fn random_x(rng: &mut StdRng, dim: usize) -> Vec<f64>
{
    (0..dim).map(|_| rng.gen_range(0.0..=1.0)).collect()
}

fn seeded_rng() -> StdRng
{
    StdRng::seed_from_u64(0x5eed)
}
