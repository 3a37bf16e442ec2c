use std::array;

use rand::Rng;

use super::{
    Bounds, Config, Individual,
    population::{best_of, tournament},
};

/// Samples a point with every coordinate drawn from its bounds.
pub(super) fn sample<R, const N: usize>(bounds: &[Bounds; N], rng: &mut R) -> [f64; N]
where
    R: Rng + ?Sized,
{
    array::from_fn(|i| bounds[i].sample(&mut *rng))
}

/// One-point crossover: the children swap every coordinate after a random cut.
///
/// Single-variable points have no cut point, so their children are copies.
pub(super) fn crossover<R, const N: usize>(
    first: &[f64; N],
    second: &[f64; N],
    rng: &mut R,
) -> ([f64; N], [f64; N])
where
    R: Rng + ?Sized,
{
    if N < 2 {
        return (*first, *second);
    }

    let cut = rng.gen_range(1..N);
    let mut a = *first;
    let mut b = *second;
    a[cut..].copy_from_slice(&second[cut..]);
    b[cut..].copy_from_slice(&first[cut..]);
    (a, b)
}

/// Replaces one random coordinate with a fresh sample from its bounds.
pub(super) fn mutate<R, const N: usize>(x: &mut [f64; N], bounds: &[Bounds; N], rng: &mut R)
where
    R: Rng + ?Sized,
{
    if N == 0 {
        return;
    }
    let i = rng.gen_range(0..N);
    x[i] = bounds[i].sample(rng);
}

/// Breeds the points of the next generation from an evaluated population.
///
/// The result has the same length as `population`, which must not be empty.
pub(super) fn breed<R, F, const N: usize>(
    population: &[Individual<N>],
    bounds: &[Bounds; N],
    config: &Config,
    rng: &mut R,
    transform: &F,
) -> Vec<[f64; N]>
where
    R: Rng + ?Sized,
    F: Fn(f64) -> f64,
{
    let size = population.len();
    let mut offspring = Vec::with_capacity(size);

    if config.elitism() {
        if let Some(elite) = best_of(population, transform) {
            offspring.push(elite.x);
        }
    }

    while offspring.len() < size {
        let first = tournament(population, config.tournament_size(), rng, transform).x;
        let second = tournament(population, config.tournament_size(), rng, transform).x;

        let (mut a, mut b) = if rng.gen_bool(config.crossover_probability()) {
            crossover(&first, &second, rng)
        } else {
            (first, second)
        };

        for child in [&mut a, &mut b] {
            if rng.gen_bool(config.mutation_probability()) {
                mutate(child, bounds, rng);
            }
        }

        offspring.push(a);
        if offspring.len() < size {
            offspring.push(b);
        }
    }

    offspring
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::StdRng};

    fn bounds() -> [Bounds; 3] {
        [
            Bounds::new(0.0, 1.0).unwrap(),
            Bounds::new(10.0, 20.0).unwrap(),
            Bounds::new(-5.0, -4.0).unwrap(),
        ]
    }

    fn inside(x: &[f64; 3]) -> bool {
        bounds().iter().zip(x).all(|(b, &v)| b.contains(v))
    }

    #[test]
    fn crossover_swaps_tails() {
        let mut rng = StdRng::seed_from_u64(3);
        let first = [1.0, 2.0, 3.0];
        let second = [-1.0, -2.0, -3.0];

        for _ in 0..50 {
            let (a, b) = crossover(&first, &second, &mut rng);

            // The head always comes from the same parent.
            assert_eq!(a[0], 1.0);
            assert_eq!(b[0], -1.0);
            // Each coordinate comes from exactly one parent.
            for i in 0..3 {
                assert_eq!(a[i], -b[i]);
            }
            // At least the last coordinate is exchanged.
            assert_eq!(a[2], -3.0);
        }
    }

    #[test]
    fn crossover_of_scalars_copies_parents() {
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(crossover(&[1.0], &[2.0], &mut rng), ([1.0], [2.0]));
    }

    #[test]
    fn mutation_changes_one_coordinate_within_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        let original = [0.5, 15.0, -4.5];

        for _ in 0..100 {
            let mut x = original;
            mutate(&mut x, &bounds(), &mut rng);

            let changed = x.iter().zip(&original).filter(|(a, b)| a != b).count();
            assert!(changed <= 1);
            assert!(inside(&x));
        }
    }

    #[test]
    fn breeding_keeps_size_bounds_and_elite() {
        let mut rng = StdRng::seed_from_u64(6);
        let population: Vec<Individual<3>> = (0..7)
            .map(|i| {
                let x = sample(&bounds(), &mut rng);
                Individual::valid(x, f64::from(i))
            })
            .collect();

        let offspring = breed(&population, &bounds(), &Config::default(), &mut rng, &|v: f64| v);

        assert_eq!(offspring.len(), 7);
        assert_eq!(offspring[0], population[0].x);
        assert!(offspring.iter().all(inside));
    }

    #[test]
    fn breeding_without_variation_only_copies_parents() {
        let mut rng = StdRng::seed_from_u64(8);
        let population: Vec<Individual<3>> = (0..6)
            .map(|i| Individual::valid(sample(&bounds(), &mut rng), f64::from(i)))
            .collect();
        let config = Config::new(6, 1, 0.0, 0.0).unwrap().with_elitism(false);

        let offspring = breed(&population, &bounds(), &config, &mut rng, &|v: f64| v);

        assert!(
            offspring
                .iter()
                .all(|x| population.iter().any(|p| p.x == *x))
        );
    }
}
