use rand::Rng;

use super::{GenerationStats, Individual};

/// Returns the best-ranked individual, preferring the earliest on ties.
pub(super) fn best_of<'p, F, const N: usize>(
    members: &'p [Individual<N>],
    transform: &F,
) -> Option<&'p Individual<N>>
where
    F: Fn(f64) -> f64,
{
    members.iter().fold(None, |best, candidate| match best {
        Some(best) if !candidate.beats(best, transform) => Some(best),
        _ => Some(candidate),
    })
}

/// Picks the best of `size` individuals drawn uniformly with replacement.
///
/// Selection pressure grows with `size`, and every individual, including the
/// current best, can win. `members` must not be empty.
pub(super) fn tournament<'p, R, F, const N: usize>(
    members: &'p [Individual<N>],
    size: usize,
    rng: &mut R,
    transform: &F,
) -> &'p Individual<N>
where
    R: Rng + ?Sized,
    F: Fn(f64) -> f64,
{
    let mut winner = &members[rng.gen_range(0..members.len())];
    for _ in 1..size {
        let challenger = &members[rng.gen_range(0..members.len())];
        if challenger.beats(winner, transform) {
            winner = challenger;
        }
    }
    winner
}

/// Summarizes an evaluated generation.
pub(super) fn stats<F, const N: usize>(
    generation: usize,
    members: &[Individual<N>],
    best_ever: Option<f64>,
    transform: &F,
) -> GenerationStats
where
    F: Fn(f64) -> f64,
{
    let objectives: Vec<f64> = members.iter().filter_map(|m| m.objective).collect();

    #[allow(clippy::cast_precision_loss)]
    let mean = (!objectives.is_empty())
        .then(|| objectives.iter().sum::<f64>() / objectives.len() as f64);

    GenerationStats {
        generation,
        best: best_of(members, transform).and_then(|m| m.objective),
        mean,
        invalid: members.len() - objectives.len(),
        best_ever,
    }
}
