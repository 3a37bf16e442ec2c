use thiserror::Error;

/// Configuration for the genetic solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    population_size: usize,
    generations: usize,
    crossover_probability: f64,
    mutation_probability: f64,
    tournament_size: usize,
    elitism: bool,
}

/// Errors that can occur when validating a genetic solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    PopulationSize,

    #[error("crossover_probability must be within [0, 1]")]
    CrossoverProbability,

    #[error("mutation_probability must be within [0, 1]")]
    MutationProbability,

    #[error("tournament_size must be at least 1")]
    TournamentSize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            population_size: 10,
            generations: 20,
            crossover_probability: 0.9,
            mutation_probability: 0.2,
            tournament_size: 3,
            elitism: true,
        }
    }
}

impl Config {
    /// Creates a new config with tournament size 3 and elitism enabled.
    ///
    /// A `generations` value of zero is valid: the solver then returns the
    /// best individual of the initial population.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty or a probability is outside
    /// `[0, 1]` (including NaN).
    pub fn new(
        population_size: usize,
        generations: usize,
        crossover_probability: f64,
        mutation_probability: f64,
    ) -> Result<Self, ConfigError> {
        if population_size == 0 {
            return Err(ConfigError::PopulationSize);
        }
        if !(0.0..=1.0).contains(&crossover_probability) {
            return Err(ConfigError::CrossoverProbability);
        }
        if !(0.0..=1.0).contains(&mutation_probability) {
            return Err(ConfigError::MutationProbability);
        }

        Ok(Self {
            population_size,
            generations,
            crossover_probability,
            mutation_probability,
            ..Self::default()
        })
    }

    /// Returns a copy of this config with a different tournament size.
    ///
    /// Larger tournaments favor the fittest individuals more strongly.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is zero.
    pub fn with_tournament_size(self, tournament_size: usize) -> Result<Self, ConfigError> {
        if tournament_size == 0 {
            return Err(ConfigError::TournamentSize);
        }
        Ok(Self {
            tournament_size,
            ..self
        })
    }

    /// Returns a copy of this config with elitism turned on or off.
    #[must_use]
    pub fn with_elitism(self, elitism: bool) -> Self {
        Self { elitism, ..self }
    }

    /// Returns the number of individuals per generation.
    #[must_use]
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Returns the number of generations bred after the initial one.
    #[must_use]
    pub fn generations(&self) -> usize {
        self.generations
    }

    #[must_use]
    pub fn crossover_probability(&self) -> f64 {
        self.crossover_probability
    }

    #[must_use]
    pub fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    #[must_use]
    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Returns whether the best individual is carried into the next generation.
    #[must_use]
    pub fn elitism(&self) -> bool {
        self.elitism
    }
}
