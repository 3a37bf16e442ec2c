//! `find-ref`: fits the reference pair of the chiller effectiveness model.
//!
//! Logging goes to stderr and is filtered with `RUST_LOG` (default `info`).
//! The fitted pair is printed to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use uom::si::{
    mass_rate::kilogram_per_second, thermal_conductance::watt_per_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use refit_chiller::{EffectivenessModel, ReferenceSolution, find_reference};
use refit_solvers::optimization::genetic::Config;

#[derive(Debug, Parser)]
#[command(name = "find-ref", version)]
#[command(about = "Fit the reference efficacy and capacity of the chiller heat exchanger")]
struct Cli {
    /// Individuals per generation.
    #[arg(long, env = "REFIT_POPULATION_SIZE", default_value_t = 10)]
    population_size: usize,

    /// Generations bred after the initial population.
    #[arg(long, env = "REFIT_GENERATIONS", default_value_t = 20)]
    generations: usize,

    /// Probability that a child has one coordinate resampled.
    #[arg(long, default_value_t = 0.2)]
    mutation_probability: f64,

    /// Probability that two parents exchange coordinates.
    #[arg(long, default_value_t = 0.9)]
    crossover_probability: f64,

    /// Individuals drawn per selection tournament.
    #[arg(long, default_value_t = 3)]
    tournament_size: usize,

    /// Do not carry the best individual into the next generation.
    #[arg(long)]
    no_elitism: bool,

    /// Seed of the random number generator.
    #[arg(long, env = "REFIT_SEED", default_value_t = 2017)]
    seed: u64,
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let config = Config::new(
            self.population_size,
            self.generations,
            self.crossover_probability,
            self.mutation_probability,
        )
        .context("invalid solver configuration")?
        .with_tournament_size(self.tournament_size)
        .context("invalid solver configuration")?
        .with_elitism(!self.no_elitism);
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = cli.config()?;
    info!(?config, seed = cli.seed, "starting find-ref");
    let model = EffectivenessModel::default();
    let solution = find_reference(&model, &config, cli.seed);

    println!("{}", scenario_summary(&model));
    print_solution(&solution);
    Ok(())
}

/// Return-air temperature and mass flows implied by the scenario.
fn scenario_summary(model: &EffectivenessModel) -> String {
    let constants = model.constants();
    let capacities = model.capacities();
    let return_air = constants.return_air_temperature().get::<degree_celsius>();
    let air = capacities.air_mass_rate(constants).get::<kilogram_per_second>();
    let water = capacities
        .chilled_water_mass_rate(constants)
        .get::<kilogram_per_second>();

    format!(
        "return air (°C):          {return_air:.2}\n\
         air flow (kg/s):          {air:.4}\n\
         chilled water (kg/s):     {water:.4}"
    )
}

fn print_solution(solution: &ReferenceSolution) {
    let capacity = solution.pair.capacity.get::<watt_per_kelvin>();
    println!("target effectiveness 1:   {:.6}", solution.targets.chilled_water);
    println!("target effectiveness 2:   {:.6}", solution.targets.cooling_coil);
    println!("reference efficacy:       {:.6}", solution.pair.efficacy);
    println!("reference capacity (W/K): {capacity:.3}");
    if let Some(candidates) = solution.candidates {
        println!(
            "candidate effectiveness:  {:.6}, {:.6}",
            candidates.chilled_water, candidates.cooling_coil
        );
    }
    println!("fitness:                  {:.6}", solution.fitness);
    println!("error:                    {:.6}", solution.error);
    println!(
        "evaluations:              {} over {} generations",
        solution.evaluations, solution.generation
    );
}
