//! Harness that evaluates a population until extinction or timeout.
//!
//! One call runs one full generation: it binds a fresh population of agents
//! to the borrowed controllers, drives the tick loop to a terminal phase,
//! and reads out terminal fitness per agent. The hot path is a pure
//! in-memory computation; nothing here is retried.

use super::controller::Controller;
use super::generation::{Generation, Phase};
use super::params::Params;

/// How an evaluation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every agent died before the tick budget ran out.
    Extinct,
    /// The tick budget ran out with survivors.
    TimedOut,
    /// The caller's cancel signal fired mid-run.
    Aborted,
}

/// Terminal results of one evaluation run.
///
/// `fitness` and `scores` are indexed like the controller slice that was
/// evaluated, so entry `i` belongs to controller `i`.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// How the run ended.
    pub outcome: Outcome,
    /// Ticks executed.
    pub ticks: u32,
    /// Obstacles passed by at least one agent.
    pub score: u32,
    /// Terminal fitness accumulator per agent.
    pub fitness: Vec<f32>,
    /// Obstacles passed per agent.
    pub scores: Vec<u32>,
}

/// Evaluates one generation of the given controllers to completion.
///
/// Spawns one agent per controller, starts the generation immediately, and
/// steps until it is `Extinct` or `TimedOut`. With `seed` the obstacle
/// timeline is reproducible across calls.
pub fn run_generation(
    params: &Params,
    controllers: &mut [&mut dyn Controller],
    seed: Option<u64>,
) -> GenerationReport {
    run_generation_with(params, controllers, seed, || false)
}

/// Like [`run_generation`], with a cancel signal checked once per tick at
/// the top of the loop. There is no mid-tick cancellation; a fired signal
/// yields [`Outcome::Aborted`] with the fitness collected so far.
pub fn run_generation_with(
    params: &Params,
    controllers: &mut [&mut dyn Controller],
    seed: Option<u64>,
    mut cancel: impl FnMut() -> bool,
) -> GenerationReport {
    let mut generation = Generation::new(params, controllers.len(), seed);
    generation.start();

    while generation.phase == Phase::Running {
        if cancel() {
            return report(&generation, Outcome::Aborted);
        }
        generation.step(params, controllers);
    }

    let outcome = match generation.phase {
        Phase::Extinct => Outcome::Extinct,
        Phase::TimedOut => Outcome::TimedOut,
        Phase::Ready | Phase::Running => Outcome::Aborted,
    };
    report(&generation, outcome)
}

fn report(generation: &Generation, outcome: Outcome) -> GenerationReport {
    GenerationReport {
        outcome,
        ticks: generation.tick,
        score: generation.score,
        fitness: generation.agents.iter().map(|a| a.fitness).collect(),
        scores: generation.agents.iter().map(|a| a.score).collect(),
    }
}
