//! Generation state machine driving one evaluation run.
//!
//! A generation owns its agents and obstacle stream for the duration of a
//! single run and steps them in one fixed, single-threaded pass per tick.
//! Controllers are borrowed from the caller, so the same trained controller
//! can be evaluated across multiple generations or replayed later.

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::agent::Agent;
use super::controller::{Action, Controller};
use super::obstacle::ObstacleStream;
use super::params::Params;
use super::scoring;
use super::senses;

/// Lifecycle of a generation.
///
/// `Ready -> Running -> {Extinct, TimedOut}`. The terminal states are
/// absorbing: the run is over and terminal fitness values can be read out.
/// A caller wanting another run constructs a fresh generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created but not started: no spawning, physics, or scoring happens.
    Ready,
    /// Ticking.
    Running,
    /// Every agent is dead.
    Extinct,
    /// The tick budget ran out with at least one agent still alive.
    TimedOut,
}

impl Phase {
    /// Checks whether the generation has ended.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Extinct | Phase::TimedOut)
    }
}

/// One bounded evaluation run of a population against one obstacle timeline.
///
/// All randomness (obstacle gap placement) is drawn from a single stream
/// owned by the generation, so a seeded generation replays the exact same
/// obstacle timeline regardless of how many agents are alive.
#[derive(Debug, Clone)]
pub struct Generation {
    /// The population, in the fixed order controllers are matched to.
    pub agents: Vec<Agent>,
    /// The shared obstacle timeline.
    pub stream: ObstacleStream,
    /// Ticks elapsed since `start`.
    pub tick: u32,
    /// Obstacles passed by at least one agent, counted once per obstacle.
    pub score: u32,
    /// Current lifecycle phase.
    pub phase: Phase,
    rng: StdRng,
}

impl Generation {
    /// Creates a generation in the `Ready` phase.
    ///
    /// Agents get stable ids `0..population_size` matching the index of
    /// their controller. With `seed` the obstacle timeline is reproducible;
    /// without it the generation seeds from OS entropy.
    pub fn new(params: &Params, population_size: usize, seed: Option<u64>) -> Self {
        let agents = (0..population_size)
            .map(|id| Agent::new(id, params))
            .collect();

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            agents,
            stream: ObstacleStream::new(),
            tick: 0,
            score: 0,
            phase: Phase::Ready,
            rng,
        }
    }

    /// Flips `Ready` to `Running`. Any other phase is left unchanged.
    pub fn start(&mut self) {
        if self.phase == Phase::Ready {
            self.phase = Phase::Running;
        }
    }

    /// Number of agents still alive.
    pub fn live_count(&self) -> usize {
        self.agents.iter().filter(|a| a.alive).count()
    }

    /// Advances the generation by one tick.
    ///
    /// Does nothing unless the phase is `Running`. Within a tick the order
    /// is fixed: spawn timer, then every live agent in list order (sense,
    /// decide, physics, ledger), then obstacle movement and purging, then
    /// the tick counter and the termination check. Extinction is checked
    /// before the tick cap, so an empty population ends `Extinct` on the
    /// first tick rather than `TimedOut`.
    ///
    /// # Panics
    ///
    /// Panics if the generation is running and `controllers` does not
    /// match the population size. Inert steps never panic.
    pub fn step(&mut self, params: &Params, controllers: &mut [&mut dyn Controller]) {
        if self.phase != Phase::Running {
            return;
        }

        assert_eq!(
            controllers.len(),
            self.agents.len(),
            "one controller per agent"
        );

        self.stream.tick_spawn(params, &mut self.rng);

        for (agent, controller) in self.agents.iter_mut().zip(controllers.iter_mut()) {
            if !agent.alive {
                continue;
            }

            scoring::survival_bonus(agent, *controller, params);

            let senses = senses::observe(agent, &self.stream, params);
            if controller.decide(&senses) == Action::Flap {
                agent.flap(params);
            }

            agent.integrate(params);

            // A boundary death above short-circuits the obstacle tests for
            // this tick; the death penalty below is charged either way.
            if agent.alive {
                let rect = agent.rect(params);
                for obstacle in &self.stream.obstacles {
                    if obstacle.collides_with(&rect, params) {
                        agent.kill();
                        break;
                    }
                }
            }

            if agent.alive {
                self.score += scoring::award_passes(agent, *controller, &mut self.stream, params);
            } else {
                scoring::death_penalty(agent, *controller, params);
            }
        }

        self.stream.advance(params);
        self.tick += 1;

        if self.live_count() == 0 {
            self.phase = Phase::Extinct;
        } else if self.tick >= params.max_ticks {
            self.phase = Phase::TimedOut;
        }
    }
}
