//! Scoring and fitness ledger.
//!
//! Every reward and penalty flows through this module so each qualifying
//! event is attributed exactly once. Deltas land in two places at the same
//! time: the agent's fitness accumulator (read out at the end of a
//! generation) and the controller's `report_fitness` callback (consumed by
//! the external training algorithm).

use super::agent::Agent;
use super::controller::Controller;
use super::obstacle::ObstacleStream;
use super::params::Params;

/// Applies a fitness delta to an agent and forwards it to its controller.
fn credit(agent: &mut Agent, controller: &mut dyn Controller, delta: f32) {
    agent.fitness += delta;
    controller.report_fitness(delta);
}

/// Grants the per-tick survival bonus to a live agent.
///
/// Charged at decision time, before physics, so an agent that dies this
/// tick still earns this tick's bonus.
pub fn survival_bonus(agent: &mut Agent, controller: &mut dyn Controller, params: &Params) {
    if agent.alive {
        credit(agent, controller, params.survival_bonus);
    }
}

/// Charges the one-time death penalty.
///
/// Must be called exactly at the tick of the alive-to-dead transition,
/// whether the boundary or an obstacle killed the agent.
pub fn death_penalty(agent: &mut Agent, controller: &mut dyn Controller, params: &Params) {
    credit(agent, controller, -params.death_penalty);
}

/// Awards pass-through rewards for every obstacle newly behind the agent.
///
/// An obstacle counts as passed once the agent's x is beyond its trailing
/// edge. Each (agent, obstacle) pair is rewarded at most once, tracked in
/// the obstacle's `passed_by` set of stable agent ids; an agent that stays
/// "past" an obstacle for many ticks is not rewarded again. Dead agents
/// earn nothing.
///
/// Returns the number of obstacles passed for the first time by any agent,
/// which the generation adds to its global score after flipping their
/// `scored` flags.
pub fn award_passes(
    agent: &mut Agent,
    controller: &mut dyn Controller,
    stream: &mut ObstacleStream,
    params: &Params,
) -> u32 {
    if !agent.alive {
        return 0;
    }

    let mut newly_scored = 0;
    for obstacle in &mut stream.obstacles {
        if agent.x > obstacle.x + params.obstacle_width && obstacle.passed_by.insert(agent.id) {
            agent.score += 1;
            credit(agent, controller, params.pass_reward);

            if !obstacle.scored {
                obstacle.scored = true;
                newly_scored += 1;
            }
        }
    }
    newly_scored
}
