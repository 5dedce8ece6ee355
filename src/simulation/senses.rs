//! Sensory feature extraction for controllers.
//!
//! Each live agent receives, once per tick, a fixed-length normalized
//! feature vector describing the nearest obstacle it has not yet fully
//! passed and its own kinematic state. The extractor sees only the one
//! agent it is called for; no information about other agents leaks through.

use ndarray::Array1;

use super::agent::Agent;
use super::obstacle::ObstacleStream;
use super::params::Params;

/// Number of features in the sensory vector.
pub const INPUT_SIZE: usize = 5;

/// Computes the sensory vector for one agent.
///
/// The features, in order:
/// 1. Horizontal distance to the next obstacle, over world width
/// 2. Vertical distance from the agent to the gap's top edge, over world
///    height (positive when the agent is below the edge)
/// 3. Vertical distance from the agent to the gap's bottom edge, over world
///    height (positive when the agent is above the edge)
/// 4. Vertical velocity, over the velocity scale
/// 5. Absolute y position, over world height
///
/// With no obstacle ahead the horizontal distance defaults to the full
/// world width and both gap distances to zero. Always succeeds.
pub fn observe(agent: &Agent, stream: &ObstacleStream, params: &Params) -> Array1<f32> {
    let (horizontal, to_gap_top, to_gap_bottom) =
        match stream.next_ahead_of(agent.x, params) {
            Some(obstacle) => (
                obstacle.x - agent.x,
                agent.y - obstacle.gap_top,
                obstacle.gap_bottom - agent.y,
            ),
            None => (params.world_width, 0.0, 0.0),
        };

    Array1::from_vec(vec![
        horizontal / params.world_width,
        to_gap_top / params.world_height,
        to_gap_bottom / params.world_height,
        agent.velocity / params.velocity_scale,
        agent.y / params.world_height,
    ])
}
