use serde::{Deserialize, Serialize};

/// Simulation parameters that control world geometry, physics, and scoring.
///
/// All distances are in world units, all rates are per tick. The y axis grows
/// downward, so gravity is positive and the flap impulse is negative. The
/// defaults reproduce the reference environment: a 400x600 world, gravity
/// 0.5, obstacles spawning every 90 ticks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Params {
    /// World width.
    pub world_width: f32,
    /// World height.
    pub world_height: f32,
    /// Agent bounding box width.
    pub agent_width: f32,
    /// Agent bounding box height.
    pub agent_height: f32,
    /// Fixed horizontal position of every agent (agents never move in x).
    pub agent_x: f32,
    /// Downward acceleration added to vertical velocity every tick.
    pub gravity: f32,
    /// Velocity an upward impulse sets (a set, not an addition).
    pub flap_impulse: f32,
    /// Obstacle body width.
    pub obstacle_width: f32,
    /// Vertical size of the passable gap.
    pub gap_size: f32,
    /// Horizontal distance obstacles travel leftward per tick.
    pub obstacle_speed: f32,
    /// Minimum distance between a gap edge and the world top/bottom.
    pub gap_margin: f32,
    /// Vertical size of the cap rectangles at the gap edges.
    pub cap_height: f32,
    /// Horizontal overhang of the caps past the obstacle body, per side.
    pub cap_overhang: f32,
    /// Ticks between obstacle spawns while the generation is running.
    pub spawn_interval: u32,
    /// Hard tick budget per generation.
    pub max_ticks: u32,
    /// Fitness granted to every live agent each tick.
    pub survival_bonus: f32,
    /// Fitness granted for passing an obstacle.
    pub pass_reward: f32,
    /// Fitness charged once at the tick an agent dies.
    pub death_penalty: f32,
    /// Velocity normalization divisor for the sensory vector.
    pub velocity_scale: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            world_width: 400.0,
            world_height: 600.0,
            agent_width: 30.0,
            agent_height: 25.0,
            agent_x: 80.0,
            gravity: 0.5,
            flap_impulse: -6.0,
            obstacle_width: 50.0,
            gap_size: 150.0,
            obstacle_speed: 3.0,
            gap_margin: 100.0,
            cap_height: 30.0,
            cap_overhang: 3.0,
            spawn_interval: 90,
            max_ticks: 6000,
            survival_bonus: 0.1,
            pass_reward: 10.0,
            death_penalty: 5.0,
            velocity_scale: 10.0,
        }
    }
}
