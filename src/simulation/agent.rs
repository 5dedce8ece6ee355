//! Agent state, kinematics, and boundary death.
//!
//! An agent is one bird attempting to survive the obstacle stream. Its
//! horizontal position is fixed for its whole life; only the vertical
//! component moves. Death is a one-way transition: once dead, an agent is
//! frozen for the remainder of the generation.

use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::params::Params;

// Presentation-only tilt: a bounded linear map of vertical velocity.
const TILT_PER_VELOCITY: f32 = 3.0;
const TILT_MIN: f32 = -45.0;
const TILT_MAX: f32 = 90.0;

/// One simulated bird.
///
/// Agents can:
/// - Fall under gravity and flap to override their velocity upward
/// - Die on the world boundary or on obstacle collision
/// - Accumulate a score (obstacles passed) and a fitness signal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Stable identifier, assigned at generation start. Obstacles record
    /// pass credits against this id, never against object identity.
    pub id: usize,
    /// Fixed horizontal position (left edge of the bounding box).
    pub x: f32,
    /// Vertical position (top edge of the bounding box). Mutates every tick.
    pub y: f32,
    /// Signed vertical speed, positive downward.
    pub velocity: f32,
    /// Visual tilt angle in degrees. Pure function of velocity, no physical
    /// effect.
    pub angle: f32,
    /// Whether the agent is still alive. Never flips back to `true` within
    /// a generation.
    pub alive: bool,
    /// Obstacles this agent has passed.
    pub score: u32,
    /// Accumulated fitness signal. Mutated only by the scoring ledger.
    pub fitness: f32,
    /// Ticks survived so far.
    pub ticks_alive: u32,
}

impl Agent {
    /// Creates a live agent at the fixed x position and mid world height.
    pub fn new(id: usize, params: &Params) -> Self {
        Self {
            id,
            x: params.agent_x,
            y: params.world_height / 2.0,
            velocity: 0.0,
            angle: 0.0,
            alive: true,
            score: 0,
            fitness: 0.0,
            ticks_alive: 0,
        }
    }

    /// Overrides velocity with the upward impulse. A no-op for dead agents.
    ///
    /// This is a set, not an additive impulse: flapping at any downward
    /// speed yields the same upward velocity.
    pub fn flap(&mut self, params: &Params) {
        if self.alive {
            self.velocity = params.flap_impulse;
        }
    }

    /// Advances kinematics by one tick and applies boundary death.
    ///
    /// Gravity integrates into velocity, velocity into position, and the
    /// tilt angle is recomputed. If the agent leaves the vertical world
    /// bounds it is clamped back in, its velocity zeroed, and it dies.
    /// Dead agents are left untouched.
    pub fn integrate(&mut self, params: &Params) {
        if !self.alive {
            return;
        }

        self.velocity += params.gravity;
        self.y += self.velocity;
        self.ticks_alive += 1;

        self.angle = (self.velocity * TILT_PER_VELOCITY).clamp(TILT_MIN, TILT_MAX);

        let floor = params.world_height - params.agent_height;
        if self.y <= 0.0 || self.y >= floor {
            self.y = self.y.clamp(0.0, floor);
            self.velocity = 0.0;
            self.alive = false;
        }
    }

    /// Returns the agent's collision bounding box.
    pub fn rect(&self, params: &Params) -> Rect {
        Rect::new(self.x, self.y, params.agent_width, params.agent_height)
    }

    /// Kills the agent. One-way; dead agents stay dead.
    pub fn kill(&mut self) {
        self.alive = false;
    }
}
