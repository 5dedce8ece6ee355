//! Obstacles and the obstacle stream.
//!
//! An obstacle is a paired top/bottom barrier with a passable vertical gap.
//! The stream owns every live obstacle in creation order, drives the spawn
//! timer, advances obstacles leftward, and purges them once they are fully
//! off the trailing edge of the world.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::params::Params;

/// One pipe pair.
///
/// The gap position is drawn uniformly at creation time within a bounded
/// sub-range of the world height, independently per obstacle. `passed_by`
/// records the stable ids of agents already credited for passing, so the
/// pass reward can never be applied twice to the same agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge. Strictly decreases every tick until removal.
    pub x: f32,
    /// Top edge of the passable gap.
    pub gap_top: f32,
    /// Bottom edge of the passable gap (`gap_top + gap_size`).
    pub gap_bottom: f32,
    /// Whether any agent has passed this obstacle yet. Gates the single
    /// global score increment.
    pub scored: bool,
    /// Ids of agents already credited individually for passing.
    pub passed_by: HashSet<usize>,
}

impl Obstacle {
    /// Creates an obstacle at the given x with a randomly placed gap.
    pub fn new(x: f32, params: &Params, rng: &mut impl Rng) -> Self {
        let min_gap_top = params.gap_margin as i32;
        let max_gap_top = (params.world_height - params.gap_size - params.gap_margin) as i32;
        let gap_top = rng.random_range(min_gap_top..=max_gap_top) as f32;

        Self {
            x,
            gap_top,
            gap_bottom: gap_top + params.gap_size,
            scored: false,
            passed_by: HashSet::new(),
        }
    }

    /// Moves the obstacle leftward by the fixed speed.
    pub fn advance(&mut self, params: &Params) {
        self.x -= params.obstacle_speed;
    }

    /// Checks whether the obstacle is fully past the world's left edge.
    pub fn is_off_screen(&self, params: &Params) -> bool {
        self.x + params.obstacle_width < 0.0
    }

    /// Returns the top barrier rectangle (world top down to the gap).
    pub fn top_rect(&self, params: &Params) -> Rect {
        Rect::new(self.x, 0.0, params.obstacle_width, self.gap_top)
    }

    /// Returns the bottom barrier rectangle (gap bottom down to the floor).
    pub fn bottom_rect(&self, params: &Params) -> Rect {
        Rect::new(
            self.x,
            self.gap_bottom,
            params.obstacle_width,
            params.world_height - self.gap_bottom,
        )
    }

    /// Returns the cap rectangle hanging from the top barrier's gap edge.
    ///
    /// Caps overhang the body horizontally and extend downward from the gap
    /// edge, so the top cap intrudes into the gap itself. This matches the
    /// reference geometry exactly; the effective passable band is narrower
    /// than the nominal gap while inside the cap's x range.
    pub fn top_cap(&self, params: &Params) -> Rect {
        Rect::new(
            self.x - params.cap_overhang,
            self.gap_top,
            params.obstacle_width + 2.0 * params.cap_overhang,
            params.cap_height,
        )
    }

    /// Returns the cap rectangle at the bottom barrier's gap edge.
    pub fn bottom_cap(&self, params: &Params) -> Rect {
        Rect::new(
            self.x - params.cap_overhang,
            self.gap_bottom,
            params.obstacle_width + 2.0 * params.cap_overhang,
            params.cap_height,
        )
    }

    /// Tests a bounding box against all four collision rectangles.
    pub fn collides_with(&self, rect: &Rect, params: &Params) -> bool {
        rect.overlaps(&self.top_rect(params))
            || rect.overlaps(&self.bottom_rect(params))
            || rect.overlaps(&self.top_cap(params))
            || rect.overlaps(&self.bottom_cap(params))
    }

    /// Checks whether the trailing edge is still ahead of the given x.
    pub fn is_ahead_of(&self, x: f32, params: &Params) -> bool {
        self.x + params.obstacle_width > x
    }
}

/// Ordered sequence of live obstacles plus the spawn timer.
///
/// Obstacles are kept in creation order, which is also descending-x order
/// since they all move at the same speed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleStream {
    /// Live obstacles in creation order.
    pub obstacles: Vec<Obstacle>,
    /// Ticks elapsed since the last spawn.
    pub spawn_timer: u32,
}

impl ObstacleStream {
    /// Creates an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the spawn timer, creating an obstacle at the world's right
    /// edge when the interval elapses.
    pub fn tick_spawn(&mut self, params: &Params, rng: &mut impl Rng) {
        self.spawn_timer += 1;
        if self.spawn_timer >= params.spawn_interval {
            self.obstacles
                .push(Obstacle::new(params.world_width, params, rng));
            self.spawn_timer = 0;
        }
    }

    /// Moves every obstacle leftward and purges the ones fully off-screen.
    pub fn advance(&mut self, params: &Params) {
        for obstacle in &mut self.obstacles {
            obstacle.advance(params);
        }
        self.obstacles.retain(|o| !o.is_off_screen(params));
    }

    /// Finds the first obstacle, in stream order, whose trailing edge is
    /// still ahead of the given x. This is the "next obstacle" an agent at
    /// that x has not yet fully passed.
    pub fn next_ahead_of(&self, x: f32, params: &Params) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.is_ahead_of(x, params))
    }
}
