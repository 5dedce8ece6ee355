//! # Aviary - Deterministic Obstacle-Gauntlet Simulation
//!
//! A side-scrolling obstacle-avoidance environment in which a population of
//! agents ("birds") tries to pass through a stream of gated obstacles
//! ("pipes") by choosing, each tick, whether to apply an upward impulse.
//! The crate is the evaluation engine only: decision-making controllers and
//! the evolutionary algorithm that trains them live outside, behind the
//! [`simulation::controller::Controller`] trait.
//!
//! ## Features
//!
//! - Fixed-timestep physics with boundary and obstacle collision death
//! - Per-agent normalized sensory vectors (nearest unpassed obstacle)
//! - Deduplicated pass rewards, survival bonus, and death penalties
//! - Generation harness with a hard tick budget and extinction detection
//! - Seedable randomness for reproducible obstacle timelines
//! - Checkpoint save/resume keyed by a monotonic generation index
//!
//! ## Core Modules
//!
//! - [`simulation::agent`] - Agent state and the physics step
//! - [`simulation::obstacle`] - Obstacle lifecycle and the spawn stream
//! - [`simulation::senses`] - Sensory feature extraction
//! - [`simulation::scoring`] - Reward and penalty bookkeeping
//! - [`simulation::generation`] - Per-generation state machine
//! - [`simulation::harness`] - Full evaluation runs over a population
//! - [`simulation::checkpoint`] - Persisted population snapshots

/// Core simulation logic and data structures.
pub mod simulation {
    /// Agent state, kinematics, and boundary death.
    pub mod agent;
    /// Checkpoint store and best-controller artifact persistence.
    pub mod checkpoint;
    /// External controller seam: actions and the decision trait.
    pub mod controller;
    /// Generation state machine driving one evaluation run.
    pub mod generation;
    /// Axis-aligned rectangle collision primitives.
    pub mod geometry;
    /// Harness that evaluates a population until extinction or timeout.
    pub mod harness;
    /// Obstacles and the obstacle stream.
    pub mod obstacle;
    /// Simulation parameters.
    pub mod params;
    /// Scoring and fitness ledger.
    pub mod scoring;
    /// Sensory feature extraction for controllers.
    pub mod senses;
}
