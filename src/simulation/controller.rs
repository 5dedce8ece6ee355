//! External controller seam.
//!
//! The decision-making function and the algorithm that trains it are not
//! part of this crate. The simulation only needs two capabilities: "given a
//! sensory vector, produce an action" and "receive a fitness delta". The
//! trait is deliberately that narrow so the whole evaluation-algorithm
//! family can be swapped without touching the core.

use ndarray::Array1;

/// An agent's decision for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Apply the upward impulse.
    Flap,
    /// Do nothing and keep falling.
    Idle,
}

/// Decision-making capability consumed by the simulation.
///
/// Controllers are borrowed by the harness for the duration of a run and
/// never owned, so the same trained controller can be evaluated across
/// multiple generations or replayed later. The core never inspects a
/// controller's internal representation.
pub trait Controller {
    /// Maps a sensory vector (see [`super::senses::observe`]) to an action.
    fn decide(&mut self, senses: &Array1<f32>) -> Action;

    /// Receives a fitness delta from the scoring ledger.
    ///
    /// Called for survival bonuses (positive, small), pass rewards
    /// (positive) and the death penalty (negative, once per life).
    fn report_fitness(&mut self, delta: f32);
}
