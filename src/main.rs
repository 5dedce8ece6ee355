//! Headless training-loop demo.
//!
//! Evaluates a population of simple band-holding controllers against one
//! obstacle timeline, then persists the next checkpoint and the best
//! controller artifact. The population here is a stand-in for an external
//! evolutionary algorithm: each "genome" is just the flap margin of a
//! hand-written rule.

use std::error::Error;
use std::path::Path;

use ndarray::Array1;

use aviary::simulation::checkpoint::{self, Overlay, Snapshot};
use aviary::simulation::controller::{Action, Controller};
use aviary::simulation::harness;
use aviary::simulation::params::Params;

const CHECKPOINT_DIR: &str = "checkpoints";
const BEST_PATH: &str = "best_controller.json";
const FITNESS_THRESHOLD: f32 = 100_000.0;

/// Flaps whenever the gap's bottom edge gets closer than a fixed margin.
struct BandController {
    flap_margin: f32,
}

impl Controller for BandController {
    fn decide(&mut self, senses: &Array1<f32>) -> Action {
        if senses[0] >= 1.0 {
            // No obstacle in range yet: hold the middle of the world.
            if senses[4] > 0.5 {
                Action::Flap
            } else {
                Action::Idle
            }
        } else if senses[2] < self.flap_margin {
            Action::Flap
        } else {
            Action::Idle
        }
    }

    fn report_fitness(&mut self, _delta: f32) {
        // Terminal fitness is read from the generation report instead.
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let params = Params::default();
    let dir = Path::new(CHECKPOINT_DIR);

    let mut snapshot: Snapshot<Vec<f32>> = match checkpoint::resume_latest(dir)? {
        Some(snapshot) => {
            println!("Resuming from generation {}", snapshot.generation);
            snapshot
        }
        None => {
            println!("Starting new training");
            Snapshot {
                generation: 0,
                fitness_threshold: FITNESS_THRESHOLD,
                population: (0..20).map(|i| 0.05 + 0.01 * i as f32).collect(),
            }
        }
    };

    // The persisted threshold is stale if the config changed since the save.
    snapshot.apply_overlay(&Overlay {
        fitness_threshold: Some(FITNESS_THRESHOLD),
    });

    let mut population: Vec<BandController> = snapshot
        .population
        .iter()
        .map(|&flap_margin| BandController { flap_margin })
        .collect();
    let mut controllers: Vec<&mut dyn Controller> = population
        .iter_mut()
        .map(|c| c as &mut dyn Controller)
        .collect();

    let seed = u64::from(snapshot.generation);
    let report = harness::run_generation(&params, &mut controllers, Some(seed));

    println!(
        "Generation {}: {:?} after {} ticks, score {}",
        snapshot.generation, report.outcome, report.ticks, report.score
    );

    let best = report
        .fitness
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .ok_or("empty population")?;
    println!(
        "Best margin {:.2} with fitness {:.1} ({} obstacles passed)",
        snapshot.population[best], report.fitness[best], report.scores[best]
    );

    checkpoint::save_best(Path::new(BEST_PATH), &snapshot.population[best])?;

    snapshot.generation += 1;
    let path = checkpoint::save_checkpoint(dir, &snapshot)?;
    println!("Saved checkpoint {}", path.display());

    Ok(())
}
