#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use std::fs;
use std::path::PathBuf;

use ndarray::Array1;

use aviary::simulation::checkpoint::{self, Overlay, Snapshot};
use aviary::simulation::controller::{Action, Controller};
use aviary::simulation::harness;
use aviary::simulation::params::Params;

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("aviary_checkpoint_{name}"));
    fs::remove_dir_all(&dir).ok();
    dir
}

fn snapshot(generation: u32) -> Snapshot<Vec<f32>> {
    Snapshot {
        generation,
        fitness_threshold: 500.0,
        population: vec![0.05, 0.1, 0.15],
    }
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = test_dir("round_trip");

    let saved = snapshot(4);
    let path = checkpoint::save_checkpoint(&dir, &saved).expect("Failed to save checkpoint");
    assert!(path.ends_with("checkpoint-4.json"));

    let loaded: Snapshot<Vec<f32>> =
        checkpoint::load_checkpoint(&path).expect("Failed to load checkpoint");
    assert_eq!(loaded.generation, saved.generation);
    assert_eq!(loaded.fitness_threshold, saved.fitness_threshold);
    assert_eq!(loaded.population, saved.population);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_resume_picks_the_numerically_highest_index() {
    let dir = test_dir("numeric_order");

    // Lexicographically "9" > "10"; the resume must compare numerically.
    for generation in [2, 9, 10] {
        checkpoint::save_checkpoint(&dir, &snapshot(generation)).expect("Failed to save");
    }

    let latest: Snapshot<Vec<f32>> = checkpoint::resume_latest(&dir)
        .expect("Failed to resume")
        .expect("Expected a checkpoint");
    assert_eq!(latest.generation, 10);

    let listed = checkpoint::list_checkpoints(&dir).expect("Failed to list");
    let indices: Vec<u32> = listed.iter().map(|&(index, _)| index).collect();
    assert_eq!(indices, vec![2, 9, 10]);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_missing_directory_is_the_fresh_start_path() {
    let dir = test_dir("missing");

    let listed = checkpoint::list_checkpoints(&dir).expect("Missing dir should not error");
    assert!(listed.is_empty());

    let resumed: Option<Snapshot<Vec<f32>>> =
        checkpoint::resume_latest(&dir).expect("Missing dir should not error");
    assert!(resumed.is_none());
}

#[test]
fn test_foreign_files_are_ignored() {
    let dir = test_dir("foreign");
    checkpoint::save_checkpoint(&dir, &snapshot(3)).expect("Failed to save");

    fs::write(dir.join("notes.txt"), "not a checkpoint").expect("Failed to write");
    fs::write(dir.join("checkpoint-abc.json"), "{}").expect("Failed to write");

    let listed = checkpoint::list_checkpoints(&dir).expect("Failed to list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].0, 3);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_overlay_overrides_the_stale_threshold() {
    let mut restored = snapshot(7);

    restored.apply_overlay(&Overlay {
        fitness_threshold: Some(100_000.0),
    });
    assert_eq!(restored.fitness_threshold, 100_000.0);

    // An empty overlay leaves the persisted value alone.
    restored.apply_overlay(&Overlay::default());
    assert_eq!(restored.fitness_threshold, 100_000.0);
}

#[test]
fn test_corrupt_checkpoint_is_an_error() {
    let dir = test_dir("corrupt");
    fs::create_dir_all(&dir).expect("Failed to create dir");

    let path = dir.join("checkpoint-1.json");
    fs::write(&path, "{ this is not valid json }").expect("Failed to write");

    let result: Result<Snapshot<Vec<f32>>, _> = checkpoint::load_checkpoint(&path);
    assert!(result.is_err(), "Loading invalid JSON should return an error");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_best_artifact_round_trip() {
    let dir = test_dir("best");
    fs::create_dir_all(&dir).expect("Failed to create dir");
    let path = dir.join("best_controller.json");

    checkpoint::save_best(&path, &0.125f32).expect("Failed to save best");
    let loaded: f32 = checkpoint::load_best(&path).expect("Failed to load best");
    assert_eq!(loaded, 0.125);

    fs::remove_dir_all(&dir).ok();
}

/// Flaps on a fixed period; the period is the whole "genome".
struct FlapEvery {
    period: u32,
    counter: u32,
}

impl Controller for FlapEvery {
    fn decide(&mut self, _senses: &Array1<f32>) -> Action {
        self.counter += 1;
        if self.counter % self.period == 0 {
            Action::Flap
        } else {
            Action::Idle
        }
    }

    fn report_fitness(&mut self, _delta: f32) {}
}

#[test]
fn test_restored_population_replays_identically() {
    let dir = test_dir("replay");
    let params = Params::default();
    let seed = 9;

    let evaluate = |periods: &[u32]| {
        let mut population: Vec<FlapEvery> = periods
            .iter()
            .map(|&period| FlapEvery { period, counter: 0 })
            .collect();
        let mut controllers: Vec<&mut dyn Controller> = population
            .iter_mut()
            .map(|c| c as &mut dyn Controller)
            .collect();
        harness::run_generation(&params, &mut controllers, Some(seed))
    };

    let saved = Snapshot {
        generation: 1,
        fitness_threshold: 500.0,
        population: vec![21u32, 23, 25, 27],
    };
    let before = evaluate(&saved.population);

    checkpoint::save_checkpoint(&dir, &saved).expect("Failed to save");
    let restored: Snapshot<Vec<u32>> = checkpoint::resume_latest(&dir)
        .expect("Failed to resume")
        .expect("Expected a checkpoint");
    let after = evaluate(&restored.population);

    assert_eq!(restored.population, saved.population);
    assert_eq!(before.ticks, after.ticks);
    assert_eq!(before.score, after.score);
    assert_eq!(before.fitness, after.fitness);
    assert_eq!(before.scores, after.scores);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_missing_best_artifact_is_fatal() {
    let dir = test_dir("best_missing");
    let result: Result<f32, _> = checkpoint::load_best(&dir.join("best_controller.json"));
    assert!(
        result.is_err(),
        "Replay without a trained controller has no continuation"
    );
}
