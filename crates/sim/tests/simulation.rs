//! Integration tests for the generator and the trial driver.

use longrep_sim::prelude::*;
use longrep_sim::simulation::{run_trial, run_trials_parallel};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

#[test]
fn test_generated_sequence_shape() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
    let dist = BaseDistribution::reference();
    for length in [0, 1, 10, 500] {
        let seq = generate(length, &dist, &mut rng);
        assert_eq!(seq.len(), length + 1);
        assert!(seq.validate().is_ok());
        assert_eq!(seq.bases().count(), length);
    }
}

#[test]
fn test_same_seed_same_sequence() {
    let dist = BaseDistribution::reference();
    let a = generate(300, &dist, &mut Xoshiro256PlusPlus::seed_from_u64(5));
    let b = generate(300, &dist, &mut Xoshiro256PlusPlus::seed_from_u64(5));
    assert_eq!(a, b);
}

#[test]
fn test_run_trials_count_and_floor() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let values = run_trials(100, 25, &BaseDistribution::reference(), &mut rng).unwrap();
    assert_eq!(values.len(), 25);
    assert!(values.iter().all(|&v| v >= 1));
}

#[test]
fn test_sequential_and_parallel_agree() {
    let dist = BaseDistribution::uniform();
    let seq = run_trials(200, 40, &dist, &mut Xoshiro256PlusPlus::seed_from_u64(9)).unwrap();
    let par =
        run_trials_parallel(200, 40, &dist, &mut Xoshiro256PlusPlus::seed_from_u64(9)).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn test_trial_is_repeat_plus_one() {
    let dist = BaseDistribution::reference();
    let seed = 77;
    let seq = generate(150, &dist, &mut Xoshiro256PlusPlus::seed_from_u64(seed));
    let k = compute_longest_repeat(&seq).unwrap();
    assert_eq!(run_trial(150, &dist, seed).unwrap(), k + 1);
}

#[test]
fn test_zero_length_trials_report_one() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
    let values = run_trials(0, 5, &BaseDistribution::reference(), &mut rng).unwrap();
    assert_eq!(values, vec![1; 5]);
}

#[test]
fn test_simulation_reproducible_from_config_json() {
    let config = SimulationConfig::from_json(
        r#"{"length": 60, "trials": 15, "seed": 123, "parallel": false}"#,
    )
    .unwrap();
    assert_eq!(config.distribution, BaseDistribution::reference());

    let first = Simulation::new(config.clone()).run().unwrap();
    let second = Simulation::new(SimulationConfig {
        parallel: true,
        ..config
    })
    .run()
    .unwrap();
    assert_eq!(first, second);
    assert_eq!(first.values.len(), 15);
}

#[test]
fn test_sweep_lengths_in_order() {
    let mut sim = SimulationBuilder::new()
        .length(10)
        .trials(8)
        .seed(4)
        .build()
        .unwrap();
    let sets = sim.sweep(&[10, 100, 1000]).unwrap();
    let lengths: Vec<usize> = sets.iter().map(|s| s.length).collect();
    assert_eq!(lengths, vec![10, 100, 1000]);
    assert!(sets.iter().all(|s| s.values.len() == 8));

    // K grows with length; the 1000-base mean should exceed the 10-base mean.
    let mean = |s: &TrialSet| s.values.iter().sum::<usize>() as f64 / s.values.len() as f64;
    assert!(mean(&sets[2]) > mean(&sets[0]));
}
