use std::sync::atomic::{AtomicUsize, Ordering};

use genmax::{
    error::GeneticError,
    evolution::{with_arity, EvolutionLauncher, EvolutionOptions, Fallible, Verbosity},
    maximize, minimize,
};

fn peak(x: &[f64]) -> f64 {
    -((x[0] - 50.0).powi(2) + (x[1] - 50.0).powi(2))
}

fn bowl(x: &[f64]) -> f64 {
    (x[0] - 20.0).powi(2) + (x[1] + 30.0).powi(2)
}

fn distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

#[test]
fn test_maximize_finds_peak() {
    let options = EvolutionOptions::builder()
        .dimensions(2)
        .population_size(60)
        .boundaries(vec![(0.0, 100.0), (0.0, 100.0)])
        .generations(50)
        .seed(2018)
        .build();

    let best = maximize(peak, &options).unwrap();

    assert!(
        distance(&best.coordinates, &[50.0, 50.0]) < 5.0,
        "best candidate {:?} too far from the peak",
        best.coordinates
    );
    assert_eq!(best.fitness, peak(&best.coordinates));
}

#[test]
fn test_maximize_is_reproducible_with_seed() {
    let options = EvolutionOptions::builder()
        .dimensions(2)
        .generations(10)
        .seed(77)
        .build();

    let first = maximize(peak, &options).unwrap();
    let second = maximize(peak, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parallel_maximize_matches_sequential() {
    let sequential = EvolutionOptions::builder()
        .dimensions(2)
        .generations(10)
        .seed(5)
        .build();
    let parallel = EvolutionOptions::builder()
        .dimensions(2)
        .generations(10)
        .seed(5)
        .parallel(true)
        .worker_count(4)
        .build();

    assert_eq!(
        maximize(peak, &sequential).unwrap(),
        maximize(peak, &parallel).unwrap()
    );
}

#[test]
fn test_minimize_reports_true_fitness() {
    let options = EvolutionOptions::builder()
        .dimensions(2)
        .boundaries(vec![(-100.0, 100.0), (-100.0, 100.0)])
        .generations(40)
        .seed(9)
        .build();

    let lowest = minimize(bowl, &options).unwrap();

    assert_eq!(lowest.fitness, bowl(&lowest.coordinates));
    assert!(lowest.fitness >= 0.0);
    assert!(distance(&lowest.coordinates, &[20.0, -30.0]) < 20.0);
}

#[test]
fn test_minimize_beats_random_start() {
    let options = EvolutionOptions::builder()
        .dimensions(3)
        .generations(30)
        .seed(31)
        .build();
    let objective = |x: &[f64]| x.iter().sum::<f64>();

    let lowest = minimize(objective, &options).unwrap();
    let highest = maximize(objective, &options).unwrap();

    assert!(lowest.fitness < highest.fitness);
    assert!(lowest.fitness < 60.0);
    assert!(highest.fitness > 240.0);
}

#[test]
fn test_launcher_reuses_objective() {
    let launcher = EvolutionLauncher::new(with_arity(2, peak));
    let options = EvolutionOptions::builder().generations(5).seed(3).build();

    let high = launcher.maximize(&options).unwrap();
    let low = launcher.minimize(&options).unwrap();

    assert_eq!(high.coordinates.len(), 2);
    assert!(high.fitness >= low.fitness);
}

#[test]
fn test_one_dimensional_problem() {
    let options = EvolutionOptions::builder()
        .dimensions(1)
        .boundaries(vec![(-10.0, 10.0)])
        .mutation_probability(0.5)
        .mutation_range(2.0)
        .generations(40)
        .seed(8)
        .build();

    let best = maximize(|x: &[f64]| -(x[0] - 3.0).abs(), &options).unwrap();
    assert!((best.coordinates[0] - 3.0).abs() < 2.0);
}

#[test]
fn test_invalid_elite_fraction() {
    let options = EvolutionOptions::builder()
        .dimensions(2)
        .elite_fraction(1.5)
        .build();

    match maximize(peak, &options) {
        Err(GeneticError::Configuration(msg)) => assert!(msg.contains("elite_fraction")),
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_missing_dimensions() {
    let options = EvolutionOptions::default();

    assert!(matches!(
        maximize(peak, &options),
        Err(GeneticError::Configuration(_))
    ));
}

#[test]
fn test_failing_objective_aborts_run() {
    let objective = Fallible::new(|x: &[f64]| {
        if x[0] > 90.0 {
            Err(format!("cannot evaluate at {}", x[0]))
        } else {
            Ok(x[0])
        }
    });
    // Uniform sampling over (0, 100) with 200 candidates hits x > 90 almost surely.
    let options = EvolutionOptions::builder()
        .dimensions(2)
        .population_size(200)
        .seed(12)
        .build();

    assert!(matches!(
        maximize(objective, &options),
        Err(GeneticError::ObjectiveEvaluation(_))
    ));
}

#[test]
fn test_verbose_run_logs() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    let options = EvolutionOptions::builder()
        .dimensions(2)
        .population_size(10)
        .verbosity(Verbosity::try_from(2).unwrap())
        .generations(3)
        .build();

    assert!(maximize(peak, &options).is_ok());
}

#[test]
fn test_bounds_wider_than_f64_max() {
    let options = EvolutionOptions::builder()
        .dimensions(2)
        .boundaries(vec![(-1e308, 1e308), (0.0, 1.0)])
        .generations(5)
        .seed(44)
        .build();

    let best = maximize(|x: &[f64]| -x[1], &options).unwrap();
    assert!((-1e308..=1e308).contains(&best.coordinates[0]));
    assert!((0.0..=1.0).contains(&best.coordinates[1]));
}

#[test]
fn test_maximal_mutation_range() {
    let options = EvolutionOptions::builder()
        .dimensions(2)
        .boundaries(vec![(0.0, 100.0), (0.0, 100.0)])
        .mutation_range(f64::MAX)
        .mutation_probability(1.0)
        .generations(5)
        .seed(45)
        .build();

    let best = maximize(peak, &options).unwrap();
    assert!(best
        .coordinates
        .iter()
        .all(|value| (0.0..=100.0).contains(value)));
}

#[test]
fn test_parallel_run_with_failing_objective() {
    let objective = Fallible::new(|x: &[f64]| {
        if x[0] > 90.0 {
            Err("outside the model's domain")
        } else {
            Ok(-x[0])
        }
    });
    let options = EvolutionOptions::builder()
        .dimensions(2)
        .population_size(200)
        .parallel(true)
        .worker_count(3)
        .seed(12)
        .build();

    assert!(matches!(
        maximize(objective.clone(), &options),
        Err(GeneticError::ObjectiveEvaluation(_))
    ));
    assert!(matches!(
        maximize(objective.clone(), &options),
        Err(GeneticError::ObjectiveEvaluation(_))
    ));
}

#[test]
fn test_minimize_rejects_nan_on_final_evaluation() {
    let calls = AtomicUsize::new(0);
    // Numeric for the ten initial evaluations, NaN afterwards.
    let objective = move |x: &[f64]| {
        if calls.fetch_add(1, Ordering::SeqCst) >= 10 {
            f64::NAN
        } else {
            x[0]
        }
    };
    let options = EvolutionOptions::builder()
        .dimensions(2)
        .population_size(10)
        .generations(0)
        .seed(6)
        .build();

    assert!(matches!(
        minimize(objective, &options),
        Err(GeneticError::ObjectiveEvaluation(_))
    ));
}
