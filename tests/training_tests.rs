// End-to-end training and evaluation on a small separable problem.

use rand::rngs::StdRng;
use rand::SeedableRng;

use shallow_nn::{evaluate, train_loop, Dataset, Matrix, NetError, Network, TrainConfig};

/// 30 rows, 10 per class. Class `k` has a large value in feature `k`; the
/// fourth feature and a small deterministic jitter carry no class signal.
fn separable_dataset() -> Dataset {
    let mut features = Vec::new();
    let mut labels = Vec::new();
    for class in 0..3 {
        for i in 0..10 {
            let mut row = vec![0.0; 4];
            row[class] = 3.0;
            row[3] = 0.1 * i as f64 - 0.45;
            for (j, v) in row.iter_mut().enumerate() {
                *v += 0.05 * (((i * 7 + j * 3) % 5) as f64 - 2.0);
            }
            features.push(row);
            labels.push(class);
        }
    }
    Dataset::from_samples(features, &labels).unwrap()
}

fn trained(seed: u64, learning_rate: f64, epochs: usize) -> Network {
    let data = separable_dataset();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut net = Network::new(learning_rate, 3, 4, 5, &mut rng).unwrap();
    train_loop(&mut net, &data, &TrainConfig::new(epochs), &mut rng).unwrap();
    net
}

#[test]
fn test_three_epochs_reach_high_training_accuracy() {
    let data = separable_dataset();
    for seed in [1, 2, 3] {
        let net = trained(seed, 0.5, 3);
        let eval = evaluate(&net, &data).unwrap();
        assert!(eval.accuracy() >= 0.9, "seed {seed}: accuracy {}", eval.accuracy());
    }
}

#[test]
fn test_small_learning_rate_converges_with_more_epochs() {
    let data = separable_dataset();
    let net = trained(42, 0.01, 100);
    let eval = evaluate(&net, &data).unwrap();
    assert!(eval.accuracy() >= 0.9, "accuracy {}", eval.accuracy());
}

#[test]
fn test_history_has_one_entry_per_epoch() {
    let data = separable_dataset();
    let mut rng = StdRng::seed_from_u64(9);
    let mut net = Network::new(0.5, 3, 4, 5, &mut rng).unwrap();
    let history = train_loop(&mut net, &data, &TrainConfig::new(4), &mut rng).unwrap();
    assert_eq!(history.len(), 4);
    for (i, stats) in history.iter().enumerate() {
        assert_eq!(stats.epoch, i + 1);
        assert_eq!(stats.total_epochs, 4);
        assert!(stats.train_loss.is_finite() && stats.train_loss >= 0.0);
    }
    assert!(history[3].train_loss < history[0].train_loss);
}

#[test]
fn test_same_seed_gives_identical_parameters() {
    let a = trained(77, 0.1, 3);
    let b = trained(77, 0.1, 3);
    assert_eq!(a.params(), b.params());

    let c = trained(78, 0.1, 3);
    assert_ne!(a.params(), c.params());
}

#[test]
fn test_evaluation_is_read_only_and_tallies_classes() {
    let data = separable_dataset();
    let net = trained(5, 0.5, 3);
    let before = net.params().clone();
    let eval = evaluate(&net, &data).unwrap();
    assert_eq!(net.params(), &before);
    assert_eq!(eval.total, 30);
    assert_eq!(eval.per_class.len(), 3);
    assert!(eval.per_class.iter().all(|t| t.total == 10));
    assert_eq!(eval.per_class.iter().map(|t| t.correct).sum::<usize>(), eval.correct);
}

#[test]
fn test_label_outside_class_range_stops_training() {
    let data = Dataset::from_samples(vec![vec![1.0, 0.0], vec![0.0, 1.0]], &[0, 5]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let mut net = Network::new(0.1, 2, 2, 3, &mut rng).unwrap();
    let err = train_loop(&mut net, &data, &TrainConfig::new(1), &mut rng).unwrap_err();
    assert!(matches!(err, NetError::InvalidLabel { classes: 2, .. }));

    let err = evaluate(&net, &data).unwrap_err();
    assert!(matches!(err, NetError::InvalidLabel { .. }));
}

#[test]
fn test_negative_label_is_out_of_class_range() {
    let data = Dataset::new(Matrix::from_data(vec![vec![1.0, 0.0]]), vec![-1.0]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let mut net = Network::new(0.1, 2, 2, 3, &mut rng).unwrap();
    let before = net.params().clone();

    let err = train_loop(&mut net, &data, &TrainConfig::new(1), &mut rng).unwrap_err();
    assert!(matches!(err, NetError::InvalidLabel { classes: 2, .. }));
    assert_eq!(net.params(), &before);

    let err = evaluate(&net, &data).unwrap_err();
    assert!(matches!(err, NetError::InvalidLabel { .. }));
}

#[test]
fn test_fractional_label_is_a_dataset_error() {
    let data = Dataset::new(Matrix::from_data(vec![vec![1.0, 0.0]]), vec![0.5]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let mut net = Network::new(0.1, 2, 2, 3, &mut rng).unwrap();
    let err = train_loop(&mut net, &data, &TrainConfig::new(1), &mut rng).unwrap_err();
    assert!(matches!(err, NetError::Dataset(_)));
}

#[test]
fn test_feature_width_must_match_network() {
    let data = Dataset::new(Matrix::from_data(vec![vec![1.0, 2.0, 3.0]]), vec![0.0]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let mut net = Network::new(0.1, 2, 2, 3, &mut rng).unwrap();
    let err = train_loop(&mut net, &data, &TrainConfig::new(1), &mut rng).unwrap_err();
    assert!(matches!(err, NetError::ShapeMismatch { .. }));
}
