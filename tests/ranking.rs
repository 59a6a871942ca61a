use scoreplot::ranking::{dot, grid, ideal_point, linear};
use scoreplot::{Choice, Comparison, EstimateError, EstimatorConfig, ModelKind, Regularization};

fn unnormalized() -> EstimatorConfig {
    EstimatorConfig {
        normalize: false,
        ..Default::default()
    }
}

#[test]
fn grid_enumerates_levels_row_major() {
    let items = grid::feature_grid(&[1.0, 0.5, 0.1], 3);
    assert_eq!(items.len(), 27);
    assert_eq!(items[0], vec![1.0, 1.0, 1.0]);
    assert_eq!(items[5], vec![1.0, 0.5, 0.1]);
    assert_eq!(items[9], vec![0.5, 1.0, 1.0]);
    assert_eq!(items[26], vec![0.1, 0.1, 0.1]);
}

#[test]
fn rank_by_is_stable_on_ties() {
    let items = vec![vec![1.0], vec![3.0], vec![1.0], vec![2.0]];
    let ranking = grid::rank_by(&items, |f| f[0]);
    assert_eq!(ranking, vec![2, 0, 3, 1]);
    assert_eq!(grid::in_rank_order(&[10.0, 30.0, 11.0, 20.0], &ranking), vec![30.0, 20.0, 10.0, 11.0]);
}

#[test]
fn all_pairs_follows_ranking() {
    let items = vec![vec![1.0], vec![0.0]];
    let pairs = grid::all_pairs(&items, &[0, 1]);
    let choices: Vec<Choice> = pairs.iter().map(|c| c.choice).collect();
    assert_eq!(
        choices,
        vec![Choice::Second, Choice::First, Choice::Second, Choice::Second]
    );
}

#[test]
fn linear_moves_towards_preferred_feature() {
    // Item [1] beats item [0] in both orders.
    let comparisons = vec![
        Comparison::new(Choice::First, vec![1.0], vec![0.0]),
        Comparison::new(Choice::Second, vec![0.0], vec![1.0]),
    ];
    let est = linear::estimate(&comparisons, &unnormalized()).unwrap();
    assert_eq!(est.model, ModelKind::Linear);
    assert!(est.preferences[0] > 1.0);
    assert!(est.iterations > 0);
}

#[test]
fn linear_recovers_weight_order_on_grid() {
    let truth = [0.7, 0.2, 0.1];
    let items = grid::feature_grid(&[1.0, 0.5, 0.1], 3);
    let ranking = grid::rank_by(&items, |f| linear::score(&truth, f));
    let comparisons = grid::all_pairs(&items, &ranking);

    let est = linear::estimate(&comparisons, &EstimatorConfig::default()).unwrap();
    let w = &est.preferences;
    assert!(w[0] > w[1] && w[1] > w[2] && w[2] > 0.0, "{w:?}");
    assert!((dot(w, w).sqrt() - 1.0).abs() < 1e-9);

    let estimated = grid::rank_by(&items, |f| linear::score(w, f));
    assert_eq!(estimated[0], 0);
    assert_eq!(estimated[26], 26);
}

#[test]
fn linear_l1_regularization_runs() {
    let comparisons = vec![
        Comparison::new(Choice::First, vec![1.0, 0.0], vec![0.0, 1.0]),
        Comparison::new(Choice::Second, vec![0.0, 1.0], vec![1.0, 0.0]),
    ];
    let cfg = EstimatorConfig {
        regularization: Regularization::L1,
        ..Default::default()
    };
    let est = linear::estimate(&comparisons, &cfg).unwrap();
    assert!(est.preferences[0] > est.preferences[1]);
}

#[test]
fn ideal_point_moves_towards_preferred_item() {
    // Item [0] beats item [1]; the estimate starts at 1.0.
    let comparisons = vec![
        Comparison::new(Choice::First, vec![0.0], vec![1.0]),
        Comparison::new(Choice::Second, vec![1.0], vec![0.0]),
    ];
    let est = ideal_point::estimate(&comparisons, &unnormalized()).unwrap();
    assert_eq!(est.model, ModelKind::IdealPoint);
    let w = &est.preferences;
    assert!(w[0] < 0.5, "{w:?}");
    assert!(ideal_point::score(w, &[0.0]) > ideal_point::score(w, &[1.0]));
}

#[test]
fn empty_comparisons_rejected() {
    assert_eq!(
        linear::estimate(&[], &EstimatorConfig::default()),
        Err(EstimateError::NoComparisons)
    );
    assert_eq!(
        ideal_point::estimate(&[], &EstimatorConfig::default()),
        Err(EstimateError::NoComparisons)
    );
}

#[test]
fn dimension_mismatch_rejected() {
    let comparisons = vec![
        Comparison::new(Choice::First, vec![1.0, 0.0], vec![0.0, 1.0]),
        Comparison::new(Choice::First, vec![1.0], vec![0.0, 1.0]),
    ];
    assert_eq!(
        linear::estimate(&comparisons, &EstimatorConfig::default()),
        Err(EstimateError::DimensionMismatch {
            expected: 2,
            found: 1,
            index: 1
        })
    );
}

#[test]
fn divergent_step_size_is_reported() {
    let items = grid::feature_grid(&[1.0, 0.5, 0.1], 3);
    let ranking = grid::rank_by(&items, |f| linear::score(&[0.7, 0.2, 0.1], f));
    let comparisons = grid::all_pairs(&items, &ranking);
    let cfg = EstimatorConfig {
        eta: 1e300,
        ..Default::default()
    };
    assert!(matches!(
        linear::estimate(&comparisons, &cfg),
        Err(EstimateError::NonFinite { iteration: 1 })
    ));
}

#[test]
fn ideal_point_l1_moves_towards_preferred_item() {
    let comparisons = vec![
        Comparison::new(Choice::First, vec![0.0], vec![1.0]),
        Comparison::new(Choice::Second, vec![1.0], vec![0.0]),
    ];
    let cfg = EstimatorConfig {
        regularization: Regularization::L1,
        normalize: false,
        ..Default::default()
    };
    let est = ideal_point::estimate(&comparisons, &cfg).unwrap();
    assert!(est.preferences[0] < 0.5, "{:?}", est.preferences);
}

#[test]
fn zero_vector_is_not_normalized() {
    // Identical options carry no gradient; one L1 step of size 1 takes w from 1 to 0.
    let comparisons = vec![Comparison::new(Choice::Second, vec![1.0], vec![1.0])];
    let cfg = EstimatorConfig {
        max_iterations: 1,
        regularization: Regularization::L1,
        lambda: 1.0,
        eta: 1.0,
        normalize: true,
        ..Default::default()
    };
    let est = linear::estimate(&comparisons, &cfg).unwrap();
    assert_eq!(est.preferences, vec![0.0]);
    assert_eq!(est.iterations, 1);
}
