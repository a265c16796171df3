//! End-to-end behaviour of the dense, joint and sparse counters

mod common;

use common::{assert_relative_eq, assert_vectors_equal, generate_codes, generate_weights};
use std::collections::HashMap;
use tabula_counts::{
    count_map, counts, counts2, counts_weighted, dense, joint, proportions, sparse, DenseCounter,
    Error, JointDenseCounter, JointLevels, LevelRange, Levels, MergeCounts, Proportions,
    SparseCounter, Table2,
};

#[test]
fn test_out_of_range_exclusion() {
    let levels = LevelRange::new(1, 3).unwrap();
    assert_eq!(counts(&[0, 1, 2, 3, 100], levels).unwrap(), vec![1, 1, 1]);
}

#[test]
fn test_span_inference() {
    let counter = DenseCounter::span(&[5, 5, 7]).unwrap();
    assert_eq!(counter.levels().low(), 5);
    assert_eq!(counter.levels().high(), 7);
    assert_eq!(counts(&[5, 5, 7], Levels::Span).unwrap(), vec![2, 0, 1]);
}

#[test]
fn test_dimension_mismatch() {
    let mut table = vec![0usize; 3];
    let levels = LevelRange::new(1, 4).unwrap();
    let err = dense::accumulate(&mut table, &[1, 2, 3], &levels).unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch(_)));

    let levels = LevelRange::new(1, 3).unwrap();
    let err = dense::accumulate_weighted(&mut vec![0.0; 3], &[1, 2, 3], &levels, &[1.0, 1.0])
        .unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch(_)));
}

#[test]
fn test_joint_counting_independence() {
    let levels = LevelRange::new(1, 2).unwrap();
    let table = counts2(&[1, 1, 2], &[1, 2, 2], JointLevels::Ranges(levels, levels)).unwrap();
    let expected: HashMap<(usize, usize), usize> =
        [((0, 0), 1), ((0, 1), 1), ((1, 0), 0), ((1, 1), 1)].into_iter().collect();
    for (cell, count) in table.iter() {
        assert_eq!(*count, expected[&cell], "cell {:?}", cell);
    }
}

#[test]
fn test_weighted_matches_unweighted_for_unit_weights() {
    let data = generate_codes(1000, -3, 11);
    let levels = LevelRange::new(-3, 7).unwrap();
    let ones = vec![1usize; data.len()];
    assert_eq!(
        counts_weighted(&data, levels, &ones).unwrap(),
        counts(&data, levels).unwrap()
    );
}

#[test]
fn test_proportions_compose_with_counts() {
    let data = generate_codes(257, 0, 9);
    let levels = LevelRange::new(0, 8).unwrap();
    let table = counts(&data, levels).unwrap();
    let expected: Vec<f64> = table.iter().map(|&c| c as f64 / data.len() as f64).collect();
    assert_vectors_equal(&proportions(&data, levels).unwrap(), &expected, "dense proportions");

    // When nothing is dropped the table's own proportions agree
    assert_vectors_equal(&table.proportions(), &expected, "table proportions");
}

#[test]
fn test_weighted_proportions_sum_to_one_when_nothing_dropped() {
    let data = generate_codes(500, 1, 5);
    let weights = generate_weights(data.len());
    let p = tabula_counts::proportions_weighted(&data, Levels::OneTo(5), &weights).unwrap();
    assert_relative_eq!(p.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
}

#[test]
fn test_zero_total_normalization_yields_nan() {
    let data = [1, 2, 2];
    let zero = [0.0; 3];

    let p = tabula_counts::proportions_weighted(&data, Levels::OneTo(2), &zero).unwrap();
    assert!(p.iter().all(|v| v.is_nan()));

    let p = tabula_counts::proportions2_weighted(&data, &data, JointLevels::SquareOneTo(2), &zero)
        .unwrap();
    assert!(p.as_slice().iter().all(|v| v.is_nan()));

    let p = tabula_counts::proportion_map_weighted(&data, &zero).unwrap();
    assert_eq!(p.len(), 2);
    assert!(p.values().all(|v| v.is_nan()));

    // Empty input divides by a zero length
    let empty: [i32; 0] = [];
    let p = proportions(&empty, Levels::OneTo(3)).unwrap();
    assert!(p.iter().all(|v| v.is_nan()));
    let p = tabula_counts::proportions2(&empty, &empty, JointLevels::OneTo(2, 2)).unwrap();
    assert_eq!(p.shape(), (2, 2));
    assert!(p.as_slice().iter().all(|v| v.is_nan()));
    assert!(tabula_counts::proportion_map(&empty).is_empty());
}

#[test]
fn test_batched_accumulation_equals_single_pass() {
    let data = generate_codes(10_000, 0, 17);
    let counter = DenseCounter::new(LevelRange::new(2, 12).unwrap());

    let mut table = counter.zeros::<u64>();
    for batch in data.chunks(333) {
        counter.accumulate(&mut table, batch).unwrap();
    }
    let single: Vec<u64> = counter.tabulate(&data).into_iter().map(|c| c as u64).collect();
    assert_eq!(table, single);

    // Merging independently counted windows gives the same answer
    let (left, right) = data.split_at(4321);
    let mut merged = counter.tabulate(left);
    merged.merge(&counter.tabulate(right)).unwrap();
    assert_eq!(merged, counter.tabulate(&data));
}

#[test]
fn test_joint_merge_and_incremental() {
    let x = generate_codes(600, 1, 4);
    let y = generate_codes(600, 1, 3);
    let counter = JointDenseCounter::one_to(4, 3).unwrap();

    let mut table: Table2<usize> = counter.zeros().unwrap();
    for (xs, ys) in x.chunks(100).zip(y.chunks(100)) {
        joint::accumulate(&mut table, xs, ys, (counter.x_levels(), counter.y_levels())).unwrap();
    }
    assert_eq!(table, counter.tabulate(&x, &y).unwrap());
    assert_eq!(table.total(), 600);

    let mut a = counter.tabulate(&x[..250], &y[..250]).unwrap();
    a.merge(&counter.tabulate(&x[250..], &y[250..]).unwrap()).unwrap();
    assert_eq!(a, table);
}

#[test]
fn test_sparse_counts_cover_distinct_values() {
    let words = "the quick brown fox jumps over the lazy dog the end".split(' ');
    let word_counts = count_map(words.clone());
    assert_eq!(word_counts["the"], 3);
    assert_eq!(word_counts.values().sum::<usize>(), words.clone().count());

    let mut map: HashMap<&str, u32> = HashMap::new();
    sparse::accumulate(&mut map, words.clone());
    sparse::accumulate(&mut map, ["fox"]);
    assert_eq!(map["fox"], 2u32);
}

#[test]
fn test_sparse_and_dense_agree_on_integer_data() {
    let data = generate_codes(999, 10, 6);
    let dense_counts = counts(&data, Levels::Span).unwrap();
    let levels = LevelRange::span(&data).unwrap();
    let sparse_counts = SparseCounter::new().tabulate_ordered(&data);
    for (offset, level) in levels.iter().enumerate() {
        assert_eq!(sparse_counts.get(&level).copied().unwrap_or(0), dense_counts[offset]);
    }
}

#[test]
fn test_level_range_config_round_trip() {
    let levels = LevelRange::new(-5i16, 5).unwrap();
    let json = serde_json::to_string(&levels).unwrap();
    assert_eq!(json, r#"{"low":-5,"high":5}"#);
    let back: LevelRange<i16> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, levels);

    assert!(serde_json::from_str::<LevelRange<i16>>(r#"{"low":3,"high":1}"#).is_err());
}
