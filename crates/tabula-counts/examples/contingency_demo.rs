//! Demonstrates dense, joint and sparse tabulation with proportions

use tabula_counts::{
    count_map, counts2, proportions_weighted, DenseCounter, JointLevels, LevelRange, Levels,
    Proportions,
};
use tracing_subscriber::EnvFilter;

fn main() -> tabula_counts::Result<()> {
    // RUST_LOG=debug shows span inference and algorithm selection
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Die rolls, including a few invalid readings
    let rolls = [3, 6, 1, 6, 2, 6, 0, 5, 4, 6, 9, 1];

    println!("=== Dense counts over 1..=6 ===");
    let counter = DenseCounter::one_to(6)?;
    let table = counter.tabulate(&rolls);
    for (level, count) in counter.levels().iter().zip(&table) {
        println!("  {level}: {count}");
    }
    println!("Dropped {} out-of-range readings", rolls.len() - table.iter().sum::<usize>());

    println!("\n=== Proportions ===");
    println!("Of all readings:   {:?}", counter.proportions(&rolls));
    println!("Of counted values: {:?}", table.proportions());

    println!("\n=== Weighted by confidence ===");
    let confidence = [1.0, 0.9, 1.0, 0.5, 1.0, 1.0, 0.1, 1.0, 0.8, 1.0, 0.1, 1.0];
    let p = proportions_weighted(&rolls, Levels::OneTo(6), &confidence)?;
    println!("{p:?}");

    println!("\n=== Contingency table of consecutive rolls ===");
    let (first, second) = (&rolls[..rolls.len() - 1], &rolls[1..]);
    let joint = counts2(first, second, LevelRange::one_to(6)?)?;
    print!("{joint}");

    println!("\n=== Sparse counts of labels ===");
    let labels = ["ok", "ok", "retry", "fail", "ok", "retry"];
    let mut counts: Vec<_> = count_map(labels).into_iter().collect();
    counts.sort();
    println!("{counts:?}");

    let inferred = counts2(first, second, JointLevels::Span)?;
    println!("\nInferred joint shape: {:?}", inferred.shape());

    Ok(())
}
