// ABOUTME: Criterion benchmarks for the meal recommendation engine
// ABOUTME: Measures recommend latency per eligibility tier and dataset size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for meal recommendations.
//!
//! Covers the bundled dataset at budgets that land in each eligibility tier,
//! plus synthetic datasets to show how ranking scales.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mealpilot::intelligence::{bundled_meals, recommend_meals, MealRecommender};
use mealpilot::models::{MealCategory, MealDatabaseEntry};

fn synthetic_meals(count: usize) -> Vec<MealDatabaseEntry> {
    (0..count)
        .map(|i| {
            let category = MealCategory::ALL[i % MealCategory::ALL.len()];
            MealDatabaseEntry {
                id: format!("synthetic-{i}"),
                name: format!("Synthetic meal {i}"),
                category,
                calories: 100.0 + (i % 900) as f64,
                protein: 5.0 + (i % 60) as f64,
                carbs: 20.0,
                fat: 8.0,
                prep_time: (i % 45) as u32,
                volume_score: (i % 10) as f64,
                tags: if i % 3 == 0 {
                    vec!["quick".to_owned(), "filling".to_owned()]
                } else {
                    vec!["fiber".to_owned()]
                },
                serving_size: 1.0,
                serving_unit: "serving".to_owned(),
                description: None,
            }
        })
        .collect()
}

fn bench_bundled_tiers(c: &mut Criterion) {
    let recommender = MealRecommender::new(bundled_meals());
    let mut group = c.benchmark_group("recommend_bundled");

    for (label, calories, category) in [
        ("primary", 500.0, None),
        ("primary_dinner", 550.0, Some(MealCategory::Dinner)),
        ("relaxed", 1800.0, None),
        ("lowest_calorie", 50.0, Some(MealCategory::Lunch)),
    ] {
        group.bench_function(label, |b| {
            b.iter(|| recommender.recommend(black_box(calories), black_box(40.0), category));
        });
    }
    group.finish();
}

fn bench_dataset_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend_dataset_size");

    for size in [100_usize, 1_000, 10_000] {
        let meals = synthetic_meals(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &meals, |b, meals| {
            b.iter(|| recommend_meals(black_box(meals), 600.0, 35.0, None));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_bundled_tiers, bench_dataset_size);
criterion_main!(benches);
