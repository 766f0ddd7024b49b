// ABOUTME: Criterion benchmarks for vendor response parsing and normalization
// ABOUTME: Measures search body parsing for single and multi-food responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for `foods.search` response normalization.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mealpilot::external::parse_search_response;
use serde_json::{json, Value};

fn vendor_food(i: usize) -> Value {
    json!({
        "food_id": i.to_string(),
        "food_name": format!("Food {i}"),
        "brand_name": if i % 2 == 0 { Value::from("Acme") } else { Value::Null },
        "food_type": "Brand",
        "servings": {
            "serving": [{
                "serving_description": "1 serving",
                "metric_serving_amount": "85.000",
                "metric_serving_unit": "g",
                "calories": format!("{}", 90 + i % 400),
                "protein": "12.40",
                "carbohydrate": "30.10",
                "fat": "4.05",
                "fiber": "2.3",
                "sodium": "410",
                "vitamin_c": "1.2"
            }]
        }
    })
}

fn search_body(count: usize) -> String {
    let food = if count == 1 {
        vendor_food(0)
    } else {
        Value::Array((0..count).map(vendor_food).collect())
    };
    json!({ "foods": { "food": food, "total_results": "1000" } }).to_string()
}

fn bench_parse_search_response(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_search_response");

    for count in [1_usize, 25, 50] {
        let body = search_body(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &body, |b, body| {
            b.iter(|| parse_search_response(black_box(body)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse_search_response);
criterion_main!(benches);
