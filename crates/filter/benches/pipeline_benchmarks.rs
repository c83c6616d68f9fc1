use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use prodcat_catalog::{Category, Product, Sex, User};
use prodcat_core::UserId;
use prodcat_filter::{CatalogIndex, Selection, visible_products};

const USERS: u32 = 20;
const CATEGORIES: u32 = 100;

fn synthetic(products: u32) -> (Vec<Product>, Vec<Category>, Vec<User>) {
    let users = (1..=USERS)
        .map(|id| User::new(id, format!("user {id}"), if id % 2 == 0 { Sex::Female } else { Sex::Male }))
        .collect();
    let categories = (1..=CATEGORIES)
        .map(|id| Category::new(id, format!("category {id}"), "#", id % USERS + 1))
        .collect();
    let products = (1..=products)
        .map(|id| Product::new(id, format!("Product {id}"), id % CATEGORIES + 1))
        .collect();
    (products, categories, users)
}

/// Full join + filter on every call (no reuse).
fn bench_visible_products(c: &mut Criterion) {
    let mut group = c.benchmark_group("visible_products");
    let selection = Selection::new()
        .with_name_query("7")
        .with_owner(UserId::new(3));

    for size in [100u32, 1_000, 10_000] {
        let (products, categories, users) = synthetic(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                visible_products(
                    black_box(&products),
                    black_box(&categories),
                    black_box(&users),
                    black_box(&selection),
                )
                .unwrap()
            })
        });
    }
    group.finish();
}

/// Index built once, filter per call.
fn bench_index_visible(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_visible");
    let selection = Selection::new()
        .with_name_query("7")
        .with_owner(UserId::new(3));

    for size in [100u32, 1_000, 10_000] {
        let (products, categories, users) = synthetic(size);
        let index = CatalogIndex::from_parts(&products, &categories, &users).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| index.visible(black_box(&selection)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_visible_products, bench_index_visible);
criterion_main!(benches);
