//! Benchmarks for route generation.

use std::fmt::Write;
use std::path::PathBuf;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use docnav_content::{ContentDoc, ContentSet, FrontMatter};
use docnav_routes::{RouteGenerator, RouteOptions};
use docnav_sidebar::Sidebars;

/// Sidebar with `categories` categories of `per_category` docs each.
fn create_site(categories: usize, per_category: usize) -> (Sidebars, ContentSet) {
    let mut yaml = String::from("dsa:\n");
    let mut docs = Vec::new();

    for c in 0..categories {
        writeln!(yaml, "  - type: category\n    label: Category {c}\n    items:").unwrap();
        for d in 0..per_category {
            let id = format!("c{c}/doc-{d}");
            writeln!(yaml, "      - {id}").unwrap();
            docs.push(ContentDoc {
                source: PathBuf::from(format!("{id}.md")),
                slug: format!("/{id}"),
                title: id.clone(),
                id,
                front_matter: FrontMatter::default(),
                links: Vec::new(),
            });
        }
    }

    (
        Sidebars::from_yaml_str(&yaml).unwrap(),
        ContentSet::new(docs).unwrap(),
    )
}

fn bench_generate(c: &mut Criterion) {
    let generator = RouteGenerator::new(RouteOptions::default());
    let mut group = c.benchmark_group("generate");

    for (categories, per_category) in [(5, 10), (20, 50)] {
        let (sidebars, content) = create_site(categories, per_category);
        group.bench_with_input(
            BenchmarkId::from_parameter(categories * per_category),
            &(sidebars, content),
            |b, (sidebars, content)| b.iter(|| generator.generate(sidebars, content).unwrap()),
        );
    }

    group.finish();
}

fn bench_to_json(c: &mut Criterion) {
    let (sidebars, content) = create_site(20, 50);
    let manifest = RouteGenerator::new(RouteOptions::default())
        .generate(&sidebars, &content)
        .unwrap();

    c.bench_function("manifest_to_json", |b| b.iter(|| manifest.to_json().unwrap()));
}

criterion_group!(benches, bench_generate, bench_to_json);
criterion_main!(benches);
