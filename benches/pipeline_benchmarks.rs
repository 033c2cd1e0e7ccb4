use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use faculty_network::{
    normalize_records, EdgeConfig, FacultyNode, GraphMetricsEngine, PairwiseEdgeBuilder,
    RawFacultyRecord, TextSimilarityScorer,
};

const DEPARTMENTS: [&str; 6] = [
    "Computer Science",
    "Mathematics",
    "Physics",
    "Chemistry",
    "Bioengineering",
    "Industrial Engineering",
];

const TOPICS: [&str; 8] = [
    "aprendizaje automático",
    "visión computacional",
    "robótica móvil",
    "optimización combinatoria",
    "materiales compuestos",
    "energías renovables",
    "bioinformática",
    "teoría de grafos",
];

/// Synthetic roster where members share departments, groups and topics
fn roster(size: usize) -> Vec<FacultyNode> {
    normalize_records((0..size).map(|i| RawFacultyRecord {
        name: Some(format!("Member {}", i)),
        department: Some(DEPARTMENTS[i % DEPARTMENTS.len()].to_string()),
        research_areas: Some(format!(
            "{}, {}",
            TOPICS[i % TOPICS.len()],
            TOPICS[(i * 3 + 1) % TOPICS.len()]
        )),
        h_index: Some((i % 40).to_string()),
        research: Some(format!("Grupo {}; Centro de Investigación", i % 9)),
        ..Default::default()
    }))
}

/// Benchmark all-pairs edge construction, sequential vs parallel
fn bench_edge_builder(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_builder");

    for size in [50, 200, 500].iter() {
        let nodes = roster(*size);

        let sequential = PairwiseEdgeBuilder::new(EdgeConfig::default()).unwrap();
        group.bench_with_input(BenchmarkId::new("sequential", size), size, |b, _| {
            b.iter(|| sequential.build(&nodes));
        });

        let parallel = PairwiseEdgeBuilder::new(EdgeConfig {
            parallel: true,
            ..Default::default()
        })
        .unwrap();
        group.bench_with_input(BenchmarkId::new("parallel", size), size, |b, _| {
            b.iter(|| parallel.build(&nodes));
        });
    }
    group.finish();
}

/// Benchmark a single TF-IDF similarity computation
fn bench_similarity(c: &mut Criterion) {
    let scorer = TextSimilarityScorer::spanish();
    c.bench_function("tfidf_similarity", |b| {
        b.iter(|| {
            scorer.similarity(
                "aprendizaje automático, visión computacional y robótica móvil",
                "robótica móvil con aprendizaje por refuerzo",
            )
        });
    });
}

/// Benchmark the metrics stage over prebuilt edges
fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");
    let builder = PairwiseEdgeBuilder::new(EdgeConfig::default()).unwrap();
    let engine = GraphMetricsEngine::default();

    for size in [50, 200].iter() {
        let nodes = roster(*size);
        let edges = builder.build(&nodes);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| engine.compute(&nodes, &edges));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_edge_builder, bench_similarity, bench_metrics);
criterion_main!(benches);
