use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sapling::gain::{GainMetric, GiniGain, InformationGain};
use sapling::{DecisionTree, GainMethod, Matrix, MatrixMut};
use std::time::Duration;

// Three classes, feature 0 carries the signal, the rest is noise.
fn create_data(n_points: usize, n_features: usize, seed: u64) -> (Vec<f64>, Vec<usize>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(n_points * n_features);
    let mut labels = Vec::with_capacity(n_points);
    for _ in 0..n_points {
        let class = rng.gen_range(0..3);
        data.push(class as f64 + rng.gen_range(0.0..1.2));
        for _ in 1..n_features {
            data.push(rng.gen::<f64>());
        }
        labels.push(class);
    }
    (data, labels)
}

pub fn gain_benchmarks(c: &mut Criterion) {
    let labels: Vec<usize> = (0..100_000).map(|i| i % 3).collect();
    let weights = vec![0.5; labels.len()];
    c.bench_function("gini gain", |b| {
        b.iter(|| GiniGain::evaluate(black_box(&labels), 3, black_box(None)))
    });
    c.bench_function("weighted gini gain", |b| {
        b.iter(|| GiniGain::evaluate(black_box(&labels), 3, black_box(Some(&weights))))
    });
    c.bench_function("information gain", |b| {
        b.iter(|| InformationGain::evaluate(black_box(&labels), 3, black_box(None)))
    });
}

pub fn tree_benchmarks(c: &mut Criterion) {
    let n_points = 10_000;
    let n_features = 10;
    let (data, labels) = create_data(n_points, n_features, 0);

    let mut train_tree = c.benchmark_group("train_tree");
    train_tree.measurement_time(Duration::from_secs(20));
    for gain_method in [GainMethod::Gini, GainMethod::Information] {
        train_tree.bench_function(format!("{:?}", gain_method), |b| {
            b.iter(|| {
                let mut d = data.clone();
                let mut l = labels.clone();
                let mut m = MatrixMut::new(&mut d, n_features, n_points);
                let mut tree = DecisionTree::default()
                    .set_gain_method(gain_method)
                    .set_minimum_leaf_size(5);
                tree.fit(black_box(&mut m), black_box(&mut l), 3, None, None).unwrap();
            })
        });
    }
    train_tree.finish();

    let mut d = data.clone();
    let mut l = labels.clone();
    let mut m = MatrixMut::new(&mut d, n_features, n_points);
    let mut tree = DecisionTree::default().set_minimum_leaf_size(5);
    tree.fit(&mut m, &mut l, 3, None, None).unwrap();
    println!("{} nodes, depth {}", tree.num_nodes(), tree.depth());

    let (test_data, _) = create_data(n_points, n_features, 1);
    let test = Matrix::new(&test_data, n_features, n_points);
    c.bench_function("predict single threaded", |b| {
        b.iter(|| tree.predict(black_box(&test), false).unwrap())
    });
    c.bench_function("predict parallel", |b| b.iter(|| tree.predict(black_box(&test), true).unwrap()));
    c.bench_function("predict proba parallel", |b| {
        b.iter(|| tree.predict_proba(black_box(&test), true).unwrap())
    });
}

criterion_group!(benches, gain_benchmarks, tree_benchmarks);
criterion_main!(benches);
