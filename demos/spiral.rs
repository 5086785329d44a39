//! Fit a decision tree on two interleaved spirals with an extra categorical
//! feature, then report the held out accuracy.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sapling::metric::accuracy;
use sapling::{DatasetInfo, DecisionTree, GainMethod, Matrix, MatrixMut, ModelIO};
use std::error::Error;

const N_FEATURES: usize = 3;

fn spirals(n_points: usize, info: &mut DatasetInfo, rng: &mut StdRng) -> (Vec<f64>, Vec<usize>) {
    let quadrants = ["north", "east", "south", "west"];
    let mut data = Vec::with_capacity(n_points * N_FEATURES);
    let mut labels = Vec::with_capacity(n_points);
    for _ in 0..n_points {
        let class = rng.gen_range(0..2);
        let t: f64 = rng.gen_range(0.5..3.0 * std::f64::consts::PI);
        let angle = t + class as f64 * std::f64::consts::PI;
        let (x, y) = (t * angle.cos(), t * angle.sin());
        let quadrant = ((angle.rem_euclid(2.0 * std::f64::consts::PI)) / std::f64::consts::FRAC_PI_2) as usize % 4;
        data.push(x + rng.gen_range(-0.2..0.2));
        data.push(y + rng.gen_range(-0.2..0.2));
        data.push(info.map_string(quadrants[quadrant], 2));
        labels.push(class);
    }
    (data, labels)
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(0);
    let mut info = DatasetInfo::new(N_FEATURES);
    let (mut train, mut train_labels) = spirals(2000, &mut info, &mut rng);
    let (test, test_labels) = spirals(500, &mut info, &mut rng);

    for gain_method in [GainMethod::Gini, GainMethod::Information] {
        let mut tree = DecisionTree::default()
            .set_gain_method(gain_method)
            .set_minimum_leaf_size(5);
        let mut m = MatrixMut::new(&mut train, N_FEATURES, train_labels.len());
        tree.fit(&mut m, &mut train_labels, 2, None, Some(&info))?;

        let preds = tree.predict(&Matrix::new(&test, N_FEATURES, test_labels.len()), true)?;
        println!(
            "{:?}: {} nodes, {} leaves, depth {}, test accuracy {:.3}",
            gain_method,
            tree.num_nodes(),
            tree.num_leaves(),
            tree.depth(),
            accuracy(&test_labels, &preds)
        );
        println!("model size: {} bytes", tree.json_dump()?.len());
    }
    Ok(())
}
