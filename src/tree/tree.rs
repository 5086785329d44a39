use crate::data::MatrixMut;
use crate::dataset_info::{DatasetInfo, Datatype};
use crate::errors::SaplingError;
use crate::gain::{class_counts, GainMethod, GainMetric, GiniGain, InformationGain};
use crate::node::{Node, SplitDescriptor, SplittableNode};
use crate::splitter::{AllCategoricalSplit, BestBinaryNumericSplit, SplitStrategy};
use crate::tree::config::{ModelIO, TreeConfig};
use crate::utils::partition_points;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Decision tree classifier.
///
/// Nodes live in an arena, the root is node `0` and every internal node stores
/// the arena index of its children.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct DecisionTree {
    pub cfg: TreeConfig,
    /// Number of classes the tree was fit on.
    pub num_classes: usize,
    /// Number of features the tree was fit on.
    pub n_features: usize,
    /// Feature metadata used during fitting, `None` if every feature was numeric.
    pub dataset_info: Option<DatasetInfo>,
    pub nodes: Vec<Node>,
    pub depth: usize,
    pub n_leaves: usize,
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new(TreeConfig::default())
    }
}

impl ModelIO for DecisionTree {}

impl DecisionTree {
    /// Create an unfitted tree from a configuration.
    pub fn new(cfg: TreeConfig) -> Self {
        DecisionTree {
            cfg,
            num_classes: 0,
            n_features: 0,
            dataset_info: None,
            nodes: Vec::new(),
            depth: 0,
            n_leaves: 0,
        }
    }

    /// Fit the tree, replacing any previously fit structure.
    ///
    /// The points of `data`, together with `labels` and `weights`, are
    /// reordered in place while the tree is grown. On error nothing is
    /// modified and the tree keeps its previous state.
    ///
    /// * `data` - Column major matrix, one column per point and one row per feature.
    /// * `labels` - Class of every point, in `[0, num_classes)`.
    /// * `num_classes` - Number of classes.
    /// * `weights` - Optional non-negative weight of every point.
    /// * `dataset_info` - Optional feature types, every feature is numeric if `None`.
    pub fn fit(
        &mut self,
        data: &mut MatrixMut<f64>,
        labels: &mut [usize],
        num_classes: usize,
        weights: Option<&mut [f64]>,
        dataset_info: Option<&DatasetInfo>,
    ) -> Result<(), SaplingError> {
        self.cfg.validate()?;
        validate_inputs(data, labels, num_classes, weights.as_deref(), dataset_info)?;

        let nodes = match self.cfg.gain_method {
            GainMethod::Gini => {
                self.grow::<GiniGain, BestBinaryNumericSplit, AllCategoricalSplit>(data, labels, num_classes, weights, dataset_info)
            }
            GainMethod::Information => self.grow::<InformationGain, BestBinaryNumericSplit, AllCategoricalSplit>(
                data,
                labels,
                num_classes,
                weights,
                dataset_info,
            ),
        };

        self.num_classes = num_classes;
        self.n_features = data.rows;
        self.dataset_info = dataset_info.cloned();
        self.depth = nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        self.n_leaves = nodes.iter().filter(|n| n.is_leaf()).count();
        self.nodes = nodes;
        info!(
            "Fit decision tree with {} nodes, {} leaves and depth {} on {} points.",
            self.nodes.len(),
            self.n_leaves,
            self.depth,
            data.cols
        );
        Ok(())
    }

    /// Grow the node arena depth first. Children are numbered when their
    /// parent is split and evaluated in child order.
    fn grow<G: GainMetric, N: SplitStrategy, C: SplitStrategy>(
        &self,
        data: &mut MatrixMut<f64>,
        labels: &mut [usize],
        num_classes: usize,
        mut weights: Option<&mut [f64]>,
        dataset_info: Option<&DatasetInfo>,
    ) -> Vec<Node> {
        let minimum_leaf_size = self.cfg.minimum_leaf_size;
        let n_features = data.rows;
        let mut rng = StdRng::seed_from_u64(self.cfg.seed);

        let mut counts = vec![0.0; num_classes];
        let mut values = Vec::with_capacity(data.cols);
        let mut split_info = Vec::new();
        let mut selected = Vec::with_capacity(n_features);

        let root = create_node::<G>(0, 0, labels, weights.as_deref(), 0, &mut counts);
        if root.weight_sum <= 0.0 {
            warn!("All weights are zero, the tree will be a single uniform leaf.");
        } else if data.cols < minimum_leaf_size.saturating_mul(2) {
            warn!(
                "Only {} points for a minimum leaf size of {}, the tree will be a single leaf.",
                data.cols, minimum_leaf_size
            );
        }
        let mut nodes = vec![root];
        let mut growable = vec![SplittableNode::new(0, 0, 0, data.cols, 0)];

        while let Some(node) = growable.pop() {
            let node_gain = nodes[node.num].gain_value;
            if node.count() < minimum_leaf_size.saturating_mul(2)
                || self.at_maximum_depth(node.depth)
                || node_gain >= 0.0
            {
                continue;
            }

            let best = {
                let node_labels = &labels[node.start_idx..node.stop_idx];
                let node_weights = weights.as_deref().map(|w| &w[node.start_idx..node.stop_idx]);
                let mut best_gain = node_gain;
                let mut best: Option<SplitDescriptor> = None;

                self.cfg.dimension_selection.select(n_features, &mut rng, &mut selected);
                for &feature in selected.iter() {
                    data.copy_row_range(feature, node.start_idx, node.stop_idx, &mut values);
                    let (gain, split_type) = match feature_type(dataset_info, feature) {
                        Datatype::Numeric => (
                            N::split_if_better::<G>(
                                node_gain,
                                &values,
                                0,
                                node_labels,
                                num_classes,
                                node_weights,
                                minimum_leaf_size,
                                self.cfg.minimum_gain_split,
                                &mut split_info,
                            ),
                            N::SPLIT_TYPE,
                        ),
                        Datatype::Categorical => (
                            C::split_if_better::<G>(
                                node_gain,
                                &values,
                                dataset_info.map_or(0, |d| d.num_mappings(feature)),
                                node_labels,
                                num_classes,
                                node_weights,
                                minimum_leaf_size,
                                self.cfg.minimum_gain_split,
                                &mut split_info,
                            ),
                            C::SPLIT_TYPE,
                        ),
                    };
                    // Strictly better, so the lowest feature wins ties.
                    if !split_info.is_empty() && gain > best_gain {
                        best_gain = gain;
                        best = Some(SplitDescriptor {
                            feature,
                            split_type,
                            split_info: split_info.clone(),
                            gain,
                        });
                    }
                }
                best
            };

            let split = match best {
                Some(split) => split,
                None => continue,
            };

            let num_children = split.num_children();
            let ranges = partition_points(
                data,
                labels,
                weights.as_deref_mut(),
                node.start_idx,
                node.stop_idx,
                num_children,
                |point| split.direction(point),
            );
            debug!(
                "Split node {} on feature {} into {} children, gain {} -> {}.",
                node.num, split.feature, num_children, node_gain, split.gain
            );

            let first_child = nodes.len();
            for (k, (start, stop)) in ranges.iter().enumerate() {
                let child = create_node::<G>(
                    first_child + k,
                    node.depth + 1,
                    &labels[*start..*stop],
                    weights.as_deref().map(|w| &w[*start..*stop]),
                    node.num,
                    &mut counts,
                );
                nodes.push(child);
            }
            nodes[node.num].make_parent_node(split, (first_child..first_child + num_children).collect());

            // Reversed, so the first child is grown first.
            for (k, (start, stop)) in ranges.iter().enumerate().rev() {
                growable.push(SplittableNode::new(first_child + k, node.depth + 1, *start, *stop, node.num));
            }
        }
        nodes
    }

    fn at_maximum_depth(&self, depth: usize) -> bool {
        self.cfg.maximum_depth > 0 && depth >= self.cfg.maximum_depth
    }

    pub fn is_fitted(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// The root node, `None` if the tree has not been fit.
    pub fn root(&self) -> Option<&Node> {
        self.nodes.first()
    }

    /// Number of children of the root.
    pub fn num_children(&self) -> usize {
        self.root().map_or(0, |n| n.num_children())
    }

    /// The `i`th child of the root.
    pub fn child(&self, i: usize) -> Option<&Node> {
        self.root().and_then(|n| n.children.get(i)).map(|c| &self.nodes[*c])
    }

    /// Children of a node, in child order.
    pub fn children<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Node> + 'a {
        node.children.iter().map(move |c| &self.nodes[*c])
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_leaves(&self) -> usize {
        self.n_leaves
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

fn feature_type(dataset_info: Option<&DatasetInfo>, feature: usize) -> Datatype {
    dataset_info.map_or(Datatype::Numeric, |d| d.type_of(feature))
}

/// Create a node holding the class distribution of its points.
/// A node without any weight gets the uniform distribution.
fn create_node<G: GainMetric>(
    num: usize,
    depth: usize,
    labels: &[usize],
    weights: Option<&[f64]>,
    parent_node: usize,
    counts: &mut [f64],
) -> Node {
    let total = class_counts(labels, weights, counts);
    let probabilities = if total > 0.0 {
        counts.iter().map(|c| c / total).collect()
    } else {
        vec![1.0 / counts.len() as f64; counts.len()]
    };
    Node {
        num,
        depth,
        count: labels.len(),
        weight_sum: total,
        gain_value: G::gain_from_counts(counts, total),
        probabilities,
        split: None,
        children: Vec::new(),
        parent_node,
    }
}

fn validate_inputs(
    data: &MatrixMut<f64>,
    labels: &[usize],
    num_classes: usize,
    weights: Option<&[f64]>,
    dataset_info: Option<&DatasetInfo>,
) -> Result<(), SaplingError> {
    if data.rows == 0 || data.cols == 0 {
        return Err(SaplingError::EmptyDataset);
    }
    if num_classes == 0 {
        return Err(SaplingError::NoClasses);
    }
    if data.data.len() != data.rows * data.cols {
        return Err(SaplingError::DimensionMismatch(
            "data".to_string(),
            data.rows * data.cols,
            data.data.len(),
        ));
    }
    if labels.len() != data.cols {
        return Err(SaplingError::DimensionMismatch(
            "labels".to_string(),
            data.cols,
            labels.len(),
        ));
    }
    if let Some(label) = labels.iter().find(|l| **l >= num_classes) {
        return Err(SaplingError::LabelOutOfRange(*label, num_classes));
    }
    if let Some(weights) = weights {
        if weights.len() != data.cols {
            return Err(SaplingError::DimensionMismatch(
                "weights".to_string(),
                data.cols,
                weights.len(),
            ));
        }
        if let Some((i, w)) = weights.iter().enumerate().find(|(_, w)| w.is_nan() || **w < 0.0) {
            return Err(SaplingError::InvalidWeight(i, *w));
        }
    }
    if let Some(info) = dataset_info {
        if info.dimensionality() != data.rows {
            return Err(SaplingError::DimensionMismatch(
                "dataset_info".to_string(),
                data.rows,
                info.dimensionality(),
            ));
        }
    }
    if let Some(i) = data.data.iter().position(|v| v.is_nan()) {
        return Err(SaplingError::NanValueFound(i % data.rows, i / data.rows));
    }
    if let Some(info) = dataset_info {
        for feature in (0..data.rows).filter(|f| info.type_of(*f) == Datatype::Categorical) {
            let num_categories = info.num_mappings(feature) as f64;
            for point in 0..data.cols {
                let v = *data.get(feature, point);
                if v < 0.0 || v >= num_categories || v.fract() != 0.0 {
                    return Err(SaplingError::InvalidCategory(feature, point, v));
                }
            }
        }
    }
    Ok(())
}

impl Display for DecisionTree {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut print_buffer: Vec<usize> = if self.nodes.is_empty() { Vec::new() } else { vec![0] };
        let mut r = String::new();
        while let Some(idx) = print_buffer.pop() {
            let node = &self.nodes[idx];
            r += format!("{}{}\n", "      ".repeat(node.depth).as_str(), node).as_str();
            print_buffer.extend(node.children.iter().rev());
        }
        write!(f, "{}", r)
    }
}
