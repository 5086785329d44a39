use crate::splitter::SplitType;
use crate::utils::{argmax, fmt_vec_output};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything needed to route a point through an internal node.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SplitDescriptor {
    /// Feature (row) the split is on.
    pub feature: usize,
    /// Strategy that produced the split.
    pub split_type: SplitType,
    /// Threshold for numeric splits, number of children for categorical ones.
    pub split_info: Vec<f64>,
    /// Weighted gain of the children.
    pub gain: f64,
}

impl SplitDescriptor {
    pub fn num_children(&self) -> usize {
        self.split_type.num_children(&self.split_info)
    }

    /// Child a point is routed to, as an index into the node's children.
    #[inline]
    pub fn direction(&self, point: &[f64]) -> usize {
        self.split_type.calculate_direction(point[self.feature], &self.split_info)
    }
}

/// A node of a fitted tree, stored in the tree's node arena.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Node {
    pub num: usize,
    pub depth: usize,
    /// Number of training points that reached this node.
    pub count: usize,
    /// Total training weight that reached this node.
    pub weight_sum: f64,
    /// Gain of the labels at this node.
    pub gain_value: f64,
    /// Class probabilities, for internal nodes the distribution before splitting.
    pub probabilities: Vec<f64>,
    pub split: Option<SplitDescriptor>,
    /// Arena index of every child, in child order.
    pub children: Vec<usize>,
    pub parent_node: usize,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Most probable class, ties go to the lowest class.
    pub fn predicted_class(&self) -> usize {
        argmax(&self.probabilities)
    }

    /// Update all the info that is needed if this node is a parent node.
    pub fn make_parent_node(&mut self, split: SplitDescriptor, children: Vec<usize>) {
        self.split = Some(split);
        self.children = children;
    }

    /// Arena index of the child a point travels down, `None` for leaves.
    #[inline]
    pub fn get_child_idx(&self, point: &[f64]) -> Option<usize> {
        self.split.as_ref().map(|s| self.children[s.direction(point)])
    }
}

/// A node waiting to be evaluated, covering the points `start_idx..stop_idx`.
#[derive(Debug)]
pub struct SplittableNode {
    pub num: usize,
    pub depth: usize,
    pub start_idx: usize,
    pub stop_idx: usize,
    pub parent_node: usize,
}

impl SplittableNode {
    pub fn new(num: usize, depth: usize, start_idx: usize, stop_idx: usize, parent_node: usize) -> Self {
        SplittableNode {
            num,
            depth,
            start_idx,
            stop_idx,
            parent_node,
        }
    }

    pub fn count(&self) -> usize {
        self.stop_idx - self.start_idx
    }
}

impl fmt::Display for Node {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.split {
            None => write!(
                f,
                "{}:leaf=[{}],count={}",
                self.num,
                fmt_vec_output(&self.probabilities),
                self.count
            ),
            Some(split) => {
                let children = self.children.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(",");
                match split.split_type {
                    SplitType::BestBinaryNumeric => write!(
                        f,
                        "{}:[{} <= {}] yes={},no={},gain={},count={}",
                        self.num, split.feature, split.split_info[0], self.children[0], self.children[1], split.gain, self.count
                    ),
                    SplitType::AllCategorical => write!(
                        f,
                        "{}:[{} in categories] children={},gain={},count={}",
                        self.num, split.feature, children, split.gain, self.count
                    ),
                }
            }
        }
    }
}
