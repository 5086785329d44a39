use super::tree::DecisionTree;
use crate::errors::SaplingError;
use crate::node::Node;
use crate::Matrix;
use rayon::prelude::*;

impl DecisionTree {
    /// Walk from the root to the leaf a point falls in.
    #[inline]
    fn leaf_for_point(&self, point: &[f64]) -> &Node {
        let mut node = &self.nodes[0];
        while let Some(child_idx) = node.get_child_idx(point) {
            node = &self.nodes[child_idx];
        }
        node
    }

    fn check_fitted(&self, n_features: usize) -> Result<(), SaplingError> {
        if !self.is_fitted() {
            return Err(SaplingError::NotFitted);
        }
        if n_features != self.n_features {
            return Err(SaplingError::DimensionMismatch(
                "point features".to_string(),
                self.n_features,
                n_features,
            ));
        }
        Ok(())
    }

    /// Classify a single point, returning the most probable class and the
    /// class probabilities of the leaf it reaches.
    ///
    /// * `point` - Value of every feature of the point.
    pub fn classify(&self, point: &[f64]) -> Result<(usize, Vec<f64>), SaplingError> {
        self.check_fitted(point.len())?;
        let leaf = self.leaf_for_point(point);
        Ok((leaf.predicted_class(), leaf.probabilities.clone()))
    }

    fn predict_single_threaded(&self, data: &Matrix<f64>) -> Vec<usize> {
        (0..data.cols)
            .map(|j| self.leaf_for_point(data.get_col(j)).predicted_class())
            .collect()
    }

    fn predict_parallel(&self, data: &Matrix<f64>) -> Vec<usize> {
        (0..data.cols)
            .into_par_iter()
            .map(|j| self.leaf_for_point(data.get_col(j)).predicted_class())
            .collect()
    }

    /// Predict the class of every point (column) of a matrix.
    ///
    /// * `data` - Column major matrix, one column per point.
    /// * `parallel` - Classify the points in parallel.
    pub fn predict(&self, data: &Matrix<f64>, parallel: bool) -> Result<Vec<usize>, SaplingError> {
        self.check_fitted(data.rows)?;
        if parallel {
            Ok(self.predict_parallel(data))
        } else {
            Ok(self.predict_single_threaded(data))
        }
    }

    /// Class probabilities of every point of a matrix, as a column major
    /// `num_classes x n_points` buffer, so the probabilities of point `j`
    /// are `probs[j * num_classes..(j + 1) * num_classes]`.
    ///
    /// * `data` - Column major matrix, one column per point.
    /// * `parallel` - Classify the points in parallel.
    pub fn predict_proba(&self, data: &Matrix<f64>, parallel: bool) -> Result<Vec<f64>, SaplingError> {
        self.check_fitted(data.rows)?;
        let mut probs = vec![0.0; self.num_classes * data.cols];
        if parallel {
            probs
                .par_chunks_mut(self.num_classes)
                .enumerate()
                .for_each(|(j, p)| p.copy_from_slice(&self.leaf_for_point(data.get_col(j)).probabilities));
        } else {
            probs
                .chunks_mut(self.num_classes)
                .enumerate()
                .for_each(|(j, p)| p.copy_from_slice(&self.leaf_for_point(data.get_col(j)).probabilities));
        }
        Ok(probs)
    }

    /// Predicted classes and class probabilities of every point of a matrix.
    pub fn classify_batch(&self, data: &Matrix<f64>, parallel: bool) -> Result<(Vec<usize>, Vec<f64>), SaplingError> {
        Ok((self.predict(data, parallel)?, self.predict_proba(data, parallel)?))
    }
}
