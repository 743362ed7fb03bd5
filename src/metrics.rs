//! Classification metrics.
//!
//! Metrics are evaluation helpers; they do not participate in backprop. They
//! operate on plain class-index slices so they can be tested without a
//! backend, and `MultiNN` feeds them the argmax of its forward pass.

use std::collections::BTreeSet;

/// Returns the fraction of positions where `predicted` and `targets` differ.
///
/// Returns 0.0 for empty inputs. Both slices must have the same length.
pub fn percent_error(predicted: &[i64], targets: &[i64]) -> f64 {
    debug_assert_eq!(predicted.len(), targets.len());
    if targets.is_empty() {
        return 0.0;
    }
    let errors = predicted
        .iter()
        .zip(targets.iter())
        .filter(|(p, t)| p != t)
        .count();
    errors as f64 / targets.len() as f64
}

/// Builds a confusion matrix over the distinct values of `targets`.
///
/// The matrix is square with one row and column per distinct target label,
/// indexed by the label's rank in sorted order, so sparse or non-zero-based
/// label sets stay in bounds. Entry [true][predicted] counts samples. A
/// prediction whose class never occurs in `targets` has no column and is not
/// counted; when every prediction falls inside the target label set, the
/// matrix total equals the number of samples.
pub fn confusion_matrix(predicted: &[i64], targets: &[i64]) -> Vec<Vec<usize>> {
    debug_assert_eq!(predicted.len(), targets.len());

    let labels: Vec<i64> = targets.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
    let mut matrix = vec![vec![0usize; labels.len()]; labels.len()];

    for (&target, &prediction) in targets.iter().zip(predicted.iter()) {
        // Targets always map; binary search is over the sorted distinct labels.
        let row = labels.binary_search(&target).unwrap();
        if let Ok(column) = labels.binary_search(&prediction) {
            matrix[row][column] += 1;
        }
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_error_all_correct() {
        assert_eq!(percent_error(&[0, 1, 2], &[0, 1, 2]), 0.0);
    }

    #[test]
    fn test_percent_error_all_wrong() {
        assert_eq!(percent_error(&[1, 2, 0], &[0, 1, 2]), 1.0);
    }

    #[test]
    fn test_percent_error_partial() {
        assert_eq!(percent_error(&[0, 1, 0, 1], &[0, 1, 1, 0]), 0.5);
    }

    #[test]
    fn test_percent_error_empty() {
        assert_eq!(percent_error(&[], &[]), 0.0);
    }

    #[test]
    fn test_confusion_matrix_counts() {
        let targets = [0, 0, 1, 1, 1, 2];
        let predicted = [0, 1, 1, 1, 2, 2];
        let matrix = confusion_matrix(&predicted, &targets);

        assert_eq!(matrix, vec![vec![1, 1, 0], vec![0, 2, 1], vec![0, 0, 1]]);

        // Row sums equal the per-class target counts; total equals n_samples.
        let row_sums: Vec<usize> = matrix.iter().map(|row| row.iter().sum()).collect();
        assert_eq!(row_sums, vec![2, 3, 1]);
        let total: usize = row_sums.iter().sum();
        assert_eq!(total, targets.len());
    }

    #[test]
    fn test_confusion_matrix_sparse_labels() {
        // Labels 2 and 5 map to rows 0 and 1 by sorted rank.
        let targets = [2, 5, 5, 2];
        let predicted = [2, 5, 2, 2];
        let matrix = confusion_matrix(&predicted, &targets);

        assert_eq!(matrix, vec![vec![2, 0], vec![1, 1]]);
    }

    #[test]
    fn test_confusion_matrix_prediction_outside_label_set() {
        // Prediction 3 never occurs as a target, so it has no column.
        let targets = [0, 1];
        let predicted = [0, 3];
        let matrix = confusion_matrix(&predicted, &targets);

        assert_eq!(matrix, vec![vec![1, 0], vec![0, 0]]);
    }
}
