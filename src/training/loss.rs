//! Loss function for classification training.

use burn::tensor::{Int, Tensor, activation, backend::Backend};

/// Computes the mean sparse softmax cross-entropy between integer class
/// targets and raw logits.
///
/// `targets` holds one class index per sample, shape [n_samples]. `logits`
/// holds pre-softmax outputs, shape [n_samples, num_classes]. Softmax and
/// cross-entropy are fused through `log_softmax`, so `logits` must be
/// unnormalized; feeding post-softmax probabilities gives wrong results.
///
/// Returns a scalar tensor (shape [1]) so callers can backpropagate.
pub fn sparse_cross_entropy_with_logits<B: Backend>(
    targets: Tensor<B, 1, Int>,
    logits: Tensor<B, 2>,
) -> Tensor<B, 1> {
    let [num_samples, _] = logits.dims();
    let log_probs = activation::log_softmax(logits, 1);
    let indices = targets.reshape([num_samples, 1]);
    let true_class_log_probs = log_probs.gather(1, indices);
    true_class_log_probs.neg().mean()
}
