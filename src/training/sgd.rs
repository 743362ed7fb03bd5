//! Batched gradient-descent training loop.

use super::{TrainingConfig, sparse_cross_entropy_with_logits};
use crate::errors::ModelError;
use crate::network::MultiNN;
use burn::tensor::{ElementConversion, Int, Tensor, backend::AutodiffBackend};

/// Trains a model in place with plain batched gradient descent.
///
/// For each of `config.epochs` passes, the training set is partitioned into
/// contiguous, non-overlapping batches of `config.batch_size` samples in
/// original row order (the last batch may be shorter); there is no shuffling,
/// so training is deterministic for fixed initial parameters. For each batch,
/// the forward pass is recorded by the autodiff backend, the loss gradient is
/// computed for every layer's weights and biases, and only then are the
/// parameters updated as `param -= learning_rate * grad`, layer by layer in
/// increasing index order.
pub fn train<B: AutodiffBackend>(
    model: &mut MultiNN<B>,
    x_train: Tensor<B, 2>,
    y_train: Tensor<B, 1, Int>,
    config: &TrainingConfig,
) -> Result<(), ModelError> {
    if config.batch_size == 0 {
        return Err(ModelError::InvalidArgument {
            message: "batch_size must be positive".to_string(),
        });
    }
    if model.num_layers() == 0 {
        return Err(ModelError::NoLayers);
    }

    let [num_samples, _] = x_train.dims();

    for epoch in 0..config.epochs {
        let mut epoch_loss = 0.0f32;
        let mut num_batches = 0usize;

        let mut start = 0;
        while start < num_samples {
            let end = usize::min(start + config.batch_size, num_samples);
            let x_batch = x_train.clone().slice([start..end]);
            let y_batch = y_train.clone().slice([start..end]);

            let logits = model.predict(x_batch)?;
            let loss = sparse_cross_entropy_with_logits(y_batch, logits);
            epoch_loss += loss.clone().into_scalar().elem::<f32>();
            num_batches += 1;

            let grads = loss.backward();

            // All gradients are taken from the same forward pass before any
            // parameter is touched, so the update order across layers cannot
            // change the result.
            let mut updates = Vec::with_capacity(model.num_layers());
            for layer in 0..model.num_layers() {
                let weight = model.get_weights(layer)?;
                let bias = model.get_biases(layer)?;

                let weight_grad =
                    weight
                        .grad(&grads)
                        .ok_or_else(|| ModelError::TrainingError {
                            message: format!("missing weight gradient for layer {layer}"),
                        })?;
                let bias_grad = bias.grad(&grads).ok_or_else(|| ModelError::TrainingError {
                    message: format!("missing bias gradient for layer {layer}"),
                })?;

                let new_weight = weight.inner() - weight_grad.mul_scalar(config.learning_rate);
                let new_bias = bias.inner() - bias_grad.mul_scalar(config.learning_rate);
                updates.push((new_weight, new_bias));
            }

            for (layer, (weight, bias)) in updates.into_iter().enumerate() {
                model.set_weights(Tensor::from_inner(weight), layer)?;
                model.set_biases(Tensor::from_inner(bias), layer)?;
            }

            start = end;
        }

        if config.verbose && (epoch % 10 == 0 || epoch + 1 == config.epochs) {
            log::info!(
                "Epoch {}/{}: mean loss = {:.6}",
                epoch + 1,
                config.epochs,
                epoch_loss / num_batches as f32
            );
        }
    }

    Ok(())
}
