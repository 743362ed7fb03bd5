//! Training configuration.

/// Configuration for gradient-descent training.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Number of full passes over the training set.
    pub epochs: usize,
    /// Learning rate (alpha) for the gradient-descent updates.
    pub learning_rate: f64,
    /// Number of samples per batch. The last batch of an epoch may be
    /// shorter when the sample count does not divide evenly.
    pub batch_size: usize,
    /// Whether to log progress during training.
    pub verbose: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            epochs: 100,
            learning_rate: 0.8,
            batch_size: 32,
            verbose: true,
        }
    }
}

impl TrainingConfig {
    /// Creates a new TrainingConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of epochs.
    pub fn epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    /// Sets the learning rate.
    pub fn learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = lr;
        self
    }

    /// Sets the batch size.
    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    /// Sets whether to log progress.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
