//! Builder utilities for configuring edge classification.
//!
//! Exposes the execution strategy selection surface used before constructing
//! [`Classifier`] instances.

use crate::{Result, classifier::Classifier, error::LinchpinError};

/// Indicates how [`Classifier`] schedules the per-edge spanning evaluations.
///
/// `Auto` resolves deterministically: it maps to `Parallel` when the crate is
/// built with the `parallel` feature and to `Sequential` otherwise. Both
/// strategies produce identical classifications.
///
/// # Examples
/// ```
/// use linchpin_core::ExecutionStrategy;
///
/// let strategy = ExecutionStrategy::Auto;
/// assert!(matches!(strategy, ExecutionStrategy::Auto));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Allow the library to select a strategy automatically.
    Auto,
    /// Evaluate edges one after another on the calling thread.
    Sequential,
    /// Fan evaluations out over the Rayon thread pool.
    Parallel,
}

impl ExecutionStrategy {
    /// Resolves `Auto` to the concrete strategy for the current build.
    ///
    /// # Examples
    /// ```
    /// use linchpin_core::ExecutionStrategy;
    ///
    /// assert_eq!(
    ///     ExecutionStrategy::Sequential.resolve(),
    ///     ExecutionStrategy::Sequential,
    /// );
    /// assert_ne!(ExecutionStrategy::Auto.resolve(), ExecutionStrategy::Auto);
    /// ```
    #[must_use]
    pub const fn resolve(self) -> Self {
        match self {
            Self::Auto if cfg!(feature = "parallel") => Self::Parallel,
            Self::Auto => Self::Sequential,
            other => other,
        }
    }
}

/// Configures and constructs [`Classifier`] instances.
///
/// # Examples
/// ```
/// use linchpin_core::{ClassifierBuilder, ExecutionStrategy};
///
/// let classifier = ClassifierBuilder::new()
///     .with_execution_strategy(ExecutionStrategy::Sequential)
///     .build()
///     .expect("sequential execution is always available");
/// assert_eq!(classifier.execution_strategy(), ExecutionStrategy::Sequential);
/// ```
#[derive(Debug, Clone)]
pub struct ClassifierBuilder {
    execution_strategy: ExecutionStrategy,
}

impl Default for ClassifierBuilder {
    fn default() -> Self {
        Self {
            execution_strategy: ExecutionStrategy::Auto,
        }
    }
}

impl ClassifierBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the execution strategy.
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the configured execution strategy.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Validates the configuration and constructs a [`Classifier`].
    ///
    /// The stored strategy is the resolved one, so `Auto` never reaches the
    /// classifier.
    ///
    /// # Errors
    /// Returns [`LinchpinError::BackendUnavailable`] when `Parallel` is
    /// requested in a build without the `parallel` feature.
    pub fn build(self) -> Result<Classifier> {
        let strategy = self.execution_strategy.resolve();
        if strategy == ExecutionStrategy::Parallel && !cfg!(feature = "parallel") {
            return Err(LinchpinError::BackendUnavailable {
                requested: self.execution_strategy,
            });
        }
        Ok(Classifier::new(strategy))
    }
}
