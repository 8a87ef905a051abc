//! Monte Carlo simulation configuration.
//!
//! This module provides [`SimulationParameters`] and its builder for the
//! Monte Carlo engine.

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 100_000_000;

/// Default number of simulation paths.
pub const DEFAULT_NUM_PATHS: usize = 100_000;

/// Default generator seed.
pub const DEFAULT_SEED: u64 = 42;

/// Monte Carlo simulation parameters.
///
/// Immutable; validated on construction. Use [`SimulationParameters::new`]
/// or [`SimulationParameters::builder`].
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::SimulationParameters;
///
/// let params = SimulationParameters::builder()
///     .num_paths(10_000)
///     .seed(7)
///     .build()
///     .expect("valid parameters");
///
/// assert_eq!(params.num_paths(), 10_000);
/// assert_eq!(params.seed(), 7);
///
/// let defaults = SimulationParameters::default();
/// assert_eq!((defaults.num_paths(), defaults.seed()), (100_000, 42));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationParameters {
    num_paths: usize,
    random_seed: u64,
}

impl SimulationParameters {
    /// Creates validated simulation parameters.
    ///
    /// Any positive path count is a valid simulation, but the engine keeps
    /// one `f64` per path in memory, so counts above [`MAX_PATHS`] (about
    /// 800 MB of payoffs) are refused.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPathCount`] if `num_paths` is 0 or
    /// greater than [`MAX_PATHS`].
    pub fn new(num_paths: usize, random_seed: u64) -> Result<Self, ConfigError> {
        let params = Self {
            num_paths,
            random_seed,
        };
        params.validate()?;
        Ok(params)
    }

    /// Creates a new parameters builder.
    #[inline]
    pub fn builder() -> SimulationParametersBuilder {
        SimulationParametersBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn num_paths(&self) -> usize {
        self.num_paths
    }

    /// Returns the generator seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.random_seed
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `num_paths` is 0 or greater than 100,000,000.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_paths == 0 || self.num_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.num_paths));
        }
        Ok(())
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            num_paths: DEFAULT_NUM_PATHS,
            random_seed: DEFAULT_SEED,
        }
    }
}

/// Builder for [`SimulationParameters`].
///
/// The path count must be given explicitly; the seed falls back to
/// [`DEFAULT_SEED`].
#[derive(Clone, Debug, Default)]
pub struct SimulationParametersBuilder {
    num_paths: Option<usize>,
    seed: Option<u64>,
}

impl SimulationParametersBuilder {
    /// Sets the number of simulation paths.
    ///
    /// # Arguments
    ///
    /// * `num_paths` - Number of paths in [1, 100_000_000]
    #[inline]
    pub fn num_paths(mut self, num_paths: usize) -> Self {
        self.num_paths = Some(num_paths);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the parameters.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `num_paths` is not set or is out of range.
    pub fn build(self) -> Result<SimulationParameters, ConfigError> {
        let num_paths = self.num_paths.ok_or(ConfigError::InvalidParameter {
            name: "num_paths",
            value: "must be specified".to_string(),
        })?;

        SimulationParameters::new(num_paths, self.seed.unwrap_or(DEFAULT_SEED))
    }
}
