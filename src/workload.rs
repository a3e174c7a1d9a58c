//! Random ascending sequences and lookup targets for demo runs

use crate::search::SearchError;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Configuration for random sequence generation
#[derive(Debug, Clone)]
pub struct SampleConfig {
    /// Number of values to generate
    pub size: usize,
    /// Values are drawn without replacement from `1..=max_value`
    pub max_value: u64,
    /// Seed for the random number generator (None = random seed)
    pub seed: Option<u64>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            size: 100,
            max_value: 100,
            seed: None,
        }
    }
}

impl SampleConfig {
    /// `size` unique values drawn from `1..=size`.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            max_value: size as u64,
            seed: None,
        }
    }

    pub fn with_max_value(mut self, max_value: u64) -> Self {
        self.max_value = max_value;
        self
    }

    pub fn with_seed_option(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        }
    }
}

/// A generated sequence together with a value known to be in it.
#[derive(Debug, Clone)]
pub struct Workload {
    pub sequence: Vec<u64>,
    pub target: u64,
}

/// Generate `config.size` unique values sorted ascending and pick one of them
/// as the lookup target.
pub fn generate_workload(config: &SampleConfig) -> Result<Workload, SearchError> {
    if config.size == 0 {
        return Err(SearchError::invalid_input("sample size must be at least 1"));
    }
    if (config.max_value as u128) < config.size as u128 {
        return Err(SearchError::invalid_input(format!(
            "cannot draw {} unique values from 1..={}",
            config.size, config.max_value
        )));
    }
    let max_value = usize::try_from(config.max_value).map_err(|_| {
        SearchError::invalid_input(format!(
            "max value {} exceeds this platform's range",
            config.max_value
        ))
    })?;

    let mut rng = config.rng();
    let mut sequence: Vec<u64> = index::sample(&mut rng, max_value, config.size)
        .into_iter()
        .map(|i| i as u64 + 1)
        .collect();
    sequence.sort_unstable();

    let target = sequence[rng.random_range(0..sequence.len())];

    Ok(Workload { sequence, target })
}
