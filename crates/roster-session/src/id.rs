//! Record id generators.
//!
//! Both produce `prefix + decimal number`. The random generator matches the
//! historical `UID0`..`UID9999` ids and can collide; the sequential one
//! cannot within a session.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use roster_core::config::{IdConfig, IdStrategy};
use roster_core::traits::IIdGenerator;

/// `prefix + random(0..upper_bound)`.
pub struct RandomIdGenerator {
    prefix: String,
    upper_bound: u32,
    rng: StdRng,
}

impl RandomIdGenerator {
    pub fn new(prefix: impl Into<String>, upper_bound: u32) -> Self {
        Self {
            prefix: prefix.into(),
            upper_bound: upper_bound.max(1),
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sequence, for tests and replay.
    pub fn with_seed(prefix: impl Into<String>, upper_bound: u32, seed: u64) -> Self {
        Self {
            prefix: prefix.into(),
            upper_bound: upper_bound.max(1),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IIdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> String {
        let n = self.rng.gen_range(0..self.upper_bound);
        format!("{}{}", self.prefix, n)
    }
}

/// `prefix + n`, counting up from 1.
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IIdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Build the generator selected by configuration.
pub fn from_config(config: &IdConfig) -> Box<dyn IIdGenerator> {
    match config.strategy {
        IdStrategy::Random => Box::new(RandomIdGenerator::new(
            config.prefix.clone(),
            config.random_upper_bound,
        )),
        IdStrategy::Sequential => Box::new(SequentialIdGenerator::new(config.prefix.clone())),
    }
}
