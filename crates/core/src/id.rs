//! Server-side identifier generation.

use rand::{distr::Alphanumeric, Rng};

/// Length of generated identifiers.
pub const ID_LENGTH: usize = 21;

/// Source of new entity identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random short alphanumeric identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(ID_LENGTH)
            .map(char::from)
            .collect()
    }
}
