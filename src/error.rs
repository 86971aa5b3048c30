use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Configuration(String),
    #[error("Delegation beyond the maximum depth (depth {depth}, maximum {max})")]
    DelegationDepthExceeded { depth: usize, max: usize },
    #[error("The supplied identity was too long")]
    IdentityTooLong,
    #[error("The identity chain does not match the key (expected {expected} elements, got {actual})")]
    IdentityChainMismatch { expected: usize, actual: usize },
    #[error("Operation not allowed in the current state: {0}")]
    StateSequence(&'static str),
    #[error("The supplied encoding was malformed: {0}")]
    Decoding(String),
}

pub type Result<V, E=Error> = std::result::Result<V, E>;
