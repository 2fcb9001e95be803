use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("key not found")]
    NotFound,

    #[error("max_keys_per_node must be at least {min}, got {max_keys_per_node}", min = crate::config::MIN_KEYS_PER_NODE)]
    InvalidConfiguration { max_keys_per_node: usize },
}
