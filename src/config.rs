use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Smallest capacity for which a split leaves both halves non-empty and still
/// has a separator to promote.
pub const MIN_KEYS_PER_NODE: usize = 3;

pub const DEFAULT_KEYS_PER_NODE: usize = 3;

/// Sizing for an [`IndexTree`](crate::IndexTree).
///
/// A node splits as soon as its entry count reaches `max_keys_per_node`, so
/// at rest every leaf holds fewer than that many pairs and every interior node
/// fewer than that many boundary keys (plus its overflow child).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub max_keys_per_node: usize,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_keys_per_node(&mut self, max_keys_per_node: usize) -> &mut Self {
        self.max_keys_per_node = max_keys_per_node;
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.max_keys_per_node < MIN_KEYS_PER_NODE {
            return Err(Error::InvalidConfiguration {
                max_keys_per_node: self.max_keys_per_node,
            });
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_keys_per_node: DEFAULT_KEYS_PER_NODE,
        }
    }
}
