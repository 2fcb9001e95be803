//! An in-memory B+ tree index.
//!
//! ```
//! use bplus_index::StringIndex;
//!
//! let mut index = StringIndex::new();
//! index.insert("h".to_owned(), "DATA H".to_owned());
//! index.insert("a".to_owned(), "DATA A".to_owned());
//!
//! assert_eq!(index.lookup("h").map(String::as_str), Ok("DATA H"));
//! assert!(index.lookup("z").is_err());
//! ```

mod config;
mod error;
mod index;
#[cfg(test)]
mod tests;

pub use config::{Config, DEFAULT_KEYS_PER_NODE, MIN_KEYS_PER_NODE};
pub use error::Error;
pub use index::{IndexTree, Iter, Keys, NodeShape, StringIndex, TreeShape, Values};
