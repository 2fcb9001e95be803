mod get;
mod insert;
mod iter;
pub(crate) mod node;
mod shape;

pub use self::{
    iter::{Iter, Keys, Values},
    shape::{NodeShape, TreeShape},
};

use self::node::{Child, Interior, InteriorId, Leaf, LeafId};
use crate::{config::Config, error::Error};
use std::{
    borrow::Borrow,
    fmt::{self, Debug},
};

/// An in-memory B+ tree keyed by `K`.
///
/// Interior nodes route by boundary key and keep their right-most child in a
/// separate overflow slot. Leaves hold the key/value pairs and are chained in
/// key order in both directions.
pub struct IndexTree<K, V> {
    pub(crate) interiors: Vec<Interior<K>>,
    pub(crate) leaves: Vec<Leaf<K, V>>,
    pub(crate) root: Option<InteriorId>,
    pub(crate) first_leaf: LeafId,
    pub(crate) last_leaf: LeafId,
    max_keys: usize,
    len: usize,
}

/// The string-to-string index.
pub type StringIndex = IndexTree<String, String>;

impl<K, V> IndexTree<K, V> {
    pub fn new() -> Self {
        Self::from_valid(Config::default())
    }

    pub fn with_max_keys(max_keys_per_node: usize) -> Result<Self, Error> {
        let mut config = Config::new();
        config.max_keys_per_node(max_keys_per_node);
        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: Config) -> Self {
        Self {
            interiors: Vec::new(),
            leaves: vec![Leaf::empty()],
            root: None,
            first_leaf: LeafId(0),
            last_leaf: LeafId(0),
            max_keys: config.max_keys_per_node,
            len: 0,
        }
    }

    pub fn max_keys_per_node(&self) -> usize {
        self.max_keys
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels, counting the leaf level. A tree that never split has
    /// height 1.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut cursor = self.root;

        while let Some(id) = cursor {
            height += 1;
            cursor = match self.interiors[id.0].overflow {
                Child::Interior(child) => Some(child),
                Child::Leaf(_) => None,
            };
        }

        height
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    pub(crate) fn interior(&self, id: InteriorId) -> &Interior<K> {
        &self.interiors[id.0]
    }

    pub(crate) fn leaf(&self, id: LeafId) -> &Leaf<K, V> {
        &self.leaves[id.0]
    }
}

impl<K, V> Default for IndexTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Debug for IndexTree<K, V>
where
    K: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn recursive_fmt<K: Debug, V>(
            tree: &IndexTree<K, V>,
            child: Child,
            f: &mut fmt::Formatter<'_>,
            depth: usize,
        ) -> fmt::Result {
            write!(f, "{}", "    ".repeat(depth))?;

            match child {
                Child::Interior(id) => {
                    let node = tree.interior(id);
                    let boundaries = node.entries.iter().map(|(key, _)| key).collect::<Vec<_>>();
                    writeln!(f, "{:?}", boundaries)?;

                    for child in node.children() {
                        recursive_fmt(tree, child, f, depth + 1)?;
                    }

                    Ok(())
                }
                Child::Leaf(id) => {
                    let keys = tree
                        .leaf(id)
                        .entries
                        .iter()
                        .map(|(key, _)| key)
                        .collect::<Vec<_>>();
                    writeln!(f, "{:?}", keys)
                }
            }
        }

        let top = self.root.map_or(Child::Leaf(self.first_leaf), Child::Interior);
        recursive_fmt(self, top, f, 0)
    }
}
