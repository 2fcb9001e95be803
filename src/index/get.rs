use super::{
    node::{Child, InteriorId, LeafId},
    IndexTree,
};
use crate::error::Error;
use std::borrow::Borrow;

impl<K, V> IndexTree<K, V> {
    /// Descends from the root to the leaf that holds, or would hold, `key`.
    /// Also returns the interior node the leaf was reached from.
    pub(crate) fn find_leaf<Q>(&self, key: &Q) -> (LeafId, Option<InteriorId>)
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(mut cursor) = self.root else {
            return (self.first_leaf, None);
        };

        loop {
            match self.interior(cursor).route(key) {
                Child::Interior(child) => cursor = child,
                Child::Leaf(leaf) => return (leaf, Some(cursor)),
            }
        }
    }

    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (leaf, _) = self.find_leaf(key);
        let node = self.leaf(leaf);

        node.search(key)
            .ok()
            .map(|index| (&node.entries[index].0, &node.entries[index].1))
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_key_value(key).map(|(_, value)| value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (leaf, _) = self.find_leaf(key);
        let node = &mut self.leaves[leaf.0];

        node.search(key)
            .ok()
            .map(|index| &mut node.entries[index].1)
    }

    /// Like [`get`](Self::get), but reports a miss as [`Error::NotFound`].
    pub fn lookup<Q>(&self, key: &Q) -> Result<&V, Error>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).ok_or(Error::NotFound)
    }
}
