use super::{
    node::{Child, Interior, InteriorId, Leaf, LeafId},
    IndexTree,
};
use std::mem;
use tracing::{debug, trace};

impl<K, V> IndexTree<K, V> {
    /// Inserts a key/value pair. If the key was already present its value is
    /// replaced and the old one returned.
    pub fn insert(&mut self, key: K, mut value: V) -> Option<V>
    where
        K: Ord + Clone,
    {
        let (leaf, parent) = self.find_leaf(&key);
        let node = &mut self.leaves[leaf.0];

        match node.search(&key) {
            Ok(index) => {
                trace!(leaf = leaf.0, "overwriting existing key");
                mem::swap(&mut node.entries[index].1, &mut value);
                Some(value)
            }
            Err(index) => {
                node.entries.insert(index, (key, value));
                self.len += 1;

                if node.is_full(self.max_keys) {
                    self.split_leaf(leaf, parent);
                }

                None
            }
        }
    }

    /// True when a separator belongs past every boundary key of `parent`,
    /// i.e. the node that produced it sits in the parent's overflow slot.
    fn is_past_last_boundary(&self, parent: InteriorId, separator: &K) -> bool
    where
        K: Ord,
    {
        self.interior(parent)
            .last_boundary()
            .map_or(true, |last| last < separator)
    }

    fn split_leaf(&mut self, leaf: LeafId, parent: Option<InteriorId>)
    where
        K: Ord + Clone,
    {
        let node = &mut self.leaves[leaf.0];
        let median = node.entries.len() / 2;
        let upper = node.entries.split_off(median);
        let separator = upper[0].0.clone();
        let sibling = LeafId(self.leaves.len());

        let Some(parent) = parent else {
            // The only leaf filled up: it keeps the lower half and the tree
            // gets its first interior node.
            self.leaves.push(Leaf {
                entries: upper,
                prev: None,
                next: None,
            });
            self.link_after(leaf, sibling);

            let root = InteriorId(self.interiors.len());
            self.interiors.push(Interior {
                entries: vec![(separator, Child::Leaf(leaf))],
                overflow: Child::Leaf(sibling),
                parent: None,
            });
            self.root = Some(root);

            debug!(root = root.0, "first leaf split, created root");
            return;
        };

        if self.is_past_last_boundary(parent, &separator) {
            self.leaves.push(Leaf {
                entries: upper,
                prev: None,
                next: None,
            });
            self.link_after(leaf, sibling);
        } else {
            // The sibling gets promoted under the separator, which sits to
            // the left of this leaf's own boundary, so it takes the lower half.
            let lower = mem::replace(&mut self.leaves[leaf.0].entries, upper);
            self.leaves.push(Leaf {
                entries: lower,
                prev: None,
                next: None,
            });
            self.link_before(leaf, sibling);
        }

        debug!(
            leaf = leaf.0,
            sibling = sibling.0,
            parent = parent.0,
            "split leaf"
        );

        self.insert_into_interior(parent, separator, Child::Leaf(sibling));
    }

    fn link_after(&mut self, leaf: LeafId, sibling: LeafId) {
        let next = mem::replace(&mut self.leaves[leaf.0].next, Some(sibling));
        self.leaves[sibling.0].prev = Some(leaf);
        self.leaves[sibling.0].next = next;

        match next {
            Some(next) => self.leaves[next.0].prev = Some(sibling),
            None => self.last_leaf = sibling,
        }
    }

    fn link_before(&mut self, leaf: LeafId, sibling: LeafId) {
        let prev = mem::replace(&mut self.leaves[leaf.0].prev, Some(sibling));
        self.leaves[sibling.0].next = Some(leaf);
        self.leaves[sibling.0].prev = prev;

        match prev {
            Some(prev) => self.leaves[prev.0].next = Some(sibling),
            None => self.first_leaf = sibling,
        }
    }

    /// Adds a promoted `(key, child)` pair to `id`, splitting upward as
    /// needed. Returns the interior node that ends up owning `child`.
    fn insert_into_interior(&mut self, id: InteriorId, key: K, child: Child) -> InteriorId
    where
        K: Ord + Clone,
    {
        let node = &mut self.interiors[id.0];

        if node.last_boundary().is_some_and(|last| *last < key) {
            // The new key bounds what used to be the overflow child; the
            // promoted child takes over the overflow slot.
            let previous = mem::replace(&mut node.overflow, child);
            node.entries.push((key, previous));
        } else {
            let index = node.entries.partition_point(|(boundary, _)| *boundary < key);
            node.entries.insert(index, (key, child));
        }

        let owner = if node.is_full(self.max_keys) {
            let sibling = self.split_interior(id);
            if self.interior(sibling).holds(child) {
                sibling
            } else {
                id
            }
        } else {
            id
        };

        self.set_parent(child, owner);
        owner
    }

    /// Splits a full interior node and promotes the median boundary key.
    /// Returns the newly allocated sibling.
    fn split_interior(&mut self, id: InteriorId) -> InteriorId
    where
        K: Ord + Clone,
    {
        let sibling = InteriorId(self.interiors.len());
        let node = &mut self.interiors[id.0];
        let median = node.entries.len() / 2;
        let mut right_entries = node.entries.split_off(median);
        let (separator, median_child) = right_entries.remove(0);
        let right_overflow = mem::replace(&mut node.overflow, median_child);

        let Some(parent) = node.parent else {
            self.interiors.push(Interior {
                entries: right_entries,
                overflow: right_overflow,
                parent: None,
            });
            self.adopt_children(sibling);

            let root = InteriorId(self.interiors.len());
            self.interiors.push(Interior {
                entries: vec![(separator, Child::Interior(id))],
                overflow: Child::Interior(sibling),
                parent: None,
            });
            self.interiors[id.0].parent = Some(root);
            self.interiors[sibling.0].parent = Some(root);
            self.root = Some(root);

            debug!(
                node = id.0,
                sibling = sibling.0,
                root = root.0,
                "root split, tree grew a level"
            );
            return sibling;
        };

        if self.is_past_last_boundary(parent, &separator) {
            self.interiors.push(Interior {
                entries: right_entries,
                overflow: right_overflow,
                parent: Some(parent),
            });
        } else {
            let node = &mut self.interiors[id.0];
            let left_entries = mem::replace(&mut node.entries, right_entries);
            let left_overflow = mem::replace(&mut node.overflow, right_overflow);
            self.interiors.push(Interior {
                entries: left_entries,
                overflow: left_overflow,
                parent: Some(parent),
            });
        }
        self.adopt_children(sibling);

        debug!(
            node = id.0,
            sibling = sibling.0,
            parent = parent.0,
            "split interior node"
        );

        self.insert_into_interior(parent, separator, Child::Interior(sibling));
        sibling
    }

    /// Points every interior child of `id` back at `id`.
    fn adopt_children(&mut self, id: InteriorId) {
        let children = self.interior(id).children().collect::<Vec<_>>();
        for child in children {
            self.set_parent(child, id);
        }
    }

    fn set_parent(&mut self, child: Child, parent: InteriorId) {
        if let Child::Interior(child) = child {
            self.interiors[child.0].parent = Some(parent);
        }
    }
}
