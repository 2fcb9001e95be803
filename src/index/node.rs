use std::borrow::Borrow;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct InteriorId(pub(crate) usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct LeafId(pub(crate) usize);

/// A reference from an interior node to one of its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Child {
    Interior(InteriorId),
    Leaf(LeafId),
}

pub(crate) struct Interior<K> {
    /// Sorted by boundary key. A key `k` routes into `entries[i].1` when
    /// `entries[i].0` is the first boundary strictly greater than `k`.
    pub(crate) entries: Vec<(K, Child)>,
    /// Catches every key `>=` the largest boundary key.
    pub(crate) overflow: Child,
    pub(crate) parent: Option<InteriorId>,
}

impl<K> Interior<K> {
    pub fn is_full(&self, max_keys: usize) -> bool {
        self.entries.len() >= max_keys
    }

    pub fn last_boundary(&self) -> Option<&K> {
        self.entries.last().map(|(key, _)| key)
    }

    /// Picks the branch a search for `key` takes out of this node.
    pub fn route<Q>(&self, key: &Q) -> Child
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let index = self
            .entries
            .partition_point(|(boundary, _)| boundary.borrow() <= key);
        self.entries
            .get(index)
            .map_or(self.overflow, |(_, child)| *child)
    }

    pub fn children(&self) -> impl Iterator<Item = Child> + '_ {
        self.entries
            .iter()
            .map(|(_, child)| *child)
            .chain(std::iter::once(self.overflow))
    }

    pub fn holds(&self, child: Child) -> bool {
        self.children().any(|candidate| candidate == child)
    }
}

pub(crate) struct Leaf<K, V> {
    pub(crate) entries: Vec<(K, V)>,
    pub(crate) prev: Option<LeafId>,
    pub(crate) next: Option<LeafId>,
}

impl<K, V> Leaf<K, V> {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            prev: None,
            next: None,
        }
    }

    pub fn is_full(&self, max_keys: usize) -> bool {
        self.entries.len() >= max_keys
    }

    pub fn search<Q>(&self, key: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries
            .binary_search_by(|(probe, _)| probe.borrow().cmp(key))
    }
}
