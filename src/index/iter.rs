use super::{node::LeafId, IndexTree};

impl<K, V> IndexTree<K, V> {
    /// Walks the leaf chain in key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            tree: self,
            front: Some((self.first_leaf, 0)),
            back: Some((self.last_leaf, self.leaf(self.last_leaf).entries.len())),
            len: self.len,
        }
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }
}

/// Iterator over the leaf chain. `front` points at the next entry to yield,
/// `back` one past the last; `len` keeps the two ends from crossing.
pub struct Iter<'a, K, V> {
    tree: &'a IndexTree<K, V>,
    front: Option<(LeafId, usize)>,
    back: Option<(LeafId, usize)>,
    len: usize,
}

impl<'a, K, V> IntoIterator for &'a IndexTree<K, V> {
    type IntoIter = Iter<'a, K, V>;
    type Item = (&'a K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let (mut leaf, mut index) = self.front?;
        let tree = self.tree;

        // Skip past exhausted (or empty) leaves.
        while index >= tree.leaf(leaf).entries.len() {
            leaf = tree.leaf(leaf).next?;
            index = 0;
        }

        let (key, value) = &tree.leaf(leaf).entries[index];
        self.front = Some((leaf, index + 1));
        self.len -= 1;

        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let (mut leaf, mut end) = self.back?;
        let tree = self.tree;

        while end == 0 {
            leaf = tree.leaf(leaf).prev?;
            end = tree.leaf(leaf).entries.len();
        }

        let (key, value) = &tree.leaf(leaf).entries[end - 1];
        self.back = Some((leaf, end - 1));
        self.len -= 1;

        Some((key, value))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {
    fn len(&self) -> usize {
        self.len
    }
}

pub struct Keys<'a, K, V>(Iter<'a, K, V>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(key, _)| key)
    }
}

impl<'a, K, V> DoubleEndedIterator for Keys<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(key, _)| key)
    }
}

pub struct Values<'a, K, V>(Iter<'a, K, V>);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, value)| value)
    }
}
