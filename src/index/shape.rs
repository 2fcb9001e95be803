use super::{node::Child, IndexTree};
use serde::Serialize;
use std::{
    borrow::Borrow,
    collections::VecDeque,
    fmt::{self, Display},
};

/// One node of a [`TreeShape`] dump.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeShape<K> {
    Interior { boundaries: Vec<K> },
    Leaf { keys: Vec<K> },
}

/// Level-order snapshot of the keys held by every node, root level first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TreeShape<K> {
    pub levels: Vec<Vec<NodeShape<K>>>,
}

impl<K, V> IndexTree<K, V> {
    /// Boundary keys passed on the way down to the leaf for `key`, one per
    /// interior level. Taking the overflow branch is reported as the node's
    /// largest boundary key.
    pub fn search_path<Q>(&self, key: &Q) -> Vec<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut path = Vec::new();
        let mut cursor = self.root;

        while let Some(id) = cursor {
            let node = self.interior(id);
            let index = node
                .entries
                .partition_point(|(boundary, _)| boundary.borrow() <= key);

            let (boundary, child) = match node.entries.get(index) {
                Some((boundary, child)) => (boundary, *child),
                None => match node.entries.last() {
                    Some((boundary, _)) => (boundary, node.overflow),
                    None => break,
                },
            };

            path.push(boundary);
            cursor = match child {
                Child::Interior(child) => Some(child),
                Child::Leaf(_) => None,
            };
        }

        path
    }

    pub fn render_search_path<Q>(&self, key: &Q) -> String
    where
        K: Borrow<Q> + Display,
        Q: Ord + ?Sized,
    {
        self.search_path(key)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    pub fn shape(&self) -> TreeShape<K>
    where
        K: Clone,
    {
        let mut levels: Vec<Vec<NodeShape<K>>> = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back((self.root.map_or(Child::Leaf(self.first_leaf), Child::Interior), 0));

        while let Some((child, depth)) = queue.pop_front() {
            let shape = match child {
                Child::Interior(id) => {
                    let node = self.interior(id);
                    queue.extend(node.children().map(|child| (child, depth + 1)));
                    NodeShape::Interior {
                        boundaries: node.entries.iter().map(|(key, _)| key.clone()).collect(),
                    }
                }
                Child::Leaf(id) => NodeShape::Leaf {
                    keys: self
                        .leaf(id)
                        .entries
                        .iter()
                        .map(|(key, _)| key.clone())
                        .collect(),
                },
            };

            if levels.len() == depth {
                levels.push(Vec::new());
            }
            levels[depth].push(shape);
        }

        TreeShape { levels }
    }
}

impl<K: Display> Display for NodeShape<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close, keys) = match self {
            NodeShape::Interior { boundaries } => ('<', '>', boundaries),
            NodeShape::Leaf { keys } => ('[', ']', keys),
        };

        write!(f, "{open}")?;
        for (i, key) in keys.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{key}")?;
        }
        write!(f, "{close}")
    }
}

impl<K: Display> Display for TreeShape<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, level) in self.levels.iter().enumerate() {
            write!(f, "{depth}:")?;
            for node in level {
                write!(f, " {node}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
