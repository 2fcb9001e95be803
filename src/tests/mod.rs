mod tree;

use crate::index::{
    node::{Child, InteriorId, LeafId},
    IndexTree,
};
use std::fmt::Debug;

/// Walks the whole tree and panics on the first broken structural invariant.
pub(crate) fn check_invariants<K, V>(tree: &IndexTree<K, V>)
where
    K: Ord + Clone + Debug,
{
    let max = tree.max_keys_per_node();
    let mut leaves_in_order = Vec::new();

    match tree.root {
        None => {
            assert_eq!(tree.first_leaf, tree.last_leaf, "single leaf must be both ends");
            leaves_in_order.push(tree.first_leaf);
        }
        Some(root) => {
            assert_eq!(tree.interior(root).parent, None, "root has a parent");
            let mut leaf_depths = Vec::new();
            check_subtree(
                tree,
                Child::Interior(root),
                None,
                None,
                0,
                &mut leaves_in_order,
                &mut leaf_depths,
            );
            leaf_depths.dedup();
            assert_eq!(leaf_depths.len(), 1, "leaves at different depths");
        }
    }

    for &leaf in &leaves_in_order {
        let entries = &tree.leaf(leaf).entries;
        assert!(entries.len() < max, "leaf {:?} holds {} entries", leaf, entries.len());
    }

    // The sibling chain must visit exactly the leaves the routing reaches, in
    // the same order, with consistent back links.
    let mut chain = Vec::new();
    let mut cursor = Some(tree.first_leaf);
    let mut prev = None;
    while let Some(leaf) = cursor {
        assert_eq!(tree.leaf(leaf).prev, prev, "broken prev link at {:?}", leaf);
        chain.push(leaf);
        prev = Some(leaf);
        cursor = tree.leaf(leaf).next;
    }
    assert_eq!(prev, Some(tree.last_leaf), "chain does not end at last_leaf");
    assert_eq!(chain, leaves_in_order, "chain order differs from routing order");

    let keys = chain
        .iter()
        .flat_map(|leaf| tree.leaf(*leaf).entries.iter().map(|(key, _)| key.clone()))
        .collect::<Vec<_>>();
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]), "keys not strictly ascending");
    assert_eq!(keys.len(), tree.len());
}

/// Checks `child` against the half-open key range `[lower, upper)` it was
/// routed under.
fn check_subtree<'a, K, V>(
    tree: &'a IndexTree<K, V>,
    child: Child,
    lower: Option<&'a K>,
    upper: Option<&'a K>,
    depth: usize,
    leaves: &mut Vec<LeafId>,
    leaf_depths: &mut Vec<usize>,
) where
    K: Ord + Debug,
{
    let in_range = |key: &K| {
        lower.map_or(true, |lower| key >= lower) && upper.map_or(true, |upper| key < upper)
    };

    match child {
        Child::Leaf(id) => {
            for (key, _) in &tree.leaf(id).entries {
                assert!(in_range(key), "{:?} routed outside [{:?}, {:?})", key, lower, upper);
            }
            leaves.push(id);
            leaf_depths.push(depth);
        }
        Child::Interior(id) => {
            let node = tree.interior(id);
            assert!(!node.entries.is_empty(), "interior {:?} has no boundaries", id);
            assert!(
                node.entries.len() < tree.max_keys_per_node(),
                "interior {:?} holds {} entries",
                id,
                node.entries.len()
            );

            let mut floor = lower;
            for (boundary, grandchild) in &node.entries {
                assert!(in_range(boundary), "boundary {:?} outside its parent range", boundary);
                if let Some(floor) = floor {
                    assert!(floor < boundary, "boundaries out of order in {:?}", id);
                }
                check_parent(tree, *grandchild, id);
                check_subtree(tree, *grandchild, floor, Some(boundary), depth + 1, leaves, leaf_depths);
                floor = Some(boundary);
            }

            check_parent(tree, node.overflow, id);
            check_subtree(tree, node.overflow, floor, upper, depth + 1, leaves, leaf_depths);
        }
    }
}

fn check_parent<K, V>(tree: &IndexTree<K, V>, child: Child, parent: InteriorId) {
    if let Child::Interior(child) = child {
        assert_eq!(
            tree.interior(child).parent,
            Some(parent),
            "stale parent link on {:?}",
            child
        );
    }
}
