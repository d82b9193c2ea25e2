// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure transforms over a query forest.
//!
//! Every function here takes the forest as a slice, rebuilds the levels it
//! touches, and returns a fresh `Vec<Node>`; the input is never mutated.
//! Lookups that find nothing degrade to returning a structurally equal copy
//! rather than erroring, which keeps every caller's failure mode "the
//! operation had no effect".

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::id::NodeId;
use crate::node::Node;

/// Where an insertion or relocation lands.
///
/// An explicit target, rather than a reserved sentinel id: "top of the
/// forest" is its own case and can never be confused with a real node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Placement {
    /// Append to the end of the top-level forest.
    TopLevel,
    /// Append to the end of the children of the node with this id.
    Under(NodeId),
}

/// Depth-first preorder iterator over a forest.
///
/// Yields each node before its children, siblings left to right. This is the
/// traversal order behind [`locate`] and the id helpers.
#[derive(Debug)]
pub struct Preorder<'a> {
    stack: SmallVec<[&'a Node; 16]>,
}

/// Iterates a forest in depth-first preorder.
pub fn preorder(nodes: &[Node]) -> Preorder<'_> {
    let mut stack = SmallVec::new();
    // Push roots in reverse so the leftmost comes off the stack first.
    for node in nodes.iter().rev() {
        stack.push(node);
    }
    Preorder { stack }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        for child in node.children().iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

/// Finds the node with `id` anywhere in the forest.
///
/// First match in preorder; since ids are unique this is "the" match.
#[must_use]
pub fn locate(nodes: &[Node], id: NodeId) -> Option<&Node> {
    preorder(nodes).find(|node| node.id() == id)
}

/// Returns a new forest with the node `id`, and its entire subtree, excised.
///
/// Every level is rebuilt; the matching node is simply not carried over, so
/// its descendants vanish with it. An absent `id` yields a structurally
/// equal copy of the input.
#[must_use]
pub fn remove(nodes: &[Node], id: NodeId) -> Vec<Node> {
    nodes
        .iter()
        .filter(|node| node.id() != id)
        .map(|node| node.with_children(remove(node.children(), id)))
        .collect()
}

/// Returns a new forest with `node` appended at `placement`.
///
/// With [`Placement::Under`], the parent keeps its existing children and
/// gains `node` at the end. If the parent id is not found anywhere, the
/// forest comes back unchanged and `node` is dropped; callers that need the
/// top level use [`Placement::TopLevel`] explicitly rather than a sentinel.
#[must_use]
pub fn insert(nodes: &[Node], placement: Placement, node: Node) -> Vec<Node> {
    match placement {
        Placement::TopLevel => {
            let mut out = nodes.to_vec();
            out.push(node);
            out
        }
        Placement::Under(parent) => insert_under(nodes, parent, &node),
    }
}

fn insert_under(nodes: &[Node], parent: NodeId, node: &Node) -> Vec<Node> {
    nodes
        .iter()
        .map(|candidate| {
            if candidate.id() == parent {
                let mut children = candidate.children().to_vec();
                children.push(node.clone());
                candidate.with_children(children)
            } else {
                candidate.with_children(insert_under(candidate.children(), parent, node))
            }
        })
        .collect()
}

/// Returns a new forest with the node `source` (and its subtree) moved to
/// `placement`.
///
/// The source is snapshotted **before** removal and the snapshot is what
/// gets inserted, so the move is atomic from the caller's point of view.
/// A missing `source` is a no-op, not a failure.
///
/// # Precondition
///
/// `placement` must not point into `source`'s own subtree (including
/// `source` itself). Removing the source takes the target with it, the
/// insert then finds no parent, and the node is silently lost. This is not
/// checked here; run [`check_relocation`](crate::check_relocation) first, as
/// the drag-gesture layer does.
#[must_use]
pub fn relocate(nodes: &[Node], source: NodeId, placement: Placement) -> Vec<Node> {
    let Some(snapshot) = locate(nodes, source).cloned() else {
        return nodes.to_vec();
    };
    insert(&remove(nodes, source), placement, snapshot)
}

/// Collects the ids of `node` and all of its descendants, in preorder.
#[must_use]
pub fn subtree_ids(node: &Node) -> Vec<NodeId> {
    preorder(core::slice::from_ref(node))
        .map(Node::id)
        .collect()
}

/// Returns `true` if every id in the forest is distinct.
///
/// Quadratic scan; fine for the tree sizes a human edits by hand. For bulk
/// validation of large forests, see [`has_unique_ids_hashed`] (behind the
/// `hashbrown` feature).
#[must_use]
pub fn has_unique_ids(nodes: &[Node]) -> bool {
    let ids: Vec<NodeId> = preorder(nodes).map(Node::id).collect();
    for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            if ids[i] == ids[j] {
                return false;
            }
        }
    }
    true
}

/// Returns `true` if every id in the forest is distinct, de-duplicating with
/// hashing.
///
/// Linear-time alternative to [`has_unique_ids`] for larger forests.
#[cfg(feature = "hashbrown")]
#[must_use]
pub fn has_unique_ids_hashed(nodes: &[Node]) -> bool {
    let mut seen = hashbrown::HashSet::new();
    preorder(nodes).all(|node| seen.insert(node.id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::IdAllocator;
    use crate::node::{Combinator, Node};

    /// `AND(1) [ cond(2), OR(3) [ cond(4) ] ]`, plus top-level `cond(5)`.
    fn sample_forest() -> Vec<Node> {
        let mut ids = IdAllocator::new();
        let and = Node::group(ids.allocate(), Combinator::And);
        let c2 = Node::condition(ids.allocate(), "a = 1").unwrap();
        let or = Node::group(ids.allocate(), Combinator::Or);
        let c4 = Node::condition(ids.allocate(), "b = 2").unwrap();
        let c5 = Node::condition(ids.allocate(), "c = 3").unwrap();

        let forest = insert(&[], Placement::TopLevel, and);
        let forest = insert(&forest, Placement::Under(NodeId::Real(1)), c2);
        let forest = insert(&forest, Placement::Under(NodeId::Real(1)), or);
        let forest = insert(&forest, Placement::Under(NodeId::Real(3)), c4);
        insert(&forest, Placement::TopLevel, c5)
    }

    #[test]
    fn preorder_visits_node_before_children_left_to_right() {
        let forest = sample_forest();
        let order: Vec<NodeId> = preorder(&forest).map(Node::id).collect();
        let expected: Vec<NodeId> = [1, 2, 3, 4, 5].into_iter().map(NodeId::Real).collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn locate_finds_nested_nodes_and_misses_cleanly() {
        let forest = sample_forest();
        assert_eq!(
            locate(&forest, NodeId::Real(4)).unwrap().label(),
            Some("b = 2")
        );
        assert!(locate(&forest, NodeId::Real(99)).is_none());
    }

    #[test]
    fn remove_takes_the_whole_subtree() {
        let forest = sample_forest();
        let pruned = remove(&forest, NodeId::Real(3));
        assert!(locate(&pruned, NodeId::Real(3)).is_none());
        assert!(locate(&pruned, NodeId::Real(4)).is_none());
        // Siblings and the rest of the forest survive.
        assert!(locate(&pruned, NodeId::Real(2)).is_some());
        assert!(locate(&pruned, NodeId::Real(5)).is_some());
    }

    #[test]
    fn remove_of_missing_id_is_a_structural_copy() {
        let forest = sample_forest();
        assert_eq!(remove(&forest, NodeId::Real(99)), forest);
    }

    #[test]
    fn remove_is_idempotent() {
        let forest = sample_forest();
        let once = remove(&forest, NodeId::Real(2));
        let twice = remove(&once, NodeId::Real(2));
        assert_eq!(once, twice);
    }

    #[test]
    fn insert_under_missing_parent_drops_the_node() {
        let forest = sample_forest();
        let cond = Node::condition(NodeId::Real(6), "d = 4").unwrap();
        let out = insert(&forest, Placement::Under(NodeId::Real(99)), cond);
        assert_eq!(out, forest);
        assert!(locate(&out, NodeId::Real(6)).is_none());
    }

    #[test]
    fn insert_appends_after_existing_children() {
        let forest = sample_forest();
        let cond = Node::condition(NodeId::Real(6), "d = 4").unwrap();
        let out = insert(&forest, Placement::Under(NodeId::Real(1)), cond);
        let parent = locate(&out, NodeId::Real(1)).unwrap();
        let child_ids: Vec<NodeId> = parent.children().iter().map(Node::id).collect();
        let expected: Vec<NodeId> = [2, 3, 6].into_iter().map(NodeId::Real).collect();
        assert_eq!(child_ids, expected);
    }

    #[test]
    fn insert_does_not_disturb_the_input() {
        let forest = sample_forest();
        let before = forest.clone();
        let cond = Node::condition(NodeId::Real(6), "d = 4").unwrap();
        let _ = insert(&forest, Placement::Under(NodeId::Real(1)), cond);
        assert_eq!(forest, before);
    }

    #[test]
    fn relocate_equals_remove_then_insert_of_the_snapshot() {
        let forest = sample_forest();
        let snapshot = locate(&forest, NodeId::Real(3)).cloned().unwrap();
        let moved = relocate(&forest, NodeId::Real(3), Placement::TopLevel);
        let by_hand = insert(
            &remove(&forest, NodeId::Real(3)),
            Placement::TopLevel,
            snapshot,
        );
        assert_eq!(moved, by_hand);
        // The subtree travels with the node.
        let parent = locate(&moved, NodeId::Real(3)).unwrap();
        assert_eq!(parent.children().len(), 1);
    }

    #[test]
    fn relocate_of_missing_source_is_a_no_op() {
        let forest = sample_forest();
        assert_eq!(
            relocate(&forest, NodeId::Real(99), Placement::TopLevel),
            forest
        );
    }

    #[test]
    fn subtree_ids_covers_the_node_and_descendants() {
        let forest = sample_forest();
        let and = locate(&forest, NodeId::Real(1)).unwrap();
        let expected: Vec<NodeId> = [1, 2, 3, 4].into_iter().map(NodeId::Real).collect();
        assert_eq!(subtree_ids(and), expected);
    }

    #[test]
    fn uniqueness_check_spots_duplicates() {
        let forest = sample_forest();
        assert!(has_unique_ids(&forest));

        let dup = Node::condition(NodeId::Real(2), "dup").unwrap();
        let broken = insert(&forest, Placement::TopLevel, dup);
        assert!(!has_unique_ids(&broken));
    }

    #[cfg(feature = "hashbrown")]
    #[test]
    fn hashed_uniqueness_check_matches_the_scan() {
        let forest = sample_forest();
        assert_eq!(has_unique_ids(&forest), has_unique_ids_hashed(&forest));

        let dup = Node::condition(NodeId::Real(2), "dup").unwrap();
        let broken = insert(&forest, Placement::TopLevel, dup);
        assert_eq!(has_unique_ids(&broken), has_unique_ids_hashed(&broken));
    }
}
