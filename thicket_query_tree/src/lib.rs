// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thicket_query_tree --heading-base-level=0

//! Thicket Query Tree: an immutable boolean query-tree model with pure
//! transforms.
//!
//! This crate is the structural core of a visual query builder: a forest of
//! **groups** (combined under AND/OR) and **conditions** (leaf predicates),
//! edited by inserting, removing, and relocating nodes. It knows nothing
//! about rendering, input devices, or how conditions are authored; those are
//! the embedding application's concern. What it owns are the tree invariants
//! and the operations that preserve them.
//!
//! - Every transform is **pure**: it returns a new forest value and never
//!   mutates its input, so any number of views can read one snapshot while
//!   the container swaps in the next.
//! - Ids are unique within a forest, issued by an [`IdAllocator`] the
//!   container owns. Drop-preview ghosts live in their own id namespace
//!   ([`NodeId::Preview`]) and can never collide with a real node.
//! - Conditions are always leaves, enforced when a [`Node`] is built rather
//!   than re-checked on every mutation.
//! - Lookups that find nothing degrade to no-ops, never errors. The one
//!   genuinely dangerous operation, relocating a node into its own subtree,
//!   is surfaced by [`check_relocation`] as an explicit [`MoveRejection`].
//!
//! ## Minimal example
//!
//! ```
//! use thicket_query_tree::{
//!     Combinator, IdAllocator, Node, NodeId, Placement, Query, check_relocation,
//! };
//!
//! let mut ids = IdAllocator::new();
//! let group = Node::group(ids.allocate(), Combinator::And);
//! let group_id = group.id();
//! let cond = Node::condition(ids.allocate(), "x > 5").unwrap();
//! let cond_id = cond.id();
//!
//! // Build up: one AND group with a condition under it.
//! let query = Query::new("Q")
//!     .insert(Placement::TopLevel, group)
//!     .insert(Placement::Under(group_id), cond);
//! assert_eq!(query.locate(group_id).unwrap().children().len(), 1);
//!
//! // Reparent the condition to the top level.
//! let query = query.relocate(cond_id, Placement::TopLevel);
//! assert_eq!(query.roots().len(), 2);
//!
//! // Moving the group into its own child is rejected before it can
//! // silently lose the subtree.
//! assert!(check_relocation(query.roots(), group_id, Placement::Under(cond_id)).is_err());
//!
//! // Removing a node takes its subtree with it; a missing id is a no-op.
//! let query = query.remove(cond_id);
//! assert!(query.locate(cond_id).is_none());
//! assert_eq!(query.remove(NodeId::Real(99)), query);
//! ```
//!
//! ## Where the drag layer fits
//!
//! The companion `thicket_drag` crate layers the transient drag-and-drop
//! state (the session slot, the drop-preview ghost, the hover/drop state
//! machine) on top of these transforms. The seam between the two is the
//! plain node slice: gesture transforms take `&[Node]` and return
//! `Vec<Node>`, and the container folds results back into its [`Query`]
//! with [`Query::with_roots`].
//!
//! ## Features
//!
//! - `std` (default): compile against the standard library. The crate is
//!   `no_std` + `alloc` without it.
//! - `hashbrown`: hash-based id-uniqueness checking for large forests.

#![no_std]

extern crate alloc;

mod guard;
mod id;
mod node;
mod ops;

pub use guard::{MoveRejection, check_relocation, is_descendant};
pub use id::{IdAllocator, NodeId};
pub use node::{Combinator, Node, NodeKind, Query};
pub use ops::{
    Placement, Preorder, has_unique_ids, insert, locate, preorder, relocate, remove, subtree_ids,
};

#[cfg(feature = "hashbrown")]
pub use ops::has_unique_ids_hashed;
