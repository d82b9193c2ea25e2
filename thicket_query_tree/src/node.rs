// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The query forest model: nodes, kinds, and the [`Query`] container.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::id::NodeId;
use crate::ops::{self, Placement};

/// How a group combines its children.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Combinator {
    /// All children must hold.
    And,
    /// At least one child must hold.
    Or,
}

impl Combinator {
    /// The display form of the combinator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a node is: an internal group or a leaf condition.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NodeKind {
    /// An internal node combining its children under the given combinator.
    Group(Combinator),
    /// A leaf predicate. Conditions never have children.
    Condition,
}

/// A node in a query forest.
///
/// Nodes are immutable values: every mutation in this crate rebuilds the
/// affected levels and returns a new forest, leaving the input untouched.
/// The two structural invariants are enforced at construction and never
/// re-validated per mutation:
///
/// - A condition carries a non-empty label and has no children
///   ([`Node::condition`] rejects empty labels, and nothing exposes a
///   condition's child list for mutation).
/// - A preview ghost ([`Node::preview`]) is always a leaf, whatever the kind
///   of its source.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    label: Option<String>,
    children: Vec<Node>,
}

impl Node {
    /// Creates an unlabeled group with no children.
    #[must_use]
    pub const fn group(id: NodeId, combinator: Combinator) -> Self {
        Self {
            id,
            kind: NodeKind::Group(combinator),
            label: None,
            children: Vec::new(),
        }
    }

    /// Creates a labeled group with no children.
    #[must_use]
    pub fn group_labeled(id: NodeId, combinator: Combinator, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::group(id, combinator)
        }
    }

    /// Creates a condition leaf.
    ///
    /// Returns `None` when `label` is empty: a condition's label is its
    /// entire content, so an empty one is rejected at the door rather than
    /// policed on every later mutation.
    #[must_use]
    pub fn condition(id: NodeId, label: impl Into<String>) -> Option<Self> {
        let label = label.into();
        if label.is_empty() {
            return None;
        }
        Some(Self {
            id,
            kind: NodeKind::Condition,
            label: Some(label),
            children: Vec::new(),
        })
    }

    /// Derives the drop-preview ghost for this node.
    ///
    /// The ghost is a shallow copy carrying the derived [`NodeId::Preview`]
    /// id and no children; it renders as a leaf placeholder regardless of
    /// the source's kind. Returns `None` when `self` is already a ghost.
    #[must_use]
    pub fn preview(&self) -> Option<Self> {
        Some(Self {
            id: self.id.preview()?,
            kind: self.kind,
            label: self.label.clone(),
            children: Vec::new(),
        })
    }

    /// The node's id.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// The node's kind.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns `true` for groups.
    #[must_use]
    pub const fn is_group(&self) -> bool {
        matches!(self.kind, NodeKind::Group(_))
    }

    /// The group's combinator, or `None` for conditions.
    #[must_use]
    pub const fn combinator(&self) -> Option<Combinator> {
        match self.kind {
            NodeKind::Group(combinator) => Some(combinator),
            NodeKind::Condition => None,
        }
    }

    /// The node's label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The text a view would render for this node.
    ///
    /// The label where present; an unlabeled group falls back to its
    /// combinator.
    #[must_use]
    pub fn display_label(&self) -> &str {
        match (&self.label, self.kind) {
            (Some(label), _) => label,
            (None, NodeKind::Group(combinator)) => combinator.as_str(),
            // Unreachable by construction; conditions always carry a label.
            (None, NodeKind::Condition) => "",
        }
    }

    /// The node's children, in order. Empty for conditions and previews.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Rebuilds this node with a replacement child list.
    ///
    /// Internal to the pure transforms; keeping it crate-private is what
    /// keeps "conditions are leaves" a construction-time fact.
    pub(crate) fn with_children(&self, children: Vec<Self>) -> Self {
        Self {
            id: self.id,
            kind: self.kind,
            label: self.label.clone(),
            children,
        }
    }
}

/// A titled query: an ordered forest of top-level nodes.
///
/// `Query` is a thin convenience wrapper over the crate's slice transforms;
/// each method returns a new `Query` value and leaves
/// `self` untouched, so any number of views can read one snapshot while the
/// container swaps in the next.
///
/// # Example
///
/// ```
/// use thicket_query_tree::{Combinator, IdAllocator, Node, Placement, Query};
///
/// let mut ids = IdAllocator::new();
/// let group = Node::group(ids.allocate(), Combinator::And);
/// let group_id = group.id();
/// let cond = Node::condition(ids.allocate(), "x > 5").unwrap();
/// let cond_id = cond.id();
///
/// let query = Query::new("Q")
///     .insert(Placement::TopLevel, group)
///     .insert(Placement::Under(group_id), cond);
///
/// assert_eq!(query.locate(cond_id).unwrap().label(), Some("x > 5"));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Query {
    title: String,
    roots: Vec<Node>,
}

impl Query {
    /// Creates an empty query with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            roots: Vec::new(),
        }
    }

    /// Creates a query from a title and an existing forest.
    #[must_use]
    pub fn from_parts(title: impl Into<String>, roots: Vec<Node>) -> Self {
        Self {
            title: title.into(),
            roots,
        }
    }

    /// The query's title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The top-level nodes, in order.
    #[must_use]
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// Returns `true` when the forest has no nodes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Rebuilds the query around a replacement forest, keeping the title.
    ///
    /// This is the seam the drag-gesture layer uses: its transforms work on
    /// plain node slices and the container folds the result back in here.
    #[must_use]
    pub fn with_roots(&self, roots: Vec<Node>) -> Self {
        Self {
            title: self.title.clone(),
            roots,
        }
    }

    /// Finds the node with `id` anywhere in the forest. See [`locate`](crate::locate).
    #[must_use]
    pub fn locate(&self, id: NodeId) -> Option<&Node> {
        ops::locate(&self.roots, id)
    }

    /// Returns a new query with the node `id` (and its subtree) excised.
    /// See [`remove`](crate::remove).
    #[must_use]
    pub fn remove(&self, id: NodeId) -> Self {
        self.with_roots(ops::remove(&self.roots, id))
    }

    /// Returns a new query with `node` inserted at `placement`.
    /// See [`insert`](crate::insert).
    #[must_use]
    pub fn insert(&self, placement: Placement, node: Node) -> Self {
        self.with_roots(ops::insert(&self.roots, placement, node))
    }

    /// Returns a new query with the node `source` moved to `placement`.
    /// See [`relocate`](crate::relocate) for the precondition on self-subtree targets.
    #[must_use]
    pub fn relocate(&self, source: NodeId, placement: Placement) -> Self {
        self.with_roots(ops::relocate(&self.roots, source, placement))
    }
}
