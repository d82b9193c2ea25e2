// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node identifiers and the allocator for fresh real ids.

use core::fmt;

/// Identifier of a node in a query forest.
///
/// Ids come in two namespaces:
///
/// - [`NodeId::Real`] identifies a committed node. Real ids are handed out by
///   an [`IdAllocator`] and are unique within a forest at all times.
/// - [`NodeId::Preview`] identifies the disposable drop-preview ghost derived
///   from the real node it wraps. Preview-ness is a fact of the type, so a
///   preview id can never collide with a real id, no matter how large real
///   ids grow.
///
/// At most one preview exists at a time (one per drag gesture), and it never
/// survives the gesture that created it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NodeId {
    /// A committed node, identified by an allocator-issued integer.
    Real(u64),
    /// The drop-preview ghost derived from the real node with the given integer.
    Preview(u64),
}

impl NodeId {
    /// Returns `true` if this id names a drop-preview ghost.
    #[must_use]
    pub const fn is_preview(self) -> bool {
        matches!(self, Self::Preview(_))
    }

    /// Derives the preview id for this real id.
    ///
    /// Returns `None` when `self` is already a preview id: previews are never
    /// themselves dragged, so no second-order ghost exists.
    #[must_use]
    pub const fn preview(self) -> Option<Self> {
        match self {
            Self::Real(raw) => Some(Self::Preview(raw)),
            Self::Preview(_) => None,
        }
    }

    /// Returns the real id this id refers to.
    ///
    /// For a real id this is the id itself; for a preview id it is the id of
    /// the node the ghost was derived from.
    #[must_use]
    pub const fn source(self) -> Self {
        match self {
            Self::Real(raw) | Self::Preview(raw) => Self::Real(raw),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(raw) => write!(f, "{raw}"),
            Self::Preview(raw) => write!(f, "preview({raw})"),
        }
    }
}

/// Allocator for fresh [`NodeId::Real`] ids.
///
/// Hands out strictly increasing integers. The allocator is owned by the
/// embedding container and passed to whatever creates nodes; the crate keeps
/// no global counter. Two live nodes built from the same allocator can never
/// share an id.
///
/// # Example
///
/// ```
/// use thicket_query_tree::{IdAllocator, NodeId};
///
/// let mut ids = IdAllocator::new();
/// assert_eq!(ids.allocate(), NodeId::Real(1));
/// assert_eq!(ids.allocate(), NodeId::Real(2));
/// ```
#[derive(Clone, Debug)]
pub struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    /// Creates an allocator whose first id is `1`.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates an allocator whose first id is `first`.
    ///
    /// Useful when the container seeds ids above a preexisting forest.
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Allocates the next real id.
    pub fn allocate(&mut self) -> NodeId {
        let id = NodeId::Real(self.next);
        self.next += 1;
        id
    }
}
