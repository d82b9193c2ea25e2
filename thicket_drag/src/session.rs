// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single-slot drag session.

use thicket_query_tree::Node;

/// Holder of the node currently being dragged, if any.
///
/// Dragging is a singly focused gesture: at most one drag is ever active, so
/// the session is a single slot. The slot is an explicit value owned by the
/// embedding container and passed by reference to whatever handles gesture
/// events; nothing in this crate keeps global state.
///
/// Every candidate drop target reads the same session while a gesture is in
/// flight, and every path that ends a gesture must clear it (the
/// [`gesture`](crate::gesture) transforms do this for you). A stale slot
/// would leak the previous gesture's node into the next one.
#[derive(Clone, Debug, Default)]
pub struct DragSession {
    dragged: Option<Node>,
}

impl DragSession {
    /// Creates an empty session.
    #[must_use]
    pub const fn new() -> Self {
        Self { dragged: None }
    }

    /// Starts a drag, storing a snapshot of the dragged node.
    ///
    /// Overwrites any prior value; a new gesture beginning implies the old
    /// one is over, however it ended.
    pub fn begin(&mut self, node: Node) {
        self.dragged = Some(node);
    }

    /// The node currently being dragged, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Node> {
        self.dragged.as_ref()
    }

    /// Returns `true` while a drag is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.dragged.is_some()
    }

    /// Ends the drag, clearing the slot and handing back the snapshot.
    ///
    /// Safe to call on an empty session.
    pub fn end(&mut self) -> Option<Node> {
        self.dragged.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thicket_query_tree::{Combinator, IdAllocator, Node, NodeId};

    #[test]
    fn new_session_is_not_active() {
        let session = DragSession::new();
        assert!(!session.is_active());
        assert!(session.current().is_none());
    }

    #[test]
    fn begin_stores_the_snapshot() {
        let mut ids = IdAllocator::new();
        let node = Node::condition(ids.allocate(), "x > 5").unwrap();
        let id = node.id();

        let mut session = DragSession::new();
        session.begin(node);

        assert!(session.is_active());
        assert_eq!(session.current().unwrap().id(), id);
    }

    #[test]
    fn begin_overwrites_a_previous_drag() {
        let mut ids = IdAllocator::new();
        let first = Node::condition(ids.allocate(), "a").unwrap();
        let second = Node::group(ids.allocate(), Combinator::Or);

        let mut session = DragSession::new();
        session.begin(first);
        session.begin(second);

        assert_eq!(session.current().unwrap().id(), NodeId::Real(2));
    }

    #[test]
    fn end_clears_and_returns_the_snapshot() {
        let mut ids = IdAllocator::new();
        let node = Node::condition(ids.allocate(), "x > 5").unwrap();
        let id = node.id();

        let mut session = DragSession::new();
        session.begin(node);

        let snapshot = session.end();
        assert_eq!(snapshot.unwrap().id(), id);
        assert!(!session.is_active());
    }

    #[test]
    fn end_on_an_empty_session_is_safe() {
        let mut session = DragSession::new();
        assert!(session.end().is_none());
        assert!(!session.is_active());
    }
}
