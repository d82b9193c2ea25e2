// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hover/drop state machine for one drag gesture.
//!
//! Pure transforms, like the tree operations they compose: each takes the
//! current forest and returns the next one, and the container swaps the
//! result in. The gesture lifecycle is
//!
//! 1. [`DragSession::begin`] with a snapshot of the grabbed node.
//! 2. Zero or more [`hover_enter`] / [`hover_leave`] pairs, which place and
//!    strip the drop-preview ghost under candidate groups.
//! 3. Exactly one of [`drop_on`] or [`cancel`], both of which strip any live
//!    ghost and clear the session. There is no exit path that leaves either
//!    behind, and the cleanup is written once (the private `release`) rather
//!    than per call site.

use alloc::vec::Vec;

use thicket_query_tree::{
    MoveRejection, Node, NodeId, Placement, check_relocation, insert, is_descendant, locate,
    relocate, remove,
};

use crate::session::DragSession;

/// What came of a drop.
///
/// In every case the session has been cleared and no preview ghost remains;
/// the outcome only reports whether the tree itself changed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DropOutcome {
    /// The move was legal and has been applied.
    Completed,
    /// The move was illegal and the tree is unchanged.
    Rejected(MoveRejection),
    /// No drag was in flight; the drop event was stale.
    NoActiveDrag,
}

/// Strips the current gesture's preview ghost, if one is in the forest.
fn strip_preview(dragged: Option<&Node>, nodes: &[Node]) -> Vec<Node> {
    match dragged.and_then(|node| node.id().preview()) {
        Some(ghost) => remove(nodes, ghost),
        None => nodes.to_vec(),
    }
}

/// The one place a gesture ends: strip any live ghost, clear the session.
///
/// Hands back the cleaned forest and the dragged snapshot so [`drop_on`]
/// can still commit the real move.
fn release(session: &mut DragSession, nodes: &[Node]) -> (Vec<Node>, Option<Node>) {
    let cleaned = strip_preview(session.current(), nodes);
    (cleaned, session.end())
}

/// Handles the pointer entering a candidate drop target.
///
/// Inserts the dragged node's preview ghost under `target` so the user sees
/// where the drop would land. The forest comes back unchanged when:
///
/// - no drag is in flight (stale hover event),
/// - `target` is the dragged node itself, is not a group, or sits inside
///   the dragged node's own subtree (the drop would be rejected, so no
///   preview is shown for it), or
/// - the ghost is already in the forest (hover events repeat; one insert is
///   enough).
#[must_use]
pub fn hover_enter(session: &DragSession, nodes: &[Node], target: NodeId) -> Vec<Node> {
    let Some(dragged) = session.current() else {
        return nodes.to_vec();
    };
    let Some(ghost) = dragged.preview() else {
        return nodes.to_vec();
    };

    let target_is_droppable = target != dragged.id()
        && locate(nodes, target).is_some_and(Node::is_group)
        && !is_descendant(nodes, dragged.id(), target);
    if !target_is_droppable || locate(nodes, ghost.id()).is_some() {
        return nodes.to_vec();
    }

    insert(nodes, Placement::Under(target), ghost)
}

/// Handles the pointer leaving a candidate drop target entirely.
///
/// Strips the preview ghost; a no-op when no drag is in flight or no ghost
/// was placed.
#[must_use]
pub fn hover_leave(session: &DragSession, nodes: &[Node]) -> Vec<Node> {
    strip_preview(session.current(), nodes)
}

/// Commits the drag: the dragged node is reparented under `target`.
///
/// The ghost is stripped and the session cleared unconditionally, before
/// legality is even considered; a rejected drop still ends the gesture. The
/// move itself runs only after [`check_relocation`] passes, so an illegal
/// target becomes an explicit [`DropOutcome::Rejected`] with the tree
/// unchanged instead of a silently lost subtree.
#[must_use]
pub fn drop_on(
    session: &mut DragSession,
    nodes: &[Node],
    target: NodeId,
) -> (Vec<Node>, DropOutcome) {
    let (cleaned, dragged) = release(session, nodes);
    let Some(dragged) = dragged else {
        return (cleaned, DropOutcome::NoActiveDrag);
    };

    let placement = Placement::Under(target);
    match check_relocation(&cleaned, dragged.id(), placement) {
        Ok(()) => (
            relocate(&cleaned, dragged.id(), placement),
            DropOutcome::Completed,
        ),
        Err(rejection) => (cleaned, DropOutcome::Rejected(rejection)),
    }
}

/// Aborts the drag: pointer left the window, gesture cancelled, or drop
/// landed outside any valid target.
///
/// Strips any live ghost and clears the session; the tree is otherwise
/// unchanged. Safe to call with no drag in flight.
#[must_use]
pub fn cancel(session: &mut DragSession, nodes: &[Node]) -> Vec<Node> {
    release(session, nodes).0
}
