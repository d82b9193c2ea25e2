// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legality checks for relocations.
//!
//! [`relocate`](crate::relocate) itself is deliberately unguarded: it is the
//! plain remove-then-insert composition, and pointing it into the source's
//! own subtree silently loses the node. These checks turn that hazard into
//! an explicit, reportable rejection; run them before committing a move.

use core::fmt;

use crate::id::NodeId;
use crate::node::Node;
use crate::ops::{Placement, locate, preorder};

/// Why a relocation was rejected. The tree is unchanged in every case.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MoveRejection {
    /// The target is the source itself.
    SelfTarget,
    /// The target sits inside the source's own subtree; committing would
    /// silently drop the source (see [`relocate`](crate::relocate)).
    IntoOwnSubtree,
    /// No node with the target id exists in the forest.
    TargetMissing,
    /// The target is a condition; conditions never accept children.
    TargetNotGroup,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::SelfTarget => "target is the dragged node itself",
            Self::IntoOwnSubtree => "target is inside the dragged node's own subtree",
            Self::TargetMissing => "target id does not exist in the forest",
            Self::TargetNotGroup => "target is a condition and cannot take children",
        };
        f.write_str(reason)
    }
}

impl core::error::Error for MoveRejection {}

/// Returns `true` if `id` names a strict descendant of `ancestor`.
///
/// `false` when either id is absent, and `false` for `id == ancestor` (a
/// node is not its own descendant).
#[must_use]
pub fn is_descendant(nodes: &[Node], ancestor: NodeId, id: NodeId) -> bool {
    locate(nodes, ancestor)
        .is_some_and(|node| preorder(node.children()).any(|descendant| descendant.id() == id))
}

/// Checks whether moving `source` to `placement` is legal.
///
/// [`Placement::TopLevel`] is always legal. For [`Placement::Under`], the
/// target must exist, be a group, and lie outside `source`'s subtree. A
/// missing *source* is not a rejection: [`relocate`](crate::relocate)
/// degrades to a no-op for it, matching the rest of the crate.
pub fn check_relocation(
    nodes: &[Node],
    source: NodeId,
    placement: Placement,
) -> Result<(), MoveRejection> {
    let Placement::Under(target) = placement else {
        return Ok(());
    };
    if target == source {
        return Err(MoveRejection::SelfTarget);
    }
    let Some(target_node) = locate(nodes, target) else {
        return Err(MoveRejection::TargetMissing);
    };
    if !target_node.is_group() {
        return Err(MoveRejection::TargetNotGroup);
    }
    if is_descendant(nodes, source, target) {
        return Err(MoveRejection::IntoOwnSubtree);
    }
    Ok(())
}
