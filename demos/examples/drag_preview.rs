// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replays one drag-and-drop gesture, event by event, printing the tree
//! after each transition so the preview ghost is visible while it exists.

use thicket_demos::render;
use thicket_drag::gesture::{self, DropOutcome};
use thicket_drag::session::DragSession;
use thicket_query_tree::{Combinator, IdAllocator, Node, Placement, Query};

fn main() {
    let mut ids = IdAllocator::new();

    let and = Node::group(ids.allocate(), Combinator::And);
    let and_id = and.id();
    let or = Node::group(ids.allocate(), Combinator::Or);
    let or_id = or.id();
    let cond = Node::condition(ids.allocate(), "active = true").expect("label is non-empty");
    let cond_id = cond.id();

    let query = Query::new("Audience")
        .insert(Placement::TopLevel, and)
        .insert(Placement::TopLevel, or)
        .insert(Placement::TopLevel, cond);
    println!("initial:\n{}", render(&query));

    // drag-start: grab the condition.
    let mut session = DragSession::new();
    session.begin(query.locate(cond_id).cloned().expect("node exists"));

    // hover-enter over the AND group: the ghost appears under it.
    let step = gesture::hover_enter(&session, query.roots(), and_id);
    println!("hovering AND:\n{}", render(&query.with_roots(step.clone())));

    // hover-leave, then enter the OR group instead.
    let step = gesture::hover_leave(&session, &step);
    let step = gesture::hover_enter(&session, &step, or_id);
    println!("hovering OR:\n{}", render(&query.with_roots(step.clone())));

    // drop: the ghost vanishes and the real node moves.
    let (roots, outcome) = gesture::drop_on(&mut session, &step, or_id);
    let query = query.with_roots(roots);
    assert_eq!(outcome, DropOutcome::Completed);
    println!("dropped on OR:\n{}", render(&query));
}
