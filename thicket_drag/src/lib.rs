// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thicket_drag --heading-base-level=0

//! Thicket Drag: drag-session state and drop-preview gestures for query
//! trees.
//!
//! This crate layers the transient state of one drag-and-drop gesture on
//! top of the pure tree transforms in [`thicket_query_tree`]. It does not
//! assume any particular UI framework or input system; it consumes three
//! logical events, however the embedding application produces them:
//!
//! - **drag start**: the user grabbed a node. [`session::DragSession::begin`]
//!   stores a snapshot of it.
//! - **hover enter / leave**: the pointer crossed a candidate drop target.
//!   [`gesture::hover_enter`] places a disposable preview ghost under the
//!   target so the user sees where the node would land;
//!   [`gesture::hover_leave`] strips it again.
//! - **drop / abort**: the gesture ended. [`gesture::drop_on`] commits the
//!   real move (or reports why it was rejected); [`gesture::cancel`] rolls
//!   everything back. Both clear the session and strip any live ghost on
//!   every exit path.
//!
//! Everything runs synchronously in response to one event; one gesture is
//! in flight at a time.
//!
//! ## Minimal example
//!
//! ```
//! use thicket_drag::gesture::{self, DropOutcome};
//! use thicket_drag::session::DragSession;
//! use thicket_query_tree::{Combinator, IdAllocator, Node, Placement, insert, locate};
//!
//! let mut ids = IdAllocator::new();
//! let group = Node::group(ids.allocate(), Combinator::And);
//! let group_id = group.id();
//! let cond = Node::condition(ids.allocate(), "x > 5").unwrap();
//! let cond_id = cond.id();
//!
//! let forest = insert(&[], Placement::TopLevel, group);
//! let forest = insert(&forest, Placement::TopLevel, cond);
//!
//! // The user grabs the condition...
//! let mut session = DragSession::new();
//! session.begin(locate(&forest, cond_id).cloned().unwrap());
//!
//! // ...hovers over the group: a preview ghost appears under it...
//! let previewing = gesture::hover_enter(&session, &forest, group_id);
//! assert!(locate(&previewing, cond_id.preview().unwrap()).is_some());
//!
//! // ...and drops. The ghost is gone, the move is real, the session clear.
//! let (forest, outcome) = gesture::drop_on(&mut session, &previewing, group_id);
//! assert_eq!(outcome, DropOutcome::Completed);
//! assert!(locate(&forest, cond_id.preview().unwrap()).is_none());
//! assert_eq!(locate(&forest, group_id).unwrap().children().len(), 1);
//! assert!(!session.is_active());
//! ```
//!
//! ## Rollback
//!
//! A gesture that ends without a valid drop must leave no trace. Both exit
//! paths share one cleanup routine, so there is no sequence of events that
//! leaks a ghost into the committed tree or stale state into the next
//! gesture:
//!
//! ```
//! use thicket_drag::{gesture, session::DragSession};
//! use thicket_query_tree::{Combinator, IdAllocator, Node, Placement, insert, locate};
//!
//! let mut ids = IdAllocator::new();
//! let group = Node::group(ids.allocate(), Combinator::Or);
//! let group_id = group.id();
//! let cond = Node::condition(ids.allocate(), "y < 2").unwrap();
//!
//! let forest = insert(&[], Placement::TopLevel, group);
//! let forest = insert(&forest, Placement::TopLevel, cond.clone());
//!
//! let mut session = DragSession::new();
//! session.begin(cond);
//! let previewing = gesture::hover_enter(&session, &forest, group_id);
//!
//! // Pointer leaves the window: abort.
//! let restored = gesture::cancel(&mut session, &previewing);
//! assert_eq!(restored, forest);
//! assert!(!session.is_active());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod gesture;
pub mod session;
