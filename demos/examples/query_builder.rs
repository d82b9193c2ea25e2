// Copyright 2026 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builds a small query the way a view container would: an id allocator
//! owned here, nodes created on "Add" clicks, and removals by id.

use thicket_demos::render;
use thicket_query_tree::{Combinator, IdAllocator, Node, Placement, Query};

fn main() {
    // The container owns the allocator; the core never keeps a counter.
    let mut ids = IdAllocator::new();

    let audience = Node::group(ids.allocate(), Combinator::And);
    let audience_id = audience.id();
    let query = Query::new("Audience").insert(Placement::TopLevel, audience);

    let country = Node::condition(ids.allocate(), "country = DE").expect("label is non-empty");
    let country_id = country.id();
    let query = query.insert(Placement::Under(audience_id), country);

    let age = Node::group(ids.allocate(), Combinator::Or);
    let age_id = age.id();
    let query = query.insert(Placement::Under(audience_id), age);
    let minor = Node::condition(ids.allocate(), "age < 18").expect("label is non-empty");
    let senior = Node::condition(ids.allocate(), "age > 65").expect("label is non-empty");
    let query = query
        .insert(Placement::Under(age_id), minor)
        .insert(Placement::Under(age_id), senior);

    println!("{}", render(&query));

    // Removing the country condition leaves the rest untouched; removing
    // the age group takes both of its conditions with it.
    let query = query.remove(country_id);
    let query = query.remove(age_id);
    println!("after pruning:\n{}", render(&query));
}
