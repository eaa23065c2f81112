//! An order-statistic red-black tree map for Rust.
//!
//! [`OSRBTreeMap`] is an ordered key-value map kept balanced as a red-black
//! tree whose nodes also record the size of their subtree. That one extra
//! field turns two questions that are O(n) on a plain ordered map into
//! O(log n) ones:
//!
//! - [`order_of_key`](OSRBTreeMap::order_of_key) - how many keys sort before a given key
//! - [`find_by_order`](OSRBTreeMap::find_by_order) - which entry sits at a given sorted position
//!
//! Lookups hand back a [`Cursor`] that can step to neighbouring entries in
//! either direction.
//!
//! # Example
//!
//! ```
//! use osrb_tree::{OSRBTreeMap, Rank};
//!
//! let mut latencies = OSRBTreeMap::new();
//! for (ms, request) in [(120, "b"), (15, "a"), (480, "d"), (230, "c"), (75, "e")] {
//!     latencies.insert(ms, request);
//! }
//!
//! // The median entry.
//! let median = latencies.find_by_order(latencies.len() / 2).unwrap();
//! assert_eq!(median.key_value(), (&120, &"b"));
//!
//! // How many requests finished in under 200ms?
//! assert_eq!(latencies.order_of_key(&200), 3);
//!
//! // The slowest request no slower than 300ms, and the one after it.
//! let mut cursor = latencies.upper_bound(&300).unwrap();
//! assert_eq!(*cursor.key(), 230);
//! assert!(cursor.move_next());
//! assert_eq!(*cursor.value(), "d");
//!
//! // Index by rank.
//! assert_eq!(latencies[Rank(0)], "a");
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **No unsafe code** - Nodes live in an index-addressed arena
//! - **Custom ordering** - Any `Fn(&K, &K) -> Ordering` can order the keys
//! - **Discard hook** - Entries the map throws away can be handed to a caller-supplied destructor
//!
//! # Implementation
//!
//! Nodes are stored in a slot arena and link to each other by 32-bit
//! handles. Insertion and removal follow the classic red-black fixups; every
//! rotation recomputes the subtree sizes of the two nodes it moves, and every
//! structural change adjusts the sizes along the path to the root.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod compare;
mod order_statistic;
mod raw;

pub mod rbtree_map;

pub use compare::{Compare, Natural};
pub use order_statistic::Rank;
pub use rbtree_map::{Cursor, OSRBTreeMap};
