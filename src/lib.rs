//! A dynamically growable bit vector written in pure Rust.
//! `no_std` (with `alloc`), no `unsafe`.
//!
//! [`BitVec`] is the main struct in this library. It packs boolean flags
//! into 32-bit words and auto-extends to cover the highest index ever
//! written: reads past the materialized words return `false`, writes past
//! them grow the word array with zeros first, and the array never shrinks.
//!
//! # Examples
//! ```
//! use elastic_bitvec::BitVec;
//!
//! let mut bv = BitVec::new();
//! assert_eq!(bv.popcount(), 0);
//! assert!(!bv.get(1000));
//! bv.set(1000);
//! assert!(bv.get(1000));
//! assert_eq!(bv.popcount(), 1);
//! ```
//!
//! # Use Cases
//!
//! - Flag collections indexed by unbounded non-negative integers
//! - Set-like workloads over dense small-integer universes
//! - Not suited for sparse universes with huge indices (storage is dense up
//!   to the highest index written) or for concurrent mutation (callers
//!   synchronize externally)
//!
//! # Features
//!
//! - `no_std` compatible (`alloc` only outside tests)
//! - Single-bit operations: `get`, `set`, `unset`, `set_to`
//! - Set-style membership: `contains`, `insert`, `remove`
//! - Range operations: `set_range`, `unset_range`, `set_all`, `clear`
//! - In-place set algebra with optional operands: `and`, `or`, `xor`, `not`
//! - Predicates: `is_empty`, `intersects`, `is_superset`, `equals`,
//!   a prefix `compare`
//! - Derived values: `popcount`, `hash_code`, `to_radix_string`
//! - Iteration: `iter()` (all materialized bits as bools), `iter_ones()`
//!   (ascending set-bit indices), `entries()`, `for_each_one()`
//! - Operator support for `&BitVec`: `&`, `|`, `^`, `!`, `&=`, `|=`, `^=`

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod bitvec;

pub use bitvec::{BitVec, BitVecIter, Entries, IterOnes, WORD_BITS, word_count};
