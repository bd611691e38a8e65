//! This crate is a small library of generic containers, built around one idea: a concrete
//! collection, a capability trait describing the least that collection must be able to do, and
//! generic algorithms written against the capability instead of the type.
//!
//! # Purpose
//! I wrote this crate as a learning exercise, to pin down how Rust expresses the patterns that
//! other languages solve with protocols, associated types and conditional conformance. A named
//! set of required operations becomes a trait over a type parameter
//! ([`Container`](collections::traits::Container)), and "this query exists only when the elements
//! can be compared" becomes a bounded impl block or a bounded free function
//! ([`all_items_match`](collections::traits::all_items_match)) rather than a conditional
//! extension. [`Stack`](collections::stack::Stack) is the concrete half of the exercise.
//!
//! # Method
//! [`Stack`](collections::stack::Stack) manages its own allocation with raw pointers rather than
//! wrapping [`Vec`], because writing the allocation, growth and drop handling myself was most of
//! the point. Conversions to and from [`Vec`] are provided at the boundary instead, where the
//! matching layouts make them cheap.
//!
//! # Error Handling
//! Failures a caller can provoke (popping an empty stack, indexing past the end) are returned as
//! strongly typed errors rather than panics or sentinels, using enums for static dispatch with
//! structs that implement [`Error`](std::error::Error). Absence which isn't a failure (peeking an
//! empty stack) is an [`Option`] instead. The one exception is capacity: a push that would need a
//! memory layout larger than [`isize::MAX`] panics, because nobody wants to handle that error on
//! every push.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming. Everything else is `std`.
//!
//! # Potential Future Additions
//! - A queue with the same capability split
//! - A borrowed cursor type for walking a [`Stack`](collections::stack::Stack) from the top
#![feature(strict_overflow_ops)]
#![feature(box_vec_non_null)]
#![feature(extend_one)]
#![feature(extend_one_unchecked)]
#![feature(trusted_len)]
#![feature(debug_closure_helpers)]
#![feature(doc_cfg)]

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
