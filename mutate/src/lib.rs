//! Copy-and-mutate helpers.
//!
//! This crate provides one operation in two spellings: take a value, apply an
//! in-place transformation to a private copy of it, and hand the copy back.
//! The original is never touched.
//!
//! - **`with_mutation`**: free function over `&T`
//! - **`Mutate`**: the same operation as a method on every `Clone` type, plus an
//!   owned-receiver form that skips the clone
//!
//! ```
//! use copy_mutate::Mutate;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Point {
//!     x: i64,
//!     y: i64,
//! }
//!
//! let origin = Point { x: 1, y: 2 };
//! let moved = origin.with_mutation(|p| p.x = 99);
//!
//! assert_eq!(origin, Point { x: 1, y: 2 });
//! assert_eq!(moved, Point { x: 99, y: 2 });
//! ```

pub mod mutation;

pub use mutation::{Mutate, with_mutation};
