//! Shared types and utilities for twine.
//!
//! Everything in this crate is a pure function or a plain value type with no
//! shared state, so it is safe to call from any number of threads.
//!
//! # Architecture
//!
//! - [`character`] -- Character classification (vowels, word letters) and uppercasing
//! - [`code`] -- The [`DualCode`] pair produced by the phonetic encoder
//! - [`distance`] -- Unit-cost edit distance over Unicode code points

pub mod character;
pub mod code;
pub mod distance;

pub use code::DualCode;
pub use distance::edit_distance;
