//! Test fixtures for rectab development.
//!
//! Provides prebuilt tables ([`sequential_table`], [`cyclic_cayley_table`])
//! and layout assertions ([`assert_row_major`]) shared by the integration
//! tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{assert_row_major, cyclic_cayley_table, sequential_table};
