//! Growable row-major rectangular tables.
//!
//! Provides [`RectTable`], a dense two-dimensional table with a fixed column
//! count that grows one block of rows at a time. It is the storage primitive
//! for algorithms that build tabular data incrementally: enumeration tables,
//! Cayley and transition tables, relation matrices.
//!
//! # Layout
//!
//! ```text
//! RectTable<T> (cols = 3)
//! ├── data: Vec<T>   [ r0c0 r0c1 r0c2 | r1c0 r1c1 r1c2 | ... ]
//! ├── cols           fixed at construction
//! └── rows           logical extent, <= data.len() / cols
//! ```
//!
//! # Growth
//!
//! - [`RectTable::expand`] appends rows filled with [`Unset::UNSET`].
//! - [`RowBuilder`] stages one row of real values and appends it whole.
//! - [`RectTable::set_row_count`] reinterprets already allocated storage as
//!   a different number of logical rows.
//!
//! # Bounds
//!
//! Every access is checked against the logical extent in all build
//! profiles. [`RectTable::get`], [`RectTable::set`] and indexing panic on a
//! bad index; [`RectTable::try_get`] and [`RectTable::try_set`] return
//! [`TableError::OutOfBounds`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod error;
pub mod sentinel;
pub mod table;

pub use builder::RowBuilder;
pub use error::TableError;
pub use sentinel::Unset;
pub use table::RectTable;
