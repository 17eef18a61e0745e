//! Table-specific error types.

use std::error::Error;
use std::fmt;

/// Errors returned by the checked table operations.
///
/// The panicking accessors ([`RectTable::get`](crate::RectTable::get),
/// [`RectTable::set`](crate::RectTable::set), indexing) enforce the same
/// rules and report the same conditions through their panic message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    /// A table was requested with zero columns.
    ZeroColumns,
    /// A `(row, col)` pair lies outside the logical extent of the table.
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Logical row count at the time of the access.
        rows: usize,
        /// Column count of the table.
        cols: usize,
    },
    /// `set_row_count` asked for more rows than the backing store holds.
    RowCountExceedsStorage {
        /// Number of logical rows requested.
        requested: usize,
        /// Number of complete rows present in the backing store.
        available: usize,
    },
    /// A row builder already holds a full row.
    RowFull {
        /// Column count of the table.
        cols: usize,
    },
    /// A row builder was finished before the row was complete.
    IncompleteRow {
        /// Number of values staged so far.
        staged: usize,
        /// Number of values a row requires.
        expected: usize,
    },
    /// A row builder tried to commit while the store held elements past the
    /// logical extent.
    UnalignedStore {
        /// Number of elements in the backing store.
        size: usize,
        /// Logical row count.
        rows: usize,
        /// Column count of the table.
        cols: usize,
    },
    /// `rows * cols` does not fit in `usize`.
    CapacityOverflow {
        /// Requested row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroColumns => write!(f, "table must have at least one column"),
            Self::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "index ({row}, {col}) out of bounds for table of {rows} rows x {cols} columns"
                )
            }
            Self::RowCountExceedsStorage {
                requested,
                available,
            } => {
                write!(
                    f,
                    "cannot set row count to {requested}: backing store holds {available} rows"
                )
            }
            Self::RowFull { cols } => {
                write!(f, "row already holds {cols} values")
            }
            Self::IncompleteRow { staged, expected } => {
                write!(f, "incomplete row: {staged} of {expected} values staged")
            }
            Self::UnalignedStore { size, rows, cols } => {
                write!(
                    f,
                    "store of {size} elements does not match {rows} rows x {cols} columns"
                )
            }
            Self::CapacityOverflow { rows, cols } => {
                write!(f, "{rows} rows x {cols} columns overflows usize")
            }
        }
    }
}

impl Error for TableError {}
